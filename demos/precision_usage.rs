// ============================================================================
// Precision Usage Example
// ============================================================================

use property_precision::prelude::*;

struct Money;
struct Price;
struct Measurement;
struct Plain;

fn main() -> Result<(), MetadataError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Property Precision Example ===\n");

    // Schema construction: annotate once per property
    let cents = precision(2, None);
    cents.apply::<Money>("amount");
    precision(0, 3).apply::<Measurement>("value");

    MetadataStore::global().register_parent(ClassId::of::<Price>(), ClassId::of::<Money>())?;
    precision(0, 6).apply::<Price>("rate");

    println!("Money.amount       -> {}", precision_of::<Money>("amount"));
    println!("Measurement.value  -> {}", precision_of::<Measurement>("value"));
    println!("Plain.count        -> {}", precision_of::<Plain>("count"));
    println!("Price.amount       -> {} (inherited)", precision_of::<Price>("amount"));

    println!("\nAnnotated properties of Price:");
    for (property, spec) in precisions_in(MetadataStore::global(), ClassId::of::<Price>()) {
        println!("  {:<8} {}", property, spec);
    }

    Ok(())
}
