// ============================================================================
// Basic Usage Example
// ============================================================================

use decseq::generators::{arithmetic_range, geometric_range};
use decseq::prelude::*;

fn main() -> Result<(), SequenceError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== decseq Example ===\n");

    // Build a sequence and reshape it
    let mut seq = Sequence::new([1, 2, 3])?;
    println!("start:          {}", seq);

    seq.fadd(0)?;
    seq.badd(vec![4, 5])?;
    println!("fadd/badd:      {}", seq);

    // Broadcast arithmetic, both operand orders
    let shifted: Sequence = &seq + 10;
    println!("seq + 10:       {}", shifted);

    let inverted = 100 - &seq;
    println!("100 - seq:      {}", inverted);

    let paired = shifted.checked_add(&inverted)?;
    println!("elementwise:    {}", paired);

    // Statistics
    let mut sample = Sequence::new([5, 3, 1, 4, 2])?;
    println!("\nsample:         {}", sample);
    println!("minimum:        {}", sample.minimum()?);
    println!("maximum:        {}", sample.maximum()?);
    println!("mean:           {}", sample.mean()?);
    println!("median:         {}", sample.median()?);

    sample.order(Direction::Descending);
    println!("descending:     {}", sample);

    // Span mutation
    let mut spanned = Sequence::new([0, 1, 2, 3, 4])?;
    spanned.delete_span(Span::new(1, 3, 1))?;
    println!("\nspan delete:    {}", spanned);

    // Progressions
    let ramp = arithmetic_range(0, 3, 5)?;
    println!("\narithmetic:     {}", ramp);

    let curve = geometric_range(1, 3, 5)?;
    println!("geometric:      {}", curve);

    Ok(())
}
