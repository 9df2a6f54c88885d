//! Walkthrough of the read-before-pop contract.
//!
//! Demonstrates: init → push until full → resize → read top → pop → stale
//! slot inspection → copy → teardown. Run with `RUST_LOG=slotstack=trace`
//! to see the library's events.

use slotstack::{ByteStack, StackError, TypedStack};
use slotstack_bench::{drain_read_before_pop, random_workload, run_with_doubling};
use slotstack_test_utils::fixtures::Point;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), StackError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== slotstack read-before-pop ===\n");

    let mut stack = ByteStack::init(2, 4)?;
    stack.push(&10u32.to_ne_bytes())?;
    stack.push(&20u32.to_ne_bytes())?;

    match stack.push(&30u32.to_ne_bytes()) {
        Err(StackError::Full { capacity }) => {
            println!("full at {capacity} slots, doubling");
            stack.resize(capacity * 2)?;
            stack.push(&30u32.to_ne_bytes())?;
        }
        other => other?,
    }
    println!("len={} capacity={}", stack.len(), stack.capacity());

    if let Some(top) = stack.top() {
        println!("top before pop: {top:?}");
    }
    stack.pop()?;
    println!("stale slot 2 after pop: {:?}", stack.slot(2));

    let mut copy = ByteStack::init(1, 4)?;
    copy.copy_from(&stack)?;
    println!("copy: len={} capacity={}", copy.len(), copy.capacity());
    println!("drained copy: {:?}", drain_read_before_pop(&mut copy)?);
    copy.teardown();

    let ops = random_workload(42, 1_000, 70);
    let mut grown = ByteStack::init(1, 4)?;
    let resizes = run_with_doubling(&mut grown, &ops)?;
    println!(
        "\nrandom workload: {} ops, {resizes} resizes, final len={} capacity={}",
        ops.len(),
        grown.len(),
        grown.capacity()
    );

    let mut points = TypedStack::<Point>::new(4)?;
    points.push(Point::new(1, 2))?;
    points.push(Point::new(3, 4))?;
    println!("\ntyped pop: {:?}", points.pop()?);
    println!("typed peek: {:?}", points.peek());

    Ok(())
}
