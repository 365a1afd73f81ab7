//! Print grid ticks and their offsets for a few chart domains.

use chartpick::prelude::*;
use chartpick::tick_increment;

fn main() {
    println!("=== Axis Ticks Example ===\n");

    for (start, stop, count) in [(0.0, 1000.0, 5), (0.0, 1.0, 10), (-7.3, 41.9, 4), (2020.0, 1960.0, 3)] {
        let ticks = generate_ticks(start, stop, count);
        println!(
            "generate_ticks({start}, {stop}, {count}) -> {ticks:?} (increment {})",
            tick_increment(start.min(stop), start.max(stop), count)
        );
    }

    let frame = ChartFrame::new(1960.0, 40.0, 2020.0, 80.0);
    println!("\nx grid (percent from left):");
    for (tick, offset) in frame.tick_offsets(Axis::X, 6) {
        println!("  {tick:>6} at {offset:6.2}%");
    }
    println!("y grid (percent from top):");
    for (tick, offset) in frame.tick_offsets(Axis::Y, 4) {
        println!("  {tick:>6} at {offset:6.2}%");
    }
}
