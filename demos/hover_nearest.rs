//! Track the data point under a moving pointer.
//!
//! Simulates a pointer sweeping across a 600 x 400 chart and prints the
//! nearest point every time it changes.

use chartpick::prelude::*;

fn main() {
    // Life expectancy at birth, by year
    let data = vec![
        (1960.0, 52.6),
        (1970.0, 58.1),
        (1980.0, 62.8),
        (1990.0, 65.4),
        (2000.0, 67.5),
        (2010.0, 70.6),
        (2020.0, 72.8),
    ];
    let frame = ChartFrame::new(1960.0, 40.0, 2020.0, 80.0);
    let (width, height) = (600.0, 400.0);
    let radius = 30.0;

    let mut index = SpatialIndex::new(&data, default_x(), default_y());
    index.update(default_x(), default_y(), frame.x_scale(), frame.y_scale());

    let mut tracker = NearestTracker::new();

    println!("=== Hover Nearest Example ===\n");
    for step in 0..=60 {
        let left = f64::from(step) * 10.0;
        let top = 150.0;
        let pointer = frame.pointer(left, top, width, height);
        let hit = index.find_index(left, top, width, height, radius);

        if let Some(change) = tracker.observe(hit) {
            match change {
                Some(i) => println!(
                    "  pointer at year {:7.1}: nearest point {:?}",
                    pointer.x, data[i]
                ),
                None => println!("  pointer at year {:7.1}: nothing within {radius}px", pointer.x),
            }
        }
    }
    let _ = tracker.reset();
}
