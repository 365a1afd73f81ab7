#[cfg(test)]
mod integration_tests {
    use rand::{Rng, SeedableRng};

    use crate::accessor::{accessor, default_x, default_y};
    use crate::frame::{Axis, ChartFrame};
    use crate::{NearestTracker, SpatialIndex};

    /// Reference answer: scan every point, keeping the first strictly closer one.
    fn brute_force_nearest(
        pixels: &[(f64, f64)],
        left: f64,
        top: f64,
        radius: f64,
    ) -> Option<f64> {
        let mut best = f64::INFINITY;
        for &(px, py) in pixels {
            let d = (px - left) * (px - left) + (py - top) * (py - top);
            if d < best {
                best = d;
            }
        }
        if best < radius * radius { Some(best) } else { None }
    }

    #[test]
    fn test_matches_brute_force_on_random_data() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
        let frame = ChartFrame::new(-50.0, 0.0, 150.0, 1000.0);
        let (width, height) = (640.0, 480.0);

        let data: Vec<(f64, f64)> = (0..2000)
            .map(|_| (rng.random_range(-50.0..150.0), rng.random_range(0.0..1000.0)))
            .collect();

        let mut index = SpatialIndex::new(&data, default_x(), default_y());
        index.set_scales(frame.x_scale(), frame.y_scale());

        let pixels: Vec<(f64, f64)> = data
            .iter()
            .map(|&(x, y)| {
                (
                    frame.x_scale().apply(x) * width / 100.0,
                    frame.y_scale().apply(y) * height / 100.0,
                )
            })
            .collect();

        for _ in 0..500 {
            let left = rng.random_range(-20.0..660.0);
            let top = rng.random_range(-20.0..500.0);
            let radius = if rng.random_bool(0.5) { f64::INFINITY } else { rng.random_range(1.0..30.0) };

            let expected = brute_force_nearest(&pixels, left, top, radius);
            let found = index.find_index(left, top, width, height, radius);

            match (expected, found) {
                (None, None) => {}
                (Some(best), Some(i)) => {
                    let (px, py) = pixels[i];
                    let d = (px - left) * (px - left) + (py - top) * (py - top);
                    assert!((d - best).abs() <= 1e-9 * best.max(1.0), "query ({left}, {top}) r={radius}: got {d}, expected {best}");
                }
                other => panic!("query ({left}, {top}) r={radius}: mismatch {other:?}"),
            }
        }
    }

    #[test]
    fn test_hover_flow_through_chart_frame() {
        // Life expectancy by year
        let data = vec![(1960.0, 52.6), (1980.0, 62.8), (2000.0, 67.5), (2020.0, 72.8)];
        let frame = ChartFrame::new(1960.0, 40.0, 2020.0, 80.0);
        let (width, height) = (600.0, 400.0);

        let mut index = SpatialIndex::new(&data, default_x(), default_y());
        index.update(default_x(), default_y(), frame.x_scale(), frame.y_scale());

        // Grid lines the chart would draw
        assert_eq!(frame.ticks(Axis::X, 3), vec![1960.0, 1980.0, 2000.0, 2020.0]);
        assert_eq!(frame.ticks(Axis::Y, 4), vec![40.0, 50.0, 60.0, 70.0, 80.0]);

        // Pointer just right of the 1980 point
        let pointer = frame.pointer(205.0, 170.0, width, height);
        assert!((pointer.x - 1980.5).abs() < 1e-9);

        let mut tracker = NearestTracker::new();
        let hit = index.find_index(pointer.left, pointer.top, width, height, 20.0);
        assert_eq!(hit, Some(1));
        assert_eq!(tracker.observe(hit), Some(Some(1)));

        // Small move, same point: no change reported
        let hit = index.find_index(201.0, 171.0, width, height, 20.0);
        assert_eq!(tracker.observe(hit), None);

        // Move into empty space
        let hit = index.find_index(450.0, 390.0, width, height, 20.0);
        assert_eq!(hit, None);
        assert_eq!(tracker.observe(hit), Some(None));

        // Zoom the x domain; the cached tree must not be reused
        let zoomed = ChartFrame::new(1990.0, 40.0, 2020.0, 80.0);
        index.set_scales(zoomed.x_scale(), zoomed.y_scale());
        let hit = index.find(200.0, 126.0, width, height, 20.0);
        assert_eq!(hit, Some(&(2000.0, 67.5)));
    }

    #[test]
    fn test_struct_items_with_custom_accessors() {
        #[derive(Debug, PartialEq)]
        struct Sample {
            label: &'static str,
            value: f64,
        }

        let data = vec![
            Sample { label: "a", value: 3.0 },
            Sample { label: "b", value: 9.0 },
            Sample { label: "c", value: 5.0 },
        ];
        let frame = ChartFrame::new(0.0, 0.0, 2.0, 10.0);

        let mut index = SpatialIndex::new(
            &data,
            accessor(|_: &Sample, i| i as f64),
            accessor(|s: &Sample, _| s.value),
        );
        index.set_scales(frame.x_scale(), frame.y_scale());

        // "b" sits at 50% across, 10% down
        let hit = index.find(50.0, 10.0, 100.0, 100.0, 3.0);
        assert_eq!(hit.map(|s| s.label), Some("b"));
    }
}
