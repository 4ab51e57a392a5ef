use chart_vega::core::{PlotKind, SceneChart, ShapePrimitive, extract};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rebuilt_histogram_columns_are_consistent(
        start in -1_000.0f64..1_000.0,
        width in 0.1f64..50.0,
        counts in proptest::collection::vec(0u32..500, 1..48),
        seed in any::<u64>()
    ) {
        let mut shapes: Vec<ShapePrimitive> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                ShapePrimitive::rectangle(start + i as f64 * width, 0.0, width, f64::from(*count))
            })
            .collect();
        // Deterministic shuffle so input order never matches x order by construction.
        let len = shapes.len();
        for i in 0..len {
            let j = ((seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(i as u64)) % len as u64) as usize;
            shapes.swap(i, j);
        }

        let chart = SceneChart::new().with_shapes(shapes);
        let table = extract(&chart, PlotKind::Histogram).expect("extract");
        let again = extract(&chart, PlotKind::Histogram).expect("extract again");
        prop_assert_eq!(&table, &again);

        prop_assert_eq!(table.row_count(), counts.len());
        let starts = table.numbers("bin_start").expect("bin_start");
        let ends = table.numbers("bin_end").expect("bin_end");
        let mids = table.numbers("x").expect("x");
        let observed: Vec<f64> = table.numbers("count").expect("count").to_vec();
        let expected: Vec<f64> = counts.iter().map(|c| f64::from(*c)).collect();
        prop_assert_eq!(observed, expected);

        for i in 0..starts.len() {
            prop_assert!(starts[i] < ends[i]);
            prop_assert!((mids[i] - (starts[i] + ends[i]) / 2.0).abs() <= 1e-9);
            if i + 1 < starts.len() {
                prop_assert_eq!(ends[i], starts[i + 1]);
            }
        }

        let density_sum: f64 = table.numbers("density").expect("density").iter().sum();
        if counts.iter().any(|c| *c > 0) {
            prop_assert!((density_sum - 1.0).abs() <= 1e-9);
        } else {
            prop_assert_eq!(density_sum, 0.0);
        }
    }
}
