use proptest::prelude::*;
use trade_chart::data::TradeRecord;
use trade_chart::pipeline::{normalize, slice_after, to_local_time};

proptest! {
    #[test]
    fn sliced_trades_are_strictly_after_reference(
        mut times in proptest::collection::vec(0i64..100_000, 0..64),
        reference in 0i64..100_000
    ) {
        times.sort_unstable();
        let records: Vec<TradeRecord> = times
            .iter()
            .map(|time| TradeRecord::new(*time as f64, 1.0, "OPEN", "BUY"))
            .collect();
        let timed = normalize(&records).expect("normalize");
        let reference_time = to_local_time(reference as f64).expect("reference");

        let sliced = slice_after(reference_time, &timed);
        prop_assert!(sliced.iter().all(|trade| trade.time > reference_time));

        let expected = times.iter().filter(|time| **time > reference).count();
        prop_assert_eq!(sliced.len(), expected);
    }
}
