use proptest::prelude::*;
use trade_chart::data::TradeRecord;
use trade_chart::pipeline::{TradeBucket, normalize, partition};

fn action() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("OPEN"), Just("CLOSE"), Just("HOLD")]
}

fn side() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("BUY"), Just("SELL"), Just("")]
}

proptest! {
    #[test]
    fn partition_is_total_disjoint_and_stable(
        rows in proptest::collection::vec((action(), side(), 1.0f64..1_000.0), 0..128)
    ) {
        let records: Vec<TradeRecord> = rows
            .iter()
            .enumerate()
            .map(|(index, (action, side, price))| {
                TradeRecord::new(1_600_000_000.0 + index as f64 * 60.0, *price, *action, *side)
            })
            .collect();
        let timed = normalize(&records).expect("normalize");

        let buckets = partition(&timed);
        prop_assert_eq!(buckets.len(), records.len());

        for bucket in TradeBucket::ALL {
            let expected: Vec<f64> = records
                .iter()
                .filter(|record| TradeBucket::classify(&record.action, &record.side) == bucket)
                .map(|record| record.y)
                .collect();
            let actual: Vec<f64> = buckets.bucket(bucket).prices().collect();
            prop_assert_eq!(actual, expected);

            let times: Vec<_> = buckets.bucket(bucket).times().collect();
            prop_assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
