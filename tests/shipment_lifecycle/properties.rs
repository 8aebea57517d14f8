//! Properties of the record lifecycle over arbitrary inputs.

use crate::common::*;
use proptest::prelude::*;
use shipledger::{codec, Shipment};

fn fields() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(any::<String>(), Shipment::FIELD_COUNT)
}

fn key() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_set_then_get_round_trips(key in key(), fields in fields()) {
        let executor = executor();
        let response = executor.invoke("set", record_args(&key, &fields));
        prop_assert_eq!(payload(response), key.clone().into_bytes());

        let stored = codec::decode(&get(&executor, &key)).unwrap();
        let expected: Vec<&str> = fields.iter().map(String::as_str).collect();
        prop_assert_eq!(stored.fields().to_vec(), expected);
        prop_assert_eq!(get(&executor, "lastKey"), key.into_bytes());
    }

    #[test]
    fn prop_duplicate_set_never_modifies(key in key(), first in fields(), second in fields()) {
        let executor = executor();
        payload(executor.invoke("set", record_args(&key, &first)));
        let before = get(&executor, &key);

        let response = executor.invoke("set", record_args(&key, &second));
        prop_assert!(!response.is_success());
        prop_assert_eq!(get(&executor, &key), before);
    }

    #[test]
    fn prop_wrong_argument_count_writes_nothing(count in 0usize..32, function in prop::sample::select(vec!["set", "edit"])) {
        prop_assume!(count != 15);
        let executor = executor();
        let args: Vec<String> = (0..count).map(|i| format!("a{}", i)).collect();

        let response = executor.invoke(function, args);
        prop_assert!(response.message().unwrap().starts_with("incorrect number of arguments"));
        prop_assert_eq!(executor.ledger().commit_count(), 0);
    }

    #[test]
    fn prop_range_is_sorted_and_bounded(
        keys in proptest::collection::btree_set("[a-f]{1,3}", 0..12),
        start in "[a-f]{1,2}",
        end in "[a-f]{1,2}",
    ) {
        let executor = executor();
        for key in &keys {
            payload(executor.invoke("edit", widget(key)));
        }

        let rendered = payload(executor.invoke("getAll", vec![start.clone(), end.clone()]));
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&rendered).unwrap();
        let got: Vec<String> = entries
            .iter()
            .map(|e| e["Key"].as_str().unwrap().to_string())
            .collect();

        let expected: Vec<String> = keys
            .iter()
            .filter(|k| k.as_str() >= start.as_str() && k.as_str() < end.as_str())
            .cloned()
            .collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(executor.ledger().open_iterators(), 0);
    }

    #[test]
    fn prop_history_follows_write_order(edits in proptest::collection::vec("[A-Z]{1,6}", 0..6)) {
        let executor = executor();
        payload(executor.invoke("set", widget("ship1")));
        for product in &edits {
            let mut fields: Vec<String> = WIDGET.iter().map(|f| f.to_string()).collect();
            fields[0] = product.clone();
            payload(executor.invoke("edit", record_args("ship1", &fields)));
        }

        let rendered = payload(executor.invoke("getHist", vec!["ship1".into()]));
        let history: Vec<serde_json::Value> = serde_json::from_slice(&rendered).unwrap();
        let products: Vec<&str> = history
            .iter()
            .map(|e| e["Value"]["producto"].as_str().unwrap())
            .collect();

        let mut expected = vec!["Widget"];
        expected.extend(edits.iter().map(String::as_str));
        prop_assert_eq!(products, expected);
    }
}
