//! The documented walkthrough, step by step.

use crate::common::*;
use shipledger::{codec, Shipment, STATUS_ERROR, STATUS_OK};

#[test]
fn test_documented_walkthrough() {
    let executor = executor();
    assert_eq!(executor.init().status(), STATUS_OK);

    // set on an absent key
    let response = executor.invoke("set", widget("ship1"));
    assert_eq!(response.status(), STATUS_OK);
    let inserted = Shipment::from_fields(WIDGET.map(String::from));
    assert_eq!(get(&executor, "ship1"), codec::encode(&inserted).unwrap());
    assert_eq!(get(&executor, "lastKey"), b"ship1");

    // identical set is refused, record unchanged
    let response = executor.invoke("set", widget("ship1"));
    assert_eq!(response.status(), STATUS_ERROR);
    assert_eq!(response.message(), Some("shipment already exists: ship1"));
    assert_eq!(get(&executor, "ship1"), codec::encode(&inserted).unwrap());

    // edit replaces, slot untouched
    let mut fields: Vec<String> = WIDGET.iter().map(|f| f.to_string()).collect();
    fields[11] = "OrgC".into();
    text(executor.invoke("edit", record_args("ship1", &fields)));
    let stored = codec::decode(&get(&executor, "ship1")).unwrap();
    assert_eq!(stored.destination, "OrgC");
    assert_eq!(get(&executor, "lastKey"), b"ship1");

    // history shows both committed versions
    let history: Vec<serde_json::Value> =
        serde_json::from_slice(&payload(executor.invoke("getHist", vec!["ship1".into()])))
            .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["Value"]["dst"], "OrgB");
    assert_eq!(history[1]["Value"]["dst"], "OrgC");
    assert_eq!(history[1]["IsDelete"], "false");
}

#[test]
fn test_range_over_inserted_shipments() {
    let executor = executor();
    for key in ["ship3", "ship1", "ship2"] {
        text(executor.invoke("set", widget(key)));
    }

    let range: Vec<serde_json::Value> = serde_json::from_slice(&payload(
        executor.invoke("getAll", vec!["ship1".into(), "ship3".into()]),
    ))
    .unwrap();
    let keys: Vec<&str> = range.iter().map(|e| e["Key"].as_str().unwrap()).collect();
    assert_eq!(keys, vec!["ship1", "ship2"]);
    assert_eq!(get(&executor, "lastKey"), b"ship2");
}

#[test]
fn test_unknown_function() {
    let executor = executor();
    let response = executor.invoke("delete", vec!["ship1".into()]);
    assert_eq!(response.message(), Some("unknown function: delete"));
}
