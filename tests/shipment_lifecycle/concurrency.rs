//! Concurrent invocations over one shared executor.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;

#[test]
fn test_racing_inserts_have_one_winner() {
    for round in 0..50 {
        let executor = Arc::new(executor());
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let executor = Arc::clone(&executor);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let mut args = widget("ship1");
                    args[1] = format!("Widget-{}", t);
                    barrier.wait();
                    executor.invoke("set", args).is_success()
                })
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1, "round {}", round);
        assert_eq!(executor.ledger().version_count("ship1"), 1);
        assert_eq!(executor.ledger().commit_count(), 1);
        assert_eq!(get(&executor, "lastKey"), b"ship1");
    }
}

#[test]
fn test_slot_always_names_a_stored_shipment() {
    let executor = Arc::new(executor());
    let writers: Vec<_> = (0..4)
        .map(|t| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for i in 0..25 {
                    text(executor.invoke("set", widget(&format!("ship-{}-{}", t, i))));
                }
            })
        })
        .collect();

    for _ in 0..50 {
        let last = get(&executor, "lastKey");
        if !last.is_empty() {
            let key = String::from_utf8(last).unwrap();
            assert!(!get(&executor, &key).is_empty());
        }
    }
    for w in writers {
        w.join().unwrap();
    }
    assert_eq!(executor.ledger().commit_count(), 100);
}
