//! Shared helpers for the lifecycle suite.

#![allow(dead_code)]

use std::sync::Arc;

use shipledger::{Executor, ExecutorConfig, ManualClock, MemoryLedger, Response, Timestamp};

pub const WIDGET: [&str; 14] = [
    "Widget",
    "M1",
    "Electronics",
    "10x10x10",
    "2023-01-01",
    "Plastic",
    "desc",
    "100",
    "5.00",
    "500.00",
    "OrgA",
    "OrgB",
    "OrdererX",
    "2023-01-02",
];

pub fn executor() -> Executor<MemoryLedger> {
    executor_with(ExecutorConfig::default())
}

pub fn executor_with(config: ExecutorConfig) -> Executor<MemoryLedger> {
    let clock = ManualClock::new(Timestamp::from_secs(1_672_628_645));
    Executor::with_config(Arc::new(MemoryLedger::with_clock(Arc::new(clock))), config)
}

pub fn record_args(key: &str, fields: &[String]) -> Vec<String> {
    std::iter::once(key.to_string())
        .chain(fields.iter().cloned())
        .collect()
}

pub fn widget(key: &str) -> Vec<String> {
    let fields: Vec<String> = WIDGET.iter().map(|f| f.to_string()).collect();
    record_args(key, &fields)
}

pub fn get(executor: &Executor<MemoryLedger>, key: &str) -> Vec<u8> {
    payload(executor.invoke("get", vec![key.to_string()]))
}

pub fn payload(response: Response) -> Vec<u8> {
    match response {
        Response::Success { payload } => payload,
        Response::Error { message } => panic!("expected success, got error: {}", message),
    }
}

pub fn text(response: Response) -> String {
    String::from_utf8(payload(response)).unwrap()
}
