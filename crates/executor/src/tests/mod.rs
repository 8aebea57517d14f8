//! Test modules for the executor crate.

use std::sync::Arc;

use shipledger_core::Timestamp;
use shipledger_storage::{ManualClock, MemoryLedger};

use crate::{Executor, ExecutorConfig, Response};


/// Commit time of the first write in every test ledger (2023-01-02T03:04:05Z)
pub(crate) const FIRST_COMMIT: i64 = 1_672_628_645;

pub(crate) const WIDGET: [&str; 14] = [
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

pub(crate) const WIDGET_RECORD: &str = concat!(
    r#"{"producto":"Widget","modelo":"M1","tipo":"Electronics","dimensiones":"10x10x10","#,
    r#""fechafab":"2023-01-01","materiales":"Plastic","descripcion":"desc","cantidad":"100","#,
    r#""precio_ud":"5.00","precio_tot":"500.00","origen":"OrgA","dst":"OrgB","#,
    r#""Orderer":"OrdererX","fechaenv":"2023-01-02"}"#
);

/// Ledger whose clock starts at `FIRST_COMMIT` and advances one second per commit
pub(crate) fn ledger() -> Arc<MemoryLedger> {
    Arc::new(MemoryLedger::with_clock(Arc::new(ManualClock::new(
        Timestamp::from_secs(FIRST_COMMIT),
    ))))
}

pub(crate) fn executor() -> Executor<MemoryLedger> {
    Executor::new(ledger())
}

pub(crate) fn executor_with(config: ExecutorConfig) -> Executor<MemoryLedger> {
    Executor::with_config(ledger(), config)
}

pub(crate) fn shipment_args(key: &str, fields: [&str; 14]) -> Vec<String> {
    std::iter::once(key)
        .chain(fields)
        .map(String::from)
        .collect()
}

pub(crate) fn widget(key: &str) -> Vec<String> {
    shipment_args(key, WIDGET)
}

pub(crate) fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Payload of a success response as text; panics on an error response
pub(crate) fn ok_text(response: Response) -> String {
    match response {
        Response::Success { payload } => String::from_utf8(payload).unwrap(),
        Response::Error { message } => panic!("expected success, got error: {}", message),
    }
}

/// Message of an error response; panics on a success response
pub(crate) fn err_text(response: Response) -> String {
    assert_eq!(response.status(), 500);
    match response {
        Response::Error { message } => message,
        Response::Success { payload } => panic!(
            "expected error, got success: {}",
            String::from_utf8_lossy(&payload)
        ),
    }
}
