//! The Executor - single entry point for ledger invocations.
//!
//! The Executor is a stateless dispatcher: it routes commands to handlers
//! and renders their outputs. All record state lives in the ledger.

use std::sync::Arc;

use shipledger_core::Ledger;
use tracing::{debug, warn};

use crate::handlers::{query, shipment};
use crate::{
    Command, ExecutorConfig, Invocation, Output, Response, Result, ResultFormatter, WritePolicy,
};

/// The command executor.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` whenever the ledger is, and can be shared
/// across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shipledger_executor::{Command, Executor, Output};
/// use shipledger_storage::MemoryLedger;
///
/// let executor = Executor::new(Arc::new(MemoryLedger::new()));
///
/// let response = executor.invoke("get", vec!["ship1".into()]);
/// assert_eq!(response.status(), 200);
///
/// let output = executor.execute(Command::Get { key: "ship1".into() }).unwrap();
/// assert_eq!(output, Output::Value(None));
/// ```
pub struct Executor<L: Ledger + ?Sized> {
    ledger: Arc<L>,
    config: ExecutorConfig,
    formatter: ResultFormatter,
}

impl<L: Ledger + ?Sized> Executor<L> {
    /// Create an executor with the default configuration.
    pub fn new(ledger: Arc<L>) -> Self {
        Self::with_config(ledger, ExecutorConfig::default())
    }

    /// Create an executor with an explicit configuration.
    pub fn with_config(ledger: Arc<L>, config: ExecutorConfig) -> Self {
        let formatter = config.formatter();
        Self {
            ledger,
            config,
            formatter,
        }
    }

    /// The ledger this executor dispatches to
    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    /// Active configuration
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Instantiation hook. Always succeeds with an empty payload.
    pub fn init(&self) -> Response {
        Response::success(Vec::new())
    }

    /// Validate, execute and render one invocation.
    ///
    /// Every failure becomes an error response carrying the error's message.
    pub fn invoke(&self, function: &str, args: Vec<String>) -> Response {
        let result = Command::from_invocation(function, args)
            .and_then(|cmd| self.execute(cmd))
            .and_then(|output| self.formatter.render(&output));
        if let Err(e) = &result {
            warn!(function, error = %e, "invocation failed");
        }
        Response::from(result)
    }

    /// [`invoke`](Self::invoke) for an already-split [`Invocation`].
    pub fn invoke_invocation(&self, invocation: Invocation) -> Response {
        self.invoke(&invocation.function, invocation.args)
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(operation = %cmd.operation(), "dispatching");
        let ledger = self.ledger.as_ref();
        match cmd {
            Command::Set(request) => shipment::write(
                ledger,
                request,
                WritePolicy::InsertIfAbsent,
                self.config.last_key_slot(),
            ),
            Command::Edit(request) => shipment::write(
                ledger,
                request,
                WritePolicy::Overwrite,
                self.config.last_key_slot(),
            ),
            Command::Get { key } => shipment::get(ledger, key),
            Command::GetAll { start_key, end_key } => query::range(ledger, &start_key, &end_key),
            Command::GetHist { key } => query::history(ledger, &key),
        }
    }

    /// Execute commands in order, one result per command.
    ///
    /// A failing command does not stop the ones after it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
