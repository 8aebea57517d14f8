//! Shipment write and read handlers.

use shipledger_core::{codec, Ledger};
use tracing::{debug, info};

use crate::{Error, Output, Result, ShipmentRequest, WritePolicy};

// =============================================================================
// Individual Handlers
// =============================================================================

/// Handle `Set` and `Edit`.
///
/// `InsertIfAbsent` refuses an occupied key and commits the record together
/// with the last-key slot (when `last_key` is `Some`) in one batch guarded by
/// the record key, so a racing insert that lands first still wins.
/// `Overwrite` writes the record alone.
pub fn write<L: Ledger + ?Sized>(
    ledger: &L,
    request: ShipmentRequest,
    policy: WritePolicy,
    last_key: Option<&str>,
) -> Result<Output> {
    let ShipmentRequest { key, shipment } = request;
    if last_key == Some(key.as_str()) {
        return Err(Error::ReservedKey { key });
    }

    if policy == WritePolicy::InsertIfAbsent && ledger.get_state(&key)?.is_some() {
        debug!(key = %key, "insert refused, key already holds a shipment");
        return Err(Error::AlreadyExists { key });
    }

    let record = codec::encode(&shipment)?;
    match policy {
        WritePolicy::InsertIfAbsent => {
            let mut writes = vec![(key.clone(), record)];
            if let Some(slot) = last_key {
                writes.push((slot.to_string(), key.clone().into_bytes()));
            }
            if !ledger.put_states_if_absent(&key, writes)? {
                debug!(key = %key, "insert lost to a concurrent commit");
                return Err(Error::AlreadyExists { key });
            }
            info!(key = %key, "shipment inserted");
            Ok(Output::Inserted { key })
        }
        WritePolicy::Overwrite => {
            ledger.put_state(&key, record)?;
            info!(key = %key, "shipment overwritten");
            Ok(Output::Written { key })
        }
    }
}

/// Handle `Get`: raw stored bytes, no decoding.
pub fn get<L: Ledger + ?Sized>(ledger: &L, key: String) -> Result<Output> {
    Ok(Output::Value(ledger.get_state(&key)?))
}
