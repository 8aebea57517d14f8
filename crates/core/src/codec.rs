//! Record codec
//!
//! Canonical encoding of a [`Shipment`]: a compact JSON object with members
//! in field order. Decoding needs all fourteen members and ignores extras.
//!
//! The executor never decodes what it reads back from the ledger; stored
//! bytes are returned verbatim. `decode` exists for callers and tests.

use crate::error::Result;
use crate::shipment::Shipment;

/// Encode a shipment into its stored form
pub fn encode(shipment: &Shipment) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(shipment)?)
}

/// Decode a stored record
pub fn decode(bytes: &[u8]) -> Result<Shipment> {
    Ok(serde_json::from_slice(bytes)?)
}
