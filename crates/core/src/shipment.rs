//! The shipment record
//!
//! A shipment is fourteen opaque string fields. Nothing here parses
//! quantities, prices or dates; the record is stored exactly as supplied.
//!
//! Serde member names are the ones existing ledger readers already consume,
//! so they differ from the Rust field names. `Orderer` is capitalized on
//! purpose.

use serde::{Deserialize, Serialize};

/// A shipment as stored under one ledger key
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shipment {
    /// Product name
    #[serde(rename = "producto")]
    pub product: String,
    /// Product model
    #[serde(rename = "modelo")]
    pub model: String,
    /// Product type
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Package dimensions
    #[serde(rename = "dimensiones")]
    pub dimensions: String,
    /// Manufacture date
    #[serde(rename = "fechafab")]
    pub manufactured_on: String,
    /// Materials
    #[serde(rename = "materiales")]
    pub materials: String,
    /// Free-text description
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Quantity
    #[serde(rename = "cantidad")]
    pub quantity: String,
    /// Unit price
    #[serde(rename = "precio_ud")]
    pub unit_price: String,
    /// Total price
    #[serde(rename = "precio_tot")]
    pub total_price: String,
    /// Origin party
    #[serde(rename = "origen")]
    pub origin: String,
    /// Destination party
    #[serde(rename = "dst")]
    pub destination: String,
    /// Party that placed the order
    #[serde(rename = "Orderer")]
    pub orderer: String,
    /// Ship date
    #[serde(rename = "fechaenv")]
    pub shipped_on: String,
}

impl Shipment {
    /// Number of descriptive fields in a shipment
    pub const FIELD_COUNT: usize = 14;

    /// Encoded member names, in field order
    pub const FIELD_NAMES: [&'static str; Shipment::FIELD_COUNT] = [
        "producto",
        "modelo",
        "tipo",
        "dimensiones",
        "fechafab",
        "materiales",
        "descripcion",
        "cantidad",
        "precio_ud",
        "precio_tot",
        "origen",
        "dst",
        "Orderer",
        "fechaenv",
    ];

    /// Build a shipment from its fields in positional order
    pub fn from_fields(fields: [String; Shipment::FIELD_COUNT]) -> Self {
        let [
            product,
            model,
            kind,
            dimensions,
            manufactured_on,
            materials,
            description,
            quantity,
            unit_price,
            total_price,
            origin,
            destination,
            orderer,
            shipped_on,
        ] = fields;
        Shipment {
            product,
            model,
            kind,
            dimensions,
            manufactured_on,
            materials,
            description,
            quantity,
            unit_price,
            total_price,
            origin,
            destination,
            orderer,
            shipped_on,
        }
    }

    /// Borrow the fields in positional order
    pub fn fields(&self) -> [&str; Shipment::FIELD_COUNT] {
        [
            &self.product,
            &self.model,
            &self.kind,
            &self.dimensions,
            &self.manufactured_on,
            &self.materials,
            &self.description,
            &self.quantity,
            &self.unit_price,
            &self.total_price,
            &self.origin,
            &self.destination,
            &self.orderer,
            &self.shipped_on,
        ]
    }
}
