//! Command handlers.
//!
//! | Module | Commands | Ledger access |
//! |--------|----------|---------------|
//! | `shipment` | `Set`, `Edit`, `Get` | point reads and writes |
//! | `query` | `GetAll`, `GetHist` | range and history iterators |

pub mod query;
pub mod shipment;
