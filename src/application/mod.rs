// Application layer - the boundary between raw user text and the ledger.
// Everything here turns strings into typed arguments; the ledger only ever
// sees validated values.

pub mod error;
pub mod input;

pub use error::*;
pub use input::*;
