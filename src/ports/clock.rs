//! Clock port.
//!
//! The single source of "now" for application handlers. Handlers read the
//! clock once per command and pass that instant into every domain decision,
//! so one decision never straddles two instants.

use crate::domain::foundation::Timestamp;

/// Port for reading the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}
