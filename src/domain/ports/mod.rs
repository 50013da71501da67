//! Port interfaces to external collaborators.

pub mod transport;

pub use transport::{Transport, TransportError};
