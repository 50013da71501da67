//! Transport adapters
//!
//! - `FileTransport` - serves an exported dataset file
//! - `MockTransport` - scripted responses for testing

pub mod file_transport;
pub mod mock_transport;

pub use file_transport::FileTransport;
pub use mock_transport::MockTransport;
