//! Conversational AI records
//!
//! Agent, tool, and settings configuration is vendor-defined and changes often,
//! so those blocks are carried as opaque `serde_json::Value` (see
//! [`crate::types::opaque`]). Identifiers and the small set of attributes the
//! resource layer reads directly are typed.

mod agents;
mod knowledge_base;
mod mcp;
mod telephony;
mod testing;
mod tools;

pub use agents::*;
pub use knowledge_base::*;
pub use mcp::*;
pub use telephony::*;
pub use testing::*;
pub use tools::*;
