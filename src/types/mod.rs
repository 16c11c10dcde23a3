//! Vendor records
//!
//! Plain-data shapes grouped by vendor subdomain. Records model what the vendor
//! returns; the client performs no semantic validation. Request records omit
//! absent optional fields on the wire (`skip_serializing_if`), which is how
//! tri-state flags express "inherit".

pub mod common;
pub mod convai;
pub mod media;
pub mod models;
pub mod opaque;
pub mod pronunciation;
pub mod pvc;
pub mod studio;
pub mod voices;
pub mod workspace;

pub use common::*;
pub use convai::*;
pub use media::*;
pub use models::*;
pub use pronunciation::*;
pub use pvc::*;
pub use studio::*;
pub use voices::*;
pub use workspace::*;
