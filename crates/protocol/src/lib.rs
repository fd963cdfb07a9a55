//! Wire types for the toolgate gateway protocol.
//!
//! This crate contains the serde-serializable types exchanged between the
//! client session layer, the gateway service, and the CLI. These types
//! represent the "protocol layer" - the shapes of data as they appear on
//! the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **camelCase on the wire**: field names match the JSON the gateway emits
//! - **Stable**: Changes only when the wire contract changes
//!
//! Higher-level session APIs are built on top of these types in
//! `toolgate-client`.

pub mod browser;
pub mod envelope;
pub mod search;
pub mod session;
pub mod terminal;

pub use browser::*;
pub use envelope::*;
pub use search::*;
pub use session::*;
pub use terminal::*;
