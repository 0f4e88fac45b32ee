//! External Services
//!
//! - lookup: background worker that runs word lookups off the UI loop

pub mod lookup;

pub use lookup::{spawn_lookup_service, LookupRequest, LookupResponse};
