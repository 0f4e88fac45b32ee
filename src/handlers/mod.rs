//! Event Handlers
//!
//! - keyboard: User keyboard input
//! - lookup: Responses from the lookup service
//!
//! Handlers take `&mut App` and translate one event into state changes.

pub mod keyboard;
pub mod lookup;

pub use keyboard::handle_key;
pub use lookup::handle_lookup_response;
