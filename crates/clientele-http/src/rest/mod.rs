//! Low-level REST client and wire types.

pub mod client;
pub mod endpoints;
