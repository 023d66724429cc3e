//! Overseerr API client and wire types.

mod client;
pub mod types;

pub use client::{OverseerrClient, OverseerrError};
pub use types::Notification;
