//! # Data Transfer Objects (DTOs)
//!
//! All data structures used for communication between the front-end and the
//! backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, token and user DTOs
//! - [`sessions`] - Study-session creation and moderation DTOs
//! - [`bookings`] - Session booking DTOs
//! - [`content`] - Reviews, personal notes and study materials
//! - [`billing`] - Payment intents and the chatbot surface
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (legacy front-end contract)
//! - **Optional fields**: omitted when `None`
//! - **Enums**: lowercase strings (`"pending"`, `"approved"`, ...)

pub mod auth;
pub mod billing;
pub mod bookings;
pub mod content;
pub mod sessions;

pub use auth::*;
pub use billing::*;
pub use bookings::*;
pub use content::*;
pub use sessions::*;
