//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the StudyHub front-end and the
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login and token DTOs
//!   - **[`dto::sessions`]**: Study-session lifecycle DTOs
//!   - **[`dto::bookings`]**: Booking DTOs
//!   - **[`dto::content`]**: Review, note and study-material DTOs
//!   - **[`dto::billing`]**: Payment-intent and chatbot DTOs
//!
//! ## Wire Format
//!
//! The HTTP API predates this crate, so the wire format is **camelCase**
//! (`#[serde(rename_all = "camelCase")]` on every struct) rather than the
//! serde default. Optional fields are omitted from JSON when `None`.
//! Timestamps serialize as RFC 3339 strings via `chrono`.

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
