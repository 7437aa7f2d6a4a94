pub mod admin;
pub mod auth;
pub mod bookings;
pub mod chat;
pub mod materials;
pub mod notes;
pub mod payments;
pub mod reviews;
pub mod sessions;
pub mod tutor;
pub mod users;
