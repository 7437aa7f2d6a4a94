pub mod mw_auth;

pub use mw_auth::require_admin;
