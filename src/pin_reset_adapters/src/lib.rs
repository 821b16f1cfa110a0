pub mod auth_validation;
pub mod config;
pub mod handlers;
pub mod persistence;
pub mod sms;
