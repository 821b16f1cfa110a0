pub mod phone_number;
pub mod pin_code;
pub mod session;
pub mod user;
pub mod username;
