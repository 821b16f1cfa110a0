pub mod request_password_reset;
pub mod send_pin_code;
