pub mod use_cases;

pub use use_cases::{
    request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase},
    send_pin_code::SendPinCodeUseCase,
};
