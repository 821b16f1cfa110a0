pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    phone_number::{PhoneNumber, PhoneNumberError},
    pin_code::{PinCode, PinCodeError},
    session::AuthenticatedSession,
    user::{UserId, UserRecord, UserRole, UserRoleError},
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{PinCodeStore, PinCodeStoreError, UserDirectory, UserDirectoryError},
    services::{DispatchError, SmsClient, VerificationCodeDispatcher},
};

pub use strategies::session_authenticator::SessionAuthenticator;

pub use http_abstraction::{ResponseBuilder, ResponseHelpers, is_allowed_response_header};
