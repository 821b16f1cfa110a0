//! # PIN Reset - Password Reset Request Service
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to the password reset functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `PhoneNumber`, `PinCode`, `UserRecord`, etc.
//! - **Repository traits**: `UserDirectory`, `PinCodeStore`
//! - **Use cases**: `RequestPasswordResetUseCase`, `SendPinCodeUseCase`
//! - **Adapters**: `PostgresUserDirectory`, `RedisPinCodeStore`, `HttpSmsClient`, etc.
//! - **Service**: `PinResetService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use pin_reset_core::*;
}

pub use pin_reset_core::{
    AuthenticatedSession, PhoneNumber, PinCode, UserId, UserRecord, UserRole, Username,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

pub use pin_reset_core::{
    DispatchError, PinCodeStore, PinCodeStoreError, SessionAuthenticator, SmsClient,
    UserDirectory, UserDirectoryError, VerificationCodeDispatcher,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use pin_reset_application::*;
}

pub use pin_reset_application::{
    RequestPasswordResetError, RequestPasswordResetUseCase, SendPinCodeUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic request handlers
    pub mod handlers {
        pub use pin_reset_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use pin_reset_adapters::persistence::*;
    }

    /// SMS client implementations
    pub mod sms {
        pub use pin_reset_adapters::sms::*;
    }

    /// JWT session utilities
    pub mod auth {
        pub use pin_reset_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use pin_reset_adapters::config::*;
    }
}

pub use pin_reset_adapters::{
    auth_validation::JwtSessionAuthenticator,
    config::ServiceSettings,
    persistence::{
        HashMapPinCodeStore, HashMapUserDirectory, PostgresUserDirectory, RedisPinCodeStore,
    },
    sms::{HttpSmsClient, MockSmsClient},
};

// ============================================================================
// Axum Integration
// ============================================================================

pub use pin_reset_axum as axum_integration;

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use pin_reset_service::{
    PinResetService, configure_postgresql, configure_redis, get_postgres_pool, get_redis_client,
    init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
