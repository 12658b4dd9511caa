//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration, login, session and refresh tokens
//! - **UserService**: Credential updates and the admin wipe
//! - **ChirpService**: Chirp CRUD with ownership checks
//! - **WebhookService**: Payment-provider upgrades

pub mod auth_service;
pub mod chirp_service;
pub mod user_service;
pub mod webhook_service;

pub use auth_service::{AuthError, AuthService, AuthServiceImpl, LoginOutcome};
pub use chirp_service::{ChirpError, ChirpService, ChirpServiceImpl};
pub use user_service::{UserError, UserService, UserServiceImpl};
pub use webhook_service::{WebhookError, WebhookService, WebhookServiceImpl, USER_UPGRADED};
