//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (`DB_URL`, `PLATFORM`, `JWT_SECRET`, `POLKA_KEY`,
//!   or the nested `APP__` form)
//! - Configuration files (config/default.toml, config/{platform}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chirpy::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
