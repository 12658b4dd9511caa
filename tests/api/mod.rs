//! HTTP endpoint tests.

mod admin_tests;
mod auth_tests;
mod users_tests;
mod webhook_tests;
