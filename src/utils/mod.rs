//! Shared utilities: content sanitization and the timeout wrapper

pub mod sanitize;
pub mod timeout;
