//! Slash command handlers

pub mod ai;
pub mod imagine;
