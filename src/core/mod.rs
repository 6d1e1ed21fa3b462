//! Core configuration, wire models, and the command descriptor table

pub mod commands;
pub mod config;
pub mod models;
