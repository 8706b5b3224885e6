//! Configuration and error plumbing shared by every command

pub mod config;
pub mod error;
