//! Command modules for the webhook kit CLI.
//!
//! - `config_cmd`: configuration file scaffolding
//! - `webhook_cmd`: validation and encoding of configured webhooks

pub mod config_cmd;
pub mod webhook_cmd;
