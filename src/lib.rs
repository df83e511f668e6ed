//! Stripe Bridge - a one-shot command runner for the Stripe API
//!
//! Each invocation takes an API key, a command name and an optional JSON
//! object of string parameters, runs exactly one command, and prints exactly
//! one JSON envelope: `{"ok": ...}` on stdout or `{"error": "..."}` on stderr.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod logging;
pub mod ports;
