//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session crate's `Transport` over browser fetch.

pub mod api;
