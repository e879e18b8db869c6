//! # client
//!
//! Leptos + WASM front-end for the mentorship platform.
//!
//! This crate contains pages, components, browser-side state, and the
//! browser implementations of the session core's storage and transport
//! seams. Session semantics (restore, login, logout, route guarding, role
//! menus) live in the `session` crate; this crate renders them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
