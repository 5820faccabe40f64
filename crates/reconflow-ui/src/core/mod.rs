//! Core, DOM-free primitives and helpers for the web shell.
pub mod config;
pub mod lifetime;
pub mod nav;
pub mod store;
