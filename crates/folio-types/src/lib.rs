//! Foundation types for the folio terminal.
//!
//! This crate contains the types shared by every folio crate: colors,
//! terminal configuration (profile, theme, timings) and the error type.

pub mod color;
pub mod config;
pub mod error;
