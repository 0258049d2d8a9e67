//! Core domain models for cleanse
//!
//! This crate contains:
//! - Detection results (`Match`, `Span`)
//! - Scan endpoint wire types
//! - The shared error type

pub mod detection;
pub mod error;
pub mod protocol;

pub use detection::{Match, Position, Span};
pub use error::{Error, Result};
pub use protocol::{ScanRequest, ScanResponse};
