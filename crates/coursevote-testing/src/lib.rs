//! Test utilities for coursevote services.
//!
//! Import from `[dev-dependencies]` only, never from production code.

pub mod db;
