//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

mod env;

pub use env::{TestEnv, TestResult, Tool};
