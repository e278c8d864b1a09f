//! Test helpers shared across the mason test suites.
//!
//! This crate provides a guard for swapping the process-wide mapper, a
//! jailed loader for environment-driven mapper configuration, and text
//! helpers for behavioural step definitions.

pub mod jail;
pub mod mapper;
pub mod text;
