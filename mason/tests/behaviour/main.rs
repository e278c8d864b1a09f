//! Behavioural test harness for `mason` using `rstest-bdd`.
//!
//! Step implementations live under [`steps`], while [`scenarios`] binds the
//! `.feature` files to the shared fixtures.

mod fixtures;
mod scenarios;
mod steps;
#[path = "../support/mod.rs"]
mod support;
