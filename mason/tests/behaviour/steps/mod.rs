//! Step definitions for the behavioural scenarios.

mod merge_steps;
mod routing_steps;
