//! Binds the `mason` behavioural feature files to the step registry.

use crate::fixtures::{MasonWorld, world};
use rstest_bdd_macros::scenarios;

scenarios!("tests/features/merge.feature", fixtures = [world: MasonWorld]);
scenarios!("tests/features/routing.feature", fixtures = [world: MasonWorld]);
