//! Trybuild fixture verifying `#[mason(crate = "...")]` works with a renamed
//! dependency.

extern crate mason as values;

use values::{Builder, HasBuilder};

/// A value whose generated code refers to the crate as `values`.
#[derive(Debug, Clone, PartialEq, HasBuilder)]
#[mason(crate = "values", builder = "TicketDraft")]
struct Ticket {
    seat: Option<u32>,
}

fn main() {
    let ticket: Ticket = TicketDraft::new().set_seat(12_u32).build();
    let _: values::MasonResult<serde_json::Value> = ticket.to_tree();
}
