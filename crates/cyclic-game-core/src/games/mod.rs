//! Move sets, outcome resolution, and player input.

mod moves;
mod outcome;
mod selection;
mod table;

pub use moves::{MoveSet, MIN_MOVES};
pub use outcome::{CyclicResolver, Outcome, OutcomeMatrix};
pub use selection::{Selection, EXIT_TOKEN, HELP_TOKEN};
pub use table::{format_table, help_table, COLUMN_PADDING, CORNER_LABEL};
