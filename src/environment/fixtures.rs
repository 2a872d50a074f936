//! Built-in reference environments
//!
//! Both fixtures describe a 3x3 grid of cells labelled A through I:
//!
//! ```text
//! |A|B|C|
//! |D|E|F|
//! |G|H|I|
//! ```
//!
//! C is the absorbing goal; transitions H->I and F->I pay 100.
//!
//! [`legacy_grid`] carries the tables of the classic nine-state
//! path-finding example exactly as shipped, quirks included: cells G and H
//! were both assigned id 7 (leaving id 6 without a cell of its own), and
//! the action list stored in slot 7 duplicates slot 5's. [`grid_3x3`] is
//! the cleaned-up topology those tables were describing, with one id per
//! cell and full orthogonal adjacency. The quirks are preserved as data,
//! not repaired, so runs against the shipped tables stay comparable.

use super::{Environment, EnvironmentBuilder};
use crate::error::Result;

const LABELS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

/// The classic nine-state instance, tables preserved as shipped.
///
/// State ids: A=0, B=1, C=2 (goal), D=3, E=4, F=5, G=7, H=7, I=8. Note
/// the G/H aliasing: id 6 keeps the "G" label for reporting, but the
/// adjacency referring to G actually lands on id 7.
pub fn legacy_grid() -> Result<Environment> {
    EnvironmentBuilder::new(9, 2)
        .labels(LABELS)
        .actions(0, [1, 3])
        .actions(1, [0, 2])
        .actions(2, [2])
        .actions(3, [0, 4])
        .actions(4, [3, 5, 7])
        .actions(5, [2, 4, 8])
        .actions(6, [3, 7])
        // Slot 7 duplicates slot 5's list in the shipped tables.
        .actions(7, [2, 4, 8])
        .actions(8, [7, 4, 1])
        .reward(7, 8, 100.0)
        .reward(5, 8, 100.0)
        .build()
}

/// The intended 3x3 grid topology: one id per cell, orthogonal moves,
/// C absorbing.
pub fn grid_3x3() -> Result<Environment> {
    EnvironmentBuilder::new(9, 2)
        .labels(LABELS)
        .actions(0, [1, 3])
        .actions(1, [0, 2, 4])
        .actions(2, [2])
        .actions(3, [0, 4, 6])
        .actions(4, [1, 3, 5, 7])
        .actions(5, [2, 4, 8])
        .actions(6, [3, 7])
        .actions(7, [4, 6, 8])
        .actions(8, [5, 7])
        .reward(7, 8, 100.0)
        .reward(5, 8, 100.0)
        .build()
}
