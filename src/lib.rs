//! Keeps track of the time invested into daily habits and tells how consistent it has been.
//! The heart of it is [streaks], a pure computation of the current and the longest streak of
//! active days. Everything else loads a habit document and prints results in a terminal.
//!

pub mod cli;
pub mod fs;
pub mod records;
pub mod streaks;
pub mod utils;
