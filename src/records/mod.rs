//!  Read side of habit data. Habits are never written here.
//!  The basic idea is:
//!   - All habits live in one JSON document, either an export envelope or a bare array.
//!   - Every habit carries its full log history, one entry per day.
//!   - Dates stay strings until a habit's logs are handed to [crate::streaks], that is where
//!     malformed dates are reported.

pub mod document;
pub mod entities;
