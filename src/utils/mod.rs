//! Utility modules for the Tasky application.
//!
//! - [`datetime`] - Parsing and formatting of the date/time strings stored on todos

pub mod datetime;
