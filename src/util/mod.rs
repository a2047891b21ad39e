//! Small browser helpers.

pub mod scroll;
