//! Terminal rendering for the devdash binary. Not part of the library API.

pub mod print;
