//! Value types shared by the crapsim engine and anything that presents its
//! results: money, dice, table rules, bet outcomes and run summaries.

pub mod craps;

pub use craps::*;
