mod bet;
mod chips;
mod constants;
mod dice;
mod phase;
mod records;
mod results;
mod rules;

pub use bet::*;
pub use chips::*;
pub use constants::*;
pub use dice::*;
pub use phase::*;
pub use records::*;
pub use results::*;
pub use rules::*;
