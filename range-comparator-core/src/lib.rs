//! Crate containing combustion and electric vehicle models, the interactive
//! line reader that turns user input into validated vehicles, and range
//! comparison between them.

#[macro_use]
pub mod macros;

pub mod comparison;
pub mod error;
pub mod imports;
pub mod params;
pub mod prelude;
pub mod reader;
pub mod traits;
pub mod vehicle;
