//! Controller model consumed by the generators.
//!
//! The tree is normally produced by an upstream parser; [`load_tree`] reads a
//! structured manifest dump of it so the generator can be driven on its own.

mod load;
mod types;

pub use load::*;
pub use types::*;
