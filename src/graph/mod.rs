//! Core graph data structures

mod statement;
mod store;
mod term;


pub use statement::Statement;
pub use store::Graph;
pub use term::{Literal, Term, XSD_STRING};
