pub mod traits;
pub mod directed;
pub mod generators;
pub mod io;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::{DirectedGraph, Edge};
