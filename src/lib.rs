pub mod analysis;
pub mod articulation;
pub mod biconnected;
pub mod connected;
pub mod error;
pub mod generate;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod lowlink;
pub mod report;

pub use analysis::Connectivity;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
