use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::graph::Vertex;

pub type Result<T> = std::result::Result<T, Error>;

/// Where in the binary input a read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPosition {
    /// The leading graph size.
    Size,
    /// A matrix cell.
    Cell { row: usize, col: usize },
}

impl fmt::Display for ReadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadPosition::Size => write!(f, "graph size"),
            ReadPosition::Cell { row, col } => write!(f, "adjacency matrix at ({row}, {col})"),
        }
    }
}

/// Everything that can go wrong while loading a graph or writing a report.
///
/// All of these are terminal: the analyses themselves never fail once a
/// [`Graph`](crate::graph::Graph) has been built.
#[derive(Error, Debug)]
pub enum Error {
    #[error("could not open input file {}: {source}", .path.display())]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("invalid graph size: {0}")]
    InvalidGraphSize(i64),

    #[error("failed to read {position}: {source}")]
    Read {
        position: ReadPosition,
        source: io::Error,
    },

    #[error("vertex {vertex} out of range for a graph on {vertex_count} vertices")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("could not create output file {}: {source}", .path.display())]
    OutputCreate { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    OutputWrite(#[source] io::Error),
}
