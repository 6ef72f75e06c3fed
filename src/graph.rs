//! Immutable undirected graph stored as adjacency lists.

use crate::error::{Error, Result};

pub type Vertex = usize;
/// Undirected edge. Orientation depends on who produced it.
pub type Edge = (Vertex, Vertex);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl Graph {
    /// Graph on n vertices and no edges. Fails if n is 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidGraphSize(0));
        }
        Ok(Self {
            adj: vec![Vec::new(); n],
            edge_count: 0,
        })
    }

    /// Graph on n vertices with the given edges, added in order.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let mut g = Self::new(n)?;
        for (u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Adds the undirected edge u–v. v is appended to u's list and u to v's.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        for w in [u, v] {
            if w >= self.adj.len() {
                return Err(Error::VertexOutOfRange {
                    vertex: w,
                    vertex_count: self.adj.len(),
                });
            }
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    /// Neighbors of v, in insertion order.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v]
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.adj.len()
    }

    /// Every edge once, as (smaller, larger).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, ns)| ns.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }
}
