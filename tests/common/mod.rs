use std::{
    collections::BTreeSet,
    sync::{LazyLock, Mutex},
};

use flexi_logger::LoggerHandle;
use graph_connectivity::{
    logging::{self, LogTarget},
    Edge, Graph, Vertex,
};
use scopeguard::{OnUnwind, ScopeGuard};

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(logging::init_logger("info", LogTarget::CapturedStdout).unwrap())
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the graph if the test panics while the guard is alive.
#[allow(dead_code)]
pub fn guard(g: Graph) -> ScopeGuard<Graph, impl FnOnce(Graph), OnUnwind> {
    scopeguard::guard_on_unwind(g, |g| log::error!("Crash with {g:?}"))
}

#[allow(dead_code)]
pub fn path(n: usize) -> Graph {
    Graph::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap()
}

#[allow(dead_code)]
pub fn triangle() -> Graph {
    Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap()
}

#[allow(dead_code)]
pub fn two_triangles() -> Graph {
    Graph::from_edges(6, [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap()
}

#[allow(dead_code)]
pub fn normalize(e: Edge) -> Edge {
    (e.0.min(e.1), e.0.max(e.1))
}

/// Slow but obviously correct connectivity checks.
#[derive(Debug)]
pub struct Dumb {
    adj: Vec<BTreeSet<Vertex>>,
}

#[allow(dead_code)]
impl Dumb {
    pub fn new(g: &Graph) -> Self {
        Self {
            adj: g
                .vertices()
                .map(|v| g.neighbors(v).iter().copied().collect())
                .collect(),
        }
    }

    /// Component id (from 1) of each vertex, 0 for the removed one.
    pub fn groups_without(
        &self,
        removed_vertex: Option<Vertex>,
        removed_edge: Option<Edge>,
    ) -> Vec<usize> {
        let n = self.adj.len();
        let removed_edge = removed_edge.map(normalize);
        let mut groups = vec![0; n];
        let mut group_id = 0;
        for u in 0..n {
            if groups[u] != 0 || Some(u) == removed_vertex {
                continue;
            }
            group_id += 1;
            groups[u] = group_id;
            let mut stack = vec![u];
            while let Some(u) = stack.pop() {
                for &v in &self.adj[u] {
                    if groups[v] == 0
                        && Some(v) != removed_vertex
                        && Some(normalize((u, v))) != removed_edge
                    {
                        groups[v] = group_id;
                        stack.push(v);
                    }
                }
            }
        }
        groups
    }

    pub fn groups(&self) -> Vec<usize> {
        self.groups_without(None, None)
    }

    pub fn count_without(
        &self,
        removed_vertex: Option<Vertex>,
        removed_edge: Option<Edge>,
    ) -> usize {
        self.groups_without(removed_vertex, removed_edge)
            .into_iter()
            .max()
            .unwrap_or(0)
    }

    pub fn articulation_points(&self) -> BTreeSet<Vertex> {
        let base = self.count_without(None, None);
        (0..self.adj.len())
            .filter(|&v| self.count_without(Some(v), None) > base)
            .collect()
    }

    pub fn bridges(&self) -> BTreeSet<Edge> {
        let base = self.count_without(None, None);
        (0..self.adj.len())
            .flat_map(|u| {
                self.adj[u]
                    .iter()
                    .filter(move |&&v| u < v)
                    .map(move |&v| (u, v))
            })
            .filter(|&e| self.count_without(None, Some(e)) > base)
            .collect()
    }
}
