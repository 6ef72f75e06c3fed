//! Articulation points (cut vertices) and bridges (cut edges).

use std::collections::BTreeSet;

use crate::{
    graph::{Edge, Graph, Vertex},
    lowlink::{LowLink, LowLinkVisitor},
};

/// Articulation points and bridges of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cuts {
    pub articulation_points: BTreeSet<Vertex>,
    /// Each bridge as (parent, child) in the DFS forest, in detection order.
    pub bridges: Vec<Edge>,
}

#[derive(Debug, Default)]
struct CutsVisitor {
    cuts: Cuts,
    /// Tree children of the current DFS root.
    root_children: usize,
}

impl LowLinkVisitor for CutsVisitor {
    fn start_tree(&mut self, _state: &LowLink, _root: Vertex) {
        self.root_children = 0;
    }

    fn tree_edge_return(&mut self, state: &LowLink, v: Vertex, c: Vertex) {
        if state.is_root(v) {
            self.root_children += 1;
            if self.root_children > 1 {
                self.cuts.articulation_points.insert(v);
            }
        } else if state.low(c) >= state.disc(v) {
            self.cuts.articulation_points.insert(v);
        }
        if state.low(c) > state.disc(v) {
            log::trace!("bridge ({v}, {c})");
            self.cuts.bridges.push((v, c));
        }
    }
}

/// Finds all articulation points and bridges of `graph`.
pub fn articulation_points_and_bridges(graph: &Graph) -> Cuts {
    let mut visitor = CutsVisitor::default();
    LowLink::run(graph, &mut visitor);
    log::debug!(
        "found {} articulation points and {} bridges",
        visitor.cuts.articulation_points.len(),
        visitor.cuts.bridges.len()
    );
    visitor.cuts
}
