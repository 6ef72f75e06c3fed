//! Biconnected components as edge sets, found with an edge stack.
//!
//! A back edge is pushed only from its endpoint discovered later, so each
//! non-tree edge lands on the stack exactly once. When the subtree of a child
//! c of v cannot reach above v (`low[c] >= disc[v]`), everything pushed since
//! (v, c) forms one component. Whatever is left on the stack once a DFS tree
//! is done becomes one last component for that tree.

use crate::{
    graph::{Edge, Graph, Vertex},
    lowlink::{LowLink, LowLinkVisitor},
};

#[derive(Debug, Default)]
struct BiconnectedVisitor {
    stack: Vec<Edge>,
    components: Vec<Vec<Edge>>,
}

impl LowLinkVisitor for BiconnectedVisitor {
    fn tree_edge(&mut self, _state: &LowLink, v: Vertex, c: Vertex) {
        self.stack.push((v, c));
    }

    fn back_edge(&mut self, state: &LowLink, v: Vertex, w: Vertex) {
        if state.disc(w) < state.disc(v) {
            self.stack.push((v, w));
        }
    }

    fn tree_edge_return(&mut self, state: &LowLink, v: Vertex, c: Vertex) {
        if state.low(c) < state.disc(v) {
            return;
        }
        let mut component = Vec::new();
        while let Some(e) = self.stack.pop() {
            component.push(e);
            if e == (v, c) {
                break;
            }
        }
        log::trace!("closed component of {} edges at ({v}, {c})", component.len());
        self.components.push(component);
    }

    fn finish_tree(&mut self, _state: &LowLink, root: Vertex) {
        if !self.stack.is_empty() {
            log::trace!("flushing {} edges left after root {root}", self.stack.len());
            self.components.push(std::mem::take(&mut self.stack));
        }
    }
}

/// Biconnected components of `graph`, each a list of edges, in the order they
/// are closed during the traversal.
pub fn biconnected_components(graph: &Graph) -> Vec<Vec<Edge>> {
    let mut visitor = BiconnectedVisitor::default();
    LowLink::run(graph, &mut visitor);
    log::debug!("found {} biconnected components", visitor.components.len());
    visitor.components
}
