//! Depth-first traversal computing discovery times and low-link values.
//!
//! The traversal itself is shared by every analysis built on low-link values.
//! Analyses plug in through [`LowLinkVisitor`], whose hooks are called at
//! fixed points of the walk and only observe the traversal state.
//!
//! The walk uses an explicit stack of frames instead of native recursion, so
//! arbitrarily deep DFS trees (e.g. a path on millions of vertices) are fine.

use derivative::Derivative;

use crate::graph::{Graph, Vertex};

/// Hooks called by [`LowLink::run`]. All of them default to doing nothing.
///
/// Low-link relaxation is done by the traversal before the corresponding hook
/// is called, so `state.low(..)` is always up to date from the hook's view.
pub trait LowLinkVisitor {
    /// A new DFS tree is about to be explored from `root`.
    fn start_tree(&mut self, _state: &LowLink, _root: Vertex) {}
    /// Tree edge (v, c) is taken, before c is discovered.
    fn tree_edge(&mut self, _state: &LowLink, _v: Vertex, _c: Vertex) {}
    /// The subtree of c is done and `low[v]` has been relaxed with `low[c]`.
    fn tree_edge_return(&mut self, _state: &LowLink, _v: Vertex, _c: Vertex) {}
    /// w is already visited and is not v's parent. Called from both endpoints
    /// of a non-tree edge; `low[v]` has been relaxed with `disc[w]`.
    fn back_edge(&mut self, _state: &LowLink, _v: Vertex, _w: Vertex) {}
    /// The DFS tree rooted at `root` is fully explored.
    fn finish_tree(&mut self, _state: &LowLink, _root: Vertex) {}
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: Vertex,
    /// Index of the next neighbor to look at.
    cursor: usize,
    parent: Option<Vertex>,
}

/// Traversal state of one low-link DFS over a whole graph.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct LowLink<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    visited: Vec<bool>,
    disc: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<Vertex>>,
    clock: usize,
}

impl<'g> LowLink<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            visited: vec![false; n],
            disc: vec![0; n],
            low: vec![0; n],
            parent: vec![None; n],
            clock: 0,
        }
    }

    /// Runs a full DFS forest over `graph`, starting a new tree from every
    /// vertex still unvisited, in increasing id order. Returns the final state.
    pub fn run(graph: &'g Graph, visitor: &mut impl LowLinkVisitor) -> Self {
        let mut state = Self::new(graph);
        let mut stack = Vec::new();
        for root in graph.vertices() {
            if state.visited[root] {
                continue;
            }
            visitor.start_tree(&state, root);
            state.discover(root, None);
            stack.push(Frame {
                vertex: root,
                cursor: 0,
                parent: None,
            });
            state.explore(&mut stack, visitor);
            visitor.finish_tree(&state, root);
        }
        log::debug!("low-link traversal visited {} vertices", state.clock);
        state
    }

    fn explore(&mut self, stack: &mut Vec<Frame>, visitor: &mut impl LowLinkVisitor) {
        let graph = self.graph;
        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            match graph.neighbors(v).get(frame.cursor) {
                Some(&w) => {
                    frame.cursor += 1;
                    if !self.visited[w] {
                        log::trace!("tree edge {v} -> {w}");
                        visitor.tree_edge(self, v, w);
                        self.discover(w, Some(v));
                        stack.push(Frame {
                            vertex: w,
                            cursor: 0,
                            parent: Some(v),
                        });
                    } else if Some(w) != frame.parent {
                        self.low[v] = self.low[v].min(self.disc[w]);
                        visitor.back_edge(self, v, w);
                    }
                }
                None => {
                    let parent = frame.parent;
                    stack.pop();
                    if let Some(p) = parent {
                        self.low[p] = self.low[p].min(self.low[v]);
                        visitor.tree_edge_return(self, p, v);
                    }
                }
            }
        }
    }

    fn discover(&mut self, v: Vertex, parent: Option<Vertex>) {
        self.visited[v] = true;
        self.disc[v] = self.clock;
        self.low[v] = self.clock;
        self.parent[v] = parent;
        self.clock += 1;
    }

    pub fn is_visited(&self, v: Vertex) -> bool {
        self.visited[v]
    }

    /// Discovery time of v. Meaningless if v is not visited yet.
    pub fn disc(&self, v: Vertex) -> usize {
        self.disc[v]
    }

    /// Current low-link value of v. Final once v's subtree is done.
    pub fn low(&self, v: Vertex) -> usize {
        self.low[v]
    }

    /// Parent of v in the DFS forest; None for roots.
    pub fn parent(&self, v: Vertex) -> Option<Vertex> {
        self.parent[v]
    }

    pub fn is_root(&self, v: Vertex) -> bool {
        self.visited[v] && self.parent[v].is_none()
    }
}
