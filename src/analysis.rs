use crate::{
    articulation::{articulation_points_and_bridges, Cuts},
    biconnected::biconnected_components,
    connected::connected_components,
    graph::{Edge, Graph, Vertex},
};

/// Results of all connectivity analyses on one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    pub cuts: Cuts,
    pub biconnected_components: Vec<Vec<Edge>>,
    pub connected_components: Vec<Vec<Vertex>>,
}

impl Connectivity {
    /// Runs each analysis with its own traversal over `graph`.
    pub fn analyze(graph: &Graph) -> Self {
        log::debug!(
            "analyzing graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Self {
            cuts: articulation_points_and_bridges(graph),
            biconnected_components: biconnected_components(graph),
            connected_components: connected_components(graph),
        }
    }
}
