use crate::graph::{Graph, Vertex};

/// Connected components of `graph`, ordered by their smallest vertex. Each
/// component lists its vertices in DFS preorder from that vertex.
pub fn connected_components(graph: &Graph) -> Vec<Vec<Vertex>> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut components = Vec::new();
    // (vertex, next neighbor index)
    let mut stack: Vec<(Vertex, usize)> = Vec::new();
    for root in graph.vertices() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut component = vec![root];
        stack.push((root, 0));
        while let Some((u, cursor)) = stack.last_mut() {
            let u = *u;
            match graph.neighbors(u).get(*cursor) {
                Some(&v) => {
                    *cursor += 1;
                    if !visited[v] {
                        visited[v] = true;
                        component.push(v);
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
        components.push(component);
    }
    log::debug!("found {} connected components", components.len());
    components
}
