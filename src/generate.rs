use rand::Rng;

use crate::{error::Result, graph::Graph};

/// Erdős–Rényi graph: each of the n(n-1)/2 possible edges is present
/// independently with probability `p`.
pub fn random_graph(n: usize, p: f64, rng: &mut impl Rng) -> Result<Graph> {
    let mut g = Graph::new(n)?;
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                g.add_edge(u, v)?;
            }
        }
    }
    Ok(g)
}

/// Random graph made of `k` dense clusters on consecutive ids, chained by a
/// single edge between neighboring clusters. Produces plenty of bridges and
/// articulation points.
pub fn clustered_graph(n: usize, k: usize, p: f64, rng: &mut impl Rng) -> Result<Graph> {
    let mut g = Graph::new(n)?;
    let k = k.clamp(1, n);
    let cluster = |u: usize| u * k / n;
    for u in 0..n {
        for v in u + 1..n {
            if cluster(u) == cluster(v) && rng.gen_bool(p) {
                g.add_edge(u, v)?;
            }
        }
    }
    let start = |c: usize| (c * n).div_ceil(k);
    for c in 1..k {
        let a = rng.gen_range(start(c - 1)..start(c));
        let b = rng.gen_range(start(c)..start(c + 1));
        g.add_edge(a, b)?;
    }
    Ok(g)
}
