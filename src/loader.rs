//! Binary adjacency-matrix format.
//!
//! Little-endian throughout: an `i16` vertex count N > 0 followed by N×N
//! `i16` cells in row-major order. Only the upper triangle is consulted; a
//! nonzero cell (i, j) with i < j is an edge. Symmetry is not checked.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    error::{Error, ReadPosition, Result},
    graph::Graph,
};

fn read_i16(r: &mut impl Read, position: ReadPosition) -> Result<i16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)
        .map_err(|source| Error::Read { position, source })?;
    Ok(i16::from_le_bytes(buf))
}

/// Reads a whole graph from `r`. The graph is only returned once every cell
/// has been read.
pub fn read_graph_from(r: &mut impl Read) -> Result<Graph> {
    let size = read_i16(r, ReadPosition::Size)?;
    if size <= 0 {
        return Err(Error::InvalidGraphSize(size.into()));
    }
    let n = size as usize;
    let mut graph = Graph::new(n)?;
    for row in 0..n {
        for col in 0..n {
            let cell = read_i16(r, ReadPosition::Cell { row, col })?;
            if cell != 0 && row < col {
                graph.add_edge(row, col)?;
            }
        }
    }
    log::debug!(
        "loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads a graph from the file at `path`.
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::InputOpen {
        path: path.to_owned(),
        source,
    })?;
    log::info!("reading graph from {}", path.display());
    read_graph_from(&mut BufReader::new(file))
}

/// Writes `graph` in the same format, as a symmetric 0/1 matrix. Fails with
/// [`Error::InvalidGraphSize`] if the graph has more vertices than an `i16`
/// can count.
pub fn write_graph_to(w: &mut impl Write, graph: &Graph) -> Result<()> {
    let n = graph.vertex_count();
    let size = i16::try_from(n).map_err(|_| Error::InvalidGraphSize(n as i64))?;
    write_rows(w, size, graph).map_err(Error::OutputWrite)
}

/// One matrix row at a time, so memory stays linear in n.
fn write_rows(w: &mut impl Write, size: i16, graph: &Graph) -> io::Result<()> {
    w.write_all(&size.to_le_bytes())?;
    let mut row = vec![0i16; graph.vertex_count()];
    for u in graph.vertices() {
        row.fill(0);
        for &v in graph.neighbors(u) {
            row[v] = 1;
        }
        for c in &row {
            w.write_all(&c.to_le_bytes())?;
        }
    }
    w.flush()
}

/// Writes `graph` to a new file at `path`.
pub fn write_graph(path: impl AsRef<Path>, graph: &Graph) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OutputCreate {
        path: path.to_owned(),
        source,
    })?;
    write_graph_to(&mut BufWriter::new(file), graph)
}
