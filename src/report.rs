//! Plain-text report of a [`Connectivity`].

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{
    analysis::Connectivity,
    error::{Error, Result},
    graph::Edge,
};

struct PrettyEdge(Edge);

impl Display for PrettyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0 .0, self.0 .1)
    }
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_none(s: String) -> String {
    if s.is_empty() {
        "None".to_owned()
    } else {
        s
    }
}

fn write_sections(w: &mut impl Write, c: &Connectivity) -> io::Result<()> {
    writeln!(w, "a) Articulation points and bridges:")?;
    writeln!(w, "Articulation points:")?;
    writeln!(w, "{}", or_none(join(&c.cuts.articulation_points)))?;
    writeln!(w, "Bridges:")?;
    writeln!(
        w,
        "{}",
        or_none(join(c.cuts.bridges.iter().copied().map(PrettyEdge)))
    )?;

    writeln!(w)?;
    writeln!(w, "b) Biconnected components:")?;
    for (i, component) in c.biconnected_components.iter().enumerate() {
        writeln!(w, "Component {}:", i + 1)?;
        writeln!(w, "{}", join(component.iter().copied().map(PrettyEdge)))?;
    }

    writeln!(w)?;
    writeln!(w, "c) Connected components:")?;
    for (i, component) in c.connected_components.iter().enumerate() {
        writeln!(w, "Component {}: {}", i + 1, join(component))?;
    }
    w.flush()
}

/// Writes the report for `connectivity` to `w`.
pub fn write_report_to(w: &mut impl Write, connectivity: &Connectivity) -> Result<()> {
    write_sections(w, connectivity).map_err(Error::OutputWrite)
}

/// Writes the report for `connectivity` to a new file at `path`.
pub fn write_report(path: impl AsRef<Path>, connectivity: &Connectivity) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OutputCreate {
        path: path.to_owned(),
        source,
    })?;
    write_report_to(&mut BufWriter::new(file), connectivity)?;
    log::info!("report written to {}", path.display());
    Ok(())
}

/// The report as a string.
pub fn report_string(connectivity: &Connectivity) -> String {
    let mut buf = Vec::new();
    write_sections(&mut buf, connectivity).expect("writing to a Vec doesn't fail");
    String::from_utf8(buf).expect("report is valid UTF-8")
}
