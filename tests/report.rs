use std::io::{self, Write};

use common::{init_logger, path, triangle};
use graph_connectivity::{
    report::{report_string, write_report, write_report_to},
    Connectivity, Error, Graph,
};

mod common;

#[test]
fn test_path_report() {
    init_logger();
    let report = report_string(&Connectivity::analyze(&path(4)));
    assert_eq!(
        report,
        "\
a) Articulation points and bridges:
Articulation points:
1 2
Bridges:
(2, 3) (1, 2) (0, 1)

b) Biconnected components:
Component 1:
(2, 3)
Component 2:
(1, 2)
Component 3:
(0, 1)

c) Connected components:
Component 1: 0 1 2 3
"
    );
}

#[test]
fn test_empty_sections() {
    let report = report_string(&Connectivity::analyze(&Graph::new(2).unwrap()));
    assert_eq!(
        report,
        "\
a) Articulation points and bridges:
Articulation points:
None
Bridges:
None

b) Biconnected components:

c) Connected components:
Component 1: 0
Component 2: 1
"
    );
}

#[test]
fn test_write_to_matches_string() {
    let c = Connectivity::analyze(&triangle());
    let mut buf: Vec<u8> = vec![];
    write_report_to(&mut buf, &c).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), report_string(&c));
}

#[test]
fn test_output_create_error() {
    let c = Connectivity::analyze(&triangle());
    let path = std::env::temp_dir()
        .join("graph_connectivity_missing_dir")
        .join("out.txt");
    assert!(matches!(
        write_report(&path, &c),
        Err(Error::OutputCreate { .. })
    ));
}

/// Sink that refuses every write.
struct Full;

impl Write for Full {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::WriteZero.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_output_write_error() {
    let c = Connectivity::analyze(&triangle());
    let err = write_report_to(&mut Full, &c).unwrap_err();
    assert!(
        matches!(&err, Error::OutputWrite(e) if e.kind() == io::ErrorKind::WriteZero),
        "{err}"
    );
}
