//! Unit tests for catalog parsing.

use super::*;
use geo::Coord;
use rstest::rstest;
use std::io::{Cursor, Read};

fn coord(x: f64, y: f64) -> BoundaryPoint {
    Coord { x, y }
}

#[rstest]
fn converts_right_ascension_hours() {
    let line = parse_line("2.0 -30.5 CET").expect("usable line");
    assert_eq!(line.point, coord(30.0, -30.5));
}

#[rstest]
#[case("")]
#[case("   \t ")]
#[case("1.0 2.0")]
#[case("1.0")]
#[case("abc 0.0 X Y")]
#[case("1.0 north X")]
#[case("RA DEC CODE")]
fn drops_unusable_lines(#[case] raw: &str) {
    assert!(parse_line(raw).is_none(), "{raw:?} should be ignored");
}

#[rstest]
fn accepts_arbitrary_whitespace() {
    let line = parse_line("  1.5\t\t-2.25   AND    PEG \r\n").expect("usable line");
    assert_eq!(line.point, coord(22.5, -2.25));
    assert_eq!(line.codes, ["AND", "PEG"]);
}

#[rstest]
fn shares_multi_code_points_with_each_region() {
    let groups = parse_catalog(Cursor::new("1.0 0.0 A B\n")).expect("parse catalog");
    for code in ["A", "B"] {
        let group = groups.get(code).expect("region recorded");
        assert_eq!(group.points, vec![coord(15.0, 0.0)]);
    }
}

#[rstest]
fn non_numeric_line_contributes_nothing() {
    let groups = parse_catalog(Cursor::new("abc 0.0 X Y\n")).expect("parse catalog");
    assert!(groups.is_empty());
}

#[rstest]
fn keeps_catalog_order_and_repeats() {
    let catalog = "0.0 0.0 Tri\n0.0 0.0 Tri\n1.0 0.0 Tri\n# comment\n1.0 1.0 Tri\n";
    let groups = parse_catalog(Cursor::new(catalog)).expect("parse catalog");
    let group = groups.get("Tri").expect("region recorded");
    assert_eq!(
        group.points,
        vec![
            coord(0.0, 0.0),
            coord(0.0, 0.0),
            coord(15.0, 0.0),
            coord(15.0, 15.0)
        ]
    );
}

#[rstest]
fn regions_follow_first_appearance() {
    let catalog = "0.0 0.0 UMI\n0.0 1.0 AND PEG\n0.0 2.0 UMI\n";
    let groups = parse_catalog(Cursor::new(catalog)).expect("parse catalog");
    let codes: Vec<_> = groups.codes().collect();
    assert_eq!(codes, ["UMI", "AND", "PEG"]);
}

#[rstest]
fn invalid_utf8_is_fatal() {
    let bytes: &[u8] = b"0.0 0.0 A\n\xff\xfe 1.0 B\n";
    let err = parse_catalog(Cursor::new(bytes)).expect_err("invalid utf-8 must fail");
    match err {
        CatalogError::Read { line, .. } => assert_eq!(line, 2),
        other => panic!("expected read error, got {other:?}"),
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk went away"))
    }
}

#[rstest]
fn reader_failures_are_fatal() {
    let err = parse_catalog(BufReader::new(FailingReader)).expect_err("read must fail");
    assert!(matches!(err, CatalogError::Read { line: 1, .. }));
}

#[rstest]
fn missing_file_reports_path() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let missing = Utf8PathBuf::from_path_buf(dir.path().join("constbnd.dat")).expect("utf-8 path");
    let err = read_catalog(&missing).expect_err("missing catalog must fail");
    match err {
        CatalogError::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("expected open error, got {other:?}"),
    }
}
