use hiveforge::loader::{load_coordinates, load_coordinates_file};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_loads_export_format() {
    let coords = load_coordinates(Cursor::new("1,2\n3,4")).unwrap();
    let text: Vec<String> = coords.iter().map(|c| c.to_string()).collect();
    assert_eq!(text, vec!["1,2", "3,4"]);
}

#[test]
fn test_skips_bad_rows() {
    let data = "# study area\n39.7683, -86.1652\n\nnot,numbers\n95,10\n7\n40.0,-86.0\n";
    let coords = load_coordinates(Cursor::new(data)).unwrap();
    let text: Vec<String> = coords.iter().map(|c| c.to_string()).collect();
    assert_eq!(text, vec!["39.7683,-86.1652", "40,-86"]);
}

#[test]
fn test_extra_columns_ignored() {
    let coords = load_coordinates(Cursor::new("1,2,downtown\n")).unwrap();
    assert_eq!(coords.len(), 1);
    assert_eq!(coords[0].to_string(), "1,2");
}

#[test]
fn test_loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "10.5,20.25").unwrap();
    writeln!(file, "-10.5,-20.25").unwrap();

    let coords = load_coordinates_file(file.path()).unwrap();
    assert_eq!(coords.len(), 2);
    assert_eq!(coords[1].to_string(), "-10.5,-20.25");
}

#[test]
fn test_missing_file_is_error() {
    assert!(load_coordinates_file("/no/such/coords.txt").is_err());
}
