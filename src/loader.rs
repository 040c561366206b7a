use crate::error::HiveResult;
use crate::geometry::Coordinate;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reads `lat,lng` rows (the coordinate export format). Rows that are not two numbers
/// in range are skipped with a warning; blank lines are ignored.
pub fn load_coordinates<R: Read>(reader: R) -> HiveResult<Vec<Coordinate>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut coords = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        if rec.len() < 2 {
            warn!("[Row {}] expected 'lat,lng', got {} field(s)", row_idx + 1, rec.len());
            skipped += 1;
            continue;
        }

        let text = format!("{},{}", &rec[0], &rec[1]);
        match text.parse::<Coordinate>() {
            Ok(c) => coords.push(c),
            Err(e) => {
                warn!("[Row {}] {}", row_idx + 1, e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} invalid coordinate rows.", skipped);
    }
    debug!("Loaded {} coordinates", coords.len());
    Ok(coords)
}

pub fn load_coordinates_file<P: AsRef<Path>>(path: P) -> HiveResult<Vec<Coordinate>> {
    let file = File::open(path)?;
    load_coordinates(file)
}
