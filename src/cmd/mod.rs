pub mod coords;
pub mod generate;
pub mod hives;
pub mod templates;

use clap::Args;
use hiveforge::api::HiveSession;
use hiveforge::config::Config;
use hiveforge::error::HiveResult;
use hiveforge::geometry::{Coordinate, LatLng};
use hiveforge::loader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Where hives come from. Points are added in the order given: `--at` first, then the file.
#[derive(Args, Debug, Clone)]
pub struct HiveArgs {
    /// Hive center as LAT,LNG (repeatable).
    #[arg(long = "at", value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub at: Vec<Coordinate>,

    /// File with one LAT,LNG per line.
    #[arg(long, value_name = "FILE")]
    pub coords_file: Option<PathBuf>,

    /// Step rings per hive (defaults to the configured value).
    #[arg(short = 's', long)]
    pub steps: Option<u32>,

    /// Expand every point into a beehive of hex rings.
    #[arg(long, default_value_t = false)]
    pub beehive: bool,

    /// Beehive depth in rings (defaults to the configured value).
    #[arg(short = 'l', long)]
    pub leaps: Option<u32>,
}

impl HiveArgs {
    pub fn points(&self) -> HiveResult<Vec<Coordinate>> {
        let mut points = self.at.clone();
        if let Some(path) = &self.coords_file {
            info!("📂 Loading coordinates: {}", path.display());
            points.extend(loader::load_coordinates_file(path)?);
        }
        Ok(points)
    }

    pub fn build_session(&self, config: Arc<Config>) -> HiveResult<HiveSession> {
        let session = HiveSession::new(config)?;
        if let Some(steps) = self.steps {
            session.set_steps(steps)?;
        }
        if let Some(leaps) = self.leaps {
            session.set_leaps(leaps)?;
        }

        for point in self.points()? {
            let at = LatLng::from(point);
            if self.beehive {
                session.add_beehive(at)?;
            } else {
                session.add_hive(at)?;
            }
        }
        info!("🐝 {} active hives", session.hive_count());
        Ok(session)
    }
}
