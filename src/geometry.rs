use crate::error::{HiveError, HiveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Radius covered by a single scan step.
pub const STEP_RADIUS_M: f64 = 70.0;

/// Default ceiling on beehive depth.
pub const DEFAULT_MAX_LEAPS: u32 = 20;

/// Hard ceiling on any configured beehive depth (about three million hives).
pub const LEAPS_LIMIT: u32 = 1000;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Raw latitude/longitude pair as delivered by a map click or geocoder result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A validated WGS84 point. Constructed only through [`Coordinate::new`] (or the
/// `TryFrom`/`FromStr` impls, which delegate to it), so every live value is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng", into = "LatLng")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> HiveResult<Self> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lng_ok = lng.is_finite() && (-180.0..=180.0).contains(&lng);
        if !lat_ok || !lng_ok {
            return Err(HiveError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// For compile-time constants known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance in metres (haversine).
    pub fn distance_m(&self, other: &Coordinate) -> f64 {
        let (phi1, phi2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_phi = phi2 - phi1;
        let d_lambda = (other.lng - self.lng).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Point reached by travelling `distance_m` along `bearing_deg` (clockwise from north).
    /// Longitude wraps across the antimeridian, latitude is bounded by construction.
    pub fn destination(&self, bearing_deg: f64, distance_m: f64) -> Coordinate {
        let delta = distance_m / EARTH_RADIUS_M;
        let theta = bearing_deg.to_radians();
        let phi1 = self.lat.to_radians();
        let lambda1 = self.lng.to_radians();

        let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
        let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

        let lat = phi2.to_degrees().clamp(-90.0, 90.0);
        let lng = wrap_longitude(lambda2.to_degrees());
        Coordinate { lat, lng }
    }

    /// Moves the point by a planar offset in metres (east, north).
    pub fn offset(&self, east_m: f64, north_m: f64) -> Coordinate {
        let distance = east_m.hypot(north_m);
        if distance == 0.0 {
            return *self;
        }
        let bearing = east_m.atan2(north_m).to_degrees();
        self.destination(bearing, distance)
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    if (-180.0..=180.0).contains(&lng) {
        lng
    } else {
        (lng + 540.0).rem_euclid(360.0) - 180.0
    }
}

impl TryFrom<LatLng> for Coordinate {
    type Error = HiveError;

    fn try_from(raw: LatLng) -> HiveResult<Self> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl From<Coordinate> for LatLng {
    fn from(c: Coordinate) -> Self {
        LatLng {
            lat: c.lat,
            lng: c.lng,
        }
    }
}

// `{}` on f64 is the shortest representation that round-trips, and is locale free.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinate {
    type Err = HiveError;

    fn from_str(s: &str) -> HiveResult<Self> {
        let bad = || HiveError::InvalidCoordinateText(s.to_string());
        let (lat, lng) = s.split_once(',').ok_or_else(bad)?;
        let lat: f64 = lat.trim().parse().map_err(|_| bad())?;
        let lng: f64 = lng.trim().parse().map_err(|_| bad())?;
        Coordinate::new(lat, lng)
    }
}

/// Scan radius of a hive walking `steps` hex rings of [`STEP_RADIUS_M`] circles.
pub fn hive_radius_m(steps: u32) -> f64 {
    let rings = steps.saturating_sub(1) as f64;
    STEP_RADIUS_M * (SQRT_3 * rings + 1.0)
}

/// Distance between neighbouring hive centers so that their scan circles tile without gaps.
pub fn hive_spacing_m(steps: u32) -> f64 {
    SQRT_3 * hive_radius_m(steps)
}

/// Number of hives in a beehive `leaps` rings deep (center included).
pub fn beehive_size(leaps: u32) -> usize {
    let l = leaps as usize;
    3usize
        .saturating_mul(l)
        .saturating_mul(l.saturating_add(1))
        .saturating_add(1)
}

// Axial hex directions, walked in this order around every ring.
const HEX_DIRECTIONS: [(i64, i64); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Axial hex cells of a beehive: the origin first, then ring 1, ring 2, ... up to `leaps`.
pub fn beehive_cells(leaps: u32) -> Vec<(i64, i64)> {
    let mut cells = Vec::with_capacity(beehive_size(leaps));
    cells.push((0, 0));

    for ring in 1..=leaps as i64 {
        let (dq, dr) = HEX_DIRECTIONS[4];
        let mut cell = (dq * ring, dr * ring);
        for &(step_q, step_r) in &HEX_DIRECTIONS {
            for _ in 0..ring {
                cells.push(cell);
                cell = (cell.0 + step_q, cell.1 + step_r);
            }
        }
    }
    cells
}

/// Centers of a beehive around `center`, in [`beehive_cells`] order.
pub fn beehive_centers(center: &Coordinate, steps: u32, leaps: u32) -> Vec<Coordinate> {
    let spacing = hive_spacing_m(steps);

    beehive_cells(leaps)
        .into_iter()
        .map(|(q, r)| {
            let (q, r) = (q as f64, r as f64);
            let east = spacing * (q + r / 2.0);
            let north = -spacing * (SQRT_3 / 2.0) * r;
            center.offset(east, north)
        })
        .collect()
}
