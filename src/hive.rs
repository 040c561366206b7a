use crate::error::{HiveError, HiveResult};
use crate::geometry::{self, Coordinate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HiveId(pub u64);

impl fmt::Display for HiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scan region. Steps are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hive {
    pub id: HiveId,
    pub center: Coordinate,
    pub steps: u32,
}

impl Hive {
    /// `"{lat},{lng}"` form used for `{location}` and the coordinate export.
    pub fn center_string(&self) -> String {
        self.center.to_string()
    }

    pub fn radius_m(&self) -> f64 {
        geometry::hive_radius_m(self.steps)
    }
}

/// Ordered set of active hives. Order is insertion order and drives worker indices.
#[derive(Debug, Clone)]
pub struct Registry {
    hives: Vec<Hive>,
    next_id: u64,
    max_steps: u32,
    max_leaps: u32,
}

impl Registry {
    pub fn new(max_steps: u32) -> Self {
        Self {
            hives: Vec::new(),
            next_id: 1,
            max_steps,
            max_leaps: geometry::DEFAULT_MAX_LEAPS,
        }
    }

    /// Sets the beehive depth ceiling, capped at [`geometry::LEAPS_LIMIT`].
    pub fn with_max_leaps(mut self, max_leaps: u32) -> Self {
        self.max_leaps = max_leaps.min(geometry::LEAPS_LIMIT);
        self
    }

    pub fn max_leaps(&self) -> u32 {
        self.max_leaps
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    fn check_steps(&self, steps: u32) -> HiveResult<()> {
        if steps == 0 || steps > self.max_steps {
            return Err(HiveError::InvalidStepCount {
                steps,
                max: self.max_steps,
            });
        }
        Ok(())
    }

    fn check_leaps(&self, leaps: u32) -> HiveResult<()> {
        if leaps > self.max_leaps {
            return Err(HiveError::InvalidLeapCount {
                leaps,
                max: self.max_leaps,
            });
        }
        Ok(())
    }

    fn push(&mut self, center: Coordinate, steps: u32) -> Hive {
        let hive = Hive {
            id: HiveId(self.next_id),
            center,
            steps,
        };
        self.next_id += 1;
        self.hives.push(hive.clone());
        debug!("Added hive {} at {} ({} steps)", hive.id, hive.center, steps);
        hive
    }

    /// Appends a hive. On error the registry is left untouched.
    pub fn add(&mut self, center: Coordinate, steps: u32) -> HiveResult<Hive> {
        self.check_steps(steps)?;
        Ok(self.push(center, steps))
    }

    /// Same as [`Registry::add`] for raw, unvalidated input.
    pub fn add_lat_lng(&mut self, lat: f64, lng: f64, steps: u32) -> HiveResult<Hive> {
        let center = Coordinate::new(lat, lng)?;
        self.add(center, steps)
    }

    /// Appends a whole beehive around `center`: the center hive, then `leaps` hex rings.
    pub fn add_beehive(
        &mut self,
        center: Coordinate,
        steps: u32,
        leaps: u32,
    ) -> HiveResult<Vec<Hive>> {
        self.check_steps(steps)?;
        self.check_leaps(leaps)?;

        let centers = geometry::beehive_centers(&center, steps, leaps);
        debug!(
            "Beehive at {}: {} hives, {:.0} m apart",
            center,
            centers.len(),
            geometry::hive_spacing_m(steps)
        );
        Ok(centers.into_iter().map(|c| self.push(c, steps)).collect())
    }

    /// Removes the hive if present. Unknown ids are ignored.
    pub fn remove(&mut self, id: HiveId) -> bool {
        let before = self.hives.len();
        self.hives.retain(|h| h.id != id);
        let removed = self.hives.len() != before;
        if removed {
            debug!("Removed hive {}", id);
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("Cleared {} hives", self.hives.len());
        self.hives.clear();
    }

    pub fn active_hives(&self) -> &[Hive] {
        &self.hives
    }

    pub fn get(&self, id: HiveId) -> Option<&Hive> {
        self.hives.iter().find(|h| h.id == id)
    }

    pub fn center_string(&self, id: HiveId) -> Option<String> {
        self.get(id).map(Hive::center_string)
    }

    pub fn steps_of(&self, id: HiveId) -> Option<u32> {
        self.get(id).map(|h| h.steps)
    }

    pub fn len(&self) -> usize {
        self.hives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hives.is_empty()
    }
}
