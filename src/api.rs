use crate::config::Config;
use crate::error::{HiveError, HiveResult};
use crate::geometry::{Coordinate, LatLng};
use crate::hive::{Hive, HiveId, Registry};
use crate::options::OptionSet;
use crate::synth::{self, Script};
use crate::template::{unresolved_tokens, Os, TemplateKind, TemplateLibrary, TemplateSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

struct SessionState {
    registry: Registry,
    templates: TemplateLibrary,
    steps: u32,
    leaps: u32,
}

/// One map session. All mutations go through a single lock, so id assignment and
/// ordering stay monotonic when events arrive from several threads.
pub struct HiveSession {
    config: Arc<Config>,
    state: Mutex<SessionState>,
}

impl HiveSession {
    pub fn new(config: Arc<Config>) -> HiveResult<Self> {
        config.validate()?;
        let state = SessionState {
            registry: Registry::new(config.max_steps).with_max_leaps(config.max_leaps),
            templates: config.template_library(),
            steps: config.steps,
            leaps: config.leaps,
        };
        Ok(Self {
            config,
            state: Mutex::new(state),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Every mutation is a single push/retain, so a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Step count applied to hives created from now on.
    pub fn set_steps(&self, steps: u32) -> HiveResult<()> {
        if steps == 0 || steps > self.config.max_steps {
            return Err(HiveError::InvalidStepCount {
                steps,
                max: self.config.max_steps,
            });
        }
        self.lock().steps = steps;
        Ok(())
    }

    /// Beehive depth applied to beehives added from now on.
    pub fn set_leaps(&self, leaps: u32) -> HiveResult<()> {
        if leaps > self.config.max_leaps {
            return Err(HiveError::InvalidLeapCount {
                leaps,
                max: self.config.max_leaps,
            });
        }
        self.lock().leaps = leaps;
        Ok(())
    }

    pub fn add_hive(&self, at: LatLng) -> HiveResult<Hive> {
        let center = Coordinate::try_from(at)?;
        let mut state = self.lock();
        let steps = state.steps;
        state.registry.add(center, steps)
    }

    pub fn add_beehive(&self, at: LatLng) -> HiveResult<Vec<Hive>> {
        let center = Coordinate::try_from(at)?;
        let mut state = self.lock();
        let (steps, leaps) = (state.steps, state.leaps);
        let added = state.registry.add_beehive(center, steps, leaps)?;
        info!("Beehive of {} hives added at {}", added.len(), center);
        Ok(added)
    }

    pub fn remove_hive(&self, id: HiveId) -> bool {
        self.lock().registry.remove(id)
    }

    pub fn clear(&self) {
        self.lock().registry.clear();
    }

    pub fn hives(&self) -> Vec<Hive> {
        self.lock().registry.active_hives().to_vec()
    }

    pub fn hive_count(&self) -> usize {
        self.lock().registry.len()
    }

    pub fn templates(&self, os: Os) -> TemplateSet {
        self.lock().templates.get(os).clone()
    }

    pub fn edit_template(&self, os: Os, kind: TemplateKind, value: impl Into<String>) {
        self.lock().templates.get_mut(os).get_mut(kind).set(value);
    }

    pub fn reset_templates(&self, os: Os) {
        self.lock().templates.get_mut(os).reset();
    }

    /// Script for the current state. Leftover placeholders are reported, never fatal.
    pub fn generate(&self, options: &OptionSet, preview: bool) -> String {
        let state = self.lock();
        let templates = state.templates.get(options.os);
        let script = synth::synthesize(state.registry.active_hives(), templates, options, preview);

        let leftover = unresolved_tokens(&script);
        if !leftover.is_empty() {
            warn!("Unresolved placeholders in script: {}", leftover.join(", "));
        }
        script
    }

    pub fn render(&self, options: &OptionSet) -> Script {
        let state = self.lock();
        synth::render(
            state.registry.active_hives(),
            state.templates.get(options.os),
            options,
        )
    }

    pub fn coordinates(&self) -> String {
        synth::coordinates_export(self.lock().registry.active_hives())
    }

    pub fn download_enabled(&self, form_valid: bool) -> bool {
        synth::download_enabled(self.lock().registry.active_hives(), form_valid)
    }
}
