use crate::template::Os;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Boolean toggles composed into `{server-options}`. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ServerFlag {
    NoPokemon,
    NoGyms,
    NoPokestops,
    FixedLocation,
    SearchControl,
}

impl ServerFlag {
    pub fn token(&self) -> &'static str {
        match self {
            Self::NoPokemon => "-np",
            Self::NoGyms => "-ng",
            Self::NoPokestops => "-nk",
            Self::FixedLocation => "-fl",
            Self::SearchControl => "-sc",
        }
    }
}

/// Boolean toggles composed into `{worker-options}`. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum WorkerFlag {
    SpeedScan,
    Encounter,
    NoGyms,
    NoPokestops,
    SpawnpointScanning,
}

impl WorkerFlag {
    pub fn token(&self) -> &'static str {
        match self {
            Self::SpeedScan => "-speed",
            Self::Encounter => "-enc",
            Self::NoGyms => "-ng",
            Self::NoPokestops => "-nk",
            Self::SpawnpointScanning => "-ss",
        }
    }
}

/// A string option that only contributes when toggled on and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOption {
    pub enabled: bool,
    pub value: String,
}

impl TextOption {
    pub fn on(value: impl Into<String>) -> Self {
        Self {
            enabled: true,
            value: value.into(),
        }
    }

    fn active(&self) -> Option<&str> {
        let v = self.value.trim();
        (self.enabled && !v.is_empty()).then_some(v)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortOption {
    pub enabled: bool,
    pub value: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlarmOptions {
    pub config: TextOption,
    pub host: TextOption,
    pub port: PortOption,
}

impl AlarmOptions {
    /// `-cf <config> -H <host> -P <port>`, each segment only when set.
    pub fn compose(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(cf) = self.config.active() {
            parts.push(format!("-cf {}", cf));
        }
        if let Some(host) = self.host.active() {
            parts.push(format!("-H {}", host));
        }
        if self.port.enabled && self.port.value != 0 {
            parts.push(format!("-P {}", self.port.value));
        }
        parts.join(" ")
    }
}

/// Every value feeding substitution. Built by the caller, read by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    pub os: Os,
    pub server_enabled: bool,
    pub alarm_enabled: bool,
    pub server_flags: BTreeSet<ServerFlag>,
    pub worker_flags: BTreeSet<WorkerFlag>,
    pub status_name: TextOption,
    pub webhook: TextOption,
    pub alarm: AlarmOptions,
    pub rocketmap_directory: String,
    pub account_directory: String,
    pub script_delay: u64,
    pub accounts_per_hive: u32,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            os: Os::Windows,
            server_enabled: false,
            alarm_enabled: false,
            server_flags: BTreeSet::new(),
            worker_flags: BTreeSet::new(),
            status_name: TextOption::default(),
            webhook: TextOption::default(),
            alarm: AlarmOptions::default(),
            rocketmap_directory: String::new(),
            account_directory: String::new(),
            script_delay: 0,
            accounts_per_hive: 0,
        }
    }
}

impl OptionSet {
    pub fn set_server_flag(&mut self, flag: ServerFlag, on: bool) {
        if on {
            self.server_flags.insert(flag);
        } else {
            self.server_flags.remove(&flag);
        }
    }

    pub fn set_worker_flag(&mut self, flag: WorkerFlag, on: bool) {
        if on {
            self.worker_flags.insert(flag);
        } else {
            self.worker_flags.remove(&flag);
        }
    }

    pub fn server_options(&self) -> String {
        ServerFlag::iter()
            .filter(|f| self.server_flags.contains(f))
            .map(|f| f.token())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn worker_options(&self) -> String {
        let mut parts: Vec<String> = WorkerFlag::iter()
            .filter(|f| self.worker_flags.contains(f))
            .map(|f| f.token().to_string())
            .collect();

        if let Some(name) = self.status_name.active() {
            parts.push(format!("-sn {}", name));
        }
        if let Some(url) = self.webhook.active() {
            parts.push(format!("-wh {}", url));
        }
        parts.join(" ")
    }

    pub fn alarm_options(&self) -> String {
        self.alarm.compose()
    }

    /// Pause after the worker at `position` (0-based) of `total`. Always zero for the last one.
    pub fn delay_after(&self, position: usize, total: usize) -> u64 {
        if position + 1 >= total {
            0
        } else {
            self.script_delay
        }
    }
}
