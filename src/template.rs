use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Os {
    #[default]
    Windows,
    Linux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TemplateKind {
    Setup,
    Server,
    Alarm,
    Worker,
    Delay,
    Filename,
}

/// Template text as found in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefaults {
    pub setup: String,
    pub server: String,
    pub alarm: String,
    pub worker: String,
    pub delay: String,
    pub filename: String,
}

/// A possibly partial template bundle; absent entries keep the OS default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOverrides {
    pub setup: Option<String>,
    pub server: Option<String>,
    pub alarm: Option<String>,
    pub worker: Option<String>,
    pub delay: Option<String>,
    pub filename: Option<String>,
}

impl TemplateOverrides {
    pub fn apply(self, base: TemplateDefaults) -> TemplateDefaults {
        TemplateDefaults {
            setup: self.setup.unwrap_or(base.setup),
            server: self.server.unwrap_or(base.server),
            alarm: self.alarm.unwrap_or(base.alarm),
            worker: self.worker.unwrap_or(base.worker),
            delay: self.delay.unwrap_or(base.delay),
            filename: self.filename.unwrap_or(base.filename),
        }
    }
}

impl TemplateDefaults {
    pub fn windows() -> Self {
        Self {
            setup: "taskkill /IM python.exe /F".into(),
            server: r#"Start "Server" /d {rocketmap-directory} /MIN python.exe runserver.py -os -l "{location}" {server-options}"#.into(),
            alarm: r#"Start "Alarm" /d {rocketmap-directory} /MIN python.exe Tools/PokeAlarm/start_pokealarm.py {alarm-options}"#.into(),
            worker: r#"Start "Worker{index}" /d {rocketmap-directory} /MIN python.exe runserver.py -ns -ac {account-directory}hive{index}.csv -l "{location}" {worker-options} -st {steps} -w {workers}"#.into(),
            delay: "ping 127.0.0.1 -n {script-delay} > null".into(),
            filename: "start-scan.bat".into(),
        }
    }

    pub fn linux() -> Self {
        Self {
            setup: "#!/usr/bin/env bash".into(),
            server: "screen -d -m -S MAP python runserver.py -os -l '{location}' {server-options}"
                .into(),
            alarm: "screen -d -m -S ALARM python Tools/PokeAlarm/start_pokealarm.py {alarm-options}"
                .into(),
            worker: "screen -d -m -S HIVE{index} python runserver.py -ns -ac {account-directory}hive{index}.csv -l '{location}' {worker-options} -st {steps} -w {workers}".into(),
            delay: "sleep {script-delay}".into(),
            filename: "start-scan.sh".into(),
        }
    }
}

/// A single editable template. `dirty` is set by any edit and cleared by [`Template::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    default_value: String,
    value: String,
    dirty: bool,
}

impl Template {
    pub fn new(default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        Self {
            value: default_value.clone(),
            default_value,
            dirty: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces the value; only an actual change marks the template dirty.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.value {
            self.value = value;
            self.dirty = true;
        }
    }

    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.dirty = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    pub os: Os,
    pub setup: Template,
    pub server: Template,
    pub alarm: Template,
    pub worker: Template,
    pub delay: Template,
    pub filename: Template,
}

impl TemplateSet {
    pub fn from_defaults(os: Os, defaults: &TemplateDefaults) -> Self {
        Self {
            os,
            setup: Template::new(defaults.setup.as_str()),
            server: Template::new(defaults.server.as_str()),
            alarm: Template::new(defaults.alarm.as_str()),
            worker: Template::new(defaults.worker.as_str()),
            delay: Template::new(defaults.delay.as_str()),
            filename: Template::new(defaults.filename.as_str()),
        }
    }

    pub fn get(&self, kind: TemplateKind) -> &Template {
        match kind {
            TemplateKind::Setup => &self.setup,
            TemplateKind::Server => &self.server,
            TemplateKind::Alarm => &self.alarm,
            TemplateKind::Worker => &self.worker,
            TemplateKind::Delay => &self.delay,
            TemplateKind::Filename => &self.filename,
        }
    }

    pub fn get_mut(&mut self, kind: TemplateKind) -> &mut Template {
        match kind {
            TemplateKind::Setup => &mut self.setup,
            TemplateKind::Server => &mut self.server,
            TemplateKind::Alarm => &mut self.alarm,
            TemplateKind::Worker => &mut self.worker,
            TemplateKind::Delay => &mut self.delay,
            TemplateKind::Filename => &mut self.filename,
        }
    }

    pub fn is_dirty(&self) -> bool {
        [
            &self.setup,
            &self.server,
            &self.alarm,
            &self.worker,
            &self.delay,
            &self.filename,
        ]
        .iter()
        .any(|t| t.is_dirty())
    }

    pub fn reset(&mut self) {
        for t in [
            &mut self.setup,
            &mut self.server,
            &mut self.alarm,
            &mut self.worker,
            &mut self.delay,
            &mut self.filename,
        ] {
            t.reset();
        }
    }
}

/// One template set per OS.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLibrary {
    windows: TemplateSet,
    linux: TemplateSet,
}

impl TemplateLibrary {
    pub fn new(windows: &TemplateDefaults, linux: &TemplateDefaults) -> Self {
        Self {
            windows: TemplateSet::from_defaults(Os::Windows, windows),
            linux: TemplateSet::from_defaults(Os::Linux, linux),
        }
    }

    pub fn get(&self, os: Os) -> &TemplateSet {
        match os {
            Os::Windows => &self.windows,
            Os::Linux => &self.linux,
        }
    }

    pub fn get_mut(&mut self, os: Os) -> &mut TemplateSet {
        match os {
            Os::Windows => &mut self.windows,
            Os::Linux => &mut self.linux,
        }
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::new(&TemplateDefaults::windows(), &TemplateDefaults::linux())
    }
}

/// Replaces every `{token}` with its value, pair by pair in the given order.
/// Tokens without a pair are left in place.
pub fn substitute(text: &str, vars: &[(&str, String)]) -> String {
    let mut out = text.to_string();
    for (token, value) in vars {
        out = out.replace(&format!("{{{}}}", token), value);
    }
    out
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Names of `{token}` placeholders still present in `text`, first occurrence order, no repeats.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if !name.is_empty() && name.chars().all(is_token_char) {
                    if !found.iter().any(|f| f == name) {
                        found.push(name.to_string());
                    }
                    rest = &after[close + 1..];
                } else {
                    rest = after;
                }
            }
            None => break,
        }
    }
    found
}
