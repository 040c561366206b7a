//! Script synthesis: turns the active hives, one template set and an option set into a
//! launch script. Everything here is pure; the same inputs always yield the same bytes.

use crate::hive::Hive;
use crate::options::OptionSet;
use crate::template::{substitute, TemplateSet};
use serde::Serialize;

/// A finished script together with the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    pub filename: String,
    pub contents: String,
}

fn section(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn worker_vars(hive: &Hive, index: usize, options: &OptionSet) -> Vec<(&'static str, String)> {
    // worker-options goes first so tokens inside it (e.g. a status name of "Hive{index}")
    // are resolved by the pairs that follow.
    vec![
        ("worker-options", options.worker_options()),
        ("rocketmap-directory", options.rocketmap_directory.clone()),
        ("account-directory", options.account_directory.clone()),
        ("index", (index + 1).to_string()),
        ("location", hive.center_string()),
        ("steps", hive.steps.to_string()),
        ("workers", options.accounts_per_hive.to_string()),
    ]
}

/// Builds the script text. Returns an empty string when there are no hives.
///
/// With `preview` only the first hive is rendered, so no delay section can appear.
pub fn synthesize(
    hives: &[Hive],
    templates: &TemplateSet,
    options: &OptionSet,
    preview: bool,
) -> String {
    let Some(first) = hives.first() else {
        return String::new();
    };

    let mut out = String::new();
    section(&mut out, templates.setup.value());

    if options.server_enabled {
        let vars = [
            ("rocketmap-directory", options.rocketmap_directory.clone()),
            ("location", first.center_string()),
            ("server-options", options.server_options()),
        ];
        section(&mut out, &substitute(templates.server.value(), &vars));
    }

    if options.alarm_enabled {
        let vars = [
            ("rocketmap-directory", options.rocketmap_directory.clone()),
            ("alarm-options", options.alarm_options()),
        ];
        section(&mut out, &substitute(templates.alarm.value(), &vars));
    }

    let workers = if preview { &hives[..1] } else { hives };
    let total = workers.len();

    for (i, hive) in workers.iter().enumerate() {
        section(
            &mut out,
            &substitute(templates.worker.value(), &worker_vars(hive, i, options)),
        );

        let delay = options.delay_after(i, total);
        if delay > 0 {
            let vars = [("script-delay", delay.to_string())];
            section(&mut out, &substitute(templates.delay.value(), &vars));
        }
    }

    out
}

/// Full (non-preview) run paired with the template set's file name.
pub fn render(hives: &[Hive], templates: &TemplateSet, options: &OptionSet) -> Script {
    Script {
        filename: templates.filename.value().to_string(),
        contents: synthesize(hives, templates, options, false),
    }
}

/// One `"{lat},{lng}"` per line in registry order, no trailing line break.
pub fn coordinates_export(hives: &[Hive]) -> String {
    hives
        .iter()
        .map(Hive::center_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn download_enabled(hives: &[Hive], form_valid: bool) -> bool {
    !hives.is_empty() && form_valid
}
