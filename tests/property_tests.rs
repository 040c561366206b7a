use hiveforge::geometry::Coordinate;
use hiveforge::hive::Registry;
use hiveforge::options::{OptionSet, ServerFlag, WorkerFlag};
use hiveforge::synth::{coordinates_export, synthesize};
use hiveforge::template::{Os, TemplateDefaults, TemplateSet};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

prop_compose! {
    fn arb_coordinate()(lat in -90.0..=90.0f64, lng in -180.0..=180.0f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }
}

prop_compose! {
    fn arb_registry()(
        points in proptest::collection::vec((arb_coordinate(), 1u32..=100), 0..20)
    ) -> Registry {
        let mut reg = Registry::new(100);
        for (c, steps) in points {
            reg.add(c, steps).unwrap();
        }
        reg
    }
}

fn marker_templates() -> TemplateSet {
    TemplateSet::from_defaults(
        Os::Linux,
        &TemplateDefaults {
            setup: "SETUP".into(),
            server: "SERVER {location}".into(),
            alarm: "ALARM".into(),
            worker: "WORKER {index} {location} {steps}".into(),
            delay: "DELAY {script-delay}".into(),
            filename: "run.sh".into(),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_display_parse_round_trip(c in arb_coordinate()) {
        let back: Coordinate = c.to_string().parse().unwrap();
        prop_assert_eq!(back, c);
    }

    #[test]
    fn test_section_counts(reg in arb_registry(), delay in 0u64..1000, preview in any::<bool>()) {
        let options = OptionSet { script_delay: delay, ..OptionSet::default() };
        let out = synthesize(reg.active_hives(), &marker_templates(), &options, preview);
        let n = reg.len();

        if n == 0 {
            prop_assert_eq!(out, "");
        } else {
            let workers = out.lines().filter(|l| l.starts_with("WORKER ")).count();
            let delays = out.lines().filter(|l| l.starts_with("DELAY ")).count();
            let expected_workers = if preview { 1 } else { n };
            let expected_delays = if delay == 0 { 0 } else { expected_workers - 1 };

            prop_assert_eq!(workers, expected_workers);
            prop_assert_eq!(delays, expected_delays);
            prop_assert!(out.ends_with('\n'));
            prop_assert!(!out.ends_with("\n\n"));
            prop_assert!(out.lines().last().unwrap().starts_with("WORKER "));
        }
    }

    #[test]
    fn test_synthesize_deterministic(reg in arb_registry(), delay in 0u64..1000) {
        let options = OptionSet { script_delay: delay, server_enabled: true, ..OptionSet::default() };
        let a = synthesize(reg.active_hives(), &marker_templates(), &options, false);
        let b = synthesize(reg.active_hives(), &marker_templates(), &options, false);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_export_line_per_hive(reg in arb_registry()) {
        let export = coordinates_export(reg.active_hives());
        let lines: Vec<&str> = if export.is_empty() { vec![] } else { export.split('\n').collect() };
        prop_assert_eq!(lines.len(), reg.len());
        for (line, hive) in lines.iter().zip(reg.active_hives()) {
            prop_assert_eq!(*line, hive.center_string());
        }
    }

    #[test]
    fn test_flag_composition_order_independent(
        server_mask in proptest::collection::vec(any::<bool>(), 5),
        worker_mask in proptest::collection::vec(any::<bool>(), 5),
    ) {
        let servers: Vec<ServerFlag> = ServerFlag::iter()
            .zip(&server_mask)
            .filter(|(_, on)| **on)
            .map(|(f, _)| f)
            .collect();
        let workers: Vec<WorkerFlag> = WorkerFlag::iter()
            .zip(&worker_mask)
            .filter(|(_, on)| **on)
            .map(|(f, _)| f)
            .collect();

        let mut forward = OptionSet::default();
        for &f in &servers { forward.set_server_flag(f, true); }
        for &f in &workers { forward.set_worker_flag(f, true); }

        let mut backward = OptionSet::default();
        for &f in servers.iter().rev() { backward.set_server_flag(f, true); }
        for &f in workers.iter().rev() { backward.set_worker_flag(f, true); }

        prop_assert_eq!(forward.server_options(), backward.server_options());
        prop_assert_eq!(forward.worker_options(), backward.worker_options());
    }
}
