use hiveforge::api::HiveSession;
use hiveforge::config::Config;
use hiveforge::error::HiveError;
use hiveforge::geometry::LatLng;
use hiveforge::hive::HiveId;
use hiveforge::options::OptionSet;
use hiveforge::template::{Os, TemplateKind};
use std::sync::Arc;
use std::thread;

fn session() -> HiveSession {
    HiveSession::new(Arc::new(Config::default())).unwrap()
}

fn at(lat: f64, lng: f64) -> LatLng {
    LatLng { lat, lng }
}

#[test]
fn test_add_uses_configured_steps() {
    let s = session();
    let h = s.add_hive(at(1.0, 2.0)).unwrap();
    assert_eq!(h.steps, 18);

    s.set_steps(7).unwrap();
    s.add_hive(at(3.0, 4.0)).unwrap();

    let steps: Vec<u32> = s.hives().iter().map(|h| h.steps).collect();
    assert_eq!(steps, vec![18, 7]);
}

#[test]
fn test_set_steps_validates() {
    let s = session();
    assert!(matches!(
        s.set_steps(0),
        Err(HiveError::InvalidStepCount { .. })
    ));
    assert!(matches!(
        s.set_steps(101),
        Err(HiveError::InvalidStepCount { .. })
    ));
}

#[test]
fn test_set_leaps_validates() {
    let s = session();
    assert!(matches!(
        s.set_leaps(21),
        Err(HiveError::InvalidLeapCount { leaps: 21, max: 20 })
    ));
    assert!(matches!(
        s.set_leaps(u32::MAX),
        Err(HiveError::InvalidLeapCount { .. })
    ));
    assert_eq!(s.add_beehive(at(0.0, 0.0)).unwrap().len(), 7);
}

#[test]
fn test_invalid_coordinate_leaves_session_unchanged() {
    let s = session();
    s.add_hive(at(1.0, 2.0)).unwrap();
    assert!(s.add_hive(at(-100.0, 2.0)).is_err());
    assert_eq!(s.hive_count(), 1);
}

#[test]
fn test_beehive_uses_configured_leaps() {
    let s = session();
    assert_eq!(s.add_beehive(at(39.7683, -86.1652)).unwrap().len(), 7);

    s.set_leaps(2).unwrap();
    s.clear();
    assert_eq!(s.add_beehive(at(39.7683, -86.1652)).unwrap().len(), 19);
    assert_eq!(s.hive_count(), 19);
}

#[test]
fn test_remove_and_coordinates() {
    let s = session();
    let a = s.add_hive(at(1.0, 2.0)).unwrap();
    s.add_hive(at(3.0, 4.0)).unwrap();

    assert!(s.remove_hive(a.id));
    assert!(!s.remove_hive(a.id));
    assert!(!s.remove_hive(HiveId(12345)));
    assert_eq!(s.coordinates(), "3,4");
}

#[test]
fn test_download_enabled_tracks_hives() {
    let s = session();
    assert!(!s.download_enabled(true));
    let h = s.add_hive(at(1.0, 2.0)).unwrap();
    assert!(s.download_enabled(true));
    assert!(!s.download_enabled(false));
    s.remove_hive(h.id);
    assert!(!s.download_enabled(true));
}

#[test]
fn test_template_edits_are_per_session() {
    let config = Arc::new(Config::default());
    let edited = HiveSession::new(config.clone()).unwrap();
    let pristine = HiveSession::new(config).unwrap();

    edited.edit_template(Os::Linux, TemplateKind::Worker, "go {index}");
    edited.add_hive(at(1.0, 2.0)).unwrap();
    pristine.add_hive(at(1.0, 2.0)).unwrap();

    let options = OptionSet {
        os: Os::Linux,
        ..OptionSet::default()
    };
    assert_eq!(edited.generate(&options, false), "#!/usr/bin/env bash\ngo 1\n");
    assert!(edited.templates(Os::Linux).is_dirty());
    assert!(!pristine.templates(Os::Linux).is_dirty());

    edited.reset_templates(Os::Linux);
    assert!(!edited.templates(Os::Linux).is_dirty());
    assert_eq!(
        edited.generate(&options, false),
        pristine.generate(&options, false)
    );
}

#[test]
fn test_render_pairs_filename() {
    let s = session();
    s.add_hive(at(1.0, 2.0)).unwrap();
    let script = s.render(&OptionSet::default());
    assert_eq!(script.filename, "start-scan.bat");
    assert!(script.contents.starts_with("taskkill /IM python.exe /F\n"));
}

#[test]
fn test_concurrent_adds_get_unique_monotonic_ids() {
    let s = Arc::new(session());
    let threads: Vec<_> = (0..8)
        .map(|t| {
            let s = Arc::clone(&s);
            thread::spawn(move || {
                for i in 0..25 {
                    s.add_hive(at(t as f64, i as f64)).unwrap();
                }
            })
        })
        .collect();
    for handle in threads {
        handle.join().unwrap();
    }

    let hives = s.hives();
    assert_eq!(hives.len(), 200);
    assert!(hives.windows(2).all(|w| w[0].id < w[1].id));
}
