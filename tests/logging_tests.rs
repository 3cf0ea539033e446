//! Log output tests
//!
//! Tests for:
//! - Missing-clip transitions warn once per clip, then drop to debug
//!
//! Kept in its own test binary because it installs a global logger.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use strider::animation::clip::{AnimationClip, ClipSet};
use strider::animation::controller::AnimationController;
use strider::animation::ActionId;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn not_found_levels(name: &str) -> Vec<Level> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, msg)| msg.contains(name) && msg.contains("not found"))
        .map(|(level, _)| *level)
        .collect()
}

#[test]
fn missing_clip_warns_once_per_id() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let set = ClipSet::from_clips(vec![AnimationClip::new("Idle", 2.0)]).unwrap();
    let mut c = AnimationController::new(&set, 0.2);

    for _ in 0..5 {
        c.transition_to(ActionId::Running, 0.2);
    }
    c.transition_to(ActionId::Jump, 0.1);

    let running = not_found_levels("Running");
    assert_eq!(running.len(), 5);
    assert_eq!(running[0], Level::Warn);
    assert!(running[1..].iter().all(|&level| level == Level::Debug));

    assert_eq!(not_found_levels("Jump"), vec![Level::Warn]);
}
