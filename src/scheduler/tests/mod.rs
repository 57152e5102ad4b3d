//! Unit tests for scheduler module
//!
//! Window classification, per-cycle behaviour with a fake clock and a
//! recording applier, and loop shutdown.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use chrono::NaiveTime;
use tokio::{sync::mpsc, time::Instant};

use crate::{
    config::WallpaperConfig,
    lifecycle::shutdown_channel,
    scheduler::{Clock, CycleOutcome, TimeWindow, TimeWindowScheduler},
    services::wallpaper::{ApplyError, WallpaperApplier},
};

fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap()
}

fn stored_config() -> WallpaperConfig {
    WallpaperConfig::new("/a.png", "/b.png", "/c.png", 10).unwrap()
}

#[derive(Clone)]
struct ManualClock(Arc<Mutex<NaiveTime>>);

impl ManualClock {
    fn new(time: NaiveTime) -> Self {
        Self(Arc::new(Mutex::new(time)))
    }

    fn set(&self, time: NaiveTime) {
        *self.0.lock().unwrap() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveTime {
        *self.0.lock().unwrap()
    }
}

#[derive(Clone, Default)]
struct RecordingApplier {
    applied: Arc<Mutex<Vec<PathBuf>>>,
    fail_with_no_keys: bool,
    notify: Option<mpsc::UnboundedSender<PathBuf>>,
}

impl RecordingApplier {
    fn applied(&self) -> Vec<PathBuf> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl WallpaperApplier for RecordingApplier {
    async fn apply(&self, path: &Path) -> Result<(), ApplyError> {
        self.applied.lock().unwrap().push(path.to_path_buf());
        if let Some(notify) = &self.notify {
            let _ = notify.send(path.to_path_buf());
        }

        if self.fail_with_no_keys {
            Err(ApplyError::NoBackgroundKeys)
        } else {
            Ok(())
        }
    }
}

#[test]
fn classify_morning_range() {
    assert_eq!(TimeWindow::classify(at(6, 0, 0)), TimeWindow::Morning);
    assert_eq!(TimeWindow::classify(at(9, 30, 0)), TimeWindow::Morning);
    assert_eq!(TimeWindow::classify(at(11, 59, 59)), TimeWindow::Morning);
}

#[test]
fn classify_afternoon_range() {
    assert_eq!(TimeWindow::classify(at(12, 0, 0)), TimeWindow::Afternoon);
    assert_eq!(TimeWindow::classify(at(15, 0, 0)), TimeWindow::Afternoon);
    assert_eq!(TimeWindow::classify(at(17, 59, 59)), TimeWindow::Afternoon);
}

#[test]
fn classify_evening_wraps_midnight() {
    assert_eq!(TimeWindow::classify(at(18, 0, 0)), TimeWindow::Evening);
    assert_eq!(TimeWindow::classify(at(23, 59, 59)), TimeWindow::Evening);
    assert_eq!(TimeWindow::classify(at(0, 0, 0)), TimeWindow::Evening);
    assert_eq!(TimeWindow::classify(at(5, 59, 59)), TimeWindow::Evening);
}

#[test]
fn classify_sub_second_boundaries() {
    let just_before_six = NaiveTime::from_hms_milli_opt(5, 59, 59, 999).unwrap();
    let exactly_noon = NaiveTime::from_hms_milli_opt(12, 0, 0, 0).unwrap();

    assert_eq!(TimeWindow::classify(just_before_six), TimeWindow::Evening);
    assert_eq!(TimeWindow::classify(exactly_noon), TimeWindow::Afternoon);
}

#[test]
fn classify_every_minute_of_the_day() {
    for minute_of_day in 0..24 * 60 {
        let time = at(minute_of_day / 60, minute_of_day % 60, 0);
        let expected = match minute_of_day / 60 {
            6..=11 => TimeWindow::Morning,
            12..=17 => TimeWindow::Afternoon,
            _ => TimeWindow::Evening,
        };

        assert_eq!(TimeWindow::classify(time), expected, "at {time}");
    }
}

#[test]
fn window_path_lookup() {
    let config = stored_config();

    assert_eq!(TimeWindow::Morning.path_in(&config), Some(Path::new("/a.png")));
    assert_eq!(TimeWindow::Afternoon.path_in(&config), Some(Path::new("/b.png")));
    assert_eq!(TimeWindow::Evening.path_in(&config), Some(Path::new("/c.png")));
}

#[test]
fn interval_is_minutes() {
    let scheduler = TimeWindowScheduler::with_clock(
        stored_config(),
        RecordingApplier::default(),
        ManualClock::new(at(9, 0, 0)),
    );

    assert_eq!(scheduler.interval(), Duration::from_secs(600));
}

#[tokio::test]
async fn applies_window_image_through_the_day() {
    let clock = ManualClock::new(at(9, 0, 0));
    let applier = RecordingApplier::default();
    let mut scheduler =
        TimeWindowScheduler::with_clock(stored_config(), applier.clone(), clock.clone());

    for time in [at(9, 0, 0), at(15, 0, 0), at(20, 0, 0), at(2, 0, 0)] {
        clock.set(time);
        let outcome = scheduler.tick().await;
        assert!(matches!(outcome, CycleOutcome::Applied { .. }), "{outcome:?}");
    }

    assert_eq!(
        applier.applied(),
        vec![
            PathBuf::from("/a.png"),
            PathBuf::from("/b.png"),
            PathBuf::from("/c.png"),
            PathBuf::from("/c.png"),
        ]
    );
}

#[tokio::test]
async fn blank_window_path_is_a_no_op() {
    let mut config = stored_config();
    config.afternoon = PathBuf::new();
    let applier = RecordingApplier::default();
    let mut scheduler =
        TimeWindowScheduler::with_clock(config, applier.clone(), ManualClock::new(at(13, 0, 0)));

    let outcome = scheduler.tick().await;

    assert!(matches!(
        outcome,
        CycleOutcome::Skipped {
            window: TimeWindow::Afternoon
        }
    ));
    assert!(applier.applied().is_empty());
}

#[tokio::test]
async fn failed_apply_is_reported_not_fatal() {
    let applier = RecordingApplier {
        fail_with_no_keys: true,
        ..RecordingApplier::default()
    };
    let mut scheduler = TimeWindowScheduler::with_clock(
        stored_config(),
        applier.clone(),
        ManualClock::new(at(9, 0, 0)),
    );

    let first = scheduler.tick().await;
    let second = scheduler.tick().await;

    assert!(matches!(
        first,
        CycleOutcome::Failed {
            error: ApplyError::NoBackgroundKeys,
            ..
        }
    ));
    assert!(matches!(second, CycleOutcome::Failed { .. }));
    assert_eq!(applier.applied().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn run_keeps_cycling_after_failed_apply() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let applier = RecordingApplier {
        fail_with_no_keys: true,
        notify: Some(tx),
        ..RecordingApplier::default()
    };
    let scheduler = TimeWindowScheduler::with_clock(
        stored_config(),
        applier.clone(),
        ManualClock::new(at(20, 0, 0)),
    );
    let interval = scheduler.interval();
    let (trigger, shutdown) = shutdown_channel();

    let task = tokio::spawn(scheduler.run(shutdown));

    assert_eq!(rx.recv().await.unwrap(), PathBuf::from("/c.png"));
    let after_failure = Instant::now();

    // Paused time jumps straight to the end of the sleep.
    let second = tokio::time::timeout(interval * 2, rx.recv())
        .await
        .unwrap_or_else(|_| panic!("no cycle ran after the failed apply"))
        .unwrap();
    assert_eq!(second, PathBuf::from("/c.png"));
    assert!(after_failure.elapsed() >= interval);

    trigger.trigger();
    task.await.unwrap();

    assert_eq!(applier.applied().len(), 2);
}

#[tokio::test]
async fn run_stops_during_sleep_on_shutdown() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let applier = RecordingApplier {
        notify: Some(tx),
        ..RecordingApplier::default()
    };
    let scheduler = TimeWindowScheduler::with_clock(
        stored_config(),
        applier.clone(),
        ManualClock::new(at(20, 0, 0)),
    );
    let (trigger, shutdown) = shutdown_channel();

    let task = tokio::spawn(scheduler.run(shutdown));

    let applied = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(applied, PathBuf::from("/c.png"));

    // The loop is now sleeping for ten minutes; shutdown must cut that short.
    trigger.trigger();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .unwrap_or_else(|_| panic!("scheduler did not stop promptly"))
        .unwrap();

    assert_eq!(applier.applied(), vec![PathBuf::from("/c.png")]);
}

#[tokio::test]
async fn run_does_nothing_when_already_shut_down() {
    let applier = RecordingApplier::default();
    let scheduler = TimeWindowScheduler::with_clock(
        stored_config(),
        applier.clone(),
        ManualClock::new(at(9, 0, 0)),
    );
    let (trigger, shutdown) = shutdown_channel();

    trigger.trigger();
    scheduler.run(shutdown).await;

    assert!(applier.applied().is_empty());
}
