//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use pagerline::pager::{PagerEvent, PagerId, RenderPlan};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub type EventLog = Arc<Mutex<Vec<PagerEvent>>>;

/// Subscriber that records every event it receives.
pub fn recorder() -> (EventLog, impl Fn(&PagerEvent) + Send + Sync + 'static) {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |event: &PagerEvent| sink.lock().push(event.clone()))
}

pub fn id(raw: &str) -> PagerId {
    PagerId::new(raw).expect("valid pager id")
}

/// Page numbers of a plan with `None` standing in for ellipses.
pub fn layout(plan: &RenderPlan) -> Vec<Option<u32>> {
    plan.iter().map(|control| control.page()).collect()
}

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
