#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, Local, TimeZone};
use rtimertab::engine::LocalEngine;
use rtimertab::models::Timer;
use rtimertab::view::sort::SortSpec;
use rtimertab::view::state::ViewState;

pub fn ttab() -> Command {
    cargo_bin_cmd!("rtimertab")
}

/// Fixed base timestamp so library tests are deterministic.
pub fn base() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

/// Build a timer created `offset_secs` after the base timestamp.
pub fn timer_at(offset_secs: i64, duration_secs: i64, description: Option<&str>) -> Timer {
    Timer {
        created: base() + Duration::seconds(offset_secs),
        duration_secs,
        finished: false,
        description: description.map(str::to_string),
    }
}

/// Engine with `n` timers created one minute apart, 25 minutes long each,
/// described "t1".."tn".
pub fn engine_with(n: usize) -> LocalEngine {
    let mut engine = LocalEngine::new();
    for i in 0..n {
        let desc = format!("t{}", i + 1);
        engine.insert(timer_at(60 * i as i64, 25 * 60, Some(&desc)));
    }
    engine
}

/// A view already refreshed against the engine, default sort, first row
/// selected.
pub fn view_over(engine: &LocalEngine) -> ViewState {
    use rtimertab::engine::TimerEngine;
    let mut view = ViewState::new(SortSpec::default());
    view.refresh(&engine.list_timers());
    view.select(None);
    view
}
