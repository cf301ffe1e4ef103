mod common;
use common::{engine_with, timer_at, view_over};
use rtimertab::engine::{LocalEngine, TimerEngine};
use rtimertab::errors::AppError;
use rtimertab::view::commands::{CloneOptions, Dispatcher};
use rtimertab::view::projection::NO_DESCRIPTION;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_cancel_moves_cursor_to_next_row() {
    let mut engine = engine_with(4);
    let mut view = view_over(&engine);
    let ids: Vec<_> = view.rows().iter().map(|r| r.id).collect();
    view.select(Some(ids[1]));

    Dispatcher::cancel_selected(&mut engine, &mut view).unwrap();

    assert_eq!(view.rows().len(), 3);
    assert_eq!(view.selected(), Some(ids[2]));
}

#[test]
fn test_cancel_of_last_row_moves_cursor_back() {
    let mut engine = engine_with(4);
    let mut view = view_over(&engine);
    let ids: Vec<_> = view.rows().iter().map(|r| r.id).collect();
    view.select(Some(ids[3]));

    Dispatcher::cancel_selected(&mut engine, &mut view).unwrap();

    assert_eq!(view.selected(), Some(ids[2]));
}

#[test]
fn test_cancel_of_only_row_leaves_empty_view() {
    let mut engine = engine_with(1);
    let mut view = view_over(&engine);

    Dispatcher::cancel_selected(&mut engine, &mut view).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.selected(), None);
}

#[test]
fn test_cancel_with_no_selection_aborts() {
    let mut engine = engine_with(0);
    let mut view = view_over(&engine);

    let err = Dispatcher::cancel_selected(&mut engine, &mut view).unwrap_err();
    assert!(matches!(err, AppError::NoSelection));
}

#[test]
fn test_stale_selection_aborts_without_engine_call() {
    let mut engine = engine_with(2);
    let mut view = view_over(&engine);
    let selected = view.selected().unwrap();

    // the timer disappears behind the view's back
    engine.cancel(selected, true).unwrap();

    let err = Dispatcher::cancel_selected(&mut engine, &mut view).unwrap_err();
    assert!(matches!(err, AppError::StaleIdentity(_)));
    // pre-mutation rows are preserved so the user can see what happened
    assert_eq!(view.rows().len(), 2);
}

#[test]
fn test_remove_finished_is_a_noop_without_finished_timers() {
    let mut engine = engine_with(3);
    let mut view = view_over(&engine);
    let selected = view.selected();

    let removed = Dispatcher::remove_finished(&mut engine, &mut view).unwrap();

    assert_eq!(removed, 0);
    assert_eq!(view.rows().len(), 3);
    assert_eq!(view.selected(), selected);
}

#[test]
fn test_remove_finished_keeps_surviving_selection() {
    let mut engine = engine_with(3);
    let mut view = view_over(&engine);
    let ids: Vec<_> = view.rows().iter().map(|r| r.id).collect();
    engine.mark_finished(ids[0]).unwrap();
    engine.mark_finished(ids[2]).unwrap();
    view.select(Some(ids[1]));

    let removed = Dispatcher::remove_finished(&mut engine, &mut view).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.selected(), Some(ids[1]));
}

#[test]
fn test_remove_finished_defaults_selection_when_it_vanishes() {
    let mut engine = engine_with(2);
    let mut view = view_over(&engine);
    let ids: Vec<_> = view.rows().iter().map(|r| r.id).collect();
    engine.mark_finished(ids[0]).unwrap();
    view.select(Some(ids[0]));

    Dispatcher::remove_finished(&mut engine, &mut view).unwrap();

    // default position: first remaining row
    assert_eq!(view.selected(), Some(ids[1]));
}

#[test]
fn test_clone_gets_fresh_identity_and_same_duration() {
    let mut engine = engine_with(1);
    let mut view = view_over(&engine);
    let original = view.lookup_timer(&engine).unwrap();

    let cloned =
        Dispatcher::clone_selected(&mut engine, &mut view, CloneOptions::default()).unwrap();

    assert_ne!(cloned.id(), original.id());
    assert_eq!(cloned.duration_secs, original.duration_secs);
    assert_eq!(cloned.description, original.description);
    assert_eq!(view.rows().len(), 2);
}

#[test]
fn test_clone_with_description_override() {
    let mut engine = engine_with(1);
    let mut view = view_over(&engine);

    let cloned = Dispatcher::clone_selected(
        &mut engine,
        &mut view,
        CloneOptions {
            description: Some("fresh".to_string()),
        },
    )
    .unwrap();

    assert_eq!(cloned.description.as_deref(), Some("fresh"));
}

#[test]
fn test_reschedule_is_clone_then_suppressed_cancel() {
    let hook_calls = Rc::new(Cell::new(0usize));

    // manual sequence: clone, then cancel with hooks suppressed
    let mut manual = engine_with(2);
    let manual_original = manual.list_timers()[0].clone();
    manual.clone_timer(manual_original.id(), None).unwrap();
    manual.cancel(manual_original.id(), true).unwrap();

    // dispatcher reschedule on an identical starting set
    let mut engine = engine_with(2);
    let calls = hook_calls.clone();
    engine.on_cancel(Box::new(move |_| calls.set(calls.get() + 1)));
    let mut view = view_over(&engine);
    let original = view.lookup_timer(&engine).unwrap();

    Dispatcher::reschedule_selected(&mut engine, &mut view, CloneOptions::default()).unwrap();

    // completion hooks were suppressed for the cancellation
    assert_eq!(hook_calls.get(), 0);
    assert!(engine.find(original.id()).is_none());

    // end state matches the manual sequence: same count, durations and
    // descriptions (identities differ since creation times are fresh)
    let mut ours: Vec<_> = engine
        .list_timers()
        .iter()
        .map(|t| (t.duration_secs, t.description.clone()))
        .collect();
    let mut theirs: Vec<_> = manual
        .list_timers()
        .iter()
        .map(|t| (t.duration_secs, t.description.clone()))
        .collect();
    ours.sort();
    theirs.sort();
    assert_eq!(ours, theirs);
}

#[test]
fn test_cancel_runs_hooks_unless_suppressed() {
    let hook_calls = Rc::new(Cell::new(0usize));
    let mut engine = engine_with(1);
    let calls = hook_calls.clone();
    engine.on_cancel(Box::new(move |_| calls.set(calls.get() + 1)));
    let mut view = view_over(&engine);

    Dispatcher::cancel_selected(&mut engine, &mut view).unwrap();
    assert_eq!(hook_calls.get(), 1);
}

#[test]
fn test_description_rewrite_round_trip() {
    let mut engine = engine_with(1);
    let mut view = view_over(&engine);
    let id = view.selected().unwrap();

    Dispatcher::rewrite_description(&mut engine, &mut view, "new text").unwrap();
    assert_eq!(view.row_at(id).unwrap().description, "new text");
    assert_eq!(view.selected(), Some(id));

    Dispatcher::rewrite_description(&mut engine, &mut view, "").unwrap();
    assert_eq!(view.row_at(id).unwrap().description, NO_DESCRIPTION);
}

#[test]
fn test_add_timer_refreshes_and_keeps_selection() {
    let mut engine = LocalEngine::new();
    let mut view = view_over(&engine);

    let first = Dispatcher::add_timer(&mut engine, &mut view, 300, None).unwrap();
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.selected(), Some(first.id()));

    Dispatcher::add_timer(&mut engine, &mut view, 600, Some("second".into())).unwrap();
    assert_eq!(view.rows().len(), 2);
    assert_eq!(view.selected(), Some(first.id()));
}

#[test]
fn test_engine_failure_leaves_view_unrefreshed() {
    let mut engine = engine_with(2);
    let mut view = view_over(&engine);

    // a non-positive duration is rejected by the engine
    let err = Dispatcher::add_timer(&mut engine, &mut view, 0, None).unwrap_err();
    assert!(matches!(err, AppError::Engine(_)));
    assert_eq!(view.rows().len(), 2);
}

#[test]
fn test_identity_bump_on_timestamp_collision() {
    let mut engine = LocalEngine::new();
    let a = engine.insert(timer_at(0, 300, None));
    let b = engine.insert(timer_at(0, 300, None));
    assert_ne!(a.id(), b.id());
    assert_eq!(engine.list_timers().len(), 2);
}
