//! The interactive timer view loop.
//! Line-oriented: each iteration renders the full table, reads one command
//! line from the input and dispatches it. Commands are strictly sequential;
//! a command fully completes (including the refresh) before the next line
//! is read. Errors keep the pre-mutation view intact and the loop alive.

use crate::config::Config;
use crate::engine::TimerEngine;
use crate::errors::AppResult;
use crate::ui::keys::{ViewCommand, parse_line};
use crate::ui::{messages, table};
use crate::utils::time::{format_duration, parse_duration};
use crate::view::commands::{CloneOptions, Dispatcher};
use crate::view::sort::SortSpec;
use crate::view::state::ViewState;
use std::io::{BufRead, Write};

pub fn run_view<R: BufRead, W: Write>(
    engine: &mut dyn TimerEngine,
    view: &mut ViewState,
    cfg: &Config,
    mut input: R,
    mut out: W,
) -> AppResult<()> {
    view.refresh(&engine.list_timers());
    view.select(None); // default position: first row

    loop {
        draw(view, &mut out)?;
        write!(out, "rtimertab> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF behaves like quit
        }
        writeln!(out)?;

        let Some(cmd) = parse_line(&line) else {
            writeln!(
                out,
                "{}",
                messages::warning(format!("Unknown key: {}", line.trim()))
            )?;
            continue;
        };

        if cmd == ViewCommand::Quit {
            break;
        }

        if let Err(e) = apply(cmd, engine, view, cfg, &mut out) {
            writeln!(out, "{}", messages::error(e))?;
        }
    }

    Ok(())
}

fn draw<W: Write>(view: &ViewState, out: &mut W) -> AppResult<()> {
    let selected_pos = view.selected().and_then(|id| view.position_of(id));
    write!(out, "{}", table::render(view.rows(), selected_pos, view.sort()))?;
    writeln!(out, "  [n/p move, a add, k cancel, K sweep, c clone, r reschedule, w describe, s/S sort, q quit]")?;
    Ok(())
}

fn apply<W: Write>(
    cmd: ViewCommand,
    engine: &mut dyn TimerEngine,
    view: &mut ViewState,
    cfg: &Config,
    out: &mut W,
) -> AppResult<()> {
    match cmd {
        ViewCommand::SelectNext => view.select_next(),
        ViewCommand::SelectPrev => view.select_prev(),
        ViewCommand::Redraw => {}
        ViewCommand::Add {
            duration,
            description,
        } => {
            let input = duration.unwrap_or_else(|| cfg.default_duration.clone());
            let secs = parse_duration(&input)?;
            let timer = Dispatcher::add_timer(engine, view, secs, description)?;
            writeln!(
                out,
                "{}",
                messages::success(format!(
                    "Started a {} timer ending at {}",
                    format_duration(timer.duration_secs),
                    timer.end_str()
                ))
            )?;
        }
        ViewCommand::Cancel => {
            let timer = Dispatcher::cancel_selected(engine, view)?;
            writeln!(
                out,
                "{}",
                messages::success(format!("Cancelled timer started {}", timer.created_str()))
            )?;
        }
        ViewCommand::RemoveFinished => {
            let removed = Dispatcher::remove_finished(engine, view)?;
            writeln!(
                out,
                "{}",
                messages::info(format!("Removed {} finished timer(s)", removed))
            )?;
        }
        ViewCommand::Clone { description } => {
            let cloned =
                Dispatcher::clone_selected(engine, view, CloneOptions { description })?;
            writeln!(
                out,
                "{}",
                messages::success(format!("Cloned; new timer ends at {}", cloned.end_str()))
            )?;
        }
        ViewCommand::Reschedule { description } => {
            let cloned =
                Dispatcher::reschedule_selected(engine, view, CloneOptions { description })?;
            writeln!(
                out,
                "{}",
                messages::success(format!("Rescheduled; now ending at {}", cloned.end_str()))
            )?;
        }
        ViewCommand::RewriteDescription { text } => {
            Dispatcher::rewrite_description(engine, view, &text)?;
            writeln!(out, "{}", messages::success("Description updated"))?;
        }
        ViewCommand::SortBy { column } => {
            let spec: SortSpec = column.parse()?;
            view.set_sort(spec);
        }
        ViewCommand::FlipSort => {
            let mut spec = view.sort();
            spec.direction = spec.direction.flipped();
            view.set_sort(spec);
        }
        ViewCommand::Quit => {}
    }
    Ok(())
}
