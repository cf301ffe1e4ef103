use crate::cli::parser::Commands;
use crate::config::Config;
use crate::engine::{LocalEngine, TimerEngine};
use crate::errors::{AppError, AppResult};
use crate::ui::view::run_view;
use crate::utils::time::parse_duration;
use crate::view::sort::SortSpec;
use crate::view::state::ViewState;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        timers,
        finished,
        sort,
    } = cmd
    {
        let mut engine = LocalEngine::new();
        seed(&mut engine, timers, finished)?;

        engine.on_cancel(Box::new(|timer| {
            println!(
                "⏹ timer started {} was cancelled",
                timer.created.format("%Y-%m-%d %H:%M:%S")
            );
        }));

        let spec = resolve_sort(sort.as_deref(), cfg)?;
        let mut view = ViewState::new(spec);

        let stdin = io::stdin();
        run_view(
            &mut engine,
            &mut view,
            cfg,
            stdin.lock(),
            io::stdout().lock(),
        )?;
    }
    Ok(())
}

/// Create the startup timers given as `DURATION[:DESCRIPTION]` specs and
/// flag the requested ones as finished.
fn seed(engine: &mut LocalEngine, specs: &[String], finished: &[usize]) -> AppResult<()> {
    let mut ids = Vec::new();
    for spec in specs {
        let (dur, desc) = match spec.split_once(':') {
            Some((d, text)) => (d, Some(text.to_string())),
            None => (spec.as_str(), None),
        };
        let secs = parse_duration(dur)?;
        ids.push(engine.create(secs, desc)?.id());
    }

    for &n in finished {
        let id = *ids
            .get(n.checked_sub(1).unwrap_or(usize::MAX))
            .ok_or_else(|| AppError::Other(format!("--finished {}: no such seeded timer", n)))?;
        engine.mark_finished(id)?;
    }
    Ok(())
}

fn resolve_sort(cli_sort: Option<&str>, cfg: &Config) -> AppResult<SortSpec> {
    if let Some(s) = cli_sort {
        return s.parse();
    }
    let mut spec: SortSpec = cfg.sort_column.parse()?;
    if cfg.sort_descending {
        spec.direction = spec.direction.flipped();
    }
    Ok(spec)
}
