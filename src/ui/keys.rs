//! Key/command parsing for the interactive view.
//! Input is line-oriented: a single key, optionally followed by arguments
//! (duration, description, sort column) on the same line.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SelectNext,
    SelectPrev,
    /// `a [DURATION] [DESCRIPTION…]`
    Add {
        duration: Option<String>,
        description: Option<String>,
    },
    Cancel,
    RemoveFinished,
    /// `c [DESCRIPTION…]` — optional replacement description
    Clone {
        description: Option<String>,
    },
    /// `r [DESCRIPTION…]`
    Reschedule {
        description: Option<String>,
    },
    /// `w [DESCRIPTION…]` — empty clears the description
    RewriteDescription {
        text: String,
    },
    /// `s COLUMN[:desc]`
    SortBy {
        column: String,
    },
    FlipSort,
    Redraw,
    Quit,
}

/// Parse one input line. Returns `None` for an unknown key.
pub fn parse_line(line: &str) -> Option<ViewCommand> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut parts = line.trim_start().splitn(2, ' ');
    let key = parts.next().unwrap_or("");
    let rest = parts.next().map(str::trim).unwrap_or("");

    let opt = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };

    match key {
        "" => Some(ViewCommand::Redraw),
        "n" => Some(ViewCommand::SelectNext),
        "p" => Some(ViewCommand::SelectPrev),
        "a" => {
            let mut args = rest.splitn(2, ' ');
            let duration = args.next().map(str::trim).and_then(opt);
            let description = args.next().map(str::trim).and_then(opt);
            Some(ViewCommand::Add {
                duration,
                description,
            })
        }
        "k" => Some(ViewCommand::Cancel),
        "K" => Some(ViewCommand::RemoveFinished),
        "c" => Some(ViewCommand::Clone {
            description: opt(rest),
        }),
        "r" => Some(ViewCommand::Reschedule {
            description: opt(rest),
        }),
        "w" => Some(ViewCommand::RewriteDescription {
            text: rest.to_string(),
        }),
        "s" => Some(ViewCommand::SortBy {
            column: rest.to_string(),
        }),
        "S" => Some(ViewCommand::FlipSort),
        "q" => Some(ViewCommand::Quit),
        _ => None,
    }
}

/// One line per binding, shown by `rtimertab keys` and the in-view help.
pub const BINDINGS: &[(&str, &str)] = &[
    ("n / p", "select next / previous timer"),
    ("a [DURATION] [DESC]", "add a new timer (default duration from config)"),
    ("k", "cancel the selected timer"),
    ("K", "remove all finished timers"),
    ("c [DESC]", "clone the selected timer"),
    ("r [DESC]", "reschedule the selected timer"),
    ("w [DESC]", "rewrite the description (empty clears it)"),
    ("s COLUMN[:desc]", "sort by column (start, end, done, description)"),
    ("S", "flip the sort direction"),
    ("q", "quit the view"),
];
