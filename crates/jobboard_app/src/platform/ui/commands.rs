use jobboard_core::ViewState;

pub const HELP: &str = "\
Commands:
  search [location]   search a location (3+ characters), or all locations when empty
  page <n>            go to page n
  next | prev         move one page
  first | last        jump to the first or last page
  select <n>          show details for row n of the list
  help                show this help
  quit                exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Page(i64),
    Next,
    Prev,
    First,
    Last,
    /// 1-based row in the current list.
    Select(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    BadNumber { command: &'static str, raw: String },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "type a command, or `help`"),
            CommandError::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            CommandError::BadNumber { command, raw } => {
                write!(f, "`{command}` needs a number, got `{raw}`")
            }
        }
    }
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        // The raw remainder goes to `search`; trimming and validation happen in the core.
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "page" | "p" => rest
            .trim()
            .parse()
            .map(Command::Page)
            .map_err(|_| CommandError::BadNumber {
                command: "page",
                raw: rest.trim().to_string(),
            }),
        "next" | "n" => Ok(Command::Next),
        "prev" => Ok(Command::Prev),
        "first" => Ok(Command::First),
        "last" => Ok(Command::Last),
        "select" | "open" => rest
            .trim()
            .parse()
            .map(Command::Select)
            .map_err(|_| CommandError::BadNumber {
                command: "select",
                raw: rest.trim().to_string(),
            }),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Page a navigation command targets, or why it is unavailable right now.
///
/// Mirrors disabled pager buttons: nothing moves while loading or past the
/// bounds the service reported.
pub fn navigation_target(command: &Command, view: &ViewState) -> Result<i64, &'static str> {
    if view.loading {
        return Err("still loading");
    }
    let pagination = &view.pagination;
    let current = i64::from(pagination.current_page);
    match command {
        Command::Next | Command::Last if !pagination.has_next => Err("already on the last page"),
        Command::Prev | Command::First if !pagination.has_prev => Err("already on the first page"),
        Command::Next => Ok(current + 1),
        Command::Prev => Ok(current - 1),
        Command::First => Ok(1),
        Command::Last => Ok(i64::from(pagination.total_pages)),
        Command::Page(page) => Ok(*page),
        _ => Err("not a navigation command"),
    }
}
