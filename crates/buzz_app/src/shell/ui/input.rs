//! Line-oriented command parsing for the shell prompt.

/// What the user asked for on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A plain line: analyze this query.
    Search(String),
    /// `/k <n|text>`: toggle the keyword filter.
    ToggleKeyword(KeywordArg),
    /// `/clear`: drop the keyword filter.
    ClearFilter,
    /// `/p [n]`: list popular searches, or run one by number.
    Popular(Option<usize>),
    /// `/health`: query the backend health endpoint.
    Health,
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// Blank line.
    Empty,
    /// A slash command we do not recognize.
    Unknown(String),
}

/// A chip number from the rendered keyword list, or a literal keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordArg {
    Index(usize),
    Text(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        if !line.starts_with('/') {
            return Command::Search(line.to_string());
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        match head.to_lowercase().as_str() {
            "/q" | "/quit" | "/exit" => Command::Quit,
            "/h" | "/help" | "/?" => Command::Help,
            "/c" | "/clear" => Command::ClearFilter,
            "/health" => Command::Health,
            "/k" | "/keyword" if !rest.is_empty() => {
                Command::ToggleKeyword(match rest.parse::<usize>() {
                    Ok(position) => KeywordArg::Index(position),
                    Err(_) => KeywordArg::Text(rest.to_string()),
                })
            }
            "/p" | "/popular" => match rest.parse::<usize>() {
                Ok(position) => Command::Popular(Some(position)),
                Err(_) if rest.is_empty() => Command::Popular(None),
                Err(_) => Command::Unknown(line.to_string()),
            },
            _ => Command::Unknown(line.to_string()),
        }
    }
}
