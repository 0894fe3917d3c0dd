/// One parsed protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Position(Vec<String>),
    Moves,
    Move(Option<String>),
    Fen,
    Display,
    Status,
    Advise(String),
    Autoplay(Option<String>),
    Perft(Option<String>),
    SetOption(Vec<String>),
    Options,
    NewGame,
    Quit,
    Unknown(String),
}

/// `None` for blank lines.
#[must_use]
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let arg = || parts.get(1).map(|v| (*v).to_string());

    let cmd = match first {
        "position" => Command::Position(owned_parts()),
        "moves" => Command::Moves,
        "move" => Command::Move(arg()),
        "fen" => Command::Fen,
        "d" => Command::Display,
        "status" => Command::Status,
        "advise" => Command::Advise(trimmed["advise".len()..].trim().to_string()),
        "autoplay" => Command::Autoplay(arg()),
        "perft" => Command::Perft(arg()),
        "setoption" => Command::SetOption(owned_parts()),
        "options" => Command::Options,
        "new" => Command::NewGame,
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
