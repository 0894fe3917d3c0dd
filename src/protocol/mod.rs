//! Line-oriented text protocol for driving a game over stdin/stdout.
//!
//! One command per line; each reply is one or more lines. Errors are reported
//! as `error <reason>` and never end the session.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, FenError, MoveParseError};
use crate::game::{parse_setoption, Game, GameConfig, GameError, RandomAdvisor};

pub mod command;

pub use command::{parse_command, Command};

/// Plies `autoplay` runs when no count is given.
pub const DEFAULT_AUTOPLAY_PLIES: usize = 200;

/// Error type for protocol command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in a move list
    InvalidMove {
        move_str: String,
        error: MoveParseError,
    },
    /// Rejected by the game session
    Game(GameError),
    /// Missing required parts in the command
    MissingParts { command: &'static str },
    /// A numeric argument did not parse
    InvalidNumber { found: String },
    /// First word is not a known command
    UnknownCommand(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            ProtocolError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            ProtocolError::Game(e) => write!(f, "{e}"),
            ProtocolError::MissingParts { command } => {
                write!(f, "Missing required parts in {command} command")
            }
            ProtocolError::InvalidNumber { found } => write!(f, "Invalid number '{found}'"),
            ProtocolError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<FenError> for ProtocolError {
    fn from(e: FenError) -> Self {
        ProtocolError::InvalidFen(e)
    }
}

impl From<GameError> for ProtocolError {
    fn from(e: GameError) -> Self {
        ProtocolError::Game(e)
    }
}

/// Build the board a `position` command describes.
///
/// Supports both "position startpos" and "position fen <fields>" formats,
/// optionally followed by "moves <move1> <move2> ...". The FEN may have
/// four to six fields.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Board, ProtocolError> {
    let missing = ProtocolError::MissingParts {
        command: "position",
    };
    let moves_at = parts.iter().position(|p| *p == "moves").unwrap_or(parts.len());

    let mut board = match parts.get(1) {
        Some(&"startpos") => Board::new(),
        Some(&"fen") => {
            if moves_at <= 2 {
                return Err(missing);
            }
            Board::try_from_fen(&parts[2..moves_at].join(" "))?
        }
        _ => return Err(missing),
    };

    for &text in parts.iter().skip(moves_at + 1) {
        board
            .make_move_str(text)
            .map_err(|error| ProtocolError::InvalidMove {
                move_str: text.to_string(),
                error,
            })?;
    }

    Ok(board)
}

fn parse_count(arg: Option<&str>, default: usize) -> Result<usize, ProtocolError> {
    match arg {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| ProtocolError::InvalidNumber {
            found: text.to_string(),
        }),
    }
}

/// Whether the loop should keep reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Protocol state: one game plus its configuration.
pub struct Session {
    game: Game,
}

impl Session {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Session {
            game: Game::new(config),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handle one input line, writing the reply to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let Some(cmd) = parse_command(line) else {
            return Ok(Flow::Continue);
        };
        debug!("command: {cmd:?}");

        if cmd == Command::Quit {
            return Ok(Flow::Quit);
        }
        if let Err(e) = self.execute(cmd, out)? {
            writeln!(out, "error {e}")?;
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// Outer `Result` is I/O; inner is the command's own outcome.
    fn execute<W: Write>(
        &mut self,
        cmd: Command,
        out: &mut W,
    ) -> io::Result<Result<(), ProtocolError>> {
        match cmd {
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(board) => self.game.reset_to(board),
                    Err(e) => return Ok(Err(e)),
                }
            }
            Command::Moves => {
                let moves = self.game.legal_moves().to_strings();
                if moves.is_empty() {
                    writeln!(out, "legal")?;
                } else {
                    writeln!(out, "legal {}", moves.join(" "))?;
                }
            }
            Command::Move(None) => {
                return Ok(Err(ProtocolError::MissingParts { command: "move" }));
            }
            Command::Move(Some(text)) => match self.game.play_str(&text) {
                Ok(_) => writeln!(out, "ok {}", self.game.board().to_fen())?,
                Err(e) => return Ok(Err(e.into())),
            },
            Command::Fen => writeln!(out, "fen {}", self.game.board().to_fen())?,
            Command::Display => writeln!(out, "{}", self.game.board())?,
            Command::Status => {
                writeln!(out, "status {}", self.game.status())?;
                writeln!(out, "check {}", self.game.is_in_check())?;
            }
            Command::Advise(text) => match self.game.apply_response(Ok(text)) {
                Ok((mv, how)) => writeln!(out, "played {mv} ({how})")?,
                Err(e) => return Ok(Err(e.into())),
            },
            Command::Autoplay(arg) => {
                let plies = match parse_count(arg.as_deref(), DEFAULT_AUTOPLAY_PLIES) {
                    Ok(n) => n,
                    Err(e) => return Ok(Err(e)),
                };
                let mut advisor = RandomAdvisor::new(self.game.config().seed);
                for (mv, how) in self.game.autoplay(&mut advisor, plies) {
                    writeln!(out, "played {mv} ({how})")?;
                }
                writeln!(out, "status {}", self.game.status())?;
            }
            Command::Perft(arg) => {
                let depth = match parse_count(arg.as_deref(), 1) {
                    Ok(n) => n,
                    Err(e) => return Ok(Err(e)),
                };
                let start = Instant::now();
                let nodes = self.game.board().perft(depth);
                info!("perft {depth}: {nodes} nodes in {:?}", start.elapsed());
                writeln!(out, "perft {depth} {nodes}")?;
            }
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let Some((name, value)) = parse_setoption(&parts) else {
                    return Ok(Err(ProtocolError::MissingParts {
                        command: "setoption",
                    }));
                };
                if let Err(e) = self.game.set_option(&name, value.as_deref()) {
                    return Ok(Err(e.into()));
                }
            }
            Command::Options => {
                for line in self.game.config().describe() {
                    writeln!(out, "{line}")?;
                }
            }
            Command::NewGame => self.game.reset_to(Board::new()),
            Command::Unknown(line) => return Ok(Err(ProtocolError::UnknownCommand(line))),
            Command::Quit => {}
        }
        Ok(Ok(()))
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, config: GameConfig) -> io::Result<()> {
    let mut session = Session::new(config);
    for line in input.lines() {
        if session.handle_line(&line?, out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run the protocol on the process's stdin and stdout.
pub fn run_stdio(config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(stdin.lock(), &mut stdout, config)
}
