//! Play command - Interactive game in the terminal

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;

use crate::{
    app::GameConfig,
    cli::output::render_board,
    opponent::{Difficulty, Opponent},
    session::{
        GameMode, Session,
        messages::{result_message, status_line},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    /// Game mode (single or two)
    #[arg(long, short = 'm')]
    pub mode: Option<GameMode>,

    /// Computer difficulty (easy, medium, hard)
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Random seed for the computer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    /// Merge the configuration file (if any) with command-line overrides
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_delay_ms(delay);
        }
        config.validate()?;
        Ok(config)
    }
}

/// A line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Cell index 0-8 (typed as 1-9)
    Move(usize),
    Reset,
    Quit,
    Mode(GameMode),
    Difficulty(Difficulty),
    Help,
}

/// Parse one line of input.
///
/// # Errors
///
/// Returns error for unknown commands, cells outside 1-9, or bad mode and
/// difficulty names.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next();

    match (head.as_str(), arg) {
        ("r" | "reset", None) => Ok(Command::Reset),
        ("q" | "quit" | "exit", None) => Ok(Command::Quit),
        ("h" | "help" | "?", None) => Ok(Command::Help),
        ("mode", Some(value)) => Ok(Command::Mode(value.parse()?)),
        ("difficulty", Some(value)) => Ok(Command::Difficulty(value.parse()?)),
        (cell, None) => match cell.parse::<usize>() {
            Ok(n @ 1..=9) => Ok(Command::Move(n - 1)),
            Ok(n) => Err(anyhow!("Cell {n} is off the board (expected 1-9)")),
            Err(_) => Err(anyhow!("Unknown command '{line}'. Type 'help' for options")),
        },
        _ => Err(anyhow!("Unknown command '{line}'. Type 'help' for options")),
    }
}

const HELP: &str = "\
Commands:
  1-9               place your mark (cells are numbered left to right, top to bottom)
  mode <single|two> switch game mode and start over
  difficulty <d>    set computer difficulty (easy, medium, hard)
  reset             start a new game
  quit              leave";

/// Drive a game loop over any input and output
pub struct PlayLoop<'a, R, W> {
    session: Session,
    opponent: &'a mut dyn Opponent,
    computer_delay: Duration,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> PlayLoop<'a, R, W> {
    pub fn new(config: &GameConfig, opponent: &'a mut dyn Opponent, input: R, output: W) -> Self {
        Self {
            session: config.session(),
            opponent,
            computer_delay: Duration::from_millis(config.computer_delay_ms),
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the player quits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Noughts and crosses ({}). Type 'help' for commands.",
            self.session.mode()
        )?;
        loop {
            if self.session.is_computer_turn() {
                self.show_board()?;
                if !self.computer_delay.is_zero() {
                    thread::sleep(self.computer_delay);
                }
                if let Some((index, _)) = self.session.play_computer_turn(&mut *self.opponent)? {
                    writeln!(self.output, "Computer plays {}", index + 1)?;
                }
                continue;
            }

            if self.session.is_over() {
                self.show_board()?;
                if let Some(message) = result_message(self.session.outcome(), self.session.mode()) {
                    writeln!(self.output, "{message}")?;
                }
                if !self.ask_play_again()? {
                    return Ok(());
                }
                self.session.reset();
                info!("new game");
                continue;
            }

            self.show_board()?;
            let Some(line) = self.prompt("> ")? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Move(index)) => {
                    if let Err(err) = self.session.apply_move(index) {
                        writeln!(self.output, "{err}")?;
                    }
                }
                Ok(Command::Reset) => {
                    self.session.reset();
                    info!("game reset");
                }
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Mode(mode)) => {
                    self.session.set_mode(mode);
                    info!(%mode, "mode changed");
                    writeln!(self.output, "Mode: {mode}")?;
                }
                Ok(Command::Difficulty(difficulty)) => {
                    self.session.set_difficulty(difficulty);
                    info!(%difficulty, "difficulty changed");
                    writeln!(self.output, "Difficulty: {difficulty}")?;
                }
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn show_board(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(self.session.board()))?;
        let status = status_line(&self.session);
        if !status.is_empty() {
            writeln!(self.output, "{status}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        let answer = self.prompt("Play again? [y/N] ")?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    info!(mode = %config.mode, difficulty = %config.difficulty, "starting game");

    let mut opponent = config.opponent();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = PlayLoop::new(&config, &mut opponent, stdin.lock(), stdout.lock());
    game.run()
}
