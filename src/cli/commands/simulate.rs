//! Simulate command - Pit the computer opponent against a scripted X

use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::info;

use crate::{
    cli::output::{create_simulation_progress, format_percent, print_kv, print_section},
    opponent::{ComputerOpponent, Difficulty, MinimaxOpponent, Opponent, RandomOpponent},
    session::{GameMode, Session},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play batches of games against the computer opponent")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Difficulty of the computer (O)
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: Difficulty,

    /// Policy playing X
    #[arg(long, short = 'o', value_enum, default_value_t = XPolicy::Random)]
    pub opponent: XPolicy,

    /// Random seed for reproducibility (X uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum XPolicy {
    /// Uniform random moves
    Random,
    /// Perfect play
    Minimax,
}

/// Tally of finished games, from the computer's side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub computer_wins: usize,
    pub computer_losses: usize,
    pub draws: usize,
}

impl SimulationSummary {
    fn record(&mut self, winner: Option<Player>) {
        self.games += 1;
        match winner {
            Some(Player::O) => self.computer_wins += 1,
            Some(Player::X) => self.computer_losses += 1,
            None => self.draws += 1,
        }
    }
}

/// Play one single-player game to the end and return the winner, `None` for a draw
pub fn play_out(
    session: &mut Session,
    human: &mut dyn Opponent,
    computer: &mut dyn Opponent,
) -> crate::Result<Option<Player>> {
    session.reset();
    loop {
        let outcome = match session.play_computer_turn(computer)? {
            Some((_, outcome)) => outcome,
            None => {
                let index = human.select_move(session.board())?;
                session.apply_move(index)?
            }
        };
        if outcome.is_terminal() {
            return Ok(outcome.winner());
        }
    }
}

/// Play `games` games of `computer` (O) against `human` (X)
pub fn simulate_games(
    difficulty: Difficulty,
    human: &mut dyn Opponent,
    computer: &mut dyn Opponent,
    games: usize,
    progress: Option<&ProgressBar>,
) -> crate::Result<SimulationSummary> {
    let mut session = Session::new(GameMode::SinglePlayer, difficulty);
    let mut summary = SimulationSummary::default();
    for _ in 0..games {
        let winner = play_out(&mut session, human, computer)?;
        summary.record(winner);
        if let Some(pb) = progress {
            pb.inc(1);
            pb.set_message(format!(
                "W {} / D {} / L {}",
                summary.computer_wins, summary.draws, summary.computer_losses
            ));
        }
    }
    Ok(summary)
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let mut computer = ComputerOpponent::from_seed(args.difficulty, args.seed);
    let mut human: Box<dyn Opponent> = match args.opponent {
        XPolicy::Random => match args.seed {
            Some(seed) => Box::new(RandomOpponent::with_seed(seed.wrapping_add(1))),
            None => Box::new(RandomOpponent::new()),
        },
        XPolicy::Minimax => Box::new(MinimaxOpponent::new(Player::X)),
    };

    info!(
        games = args.games,
        difficulty = %args.difficulty,
        opponent = human.name(),
        "starting simulation"
    );

    let progress = (!args.no_progress && !args.json)
        .then(|| create_simulation_progress(args.games as u64));
    let summary = simulate_games(
        args.difficulty,
        human.as_mut(),
        &mut computer,
        args.games,
        progress.as_ref(),
    )?;
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_section(&format!("{} vs {}", human.name(), computer.name()));
    print_kv("Games", &summary.games.to_string());
    print_kv(
        "Computer wins",
        &format!(
            "{} ({})",
            summary.computer_wins,
            format_percent(summary.computer_wins, summary.games)
        ),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, format_percent(summary.draws, summary.games)),
    );
    print_kv(
        "Computer losses",
        &format!(
            "{} ({})",
            summary.computer_losses,
            format_percent(summary.computer_losses, summary.games)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::MoveOutcome;

    #[test]
    fn perfect_play_always_draws() {
        let mut human = MinimaxOpponent::new(Player::X);
        let mut computer = ComputerOpponent::with_seed(Difficulty::Hard, 0);
        let summary =
            simulate_games(Difficulty::Hard, &mut human, &mut computer, 2, None).unwrap();
        assert_eq!(summary.draws, 2);
        assert_eq!(summary.games, 2);
    }

    #[test]
    fn hard_never_loses_to_random() {
        let mut human = RandomOpponent::with_seed(11);
        let mut computer = ComputerOpponent::with_seed(Difficulty::Hard, 12);
        let summary =
            simulate_games(Difficulty::Hard, &mut human, &mut computer, 30, None).unwrap();
        assert_eq!(summary.computer_losses, 0);
        assert_eq!(summary.games, 30);
    }

    #[test]
    fn play_out_finishes_every_game() {
        let mut session = Session::new(GameMode::SinglePlayer, Difficulty::Easy);
        let mut human = RandomOpponent::with_seed(1);
        let mut computer = ComputerOpponent::with_seed(Difficulty::Easy, 2);
        for _ in 0..20 {
            let winner = play_out(&mut session, &mut human, &mut computer).unwrap();
            assert!(session.is_over());
            assert_eq!(winner, session.outcome().winner());
        }
    }

    #[test]
    fn summary_counts_each_game_once() {
        let mut session = Session::new(GameMode::SinglePlayer, Difficulty::Easy);
        let mut human = RandomOpponent::with_seed(4);
        let mut computer = ComputerOpponent::with_seed(Difficulty::Easy, 5);
        let mut summary = SimulationSummary::default();
        let mut expected = SimulationSummary::default();
        for _ in 0..25 {
            let winner = play_out(&mut session, &mut human, &mut computer).unwrap();
            summary.record(winner);
            match session.outcome() {
                MoveOutcome::Win(Player::O) => expected.computer_wins += 1,
                MoveOutcome::Win(Player::X) => expected.computer_losses += 1,
                MoveOutcome::Draw => expected.draws += 1,
                MoveOutcome::Continue => panic!("game returned before it ended"),
            }
            expected.games += 1;
        }
        assert_eq!(summary, expected);
    }
}
