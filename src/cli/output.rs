//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell};

/// Create a progress bar for simulated games
pub fn create_simulation_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Render the board for a terminal, numbering empty cells 1-9
///
/// Once a player has won, the cells of the winning line are bracketed.
pub fn render_board(board: &Board) -> String {
    let highlight = board
        .outcome()
        .winner()
        .and_then(|player| board.winning_line(player));
    let is_highlighted = |pos: usize| highlight.is_some_and(|line| line.contains(&pos));

    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                let symbol = match board.get(pos) {
                    Some(Cell::Empty) | None => char::from(b'1' + pos as u8),
                    Some(cell) => cell.to_char(),
                };
                if is_highlighted(pos) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        result.push_str(cells.join("|").trim_end());
        result.push('\n');
        if row < 2 {
            result.push_str("---+---+---\n");
        }
    }
    result
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a share of a total as a percentage
pub fn format_percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", 100.0 * count as f64 / total as f64)
}
