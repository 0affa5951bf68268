//! Line-oriented driver for playing without a terminal UI. Reads column
//! numbers (1-7) from any reader and writes board snapshots to any writer.

use std::io::{self, BufRead, Write};

use crate::controller::{GameController, Phase};
use crate::error::MoveError;
use crate::game::{Board, GameOutcome, COLS};

/// Play until the game ends, the input runs out, or the player types `q`.
pub fn run<R: BufRead, W: Write>(
    controller: &mut GameController,
    input: R,
    mut output: W,
) -> io::Result<GameOutcome> {
    write_board(&mut output, controller.board())?;
    let mut lines = input.lines();

    loop {
        if let Phase::GameOver(outcome) = controller.phase() {
            writeln!(output, "{}", outcome.describe())?;
            return Ok(outcome);
        }

        write!(output, "Your move (1-{COLS}, q to quit): ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(controller.outcome());
        };
        let line = line?;
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("q") {
            return Ok(controller.outcome());
        }

        let column = match answer.parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => n - 1,
            _ => {
                writeln!(output, "Enter a column number from 1 to {COLS}.")?;
                continue;
            }
        };

        match controller.submit_move(column) {
            Ok(report) => {
                if let Some(reply) = report.automated {
                    writeln!(output, "Computer plays column {}.", reply.column + 1)?;
                }
                write_board(&mut output, controller.board())?;
            }
            Err(MoveError::ColumnFull(col)) => {
                writeln!(output, "Column {} is full.", col + 1)?;
            }
            Err(err) => writeln!(output, "Move rejected: {err}.")?,
        }
    }
}

fn write_board<W: Write>(output: &mut W, board: &Board) -> io::Result<()> {
    writeln!(output)?;
    write!(output, "{board}")?;
    let labels: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
    writeln!(output, "{}", labels.join(" "))?;
    writeln!(output)
}
