//! Puzzle Search CLI
//!
//! Solves letter-rotation, water-bucket, and tilt puzzles with breadth-first
//! search, and magnet placement puzzles with backtracking. Each subcommand
//! prints the puzzle, the search counters, and the solution steps.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use search_puzzles::puzzles::magnets::{MagnetsConfig, MagnetsPuzzle};
use search_puzzles::puzzles::strings::StringConfig;
use search_puzzles::puzzles::tilt::{Direction, TiltConfig};
use search_puzzles::puzzles::water::WaterConfig;
use search_puzzles::{Backtracker, Configuration, PuzzleOps, Result};

/// Solves state-space puzzles with breadth-first and backtracking search.
#[derive(Parser)]
#[command(name = "puzzles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v for info, -vv for debug); RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotate letters of START one step at a time until it reads FINISH.
    Strings { start: String, finish: String },
    /// Measure AMOUNT using buckets of the given capacities.
    Water {
        amount: u32,
        #[arg(required = true)]
        capacities: Vec<u32>,
    },
    /// Tilt the board in FILE until every green marker has dropped out.
    Tilt { file: PathBuf },
    /// Tilt the board in FILE once toward DIRECTION (north, south, east, west).
    TiltMove { file: PathBuf, direction: Direction },
    /// Print the first move of a shortest solution for the board in FILE.
    TiltHint { file: PathBuf },
    /// Place magnets on the board described in FILE.
    Magnets {
        file: PathBuf,
        /// Print every solution instead of the first.
        #[arg(long)]
        all: bool,
        /// Stop after this many solutions (implies --all).
        #[arg(long)]
        max_solutions: Option<usize>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the requested puzzle, solves it, and returns the text to print.
fn run(command: Command) -> Result<String> {
    let output = match command {
        Command::Strings { start, finish } => render(&StringConfig::new(&start, &finish)?),
        Command::Water { amount, capacities } => render(&WaterConfig::new(capacities, amount)?),
        Command::Tilt { file } => {
            let board: TiltConfig = fs::read_to_string(&file)?.parse()?;
            format!("File: {}\n{}", file.display(), render(&board))
        }
        Command::TiltMove { file, direction } => {
            let board: TiltConfig = fs::read_to_string(&file)?.parse()?;
            match board.tilt(direction) {
                Some(tilted) if tilted.is_goal() => format!("Tilt {direction}:{tilted}\nSolved!\n"),
                Some(tilted) => format!("Tilt {direction}:{tilted}\n"),
                None => "Illegal move: a blue marker would fall into the hole\n".to_string(),
            }
        }
        Command::TiltHint { file } => {
            let board: TiltConfig = fs::read_to_string(&file)?.parse()?;
            match board.hint() {
                Some(direction) => format!("Hint: tilt {}\n", direction),
                None => "No hint available\n".to_string(),
            }
        }
        Command::Magnets {
            file,
            all,
            max_solutions,
        } => {
            let puzzle: MagnetsPuzzle = fs::read_to_string(&file)?.parse()?;
            let start = MagnetsConfig::new(puzzle);
            let header = format!("File: {}\n{}\n", file.display(), start.describe());
            if all || max_solutions.is_some() {
                header + &render_all_magnets(start, max_solutions)
            } else {
                header + &start.solve()
            }
        }
    };
    Ok(output)
}

/// Describes and solves any puzzle through its erased interface.
fn render(puzzle: &dyn PuzzleOps) -> String {
    format!("{}\n{}", puzzle.describe(), puzzle.solve())
}

fn render_all_magnets(start: MagnetsConfig, max_solutions: Option<usize>) -> String {
    let mut backtracker = Backtracker::new();
    let solutions = backtracker.solve_all(start, max_solutions);

    let mut output = format!(
        "Configs examined: {}\nFound {} solutions\n",
        backtracker.examined(),
        solutions.len()
    );
    for (i, solution) in solutions.iter().enumerate() {
        output.push_str(&format!("Solution {}:\n{}", i + 1, solution));
    }
    output
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_strings_output_snapshot() {
        let output = run(Command::Strings {
            start: "AA".into(),
            finish: "AB".into(),
        })
        .unwrap();

        insta::assert_snapshot!(output, @r"
        Start: AA, End: AB
        Total configs: 17
        Unique configs: 12
        Step 0: AA
        Step 1: AB
        ");
    }

    #[test]
    fn test_water_reports_no_solution() {
        let output = run(Command::Water {
            amount: 3,
            capacities: vec![2, 4],
        })
        .unwrap();
        assert!(output.starts_with("Amount: 3, Buckets: [2, 4]\n"));
        assert!(output.ends_with("No solution\n"));
    }

    #[test]
    fn test_strings_rejects_mismatched_lengths() {
        let result = run(Command::Strings {
            start: "ABC".into(),
            finish: "AB".into(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_tilt_hint_from_file() {
        let path = temp_file("hint.txt", "3\n. . G\n. * .\nO . .\n");
        let output = run(Command::TiltHint { file: path.clone() }).unwrap();
        fs::remove_file(path).unwrap();
        assert_eq!(output, "Hint: tilt south\n");
    }

    #[test]
    fn test_tilt_move_from_file() {
        let path = temp_file("move.txt", "3\n. . G\n. * .\nO . .\n");
        let output = run(Command::TiltMove {
            file: path.clone(),
            direction: "s".parse().unwrap(),
        })
        .unwrap();
        fs::remove_file(path).unwrap();

        insta::assert_snapshot!(output, @r"
        Tilt south:
        . . .
        . * .
        O . G
        ");
    }

    #[test]
    fn test_tilt_move_finishing_and_illegal() {
        let path = temp_file("finish.txt", "3\n. . .\n. * .\nO . G\n");
        let output = run(Command::TiltMove {
            file: path.clone(),
            direction: Direction::West,
        })
        .unwrap();
        fs::remove_file(path).unwrap();
        assert!(output.ends_with("Solved!\n"));

        let path = temp_file("illegal.txt", "2\nB O\n. .\n");
        let output = run(Command::TiltMove {
            file: path.clone(),
            direction: Direction::East,
        })
        .unwrap();
        fs::remove_file(path).unwrap();
        assert!(output.starts_with("Illegal move"));
    }

    #[test]
    fn test_direction_argument_parsing() {
        let cli = Cli::try_parse_from(["puzzles", "tilt-move", "board.txt", "north"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::TiltMove { direction: Direction::North, .. }
        ));
        assert!(Cli::try_parse_from(["puzzles", "tilt-move", "board.txt", "up"]).is_err());
    }

    #[test]
    fn test_magnets_all_solutions_from_file() {
        let path = temp_file("magnets.txt", "1 2\n1\n-1 -1\n1\n-1 -1\nL R\n");
        let output = run(Command::Magnets {
            file: path.clone(),
            all: true,
            max_solutions: None,
        })
        .unwrap();
        fs::remove_file(path).unwrap();
        assert!(output.contains("Found 2 solutions\n"));
        assert!(output.contains("1|+ -|1"));
        assert!(output.contains("1|- +|1"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = run(Command::Tilt {
            file: PathBuf::from("/nonexistent/board.txt"),
        });
        assert!(matches!(result, Err(search_puzzles::ParseError::Io(_))));
    }
}
