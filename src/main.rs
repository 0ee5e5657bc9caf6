use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::{style, Attribute, Color, PrintStyledContent, Stylize};
use crossterm::QueueableCommand;
use rand::{rngs::StdRng, SeedableRng};

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use npuzzle::{Board, IdaSolver, Solve, Solver};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// A* on the board and its twin in lockstep
    Astar,
    /// Iterative-deepening A*, low memory
    Ida,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a shortest solution to an n-by-n sliding tile puzzle", long_about = None)]
struct Args {
    /// Search driver to use
    #[clap(short, long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,

    /// Solve a random solvable board of this dimension instead of reading one
    #[clap(short, long, conflicts_with = "board_file")]
    random: Option<usize>,

    /// Seed for --random
    #[clap(short, long, requires = "random")]
    seed: Option<u64>,

    /// Only print the number of moves
    #[clap(short, long)]
    quiet: bool,

    /// Board file: the dimension n followed by n rows of tiles, 0 for the blank.
    /// Read from stdin when omitted.
    board_file: Option<PathBuf>,
}

fn read_board(args: &Args) -> Result<Board> {
    if let Some(size) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Board::random(size, &mut rng).context("Failed to generate a random board");
    }

    let content = match &args.board_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read board from stdin")?;
            buffer
        }
    };

    content.parse().context("Invalid board format")
}

/// Prints a board the way `Display` does, with the blank highlighted.
fn print_board(out: &mut impl Write, board: &Board) -> Result<()> {
    let width = (board.dimension() * board.dimension() - 1).to_string().len().max(2);

    out.queue(PrintStyledContent(style(format!("{}\n", board.dimension()))))?;
    for row in board.rows() {
        for &tile in row {
            let cell = format!("{:>width$}", tile, width = width);
            let styled = if tile == 0 {
                style(cell).attribute(Attribute::Bold).with(Color::Green)
            } else {
                style(cell)
            };
            out.queue(PrintStyledContent(styled))?
                .queue(PrintStyledContent(style(" ")))?;
        }
        out.queue(PrintStyledContent(style("\n")))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = read_board(&args)?;

    let solver: Box<dyn Solve> = match args.algorithm {
        Algorithm::Astar => Box::new(Solver::new(&board)),
        Algorithm::Ida => Box::new(IdaSolver::new(&board)),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match (solver.moves(), solver.solution()) {
        (Some(moves), Some(solution)) => {
            writeln!(out, "Minimum number of moves = {}", moves)?;
            if !args.quiet {
                for board in solution {
                    writeln!(out)?;
                    print_board(&mut out, board)?;
                }
            }
        }
        _ => {
            out.queue(PrintStyledContent("No solution possible\n".red()))?;
        }
    }
    out.flush()?;

    Ok(())
}
