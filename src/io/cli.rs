//! Command-line interface for the dissection solver

use crate::board::grid::Tiling;
use crate::engine::solve::{solve, SolveConfig, SolveOutcome, SolveReport};
use crate::io::configuration::{
    DEFAULT_DEFECT_BOUND, DEFAULT_DEFECT_FLOOR, DEFAULT_MIN_PIECES, DEFAULT_WORKERS,
};
use crate::io::error::Result;
use crate::io::progress::{NoProgress, RaceBar};
use crate::pack::PackerKind;
use clap::{Parser, ValueEnum};

/// Packing solver selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverChoice {
    /// Skyline backtracker, usually faster
    TopLeft,
    /// Generic exact-cover solver over dancing links
    DancingLinks,
}

impl SolverChoice {
    const fn packer(self) -> PackerKind {
        match self {
            Self::TopLeft => PackerKind::TopLeft,
            Self::DancingLinks => PackerKind::DancingLinks,
        }
    }
}

#[derive(Parser)]
#[command(name = "mondrian")]
#[command(
    author,
    version,
    about = "Dissect a board into incongruent rectangles with bounded area spread"
)]
/// Command-line arguments for the dissection solver
pub struct Cli {
    /// Board side length (column count when --rows is given)
    #[arg(value_name = "SIZE")]
    pub size: usize,

    /// Board height in cells; defaults to a square board
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Largest admissible spread between piece areas
    #[arg(short, long, default_value_t = DEFAULT_DEFECT_BOUND)]
    pub defect: usize,

    /// Smallest admissible spread, for scanning defect bands
    #[arg(long, default_value_t = DEFAULT_DEFECT_FLOOR)]
    pub floor: usize,

    /// Fewest pieces a dissection may use
    #[arg(short = 'p', long, default_value_t = DEFAULT_MIN_PIECES)]
    pub min_pieces: usize,

    /// Packing solver to race the candidates through
    #[arg(short, long, value_enum, default_value = "top-left")]
    pub solver: SolverChoice,

    /// Worker threads; zero means one per available core
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration implied by the arguments
    pub fn config(&self) -> SolveConfig {
        SolveConfig {
            cols: self.size,
            rows: self.rows.unwrap_or(self.size),
            defect_bound: self.defect,
            defect_floor: self.floor,
            min_pieces: self.min_pieces,
            packer: self.solver.packer(),
            workers: self.workers,
        }
    }
}

/// Drives one solve run and prints the outcome
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the configured instance and print the report
    ///
    /// # Errors
    ///
    /// Returns an error when parameter validation fails
    pub fn run(&self) -> Result<()> {
        let config = self.cli.config();
        let report = if self.cli.should_show_progress() {
            solve(&config, &RaceBar::new())?
        } else {
            solve(&config, &NoProgress)?
        };
        self.print_report(&config, &report);
        Ok(())
    }

    // Allow print for the human-readable report
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn print_report(&self, config: &SolveConfig, report: &SolveReport) {
        let board = format!("{}x{}", config.cols, config.rows);
        match &report.outcome {
            SolveOutcome::Solved(solution) => {
                println!(
                    "{board}: defect {} with {} pieces",
                    solution.defect,
                    solution.pieces.len()
                );
                for (index, piece) in solution.pieces.iter().enumerate() {
                    println!("  {}: {piece}", owner_glyph((index + 1) as u16));
                }
                print!("{}", render(&solution.tiling));
            }
            SolveOutcome::Infeasible => {
                println!(
                    "{board}: no piece combination possible within defect {}..={}",
                    config.defect_floor, config.defect_bound
                );
            }
            SolveOutcome::Exhausted => {
                println!(
                    "{board}: no dissection; {} of {} candidates packed none",
                    report.attempted, report.candidates
                );
            }
        }
        if !self.cli.quiet {
            println!(
                "search: {} nodes, {} area-pruned, {} defect-pruned",
                report.search.nodes, report.search.area_pruned, report.search.defect_pruned
            );
        }
        if report.failed_workers > 0 {
            eprintln!("warning: {} worker(s) panicked mid-race", report.failed_workers);
        }
    }
}

/// Letter grid for a tiling, one text row per board row
pub fn render(tiling: &Tiling) -> String {
    let mut out = String::with_capacity((tiling.cols() + 1) * tiling.rows());
    for row in 0..tiling.rows() {
        for col in 0..tiling.cols() {
            let owner = tiling.owner(col, row).unwrap_or(0);
            out.push(owner_glyph(owner));
        }
        out.push('\n');
    }
    out
}

/// Stable glyph per owner id; `.` marks an uncovered tile
const fn owner_glyph(owner: u16) -> char {
    if owner == 0 {
        return '.';
    }
    (b'A' + ((owner - 1) % 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::Board;
    use crate::board::rect::Rect;

    #[test]
    fn glyphs_cycle_through_the_alphabet() {
        assert_eq!(owner_glyph(0), '.');
        assert_eq!(owner_glyph(1), 'A');
        assert_eq!(owner_glyph(26), 'Z');
        assert_eq!(owner_glyph(27), 'A');
    }

    #[test]
    fn render_draws_one_line_per_row() {
        let mut tiling = Tiling::empty(Board::square(3));
        tiling.stamp(1, 0, 0, &Rect::new(2, 2));
        tiling.stamp(2, 2, 0, &Rect::new(1, 3));
        tiling.stamp(3, 0, 2, &Rect::new(2, 1));
        assert_eq!(render(&tiling), "AAB\nAAB\nCCB\n");
    }

    #[test]
    fn arguments_map_onto_the_solver_config() {
        let cli = Cli::try_parse_from(["mondrian", "5", "-d", "4", "-w", "2"]).unwrap();
        let config = cli.config();
        assert_eq!(config.cols, 5);
        assert_eq!(config.rows, 5);
        assert_eq!(config.defect_bound, 4);
        assert_eq!(config.defect_floor, 0);
        assert_eq!(config.min_pieces, 2);
        assert_eq!(config.packer, PackerKind::TopLeft);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn rectangular_boards_and_solver_choice_parse() {
        let cli = Cli::try_parse_from([
            "mondrian",
            "6",
            "--rows",
            "4",
            "--solver",
            "dancing-links",
            "--quiet",
        ])
        .unwrap();
        assert!(!cli.should_show_progress());
        let config = cli.config();
        assert_eq!((config.cols, config.rows), (6, 4));
        assert_eq!(config.packer, PackerKind::DancingLinks);
    }
}
