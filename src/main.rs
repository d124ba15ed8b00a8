use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use life_grid::{Boundary, LifeResult, Pattern, Simulation, SimulationConfig, presets};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoundaryArg {
    /// edges wrap around (torus)
    Wrap,
    /// edges are hard walls
    Clamp,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Wrap => Boundary::Wrapping,
            BoundaryArg::Clamp => Boundary::Clamped,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Run Conway's Game of Life headless", long_about = None)]
struct Args {
    /// grid width in cells [default: 60]
    #[arg(long)]
    width: Option<usize>,

    /// grid height in cells [default: 18]
    #[arg(long)]
    height: Option<usize>,

    /// edge behavior
    #[arg(long, value_enum, default_value_t = BoundaryArg::Wrap)]
    boundary: BoundaryArg,

    /// generations to advance [default: 100]
    #[arg(short, long)]
    generations: Option<u64>,

    /// preset to place, see --list-patterns
    #[arg(short, long, conflicts_with = "pattern_file")]
    pattern: Option<String>,

    /// plaintext (.cells) pattern file to place
    #[arg(long)]
    pattern_file: Option<PathBuf>,

    /// top-left corner of the pattern as ROW,COL; centered when omitted
    #[arg(long, value_parser = parse_coordinate)]
    at: Option<(usize, usize)>,

    /// start from random soup (a pattern is placed on top of it)
    #[arg(long)]
    random: bool,

    /// chance of a cell starting alive in random soup [default: 0.3]
    #[arg(long)]
    density: Option<f64>,

    /// seed for random soup
    #[arg(long)]
    seed: Option<u64>,

    /// stop as soon as a generation changes nothing
    #[arg(long)]
    until_stable: bool,

    /// print the preset catalog and exit
    #[arg(long)]
    list_patterns: bool,

    /// don't print the final generation
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let defaults = SimulationConfig::default();
        SimulationConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            boundary: self.boundary.into(),
            generations: self.generations.unwrap_or(defaults.generations),
            seed: self.seed.or(defaults.seed),
            density: self.density.unwrap_or(defaults.density),
        }
    }

    fn pattern(&self) -> LifeResult<Option<Pattern>> {
        if let Some(name) = &self.pattern {
            return presets::find(name).map(Some);
        }
        if let Some(path) = &self.pattern_file {
            let contents = fs::read_to_string(path)?;
            return contents.parse().map(Some);
        }
        Ok(None)
    }
}

fn parse_coordinate(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row.trim().parse().map_err(|e| format!("bad row {:?}: {}", row, e))?;
    let col = col.trim().parse().map_err(|e| format!("bad column {:?}: {}", col, e))?;
    Ok((row, col))
}

fn run(args: &Args) -> LifeResult<()> {
    if args.list_patterns {
        for pattern in presets::all_patterns() {
            println!(
                "{:<20} {:>3}x{:<3} {}",
                pattern.name,
                pattern.width(),
                pattern.height(),
                pattern.description
            );
        }
        return Ok(());
    }

    let config = args.config();
    let mut sim = Simulation::new(&config)?;
    info!(
        "{}x{} grid, {} edges",
        config.width,
        config.height,
        config.boundary.name()
    );

    if args.random {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("random soup seed {}", seed);
        sim.randomize(&mut StdRng::seed_from_u64(seed), config.density)?;
    }

    match (args.pattern()?, args.at) {
        (Some(pattern), Some((row, col))) => sim.load_pattern(&pattern, row, col)?,
        (Some(pattern), None) => {
            sim.load_centered(&pattern)?;
        }
        (None, Some(_)) => warn!("--at has no effect without --pattern or --pattern-file"),
        (None, None) => {}
    }

    sim.run(config.generations, args.until_stable);

    if !args.quiet {
        print!("{}", sim.grid);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_grid::LifeError;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("3,4"), Ok((3, 4)));
        assert_eq!(parse_coordinate(" 10 , 0"), Ok((10, 0)));
        assert!(parse_coordinate("3").is_err());
        assert!(parse_coordinate("-1,2").is_err());
    }

    #[test]
    fn test_args_fill_in_defaults() {
        let args = Args::parse_from(["life_grid", "--height", "30", "--boundary", "clamp"]);
        let config = args.config();
        assert_eq!(config.width, 60);
        assert_eq!(config.height, 30);
        assert_eq!(config.boundary, Boundary::Clamped);
        assert_eq!(config.generations, 100);
    }

    #[test]
    fn test_args_reject_both_pattern_sources() {
        let parsed = Args::try_parse_from([
            "life_grid",
            "--pattern",
            "glider",
            "--pattern-file",
            "glider.cells",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_args_resolve_preset() {
        let args = Args::parse_from(["life_grid", "-p", "glider gun", "--at", "1,1"]);
        assert!(args.pattern().is_err());

        let args = Args::parse_from(["life_grid", "-p", "Gosper glider gun", "--at", "1,1"]);
        assert_eq!(args.pattern().unwrap().unwrap().name, "Gosper Glider Gun");
        assert_eq!(args.at, Some((1, 1)));
    }

    #[test]
    fn test_args_read_pattern_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/patterns/pulsar.cells");
        let args = Args::parse_from(["life_grid", "--pattern-file", path]);

        let pattern = args.pattern().unwrap().unwrap();

        assert_eq!(pattern, presets::pulsar());
    }

    #[test]
    fn test_args_missing_pattern_file_is_io_error() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/patterns/no-such-pattern.cells");
        let args = Args::parse_from(["life_grid", "--pattern-file", path]);

        assert!(matches!(args.pattern(), Err(LifeError::Io(_))));
    }

    #[test]
    fn test_huge_dimensions_fail_cleanly() {
        let width = (usize::MAX / 2 + 1).to_string();
        let args = Args::parse_from(["life_grid", "--width", &width, "--height", "2", "--quiet"]);

        assert!(matches!(
            run(&args),
            Err(LifeError::InvalidDimension { height: 2, .. })
        ));
    }
}
