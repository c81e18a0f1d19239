extern crate resistor_finder;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::warn;
use resistor_finder::*;

use std::io;
use std::process;

/// Find possibilities for creating a resistance close to a certain target value, by combining
/// resistors
#[derive(Parser)]
#[command(name = "find-resistance", version)]
struct Cli {
    /// The target resistance value, e.g. 150, 4k7 or 1.5M
    target: String,

    /// The available resistor values, as a comma-separated list, for example
    /// "100R,330,4k7,10k,1.0M" (overrides --series)
    #[arg(short, long)]
    resistors: Option<String>,

    /// Standard series to draw resistor values from
    #[arg(long, value_enum, default_value = "e6")]
    series: Series,

    /// The maximum number of resistors to use. Increasing this value exponentially increases
    /// computation time!
    #[arg(short, long = "maximum", visible_alias = "max", default_value_t = 2)]
    maximum: usize,

    /// The maximum number of results to output, or 0 for all results. Results are ordered by
    /// their deviation from the target value
    #[arg(short = 'n', long, default_value_t = 1)]
    results: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Series {
    E3,
    E6,
    E12,
    E24,
}

impl Series {
    fn values(self) -> &'static [f64] {
        match self {
            Series::E3 => E3.values(),
            Series::E6 => E6.values(),
            Series::E12 => E12.values(),
            Series::E24 => E24.values(),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let target = parse_target(&cli.target)?;
    let values = match &cli.resistors {
        Some(list) => parse_resistance_list(list)?,
        None => cli.series.values().to_vec(),
    };
    if cli.maximum > 3 {
        warn!(
            "combining up to {} resistors, this may take a long time",
            cli.maximum
        );
    }

    let mut ranking = CombinationSearch::new(&values, cli.maximum).rank(target)?;
    ranking.truncate(cli.results);
    write_ranking(&ranking, &mut io::stdout().lock())
}

fn main() {
    let cli = Cli::parse();

    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
