use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use ascent_simulation::*;

#[derive(Debug, Parser)]
#[clap(author, version, about = "Vertical ascent simulation of a single-stage rocket", long_about = None)]
struct Cli {
    /// CSV destination [default: stdout]
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
    #[clap(short = 'q', long, help = "Do not draw the progress bar")]
    quiet: bool,
    #[clap(long, help = "Log a flight summary when the run ends")]
    summary: bool,
}

fn create_file_or_stdout(path: Option<PathBuf>) -> Result<Box<dyn Write>, std::io::Error> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    let config = SimulationConfig::new(Parameters::default())?;
    let csv = CsvReporter::new(create_file_or_stdout(args.output)?)?;
    let progress = ProgressReporter::new(!args.quiet);
    let mut telemetry = Telemetry::new();

    let mut simulation = Simulation::new(config);
    let report = simulation.run(((csv, progress), &mut telemetry))?;

    if args.summary {
        for line in telemetry.describe() {
            info!("{}", line);
        }
    }
    if report.termination == Termination::GroundImpact {
        info!("Rocket is back on the ground. Ending simulation.");
    }

    Ok(())
}
