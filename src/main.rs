use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{bail, eyre};
use log::{debug, info};

use shannon_synth::circuit::Circuit;
use shannon_synth::io::read_truth_tables;
use shannon_synth::synthesis::{synthesize, SynthesisConfig};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// File with one truth table per line.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the netlist.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Number of selector inputs (default depends on the number of inputs).
    #[arg(long, value_name = "INT")]
    split: Option<usize>,

    /// Re-read the written netlist and check it against the tables.
    #[arg(long)]
    verify: bool,

    /// Also write the circuit in Graphviz format.
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Increase logging verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    debug!("args = {:?}", args);

    let time_total = std::time::Instant::now();

    let tables = read_truth_tables(&args.input)?;
    let n = tables[0].num_vars();
    info!("Read {} truth tables over {} inputs", tables.len(), n);

    let mut config = SynthesisConfig::default();
    if let Some(split) = args.split {
        config = config.with_split_count(split);
    }

    let mut circuit = Circuit::with_inputs(n);
    let stats = synthesize(&mut circuit, &tables, &config)?;
    info!(
        "Synthesized {} outputs with {} gates",
        stats.outputs, stats.gates_after_prune
    );

    circuit.save(&args.output)?;
    info!("Wrote netlist to {}", args.output.display());

    if let Some(path) = &args.dot {
        std::fs::write(path, circuit.to_dot()?)?;
        info!("Wrote DOT to {}", path.display());
    }

    if args.verify {
        let reloaded = Circuit::load(&args.output)?;
        let actual = reloaded.output_truth_tables()?;
        if actual.len() != tables.len() {
            bail!("expected {} outputs, found {}", tables.len(), actual.len());
        }
        if let Some((i, (a, e))) = actual
            .iter()
            .zip(&tables)
            .enumerate()
            .find(|(_, (a, e))| a != e)
        {
            return Err(eyre!("output {} computes {} instead of {}", i, a, e));
        }
        info!("Verified all {} outputs", tables.len());
    }

    info!("All done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
