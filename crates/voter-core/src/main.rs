//! Voter Model Simulation
//!
//! Runs the binary voter model on a random graph and saves the average
//! opinion and interface density series, keyed by connection probability.
//!
//! Examples:
//!   cargo run -p voter-core -- --agents 100 --iterations 10000 --probability 0.05
//!   cargo run -p voter-core -- --config voter.toml --seed 7
//!   cargo run -p voter-core -- --entropy

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use voter_analysis::Analyzer;
use voter_core::{save_run, SimConfig, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "voter_sim")]
#[command(about = "Binary voter model on a random graph")]
struct Args {
    /// TOML configuration file (defaults to voter.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of agents N
    #[arg(long)]
    agents: Option<usize>,

    /// Number of interaction steps T
    #[arg(long)]
    iterations: Option<usize>,

    /// Connection probability p for each pair of agents
    #[arg(long)]
    probability: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long, conflicts_with = "entropy")]
    seed: Option<u64>,

    /// Seed from OS entropy instead of a fixed seed
    #[arg(long)]
    entropy: bool,

    /// Directory for the saved artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Fail before the first step if any agent has no neighbors
    #[arg(long)]
    require_connected: bool,

    /// Run without writing any artifacts
    #[arg(long)]
    no_save: bool,
}

impl Args {
    /// Applies command-line overrides on top of a loaded configuration.
    fn apply(&self, mut config: SimConfig) -> SimConfig {
        if let Some(agents) = self.agents {
            config.simulation.agents = agents;
        }
        if let Some(iterations) = self.iterations {
            config.simulation.iterations = iterations;
        }
        if let Some(p) = self.probability {
            config.simulation.connection_probability = p;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if self.entropy {
            config.simulation.seed = None;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        if self.require_connected {
            config.simulation.require_connected_agents = true;
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::load_or_default()?,
    };
    let config = args.apply(loaded);
    config.validate()?;

    let params = &config.simulation;
    println!("Voter Model Simulation");
    println!("======================");
    println!("Agents: {}", params.agents);
    println!("Iterations: {}", params.iterations);
    println!("Connection probability: {}", params.connection_probability);
    match params.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: (entropy)"),
    }
    println!();

    let mut simulation = Simulation::from_params(config.simulation.clone())?;
    simulation.run()?;

    if args.no_save {
        info!("Skipping artifact output");
    } else {
        let written = save_run(&simulation, &config.output)?;
        info!(files = written.len(), dir = %config.output.directory.display(), "saved run");
    }

    if !simulation.trajectory().is_empty() {
        let summary = Analyzer::default().analyze(simulation.trajectory())?;
        println!();
        println!("{}", summary);
    }

    Ok(())
}
