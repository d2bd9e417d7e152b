use clap::Parser;
use reef_sim::config::{Config, EnergyModel};
use reef_sim::history::History;
use reef_sim::simulation::Simulation;

#[derive(Parser, Debug)]
#[command(name = "reef-sim")]
#[command(about = "Predator-prey ecosystem simulator", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.json")]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    max_steps: Option<u64>,

    #[arg(long)]
    grid_size: Option<usize>,

    #[arg(long)]
    prey: Option<usize>,

    #[arg(long)]
    predators: Option<usize>,

    #[arg(long)]
    food_density: Option<f64>,

    /// Use the legacy rules where prey carry no energy.
    #[arg(long)]
    no_energy_model: bool,

    /// Print one recorded frame as ASCII after the run: an index or `last`.
    #[arg(long)]
    show_frame: Option<String>,

    /// Print the population series as JSON after the run.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config.simulation.max_steps = max_steps;
        }
        if let Some(grid_size) = self.grid_size {
            config.world.grid_size = grid_size;
        }
        if let Some(prey) = self.prey {
            config.prey.initial_count = prey;
        }
        if let Some(predators) = self.predators {
            config.predator.initial_count = predators;
        }
        if let Some(density) = self.food_density {
            config.world.food_density = density;
        }
        if self.no_energy_model {
            config.simulation.energy_model = EnergyModel::Disabled;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = if std::path::Path::new(&args.config).exists() {
        log::info!("Loading config from: {}", args.config);
        Config::load_from_file(&args.config)?
    } else {
        log::info!("Config file not found, using defaults and saving to: {}", args.config);
        let config = Config::default();
        config.save_to_file(&args.config)?;
        config
    };
    args.apply_overrides(&mut config);

    let outcome = Simulation::new(config)?.run();

    println!(
        "Finished: {} after {} snapshots (seed {})",
        outcome.reason,
        outcome.history.len(),
        outcome.seed
    );

    if let Some(frame) = &args.show_frame {
        print_frame(&outcome.history, frame)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.history.population_series())?);
    }

    Ok(())
}

fn print_frame(history: &History, frame: &str) -> Result<(), Box<dyn std::error::Error>> {
    let index = if frame == "last" {
        history.len().saturating_sub(1)
    } else {
        frame.parse::<usize>()?
    };

    let snapshot = history
        .at(index)
        .ok_or_else(|| format!("frame {} out of range (0..{})", index, history.len()))?;
    let stats = &snapshot.stats;

    println!(
        "Frame {}/{} | prey {} ({:.1}%) | predators {} ({:.1}%)",
        index + 1,
        history.len(),
        stats.prey_count,
        stats.prey_share(),
        stats.predator_count,
        stats.predator_share()
    );
    if let Some(reason) = snapshot.extinction() {
        println!("Status: {}", reason);
    }
    if let Some(raster) = history.raster(index) {
        println!("{}", raster.to_ascii());
    }

    Ok(())
}
