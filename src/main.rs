use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use alien_invasion::cli::Args;
use alien_invasion::flush::flush_to_jsonl;
use alien_invasion::input::{identify_aliens, read_world_map};
use alien_invasion::sim::names::spawn_aliens;
use alien_invasion::sim::{SimConfig, Simulation, Termination};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    if let Err(msg) = args.validate() {
        eprintln!("invalid arguments: {msg}");
        return ExitCode::FAILURE;
    }
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let (world, source) = read_world_map(&args.world)?;
    tracing::info!(path = %args.world.display(), cities = world.len(), "world map loaded");

    let config = SimConfig::new(args.resolve_seed(), args.iterations);

    // Roster names come off the same random stream the engine continues,
    // so a seed pins down the entire run including the names.
    let mut rng = config.rng();
    let mut aliens = spawn_aliens(args.aliens, &mut rng);
    if let Some(intel) = &args.intel {
        identify_aliens(&mut aliens, &world, intel)?;
        tracing::info!(path = %intel.display(), "intel applied");
    }

    let mut sim = Simulation::with_rng(config, rng, world, aliens);
    let termination = sim.start()?;
    match termination {
        Termination::Stalled { round } => {
            println!("Invasion stalled in round {round}: no moves left.");
        }
        Termination::RoundsExhausted { rounds } => {
            println!("Invasion ran its full {rounds} rounds.");
        }
    }

    println!();
    println!("Surviving world:");
    print!("{}", source.render_surviving(sim.world()));

    let survivors: Vec<&str> = sim
        .aliens()
        .iter()
        .filter(|a| !a.is_dead())
        .map(|a| a.name())
        .collect();
    println!();
    println!("Aliens still at large: {}", survivors.len());
    for name in survivors {
        println!("  {name}");
    }

    let mut any_fallen = false;
    for (city, garrison) in sim.defense().by_city() {
        if sim.world().is_standing(city) {
            continue;
        }
        if !any_fallen {
            println!();
            println!("Casualties:");
            any_fallen = true;
        }
        let fallen: Vec<&str> = garrison.iter().map(String::as_str).collect();
        println!("  {city}: {}", fallen.join(", "));
    }

    if let Some(dir) = &args.flush_dir {
        flush_to_jsonl(sim.world(), sim.aliens(), dir)?;
        println!();
        println!("Final state written to {}", dir.display());
    }
    Ok(())
}
