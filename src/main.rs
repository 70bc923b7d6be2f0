//! Thraxa - Entry Point
//!
//! Sets up logging, parses CLI flags, and either runs a headless batch
//! of years or drops into an interactive command loop driving the
//! simulation one paced tick at a time.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;

use thraxa::behavior::{diplomatic_decision_tree, economic_decision_tree};
use thraxa::core::config::RunConfig;
use thraxa::core::error::Result;
use thraxa::runner::SimulationDriver;
use thraxa::world::state::WorldState;

#[derive(Parser, Debug)]
#[command(name = "thraxa", about = "Turn-based civilization simulator")]
struct Args {
    /// Seed for the deterministic random source
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many years headless and print a summary
    #[arg(long)]
    years: Option<u32>,

    /// With --years, print the full final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Load run settings from a TOML file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("thraxa=info")
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(years) = args.years {
        config.years = years;
    }
    config.validate()?;

    tracing::info!(seed = config.seed, "Thraxa starting");

    let mut driver = SimulationDriver::new(config.seed);
    driver.set_speed(config.speed);

    // Headless batch mode
    if args.years.is_some() {
        driver.run_years(config.years);
        let output = driver.into_output();
        if args.json {
            println!("{}", output.to_json());
        } else {
            println!("{}", output.summary());
        }
        return Ok(());
    }

    println!("\n=== THRAXA ===");
    println!("A turn-based civilization simulator");
    println!();
    println!("Commands:");
    println!("  step / t           - Advance the world by one year");
    println!("  run <n>            - Run n years back-to-back");
    println!("  play <n>           - Run n years paced at 1000/speed ms per tick");
    println!("  speed <x>          - Set tick rate multiplier (0.5 - 3.0)");
    println!("  reset              - Restore the starting world");
    println!("  status / s         - Show detailed world status");
    println!("  events / e         - Show the event log");
    println!("  tree <diplomacy|economy> - Show a decision-tree outline");
    println!("  quit / q           - Exit");
    println!();

    // Main command loop
    loop {
        display_status(driver.state());

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "step" || input == "t" {
            driver.step_once();
            println!("Year {} complete.", driver.state().current_year);
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(driver.state());
            continue;
        }

        if input == "events" || input == "e" {
            display_events(driver.state());
            continue;
        }

        if let Some(rest) = input.strip_prefix("run ") {
            if let Ok(n) = rest.parse::<u32>() {
                println!("Running {} years...", n);
                driver.run_years(n);
                println!("Now at year {}.", driver.state().current_year);
            } else {
                println!("Usage: run <number>");
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("play ") {
            if let Ok(n) = rest.parse::<u32>() {
                play(&mut driver, n);
            } else {
                println!("Usage: play <number>");
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("speed ") {
            if let Ok(x) = rest.parse::<f64>() {
                driver.set_speed(x);
                println!(
                    "Speed {} - one year per {}ms.",
                    driver.speed(),
                    driver.tick_interval().as_millis()
                );
            } else {
                println!("Usage: speed <0.5-3.0>");
            }
            continue;
        }

        if input == "reset" {
            driver.reset();
            println!("World restored to year 1.");
            continue;
        }

        if let Some(rest) = input.strip_prefix("tree ") {
            match rest {
                "diplomacy" => print!("{}", diplomatic_decision_tree().outline()),
                "economy" => print!("{}", economic_decision_tree().outline()),
                _ => println!("Usage: tree <diplomacy|economy>"),
            }
            continue;
        }

        println!("Unknown command. Available: step, run <n>, play <n>, speed <x>, reset, status, events, tree, quit");
    }

    println!(
        "\nGoodbye! Final state: year {}, {} people.",
        driver.state().current_year,
        driver.state().world_population()
    );
    Ok(())
}

/// Run n paced ticks, one per tick interval
fn play(driver: &mut SimulationDriver, years: u32) {
    if driver.is_paused() {
        driver.toggle_pause();
    }

    for _ in 0..years {
        driver.step_once();
        for event in driver
            .state()
            .events
            .events_for_year(driver.state().current_year)
        {
            println!("  Year {}: {}", event.year, event.description);
        }
        thread::sleep(driver.tick_interval());
    }

    if !driver.is_paused() {
        driver.toggle_pause();
    }
    println!("Paused at year {}.", driver.state().current_year);
}

/// Display a brief status summary
fn display_status(world: &WorldState) {
    println!();
    println!(
        "--- Year {} | Population: {} ---",
        world.current_year,
        world.world_population()
    );

    for civ in &world.civilizations {
        let food = civ.resource("food").map(|r| r.amount).unwrap_or(0.0);
        println!(
            "  {} - {} cities, {} people, {:.0} food",
            civ.name,
            civ.cities.len(),
            civ.total_population(),
            food
        );
    }
    println!();
}

/// Display detailed status of the whole world
fn display_detailed_status(world: &WorldState) {
    println!();
    println!("=== Detailed Status (Year {}) ===", world.current_year);
    println!();

    for civ in &world.civilizations {
        println!("{} ({})", civ.name, civ.color);

        for city in &civ.cities {
            println!(
                "  {} at ({}, {}) - population {}",
                city.name, city.x, city.y, city.population
            );
        }

        let stock: Vec<String> = civ
            .resources
            .iter()
            .map(|r| format!("{} {:.0}", r.kind, r.amount))
            .collect();
        println!("  Stockpile: {}", stock.join(", "));

        let tech = &civ.technology;
        println!(
            "  Technology: agriculture {:.1}, military {:.1}, culture {:.1}, science {:.1}",
            tech.agriculture, tech.military, tech.culture, tech.science
        );

        for (other, rel) in &civ.relations {
            let other_name = world.civilization_name(other).unwrap_or(other.as_str());
            let standing = match (rel.alliance, rel.war_status) {
                (true, true) => "allied, at war",
                (true, false) => "allied",
                (false, true) => "at war",
                (false, false) => "neutral",
            };
            println!(
                "  Toward {}: trust {}, trade {:.0} ({})",
                other_name, rel.trust, rel.trade, standing
            );
        }
        println!();
    }

    for route in &world.trade_routes {
        println!(
            "Route {} -> {}: {} ({})",
            route.from, route.to, route.value, route.resource_kind
        );
    }
}

/// Display the event log
fn display_events(world: &WorldState) {
    println!();
    if world.events.is_empty() {
        println!("No events yet.");
        return;
    }
    for event in world.events.entries() {
        println!("  Year {}: {}", event.year, event.description);
    }
    println!();
}
