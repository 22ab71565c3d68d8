//! Pokedex - Entry Point
//!
//! Command-line front end over the catalog and the formation workflow:
//! bulk import, detail lookup, paginated search, and one formation request
//! per invocation against a file-backed session.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use pokedex::battle::BattleResult;
use pokedex::catalog::{import_range, Catalog, CatalogQuery, Pokemon, SqliteStore};
use pokedex::core::error::{PokedexError, Result};
use pokedex::core::types::{PokemonId, SessionId};
use pokedex::core::PokedexConfig;
use pokedex::fetch::{CatalogFetcher, PokeApiFetcher, StaticFetcher};
use pokedex::formation::{handle_formation, FormationOutcome};
use pokedex::roster::{FileSessionStore, FormationAction};

type AppCatalog = Catalog<SqliteStore, Box<dyn CatalogFetcher>>;

/// Pokedex - creature catalog and team battles
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the creature catalog, import from PokeAPI, and battle teams")]
struct Args {
    /// Config file (TOML); defaults apply when it does not exist
    #[arg(long, global = true, default_value = "pokedex.toml")]
    config: PathBuf,

    /// Never contact the remote API
    #[arg(long, global = true)]
    offline: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Random seed for reproducible auto-fill and battles
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import records from the remote API (inclusive range)
    Import {
        start: PokemonId,
        end: Option<PokemonId>,
    },
    /// Show one record, importing it on first access
    Show { id: PokemonId },
    /// Search the catalog by name or number
    List {
        #[arg(long)]
        q: Option<String>,
        #[arg(long)]
        page: Option<String>,
    },
    /// Run one formation request: add, remove, clear, ai_fill or battle
    Formation {
        /// Session to act on; a new one is created when omitted
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        pokemon_id: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokedex=info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_catalog(config: &PokedexConfig, offline: bool) -> Result<AppCatalog> {
    let store = SqliteStore::open(&config.database_path)?;
    let fetcher: Box<dyn CatalogFetcher> = if offline {
        tracing::info!("Offline mode - only stored records are available");
        Box::new(StaticFetcher::default())
    } else {
        Box::new(PokeApiFetcher::from_config(config)?)
    };
    Ok(Catalog::new(store, fetcher))
}

fn run(args: Args) -> Result<ExitCode> {
    let config = PokedexConfig::load(&args.config)?;
    let mut catalog = open_catalog(&config, args.offline)?;

    match args.command {
        Command::Import { start, end } => {
            let report = import_range(&mut catalog, start, end);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for (number, name) in &report.imported {
                    println!("Imported {} ({})", name, number);
                }
                for id in &report.failed {
                    println!("Failed to import {}", id);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Show { id } => match catalog.get_or_fetch(id) {
            Ok(pokemon) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&pokemon)?);
                } else {
                    print_pokemon(&pokemon);
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(PokedexError::NotFound(_)) => {
                eprintln!("No pokemon matches the given query.");
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e),
        },

        Command::List { q, page } => {
            let query = CatalogQuery::new(q.as_deref(), page.as_deref(), config.page_size);
            let page = catalog.search(&query)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("Welcome to the Pokedex Application!");
                for pokemon in &page.items {
                    println!("  {:<24} {}", pokemon.to_string(), pokemon.types);
                }
                println!(
                    "Page {} of {} ({} records)",
                    page.number, page.num_pages, page.total
                );
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Formation {
            session,
            action,
            team,
            pokemon_id,
        } => {
            let sessions = FileSessionStore::new(&config.session_dir);
            let session_id = session.as_deref().map(SessionId::from).unwrap_or_default();
            let mut session = sessions.load(&session_id)?;

            let seed = args.seed.unwrap_or_else(rand::random);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let outcome = match FormationAction::from_params(
                action.as_deref(),
                team.as_deref(),
                pokemon_id.as_deref(),
            ) {
                Ok(action) => handle_formation(&mut session, &mut catalog, action, &mut rng),
                Err(message) => {
                    let mut outcome = handle_formation(&mut session, &mut catalog, None, &mut rng);
                    outcome.diagnostics.error(message);
                    outcome
                }
            };
            sessions.save(&session_id, &session)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("Session: {} (seed {})", session_id, seed);
                print_outcome(&outcome);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_pokemon(pokemon: &Pokemon) {
    let s = &pokemon.stats;
    println!("{}", pokemon);
    println!("  Type:        {}", pokemon.types);
    println!("  Image:       {}", pokemon.image);
    println!("  Description: {}", pokemon.description);
    println!(
        "  HP {} / Atk {} / Def {} / SpA {} / SpD {} / Spe {}",
        s.hp, s.attack, s.defense, s.special_attack, s.special_defense, s.speed
    );
}

fn print_team(label: &str, team: &[Pokemon]) {
    let names: Vec<String> = team.iter().map(|p| p.to_string()).collect();
    if names.is_empty() {
        println!("{}: (empty)", label);
    } else {
        println!("{}: {}", label, names.join(", "));
    }
}

fn print_battle(battle: &BattleResult) {
    println!();
    for round in &battle.rounds {
        println!("  Round {}: {:?} - {}", round.index, round.winner, round.reason);
    }
    println!("  Score: A {} - B {}", battle.wins_a, battle.wins_b);
    println!("  {}", battle.verdict);
}

fn print_outcome(outcome: &FormationOutcome) {
    print_team("Team A", &outcome.team_a);
    print_team("Team B", &outcome.team_b);
    for notice in &outcome.diagnostics.notices {
        println!("  + {}", notice);
    }
    for error in &outcome.diagnostics.errors {
        println!("  ! {}", error);
    }
    if let Some(battle) = &outcome.battle {
        print_battle(battle);
    }
}
