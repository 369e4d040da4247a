//! mealmax command-line entry point.
//!
//! Each invocation opens the catalog, runs one sub-command and exits. The
//! battle roster only lives for the `battle` sub-command.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use mealmax_core::{BattleModel, GameRng, MealId, RandomSource, SortKey, Tier};
use mealmax_db::Store;
use mealmax_random::RandomOrgClient;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mealmax", version, about = "Meal catalog and head-to-head meal battles")]
struct Cli {
    /// RON configuration file (defaults to ./mealmax.ron when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a meal to the catalog
    Create {
        name: String,
        category: String,
        price: f64,
        /// LOW, MED or HIGH
        tier: String,
    },
    /// Soft-delete a meal
    Delete { id: u64 },
    /// Show one meal
    Get {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<u64>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Rank live meals
    Leaderboard {
        /// wins or win_pct
        #[arg(long, default_value = "wins")]
        sort: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Record a battle result (win or loss) for a meal
    Record { id: u64, result: String },
    /// Battle two meals by name
    Battle {
        first: String,
        second: String,
        /// Draw from a seeded local generator instead of random.org
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Remove every meal
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config)?;

    let store = open_store(&config)?;
    run(cli.command, &store, &config)
}

fn init_tracing(config: &Config) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), config.log_filter.as_deref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// `RUST_LOG` when set, `info` otherwise, plus the configured directive.
fn build_filter(rust_log: Option<&str>, extra: Option<&str>) -> Result<EnvFilter> {
    let mut filter = match rust_log.map(str::trim) {
        Some(spec) if !spec.is_empty() => {
            EnvFilter::try_new(spec).with_context(|| format!("invalid RUST_LOG {:?}", spec))?
        }
        _ => EnvFilter::new(tracing::Level::INFO.to_string()),
    };
    if let Some(directive) = extra {
        filter = filter.add_directive(
            directive
                .parse()
                .with_context(|| format!("invalid log_filter {:?}", directive))?,
        );
    }
    Ok(filter)
}

fn open_store(config: &Config) -> Result<Store> {
    let store = if config.database.is_in_memory() {
        Store::in_memory()?
    } else {
        Store::open(&config.database.path)
            .with_context(|| format!("opening catalog at {}", config.database.path))?
    };
    Ok(store)
}

fn run(command: Command, store: &Store, config: &Config) -> Result<()> {
    match command {
        Command::Create {
            name,
            category,
            price,
            tier,
        } => {
            let tier: Tier = tier.parse()?;
            let id = store.create_meal(&name, &category, price, tier)?;
            println!("{}", id);
        }
        Command::Delete { id } => {
            store.delete_meal(MealId::new(id))?;
        }
        Command::Get { id, name } => {
            let meal = match (id, name) {
                (Some(id), _) => store.get_meal_by_id(MealId::new(id))?,
                (None, Some(name)) => store.get_meal_by_name(&name)?,
                (None, None) => anyhow::bail!("either --id or --name is required"),
            };
            print_ron(&meal)?;
        }
        Command::Leaderboard { sort, limit } => {
            let sort: SortKey = sort.parse()?;
            print_ron(&store.leaderboard(sort, limit)?)?;
        }
        Command::Record { id, result } => {
            store.update_meal_stats(MealId::new(id), &result)?;
        }
        Command::Battle {
            first,
            second,
            seed,
        } => {
            let mut random: Box<dyn RandomSource> = match seed {
                Some(seed) => Box::new(GameRng::new(seed)),
                None => Box::new(RandomOrgClient::new(&config.random)?),
            };

            let mut battle = BattleModel::new();
            battle.prep_combatant(store.get_meal_by_name(&first)?)?;
            battle.prep_combatant(store.get_meal_by_name(&second)?)?;
            let winner = battle.battle(store, random.as_mut())?;
            println!("{}", winner);
        }
        Command::Clear => {
            store.clear_meals()?;
            info!("catalog cleared");
        }
    }
    Ok(())
}

fn print_ron<T: Serialize>(value: &T) -> Result<()> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_battle() {
        let cli = Cli::parse_from(["mealmax", "battle", "Pad Thai", "Ramen", "--seed", "7"]);
        match cli.command {
            Command::Battle {
                first,
                second,
                seed,
            } => {
                assert_eq!(first, "Pad Thai");
                assert_eq!(second, "Ramen");
                assert_eq!(seed, Some(7));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_get_requires_a_key() {
        assert!(Cli::try_parse_from(["mealmax", "get"]).is_err());
        assert!(Cli::try_parse_from(["mealmax", "get", "--id", "1", "--name", "x"]).is_err());
        assert!(Cli::try_parse_from(["mealmax", "get", "--name", "x"]).is_ok());
    }

    #[test]
    fn test_filter_defaults_to_info() {
        let filter = build_filter(None, None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = build_filter(Some("  "), None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_honours_rust_log_level() {
        let filter = build_filter(Some("debug"), None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Some("warn"), Some("mealmax_db=trace")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_filter_rejects_bad_directive() {
        assert!(build_filter(None, Some("mealmax_db=loud")).is_err());
    }

    #[test]
    fn test_run_seeded_battle() {
        let config = Config::default();
        let store = Store::in_memory().unwrap();
        let create = |name: &str, price: f64| Command::Create {
            name: name.to_string(),
            category: "Cuisine 1".to_string(),
            price,
            tier: "MED".to_string(),
        };
        run(create("Meal 1", 20.0), &store, &config).unwrap();
        run(create("Meal 2", 20.0), &store, &config).unwrap();

        let battle = Command::Battle {
            first: "Meal 1".to_string(),
            second: "Meal 2".to_string(),
            seed: Some(7),
        };
        run(battle, &store, &config).unwrap();

        // Equal scores: the first combatant takes it
        let winner = store.get_meal_by_name("Meal 1").unwrap();
        let loser = store.get_meal_by_name("Meal 2").unwrap();
        assert_eq!((winner.battles, winner.wins), (1, 1));
        assert_eq!((loser.battles, loser.wins), (1, 0));
    }

    #[test]
    fn test_run_rejects_bad_tier() {
        let config = Config::default();
        let store = Store::in_memory().unwrap();
        let create = Command::Create {
            name: "Meal 1".to_string(),
            category: "Cuisine".to_string(),
            price: 10.0,
            tier: "EASY".to_string(),
        };
        assert!(run(create, &store, &config).is_err());
        assert!(store.get_meal_by_name("Meal 1").is_err());
    }
}
