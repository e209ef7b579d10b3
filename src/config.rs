//! Command-line configuration

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use crate::game::{Limits, DEFAULT_MAX_PLAYERS, DEFAULT_MAX_ROLE_COUNT};

/// Random role dealer for Mafia party games
#[derive(Parser, Debug)]
#[command(name = "mafia-roles")]
#[command(author, version, about = "Deal secret Mafia roles to a roster of players", long_about = None)]
pub struct Args {
    /// Seed for a reproducible deal
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Preset to load at startup (classic, balanced, large)
    #[arg(short = 'p', long = "preset")]
    pub preset: Option<String>,

    /// Maximum roster size
    #[arg(long = "max-players", default_value_t = DEFAULT_MAX_PLAYERS as u8,
          value_parser = clap::value_parser!(u8).range(1..=99))]
    pub max_players: u8,

    /// Maximum count for any single role
    #[arg(long = "max-role-count", default_value_t = DEFAULT_MAX_ROLE_COUNT as u8,
          value_parser = clap::value_parser!(u8).range(1..=99))]
    pub max_role_count: u8,

    /// Write logs to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub seed: Option<u64>,
    pub preset: Option<String>,
    pub limits: Limits,
    pub log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            preset: args.preset,
            limits: Limits {
                max_players: usize::from(args.max_players),
                max_role_count: u32::from(args.max_role_count),
            },
            log_file: args.log_file,
        }
    }
}

impl Config {
    /// The deal source: seeded when `--seed` is given, otherwise from the
    /// thread RNG.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}
