use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use sha2::{Digest, Sha256};

pub const DEFAULT_ROUNDS: usize = 10_000;
pub const DEFAULT_ALIEN_COUNT: usize = 10;

/// Command line arguments for the invasion simulator.
#[derive(Parser, Debug)]
#[command(name = "alien-invasion")]
#[command(about = "Deterministic alien invasion over a named city graph")]
pub struct Args {
    /// Explicit random seed; takes precedence over --name
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run label, hashed into a seed when --seed is absent
    #[arg(long)]
    pub name: Option<String>,

    /// Number of rounds to simulate
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub iterations: usize,

    /// Number of aliens to generate
    #[arg(long, default_value_t = DEFAULT_ALIEN_COUNT)]
    pub aliens: usize,

    /// World map input file
    #[arg(long)]
    pub world: PathBuf,

    /// Optional intel file naming (and pre-placing) aliens
    #[arg(long)]
    pub intel: Option<PathBuf>,

    /// Write final state as JSONL files into this directory
    #[arg(long)]
    pub flush_dir: Option<PathBuf>,
}

impl Args {
    /// Validation beyond what clap's types already enforce.
    pub fn validate(&self) -> Result<(), String> {
        if self.aliens == 0 {
            return Err("alien count must be > 0".to_string());
        }
        if self.iterations == 0 {
            return Err("iteration count must be > 0".to_string());
        }
        if self.world.as_os_str().is_empty() {
            return Err("world map file path is empty".to_string());
        }
        Ok(())
    }

    /// Resolve the run seed: explicit seed, hashed label, or (giving up
    /// on reproducibility) the wall clock.
    pub fn resolve_seed(&self) -> u64 {
        if let Some(seed) = self.seed {
            tracing::info!(seed, "entropy: using provided seed");
            return seed;
        }
        if let Some(name) = &self.name {
            let seed = seed_from_label(name);
            tracing::info!(seed, label = %name, "entropy: using first 8 bytes of sha256(label)");
            return seed;
        }
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        tracing::info!(seed, "entropy: using current time");
        seed
    }
}

/// First 8 bytes of `sha256(label)`, read big-endian.
pub fn seed_from_label(label: &str) -> u64 {
    let digest = Sha256::digest(label.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
