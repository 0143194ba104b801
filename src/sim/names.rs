use std::collections::BTreeSet;

use rand::Rng;
use rand::RngCore;

use crate::model::Alien;

const NAME_PREFIXES: &[&str] = &[
    "Blor", "Drax", "Ekk", "Fleeb", "Gark", "Hrul", "Ix", "Jyr", "Krel", "Lum",
    "Moz", "Nix", "Oolg", "Plex", "Quar", "Rz", "Skro", "Thex", "Ul", "Vex",
    "Wrob", "Xan", "Ygg", "Zor",
];

const NAME_SUFFIXES: &[&str] = &[
    "ag", "arn", "ax", "eth", "gor", "ix", "lan", "mok", "nar", "oth",
    "pli", "quon", "rax", "sho", "tak", "ud", "vex", "wit", "xis", "zul",
];

/// Generate a random alien name from the syllable tables.
pub fn generate_alien_name(rng: &mut dyn RngCore) -> String {
    let prefix = NAME_PREFIXES[rng.random_range(0..NAME_PREFIXES.len())];
    let suffix = NAME_SUFFIXES[rng.random_range(0..NAME_SUFFIXES.len())];
    format!("{prefix}{suffix}")
}

/// Build a roster of `count` aliens with generated names.
///
/// Occupancy tracking keys on alien names, so a generated name that
/// collides with an earlier one gets a numeric suffix instead of being
/// drawn again, keeping the draw count a function of `count` alone.
pub fn spawn_aliens(count: usize, rng: &mut dyn RngCore) -> Vec<Alien> {
    let mut taken = BTreeSet::new();
    let mut aliens = Vec::with_capacity(count);
    for _ in 0..count {
        let base = generate_alien_name(rng);
        let mut name = base.clone();
        let mut serial = 2;
        while !taken.insert(name.clone()) {
            name = format!("{base}-{serial}");
            serial += 1;
        }
        aliens.push(Alien::new(name));
    }
    aliens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn generates_nonempty_name() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(!generate_alien_name(&mut rng).is_empty());
    }

    #[test]
    fn deterministic() {
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        assert_eq!(generate_alien_name(&mut rng1), generate_alien_name(&mut rng2));
    }

    #[test]
    fn spawn_produces_requested_count_with_unique_names() {
        let mut rng = SmallRng::seed_from_u64(7);
        // Far more aliens than distinct syllable pairs, forcing suffixes.
        let aliens = spawn_aliens(1000, &mut rng);
        assert_eq!(aliens.len(), 1000);
        let names: BTreeSet<&str> = aliens.iter().map(Alien::name).collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn spawned_aliens_start_unplaced_and_alive() {
        let mut rng = SmallRng::seed_from_u64(7);
        for alien in spawn_aliens(10, &mut rng) {
            assert!(!alien.is_invading());
            assert!(!alien.is_dead());
        }
    }
}
