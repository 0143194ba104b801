use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::defense::CityDefense;
use crate::model::{Alien, World};

/// Configuration for an invasion run, built once by the caller and handed
/// to [`Simulation::new`]. There is no process-global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for the run's single sequential random source.
    pub seed: u64,
    /// Maximum number of rounds before the invasion is called off.
    pub max_rounds: usize,
}

impl SimConfig {
    pub fn new(seed: u64, max_rounds: usize) -> Self {
        Self { seed, max_rounds }
    }

    /// The random source this configuration describes.
    pub fn rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed)
    }
}

/// Why an alien sat a move out. Control flow, not failure: the round loop
/// skips to the next alien and the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlienDead,
    AlienTrapped,
    WorldDestroyed,
}

/// Result of one [`Simulation::move_alien`] attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The alien entered `to`; `from` is `None` on its first placement.
    Moved { from: Option<String>, to: String },
    /// No move this round, for the given reason.
    Skipped(SkipReason),
}

/// Fatal engine errors. Any of these aborts [`Simulation::start`]
/// immediately, leaving whatever mutations had already committed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A recorded location does not resolve to a city in the world.
    #[error("no city named `{0}` in the world")]
    UnknownCity(String),
    /// An occupancy entry names an alien missing from the roster.
    #[error("no alien named `{0}` in the roster")]
    UnknownAlien(String),
}

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A full round passed without a single move, before the round
    /// budget ran out. `round` is the index of the stalled round.
    Stalled { round: usize },
    /// Every configured round ran.
    RoundsExhausted { rounds: usize },
}

/// The invasion engine.
///
/// Owns the world, the alien roster, the occupancy tracker, and the run's
/// random source. All state is mutated in place by the single sequential
/// round loop; after [`start`](Simulation::start) returns, the caller
/// reads final world and roster state back out.
///
/// Reproducibility contract: identical seed, world, roster (same names in
/// the same order), and round budget reproduce the exact move sequence.
/// Each round draws the processing-order shuffle first, then one draw (or
/// neighbor shuffle) per alien that attempts a move, in roster order of
/// the shuffle; nothing else touches the random source.
#[derive(Debug)]
pub struct Simulation {
    rng: SmallRng,
    round: usize,
    max_rounds: usize,
    world: World,
    aliens: Vec<Alien>,
    roster: BTreeMap<String, usize>,
    defense: CityDefense,
}

impl Simulation {
    /// Build an engine with a fresh random source seeded from `config`.
    pub fn new(config: SimConfig, world: World, aliens: Vec<Alien>) -> Self {
        let rng = config.rng();
        Self::with_rng(config, rng, world, aliens)
    }

    /// Build an engine continuing an already-advanced random stream.
    ///
    /// Callers that draw from the seed's stream before the run (roster
    /// name generation) hand the stream back here, so the whole run stays
    /// one sequence of draws.
    pub fn with_rng(config: SimConfig, rng: SmallRng, world: World, aliens: Vec<Alien>) -> Self {
        let roster = aliens
            .iter()
            .enumerate()
            .map(|(idx, alien)| (alien.name().to_string(), idx))
            .collect();
        Self {
            rng,
            round: 0,
            max_rounds: config.max_rounds,
            world,
            aliens,
            roster,
            defense: CityDefense::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn defense(&self) -> &CityDefense {
        &self.defense
    }

    /// Rounds fully completed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Run rounds until the budget is spent or a round passes with no
    /// moves at all.
    ///
    /// Each round shuffles the roster into a fresh processing order, then
    /// attempts one move per alien. Skips never abort the round; a fatal
    /// error aborts the whole run unchanged. Destructions committed by an
    /// earlier alien are visible to every later pick in the same round,
    /// so arriving first matters, which is why the order is re-drawn
    /// every round.
    pub fn start(&mut self) -> Result<Termination, SimError> {
        tracing::info!(
            rounds = self.max_rounds,
            aliens = self.aliens.len(),
            cities = self.world.len(),
            "invasion started"
        );
        while self.round < self.max_rounds {
            let order = self.shuffled_roster();
            let mut moved = false;
            for idx in order {
                match self.move_alien(idx)? {
                    MoveOutcome::Moved { .. } => moved = true,
                    MoveOutcome::Skipped(reason) => {
                        tracing::debug!(
                            alien = self.aliens[idx].name(),
                            ?reason,
                            round = self.round,
                            "no move"
                        );
                    }
                }
            }
            if !moved {
                tracing::info!(round = self.round, "no available moves, invasion ends early");
                return Ok(Termination::Stalled { round: self.round });
            }
            self.round += 1;
        }
        tracing::info!(rounds = self.max_rounds, "round budget exhausted");
        Ok(Termination::RoundsExhausted { rounds: self.max_rounds })
    }

    /// Attempt one move for the alien at roster index `idx`: pick a
    /// destination, then apply it.
    ///
    /// Applying moves the alien between occupancy sets and, when the
    /// destination now holds more than one occupant, destroys it and
    /// kills everyone recorded inside, immediately, so the destruction
    /// shapes every later pick in the same round.
    pub fn move_alien(&mut self, idx: usize) -> Result<MoveOutcome, SimError> {
        let pick = self.pick_move(idx)?;
        let (from, to) = match pick {
            MoveOutcome::Skipped(_) => return Ok(pick),
            MoveOutcome::Moved { ref from, ref to } => (from.clone(), to.clone()),
        };

        let name = self.aliens[idx].name().to_string();
        self.aliens[idx].invade_city(&to);
        if let Some(origin) = &from {
            self.defense.leave(origin, &name);
        }
        self.defense.enter(&to, &name);
        tracing::info!(
            alien = %name,
            from = from.as_deref().unwrap_or("(space)"),
            to = %to,
            "alien moved"
        );

        if self.defense.garrison_size(&to) > 1 {
            self.resolve_conflict(&to)?;
        }
        Ok(pick)
    }

    /// Compute-only phase: where would this alien go, if anywhere.
    fn pick_move(&mut self, idx: usize) -> Result<MoveOutcome, SimError> {
        if self.aliens[idx].is_dead() {
            return Ok(MoveOutcome::Skipped(SkipReason::AlienDead));
        }
        if self.aliens[idx].is_trapped(&self.world) {
            return Ok(MoveOutcome::Skipped(SkipReason::AlienTrapped));
        }
        match self.aliens[idx].city().map(str::to_string) {
            None => match self.pick_any_city() {
                Some(to) => Ok(MoveOutcome::Moved { from: None, to }),
                None => Ok(MoveOutcome::Skipped(SkipReason::WorldDestroyed)),
            },
            Some(from) => match self.pick_connected_city(&from)? {
                Some(to) => Ok(MoveOutcome::Moved { from: Some(from), to }),
                // Trapping discovered at scan time counts as trapped.
                None => Ok(MoveOutcome::Skipped(SkipReason::AlienTrapped)),
            },
        }
    }

    /// First placement: a uniform draw over the standing cities, indexed
    /// into their lexicographically sorted names so the draw is
    /// reproducible.
    fn pick_any_city(&mut self) -> Option<String> {
        let standing = self.world.standing_city_names();
        if standing.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..standing.len());
        Some(standing[pick].to_string())
    }

    /// Follow-up move: shuffle the current city's roads, take the first
    /// one leading to a standing city.
    fn pick_connected_city(&mut self, from: &str) -> Result<Option<String>, SimError> {
        let city = self
            .world
            .get(from)
            .ok_or_else(|| SimError::UnknownCity(from.to_string()))?;
        let mut order: Vec<usize> = (0..city.links().len()).collect();
        order.shuffle(&mut self.rng);
        for i in order {
            let key = city.links()[i].key();
            let Some(neighbor) = city.neighbor(key) else {
                continue;
            };
            if self.world.is_standing(neighbor) {
                return Ok(Some(neighbor.to_string()));
            }
        }
        Ok(None)
    }

    /// Destroy `city` and kill everyone recorded inside it.
    fn resolve_conflict(&mut self, city: &str) -> Result<(), SimError> {
        let fallen: Vec<String> = self.defense.garrison(city).map(str::to_string).collect();
        let target = self
            .world
            .get_mut(city)
            .ok_or_else(|| SimError::UnknownCity(city.to_string()))?;
        target.destroy();
        for name in &fallen {
            let idx = *self
                .roster
                .get(name)
                .ok_or_else(|| SimError::UnknownAlien(name.clone()))?;
            self.aliens[idx].kill();
        }
        tracing::info!(city, fighters = fallen.join(" and "), "city destroyed");
        Ok(())
    }

    /// A fresh uniformly random processing order over the roster.
    fn shuffled_roster(&mut self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.aliens.len()).collect();
        order.shuffle(&mut self.rng);
        order
    }
}
