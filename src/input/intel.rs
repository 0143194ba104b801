use std::fs;
use std::path::Path;

use super::ParseError;
use crate::model::{Alien, World};

/// Read an intel file and apply it to a freshly generated roster.
///
/// Line *i* renames alien *i*; an optional ` @ City` suffix pre-places
/// that alien before the run starts. See [`apply_intel`].
pub fn identify_aliens(
    aliens: &mut [Alien],
    world: &World,
    path: impl AsRef<Path>,
) -> Result<(), ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    apply_intel(aliens, world, &text)
}

/// Apply intel text to the roster, positionally.
///
/// Each non-blank line is either `Name` or `Name @ City`. The name
/// replaces the generated name of the next roster slot and must stay
/// unique across the whole roster. A placement city must exist in the
/// world; placement only sets the alien's position and never touches
/// occupancy tracking, so a pre-placed alien first shows up to defenders
/// when it makes its first move.
pub fn apply_intel(aliens: &mut [Alien], world: &World, text: &str) -> Result<(), ParseError> {
    let mut slot = 0usize;
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if slot >= aliens.len() {
            return Err(ParseError::TooManyIntelLines { line });
        }

        let (name, placement) = match trimmed.split_once('@') {
            Some((name, city)) => (name.trim(), Some(city.trim())),
            None => (trimmed, None),
        };
        if name.is_empty() {
            return Err(ParseError::MissingAlienName { line });
        }
        let taken = aliens
            .iter()
            .enumerate()
            .any(|(i, alien)| i != slot && alien.name() == name);
        if taken {
            return Err(ParseError::DuplicateAlienName {
                line,
                name: name.to_string(),
            });
        }
        aliens[slot].rename(name);

        if let Some(city) = placement {
            if !world.contains(city) {
                return Err(ParseError::UnknownCity {
                    line,
                    city: city.to_string(),
                });
            }
            aliens[slot].invade_city(city);
            tracing::debug!(alien = name, city, "pre-placed from intel");
        }
        slot += 1;
    }
    Ok(())
}
