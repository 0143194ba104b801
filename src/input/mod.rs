pub mod intel;
pub mod map;

pub use intel::identify_aliens;
pub use map::{read_world_map, MapSource};

use thiserror::Error;

/// Errors from the world-map and intel file formats. All fatal at load
/// time; nothing in here is recoverable mid-parse.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: road `{token}` is not of the form label=city")]
    MalformedRoad { line: usize, token: String },
    #[error("line {line}: empty label or city in road `{token}`")]
    EmptyRoadPart { line: usize, token: String },
    #[error("line {line}: {city} cannot have a road to itself")]
    SelfLoop { line: usize, city: String },
    #[error("line {line}: missing alien name")]
    MissingAlienName { line: usize },
    #[error("line {line}: alien name `{name}` is already taken")]
    DuplicateAlienName { line: usize, name: String },
    #[error("line {line}: no city named `{city}` in the world")]
    UnknownCity { line: usize, city: String },
    #[error("line {line}: more intel lines than aliens in the roster")]
    TooManyIntelLines { line: usize },
}
