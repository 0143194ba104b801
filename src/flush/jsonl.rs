use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::{Alien, World};

/// Write an iterator of serializable items to a JSONL file (one JSON
/// object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the final invasion state to JSONL files in `output_dir`.
///
/// Creates the directory if it does not exist. Writes 2 files:
/// - `cities.jsonl`: one City per line, destroyed flag included
/// - `aliens.jsonl`: one Alien per line, dead flag and last city included
pub fn flush_to_jsonl(world: &World, aliens: &[Alien], output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("cities.jsonl"), world.cities())?;
    write_jsonl(&output_dir.join("aliens.jsonl"), aliens.iter())?;

    tracing::debug!(dir = %output_dir.display(), "final state flushed");
    Ok(())
}
