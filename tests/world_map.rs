use std::fs;
use std::path::PathBuf;

use alien_invasion::input::{identify_aliens, read_world_map, ParseError};
use alien_invasion::sim::{SimConfig, Simulation};
use alien_invasion::Alien;

fn write_map(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

const CLASSIC: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee
";

const WIDER: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee
Baz east=Foo north=Gee
";

const RING: &str = "\
Alba east=Brook
Brook east=Cairn
Cairn east=Dunn
Dunn east=Eyre
Eyre east=Flint
Flint east=Gorse
Gorse east=Howe
Howe east=Alba
";

#[test]
fn reads_classic_five_city_map() {
    let (_dir, path) = write_map(CLASSIC);
    let (world, _) = read_world_map(&path).unwrap();
    assert_eq!(world.len(), 5);
}

#[test]
fn reads_six_city_map() {
    let (_dir, path) = write_map(WIDER);
    let (world, _) = read_world_map(&path).unwrap();
    assert_eq!(world.len(), 6);
}

#[test]
fn reads_eight_city_ring() {
    let (_dir, path) = write_map(RING);
    let (world, _) = read_world_map(&path).unwrap();
    assert_eq!(world.len(), 8);
    // Ring: every city has exactly two roads.
    for city in world.cities() {
        assert_eq!(city.links().len(), 2, "degree of {}", city.name());
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_world_map("does/not/exist.txt").unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}

#[test]
fn intel_file_renames_and_places() {
    let (_dir, path) = write_map(CLASSIC);
    let (world, _) = read_world_map(&path).unwrap();

    let intel_dir = tempfile::tempdir().unwrap();
    let intel_path = intel_dir.path().join("aliens.txt");
    fs::write(&intel_path, "Zorblax @ Foo\nKrelgar\n").unwrap();

    let mut aliens = vec![Alien::new("Gen0"), Alien::new("Gen1")];
    identify_aliens(&mut aliens, &world, &intel_path).unwrap();
    assert_eq!(aliens[0].name(), "Zorblax");
    assert_eq!(aliens[0].city(), Some("Foo"));
    assert_eq!(aliens[1].name(), "Krelgar");
    assert!(!aliens[1].is_invading());
}

/// End to end: parse a file, run the invasion, and render what is left
/// in the input's own order and format.
#[test]
fn parsed_world_runs_and_renders() {
    let (_dir, path) = write_map(CLASSIC);
    let (world, source) = read_world_map(&path).unwrap();

    let aliens = vec![Alien::new("Apex"), Alien::new("Blight"), Alien::new("Chitter")];
    let mut sim = Simulation::new(SimConfig::new(2024, 500), world, aliens);
    sim.start().unwrap();

    let rendered = source.render_surviving(sim.world());
    for line in rendered.lines() {
        let name = line.split_whitespace().next().unwrap();
        assert!(sim.world().is_standing(name));
        assert!(["Foo", "Bar"].contains(&name), "unexpected line {line}");
    }
}
