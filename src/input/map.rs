use std::fs;
use std::path::Path;

use super::ParseError;
use crate::model::World;

/// The input-order view of a parsed map file: which cities had their own
/// line, in declaration order. The world itself iterates alphabetically;
/// rendering the post-invasion map in the order the file was written
/// needs this.
#[derive(Debug, Clone)]
pub struct MapSource {
    declared: Vec<String>,
}

impl MapSource {
    /// City names that opened a line, in file order.
    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    /// Render the world the way the input file was written, dropping
    /// destroyed cities and roads to destroyed neighbors. One line per
    /// surviving declared city, in declaration order.
    pub fn render_surviving(&self, world: &World) -> String {
        let mut out = String::new();
        for name in &self.declared {
            if !world.is_standing(name) {
                continue;
            }
            if let Some(city) = world.get(name) {
                out.push_str(&city.render(world));
                out.push('\n');
            }
        }
        out
    }
}

/// Read and parse a world-map file.
pub fn read_world_map(path: impl AsRef<Path>) -> Result<(World, MapSource), ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_world_map(&text)
}

/// Parse world-map text.
///
/// One city per line: the city name, then whitespace-separated roads of
/// the form `label=neighbor`. Cities come into existence on first
/// mention, whether declaring a line or named as a neighbor; every road
/// is registered on both endpoints, and the label is recorded on the
/// declaring city's side only. Blank lines are skipped.
pub fn parse_world_map(text: &str) -> Result<(World, MapSource), ParseError> {
    let mut world = World::new();
    let mut declared: Vec<String> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        ensure_city(&mut world, name);
        if !declared.iter().any(|d| d == name) {
            declared.push(name.to_string());
        }

        for token in tokens {
            let Some((label, neighbor)) = token.split_once('=') else {
                return Err(ParseError::MalformedRoad {
                    line,
                    token: token.to_string(),
                });
            };
            if label.is_empty() || neighbor.is_empty() {
                return Err(ParseError::EmptyRoadPart {
                    line,
                    token: token.to_string(),
                });
            }
            if neighbor == name {
                return Err(ParseError::SelfLoop {
                    line,
                    city: name.to_string(),
                });
            }
            ensure_city(&mut world, neighbor);
            let key = world.link_cities(name, neighbor);
            if let Some(city) = world.get_mut(name) {
                city.set_road_label(&key, label);
            }
        }
    }

    tracing::debug!(cities = world.len(), declared = declared.len(), "world map parsed");
    Ok((world, MapSource { declared }))
}

/// Add the city only if absent; re-mentions must not wipe earlier roads.
fn ensure_city(world: &mut World, name: &str) {
    if !world.contains(name) {
        world.add_new_city(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Foo north=Bar west=Baz south=Qu-ux
Bar south=Foo west=Bee
";

    #[test]
    fn parses_cities_from_both_sides_of_roads() {
        let (world, source) = parse_world_map(EXAMPLE).unwrap();
        assert_eq!(world.len(), 5);
        assert_eq!(source.declared(), ["Foo", "Bar"]);
        for name in ["Foo", "Bar", "Baz", "Qu-ux", "Bee"] {
            assert!(world.contains(name), "missing {name}");
        }
    }

    #[test]
    fn roads_are_bidirectional_but_labels_one_sided() {
        let (world, _) = parse_world_map(EXAMPLE).unwrap();
        let foo = world.get("Foo").unwrap();
        let bar = world.get("Bar").unwrap();
        let key = foo
            .neighbor_names()
            .find(|(_, n)| *n == "Bar")
            .map(|(k, _)| k.to_string())
            .unwrap();
        assert_eq!(bar.neighbor(&key), Some("Foo"));
        assert_eq!(foo.road_label(&key), Some("north"));
        // Bar declared its own label for the same road.
        assert_eq!(bar.road_label(&key), Some("south"));
    }

    #[test]
    fn duplicate_roads_collapse() {
        let (world, _) = parse_world_map("Foo north=Bar\nBar south=Foo\n").unwrap();
        assert_eq!(world.get("Foo").unwrap().links().len(), 1);
        assert_eq!(world.get("Bar").unwrap().links().len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (world, source) = parse_world_map("\nFoo north=Bar\n\n").unwrap();
        assert_eq!(world.len(), 2);
        assert_eq!(source.declared(), ["Foo"]);
    }

    #[test]
    fn rejects_road_without_equals() {
        let err = parse_world_map("Foo north\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRoad { line: 1, .. }));
    }

    #[test]
    fn rejects_empty_label_or_city() {
        assert!(matches!(
            parse_world_map("Foo =Bar\n").unwrap_err(),
            ParseError::EmptyRoadPart { .. }
        ));
        assert!(matches!(
            parse_world_map("Foo north=\n").unwrap_err(),
            ParseError::EmptyRoadPart { .. }
        ));
    }

    #[test]
    fn rejects_self_loop() {
        let err = parse_world_map("Foo north=Foo\n").unwrap_err();
        assert!(matches!(err, ParseError::SelfLoop { line: 1, .. }));
    }

    #[test]
    fn render_surviving_round_trips_untouched_world() {
        let (world, source) = parse_world_map(EXAMPLE).unwrap();
        assert_eq!(source.render_surviving(&world), EXAMPLE);
    }

    #[test]
    fn render_surviving_drops_destroyed() {
        let (mut world, source) = parse_world_map(EXAMPLE).unwrap();
        world.get_mut("Bar").unwrap().destroy();
        assert_eq!(
            source.render_surviving(&world),
            "Foo west=Baz south=Qu-ux\n"
        );
    }
}
