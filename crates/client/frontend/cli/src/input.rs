//! Line input parsing.

use composition_core::{Input, World};

/// What one line typed at the prompt asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Input),
    Quit,
}

impl Command {
    /// Reads `line` as a single symbol, ignoring the line terminator.
    ///
    /// Only a line holding exactly one symbol bound by some live controlled
    /// entity starts a turn; anything else, including an empty line, ends
    /// the session.
    pub fn parse(line: &str, world: &World) -> Self {
        let mut chars = line.trim_end_matches(['\r', '\n']).chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Command::Quit;
        };
        if world.control_symbols().contains(&symbol) {
            Command::Play(Input(symbol))
        } else {
            Command::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::{ControlMap, GameConfig};

    fn world() -> World {
        let mut world = World::new(GameConfig::default());
        world.spawn_controlled("player", [], ControlMap::keyboard());
        world
    }

    #[test]
    fn bound_key_plays() {
        assert_eq!(Command::parse("s\n", &world()), Command::Play(Input('s')));
        assert_eq!(Command::parse("a\r\n", &world()), Command::Play(Input('a')));
        assert_eq!(Command::parse("g", &world()), Command::Play(Input('g')));
    }

    #[test]
    fn anything_else_quits() {
        let world = world();

        assert_eq!(Command::parse("x\n", &world), Command::Quit);
        assert_eq!(Command::parse("\n", &world), Command::Quit);
        assert_eq!(Command::parse("", &world), Command::Quit);
        assert_eq!(Command::parse(" s", &world), Command::Quit);
    }

    #[test]
    fn longer_lines_quit_even_when_they_start_with_a_key() {
        let world = world();

        assert_eq!(Command::parse("attack\n", &world), Command::Quit);
        assert_eq!(Command::parse("zz\n", &world), Command::Quit);
        assert_eq!(Command::parse("s \n", &world), Command::Quit);
    }

    #[test]
    fn no_controlled_entity_means_no_keys() {
        let world = World::new(GameConfig::default());

        assert_eq!(Command::parse("s", &world), Command::Quit);
    }
}
