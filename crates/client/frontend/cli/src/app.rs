//! Interactive session loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use composition_core::{GameEngine, TurnReport, World};
use tracing::{debug, info};

use crate::input::Command;
use crate::presentation::{MENU, render};

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed an unbound key or input ran out.
    Quit,
    /// No controlled entity is left in the world.
    GameOver,
}

/// Menu, board, prompt, turn; repeated until the session ends.
///
/// Generic over its streams so sessions can be scripted.
pub struct CliApp<R, W> {
    world: World,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(world: World, input: R, output: W) -> Self {
        Self {
            world,
            input,
            output,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        info!(entities = self.world.len(), "session started");

        let end = loop {
            if !self.world.has_controlled() {
                write!(self.output, "{}", render(&self.world))?;
                writeln!(self.output, "game over")?;
                break SessionEnd::GameOver;
            }

            write!(self.output, "{MENU}{}", render(&self.world))?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read player input")?;
            if read == 0 {
                debug!("input closed");
                break SessionEnd::Quit;
            }

            match Command::parse(&line, &self.world) {
                Command::Quit => break SessionEnd::Quit,
                Command::Play(input) => {
                    let report = GameEngine::new(&mut self.world).run_turn(input);
                    self.announce(&report)?;
                }
            }
        };

        info!(?end, turn = %self.world.turn(), "session ended");
        self.output.flush()?;
        Ok(end)
    }

    fn announce(&mut self, report: &TurnReport) -> Result<()> {
        for id in &report.buried {
            let name = self
                .world
                .cemetery()
                .iter()
                .find(|entity| entity.id() == *id)
                .map_or("something", |entity| entity.name());
            writeln!(self.output, "{name} died")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::{Alive, ControlMap, GameConfig, InFire, Positioned};

    fn session(world: World, keys: &str) -> (SessionEnd, World, String) {
        let mut output = Vec::new();
        let mut app = CliApp::new(world, keys.as_bytes(), &mut output);
        let end = app.run().unwrap();
        let world = app.world().clone();
        (end, world, String::from_utf8(output).unwrap())
    }

    fn walker() -> World {
        let mut world = World::new(GameConfig::default());
        world.spawn_controlled(
            "player",
            [Alive::new(1.0).into(), Positioned::new(0).into()],
            ControlMap::keyboard(),
        );
        world
    }

    #[test]
    fn unbound_key_quits_before_any_turn() {
        let (end, world, output) = session(walker(), "x\ns\n");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(world.turn().0, 0);
        assert!(output.starts_with(MENU));
    }

    #[test]
    fn end_of_input_quits() {
        let (end, world, output) = session(walker(), "s\ns\n");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(world.turn().0, 2);
        assert_eq!(output.matches(MENU).count(), 3);
    }

    #[test]
    fn last_controlled_death_ends_the_game() {
        let mut world = walker();
        let player = world.entities()[0].id();
        world.entity_mut(player).unwrap().attach(InFire::new(5).into());

        let (end, world, output) = session(world, "w\nw\nw\n");

        assert_eq!(end, SessionEnd::GameOver);
        assert_eq!(world.turn().0, 2);
        assert!(output.contains("player died\n"));
        assert!(output.ends_with("game over\n"));
    }
}
