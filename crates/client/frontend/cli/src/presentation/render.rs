//! Plain-text board renderer.
//!
//! The track is drawn top to bottom, one row per position. Each row has two
//! columns: the entity's drawing layers and the layers of the first
//! instrument it holds. Layers stack upward, so the highest index is printed
//! first. Only positions inside the configured track are drawn. Reads the
//! world only.

use std::collections::HashMap;

use composition_core::{GameConfig, World};

const START_MARKER: &str = "================== \n";

/// Renders the board. An empty board renders as an empty string.
pub fn render(world: &World) -> String {
    let blank = " ".repeat(GameConfig::SPRITE_WIDTH);

    let mut drawn: Vec<(i32, &[String])> = Vec::new();
    let mut held: HashMap<i32, &[String]> = HashMap::new();
    for entity in world.entities() {
        let (Some(position), Some(layers)) =
            (entity.data().position(), entity.data().drawing_layers())
        else {
            continue;
        };
        if position < 0 || !world.config().is_on_track(position) {
            continue;
        }
        drawn.push((position, layers));

        let instrument = entity.held().and_then(|id| world.entity(id));
        if let Some(instrument_layers) = instrument.and_then(|e| e.data().drawing_layers()) {
            held.insert(position, instrument_layers);
        }
    }

    let Some(bottom) = drawn.iter().map(|(position, _)| *position).max() else {
        return String::new();
    };
    let max_layer = drawn
        .iter()
        .map(|(_, layers)| layers.len())
        .chain(held.values().map(|layers| layers.len()))
        .max()
        .unwrap_or_default();

    let empty_row = line(&blank, &blank);
    let mut rows = vec![empty_row; bottom as usize + 1];
    for (position, layers) in drawn {
        let attached = held.get(&position).copied().unwrap_or_default();

        let mut row = String::new();
        if position == 0 {
            row.push_str(START_MARKER);
        }
        for index in (0..max_layer).rev() {
            let own = layers.get(index).map_or(blank.as_str(), String::as_str);
            let other = attached.get(index).map_or(blank.as_str(), String::as_str);
            row.push_str(&line(own, other));
        }
        rows[position as usize] = row;
    }

    rows.into_iter().map(|row| row + "\n").collect()
}

fn line(first: &str, second: &str) -> String {
    format!("|{first}{second}| \n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition_core::{Drawable, InFire, Positioned};

    const SWORD: &str = "--o::::>";
    const LANCE: &str = "------->";
    const BLANK: &str = "        ";

    fn row(first: &str, second: &str) -> String {
        format!("|{first}{second}| \n")
    }

    #[test]
    fn empty_world_renders_nothing() {
        assert_eq!(render(&World::default()), "");
    }

    #[test]
    fn undrawn_or_offtrack_entities_are_skipped() {
        let mut world = World::default();
        world.spawn("ghost", [Positioned::new(1).into()]);
        world.spawn("lost", [Drawable::new(SWORD).into(), Positioned::new(-2).into()]);
        world.spawn("floating", [Drawable::new(SWORD).into()]);

        assert_eq!(render(&world), "");
    }

    #[test]
    fn positions_past_the_track_end_are_skipped() {
        let mut world = World::default();
        world.spawn("far", [Drawable::new(SWORD).into(), Positioned::new(i32::MAX).into()]);
        world.spawn(
            "edge",
            [
                Drawable::new(SWORD).into(),
                Positioned::new(GameConfig::DEFAULT_MAX_POSITION + 1).into(),
            ],
        );

        assert_eq!(render(&world), "");
    }

    #[test]
    fn narrower_track_limits_the_board() {
        let config = GameConfig {
            max_position: 1,
            ..GameConfig::default()
        };
        let mut world = World::new(config);
        world.spawn("lance", [Drawable::new(LANCE).into(), Positioned::new(1).into()]);
        world.spawn("sword", [Drawable::new(SWORD).into(), Positioned::new(2).into()]);

        let expected = format!("{}\n{}\n", row(BLANK, BLANK), row(LANCE, BLANK));
        assert_eq!(render(&world), expected);
    }

    #[test]
    fn single_entity_on_second_row() {
        let mut world = World::default();
        world.spawn("lance", [Drawable::new(LANCE).into(), Positioned::new(1).into()]);

        let expected = format!("{}\n{}\n", row(BLANK, BLANK), row(LANCE, BLANK));
        assert_eq!(render(&world), expected);
    }

    #[test]
    fn start_row_is_marked_and_rows_share_height() {
        let mut world = World::default();
        world.spawn(
            "torch",
            [Drawable::new(SWORD).into(), InFire::new(3).into(), Positioned::new(0).into()],
        );
        world.spawn("lance", [Drawable::new(LANCE).into(), Positioned::new(1).into()]);

        let expected = format!(
            "{START_MARKER}{}{}\n{}{}\n",
            row("********", BLANK),
            row(SWORD, BLANK),
            row(BLANK, BLANK),
            row(LANCE, BLANK),
        );
        assert_eq!(render(&world), expected);
    }

    #[test]
    fn held_instrument_fills_second_column() {
        let mut world = World::default();
        let holder = world.spawn("holder", [Drawable::new(LANCE).into(), Positioned::new(0).into()]);
        let sword = world.spawn("sword", [Drawable::new(SWORD).into(), InFire::new(3).into()]);
        world.entity_mut(holder).unwrap().attached_mut().push(sword);

        let expected = format!(
            "{START_MARKER}{}{}\n",
            row(BLANK, "********"),
            row(LANCE, SWORD),
        );
        assert_eq!(render(&world), expected);
    }

    #[test]
    fn rendering_leaves_data_untouched() {
        let mut world = World::default();
        let id = world.spawn("lance", [Drawable::new(LANCE).into(), Positioned::new(0).into()]);
        let before = world.entity(id).unwrap().data().clone();

        render(&world);

        assert_eq!(world.entity(id).unwrap().data(), &before);
    }
}
