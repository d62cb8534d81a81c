//! Sprite catalogue.
//!
//! Every sprite is exactly eight columns wide so overlays line up with it.

/// Stock sprites used by the bundled scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Bear,
    Sword,
    Lance,
    Terrain,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::Player,
        Sprite::Bear,
        Sprite::Sword,
        Sprite::Lance,
        Sprite::Terrain,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Sprite::Player => "┌( ಠ_ಠ)┘",
            Sprite::Bear => " ʕಠಿᴥಠʔ ",
            Sprite::Sword => "--o::::>",
            Sprite::Lance => "------->",
            Sprite::Terrain => "XXXXXXXX",
        }
    }
}

impl From<Sprite> for String {
    fn from(sprite: Sprite) -> Self {
        sprite.as_str().to_owned()
    }
}
