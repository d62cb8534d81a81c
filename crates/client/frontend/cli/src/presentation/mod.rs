//! Text presentation: the key menu and the board.

mod menu;
mod render;

pub use menu::MENU;
pub use render::render;
