/// Key reference printed before every board.
pub const MENU: &str = "\
z, s: move up and down
a: attack
w: wait
g: grab
q, d: select item
other: quit
";
