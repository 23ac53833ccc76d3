use crate::gol::Board;

use super::Renderer;

/// Moves the cursor home and clears the screen.
pub const CLEAR: &str = "\x1b[H\x1b[2J";
pub const LIVE: &str = "  ";
pub const DEAD: &str = "██";

/// Two terminal columns per cell: live cells are blank, dead cells solid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blocks;

impl Renderer for Blocks {
    fn render_board(&self, b: &Board) -> String {
        let mut screen = String::with_capacity(
            CLEAR.len() + (b.height() as usize) * (b.width() as usize * DEAD.len() + 1),
        );
        screen.push_str(CLEAR);
        for (i, row) in b.rows().enumerate() {
            if i > 0 {
                screen.push('\n');
            }
            for alive in row {
                screen.push_str(if *alive { LIVE } else { DEAD });
            }
        }
        screen
    }
}
