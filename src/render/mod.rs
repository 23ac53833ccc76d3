use crate::gol::Board;

pub mod ansi;

/// Turns a board into one self-contained frame of text.
///
/// Implementations must be pure: the same board always yields the same frame.
pub trait Renderer {
    fn render_board(&self, b: &Board) -> String;
}
