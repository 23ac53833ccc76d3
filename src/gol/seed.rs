use tracing::warn;

use super::{Board, Point};

/// Start pattern as (column, row) pairs.
pub const START: [(i64, i64); 5] = [(5, 4), (5, 5), (6, 5), (7, 5), (6, 6)];

/// Places `cells` on the board. Returns false, leaving the board untouched,
/// when any cell falls outside it.
pub fn place(board: &mut Board, cells: &[(i64, i64)]) -> bool {
    let fits = cells.iter().all(|&(x, y)| {
        x >= 0 && y >= 0 && x < board.width() as i64 && y < board.height() as i64
    });
    if !fits {
        warn!(
            width = board.width(),
            height = board.height(),
            "pattern does not fit the board, leaving it empty"
        );
        return false;
    }
    for &pt in cells {
        board.set(Point::from(pt), true);
    }
    true
}

pub fn start(board: &mut Board) -> bool {
    place(board, &START)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_start_pattern() {
        let mut b = Board::new(40, 20);
        assert!(start(&mut b));
        let got: BTreeSet<_> = b.live_cells().map(|p| (p.x, p.y)).collect();
        assert_eq!(got, START.into_iter().collect());
    }

    #[test]
    fn test_too_small() {
        let mut b = Board::new(7, 20);
        assert!(!start(&mut b));
        assert_eq!(b.alive(), 0);

        let mut b = Board::new(0, 0);
        assert!(!start(&mut b));
    }

    #[test]
    fn test_smallest_fit() {
        let mut b = Board::new(8, 7);
        assert!(start(&mut b));
        assert_eq!(b.alive(), 5);
    }
}
