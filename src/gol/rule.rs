use rayon::prelude::*;

use super::{Board, NEIGHBOURS};

fn calc_px(imalive: bool, alive: u8) -> bool {
    if !imalive && alive == 3 {
        true
    } else if imalive && (alive < 2 || alive > 3) {
        false
    } else {
        imalive
    }
}

/// Live-neighbour count of every cell, row-major like the board itself.
pub fn neighbour_counts(board: &Board) -> Vec<u8> {
    let mut counts = vec![0u8; (board.width() as usize) * (board.height() as usize)];
    for pt in board.live_cells() {
        for d in NEIGHBOURS {
            counts[board.pt_to_index(pt + d)] += 1;
        }
    }
    counts
}

/// Advances the board by one generation in place.
///
/// Every count is taken before any cell changes, so the update pass is free
/// to visit cells in any order.
pub fn advance(board: &mut Board) {
    let counts = neighbour_counts(board);
    board
        .cells_mut()
        .par_iter_mut()
        .zip(counts.par_iter())
        .for_each(|(v, n)| *v = calc_px(*v, *n));
}
