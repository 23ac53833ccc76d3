use std::{
    fmt::Display,
    ops::{Add, Index, IndexMut},
};

pub mod rule;
pub mod seed;

/// Moore neighbourhood, in the order the rule engine visits it.
pub const NEIGHBOURS: [Point; 8] = [
    Point { x: -1, y: -1 },
    Point { x: -1, y: 0 },
    Point { x: -1, y: 1 },
    Point { x: 0, y: 1 },
    Point { x: 1, y: 1 },
    Point { x: 1, y: 0 },
    Point { x: 1, y: -1 },
    Point { x: 0, y: -1 },
];

/// Toroidal grid of cells, stored row-major.
///
/// `x` is the column and `y` the row. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    buf: Vec<bool>,
    width: u32,
    height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.x += rhs.x;
        self.y += rhs.y;
        self
    }
}
impl<I1, I2> From<(I1, I2)> for Point
where
    I1: Into<i64>,
    I2: Into<i64>,
{
    fn from((l, r): (I1, I2)) -> Self {
        Self {
            x: l.into(),
            y: r.into(),
        }
    }
}

impl Point {
    /// Wraps the point onto a `w` x `h` torus by shifting each axis by one
    /// dimension at most. Points more than one board away stay out of range.
    pub fn remap(&mut self, w: u32, h: u32) {
        if self.x < 0 {
            self.x += w as i64;
        } else if self.x >= w as i64 {
            self.x -= w as i64;
        }
        if self.y < 0 {
            self.y += h as i64;
        } else if self.y >= h as i64 {
            self.y -= h as i64;
        }
    }

    pub fn remapped(mut self, w: u32, h: u32) -> Self {
        self.remap(w, h);
        self
    }
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Board {
            buf: vec![false; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    fn pt_to_index(&self, pt: Point) -> usize {
        let adj = pt.remapped(self.width, self.height);
        assert!(
            adj.x >= 0 && adj.x < self.width as i64 && adj.y >= 0 && adj.y < self.height as i64,
            "pt {} outside {}x{} after one wrap (adj: {})",
            pt,
            self.width,
            self.height,
            adj
        );
        ((adj.y * self.width as i64) + adj.x) as usize
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn set(&mut self, pt: Point, alive: bool) {
        self[pt] = alive;
    }

    /// Number of live cells.
    pub fn alive(&self) -> usize {
        self.buf.iter().filter(|v| **v).count()
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.width as usize;
        self.buf
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| Point {
                x: (i % w) as i64,
                y: (i / w) as i64,
            })
    }

    /// Rows top to bottom. A zero-width board still yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.buf[y * w..(y + 1) * w])
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.buf
    }
}

impl Index<Point> for Board {
    type Output = bool;
    fn index(&self, index: Point) -> &Self::Output {
        &self.buf[self.pt_to_index(index)]
    }
}
impl IndexMut<Point> for Board {
    fn index_mut(&mut self, index: Point) -> &mut Self::Output {
        let idx = self.pt_to_index(index);
        &mut self.buf[idx]
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;

    #[test]
    fn test_remap() {
        let (w, h) = (10, 8);
        let mut pt = Point { x: -1, y: 8 };
        pt.remap(w, h);
        assert_eq!(pt, Point { x: 9, y: 0 });

        pt = Point { x: 10, y: -1 };
        pt.remap(w, h);
        assert_eq!(pt, Point { x: 0, y: 7 });

        pt = Point { x: 3, y: 4 };
        pt.remap(w, h);
        assert_eq!(pt, Point { x: 3, y: 4 });
    }

    #[test]
    fn test_remap_is_single_step() {
        // two boards away is not folded back in
        let pt = Point { x: 25, y: -17 }.remapped(10, 8);
        assert_eq!(pt, Point { x: 15, y: -9 });
    }

    #[test]
    fn test_wrapped_access() {
        let mut b = Board::new(4, 3);
        b[Point { x: -1, y: -1 }] = true;
        assert!(b[Point { x: 3, y: 2 }]);
        assert!(b[Point { x: 3, y: -1 }]);
        b.set(Point { x: 4, y: 3 }, true);
        assert!(b[Point { x: 0, y: 0 }]);
        assert_eq!(b.alive(), 2);
    }

    #[test]
    #[should_panic(expected = "after one wrap")]
    fn test_far_access_panics() {
        let b = Board::new(4, 4);
        let _ = b[Point { x: 9, y: 0 }];
    }

    #[test]
    fn test_live_cells() {
        let mut b = Board::new(5, 4);
        let pts = [Point { x: 0, y: 0 }, Point { x: 4, y: 1 }, Point { x: 2, y: 3 }];
        for pt in pts {
            b[pt] = true;
        }
        assert_eq!(b.live_cells().collect::<Vec<_>>(), pts);
    }

    #[test]
    fn test_every_cell_addressable() {
        let (w, h) = (7u32, 5u32);
        let mut b = Board::new(w, h);
        for (y, x) in iproduct!(0..h as i64, 0..w as i64) {
            b[Point { x, y }] = true;
        }
        assert_eq!(b.alive(), (w * h) as usize);
        assert!(b.rows().all(|r| r.len() == w as usize));
        assert_eq!(b.rows().count(), h as usize);
    }

    #[test]
    fn test_zero_width_rows() {
        let b = Board::new(0, 3);
        assert_eq!(b.rows().collect::<Vec<_>>(), vec![&[] as &[bool]; 3]);
        assert_eq!(b.live_cells().count(), 0);
    }

    #[test]
    fn test_point_add() {
        let p = Point::from((2, 3)) + NEIGHBOURS[0];
        assert_eq!(p, Point { x: 1, y: 2 });
        assert_eq!(format!("{}", p), "(1, 2)");
    }
}
