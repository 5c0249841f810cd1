// src/analysis/neighbors.rs

//! 8-connected neighborhood enumeration over a bounded grid.

/// Candidate offsets in fixed raster order: top row left-to-right, then
/// middle row, then bottom row. The enumeration order is part of the
/// contract; tests compare emitted coordinate lists directly.
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterator over the in-bounds 8-neighbors of a grid coordinate.
///
/// Yields up to 8 coordinates from the 3x3 block centered at the query
/// point, excluding the center and anything outside `0..width` /
/// `0..height`. Allocation-free; the flood fill calls this once per
/// popped cell.
#[derive(Debug, Clone)]
pub struct Neighbors {
    width: i64,
    height: i64,
    x: i64,
    y: i64,
    next: usize,
}

impl Iterator for Neighbors {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        while self.next < OFFSETS.len() {
            let (dx, dy) = OFFSETS[self.next];
            self.next += 1;
            let nx = self.x + dx;
            let ny = self.y + dy;
            if nx >= 0 && nx < self.width && ny >= 0 && ny < self.height {
                return Some((nx as u32, ny as u32));
            }
        }
        None
    }
}

/// Enumerates the valid 8-connected neighbors of `(x, y)` on a
/// `width` x `height` grid.
pub fn neighbors(width: u32, height: u32, x: u32, y: u32) -> Neighbors {
    Neighbors {
        width: width as i64,
        height: height as i64,
        x: x as i64,
        y: y as i64,
        next: 0,
    }
}
