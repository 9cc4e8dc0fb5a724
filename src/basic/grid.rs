use itertools::Itertools;
use num_integer::Integer;
use rand::Rng;

use crate::basic::Cell;

/// Board dimensions, `width` and `height` are counted in cells
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(cell_size: i32, width: i32, height: i32) -> Self {
        assert!(cell_size > 0, "cell size must be positive, got {cell_size}");
        assert!(
            width > 0 && height > 0,
            "board must have at least one cell, got {width}x{height}"
        );
        Self { cell_size, width, height }
    }

    /// Board size in pixels
    pub fn size_px(self) -> (i32, i32) {
        (self.width * self.cell_size, self.height * self.cell_size)
    }

    pub fn cell_count(self) -> usize {
        (self.width * self.height) as usize
    }

    /// Row-major, starting at the top-left cell
    pub fn all_cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(move |(row, col)| Cell::new(col * self.cell_size, row * self.cell_size))
    }

    pub fn center(self) -> Cell {
        Cell::new(
            self.width / 2 * self.cell_size,
            self.height / 2 * self.cell_size,
        )
    }

    pub fn contains(self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    /// Wraps a position that left the board back in from the opposite edge
    pub fn wrap(self, cell: Cell) -> Cell {
        let (width_px, height_px) = self.size_px();
        Cell::new(cell.x.mod_floor(&width_px), cell.y.mod_floor(&height_px))
    }

    fn index_of(self, Cell { x, y }: Cell) -> Option<usize> {
        let (width_px, height_px) = self.size_px();
        let aligned = x % self.cell_size == 0 && y % self.cell_size == 0;
        if !aligned || !(0..width_px).contains(&x) || !(0..height_px).contains(&y) {
            return None;
        }
        Some(((y / self.cell_size) * self.width + x / self.cell_size) as usize)
    }

    /// Uniformly pick one of the cells not in `occupied`, `None` if the
    /// board is full. Cells outside the board are ignored.
    pub fn random_free_cell(
        self,
        occupied: impl IntoIterator<Item = Cell>,
        rng: &mut impl Rng,
    ) -> Option<Cell> {
        let taken = occupied
            .into_iter()
            .filter_map(|cell| self.index_of(cell))
            .sorted_unstable()
            .dedup()
            .collect_vec();

        let free = self.cell_count() - taken.len();
        if free == 0 {
            return None;
        }

        // the n-th free cell, found by skipping every taken index at or before it
        let mut new_idx = rng.gen_range(0..free);
        for idx in taken {
            if idx <= new_idx {
                new_idx += 1;
            }
        }

        self.all_cells().nth(new_idx)
    }
}
