use ggez::graphics::Color;
use rand::Rng;

use crate::{
    app::{
        app_error::{AppErrorType, AppResult},
        drawing::Entity,
        palette::Palette,
        surface::Surface,
    },
    basic::{Cell, Grid},
};

pub struct Apple {
    pub pos: Cell,
    color: Color,
    grid: Grid, // cached value
}

impl Apple {
    /// Place a new apple on any cell not in `occupied`
    pub fn new(
        grid: Grid,
        color: Color,
        occupied: impl IntoIterator<Item = Cell>,
        rng: &mut impl Rng,
    ) -> AppResult<Self> {
        let mut apple = Self { pos: Cell::new(0, 0), color, grid };
        apple.randomize_position(occupied, rng)?;
        Ok(apple)
    }

    /// Move to a uniformly chosen cell not in `occupied`, fails with
    /// `EmptyBoard` (leaving the apple where it was) when there is none
    pub fn randomize_position(
        &mut self,
        occupied: impl IntoIterator<Item = Cell>,
        rng: &mut impl Rng,
    ) -> AppResult {
        self.pos = self
            .grid
            .random_free_cell(occupied, rng)
            .ok_or(AppErrorType::EmptyBoard)?;
        Ok(())
    }
}

impl Entity for Apple {
    fn body_color(&self) -> Color {
        self.color
    }

    fn cell_size(&self) -> i32 {
        self.grid.cell_size
    }

    fn draw(&mut self, surface: &mut dyn Surface, palette: &Palette) -> AppResult {
        self.draw_cell(surface, self.pos, palette)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::app::surface::{CommandQueue, DrawCommand};

    #[test]
    fn test_never_lands_on_occupied() {
        let grid = Grid::new(20, 4, 4);
        let occupied = [Cell::new(0, 0), Cell::new(20, 0), Cell::new(40, 20), Cell::new(60, 60)];
        let mut rng = StdRng::seed_from_u64(42);
        let mut apple = Apple::new(grid, Color::RED, occupied, &mut rng).unwrap();

        for _ in 0..200 {
            assert!(!occupied.contains(&apple.pos), "{:?}", apple.pos);
            assert!(grid.contains(apple.pos));
            apple.randomize_position(occupied, &mut rng).unwrap();
        }
    }

    #[test]
    fn test_full_board() {
        let grid = Grid::new(20, 2, 2);
        let mut rng = StdRng::seed_from_u64(0);

        let error = Apple::new(grid, Color::RED, grid.all_cells(), &mut rng)
            .err()
            .expect("a full board has no room for an apple");
        assert!(error.is_empty_board());

        let mut apple = Apple::new(grid, Color::RED, std::iter::empty(), &mut rng).unwrap();
        let before = apple.pos;
        let error = apple.randomize_position(grid.all_cells(), &mut rng).unwrap_err();
        assert!(error.is_empty_board());
        assert_eq!(apple.pos, before);
    }

    #[test]
    fn test_draw() {
        let palette = Palette::default();
        let mut queue = CommandQueue::new();
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::new(20, 3, 3);
        let mut apple = Apple::new(grid, palette.apple_color, std::iter::empty(), &mut rng).unwrap();
        apple.pos = Cell::new(40, 20);

        apple.draw(&mut queue, &palette).unwrap();
        queue.present().unwrap();
        assert_eq!(
            queue.take_presented(),
            vec![DrawCommand::Cell {
                pos: Cell::new(40, 20),
                size: 20,
                fill: palette.apple_color,
                border: Some(palette.border_color),
            }]
        );
    }
}
