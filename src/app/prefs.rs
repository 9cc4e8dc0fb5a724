use static_assertions::const_assert;

use crate::{app::palette::Palette, basic::Grid};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;
/// Game ticks per second
pub const SPEED: u32 = 10;
/// Segments behind the head (head included) that never count as a self-collision
pub const NECK_LENGTH: usize = 4;

const_assert!(CELL_SIZE > 0);
const_assert!(SCREEN_WIDTH % CELL_SIZE == 0);
const_assert!(SCREEN_HEIGHT % CELL_SIZE == 0);
const_assert!(SPEED > 0);

pub struct Prefs {
    pub grid: Grid,
    pub tick_rate: u32,
    pub neck_length: usize,
    pub palette: Palette,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            grid: Grid::new(CELL_SIZE, SCREEN_WIDTH / CELL_SIZE, SCREEN_HEIGHT / CELL_SIZE),
            tick_rate: SPEED,
            neck_length: NECK_LENGTH,
            palette: Palette::default(),
        }
    }
}

// builder
#[allow(dead_code)]
impl Prefs {
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn tick_rate(mut self, tick_rate: u32) -> Self {
        assert!(tick_rate > 0, "tick rate must be positive");
        self.tick_rate = tick_rate;
        self
    }

    pub fn neck_length(mut self, neck_length: usize) -> Self {
        self.neck_length = neck_length;
        self
    }
}
