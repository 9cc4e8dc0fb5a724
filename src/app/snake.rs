use std::collections::VecDeque;

use ggez::graphics::Color;

use crate::{
    app::{app_error::AppResult, drawing::Entity, palette::Palette, surface::Surface},
    basic::{Cell, Dir, Grid},
};

pub struct Snake {
    /// Head first
    body: VecDeque<Cell>,
    /// The body grows until it reaches this many cells
    length: usize,
    dir: Dir,
    /// Tail cell vacated by the last move, still on screen until drawn over
    last: Option<Cell>,

    color: Color,
    grid: Grid, // cached value
}

impl Snake {
    pub fn new(grid: Grid, color: Color) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            length: 1,
            dir: Dir::R,
            last: None,
            color,
            grid,
        };
        snake.reset();
        snake
    }

    pub fn reset(&mut self) {
        self.length = 1;
        self.body.clear();
        self.body.push_back(self.grid.center());
        self.dir = Dir::R;
        self.last = None;
    }

    /// Reversing straight into the neck is ignored
    pub fn update_direction(&mut self, new_dir: Dir) {
        if !new_dir.is_opposite(self.dir) {
            self.dir = new_dir;
        }
    }

    /// Move one cell forward, coming back in from the opposite edge
    /// when leaving the board
    pub fn advance(&mut self) {
        let (dx, dy) = self.dir.delta();
        let step = Cell::new(dx * self.grid.cell_size, dy * self.grid.cell_size);
        let new_head = self.grid.wrap(self.head() + step);
        debug_assert!(self.grid.contains(new_head), "{new_head:?} off the board");

        self.body.push_front(new_head);
        self.last = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Whether the head overlaps the body, ignoring the first `neck` cells
    pub fn bites_itself(&self, neck: usize) -> bool {
        let head = self.head();
        self.body.iter().skip(neck).any(|&cell| cell == head)
    }

    /// The tail cell left behind by the last move, if it hasn't been drawn over yet
    pub fn vacated(&self) -> Option<Cell> {
        self.last
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl Entity for Snake {
    fn body_color(&self) -> Color {
        self.color
    }

    fn cell_size(&self) -> i32 {
        self.grid.cell_size
    }

    /// Only the cells that changed get drawn: the vacated tail is
    /// cleared and the new head painted, the rest is already on screen
    fn draw(&mut self, surface: &mut dyn Surface, palette: &Palette) -> AppResult {
        if let Some(last) = self.last.take() {
            self.clear_cell(surface, last, palette)?;
        }
        self.draw_cell(surface, self.head(), palette)
    }
}
