use std::mem;

use ggez::graphics::Color;

use crate::{app::app_error::AppResult, basic::Cell};

/// Where the game draws, one frame at a time
pub trait Surface {
    /// Fill one square cell of side `size`, optionally outlined with `border`
    fn draw_cell(&mut self, pos: Cell, size: i32, fill: Color, border: Option<Color>) -> AppResult;
    /// Repaint the whole board
    fn clear(&mut self, color: Color) -> AppResult;
    /// Make everything drawn since the last call visible at once
    fn present(&mut self) -> AppResult;
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Cell {
        pos: Cell,
        size: i32,
        fill: Color,
        border: Option<Color>,
    },
    Clear(Color),
}

/// Records draw commands and hands them over in presented batches,
/// the window replays them onto its persistent board image
#[derive(Default)]
pub struct CommandQueue {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: usize,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything presented since the last call, oldest first
    pub fn take_presented(&mut self) -> Vec<DrawCommand> {
        mem::take(&mut self.presented)
    }

    /// Number of calls to `present` so far
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Surface for CommandQueue {
    fn draw_cell(&mut self, pos: Cell, size: i32, fill: Color, border: Option<Color>) -> AppResult {
        self.pending.push(DrawCommand::Cell { pos, size, fill, border });
        Ok(())
    }

    fn clear(&mut self, color: Color) -> AppResult {
        // nothing drawn before a clear can show
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
        Ok(())
    }

    fn present(&mut self) -> AppResult {
        self.presented.append(&mut self.pending);
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_held_back_until_present() {
        let mut queue = CommandQueue::new();
        queue.draw_cell(Cell::new(20, 40), 20, Color::RED, None).unwrap();
        assert!(queue.take_presented().is_empty());

        queue.present().unwrap();
        assert_eq!(
            queue.take_presented(),
            vec![DrawCommand::Cell {
                pos: Cell::new(20, 40),
                size: 20,
                fill: Color::RED,
                border: None,
            }]
        );
        assert!(queue.take_presented().is_empty());
        assert_eq!(queue.frames(), 1);
    }

    #[test]
    fn test_clear_drops_pending_cells() {
        let mut queue = CommandQueue::new();
        queue.draw_cell(Cell::new(0, 0), 20, Color::RED, Some(Color::BLACK)).unwrap();
        queue.clear(Color::WHITE).unwrap();
        queue.draw_cell(Cell::new(20, 0), 20, Color::GREEN, None).unwrap();
        queue.present().unwrap();

        let commands = queue.take_presented();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], DrawCommand::Clear(Color::WHITE));
    }
}
