use ggez::graphics::Color;

use crate::{
    app::{
        app_error::{AppErrorType, AppResult},
        palette::Palette,
        surface::Surface,
    },
    basic::Cell,
};

/// Something on the board that knows how to draw itself
pub trait Entity {
    fn body_color(&self) -> Color;

    fn cell_size(&self) -> i32;

    fn draw(&mut self, _surface: &mut dyn Surface, _palette: &Palette) -> AppResult {
        Err(AppErrorType::NotImplemented(std::any::type_name::<Self>()).into())
    }

    /// Draw one cell in the body color, outlined with the palette border
    fn draw_cell(&self, surface: &mut dyn Surface, pos: Cell, palette: &Palette) -> AppResult {
        surface.draw_cell(pos, self.cell_size(), self.body_color(), Some(palette.border_color))
    }

    /// Paint over one cell with the background, without an outline
    fn clear_cell(&self, surface: &mut dyn Surface, pos: Cell, palette: &Palette) -> AppResult {
        surface.draw_cell(pos, self.cell_size(), palette.background_color, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::surface::{CommandQueue, DrawCommand};

    struct Rock;

    impl Entity for Rock {
        fn body_color(&self) -> Color {
            Color::BLACK
        }

        fn cell_size(&self) -> i32 {
            20
        }
    }

    #[test]
    fn test_default_draw_is_an_error() {
        let mut queue = CommandQueue::new();
        let error = Rock.draw(&mut queue, &Palette::default()).unwrap_err();

        match error.error_type() {
            AppErrorType::NotImplemented(name) => assert!(name.ends_with("Rock"), "{name}"),
            other => panic!("expected NotImplemented, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_and_clear_cell() {
        let palette = Palette::default();
        let mut queue = CommandQueue::new();
        Rock.draw_cell(&mut queue, Cell::new(40, 0), &palette).unwrap();
        Rock.clear_cell(&mut queue, Cell::new(40, 0), &palette).unwrap();
        queue.present().unwrap();

        assert_eq!(
            queue.take_presented(),
            vec![
                DrawCommand::Cell {
                    pos: Cell::new(40, 0),
                    size: 20,
                    fill: Color::BLACK,
                    border: Some(palette.border_color),
                },
                DrawCommand::Cell {
                    pos: Cell::new(40, 0),
                    size: 20,
                    fill: palette.background_color,
                    border: None,
                },
            ]
        );
    }
}
