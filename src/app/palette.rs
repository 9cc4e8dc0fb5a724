use ggez::graphics::Color;

lazy_static! {
    static ref BOARD_BACKGROUND_COLOR: Color = Color::from_rgb(220, 220, 220);
    static ref BORDER_COLOR: Color = Color::from_rgb(93, 216, 228);
    static ref APPLE_COLOR: Color = Color::from_rgb(255, 0, 0);
    static ref SNAKE_COLOR: Color = Color::from_rgb(0, 255, 0);
}

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub background_color: Color,
    /// Outline drawn around every occupied cell
    pub border_color: Color,
    pub apple_color: Color,
    pub snake_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_color: *BOARD_BACKGROUND_COLOR,
            border_color: *BORDER_COLOR,
            apple_color: *APPLE_COLOR,
            snake_color: *SNAKE_COLOR,
        }
    }
}
