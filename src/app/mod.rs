use ggez::{
    conf::{WindowMode, WindowSetup},
    event::EventHandler,
    graphics::{Canvas, Color, DrawMode, DrawParam, Image, Mesh, Quad, Rect},
    input::keyboard::KeyInput,
    Context,
};
use log::info;

pub use crate::app::app_error::{AppError, AppResult};
use crate::app::{
    app_error::AppErrorConversion,
    control::SleepTicker,
    game::{Flow, GameLoop},
    keyboard_control::{InputEvent, KeyQueue},
    prefs::Prefs,
    surface::{CommandQueue, DrawCommand},
};

mod app_error;
mod apple;
mod control;
mod drawing;
mod game;
mod keyboard_control;
mod palette;
pub mod prefs;
mod snake;
mod surface;

/// The ggez window around a [`GameLoop`]
pub struct App {
    running: bool,
    game: GameLoop<CommandQueue, KeyQueue, SleepTicker>,

    /// Persistent picture of the board, every presented
    /// command is painted over whatever was there before
    board: Image,
    background_color: Color,
}

impl App {
    pub const TITLE: &'static str = "Snake (press Esc to exit)";

    pub fn wm(prefs: &Prefs) -> WindowMode {
        let (width, height) = prefs.grid.size_px();
        WindowMode::default()
            .dimensions(width as f32, height as f32)
            .resizable(false)
    }

    pub fn ws() -> WindowSetup {
        WindowSetup::default().title(Self::TITLE).vsync(true)
    }

    pub fn new(ctx: &Context, prefs: Prefs) -> AppResult<Self> {
        let (width, height) = prefs.grid.size_px();
        let board = Image::new_canvas_image(
            ctx,
            ctx.gfx.surface_format(),
            width as u32,
            height as u32,
            1,
        );
        let background_color = prefs.palette.background_color;

        let game = GameLoop::new(
            prefs,
            CommandQueue::new(),
            KeyQueue::new(),
            SleepTicker::new(),
            rand::thread_rng(),
        )
        .with_trace_step("starting the game")?;

        Ok(Self {
            running: true,
            game,
            board,
            background_color,
        })
    }

    fn paint(&self, ctx: &mut Context, canvas: &mut Canvas, command: DrawCommand) -> AppResult {
        match command {
            DrawCommand::Clear(color) => {
                let rect = Rect::new(0., 0., self.board.width() as f32, self.board.height() as f32);
                canvas.draw(&Quad, DrawParam::new().dest_rect(rect).color(color));
            }
            DrawCommand::Cell { pos, size, fill, border } => {
                let rect = Rect::new(pos.x as f32, pos.y as f32, size as f32, size as f32);
                canvas.draw(&Quad, DrawParam::new().dest_rect(rect).color(fill));
                if let Some(border) = border {
                    let outline = Mesh::new_rectangle(ctx, DrawMode::stroke(1.), rect, border)?;
                    canvas.draw(&outline, DrawParam::default());
                }
            }
        }
        Ok(())
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        if !self.running {
            return Ok(());
        }

        if self.game.tick()? == Flow::Quit {
            info!("quitting after {} frames", self.game.surface().frames());
            self.running = false;
            ctx.request_quit();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let commands = self.game.surface_mut().take_presented();
        if !commands.is_empty() {
            let mut canvas = Canvas::from_image(ctx, self.board.clone(), None::<Color>);
            for command in commands {
                self.paint(ctx, &mut canvas, command)?;
            }
            canvas.finish(ctx)?;
        }

        let mut canvas = Canvas::from_frame(ctx, self.background_color);
        canvas.draw(&self.board, DrawParam::default());
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        if let Some(key) = input.keycode {
            self.game.input_mut().push(InputEvent::KeyDown(key));
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> AppResult<bool> {
        if self.running {
            // closing the window goes through the game loop like any other quit
            self.game.input_mut().push(InputEvent::Quit);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
