use log::{debug, info, trace, warn};
use rand::{rngs::ThreadRng, Rng};

use crate::{
    app::{
        app_error::{AppErrorConversion, AppResult},
        apple::Apple,
        control::Ticker,
        drawing::Entity,
        keyboard_control::{Command, InputSource, KeyMap},
        prefs::Prefs,
        snake::Snake,
        surface::Surface,
    },
    basic::Dir,
};

/// What happened to the snake during one tick
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Moved,
    Ate,
    /// Ran into its own body, the game restarted
    Crashed,
    /// Ate the apple with no room left for another one, the game restarted
    Filled,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Flow {
    Continue(Outcome),
    Quit,
}

/// Owns the snake and the apple and drives them one tick at a time,
/// everything outside the game itself is handed in at construction
pub struct GameLoop<S, I, T, R = ThreadRng> {
    prefs: Prefs,
    key_map: KeyMap,

    snake: Snake,
    apple: Apple,

    surface: S,
    input: I,
    ticker: T,
    rng: R,
}

impl<S: Surface, I: InputSource, T: Ticker, R: Rng> GameLoop<S, I, T, R> {
    pub fn new(prefs: Prefs, mut surface: S, input: I, ticker: T, mut rng: R) -> AppResult<Self> {
        let palette = prefs.palette;
        let snake = Snake::new(prefs.grid, palette.snake_color);
        let apple = Apple::new(
            prefs.grid,
            palette.apple_color,
            snake.body().iter().copied(),
            &mut rng,
        )
        .with_trace_step("placing the first apple")?;

        surface.clear(palette.background_color)?;

        info!(
            "new game on a {}x{} board, {} ticks/s",
            prefs.grid.width, prefs.grid.height, prefs.tick_rate
        );

        Ok(Self {
            prefs,
            key_map: KeyMap::default(),
            snake,
            apple,
            surface,
            input,
            ticker,
            rng,
        })
    }

    /// Tick until a quit is requested
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn run(&mut self) -> AppResult {
        while let Flow::Continue(_) = self.tick()? {}
        Ok(())
    }

    /// Wait for the next tick, then play it
    pub fn tick(&mut self) -> AppResult<Flow> {
        self.ticker.wait(self.prefs.tick_rate);
        self.step()
    }

    /// Play one tick without waiting
    pub fn step(&mut self) -> AppResult<Flow> {
        for event in self.input.drain_events() {
            match self.key_map.interpret(event) {
                Some(Command::Quit) => {
                    info!("quit requested");
                    return Ok(Flow::Quit);
                }
                Some(Command::Turn(dir)) => self.turn(dir),
                None => trace!("ignoring {:?}", event),
            }
        }

        self.snake.advance();
        let head = self.snake.head();

        let outcome = if head == self.apple.pos {
            self.snake.grow();
            debug!("apple eaten at {}, length {}", head, self.snake.length());

            // the cell the tail just left is still on screen this frame
            let occupied = self.snake.body().iter().copied().chain(self.snake.vacated());
            match self.apple.randomize_position(occupied, &mut self.rng) {
                Ok(()) => Outcome::Ate,
                Err(e) if e.is_empty_board() => {
                    warn!("the snake covers the whole board, starting over");
                    self.restart()?;
                    Outcome::Filled
                }
                Err(e) => return Err(e.with_trace_step("relocating the apple")),
            }
        } else if self.snake.bites_itself(self.prefs.neck_length) {
            info!("crashed at {} with length {}", head, self.snake.length());
            self.restart()?;
            Outcome::Crashed
        } else {
            Outcome::Moved
        };

        self.draw().with_trace_step("drawing")?;
        Ok(Flow::Continue(outcome))
    }

    fn turn(&mut self, dir: Dir) {
        if dir.is_opposite(self.snake.dir()) {
            trace!("ignoring reversal from {:?} to {:?}", self.snake.dir(), dir);
        }
        self.snake.update_direction(dir);
    }

    /// Repaint the board and put the snake back at the start
    fn restart(&mut self) -> AppResult {
        self.surface.clear(self.prefs.palette.background_color)?;
        self.snake.reset();
        let occupied = self.snake.body().iter().copied();
        self.apple
            .randomize_position(occupied, &mut self.rng)
            .with_trace_step("restarting")
    }

    fn draw(&mut self) -> AppResult {
        let entities: [&mut dyn Entity; 2] = [&mut self.snake, &mut self.apple];
        for entity in entities {
            entity.draw(&mut self.surface, &self.prefs.palette)?;
        }
        self.surface.present()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
