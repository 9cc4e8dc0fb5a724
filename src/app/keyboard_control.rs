use ggez::input::keyboard::KeyCode::{self, *};

use crate::basic::Dir;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
}

/// What a single input event asks the game to do
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Turn(Dir),
    Quit,
}

/// Produces the input events that arrived since it was last drained
pub trait InputSource {
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

/// Events are pushed by the window as they arrive and drained once per tick
#[derive(Default)]
pub struct KeyQueue(Vec<InputEvent>);

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.0.push(event)
    }
}

impl InputSource for KeyQueue {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.0)
    }
}

#[derive(Copy, Clone)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, d: Down, l: Left, r: Right };
    pub const WASD: Self = Self { u: W, d: S, l: A, r: D };

    fn key(self, dir: Dir) -> KeyCode {
        match dir {
            Dir::U => self.u,
            Dir::D => self.d,
            Dir::L => self.l,
            Dir::R => self.r,
        }
    }

    pub fn dir_for(self, key: KeyCode) -> Option<Dir> {
        Dir::iter().find(|&dir| self.key(dir) == key)
    }
}

/// Every key binding the game listens to
pub struct KeyMap {
    controls: Vec<Controls>,
    quit: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            controls: vec![Controls::ARROWS, Controls::WASD],
            quit: Escape,
        }
    }
}

impl KeyMap {
    /// `None` for keys that aren't bound to anything
    pub fn interpret(&self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::KeyDown(key) if key == self.quit => Some(Command::Quit),
            InputEvent::KeyDown(key) => self
                .controls
                .iter()
                .find_map(|controls| controls.dir_for(key))
                .map(Command::Turn),
        }
    }
}
