use std::fmt::{Debug, Error, Formatter};

/// Top-left corner of a board cell, in pixels
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Add, Display)]
#[display(fmt = "({}, {})", x, y)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
