pub use cell::Cell;
pub use dir::Dir;
pub use grid::Grid;

mod cell;
mod dir;
mod grid;
