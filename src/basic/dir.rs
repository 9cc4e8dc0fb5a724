use std::ops::Neg;

use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// Unit step in cells, y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            U => (0, -1),
            D => (0, 1),
            L => (-1, 0),
            R => (1, 0),
        }
    }

    pub fn is_opposite(self, other: Self) -> bool {
        -self == other
    }
}

#[test]
fn test_dir_neg() {
    for (dir, opposite) in [(U, D), (D, U), (L, R), (R, L)] {
        assert_eq!(-dir, opposite, "-{:?}", dir);
        assert!(dir.is_opposite(opposite));
        assert!(!dir.is_opposite(dir));
    }
}

#[test]
fn test_delta_cancels_with_opposite() {
    for dir in Dir::iter() {
        let (dx, dy) = dir.delta();
        let (ox, oy) = (-dir).delta();
        assert_eq!((dx + ox, dy + oy), (0, 0), "{:?}", dir);
        assert_eq!(dx.abs() + dy.abs(), 1);
    }
}
