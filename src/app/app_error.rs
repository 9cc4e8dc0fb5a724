use ggez::GameError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    /// An entity relied on the default `draw`, carries the type name
    NotImplemented(&'static str),
    /// No free cell is left to place an apple on
    EmptyBoard,
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<AppErrorType> for AppError {
    fn from(typ: AppErrorType) -> Self {
        Self(typ, vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }

    pub fn is_empty_board(&self) -> bool {
        matches!(self.error_type(), AppErrorType::EmptyBoard)
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            AppErrorType::GameError(e) => write!(f, "ggez error: {e}")?,
            AppErrorType::NotImplemented(name) => {
                write!(f, "draw() is not implemented for {name}")?
            }
            AppErrorType::EmptyBoard => write!(f, "no free cell left on the board")?,
        }
        for t in (self.1).iter().rev() {
            write!(f, " (in {})", t)?;
        }
        Ok(())
    }
}

impl Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_is_reported_innermost_first() {
        let result: AppResult = Err(AppErrorType::EmptyBoard.into());
        let error = result
            .with_trace_step("relocating apple")
            .with_trace_step("restarting")
            .unwrap_err();

        assert!(error.is_empty_board());
        assert_eq!(
            error.to_string(),
            "no free cell left on the board (in restarting) (in relocating apple)"
        );
        let debug = format!("{error:?}");
        assert!(debug.find("restarting").unwrap() < debug.find("relocating apple").unwrap());
    }

    #[test]
    fn test_game_error_conversion() {
        let error = AppError::from(GameError::CustomError("boom".to_string()));
        assert!(matches!(error.error_type(), AppErrorType::GameError(_)));
        assert!(!error.is_empty_board());
    }
}
