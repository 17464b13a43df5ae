use thiserror::Error;

/// Invariant violations raised by the game model.
///
/// None of these should surface during correct play. The controller turns
/// them into a faulted game instead of propagating them to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("snake body is empty")]
    EmptySnake,
    #[error("no free cell left for an apple")]
    BoardFull,
    #[error("no game in progress")]
    NoSession,
}
