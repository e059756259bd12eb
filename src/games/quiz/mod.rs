//! Turn-based trivia for 2 to 4 players sharing one terminal.
//!
//! [`QuizMachine`] owns everything; the other modules are the pieces it
//! drives: the question bank, players, the turn scheduler, the answer timer,
//! scoring and the per-phase screens.

pub mod intent;
pub mod machine;
pub mod player;
pub mod question;
pub mod scheduler;
pub mod score;
pub mod screens;
pub mod session;
pub mod timer;

pub use intent::Intent;
pub use machine::QuizMachine;
pub use question::{Question, QuestionBank};
pub use session::Phase;
