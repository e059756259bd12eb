pub mod core {
	pub mod audio;
	pub mod clock;
	pub mod engine;
	pub mod game;
	pub mod input;
	pub mod renderer;
	pub mod scene;
	pub mod terminal;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{Context, Game};
