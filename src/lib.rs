//! Strictly Darts library - host for the Cricket rules engine
//!
//! Everything around the rules that a scorekeeper needs: configuration,
//! recorded game scripts, a text scoreboard and a line-based scoring loop.
//! The rules themselves live in `strictly_cricket`.
//!
//! # Example
//!
//! ```no_run
//! use strictly_darts::{AppConfig, GameScript};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let game = GameScript::from_file("final.toml")?.replay(config.rules())?;
//! println!("{}", strictly_darts::render(game.state(), game.config()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod play;
mod scoreboard;
mod script;

// Crate-level exports - Configuration
pub use config::{AppConfig, CONFIG_ENV, ConfigError};

// Crate-level exports - Scripts
pub use script::GameScript;

// Crate-level exports - Output and input loop
pub use play::run as run_interactive;
pub use scoreboard::render;
