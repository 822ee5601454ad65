//! # CLI Module
//!
//! Command-line front end of the route generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Append route registrations to `routes/api.php` and `routes/web.php`:
//!
//! ```bash
//! routesynth-gen generate --tree controllers.yaml --output my-app
//! ```
//!
//! Options:
//! - `--tree <FILE>` - Controller manifest (required)
//! - `--output <DIR>` - Project root holding `routes/`
//! - `--namespace <NS>` - Root controller namespace (string-style references)
//! - `--config <FILE>` - Explicit `routesynth.toml`
//! - `--dry-run` - Print instead of appending
//!
//! ### `inspect`
//!
//! Show the resource/explicit split for every controller:
//!
//! ```bash
//! routesynth-gen inspect --tree controllers.yaml
//! ```

mod commands;


pub use commands::{inspect, run, run_cli, Cli, Commands};
