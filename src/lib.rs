//! # routesynth
//!
//! **routesynth** generates route registration code from an in-memory model of
//! an application's controllers. Each controller is routed either through one
//! aggregate *resource* registration covering its conventional CRUD actions,
//! through explicit per-action registrations, or both, and the result is
//! appended to the host application's `routes/api.php` or `routes/web.php`.
//!
//! ## Architecture
//!
//! - **[`model`]** - Controllers, their methods, and manifest loading
//! - **[`generator`]** - Route planning, reference rendering and the Askama template
//! - **[`sink`]** - Where generated text goes (files, writers, memory)
//! - **[`config`]** - `routesynth.toml` and environment settings
//! - **[`cli`]** - The `routesynth-gen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(routesynth-gen)
//!     participant Model as model::load_tree
//!     participant Synth as RouteSynthesizer
//!     participant Sink as RouteSink
//!
//!     CLI->>Model: load_tree("controllers.yaml")
//!     Model-->>CLI: ControllerTree
//!     CLI->>Synth: RouteSynthesizer::from_config(&config)
//!     CLI->>Synth: output(&tree, &mut sink)
//!     loop every controller
//!         Synth->>Synth: plan_routes → render template
//!     end
//!     Synth->>Sink: append("routes/api.php", text)
//!     Synth->>Sink: append("routes/web.php", text)
//!     Synth-->>CLI: GeneratorOutput { updated }
//! ```
//!
//! ## Example
//!
//! Given the root namespace `App\Http\Controllers` and a web controller with
//! `index`, `show` and `exportCsv`:
//!
//! ```rust
//! use routesynth::generator::RouteSynthesizer;
//! use routesynth::model::{Controller, MethodDescriptor};
//!
//! let controller = Controller::new("App\\Http\\Controllers\\Admin\\UserController")
//!     .with_method("index", MethodDescriptor::default())
//!     .with_method("show", MethodDescriptor::default())
//!     .with_method("exportCsv", MethodDescriptor::default());
//!
//! let synth = RouteSynthesizer::new(Some("App\\Http\\Controllers"));
//! assert_eq!(
//!     synth.build_routes(&controller).unwrap(),
//!     "Route::resource('user', 'Admin\\UserController')->only('index', 'show');\n\
//!      Route::get('user/export-csv', 'Admin\\UserController@exportCsv');"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod model;
pub mod sink;

pub use config::GeneratorConfig;
pub use error::SynthError;
pub use generator::{Generator, GeneratorOutput, ReferenceStyle, RouteBlocks, RouteSynthesizer, TrafficClass};
pub use model::{load_tree, Controller, ControllerTree, MethodDescriptor};
pub use sink::{FileSink, MemorySink, RouteSink, WriterSink};
