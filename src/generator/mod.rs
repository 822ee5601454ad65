//! # Generator Module
//!
//! Turns a [`ControllerTree`](crate::model::ControllerTree) into route
//! registrations for the host application's `routes/api.php` and
//! `routes/web.php` files.
//!
//! ## Architecture
//!
//! ```text
//! Controller → plan_routes → ControllerRoutesTemplate → rendered block → RouteSink
//! ```
//!
//! 1. **Planning** ([`plan_routes`]) - classifies the controller as `api` or
//!    `web`, computes its slug and splits its methods into conventional
//!    resource actions and explicit routes
//! 2. **Rendering** ([`ControllerRoutesTemplate`]) - an Askama template turns
//!    the plan into statements, using the run's [`ReferenceStyle`]
//! 3. **Output** ([`RouteSynthesizer`]) - joins the blocks per traffic class
//!    and appends them through a [`RouteSink`](crate::sink::RouteSink)
//!
//! ## Resource Aggregation
//!
//! A controller exposing any of the conventional actions gets one aggregate
//! registration. When some actions are missing the registration is narrowed:
//!
//! | Missing actions | Emitted                                    |
//! |-----------------|--------------------------------------------|
//! | 0               | `Route::resource('post', ...);`            |
//! | 1 to 3          | `...->except('create', 'edit');`           |
//! | 4 or more       | `...->only('index');` (the present ones)   |
//!
//! Every other method becomes `Route::get('<slug>/<kebab-method>', ...)`.
//!
//! ## Usage
//!
//! ```rust
//! use routesynth::generator::{Generator, RouteSynthesizer};
//! use routesynth::model::{Controller, ControllerTree, MethodDescriptor};
//! use routesynth::sink::MemorySink;
//!
//! let tree = ControllerTree::new(vec![Controller::new("App\\Http\\Controllers\\PostController")
//!     .with_method("index", MethodDescriptor::default())
//!     .with_method("show", MethodDescriptor::default())]);
//!
//! let mut sink = MemorySink::new();
//! let output = RouteSynthesizer::new(None).output(&tree, &mut sink).unwrap();
//! assert_eq!(output.updated, ["routes/web.php"]);
//! ```

mod kebab;
mod reference;
mod resource;
mod routes;
mod templates;
#[cfg(test)]
mod tests;

pub use kebab::*;
pub use reference::*;
pub use resource::*;
pub use routes::*;
pub use templates::*;
