//! # CONR
//!
//! **DEPENDENCY CONTAINER THAT WIRES CALLABLES BY THEIR DECLARED PARAMETERS**
//!
//! **ARCHITECTURE**: signature extraction → pattern parsing → resolution → invocation
//! **GUARANTEE**: Injection is best effort; only the callable's own result reaches the caller
//!
//! ```rust
//! use conr::api::*;
//!
//! let container = Container::new();
//! container.set("foo", "Hello").set("bar", "World");
//!
//! let greet = Injectable::new("(foo, {bar}) => ...", |call| {
//!     format!(
//!         "{} {}",
//!         call.arg(0).as_str().unwrap_or_default(),
//!         call.arg(1).member("bar").as_str().unwrap_or_default()
//!     )
//! });
//! assert_eq!(container.resolve(&greet), "Hello World");
//! ```

pub mod api;
pub mod container;
pub mod dependencies;
pub mod errors;
pub mod pattern;
pub mod signature;
pub mod types;
