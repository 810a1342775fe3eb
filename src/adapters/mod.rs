//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `profile` - Decision domain sources (built-in constants, YAML files)

pub mod profile;

pub use profile::{BuiltinProfileSource, YamlProfileSource};
