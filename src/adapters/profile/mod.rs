//! Decision domain profile sources

mod builtin;
mod yaml_file;

pub use builtin::BuiltinProfileSource;
pub use yaml_file::YamlProfileSource;
