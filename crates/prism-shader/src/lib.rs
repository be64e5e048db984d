//! Splitter for combined **shader resources**.
//!
//! A combined resource carries both programmable stages in one text file,
//! each introduced by a marker line:
//!
//! ```text
//! #shader vertex
//! #version 330 core
//! layout(location = 0) in vec4 position;
//! void main() { gl_Position = position; }
//!
//! #shader fragment
//! #version 330 core
//! layout(location = 0) out vec4 color;
//! void main() { color = vec4(1.0, 0.0, 0.0, 1.0); }
//! ```
//!
//! The crate only depends on the `log` facade, so it can run at startup before
//! any window or GPU context exists. Compiling the results is up to the caller.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `SplitConfig` (marker and stage keywords) |
//! | [`error`] | `ShaderError` |
//! | [`split`] | `Splitter`, `Split`, `UnrecognizedSection` |
//! | [`stage`] | `ShaderStage`, `Section`, `ShaderProgramSources` |
//!
//! # Quick start
//!
//! ```rust
//! use prism_shader::parse_shader_str;
//!
//! let src = "#shader vertex\nA\nB\n#shader fragment\nC\n";
//! let sources = parse_shader_str(src);
//! assert_eq!(sources.vertex_source, "A\nB\n");
//! assert_eq!(sources.fragment_source, "C\n");
//! ```

pub mod config;
pub mod error;
pub mod split;
pub mod stage;

use std::path::Path;

pub use config::SplitConfig;
pub use error::ShaderError;
pub use split::{Split, Splitter, UnrecognizedSection};
pub use stage::{Section, ShaderProgramSources, ShaderStage};

/// Loads and splits the resource at `path` with the default `#shader` marker.
pub fn parse_shader(path: impl AsRef<Path>) -> Result<ShaderProgramSources, ShaderError> {
    Splitter::default().load(path)
}

/// Splits an in-memory resource with the default `#shader` marker.
pub fn parse_shader_str(text: &str) -> ShaderProgramSources {
    Splitter::default().split_str("<memory>", text).sources
}
