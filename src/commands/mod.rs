//! CLI command implementations.
//!
//! Each command is in its own submodule and takes an options struct built by
//! the binary from its parsed arguments.

pub mod init;
pub mod render;
pub mod validate;

pub use init::{execute_init, InitOptions, SAMPLE_CONFIG};
pub use render::{execute_render, RenderOptions};
pub use validate::{execute_validate, Outline, ValidateOptions};
