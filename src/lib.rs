// Library exports for testing and embedding (e.g. editor `:pipe` commands).
//
// The conversion core lives in `convert` and is pure: no I/O, no global
// state. `cli` and `debug` are the thin process glue used by the binary.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod convert;
pub mod debug;
pub mod error;

pub use convert::{Convention, convert, detect};
pub use error::ConvertError;
