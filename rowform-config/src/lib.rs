//! Shared configuration library for rowform.
//!
//! Loads the boolean token sets and collation settings the core library is
//! initialized with, from a TOML/JSON file, inline JSON, or defaults, and sets
//! up `tracing` output for binaries and tests.

pub mod loader;
pub mod logging;
pub mod models;
pub mod util;

pub use loader::{ConfigLoader, ConfigSource};
pub use logging::init_logging;
pub use models::{CoercionConfig, CollationConfig, Config};
