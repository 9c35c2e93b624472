pub mod check;
pub mod error;
pub mod switch;

pub use check::*;
pub use error::*;
pub use switch::*;

/// Initialise `env_logger` for a binary. Defaults to `warn`; set `RUST_LOG`
/// to see more.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A second init in the same process (tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
