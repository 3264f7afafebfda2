pub mod cli;
pub mod exif;
pub mod exiffill_error;
pub mod filler;
pub mod photo;
pub mod pipeline;
pub mod preview;
pub mod scanner;
pub mod util;
pub mod writer;

/// Sets up `tracing` on stderr. `RUST_LOG` overrides the default level.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
