use crate::config::RunMode;

/// Install the env_logger backend on stderr.
///
/// `RUST_LOG` wins when set; otherwise the filter comes from the run mode.
/// Calling this twice is harmless.
pub fn init_logging(mode: RunMode) {
    let env = env_logger::Env::default().default_filter_or(mode.default_log_filter());
    let mut builder = env_logger::Builder::from_env(env);
    builder.target(env_logger::Target::Stderr);
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
