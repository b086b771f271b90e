use tracing_subscriber::filter::{EnvFilter, LevelFilter};

const LOG_ENV_NAME: &str = "PRETTYBNF_LOG";

/// Routes parser traces to the test output. Verbosity is read from `PRETTYBNF_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .with_env_var(LOG_ENV_NAME)
        .from_env_lossy();

    // another test may have installed the subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
