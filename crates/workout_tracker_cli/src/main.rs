use workout_tracker_cli::{InputSource, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging from env var `WORKOUT_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("WORKOUT_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let arg = std::env::args().nth(1);
    let source = InputSource::from_arg(arg.as_deref());
    tracing::debug!(?source, "workout-tracker: resolved input source");

    let stdout = std::io::stdout();
    run(&source, &mut stdout.lock())?;
    Ok(())
}
