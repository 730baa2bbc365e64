use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "BUILD2RISE_LOG";

/// Initialize tracing.
///
/// With `BUILD2RISE_LOG` set to a path, everything at `info` and above (or
/// whatever `RUST_LOG` selects) goes to `{path}.{timestamp}.{pid}`, so
/// concurrent invocations never share a file. Without it, warnings go to
/// stderr and command output on stdout stays clean.
pub fn init_tracing() {
    match std::env::var(LOG_ENV).ok() {
        Some(log_path) => init_file(&log_path),
        None => init_stderr(),
    }
}

fn init_file(log_path: &str) {
    let unique_path = unique_log_path(log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        init_stderr();
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn init_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn unique_log_path(log_path: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", log_path, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_gets_pid_suffix() {
        let path = unique_log_path("/tmp/b2r.log");
        assert!(path.starts_with("/tmp/b2r.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
