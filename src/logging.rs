use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["mimus", "mimus_io", "mimus_markov", "mimus_text"];

/// Initialize tracing from the CLI verbosity count (-v info, -vv debug,
/// -vvv trace; warnings only by default). A set `RUST_LOG` env var takes
/// precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> =
            CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
