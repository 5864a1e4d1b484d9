//! `utilkit` 바이너리 진입점.

use utilkit::interface::cli::{AppComposition, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let invocation = Cli::parse_invocation();
    let composition = AppComposition::default();

    let code = composition
        .dispatch_usecase(invocation.settings)
        .run(&invocation.args);
    std::process::exit(code);
}
