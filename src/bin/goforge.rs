use goforge::cli::run_cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run_cli() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}
