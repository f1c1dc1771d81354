//! NumSeq — exact number theory and lazy integer sequences.

use numseq_lib::{app, config, errors};

fn main() {
    // Parse CLI args first so -v can raise the default log level
    let config = config::AppConfig::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        app::presenter(&config).present_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
}
