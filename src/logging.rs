use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "buildwise_client=debug,buildwise=debug,reqwest=info,info",
        Environment::Staging => "buildwise_client=debug,buildwise=info,warn",
        Environment::Prod => "buildwise_client=info,buildwise=info,warn",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    // stderr keeps stdout for the rendered dashboard
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let installed = if env.is_prod() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.pretty())
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!("Logging initialized for {:?} environment", env);
    }
}
