use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the JSON subscriber for hosts embedding the crate. `RUST_LOG` wins over `default_directive`.
pub fn try_init(default_directive: &str) -> anyhow::Result<()> {
    let fmt_layer = fmt::layer().json();
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_directive))?;
    tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}

pub fn init() {
    if let Err(e) = try_init("info") {
        eprintln!("sitefs logging already initialised: {e}");
    }
}
