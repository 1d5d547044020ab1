use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global fmt subscriber, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vegan_cosmetics_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
