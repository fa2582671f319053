use clap::Args;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics go to stderr; stdout carries only the token.
#[derive(Args, Clone, Debug)]
pub struct Log {
	/// The minimum level of diagnostics to print. `RUST_LOG` directives take precedence.
	#[arg(id = "log-level", long = "log-level", default_value = "warn", env = "CAX_LOG_LEVEL")]
	pub level: tracing::Level,
}

impl Log {
	pub fn level(&self) -> LevelFilter {
		LevelFilter::from_level(self.level)
	}

	pub fn init(&self) {
		let filter = EnvFilter::builder()
			.with_default_directive(self.level().into())
			.from_env_lossy();

		let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

		tracing_subscriber::registry().with(filter).with(fmt_layer).init();
	}
}
