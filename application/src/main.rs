use std::{io, process::ExitCode, sync::OnceLock};

use application::{error::StartupError, Args, Config, Error};
use service::Service;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    // Stdout is reserved for command results.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    match start(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e.to_json());
            ExitCode::from(e.exit_code)
        }
    }
}

fn start(args: Args) -> Result<(), Error> {
    let Args { config, cmd } = args;

    let Config { pricing, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
        StartupError::InvalidConfig
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(pricing.try_into().map_err(|e| {
        log::error!("invalid pricing configuration: {e}");
        Error::from(StartupError::InvalidConfig)
    })?);

    application::run(&service, cmd, io::stdout().lock())
}
