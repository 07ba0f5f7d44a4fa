//! Tracing subscriber setup from the logging table

use anyhow::Result;
use safe_config_core::logging::{LogFormat, LoggingSettings};
use tracing::Subscriber;
use tracing_subscriber::{
    filter::{Directive, Targets},
    fmt,
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber.
///
/// The root handler honours `RUST_LOG` when set, otherwise the configured
/// root level. Each named logger gets its own handler.
pub fn init(logging: &LoggingSettings) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(logging.loggers.len() + 1);

    for logger in &logging.loggers {
        let targets = Targets::new().with_target(logger.target, logger.level.as_level_filter());
        layers.push(
            fmt_layer(logging.format_of(logger.handler))
                .with_filter(targets)
                .boxed(),
        );
    }

    layers.push(
        fmt_layer(logging.format_of(logging.root_handler))
            .with_filter(root_filter(logging, rust_log.as_deref())?)
            .boxed(),
    );

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Filter for the root handler, with non-propagating loggers switched off
fn root_filter(logging: &LoggingSettings, rust_log: Option<&str>) -> Result<EnvFilter> {
    let mut filter = match rust_log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::new(logging.root_level.directive()),
    };

    for logger in logging.loggers.iter().filter(|logger| !logger.propagate) {
        let directive: Directive = format!("{}=off", logger.target).parse()?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}

fn fmt_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        LogFormat::Short => fmt::layer().with_target(false).with_level(false).boxed(),
        LogFormat::Verbose => fmt::layer().with_thread_names(true).boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_config_core::logging::{LogLevel, REQUEST_LOG_TARGET};

    #[test]
    fn test_root_filter_uses_root_level() {
        let logging = LoggingSettings::with_root_level(LogLevel::Warning);
        let filter = root_filter(&logging, None).unwrap().to_string().to_lowercase();

        assert!(filter.contains("warn"), "filter {}", filter);
        assert!(filter.contains(&format!("{}=off", REQUEST_LOG_TARGET)));
    }

    #[test]
    fn test_root_filter_prefers_rust_log() {
        let logging = LoggingSettings::default();
        let filter = root_filter(&logging, Some("tower_http=debug"))
            .unwrap()
            .to_string()
            .to_lowercase();

        assert!(filter.contains("tower_http=debug"), "filter {}", filter);
        assert!(filter.contains(&format!("{}=off", REQUEST_LOG_TARGET)));
    }

    #[test]
    fn test_root_filter_rejects_bad_rust_log() {
        let logging = LoggingSettings::default();
        assert!(root_filter(&logging, Some("tower_http=loud")).is_err());
    }
}
