use crate::library::logger::interface::Logger;
use chrono::Utc;
use std::sync::Arc;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct LoggerTracing {
    namespace: Option<String>,
}

impl LoggerTracing {
    pub fn new() -> Self {
        Self { namespace: None }
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }

    fn child(&self, namespace: &str) -> Self {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Self {
            namespace: Some(new_namespace),
        }
    }
}

impl Logger for LoggerTracing {
    fn info(&self, message: &str) {
        tracing::info!(namespace = self.namespace(), "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(namespace = self.namespace(), "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(namespace = self.namespace(), "{}", message);
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(self.child(namespace))
    }
}

/// Renders event timestamps in a fixed offset rather than the host's local zone.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsetTimer {
    timezone: chrono::FixedOffset,
}

impl FixedOffsetTimer {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self { timezone }
    }
}

impl FormatTime for FixedOffsetTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let local_time = Utc::now().with_timezone(&self.timezone);
        write!(w, "{}", local_time.format("%Y-%m-%d %I:%M:%S%.3f %p"))
    }
}

pub fn init_subscriber(timezone: chrono::FixedOffset) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(FixedOffsetTimer::new(timezone))
        .with_target(false)
        .try_init();
}
