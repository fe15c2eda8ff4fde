/// URL for accessing the PostgreSQL database which stores todos
pub const DB_URL: &str = "DATABASE_URL";
/// Log level configuration for the application. For formatting info, see [tracing_subscriber's EnvFilter](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Address the HTTP server binds to. Falls back to [DEFAULT_SERVER_ADDR] when unset.
pub const SERVER_ADDR: &str = "SERVER_ADDR";
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

/// OpenTelemetry span export URL. Should be http://localhost:4317 when an OpenTelemetry collector
/// sidecar is running next to the service. Spans are only exported when this and
/// [OTEL_METRIC_EXPORT_URL] are both set.
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL, see [OTEL_SPAN_EXPORT_URL]
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";
