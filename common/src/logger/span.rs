use std::time::Duration;

use tracing::Span;

use super::trace_id::TraceId;

/// Root span for one polling cycle, tagged with its correlation id.
pub fn root_span(name: &'static str, trace_id: &TraceId) -> Span {
    tracing::info_span!("cycle", name = %name, trace_id = %trace_id)
}

/// Await `fut`, warning if it runs longer than `max`.
pub async fn warn_if_slow<F, T>(label: &'static str, max: Duration, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let start = std::time::Instant::now();
    let out = fut.await;
    let elapsed = start.elapsed();
    if elapsed > max {
        tracing::warn!(
            label,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow operation detected"
        );
    }
    out
}
