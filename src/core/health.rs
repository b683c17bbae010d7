use crate::core::{HttpCall, ServiceSpec, Transport};
use crate::utils::error::Result;
use std::io::Write;

/// Probes `spec`'s health endpoint and prints one status line.
///
/// Connection errors, timeouts and non-2xx statuses all yield `Ok(false)`;
/// the only error returned is a failed write to `out`.
pub async fn check_health<T, W>(transport: &T, spec: &ServiceSpec, out: &mut W) -> Result<bool>
where
    T: Transport + ?Sized,
    W: Write,
{
    let call = HttpCall::get(spec.health_url(), &format!("{} health", spec.name));
    let result = transport.execute(&call).await;

    if result.status_ok {
        tracing::debug!("{} healthy at {}", spec.name, call.url);
        writeln!(out, "✅ {} is running on port {}", spec.name, spec.port())?;
    } else {
        tracing::warn!("{} health check failed: {}", spec.name, result.raw_body);
        writeln!(out, "❌ {} is not running on port {}", spec.name, spec.port())?;
    }

    Ok(result.status_ok)
}
