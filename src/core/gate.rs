use crate::core::health::check_health;
use crate::core::{ServiceSpec, Transport};
use crate::utils::error::{DemoError, Result};
use std::io::Write;

/// Checks each service in order and stops at the first one that is down.
///
/// Services after the first failure are not probed. The failure is printed
/// with its start command and returned as `DemoError::ServiceUnavailable`.
pub async fn ensure_services_up<T, W>(
    transport: &T,
    specs: &[ServiceSpec],
    out: &mut W,
) -> Result<()>
where
    T: Transport + ?Sized,
    W: Write,
{
    for spec in specs {
        if !check_health(transport, spec, out).await? {
            writeln!(out, "   Start it with: {}", spec.start_hint)?;
            return Err(DemoError::ServiceUnavailable {
                service: spec.name.clone(),
                port: spec.port(),
                hint: spec.start_hint.clone(),
            });
        }
    }

    tracing::info!("All {} services are up", specs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::core::test_support::{output_of, RecordingTransport};
    use crate::core::CallResult;

    #[tokio::test]
    async fn test_all_services_up() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new();
        let mut out = Vec::new();

        ensure_services_up(&transport, &config.services(), &mut out)
            .await
            .unwrap();

        assert_eq!(
            transport.urls().await,
            vec![
                "http://localhost:8090/health",
                "http://localhost:8081/health",
                "http://localhost:8082/health",
            ]
        );
        assert_eq!(output_of(out).lines().count(), 3);
    }

    #[tokio::test]
    async fn test_stops_at_first_down_service() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new().respond(
            "http://localhost:8081/health",
            CallResult::from_error("request failed: connection refused".to_string()),
        );
        let mut out = Vec::new();

        let err = ensure_services_up(&transport, &config.services(), &mut out)
            .await
            .unwrap_err();

        // Model server is never probed.
        assert_eq!(
            transport.urls().await,
            vec!["http://localhost:8090/health", "http://localhost:8081/health"]
        );

        match err {
            DemoError::ServiceUnavailable { service, port, .. } => {
                assert_eq!(service, "ruv-swarm");
                assert_eq!(port, 8081);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let output = output_of(out);
        assert!(output.contains("❌ ruv-swarm is not running on port 8081"));
        assert!(output.contains("Start it with: cd swarm && cargo run --release --bin ruv-swarm"));
    }

    #[tokio::test]
    async fn test_first_service_down_checks_nothing_else() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new().respond(
            "http://localhost:8090/health",
            CallResult::from_response(500, false, String::new()),
        );
        let mut out = Vec::new();

        assert!(ensure_services_up(&transport, &config.services(), &mut out)
            .await
            .is_err());
        assert_eq!(transport.calls().await.len(), 1);
    }
}
