use crate::core::{CallResult, DemoScene, HttpCall, Transport};
use crate::domain::model::LabelStyle;
use crate::utils::error::Result;
use std::io::Write;
use std::time::{Duration, Instant};

/// What happened in one scene, for logging only.
#[derive(Debug, Clone)]
pub struct SceneOutcome {
    pub title: String,
    pub succeeded: usize,
    pub failed: usize,
    pub duration: Duration,
}

/// Runs scenes in order, one call at a time, handing each outcome to
/// `on_scene` before the next scene starts.
///
/// A failed call is printed and the runner moves on; only a failed write
/// to `out` stops it.
pub async fn run_scenes<T, W, F>(
    transport: &T,
    scenes: &[DemoScene],
    out: &mut W,
    mut on_scene: F,
) -> Result<Vec<SceneOutcome>>
where
    T: Transport + ?Sized,
    W: Write,
    F: FnMut(&SceneOutcome),
{
    let mut outcomes = Vec::with_capacity(scenes.len());

    for scene in scenes {
        let outcome = run_scene(transport, scene, out).await?;
        tracing::info!(
            "Scene finished: {} (ok: {}, failed: {}, duration: {:?})",
            outcome.title,
            outcome.succeeded,
            outcome.failed,
            outcome.duration
        );
        on_scene(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

pub async fn run_scene<T, W>(transport: &T, scene: &DemoScene, out: &mut W) -> Result<SceneOutcome>
where
    T: Transport + ?Sized,
    W: Write,
{
    tracing::info!("Scene started: {}", scene.title);
    let start_time = Instant::now();
    let mut succeeded = 0;
    let mut failed = 0;

    writeln!(out)?;
    writeln!(out, "{}", scene.title)?;
    writeln!(out, "{}", "=".repeat(scene.title.chars().count()))?;

    for call in &scene.steps {
        if execute_and_print(transport, call, out).await? {
            succeeded += 1;
        } else {
            failed += 1;
        }
    }

    Ok(SceneOutcome {
        title: scene.title.clone(),
        succeeded,
        failed,
        duration: start_time.elapsed(),
    })
}

/// Prints the label, issues the call, prints the raw response. Returns
/// whether the call succeeded.
pub async fn execute_and_print<T, W>(transport: &T, call: &HttpCall, out: &mut W) -> Result<bool>
where
    T: Transport + ?Sized,
    W: Write,
{
    match call.label_style {
        LabelStyle::Heading => writeln!(out, "{}", call.display_label)?,
        LabelStyle::Inline => write!(out, "  {} ", call.display_label)?,
    }
    // The label must be visible while the call is in flight.
    out.flush()?;

    let result = transport.execute(call).await;
    if !result.status_ok {
        tracing::warn!("{} {} did not succeed: {}", call.method, call.url, result.raw_body);
    }

    let rendered = render_result(&result);
    match call.label_style {
        LabelStyle::Heading => writeln!(out, "  {}", rendered)?,
        LabelStyle::Inline => writeln!(out, "{}", rendered)?,
    }

    Ok(result.status_ok)
}

fn render_result(result: &CallResult) -> String {
    let body = if result.raw_body.is_empty() {
        "(empty response)"
    } else {
        result.raw_body.as_str()
    };

    if result.status_ok {
        body.to_string()
    } else {
        match result.status {
            Some(status) => format!("⚠️  HTTP {}: {}", status, body),
            None => format!("⚠️  {}", body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::core::scenes::demo_scenes;
    use crate::core::test_support::{output_of, RecordingTransport};

    #[tokio::test]
    async fn test_scenes_run_in_declaration_order() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new();
        let mut out = Vec::new();

        let outcomes = run_scenes(&transport, &demo_scenes(&config), &mut out, |_| {})
            .await
            .unwrap();

        assert_eq!(
            transport.urls().await,
            vec![
                "http://localhost:8090/api/network/create",
                "http://localhost:8090/api/network/train",
                "http://localhost:8090/api/network/predict",
                "http://localhost:8090/api/network/predict",
                "http://localhost:8090/api/network/predict",
                "http://localhost:8090/api/network/predict",
                "http://localhost:8081/demo/ephemeral-solve",
                "http://localhost:8082/api/forecast",
            ]
        );
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.failed == 0));
    }

    #[tokio::test]
    async fn test_prediction_printed_inline() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new().respond(
            "http://localhost:8090/api/network/predict",
            CallResult::from_response(200, true, r#"{"output":[0.97]}"#.to_string()),
        );
        let mut out = Vec::new();

        run_scenes(&transport, &demo_scenes(&config)[..1], &mut out, |_| {})
            .await
            .unwrap();

        let output = output_of(out);
        assert!(output.contains("  [0,0] → {\"output\":[0.97]}\n"));
        assert!(output.contains("  [1,1] → {\"output\":[0.97]}\n"));

        let first = output.find("[0,0] →").unwrap();
        let last = output.find("[1,1] →").unwrap();
        assert!(first < last);
    }

    #[tokio::test]
    async fn test_failed_step_does_not_stop_later_scenes() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new().respond(
            "http://localhost:8081/demo/ephemeral-solve",
            CallResult::from_error("request failed: connection refused".to_string()),
        );
        let mut out = Vec::new();

        let outcomes = run_scenes(&transport, &demo_scenes(&config), &mut out, |_| {})
            .await
            .unwrap();

        assert_eq!(
            transport.urls().await.last().map(String::as_str),
            Some("http://localhost:8082/api/forecast")
        );
        assert_eq!(outcomes[1].failed, 1);
        assert_eq!(outcomes[2].succeeded, 1);

        let output = output_of(out);
        assert!(output.contains("⚠️  request failed: connection refused"));
        assert!(output.contains("📈 Demo 3: Time Series Forecasting"));
    }

    #[tokio::test]
    async fn test_each_outcome_reported_before_next_scene() {
        let config = DemoConfig::default();
        let transport = RecordingTransport::new();
        let mut out = Vec::new();
        let mut reported = Vec::new();

        run_scenes(&transport, &demo_scenes(&config), &mut out, |outcome| {
            reported.push(outcome.title.clone())
        })
        .await
        .unwrap();

        assert_eq!(
            reported,
            vec![
                "🧠 Demo 1: Neural Network Training (XOR)",
                "⚡ Demo 2: Ephemeral Intelligence",
                "📈 Demo 3: Time Series Forecasting",
            ]
        );
    }

    #[test]
    fn test_render_result() {
        assert_eq!(
            render_result(&CallResult::from_response(200, true, "ok".to_string())),
            "ok"
        );
        assert_eq!(
            render_result(&CallResult::from_response(500, false, "boom".to_string())),
            "⚠️  HTTP 500: boom"
        );
        assert_eq!(
            render_result(&CallResult::from_response(204, true, String::new())),
            "(empty response)"
        );
    }
}
