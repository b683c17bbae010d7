//! The fixed demo catalogue. Payloads here are the literal bodies each
//! collaborator service is driven with.

use crate::config::DemoConfig;
use crate::core::{DemoScene, HttpCall, ServiceSpec};
use serde_json::json;

pub const XOR_INPUTS: [[u8; 2]; 4] = [[0, 0], [0, 1], [1, 0], [1, 1]];
pub const XOR_TARGETS: [[u8; 1]; 4] = [[0], [1], [1], [0]];
pub const TRAINING_EPOCHS: u32 = 1000;

pub const FORECAST_SERIES: [f64; 20] = [
    100.5, 105.2, 98.7, 102.3, 108.9, 112.4, 106.8, 110.5, 115.2, 118.7, 122.3, 119.8, 125.4,
    130.2, 128.6, 133.9, 138.5, 142.1, 145.7, 149.3,
];
pub const FORECAST_HORIZON: u32 = 5;

/// Create, train and query an XOR network on the core service.
pub fn network_training(core: &ServiceSpec) -> DemoScene {
    let mut steps = vec![
        HttpCall::post_json(
            core.endpoint("/api/network/create"),
            json!({"layers": [2, 4, 1], "learning_rate": 0.5}),
            "Creating a 2-4-1 network (learning rate 0.5)...",
        ),
        HttpCall::post_json(
            core.endpoint("/api/network/train"),
            json!({
                "inputs": XOR_INPUTS,
                "targets": XOR_TARGETS,
                "epochs": TRAINING_EPOCHS,
            }),
            &format!("Training on XOR for {} epochs...", TRAINING_EPOCHS),
        ),
    ];

    steps.extend(XOR_INPUTS.iter().map(|input| {
        HttpCall::post_json(
            core.endpoint("/api/network/predict"),
            json!({"input": input}),
            &format!("[{},{}] →", input[0], input[1]),
        )
        .inline()
    }));

    DemoScene {
        title: "🧠 Demo 1: Neural Network Training (XOR)".to_string(),
        steps,
    }
}

pub fn ephemeral_intelligence(swarm: &ServiceSpec) -> DemoScene {
    DemoScene {
        title: "⚡ Demo 2: Ephemeral Intelligence".to_string(),
        steps: vec![HttpCall::get(
            swarm.endpoint("/demo/ephemeral-solve"),
            "Spawning short-lived agents to solve demo problems...",
        )],
    }
}

pub fn forecasting(model: &ServiceSpec) -> DemoScene {
    DemoScene {
        title: "📈 Demo 3: Time Series Forecasting".to_string(),
        steps: vec![HttpCall::post_json(
            model.endpoint("/api/forecast"),
            json!({"values": FORECAST_SERIES, "horizon": FORECAST_HORIZON}),
            &format!(
                "Forecasting {} steps from {} observations...",
                FORECAST_HORIZON,
                FORECAST_SERIES.len()
            ),
        )],
    }
}

/// Read-only info endpoints of all three services.
pub fn service_info(config: &DemoConfig) -> DemoScene {
    DemoScene {
        title: "ℹ️  Service Info".to_string(),
        steps: vec![
            HttpCall::get(config.core.endpoint("/api/network/info"), "Network info:"),
            HttpCall::get(config.swarm.endpoint("/api/stats"), "Swarm stats:"),
            HttpCall::get(config.model.endpoint("/api/model/info"), "Model info:"),
        ],
    }
}

/// Scenes in run order.
pub fn demo_scenes(config: &DemoConfig) -> Vec<DemoScene> {
    let mut scenes = vec![
        network_training(&config.core),
        ephemeral_intelligence(&config.swarm),
        forecasting(&config.model),
    ];
    if config.include_info {
        scenes.push(service_info(config));
    }
    scenes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{HttpMethod, LabelStyle};

    #[test]
    fn test_network_training_call_order() {
        let scene = network_training(&DemoConfig::default().core);
        let paths: Vec<&str> = scene
            .steps
            .iter()
            .map(|c| c.url.trim_start_matches("http://localhost:8090"))
            .collect();

        assert_eq!(
            paths,
            vec![
                "/api/network/create",
                "/api/network/train",
                "/api/network/predict",
                "/api/network/predict",
                "/api/network/predict",
                "/api/network/predict",
            ]
        );
        assert!(scene.steps.iter().all(|c| c.method == HttpMethod::Post));
    }

    #[test]
    fn test_create_and_train_payloads() {
        let scene = network_training(&DemoConfig::default().core);

        assert_eq!(
            scene.steps[0].body,
            Some(json!({"layers": [2, 4, 1], "learning_rate": 0.5}))
        );
        assert_eq!(
            scene.steps[1].body,
            Some(json!({
                "inputs": [[0, 0], [0, 1], [1, 0], [1, 1]],
                "targets": [[0], [1], [1], [0]],
                "epochs": 1000
            }))
        );
    }

    #[test]
    fn test_predict_inputs_in_xor_order() {
        let scene = network_training(&DemoConfig::default().core);
        let predictions = &scene.steps[2..];

        let inputs: Vec<serde_json::Value> = predictions
            .iter()
            .map(|c| c.body.clone().unwrap()["input"].clone())
            .collect();
        assert_eq!(
            inputs,
            vec![json!([0, 0]), json!([0, 1]), json!([1, 0]), json!([1, 1])]
        );

        let labels: Vec<&str> = predictions.iter().map(|c| c.display_label.as_str()).collect();
        assert_eq!(labels, vec!["[0,0] →", "[0,1] →", "[1,0] →", "[1,1] →"]);
        assert!(predictions.iter().all(|c| c.label_style == LabelStyle::Inline));
    }

    #[test]
    fn test_forecast_payload() {
        let scene = forecasting(&DemoConfig::default().model);
        let call = &scene.steps[0];
        let body = call.body.as_ref().unwrap();

        assert_eq!(call.url, "http://localhost:8082/api/forecast");
        assert_eq!(body["horizon"], json!(5));

        let values = body["values"].as_array().unwrap();
        assert_eq!(values.len(), 20);
        assert!(values.iter().all(|v| v.is_number()));
        assert_eq!(values[0], json!(100.5));
        assert_eq!(values[19], json!(149.3));
    }

    #[test]
    fn test_ephemeral_scene_is_single_get() {
        let scene = ephemeral_intelligence(&DemoConfig::default().swarm);

        assert_eq!(scene.steps.len(), 1);
        assert_eq!(scene.steps[0].method, HttpMethod::Get);
        assert_eq!(scene.steps[0].url, "http://localhost:8081/demo/ephemeral-solve");
        assert!(scene.steps[0].body.is_none());
    }

    #[test]
    fn test_info_scene_is_opt_in() {
        let mut config = DemoConfig::default();
        assert_eq!(demo_scenes(&config).len(), 3);

        config.include_info = true;
        let scenes = demo_scenes(&config);
        assert_eq!(scenes.len(), 4);
        assert_eq!(scenes[3].steps.len(), 3);
    }
}
