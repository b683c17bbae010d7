use crate::adapters::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::model::ServiceSpec;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

/// Resolved configuration for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub timeout_seconds: u64,
    pub include_info: bool,
    pub show_summary: bool,
    pub core: ServiceSpec,
    pub swarm: ServiceSpec,
    pub model: ServiceSpec,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            include_info: false,
            show_summary: true,
            core: ServiceSpec::new(
                "ruv-FANN Core",
                "http://localhost:8090",
                "/health",
                "cd core && PORT=8090 cargo run --release",
            ),
            swarm: ServiceSpec::new(
                "ruv-swarm",
                "http://localhost:8081",
                "/health",
                "cd swarm && cargo run --release --bin ruv-swarm",
            ),
            model: ServiceSpec::new(
                "ruv-model",
                "http://localhost:8082",
                "/health",
                "cd model && cargo run --release",
            ),
        }
    }
}

/// On-disk layout. Every key is optional and falls back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    pub http: Option<HttpSection>,
    pub demo: Option<DemoSection>,
    pub services: Option<ServicesSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSection {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoSection {
    pub include_info: Option<bool>,
    pub show_summary: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicesSection {
    pub core: Option<ServiceSection>,
    pub swarm: Option<ServiceSection>,
    pub model: Option<ServiceSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSection {
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub health_path: Option<String>,
    pub start_hint: Option<String>,
}

impl ServiceSection {
    fn apply_to(&self, spec: &mut ServiceSpec) {
        if let Some(name) = &self.name {
            spec.name = name.clone();
        }
        if let Some(base_url) = &self.base_url {
            spec.base_url = base_url.clone();
        }
        if let Some(health_path) = &self.health_path {
            spec.health_path = health_path.clone();
        }
        if let Some(start_hint) = &self.start_hint {
            spec.start_hint = start_hint.clone();
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| DemoError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let file: ConfigFile =
            toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        Ok(Self::default().merged_with(&file))
    }

    /// 替換環境變數 (例如 ${CORE_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn merged_with(mut self, file: &ConfigFile) -> Self {
        if let Some(timeout) = file.http.as_ref().and_then(|h| h.timeout_seconds) {
            self.timeout_seconds = timeout;
        }
        if let Some(demo) = &file.demo {
            if let Some(include_info) = demo.include_info {
                self.include_info = include_info;
            }
            if let Some(show_summary) = demo.show_summary {
                self.show_summary = show_summary;
            }
        }
        if let Some(services) = &file.services {
            if let Some(core) = &services.core {
                core.apply_to(&mut self.core);
            }
            if let Some(swarm) = &services.swarm {
                swarm.apply_to(&mut self.swarm);
            }
            if let Some(model) = &services.model {
                model.apply_to(&mut self.model);
            }
        }
        self
    }

    /// Services in gate order: Core, Swarm, Model Server.
    pub fn services(&self) -> Vec<ServiceSpec> {
        vec![self.core.clone(), self.swarm.clone(), self.model.clone()]
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("http.timeout_seconds", self.timeout_seconds, 1, 300)?;

        for (key, spec) in [("core", &self.core), ("swarm", &self.swarm), ("model", &self.model)] {
            validation::validate_non_empty_string(&format!("services.{}.name", key), &spec.name)?;
            validation::validate_url(&format!("services.{}.base_url", key), &spec.base_url)?;
            validation::validate_endpoint_path(
                &format!("services.{}.health_path", key),
                &spec.health_path,
            )?;
            validation::validate_non_empty_string(
                &format!("services.{}.start_hint", key),
                &spec.start_hint,
            )?;
        }

        Ok(())
    }
}
