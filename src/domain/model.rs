use std::collections::BTreeMap;
use std::fmt;

/// A collaborator service the demo depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: String,
    pub base_url: String,
    pub health_path: String,
    /// Command shown to the operator when the service is down.
    pub start_hint: String,
}

impl ServiceSpec {
    pub fn new(name: &str, base_url: &str, health_path: &str, start_hint: &str) -> Self {
        Self {
            name: name.to_string(),
            base_url: base_url.to_string(),
            health_path: health_path.to_string(),
            start_hint: start_hint.to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn health_url(&self) -> String {
        self.endpoint(&self.health_path)
    }

    /// Port taken from the base URL, or the scheme default when none is given.
    pub fn port(&self) -> u16 {
        url::Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.port_or_known_default())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// How a step's label and response are laid out in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Label on its own line, response on the next.
    Heading,
    /// Label and response share one line.
    Inline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpCall {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
    pub display_label: String,
    pub label_style: LabelStyle,
}

impl HttpCall {
    pub fn get(url: String, display_label: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers: BTreeMap::new(),
            body: None,
            display_label: display_label.to_string(),
            label_style: LabelStyle::Heading,
        }
    }

    pub fn post_json(url: String, body: serde_json::Value, display_label: &str) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            method: HttpMethod::Post,
            url,
            headers,
            body: Some(body),
            display_label: display_label.to_string(),
            label_style: LabelStyle::Heading,
        }
    }

    pub fn inline(mut self) -> Self {
        self.label_style = LabelStyle::Inline;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DemoScene {
    pub title: String,
    pub steps: Vec<HttpCall>,
}

/// Outcome of one call. Transport errors land in `raw_body` as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    pub status_ok: bool,
    pub status: Option<u16>,
    pub raw_body: String,
}

impl CallResult {
    pub fn from_response(status: u16, ok: bool, raw_body: String) -> Self {
        Self {
            status_ok: ok,
            status: Some(status),
            raw_body,
        }
    }

    pub fn from_error(message: String) -> Self {
        Self {
            status_ok: false,
            status: None,
            raw_body: message,
        }
    }
}
