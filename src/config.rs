use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Estimate API the hosted page talks to.
pub const DEFAULT_ESTIMATE_API_URL: &str = "https://buildwise-e1eo.onrender.com/api/calculate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // Remote calculation API
    pub estimate_api_url: String,

    // Same-origin site hosting the /login endpoint
    pub auth_base_url: String,

    pub http_timeout_seconds: u64,

    // Report export
    pub report_output_dir: PathBuf,
    pub pdf_converter_bin: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        let estimate_api_url =
            env::var("ESTIMATE_API_URL").unwrap_or_else(|_| DEFAULT_ESTIMATE_API_URL.to_string());
        Url::parse(&estimate_api_url).context("ESTIMATE_API_URL must be an absolute URL")?;

        let auth_base_url =
            env::var("AUTH_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        Url::parse(&auth_base_url).context("AUTH_BASE_URL must be an absolute URL")?;

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        // Report export
        let report_output_dir = env::var("REPORT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let pdf_converter_bin =
            env::var("PDF_CONVERTER_BIN").unwrap_or_else(|_| "wkhtmltopdf".to_string());

        Ok(Settings {
            env,
            estimate_api_url,
            auth_base_url,
            http_timeout_seconds,
            report_output_dir,
            pdf_converter_bin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing_is_case_insensitive() {
        assert_eq!(Environment::from_str("PRODUCTION"), Environment::Prod);
        assert_eq!(Environment::from_str("prod"), Environment::Prod);
        assert_eq!(Environment::from_str("Staging"), Environment::Staging);
        assert_eq!(Environment::from_str("anything-else"), Environment::Dev);
        assert!(Environment::Dev.is_dev());
        assert!(!Environment::Staging.is_prod());
    }
}
