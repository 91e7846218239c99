use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_LLM_TIMEOUT_MS: u64 = 30_000;

/// Settings for the outbound completion call.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    /// Secret token or API key.
    pub token: String,
    pub model: String,
    /// Hard limit on response tokens.
    pub max_output_tokens: Option<u32>,
    /// Temperature for sampling (0-2).
    pub temperature: Option<f32>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Full chat-completions URL, whether or not the base already names the endpoint.
    pub fn chat_completions_url(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.ends_with("/chat/completions") {
            trimmed.to_string()
        } else {
            format!("{}/chat/completions", trimmed)
        }
    }

    /// Mask the token for safe display (keeps last 4 chars).
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 8 {
            "***".into()
        } else {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("***{}", tail)
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub llm: LlmConfig,
    /// Bounds the pod log fetch; `None` fetches the whole log.
    pub log_tail_lines: Option<i64>,
    /// Directory for the rolling log file; stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load from the process environment (after `.env` has been applied).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).and_then(normalize_string);

        let token = get("POD_DOCTOR_LLM_TOKEN")
            .or_else(|| get("OPENAI_API_KEY"))
            .ok_or_else(|| anyhow!("LLM token is missing; set POD_DOCTOR_LLM_TOKEN or OPENAI_API_KEY"))?;

        let llm = LlmConfig {
            base_url: get("POD_DOCTOR_LLM_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            token,
            model: get("POD_DOCTOR_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            max_output_tokens: parse_opt(get("POD_DOCTOR_LLM_MAX_OUTPUT_TOKENS"), "POD_DOCTOR_LLM_MAX_OUTPUT_TOKENS")?,
            temperature: parse_opt(get("POD_DOCTOR_LLM_TEMPERATURE"), "POD_DOCTOR_LLM_TEMPERATURE")?,
            timeout_ms: parse_opt(get("POD_DOCTOR_LLM_TIMEOUT_MS"), "POD_DOCTOR_LLM_TIMEOUT_MS")?
                .unwrap_or(DEFAULT_LLM_TIMEOUT_MS),
        };

        Ok(Self {
            server_addr: get("POD_DOCTOR_SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            llm,
            log_tail_lines: parse_opt(get("POD_DOCTOR_LOG_TAIL_LINES"), "POD_DOCTOR_LOG_TAIL_LINES")?,
            log_dir: get("POD_DOCTOR_LOG_DIR").map(PathBuf::from),
        })
    }
}

fn parse_opt<T>(raw: Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|v| v.parse::<T>().with_context(|| format!("Invalid value for {}: '{}'", key, v)))
        .transpose()
}

fn normalize_string(v: String) -> Option<String> {
    let s = v.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
