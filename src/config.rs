use worker::Env;

const DEFAULT_PROVIDER_NAME: &str = "AGI Comics";
const DEFAULT_PROVIDER_URL: &str = "https://dileeplearning.github.io/agicomics/";

/// Provider identity stamped into every oEmbed payload.
///
/// Overridable per deployment via the `PROVIDER_NAME` and `PROVIDER_URL`
/// vars; falls back to the canonical site when unset.
#[derive(Debug, Clone)]
pub struct Provider {
    pub name: String,
    pub url: String,
}

impl Provider {
    pub fn from_env(env: &Env) -> Self {
        let name = env
            .var("PROVIDER_NAME")
            .map(|v| v.to_string())
            .unwrap_or_else(|_| DEFAULT_PROVIDER_NAME.to_string());
        let url = env
            .var("PROVIDER_URL")
            .map(|v| v.to_string())
            .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());

        Provider { name, url }
    }
}
