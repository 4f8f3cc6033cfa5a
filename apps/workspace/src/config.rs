use serde::{Deserialize, Serialize};

const DEFAULT_TYPING_SCALE: f32 = 1.0;
const MIN_STEP_DELAY_MS: u32 = 50;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: AppProfile,
    /// Email prefilled on the login screen for demo sessions.
    pub default_email: Option<String>,
    /// Multiplier applied to every scripted typing delay; < 1.0 speeds up
    /// assessment runs without touching the script tables.
    pub typing_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            default_email: None,
            typing_scale: DEFAULT_TYPING_SCALE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let mut config = Self::default();

        config.profile = AppProfile::from_env(read_env("AMBOJA_PROFILE"));

        if let Some(email) = read_env("AMBOJA_DEFAULT_EMAIL") {
            config.default_email = Some(email);
        }

        if let Some(scale) = read_env("AMBOJA_TYPING_SCALE").and_then(|value| value.parse::<f32>().ok())
        {
            if scale.is_finite() && scale > 0.0 {
                config.typing_scale = scale.min(10.0);
            }
        }

        config
    }

    /// Scale a script delay, keeping a floor so the typing indicator still
    /// flashes even in sped-up runs.
    pub fn scaled_delay_ms(&self, base_ms: u32) -> u32 {
        let scaled = (base_ms as f32 * self.typing_scale) as u32;
        scaled.max(MIN_STEP_DELAY_MS)
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "AMBOJA_PROFILE" => option_env!("AMBOJA_PROFILE"),
        "AMBOJA_DEFAULT_EMAIL" => option_env!("AMBOJA_DEFAULT_EMAIL"),
        "AMBOJA_TYPING_SCALE" => option_env!("AMBOJA_TYPING_SCALE"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_delay_keeps_a_floor() {
        let mut config = AppConfig::default();
        config.typing_scale = 0.001;
        assert_eq!(config.scaled_delay_ms(2_000), MIN_STEP_DELAY_MS);

        config.typing_scale = 0.5;
        assert_eq!(config.scaled_delay_ms(2_000), 1_000);
    }

    #[test]
    fn profile_parses_prod_aliases() {
        assert_eq!(
            AppProfile::from_env(Some("production".into())),
            AppProfile::Prod
        );
        assert_eq!(AppProfile::from_env(None), AppProfile::Dev);
    }
}
