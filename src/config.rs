//! Client Configuration

/// Default store location (json-server style dev backend)
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Amount added by one click on "Donate $10"
pub const DEFAULT_DONATION_STEP: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ShelterConfig {
    /// Base URL of the store, without trailing slash
    pub api_base: String,
    pub donation_step: u32,
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            donation_step: DEFAULT_DONATION_STEP,
        }
    }
}

impl ShelterConfig {
    /// Config baked in at build time.
    ///
    /// `SHELTER_API_BASE` overrides the store location.
    pub fn from_build_env() -> Self {
        match option_env!("SHELTER_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::default().with_api_base(base),
            _ => Self::default(),
        }
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim().trim_end_matches('/').to_string();
        self
    }

    /// `{base}/animals`
    pub fn collection_url(&self) -> String {
        format!("{}/animals", self.api_base)
    }
}
