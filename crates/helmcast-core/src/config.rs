use url::Url;

/// Default base URL for the OpenWeather geocoding + forecast endpoints.
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org";

/// Default base URL for the chat-completion endpoint.
pub const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com";

/// Default chat-completion model identifier.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Weather-provider settings (one key covers geocoding and forecasts).
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key for the weather provider (`OPENWEATHER_API_KEY`)
    pub api_key: String,

    /// Base URL for both weather endpoints (`HELMCAST_WEATHER_URL`)
    pub base_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

/// Completion-provider settings.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// API key for the completion provider (`OPENAI_API_KEY`)
    pub api_key: String,

    /// Base URL for the completion endpoint (`HELMCAST_COMPLETION_URL`)
    pub base_url: String,

    /// Model identifier sent with every completion request
    /// (`HELMCAST_COMPLETION_MODEL`)
    pub model: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_COMPLETION_URL.to_string(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Weather provider (geocoding + forecast) settings
    pub weather: WeatherConfig,

    /// Completion provider settings
    pub advisor: AdvisorConfig,
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Missing credentials are kept as empty strings; the planner turns them
    /// into a hard precondition failure before any network call is made.
    pub fn from_env() -> Self {
        Self {
            weather: WeatherConfig {
                api_key: std::env::var("OPENWEATHER_API_KEY").unwrap_or_default(),
                base_url: env_or("HELMCAST_WEATHER_URL", DEFAULT_WEATHER_URL),
            },
            advisor: AdvisorConfig {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: env_or("HELMCAST_COMPLETION_URL", DEFAULT_COMPLETION_URL),
                model: env_or("HELMCAST_COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
            },
        }
    }

    /// Name of the first missing credential, or `None` when both are set.
    pub fn missing_credential(&self) -> Option<&'static str> {
        if self.weather.api_key.trim().is_empty() {
            Some("weather")
        } else if self.advisor.api_key.trim().is_empty() {
            Some("completion")
        } else {
            None
        }
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings. Missing
    /// credentials are warnings here: the pipeline reports them as its own
    /// precondition failure.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);
        self.validate_url(&self.advisor.base_url, "advisor.base_url", &mut result);

        if self.weather.api_key.trim().is_empty() {
            result.add_warning(
                "weather.api_key",
                "OPENWEATHER_API_KEY is not set - forecast lookups will fail",
            );
        }

        if self.advisor.api_key.trim().is_empty() {
            result.add_warning(
                "advisor.api_key",
                "OPENAI_API_KEY is not set - advice generation will fail",
            );
        }

        if self.advisor.model.trim().is_empty() {
            result.add_error("advisor.model", "Completion model must not be empty");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
