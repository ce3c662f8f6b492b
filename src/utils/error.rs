use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotationError {
    #[error("Invalid selection: {count} distinct service(s) selected, at least 2 required")]
    InvalidSelection { count: usize },

    #[error("Invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot annotate an empty plan")]
    EmptyPlan,

    #[error("Unknown service id: {id}")]
    UnknownService { id: String },

    #[error("Date out of range: {year}-{month:02}-{day:02}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

impl RotationError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidSelection { count } => format!(
                "A rotation needs at least 2 distinct services, but only {} selected",
                count
            ),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("The value for --{} is invalid: {}", field, reason)
            }
            Self::EmptyPlan => "The rotation plan is empty, nothing to annotate".to_string(),
            Self::UnknownService { id } => format!(
                "'{}' is not in the service catalog; check --services or the catalog file",
                id
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidSelection { .. } => "Pass at least two service ids via --services",
            Self::InvalidConfigValue { .. } => "Run with --help to see valid flag ranges",
            Self::UnknownService { .. } => "Run with --list-services to print the catalog",
            Self::CatalogParseError(_) => "Check the TOML syntax of the catalog file",
            Self::IoError(_) => "Check that the output path exists and is writable",
            _ => "See the log output for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, RotationError>;
