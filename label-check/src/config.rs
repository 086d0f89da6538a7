use shared::models::LabelSize;

/// CLI configuration
///
/// # Environment
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LABEL_SIZE | (template's own) | Override the template's label size |
/// | LABEL_SUGGEST_LAYOUT | false | Also emit and validate an auto-layout suggestion |
/// | LOG_LEVEL | warn | tracing max level |
/// | LOG_DIR | (stderr) | Directory for daily rolling log files |
#[derive(Debug, Clone)]
pub struct Config {
    pub label_size: Option<LabelSize>,
    pub suggest_layout: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from environment variables
    ///
    /// An unparseable `LABEL_SIZE` is an error rather than a silent default.
    pub fn from_env() -> anyhow::Result<Self> {
        let label_size: Option<LabelSize> = match std::env::var("LABEL_SIZE") {
            Ok(key) if !key.trim().is_empty() => Some(key.parse()?),
            _ => None,
        };

        Ok(Self {
            label_size,
            suggest_layout: std::env::var("LABEL_SUGGEST_LAYOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        })
    }

    /// Apply command-line flags on top of the environment
    pub fn with_args(mut self, args: &[String]) -> Self {
        if args.iter().any(|a| a == "--suggest") {
            self.suggest_layout = true;
        }
        self
    }
}
