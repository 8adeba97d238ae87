use serde::Deserialize;

/// Pipeline configuration. The pipeline consumes these knobs but does not
/// own secret acquisition; the API key arrives through the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm: LlmSettings,
    pub chunking: ChunkingSettings,
    pub structuring: StructuringSettings,
    pub dedup: DedupSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StructuringSettings {
    pub single_pass_threshold: usize,
    pub advanced_cleaning: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DedupSettings {
    pub similarity_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4-turbo".to_string(),
            temperature: 0.2,
            timeout_secs: 60,
            max_concurrency: 4,
        }
    }
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: 8000,
            chunk_overlap: 200,
        }
    }
}

impl Default for StructuringSettings {
    fn default() -> Self {
        Self {
            single_pass_threshold: 6000,
            advanced_cleaning: false,
        }
    }
}

impl Default for DedupSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.75,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,redraft=debug".to_string(),
            enable_json: false,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            chunking: ChunkingSettings::default(),
            structuring: StructuringSettings::default(),
            dedup: DedupSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Defaults overridden by environment variables where set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            settings.llm.api_key = key;
        }
        if let Ok(model) = std::env::var("REDRAFT_MODEL") {
            settings.llm.model = model;
        }
        if let Some(size) = env_parse("REDRAFT_CHUNK_SIZE") {
            settings.chunking.chunk_size = size;
        }
        if let Some(overlap) = env_parse("REDRAFT_CHUNK_OVERLAP") {
            settings.chunking.chunk_overlap = overlap;
        }
        if let Some(threshold) = env_parse("REDRAFT_SINGLE_PASS_THRESHOLD") {
            settings.structuring.single_pass_threshold = threshold;
        }
        if let Ok(flag) = std::env::var("REDRAFT_ADVANCED_CLEANING") {
            settings.structuring.advanced_cleaning =
                matches!(flag.to_lowercase().as_str(), "1" | "true" | "on");
        }
        if let Some(threshold) = env_parse("REDRAFT_SIMILARITY_THRESHOLD") {
            settings.dedup.similarity_threshold = threshold;
        }
        if let Ok(level) = std::env::var("REDRAFT_LOG_LEVEL") {
            settings.logging.level = level;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            settings.logging.enable_json = format.to_lowercase() == "json";
        }

        settings
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
