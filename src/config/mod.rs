mod settings;

pub use settings::{
    ChunkingSettings, DedupSettings, LlmSettings, LoggingSettings, Settings, StructuringSettings,
};
