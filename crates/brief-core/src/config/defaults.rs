// Single source of truth for all default values.

// --- Chat model ---
pub const DEFAULT_MODEL_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL_NAME: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 400;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "api";
pub const DEFAULT_EMBEDDING_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;

// --- Narrative memory / retrieval ---
pub const DEFAULT_MEMORY_BACKEND: &str = "keyword";
pub const DEFAULT_TOP_K: usize = 3;

// --- Prompts ---
pub const DEFAULT_SYSTEM_ROLE: &str = "You are a helpful marketing analyst.";
pub const DEFAULT_PROMPT_TONE: &str = "executive";

// --- Insight rules ---
pub const DEFAULT_ANOMALY_DROP: f64 = 0.15;
pub const DEFAULT_ACCELERATION_RISE: f64 = 0.20;
pub const DEFAULT_HIGH_ROAS: f64 = 4.0;
pub const DEFAULT_CONVERSION_FLOOR: f64 = 1.0;

// --- Environment credential overrides ---
pub const ENV_MODEL_API_KEY: &str = "BRIEF_API_KEY";
pub const ENV_EMBEDDING_API_KEY: &str = "BRIEF_EMBEDDING_API_KEY";
