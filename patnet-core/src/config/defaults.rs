// Single source of truth for all default values.

// --- Organizations ---
pub const DEFAULT_USE_BUILTIN_ALIASES: bool = false;
pub const DEFAULT_CONTEXTUAL_INFERENCE: bool = false;
pub const DEFAULT_INFERENCE_WINDOW: usize = 10;
pub const DEFAULT_INFERENCE_DOMINANCE: f64 = 0.7;

// --- Identity resolution ---
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.55;
pub const DEFAULT_AMBIGUITY_MARGIN: f64 = 0.05;
pub const DEFAULT_MIN_NAME_SIMILARITY: f64 = 0.7;
pub const DEFAULT_NAME_WEIGHT: f64 = 0.60;
pub const DEFAULT_AFFILIATION_WEIGHT: f64 = 0.25;
pub const DEFAULT_COINVENTOR_WEIGHT: f64 = 0.15;
pub const DEFAULT_AFFILIATION_WINDOW_DAYS: i64 = 1_095; // ~3 years
pub const DEFAULT_INITIAL_MATCH_PENALTY: f64 = 0.9;
pub const DEFAULT_MIDDLE_CONFLICT_PENALTY: f64 = 0.8;

// --- Edges ---
pub const DEFAULT_MAX_TEAM_SIZE: Option<usize> = None;

// --- Assembly ---
pub const DEFAULT_VERIFY_EDGE_WEIGHTS: bool = true;
