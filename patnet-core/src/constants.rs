/// Prefix for synthetic inventor identifiers.
pub const INVENTOR_ID_PREFIX: &str = "inv_";

/// Number of hex characters of the BLAKE3 digest kept in an inventor id.
pub const INVENTOR_ID_HEX_LEN: usize = 16;

/// Separator between last name and first initial in a blocking signature.
pub const BLOCK_KEY_SEPARATOR: char = '|';

/// Generational suffixes dropped during name parsing.
pub const NAME_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv"];

/// Tolerance used when checking that similarity weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Decimal places kept in an inventor's mean team size.
pub const TEAM_SIZE_DECIMALS: i32 = 2;
