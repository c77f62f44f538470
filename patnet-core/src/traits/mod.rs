pub mod canonicalizer;

pub use canonicalizer::{Canonicalized, ICanonicalizer};
