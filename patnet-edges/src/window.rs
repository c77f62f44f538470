//! Observation window: the fixed set of calendar years that every edge
//! reports a count for.

use std::collections::BTreeSet;

use patnet_core::config::WindowConfig;

/// Sorted, de-duplicated years. Frozen once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationWindow {
    years: Vec<i32>,
}

impl ObservationWindow {
    /// Window over exactly the given years.
    pub fn explicit(years: impl IntoIterator<Item = i32>) -> Self {
        let years: BTreeSet<i32> = years.into_iter().collect();
        Self {
            years: years.into_iter().collect(),
        }
    }

    /// Contiguous `min..=max` over the years present. Empty input gives an
    /// empty window.
    pub fn inferred(present: impl IntoIterator<Item = i32>) -> Self {
        let mut min = None;
        let mut max = None;
        for y in present {
            min = Some(min.map_or(y, |m: i32| m.min(y)));
            max = Some(max.map_or(y, |m: i32| m.max(y)));
        }
        match (min, max) {
            (Some(lo), Some(hi)) => Self {
                years: (lo..=hi).collect(),
            },
            _ => Self::default(),
        }
    }

    /// Explicit years from config when set, otherwise inferred from `present`.
    pub fn from_config(config: &WindowConfig, present: impl IntoIterator<Item = i32>) -> Self {
        match &config.years {
            Some(years) => Self::explicit(years.iter().copied()),
            None => Self::inferred(present),
        }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    pub fn first(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn last(&self) -> Option<i32> {
        self.years.last().copied()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
