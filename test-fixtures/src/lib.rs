//! Test fixture loader for patnet scenario datasets.
//!
//! Scenarios are JSON pipeline inputs (`patents`, `mentions`, `aliases`)
//! under `test-fixtures/scenarios/`, shared by integration tests across
//! crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("scenarios").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/scenarios from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Raw text of a fixture, for APIs that parse JSON themselves.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load a scenario by name, e.g. `scenario::<PipelineInput>("j_smith")`.
pub fn scenario<T: DeserializeOwned>(name: &str) -> T {
    load_fixture(&format!("scenarios/{name}.json"))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use patnet_core::models::{AliasEdge, PatentRecord, RawMention};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Scenario {
        patents: Vec<PatentRecord>,
        mentions: Vec<RawMention>,
        #[serde(default)]
        aliases: Vec<AliasEdge>,
    }

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_scenario_files_exist() {
        for name in [
            "j_smith",
            "triangle_team",
            "gap_year",
            "cyclic_aliases",
            "alias_chain",
        ] {
            let f = format!("scenarios/{name}.json");
            assert!(fixture_exists(&f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_scenario_parses_into_records() {
        let files = list_fixtures("scenarios");
        assert_eq!(files.len(), 5);
        for file in &files {
            let content = std::fs::read_to_string(file).unwrap();
            let s: Scenario = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", file.display(), e));
            assert!(!s.patents.is_empty(), "{} has no patents", file.display());
            assert!(!s.mentions.is_empty(), "{} has no mentions", file.display());
            for row in &s.aliases {
                assert!(
                    !row.observed_name.trim().is_empty() && !row.canonical_form.trim().is_empty(),
                    "{}: alias row with an empty side",
                    file.display()
                );
            }
        }
    }

    #[test]
    fn mentions_reference_listed_patents() {
        for file in list_fixtures("scenarios") {
            let s: Scenario = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
            for m in &s.mentions {
                assert!(
                    s.patents.iter().any(|p| p.patent_id == m.patent_id),
                    "{}: mention on unknown patent {}",
                    file.display(),
                    m.patent_id
                );
            }
        }
    }
}
