pub mod fixtures;
pub mod utils;

pub use fixtures::FixtureLoader;
pub use utils::*;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Test configuration constants
pub mod constants {
    /// Fields left out of fixture comparisons. Flag descriptions are prose
    /// and may be reworded without changing behaviour.
    pub const IGNORED_FIELDS: &[&str] = &["description"];
}

/// Loader rooted at this crate's `fixtures/` directory.
pub fn fixtures() -> FixtureLoader {
    FixtureLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))
}

/// Loads the raw RPC result stored at `path`.
pub fn load_response(path: &str) -> Result<Value> {
    fixtures().load(path)
}

/// Serializes `actual` and compares it with the expected fixture at `path`,
/// printing a colored report on mismatch.
pub fn assert_matches_fixture<T: Serialize + ?Sized>(actual: &T, path: &str) -> Result<()> {
    let expected = fixtures().load(path)?;
    let actual = serde_json::to_value(actual).context("Failed to serialize normalized record")?;

    let comparison = compare_json(&actual, &expected, constants::IGNORED_FIELDS);
    if !comparison.is_match() {
        println!("{}", comparison.report(path));
        anyhow::bail!(
            "{} difference(s) against fixture {}",
            comparison.differences().len(),
            path
        );
    }
    Ok(())
}
