//! Build metadata injected into the dispatcher
//!
//! Values come from the compile-time environment:
//! - `VIZVAULT_VERSION` (default `dev`)
//! - `VIZVAULT_COMMIT` (default `unknown`)
//! - `VIZVAULT_BUILD_DATE` (default `unknown`)
//!
//! e.g. `VIZVAULT_VERSION=1.2.3 VIZVAULT_COMMIT=$(git rev-parse --short HEAD) cargo build --release`

use std::fmt;

pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_COMMIT: &str = "unknown";
pub const DEFAULT_BUILD_DATE: &str = "unknown";

/// Identifies the compiled binary. Fields are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    commit: String,
    build_date: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.into(),
            commit: DEFAULT_COMMIT.into(),
            build_date: DEFAULT_BUILD_DATE.into(),
        }
    }
}

impl BuildInfo {
    /// Create build info from explicit values.
    ///
    /// Empty values fall back to the defaults.
    pub fn new(
        version: impl Into<String>,
        commit: impl Into<String>,
        build_date: impl Into<String>,
    ) -> Self {
        Self {
            version: non_empty_or(version.into(), DEFAULT_VERSION),
            commit: non_empty_or(commit.into(), DEFAULT_COMMIT),
            build_date: non_empty_or(build_date.into(), DEFAULT_BUILD_DATE),
        }
    }

    /// Build info baked in by the compiler.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("VIZVAULT_VERSION").unwrap_or_default(),
            option_env!("VIZVAULT_COMMIT").unwrap_or_default(),
            option_env!("VIZVAULT_BUILD_DATE").unwrap_or_default(),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn build_date(&self) -> &str {
        &self.build_date
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VizVault {} ({}) built at {}",
            self.version, self.commit, self.build_date
        )
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_defaults_when_display_then_uses_placeholders() {
        let info = BuildInfo::default();
        assert_eq!(info.to_string(), "VizVault dev (unknown) built at unknown");
    }

    #[test]
    fn given_explicit_values_when_display_then_embeds_them() {
        let info = BuildInfo::new("1.2.3", "abcd", "2024-01-01");
        assert_eq!(info.to_string(), "VizVault 1.2.3 (abcd) built at 2024-01-01");
    }

    #[rstest]
    #[case("", "abcd", "2024-01-01", "dev", "abcd", "2024-01-01")]
    #[case("1.2.3", "", "2024-01-01", "1.2.3", "unknown", "2024-01-01")]
    #[case("1.2.3", "abcd", "  ", "1.2.3", "abcd", "unknown")]
    fn given_empty_field_when_new_then_falls_back_to_default(
        #[case] version: &str,
        #[case] commit: &str,
        #[case] build_date: &str,
        #[case] want_version: &str,
        #[case] want_commit: &str,
        #[case] want_build_date: &str,
    ) {
        let info = BuildInfo::new(version, commit, build_date);
        assert_eq!(info.version(), want_version);
        assert_eq!(info.commit(), want_commit);
        assert_eq!(info.build_date(), want_build_date);
    }

    #[test]
    fn given_build_env_when_loaded_then_no_field_is_empty() {
        let info = BuildInfo::from_build_env();
        assert!(!info.version().is_empty());
        assert!(!info.commit().is_empty());
        assert!(!info.build_date().is_empty());
    }
}
