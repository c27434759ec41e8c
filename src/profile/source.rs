use std::path::PathBuf;
use std::time::Duration;

use crate::foundation::error::{FolioError, FolioResult};
use crate::profile::fallback::embedded_profile;
use crate::profile::model::Profile;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a profile document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileSource {
    /// The default profile compiled into the binary.
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document fetched over HTTP(S).
    Url(String),
}

impl ProfileSource {
    /// Interpret a location string: `http://` and `https://` prefixes select [`Self::Url`],
    /// anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Load the document without any fallback.
    pub fn load(&self) -> FolioResult<Profile> {
        match self {
            Self::Embedded => embedded_profile(),
            Self::File(path) => Profile::from_path(path),
            Self::Url(url) => fetch(url),
        }
    }
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Where the profile in use actually came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOrigin {
    /// The requested source.
    Requested(ProfileSource),
    /// The embedded default, substituted after the requested source failed.
    Fallback {
        /// Source that failed.
        requested: ProfileSource,
        /// Why it failed.
        reason: String,
    },
}

/// A profile together with its provenance.
#[derive(Clone, Debug)]
pub struct LoadedProfile {
    /// Profile used for rendering.
    pub profile: Profile,
    /// Provenance.
    pub origin: ProfileOrigin,
}

/// Load `source`, substituting the embedded default on any failure.
///
/// Failure here is never surfaced to the page; it is logged and recorded in the origin.
#[tracing::instrument]
pub fn load_or_fallback(source: &ProfileSource) -> FolioResult<LoadedProfile> {
    match source.load() {
        Ok(profile) => Ok(LoadedProfile {
            profile,
            origin: ProfileOrigin::Requested(source.clone()),
        }),
        Err(e) => {
            tracing::warn!(%source, error = %e, "profile unavailable, using embedded default");
            Ok(LoadedProfile {
                profile: embedded_profile()?,
                origin: ProfileOrigin::Fallback {
                    requested: source.clone(),
                    reason: e.to_string(),
                },
            })
        }
    }
}

fn fetch(url: &str) -> FolioResult<Profile> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let resp = agent
        .get(url)
        .set("Accept", "application/json")
        .call()
        .map_err(|e| FolioError::load(format!("fetch '{url}': {e}")))?;
    Profile::from_reader(resp.into_reader())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "folio_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            ProfileSource::parse("https://example.com/p.json"),
            ProfileSource::Url("https://example.com/p.json".into())
        );
        assert_eq!(
            ProfileSource::parse("data/p.json"),
            ProfileSource::File(PathBuf::from("data/p.json"))
        );
    }

    #[test]
    fn missing_file_falls_back() {
        let src = ProfileSource::File(temp_path("does_not_exist.json"));
        let loaded = load_or_fallback(&src).unwrap();
        assert!(matches!(loaded.origin, ProfileOrigin::Fallback { .. }));
        assert_eq!(loaded.profile, embedded_profile().unwrap());
    }

    #[test]
    fn malformed_file_falls_back() {
        let path = temp_path("malformed.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = load_or_fallback(&ProfileSource::File(path.clone())).unwrap();
        let ProfileOrigin::Fallback { reason, .. } = loaded.origin else {
            panic!("expected fallback");
        };
        assert!(reason.contains("parse profile JSON"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn valid_file_is_used() {
        let path = temp_path("valid.json");
        std::fs::write(&path, r#"{"personal": {"name": "Ada", "role": "Engineer"}}"#).unwrap();
        let loaded = load_or_fallback(&ProfileSource::File(path.clone())).unwrap();
        assert!(matches!(loaded.origin, ProfileOrigin::Requested(_)));
        assert_eq!(loaded.profile.personal.name, "Ada");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unreachable_url_falls_back() {
        // Port 9 (discard) on loopback is not expected to serve HTTP.
        let src = ProfileSource::Url("http://127.0.0.1:9/profile.json".into());
        let loaded = load_or_fallback(&src).unwrap();
        assert!(matches!(loaded.origin, ProfileOrigin::Fallback { .. }));
    }
}
