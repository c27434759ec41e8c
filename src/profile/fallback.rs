use crate::foundation::error::{FolioError, FolioResult};
use crate::profile::model::Profile;

/// JSON text of the profile compiled into the binary.
pub const EMBEDDED_PROFILE_JSON: &str = include_str!("../../assets/profile.json");

/// Parse the embedded default profile.
pub fn embedded_profile() -> FolioResult<Profile> {
    Profile::from_json_str(EMBEDDED_PROFILE_JSON)
        .map_err(|e| FolioError::load(format!("embedded default profile is malformed: {e}")))
}
