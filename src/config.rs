use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::foundation::error::{FolioError, FolioResult};
use crate::profile::source::ProfileSource;
use crate::render::sections::RenderContext;

/// Site configuration, read from a JSON file. Every field has a default.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Profile document: a file path or an `http(s)://` URL. `None` uses the embedded profile.
    pub data: Option<String>,
    /// Layout template path. `None` uses the embedded layout.
    pub template: Option<PathBuf>,
    /// Output HTML path.
    pub out: PathBuf,
    /// Footer year.
    pub year: i32,
    /// Country prefix for the phone link.
    pub phone_prefix: String,
    /// Base URL for the external profile link.
    pub profile_url: String,
    /// Value of the "years experience" statistic.
    pub years_experience: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let ctx = RenderContext::default();
        Self {
            data: None,
            template: None,
            out: PathBuf::from("dist/index.html"),
            year: chrono::Local::now().year(),
            phone_prefix: ctx.phone_prefix,
            profile_url: ctx.profile_url,
            years_experience: ctx.years_experience,
        }
    }
}

impl SiteConfig {
    /// Read a config file.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .map_err(|e| FolioError::load(format!("open config '{}': {e}", path.display())))?;
        let cfg: SiteConfig = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| FolioError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check field values.
    pub fn validate(&self) -> FolioResult<()> {
        if self.out.as_os_str().is_empty() {
            return Err(FolioError::validation("config.out must not be empty"));
        }
        if !(1..=9999).contains(&self.year) {
            return Err(FolioError::validation(format!(
                "config.year {} is out of range",
                self.year
            )));
        }
        Ok(())
    }

    /// Where to load the profile from.
    pub fn profile_source(&self) -> ProfileSource {
        match self.data.as_deref() {
            Some(location) if !location.trim().is_empty() => ProfileSource::parse(location),
            _ => ProfileSource::Embedded,
        }
    }

    /// Render-time values derived from this config.
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            year: self.year,
            phone_prefix: self.phone_prefix.clone(),
            profile_url: self.profile_url.clone(),
            years_experience: self.years_experience,
        }
    }
}
