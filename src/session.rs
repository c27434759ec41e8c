use std::path::Path;

use anyhow::Context as _;

use crate::config::SiteConfig;
use crate::foundation::error::FolioResult;
use crate::profile::model::Profile;
use crate::profile::source::{LoadedProfile, ProfileOrigin, load_or_fallback};
use crate::render::coordinator::RenderedPage;
use crate::render::document::Document;
use crate::runtime::{Runtime, RuntimeOptions};

/// Boot sequence for one page: load the profile (with fallback), render every section,
/// then hand out runtimes bound to the finished page.
#[derive(Clone, Debug)]
pub struct Session {
    config: SiteConfig,
    loaded: LoadedProfile,
    page: RenderedPage,
}

impl Session {
    /// Load and render according to `config`.
    ///
    /// An unreachable or malformed profile is replaced by the embedded default. A missing or
    /// malformed layout template is an error.
    #[tracing::instrument(skip_all, fields(source = %config.profile_source()))]
    pub fn open(config: SiteConfig) -> FolioResult<Self> {
        let loaded = load_or_fallback(&config.profile_source())?;
        let document = match &config.template {
            Some(path) => Document::from_path(path)?,
            None => Document::embedded()?,
        };
        let page = RenderedPage::build(&loaded.profile, document, &config.render_context());
        tracing::info!(
            sections = page.report().sections.len(),
            clean = page.report().is_clean(),
            "page rendered"
        );
        Ok(Self {
            config,
            loaded,
            page,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Profile that was rendered.
    pub fn profile(&self) -> &Profile {
        &self.loaded.profile
    }

    /// Where the profile came from.
    pub fn origin(&self) -> &ProfileOrigin {
        &self.loaded.origin
    }

    /// The rendered page.
    pub fn page(&self) -> &RenderedPage {
        &self.page
    }

    /// Write the page to the configured output path, creating parent directories.
    pub fn write(&self) -> FolioResult<&Path> {
        let out = self.config.out.as_path();
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(out, self.page.html())
            .with_context(|| format!("write '{}'", out.display()))?;
        Ok(out)
    }

    /// Attach effects and handlers to the rendered page.
    pub fn attach(&self, options: RuntimeOptions) -> Runtime {
        Runtime::attach(&self.page, options)
    }
}
