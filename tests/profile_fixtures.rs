use folio::{
    Document, FolioError, Profile, RenderContext, RenderedPage, Section, SiteConfig,
};

fn page(profile: &Profile) -> RenderedPage {
    RenderedPage::build(profile, Document::embedded().unwrap(), &RenderContext::default())
}

#[test]
fn minimal_profile_validates_and_renders() {
    let profile = Profile::from_json_str(include_str!("data/minimal_profile.json")).unwrap();
    profile.validate().unwrap();
    assert!(profile.skills.is_empty());
    assert!(profile.resume.is_none());

    let page = page(&profile);
    assert!(page.report().is_clean());
    let html = page.html();
    assert!(html.contains(r#"href="mailto:sam@example.org""#));
    assert!(!html.contains("tel:"));
    assert_eq!(page.stats().unwrap().years, 0);
}

#[test]
fn mixed_experience_renders_bullets_and_sub_projects() {
    let profile = Profile::from_json_str(include_str!("data/mixed_experience.json")).unwrap();
    profile.validate().unwrap();

    let keys: Vec<&str> = profile.skills.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["programming_languages", "observability"]);
    assert_eq!(profile.personal.external_profile.as_deref(), Some("robin-okafor"));

    let page = page(&profile);
    let html = page.html();
    let bullet = html.find("Owns the internal build farm.").unwrap();
    let sub = html.find("<strong>Quickbuild</strong> – Remote build cache.").unwrap();
    assert!(bullet < sub);
    assert!(html.contains(r#"<span class="timeline__tech-tag">Bazel</span>"#));
    assert!(html.contains("2017 – 2021 · First Class"));
    assert!(html.contains("<span>Download Resume</span>"));
    assert!(html.contains(r#"href="tel:+918000000000""#));
    assert!(html.contains("observability"));

    assert_eq!(page.report().items(Section::About), 1);
    assert_eq!(page.report().items(Section::Timeline), 2);
    assert_eq!(page.report().items(Section::Contact), 4);
}

#[test]
fn missing_project_description_fails_validation_but_degrades_render() {
    let profile =
        Profile::from_json_str(include_str!("data/missing_project_description.json")).unwrap();
    let err = profile.validate().unwrap_err();
    assert!(matches!(err, FolioError::MissingField(ref p) if p == "projects[0].description"));

    let page = page(&profile);
    let failures: Vec<Section> = page.report().failures().map(|(s, _)| s).collect();
    assert_eq!(failures, vec![Section::Projects]);
    assert!(page.html().contains("Kim Lee"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Profile::from_json_str(r#"{"personal": {"name": 5}}"#).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));
}

#[test]
fn site_config_fixture_overrides_defaults() {
    let cfg: SiteConfig = serde_json::from_str(include_str!("data/site_config.json")).unwrap();
    cfg.validate().unwrap();
    let ctx = cfg.render_context();
    assert_eq!(ctx.year, 2031);
    assert_eq!(ctx.phone_prefix, "+234");
    assert_eq!(ctx.years_experience, 7);
    assert_eq!(ctx.profile_url, "https://linkedin.com/in/");
}
