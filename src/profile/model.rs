use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use crate::foundation::error::{FolioError, FolioResult};

/// Root record driving every page section.
///
/// Fields absent from the JSON document deserialize to their empty value; sections decide
/// for themselves which of those are required.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub personal: Personal,
    #[serde(default)]
    pub summary: String,
    /// Skill names grouped by category key, in document order.
    #[serde(default)]
    pub skills: SkillGroups,
    /// Work history, most recent first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<Resume>,
}

/// Identity and contact details.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Personal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Local phone number, without country prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email addresses; the first one is primary.
    #[serde(default)]
    pub emails: Vec<String>,
    /// External profile identifier shown on the contact card.
    #[serde(
        default,
        rename = "linkedin",
        alias = "external_profile",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_profile: Option<String>,
}

impl Personal {
    /// Primary email address, if any non-blank one is listed.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .first()
            .map(String::as_str)
            .filter(|e| !e.trim().is_empty())
    }
}

/// One named skill category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillGroup {
    /// Category key as written in the document, e.g. `programming_languages`.
    pub key: String,
    pub items: Vec<String>,
}

/// Ordered mapping of category key to skill names.
///
/// Serialized as a JSON object; key order is preserved exactly as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillGroups(pub Vec<SkillGroup>);

impl SkillGroups {
    pub fn iter(&self) -> impl Iterator<Item = &SkillGroup> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the lengths of all category lists.
    pub fn total(&self) -> usize {
        self.0.iter().map(|g| g.items.len()).sum()
    }
}

impl serde::Serialize for SkillGroups {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for g in &self.0 {
            map.serialize_entry(&g.key, &g.items)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for SkillGroups {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = SkillGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping skill categories to lists of names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, items)) = access.next_entry::<String, Vec<String>>()? {
                    groups.push(SkillGroup { key, items });
                }
                Ok(SkillGroups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

/// One work-history entry.
///
/// An entry narrates its work either through flat `description` bullets or through nested
/// `projects`; when both are present both are rendered.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<SubProject>,
    /// Technology tags for the entry as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
}

impl Experience {
    /// Technology tags: the entry's own list when present, otherwise its sub-projects' lists
    /// flattened in order.
    pub fn tech_tags(&self) -> Vec<&str> {
        match &self.tech_stack {
            Some(tags) => tags.iter().map(String::as_str).collect(),
            None => self
                .projects
                .iter()
                .flat_map(|p| p.tech_stack.iter().map(String::as_str))
                .collect(),
        }
    }
}

/// Sub-project nested under an [`Experience`] entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubProject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,
}

/// Standalone project summary.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_contributions: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// One education entry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Status label, e.g. "Pursuing".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Result label, e.g. a grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Education {
    /// Duration, status and result joined with ` · `, skipping blanks.
    pub fn info_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.duration, &self.status, &self.result]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.trim().is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

/// Downloadable resume asset.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Resume {
    /// File name or URL.
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub download_label: String,
}

impl Profile {
    /// Parse a profile from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse profile JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        serde_json::from_str(s).map_err(|e| FolioError::serde(format!("parse profile JSON: {e}")))
    }

    /// Parse a profile from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::load(format!("open profile JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Strict check that every field some section requires is present.
    ///
    /// Rendering does not call this: sections degrade individually instead.
    pub fn validate(&self) -> FolioResult<()> {
        require(&self.personal.name, "personal.name")?;
        require(&self.personal.role, "personal.role")?;

        for (i, exp) in self.experience.iter().enumerate() {
            require(&exp.company, &format!("experience[{i}].company"))?;
            require(&exp.role, &format!("experience[{i}].role"))?;
            require(&exp.duration, &format!("experience[{i}].duration"))?;
            for (j, sub) in exp.projects.iter().enumerate() {
                require(&sub.name, &format!("experience[{i}].projects[{j}].name"))?;
            }
        }

        for (i, p) in self.projects.iter().enumerate() {
            require(&p.title, &format!("projects[{i}].title"))?;
            require(&p.description, &format!("projects[{i}].description"))?;
        }

        for (i, e) in self.education.iter().enumerate() {
            require(&e.degree, &format!("education[{i}].degree"))?;
            require(&e.institution, &format!("education[{i}].institution"))?;
        }

        if let Some(resume) = &self.resume {
            require(&resume.file, "resume.file")?;
        }

        for g in self.skills.iter() {
            if g.key.trim().is_empty() {
                return Err(FolioError::validation("skill category key must be non-empty"));
            }
        }

        Ok(())
    }
}

/// Fail with [`FolioError::MissingField`] when `value` is blank.
pub(crate) fn require(value: &str, path: &str) -> FolioResult<()> {
    if value.trim().is_empty() {
        return Err(FolioError::missing_field(path));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_groups_keep_document_order() {
        let p = Profile::from_json_str(
            r#"{"skills": {"zeta": ["a"], "alpha": ["b", "c"], "mid": []}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = p.skills.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(p.skills.total(), 3);
    }

    #[test]
    fn skill_groups_serialize_back_in_order() {
        let p = Profile::from_json_str(r#"{"skills": {"b": ["x"], "a": ["y"]}}"#).unwrap();
        let s = serde_json::to_string(&p.skills).unwrap();
        assert_eq!(s, r#"{"b":["x"],"a":["y"]}"#);
    }

    #[test]
    fn tech_tags_prefer_entry_list() {
        let exp = Experience {
            tech_stack: Some(vec!["Rust".into()]),
            projects: vec![SubProject {
                tech_stack: vec!["Go".into()],
                ..SubProject::default()
            }],
            ..Experience::default()
        };
        assert_eq!(exp.tech_tags(), ["Rust"]);
    }

    #[test]
    fn tech_tags_flatten_sub_projects() {
        let exp = Experience {
            projects: vec![
                SubProject {
                    tech_stack: vec!["A".into(), "B".into()],
                    ..SubProject::default()
                },
                SubProject {
                    tech_stack: vec!["C".into()],
                    ..SubProject::default()
                },
            ],
            ..Experience::default()
        };
        assert_eq!(exp.tech_tags(), ["A", "B", "C"]);
    }

    #[test]
    fn education_info_line_joins_present_parts() {
        let e = Education {
            duration: Some("2017 – 2019".into()),
            result: Some("Passed".into()),
            ..Education::default()
        };
        assert_eq!(e.info_line().as_deref(), Some("2017 – 2019 · Passed"));
        assert_eq!(Education::default().info_line(), None);
    }

    #[test]
    fn external_profile_reads_either_key() {
        let a = Profile::from_json_str(r#"{"personal": {"linkedin": "me"}}"#).unwrap();
        let b = Profile::from_json_str(r#"{"personal": {"external_profile": "me"}}"#).unwrap();
        assert_eq!(a.personal.external_profile.as_deref(), Some("me"));
        assert_eq!(a.personal, b.personal);
    }

    #[test]
    fn validate_reports_missing_field_path() {
        let mut p = Profile::default();
        p.personal.name = "Ada".into();
        p.personal.role = "Engineer".into();
        p.projects.push(Project::default());
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("projects[0].title"));
    }

    #[test]
    fn primary_email_skips_blank() {
        let p = Personal {
            emails: vec![" ".into(), "b@example.com".into()],
            ..Personal::default()
        };
        assert_eq!(p.primary_email(), None);
    }
}
