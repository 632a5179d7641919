//! Skill and role catalogs — the fixed keyword universe every scoring pass runs against.
//!
//! A `Catalog` is built once at startup (built-in defaults or a JSON file) and
//! never mutated afterwards. Keywords go through the same normalization as
//! resume text (lowercase, single spaces) so they compare directly against it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AnalysisError;
use crate::text::normalize;

pub const BUILTIN_CATALOG_VERSION: &str = "builtin-1";

const BUILTIN_SKILLS: &[&str] = &[
    "python",
    "django",
    "java",
    "spring",
    "javascript",
    "react",
    "node",
    "mongodb",
    "sql",
    "docker",
    "aws",
];

const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    ("Backend Developer", &["python", "django", "sql", "api"]),
    ("Frontend Developer", &["javascript", "react", "html", "css"]),
    ("Full Stack Developer", &["python", "django", "react", "sql"]),
    ("Java Developer", &["java", "spring", "hibernate"]),
    ("DevOps Engineer", &["docker", "aws", "kubernetes"]),
];

/// Ordered, deduplicated list of recognized skill keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    pub fn new<I, S>(skills: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            skills: clean_keywords(skills, "skill catalog")?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// A job role and the skills it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    name: String,
    required_skills: Vec<String>,
}

impl RoleDefinition {
    /// Fails when the name is blank or no required skill remains after cleaning.
    pub fn new<I, S>(name: impl Into<String>, required_skills: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(AnalysisError::Catalog("role name cannot be empty".to_string()));
        }
        let required_skills = clean_keywords(required_skills, &name)?;
        if required_skills.is_empty() {
            return Err(AnalysisError::Catalog(format!(
                "role '{name}' must require at least one skill"
            )));
        }
        Ok(Self {
            name,
            required_skills,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_skills(&self) -> &[String] {
        &self.required_skills
    }
}

/// Ordered sequence of roles. Order matters for skill-gap tie breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleCatalog {
    roles: Vec<RoleDefinition>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<RoleDefinition>) -> Result<Self, AnalysisError> {
        for (i, role) in roles.iter().enumerate() {
            if roles[..i]
                .iter()
                .any(|r| r.name.eq_ignore_ascii_case(&role.name))
            {
                return Err(AnalysisError::Catalog(format!(
                    "duplicate role '{}'",
                    role.name
                )));
            }
        }
        Ok(Self { roles })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// A versioned skill + role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    pub version: String,
    pub skills: SkillCatalog,
    pub roles: RoleCatalog,
}

#[derive(Deserialize)]
struct RawCatalog {
    version: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    roles: Vec<RawRole>,
}

#[derive(Deserialize)]
struct RawRole {
    name: String,
    required_skills: Vec<String>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = AnalysisError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let version = raw.version.trim().to_string();
        if version.is_empty() {
            return Err(AnalysisError::Catalog(
                "catalog version cannot be empty".to_string(),
            ));
        }
        let roles = raw
            .roles
            .into_iter()
            .map(|r| RoleDefinition::new(r.name, r.required_skills))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog {
            version,
            skills: SkillCatalog::new(raw.skills)?,
            roles: RoleCatalog::new(roles)?,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            version: BUILTIN_CATALOG_VERSION.to_string(),
            skills: SkillCatalog {
                skills: BUILTIN_SKILLS.iter().map(|s| s.to_string()).collect(),
            },
            roles: RoleCatalog {
                roles: BUILTIN_ROLES
                    .iter()
                    .map(|(name, skills)| RoleDefinition {
                        name: name.to_string(),
                        required_skills: skills.iter().map(|s| s.to_string()).collect(),
                    })
                    .collect(),
            },
        }
    }
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(json).map_err(|e| AnalysisError::Catalog(e.to_string()))
    }

    /// Reads and validates a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("Invalid catalog file '{}'", path.display()))?;

        info!(
            version = %catalog.version,
            skills = catalog.skills.len(),
            roles = catalog.roles.len(),
            "Loaded resume catalog from {}",
            path.display()
        );
        Ok(catalog)
    }
}

/// Normalizes keywords the same way resume text is normalized, drops repeats
/// (first occurrence wins) and rejects blanks.
fn clean_keywords<I, S>(keywords: I, owner: &str) -> Result<Vec<String>, AnalysisError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: Vec<String> = Vec::new();
    for kw in keywords {
        let kw = normalize(kw.as_ref());
        if kw.is_empty() {
            return Err(AnalysisError::Catalog(format!(
                "{owner} contains an empty keyword"
            )));
        }
        if cleaned.contains(&kw) {
            warn!(keyword = %kw, owner, "Dropping duplicate catalog keyword");
            continue;
        }
        cleaned.push(kw);
    }
    Ok(cleaned)
}
