use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::models::CareerDefinition;

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Career at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Career {0} has an empty title")]
    EmptyTitle(String),

    #[error("Duplicate career id: {0}")]
    DuplicateId(String),
}

/// TOML layout: a list of `[[careers]]` tables
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    careers: Vec<CareerDefinition>,
}

/// Immutable, validated set of careers
///
/// Built once at startup and shared by reference; there is no reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    careers: Vec<CareerDefinition>,
}

impl Catalog {
    /// Validate and wrap a list of careers. An empty list is allowed.
    pub fn new(careers: Vec<CareerDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(careers.len());

        for (position, career) in careers.iter().enumerate() {
            if career.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if career.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(career.id.clone()));
            }
            if !seen.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateId(career.id.clone()));
            }
        }

        Ok(Self { careers })
    }

    /// Parse a catalog from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogDocument = toml::from_str(document)?;
        Self::new(parsed.careers)
    }

    /// Load a catalog from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let document = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_toml_str(&document)?;

        tracing::info!(
            "Loaded {} careers from {}",
            catalog.len(),
            path.as_ref().display()
        );

        Ok(catalog)
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Self {
        Self {
            careers: builtin_careers(),
        }
    }

    pub fn careers(&self) -> &[CareerDefinition] {
        &self.careers
    }

    pub fn get(&self, id: &str) -> Option<&CareerDefinition> {
        self.careers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

impl AsRef<[CareerDefinition]> for Catalog {
    fn as_ref(&self) -> &[CareerDefinition] {
        &self.careers
    }
}

fn builtin_careers() -> Vec<CareerDefinition> {
    vec![
        CareerDefinition::new("software-developer", "Software Developer")
            .with_keywords(&["tech", "coding", "programming", "software", "computers"])
            .with_skills(&["JavaScript", "Python", "React", "SQL", "Git"])
            .with_education(&["Bachelor's Degree in Computer Science", "Coding Bootcamp"]),
        CareerDefinition::new("data-analyst", "Data Analyst")
            .with_keywords(&["data", "statistics", "analysis", "numbers", "research"])
            .with_skills(&["Excel", "SQL", "Python", "Power BI", "Statistics"])
            .with_education(&["Bachelor's Degree in Statistics or Mathematics"]),
        CareerDefinition::new("registered-nurse", "Registered Nurse")
            .with_keywords(&["health", "medicine", "caring", "hospital", "patients"])
            .with_skills(&["Patient Care", "First Aid", "Communication", "Empathy"])
            .with_education(&["Bachelor's Degree in Nursing", "Nursing Diploma"]),
        CareerDefinition::new("graphic-designer", "Graphic Designer")
            .with_keywords(&["art", "design", "creative", "drawing", "branding"])
            .with_skills(&["Photoshop", "Illustrator", "Figma", "Typography"])
            .with_education(&["Diploma in Graphic Design", "Portfolio"]),
        CareerDefinition::new("accountant", "Accountant")
            .with_keywords(&["finance", "money", "accounting", "business", "numbers"])
            .with_skills(&["Excel", "Bookkeeping", "Financial Reporting", "Tax"])
            .with_education(&["Bachelor's Degree in Accounting", "CA(SA) Articles"]),
        CareerDefinition::new("teacher", "Teacher")
            .with_keywords(&["education", "teaching", "children", "mentoring", "learning"])
            .with_skills(&["Communication", "Lesson Planning", "Classroom Management"])
            .with_education(&["Bachelor of Education Degree", "PGCE"]),
        CareerDefinition::new("electrician", "Electrician")
            .with_keywords(&["electrical", "hands-on", "trades", "building", "repair"])
            .with_skills(&["Wiring", "Circuit Testing", "Safety Compliance", "Problem Solving"])
            .with_education(&["N3 Certificate", "Trade Test"]),
        CareerDefinition::new("digital-marketer", "Digital Marketer")
            .with_keywords(&["marketing", "social media", "content", "advertising", "brands"])
            .with_skills(&["SEO", "Copywriting", "Social Media", "Google Analytics"])
            .with_education(&["Diploma or Degree in Marketing"]),
        CareerDefinition::new("entrepreneur", "Entrepreneur")
            .with_keywords(&["business", "startup", "sales", "leadership", "innovation"])
            .with_skills(&["Sales", "Budgeting", "Leadership", "Negotiation"])
            .with_education(&["Any qualification"]),
        CareerDefinition::new("civil-engineer", "Civil Engineer")
            .with_keywords(&["engineering", "construction", "infrastructure", "maths", "building"])
            .with_skills(&["AutoCAD", "Project Management", "Mathematics", "Surveying"])
            .with_education(&["Bachelor's Degree in Civil Engineering", "ECSA Registration"]),
    ]
}
