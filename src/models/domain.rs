use serde::{Deserialize, Serialize};

/// A recognized career in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(rename = "requiredSkills", alias = "required_skills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "requiredEducation", alias = "required_education", default)]
    pub required_education: Vec<String>,
}

impl CareerDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            keywords: Vec::new(),
            required_skills: Vec::new(),
            required_education: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.required_skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_education(mut self, education: &[&str]) -> Self {
        self.required_education = education.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// The parts of a user's profile the matcher reads.
///
/// Every field is optional; the onboarding flow fills them in gradually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "hardSkills", alias = "hard_skills", default)]
    pub hard_skills: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(rename = "careerGoal", alias = "career_goal", default)]
    pub career_goal: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "educationLevel", alias = "education_level", default)]
    pub education_level: Option<String>,
}

impl UserProfile {
    /// Helper to get hard skills as a slice, empty when absent
    pub fn skills(&self) -> &[String] {
        self.hard_skills.as_deref().unwrap_or(&[])
    }

    /// Helper to get interests as a slice, empty when absent
    pub fn interest_list(&self) -> &[String] {
        self.interests.as_deref().unwrap_or(&[])
    }

    pub fn goal(&self) -> &str {
        self.career_goal.as_deref().unwrap_or("")
    }

    pub fn bio_text(&self) -> &str {
        self.bio.as_deref().unwrap_or("")
    }

    pub fn education(&self) -> &str {
        self.education_level.as_deref().unwrap_or("")
    }
}

/// A scored career for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch<'a> {
    pub career: &'a CareerDefinition,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Hard ceiling on the number of matches returned for one profile
pub const MAX_RESULTS: usize = 3;

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Added once when the career goal overlaps title or keywords
    pub goal: u32,
    /// Added per matched user skill
    pub skill: u32,
    /// Added per career keyword found in the user's free text
    pub keyword: u32,
    /// Added once for a degree-level user on a degree-requiring career
    pub education: u32,
    /// Result count, capped at `MAX_RESULTS`
    pub max_results: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            goal: 50,
            skill: 10,
            keyword: 5,
            education: 5,
            max_results: MAX_RESULTS,
        }
    }
}
