use crate::models::{CareerDefinition, ScoringWeights, UserProfile};
use crate::core::text::{contains, normalize, normalize_all, overlaps};

/// Qualification markers that make a user eligible for the education bonus
const DEGREE_LEVEL_MARKERS: [&str; 3] = ["degree", "masters", "phd"];

/// Maximum number of matched skills named in the reason text
const MAX_LISTED_SKILLS: usize = 3;

pub const GOAL_REASON: &str = "Matches your primary career goal.";

/// Profile text folded to lowercase once per match call.
#[derive(Debug, Clone)]
pub struct NormalizedProfile<'p> {
    /// (original, lowercase) pairs; original casing is kept for reason text
    skills: Vec<(&'p str, String)>,
    interests: Vec<String>,
    goal: String,
    bio: String,
    degree_level: bool,
}

impl<'p> NormalizedProfile<'p> {
    pub fn new(profile: &'p UserProfile) -> Self {
        let skills = profile
            .skills()
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| (s.as_str(), normalize(s)))
            .collect();

        let education = normalize(profile.education());
        let degree_level = DEGREE_LEVEL_MARKERS
            .iter()
            .any(|marker| contains(&education, marker));

        Self {
            skills,
            interests: normalize_all(profile.interest_list()),
            goal: normalize(profile.goal()),
            bio: normalize(profile.bio_text()),
            degree_level,
        }
    }
}

/// Calculate the score for one career and the reasons behind it
///
/// Scoring rules (weights shown at their defaults):
/// - goal match: +50 once, goal inside the title or a keyword inside the goal
/// - skill overlap: +10 per user skill overlapping any required skill
/// - keyword breadth: +5 per keyword found in interests, skills or bio
/// - education: +5 once, degree-level user and a degree-requiring career
///
/// Only the first two rules produce reason text.
pub fn score_career(
    profile: &NormalizedProfile<'_>,
    career: &CareerDefinition,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let keywords = normalize_all(&career.keywords);
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    if goal_matches(profile, &normalize(&career.title), &keywords) {
        score = score.saturating_add(weights.goal);
        reasons.push(GOAL_REASON.to_string());
    }

    let matched_skills = matched_skills(profile, &normalize_all(&career.required_skills));
    if !matched_skills.is_empty() {
        score = score.saturating_add(weighted(weights.skill, matched_skills.len()));
        let listed: Vec<&str> = matched_skills
            .iter()
            .take(MAX_LISTED_SKILLS)
            .copied()
            .collect();
        reasons.push(format!("Matches skills: {}", listed.join(", ")));
    }

    score = score.saturating_add(weighted(weights.keyword, keyword_breadth(profile, &keywords)));

    if profile.degree_level && requires_degree(career) {
        score = score.saturating_add(weights.education);
    }

    tracing::trace!("Scored career {}: {}", career.id, score);

    (score, reasons)
}

/// Weight times count, saturating at `u32::MAX`
#[inline]
fn weighted(weight: u32, count: usize) -> u32 {
    weight.saturating_mul(u32::try_from(count).unwrap_or(u32::MAX))
}

#[inline]
fn goal_matches(profile: &NormalizedProfile<'_>, title: &str, keywords: &[String]) -> bool {
    if profile.goal.is_empty() {
        return false;
    }

    contains(title, &profile.goal) || keywords.iter().any(|k| contains(&profile.goal, k))
}

/// User skills (original casing, user order) overlapping any required skill.
/// Each user skill counts at most once.
fn matched_skills<'p>(profile: &NormalizedProfile<'p>, required: &[String]) -> Vec<&'p str> {
    profile
        .skills
        .iter()
        .filter(|(_, skill)| required.iter().any(|r| overlaps(r, skill)))
        .map(|(original, _)| *original)
        .collect()
}

fn keyword_breadth(profile: &NormalizedProfile<'_>, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| {
            profile.interests.iter().any(|i| contains(i, keyword))
                || profile.skills.iter().any(|(_, s)| contains(s, keyword))
                || contains(&profile.bio, keyword)
        })
        .count()
}

#[inline]
fn requires_degree(career: &CareerDefinition) -> bool {
    career
        .required_education
        .iter()
        .any(|e| contains(&normalize(e), "degree"))
}
