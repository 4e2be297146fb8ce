use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// A profile field the matcher reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    CareerGoal,
    HardSkills,
    Interests,
    Bio,
    EducationLevel,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::CareerGoal,
        ProfileField::HardSkills,
        ProfileField::Interests,
        ProfileField::Bio,
        ProfileField::EducationLevel,
    ];

    fn is_filled(self, profile: &UserProfile) -> bool {
        match self {
            ProfileField::CareerGoal => !profile.goal().is_empty(),
            ProfileField::HardSkills => profile.skills().iter().any(|s| !s.is_empty()),
            ProfileField::Interests => profile.interest_list().iter().any(|s| !s.is_empty()),
            ProfileField::Bio => !profile.bio_text().is_empty(),
            ProfileField::EducationLevel => !profile.education().is_empty(),
        }
    }
}

/// How much of the matching input a profile provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProgress {
    pub percent: u8,
    pub filled: Vec<ProfileField>,
    pub missing: Vec<ProfileField>,
}

impl ProfileProgress {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Calculate onboarding progress over the fields used for matching
///
/// `percent` rounds down, so a profile only reports 100 when every field is filled.
pub fn profile_progress(profile: &UserProfile) -> ProfileProgress {
    let (filled, missing): (Vec<ProfileField>, Vec<ProfileField>) = ProfileField::ALL
        .into_iter()
        .partition(|field| field.is_filled(profile));

    let percent = (filled.len() * 100 / ProfileField::ALL.len()) as u8;

    ProfileProgress {
        percent,
        filled,
        missing,
    }
}
