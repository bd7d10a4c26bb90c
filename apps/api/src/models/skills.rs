use serde::{Deserialize, Serialize};

/// Self-reported or inferred proficiency. Serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExpertiseLevel {
    /// Case-insensitive recognition of free-form expertise text such as
    /// "Beginner", "intermediate level" or "Advanced developer".
    /// Returns `None` when no tier word is present.
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.to_lowercase();
        if lower.contains("expert") {
            Some(ExpertiseLevel::Expert)
        } else if lower.contains("advanced") {
            Some(ExpertiseLevel::Advanced)
        } else if lower.contains("intermediate") {
            Some(ExpertiseLevel::Intermediate)
        } else if lower.contains("beginner") {
            Some(ExpertiseLevel::Beginner)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertiseLevel::Beginner => "beginner",
            ExpertiseLevel::Intermediate => "intermediate",
            ExpertiseLevel::Advanced => "advanced",
            ExpertiseLevel::Expert => "expert",
        }
    }
}

impl From<String> for ExpertiseLevel {
    fn from(raw: String) -> Self {
        ExpertiseLevel::parse(&raw).unwrap_or(ExpertiseLevel::Beginner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    /// Canonical display form, e.g. "JavaScript".
    pub skill: String,
    pub expertise_level: ExpertiseLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillExtractionResult {
    pub extracted_skills: Vec<ExtractedSkill>,
    /// Comma-joined, case-insensitively deduplicated union of the prior skills
    /// and the extracted ones.
    pub updated_skills: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expertise_free_text() {
        assert_eq!(
            ExpertiseLevel::parse("Intermediate developer"),
            Some(ExpertiseLevel::Intermediate)
        );
        assert_eq!(ExpertiseLevel::parse("EXPERT"), Some(ExpertiseLevel::Expert));
        assert_eq!(ExpertiseLevel::parse("some years"), None);
    }

    #[test]
    fn test_expertise_level_serializes_lowercase() {
        let skill = ExtractedSkill {
            skill: "Rust".to_string(),
            expertise_level: ExpertiseLevel::Advanced,
        };
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["expertise_level"], "advanced");
    }

    #[test]
    fn test_unknown_level_deserializes_as_beginner() {
        let skill: ExtractedSkill =
            serde_json::from_str(r#"{"skill": "Go", "expertise_level": "dabbling"}"#).unwrap();
        assert_eq!(skill.expertise_level, ExpertiseLevel::Beginner);
    }
}
