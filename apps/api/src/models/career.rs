use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of career paths every analysis carries.
pub const CAREER_PATH_COUNT: usize = 3;
/// Number of roadmap steps every analysis carries.
pub const ROADMAP_STEP_COUNT: usize = 5;
pub const MIN_RECOMMENDATIONS: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Difficulty tier shown on courses and certifications.
///
/// Deserialization is lenient: providers answer with "beginner",
/// "Beginner/Intermediate", "ADVANCED" and similar. The first recognised tier
/// wins; anything unrecognised is treated as `Beginner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        let lower = raw.to_lowercase();
        [
            ("beginner", Difficulty::Beginner),
            ("intermediate", Difficulty::Intermediate),
            ("advanced", Difficulty::Advanced),
            ("expert", Difficulty::Expert),
        ]
        .into_iter()
        .filter_map(|(word, tier)| lower.find(word).map(|pos| (pos, tier)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, tier)| tier)
        .unwrap_or(Difficulty::Beginner)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub growth_prospect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub url: String,
}

/// Certifications share the course shape. Older clients send `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(alias = "name")]
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub url: String,
}

/// Full career analysis returned by `POST /api/v1/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub career_paths: Vec<CareerPath>,
    pub selected_path: CareerPath,
    pub roadmap: Vec<RoadmapStep>,
    pub courses: Vec<Course>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("expected 3 career paths, found {0}")]
    CareerPathCount(usize),

    #[error("career path '{0}' has no required skills")]
    EmptyRequiredSkills(String),

    #[error("expected 5 roadmap steps, found {0}")]
    RoadmapLength(usize),

    #[error("roadmap step at position {position} is numbered {found}")]
    RoadmapNumbering { position: usize, found: u32 },

    #[error("expected 3-5 courses, found {0}")]
    CourseCount(usize),

    #[error("expected 3-5 certifications, found {0}")]
    CertificationCount(usize),
}

impl AnalysisResult {
    /// Checks the shape every analysis must have before it leaves the service:
    /// 3 paths, 5 roadmap steps numbered 1..=5 in order, 3–5 courses and
    /// 3–5 certifications.
    ///
    /// Required-skill emptiness is only enforced with `strict_skills`, since
    /// provider output is allowed to omit them.
    pub fn validate(&self, strict_skills: bool) -> Result<(), InvariantViolation> {
        if self.career_paths.len() != CAREER_PATH_COUNT {
            return Err(InvariantViolation::CareerPathCount(self.career_paths.len()));
        }
        if strict_skills {
            if let Some(path) = self
                .career_paths
                .iter()
                .chain(std::iter::once(&self.selected_path))
                .find(|p| p.required_skills.is_empty())
            {
                return Err(InvariantViolation::EmptyRequiredSkills(path.title.clone()));
            }
        }
        if self.roadmap.len() != ROADMAP_STEP_COUNT {
            return Err(InvariantViolation::RoadmapLength(self.roadmap.len()));
        }
        for (idx, step) in self.roadmap.iter().enumerate() {
            if step.step as usize != idx + 1 {
                return Err(InvariantViolation::RoadmapNumbering {
                    position: idx + 1,
                    found: step.step,
                });
            }
        }
        let recommended = MIN_RECOMMENDATIONS..=MAX_RECOMMENDATIONS;
        if !recommended.contains(&self.courses.len()) {
            return Err(InvariantViolation::CourseCount(self.courses.len()));
        }
        if !recommended.contains(&self.certifications.len()) {
            return Err(InvariantViolation::CertificationCount(
                self.certifications.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(title: &str) -> CareerPath {
        CareerPath {
            title: title.to_string(),
            description: "d".to_string(),
            required_skills: vec!["Rust".to_string()],
            salary_range: "₹1 lakhs - ₹2 lakhs".to_string(),
            growth_prospect: "High".to_string(),
        }
    }

    fn course(n: usize) -> Course {
        Course {
            title: format!("Course {n}"),
            provider: "YouTube".to_string(),
            duration: "4 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            url: "https://example.com".to_string(),
        }
    }

    fn cert(n: usize) -> Certification {
        Certification {
            title: format!("Cert {n}"),
            provider: "Vendor".to_string(),
            duration: "6 weeks".to_string(),
            difficulty: Difficulty::Intermediate,
            url: "https://example.com".to_string(),
        }
    }

    fn valid_result() -> AnalysisResult {
        AnalysisResult {
            career_paths: vec![path("A"), path("B"), path("C")],
            selected_path: path("B"),
            roadmap: (1..=5)
                .map(|n| RoadmapStep {
                    step: n,
                    title: format!("Step {n}"),
                    description: String::new(),
                    duration: "1-2 weeks".to_string(),
                    resources: vec![],
                })
                .collect(),
            courses: (0..3).map(course).collect(),
            certifications: (0..3).map(cert).collect(),
        }
    }

    #[test]
    fn test_difficulty_lenient_parsing() {
        assert_eq!(Difficulty::from("beginner".to_string()), Difficulty::Beginner);
        assert_eq!(Difficulty::from("ADVANCED".to_string()), Difficulty::Advanced);
        assert_eq!(
            Difficulty::from("Intermediate/Advanced".to_string()),
            Difficulty::Intermediate
        );
        assert_eq!(Difficulty::from("whatever".to_string()), Difficulty::Beginner);
    }

    #[test]
    fn test_difficulty_serializes_as_label() {
        let json = serde_json::to_string(&Difficulty::Expert).unwrap();
        assert_eq!(json, r#""Expert""#);
        let back: Difficulty = serde_json::from_str(r#""expert level""#).unwrap();
        assert_eq!(back, Difficulty::Expert);
    }

    #[test]
    fn test_certification_accepts_name_alias() {
        let json = r#"{"name": "AWS SAA", "provider": "AWS", "duration": "8 weeks",
                       "difficulty": "Intermediate", "url": "https://aws.amazon.com"}"#;
        let cert: Certification = serde_json::from_str(json).unwrap();
        assert_eq!(cert.title, "AWS SAA");
    }

    #[test]
    fn test_valid_result_passes() {
        assert_eq!(valid_result().validate(true), Ok(()));
    }

    #[test]
    fn test_wrong_path_count_fails() {
        let mut result = valid_result();
        result.career_paths.pop();
        assert_eq!(
            result.validate(false),
            Err(InvariantViolation::CareerPathCount(2))
        );
    }

    #[test]
    fn test_misnumbered_roadmap_fails() {
        let mut result = valid_result();
        result.roadmap[2].step = 7;
        assert_eq!(
            result.validate(false),
            Err(InvariantViolation::RoadmapNumbering {
                position: 3,
                found: 7
            })
        );
    }

    #[test]
    fn test_too_many_courses_fails() {
        let mut result = valid_result();
        result.courses = (0..6).map(course).collect();
        assert_eq!(result.validate(false), Err(InvariantViolation::CourseCount(6)));
    }

    #[test]
    fn test_empty_required_skills_only_fails_when_strict() {
        let mut result = valid_result();
        result.career_paths[0].required_skills.clear();
        assert!(result.validate(false).is_ok());
        assert_eq!(
            result.validate(true),
            Err(InvariantViolation::EmptyRequiredSkills("A".to_string()))
        );
    }
}
