//! Keyword → canonical skill name table for rule-based extraction, plus the
//! word lists used to infer a level from the surrounding message.

use crate::models::skills::ExpertiseLevel;

/// `(lowercase keyword, display name)`. Several keywords may share one display
/// name; table order breaks ties between mentions at the same position.
pub const SKILL_PATTERNS: &[(&str, &str)] = &[
    // Languages
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("java", "Java"),
    ("c#", "C#"),
    ("c++", "C++"),
    ("typescript", "TypeScript"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("golang", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    // Frontend
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("bootstrap", "Bootstrap"),
    ("tailwind", "Tailwind CSS"),
    ("sass", "SASS"),
    ("jquery", "jQuery"),
    // Backend
    ("node.js", "Node.js"),
    ("nodejs", "Node.js"),
    ("express", "Express.js"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring"),
    ("laravel", "Laravel"),
    ("rails", "Ruby on Rails"),
    // Databases
    ("sql", "SQL"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("sqlite", "SQLite"),
    ("redis", "Redis"),
    ("firestore", "Firestore"),
    // DevOps and cloud
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "Google Cloud Platform"),
    ("git", "Git"),
    ("jenkins", "Jenkins"),
    ("terraform", "Terraform"),
    // ML
    ("machine learning", "Machine Learning"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("pandas", "Pandas"),
    ("numpy", "NumPy"),
    ("scikit-learn", "Scikit-learn"),
    // Other
    ("api", "API Development"),
    ("rest", "REST APIs"),
    ("graphql", "GraphQL"),
    ("microservices", "Microservices"),
    ("agile", "Agile"),
    ("scrum", "Scrum"),
];

/// Phrases that suggest the message is about acquiring or having a skill.
pub const TRIGGER_PHRASES: &[&str] = &[
    "learned",
    "learning",
    "studying",
    "know",
    "experience",
    "worked with",
    "using",
    "familiar with",
    "proficient in",
    "skilled in",
    "expert in",
    "mastered",
    "practiced",
];

/// Checked in order; the first tier with a hit decides the level.
const LEVEL_TIERS: &[(ExpertiseLevel, &[&str])] = &[
    (ExpertiseLevel::Expert, &["expert", "mastered", "advanced", "proficient"]),
    (
        ExpertiseLevel::Intermediate,
        &["experienced", "worked with", "using", "good at"],
    ),
    (ExpertiseLevel::Beginner, &["learned", "learning", "started", "new to"]),
    (ExpertiseLevel::Intermediate, &["improved", "better"]),
];

pub fn has_trigger(lower: &str) -> bool {
    TRIGGER_PHRASES.iter().any(|p| lower.contains(p))
}

/// Level implied by the whole (lowercased) message. Beginner when nothing
/// indicates otherwise.
pub fn infer_level(lower: &str) -> ExpertiseLevel {
    LEVEL_TIERS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map_or(ExpertiseLevel::Beginner, |(level, _)| *level)
}

/// Byte offset of the first whole-word occurrence of `keyword` in `lower`.
/// A trailing plural "s" still counts as a whole word ("apis", "microservices").
pub fn find_word(lower: &str, keyword: &str) -> Option<usize> {
    lower.match_indices(keyword).map(|(i, _)| i).find(|&i| {
        let before_ok = lower[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let rest = &lower[i + keyword.len()..];
        let rest = rest.strip_prefix('s').filter(|r| ends_word(r)).unwrap_or(rest);
        before_ok && ends_word(rest)
    })
}

fn ends_word(rest: &str) -> bool {
    rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_word_respects_boundaries() {
        assert_eq!(find_word("i am good at go", "go"), Some(13));
        assert_eq!(find_word("a good day", "go"), None);
        assert_eq!(find_word("javascript only", "java"), None);
        assert_eq!(find_word("mysql tuning", "sql"), None);
        assert_eq!(find_word("built rest apis", "api"), Some(11));
        assert_eq!(find_word("learning c++ now", "c++"), Some(9));
        assert_eq!(find_word("node.js, react", "node.js"), Some(0));
    }

    #[test]
    fn test_level_tiers_in_priority_order() {
        assert_eq!(infer_level("i mastered docker"), ExpertiseLevel::Expert);
        assert_eq!(infer_level("i learned python but i'm experienced in go"), ExpertiseLevel::Intermediate);
        assert_eq!(infer_level("i started learning rust"), ExpertiseLevel::Beginner);
        assert_eq!(infer_level("my sql got better"), ExpertiseLevel::Intermediate);
        assert_eq!(infer_level("i know react"), ExpertiseLevel::Beginner);
    }

    #[test]
    fn test_trigger_phrases() {
        assert!(has_trigger("i have been studying kotlin"));
        assert!(!has_trigger("what should i do next?"));
    }

    #[test]
    fn test_patterns_are_lowercase() {
        for (keyword, _) in SKILL_PATTERNS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }
}
