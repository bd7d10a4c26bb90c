//! Skill autocomplete over a static, categorised technology catalogue.

use serde::Serialize;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;
const MAX_CATEGORIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSuggestions {
    pub suggestions: Vec<String>,
    pub categories: Vec<String>,
    pub confidence: f32,
}

impl SkillSuggestions {
    fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            categories: Vec::new(),
            confidence: 0.0,
        }
    }
}

const CATALOGUE: &[(&str, &[&str])] = &[
    ("Programming Languages", &[
        "Python", "JavaScript", "Java", "C++", "C#", "TypeScript", "PHP", "Ruby", "Go", "Rust",
        "Swift", "Kotlin", "Scala", "R", "MATLAB", "Perl", "Dart", "Lua", "Haskell", "Clojure",
        "F#", "Erlang", "Elixir", "Julia", "Nim", "Crystal", "Zig", "Assembly", "Fortran", "COBOL",
        "Objective-C", "Solidity", "Verilog", "VHDL", "C", "Pascal", "Ada", "Prolog", "Scheme",
    ]),
    ("Frontend Frameworks", &[
        "React", "Vue.js", "Angular", "Svelte", "Ember.js", "Backbone.js", "Alpine.js", "Lit",
        "Stimulus", "Next.js", "Nuxt.js", "Gatsby", "Quasar", "Vuetify", "Chakra UI", "Material-UI",
        "Ant Design", "Bootstrap", "Tailwind CSS", "Bulma", "Foundation", "Semantic UI",
    ]),
    ("Backend Frameworks", &[
        "Node.js", "Express.js", "Django", "Flask", "FastAPI", "Spring Boot", "Spring Framework",
        "Laravel", "Symfony", "Ruby on Rails", "Sinatra", "ASP.NET Core", "Blazor", "Gin",
        "Echo", "Fiber", "Actix Web", "Rocket", "Vapor", "NestJS", "Koa.js", "Fastify",
    ]),
    ("Mobile Development", &[
        "React Native", "Flutter", "Ionic", "Xamarin", "Cordova", "PhoneGap", "SwiftUI",
        "UIKit", "Android Jetpack", "Jetpack Compose", "Titanium", "Unity Mobile", "Cocos2d",
    ]),
    ("Databases", &[
        "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Oracle Database", "SQL Server",
        "MariaDB", "CouchDB", "Cassandra", "DynamoDB", "Firebase Firestore", "Neo4j",
        "InfluxDB", "TimescaleDB", "Couchbase", "Amazon RDS", "Supabase", "PlanetScale",
    ]),
    ("Cloud & DevOps", &[
        "AWS", "Microsoft Azure", "Google Cloud Platform", "Docker", "Kubernetes", "Terraform",
        "Ansible", "Jenkins", "GitLab CI", "GitHub Actions", "CircleCI", "Travis CI", "Helm",
        "Vagrant", "Chef", "Puppet", "Prometheus", "Grafana", "ELK Stack", "Datadog",
    ]),
    ("Data Science & AI", &[
        "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Keras", "Scikit-learn",
        "Pandas", "NumPy", "OpenCV", "NLTK", "spaCy", "Hugging Face", "LangChain", "Jupyter",
        "Apache Spark", "Hadoop", "Kafka", "Airflow", "MLflow", "Weights & Biases",
    ]),
    ("Game Development", &[
        "Unity", "Unreal Engine", "Godot", "GameMaker Studio", "Construct 3", "Blender",
        "Maya", "3ds Max", "Substance Painter", "Houdini", "CryEngine", "Lumberyard",
    ]),
    ("Design Tools", &[
        "Figma", "Sketch", "Adobe XD", "InVision", "Principle", "Framer", "Zeplin",
        "Adobe Photoshop", "Adobe Illustrator", "Adobe After Effects", "Canva", "GIMP",
    ]),
    ("Testing & QA", &[
        "Jest", "Mocha", "Chai", "Cypress", "Selenium", "Playwright", "Puppeteer",
        "TestNG", "JUnit", "Pytest", "RSpec", "Jasmine", "Karma", "Protractor",
    ]),
    ("Security", &[
        "Cybersecurity", "Penetration Testing", "Ethical Hacking", "OWASP", "Metasploit",
        "Nmap", "Wireshark", "Burp Suite", "Kali Linux", "Cryptography", "OAuth", "JWT",
    ]),
    ("Blockchain & Web3", &[
        "Blockchain", "Ethereum", "Solidity", "Smart Contracts", "Web3.js", "Truffle",
        "Hardhat", "Metamask", "IPFS", "DeFi", "NFT", "Bitcoin", "Chainlink", "Polygon",
    ]),
    ("Business & Soft Skills", &[
        "Project Management", "Agile", "Scrum", "Kanban", "Leadership", "Communication",
        "Problem Solving", "Critical Thinking", "Team Collaboration", "Product Management",
        "Business Analysis", "Requirements Gathering", "Stakeholder Management",
    ]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Match {
    Exact,
    Prefix,
    Substring,
    /// Only a single query word matched.
    Weak,
}

fn classify(query: &str, skill: &str) -> Option<Match> {
    let skill = skill.to_lowercase();
    if skill == query {
        Some(Match::Exact)
    } else if skill.starts_with(query) {
        Some(Match::Prefix)
    } else if skill.contains(query) {
        Some(Match::Substring)
    } else if query.split_whitespace().any(|w| skill.contains(w)) {
        Some(Match::Weak)
    } else {
        None
    }
}

pub fn suggest(query: &str, max: usize) -> SkillSuggestions {
    let query = query.trim().to_lowercase();
    if query.chars().count() < 2 {
        return SkillSuggestions::empty();
    }

    let mut matches: Vec<(Match, &str)> = Vec::new();
    let mut categories: Vec<String> = Vec::new();
    for (category, skills) in CATALOGUE {
        for &skill in skills.iter() {
            let Some(kind) = classify(&query, skill) else {
                continue;
            };
            if matches.iter().any(|(_, s)| *s == skill) {
                continue;
            }
            matches.push((kind, skill));
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }

    let best = matches.iter().map(|(kind, _)| *kind).min();
    let confidence = match best {
        Some(Match::Exact) => 1.0,
        Some(Match::Prefix) => 0.8,
        Some(Match::Substring) => 0.6,
        Some(Match::Weak) => 0.4,
        None => 0.0,
    };

    // Stable sort keeps catalogue order within a tier.
    matches.sort_by_key(|(kind, _)| *kind);
    let suggestions = matches
        .into_iter()
        .filter(|(kind, _)| *kind != Match::Weak)
        .take(max)
        .map(|(_, skill)| skill.to_string())
        .collect();
    categories.truncate(MAX_CATEGORIES);

    SkillSuggestions {
        suggestions,
        categories,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_is_empty() {
        assert_eq!(suggest("r", 8), SkillSuggestions::empty());
        assert_eq!(suggest("  ", 8), SkillSuggestions::empty());
    }

    #[test]
    fn test_exact_then_prefix_then_substring() {
        let result = suggest("React", 8);
        assert_eq!(result.suggestions, vec!["React", "React Native"]);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.categories, vec!["Frontend Frameworks", "Mobile Development"]);
    }

    #[test]
    fn test_prefix_confidence_and_limit() {
        let result = suggest("ja", 3);
        assert_eq!(result.suggestions, vec!["JavaScript", "Java", "Jasmine"]);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_substring_ranked_after_prefix() {
        let result = suggest("script", 8);
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.suggestions, vec!["JavaScript", "TypeScript"]);
    }

    #[test]
    fn test_weak_matches_only_affect_confidence() {
        let result = suggest("quantum docker", 8);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.confidence, 0.4);
        assert_eq!(result.categories, vec!["Cloud & DevOps"]);
    }

    #[test]
    fn test_skill_listed_twice_suggested_once() {
        let result = suggest("solidity", 8);
        assert_eq!(result.suggestions, vec!["Solidity"]);
        assert_eq!(result.categories, vec!["Programming Languages"]);
    }

    #[test]
    fn test_categories_capped() {
        assert!(suggest("an", 50).categories.len() <= MAX_CATEGORIES);
    }
}
