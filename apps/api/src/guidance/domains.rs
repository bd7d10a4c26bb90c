//! Domain classification: maps a free-text skills string onto one career
//! domain by keyword scoring.
//!
//! Score = number of the domain's keywords found as substrings of the
//! lowercased input. The highest score wins; ties go to the domain declared
//! first in `DomainId::ALL`. When nothing matches, a domain is drawn uniformly
//! at random from the whole table so repeated unknown inputs still get varied
//! guidance. The random source is injected so callers can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainId {
    SoftwareDevelopment,
    WebDevelopment,
    MobileDevelopment,
    DataScience,
    MachineLearningAi,
    DataEngineering,
    DevopsCloud,
    Cybersecurity,
    DesignUx,
    GraphicDesign,
    GameDevelopment,
    BlockchainWeb3,
    QualityAssurance,
    EmbeddedIot,
    NetworkingSystems,
    DatabaseAdministration,
    DigitalMarketing,
    ContentWriting,
    ProductManagement,
    ProjectManagement,
    BusinessAnalysis,
    FinanceAccounting,
    SalesBusinessDevelopment,
    HumanResources,
    Healthcare,
    EducationTraining,
    VideoMediaProduction,
    MechanicalEngineering,
    ElectricalEngineering,
    CivilArchitecture,
    Legal,
    CustomerSupport,
}

impl DomainId {
    /// Declaration order. Ties in classification resolve to the earlier entry.
    pub const ALL: [DomainId; 32] = [
        DomainId::SoftwareDevelopment,
        DomainId::WebDevelopment,
        DomainId::MobileDevelopment,
        DomainId::DataScience,
        DomainId::MachineLearningAi,
        DomainId::DataEngineering,
        DomainId::DevopsCloud,
        DomainId::Cybersecurity,
        DomainId::DesignUx,
        DomainId::GraphicDesign,
        DomainId::GameDevelopment,
        DomainId::BlockchainWeb3,
        DomainId::QualityAssurance,
        DomainId::EmbeddedIot,
        DomainId::NetworkingSystems,
        DomainId::DatabaseAdministration,
        DomainId::DigitalMarketing,
        DomainId::ContentWriting,
        DomainId::ProductManagement,
        DomainId::ProjectManagement,
        DomainId::BusinessAnalysis,
        DomainId::FinanceAccounting,
        DomainId::SalesBusinessDevelopment,
        DomainId::HumanResources,
        DomainId::Healthcare,
        DomainId::EducationTraining,
        DomainId::VideoMediaProduction,
        DomainId::MechanicalEngineering,
        DomainId::ElectricalEngineering,
        DomainId::CivilArchitecture,
        DomainId::Legal,
        DomainId::CustomerSupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::SoftwareDevelopment => "software_development",
            DomainId::WebDevelopment => "web_development",
            DomainId::MobileDevelopment => "mobile_development",
            DomainId::DataScience => "data_science",
            DomainId::MachineLearningAi => "machine_learning_ai",
            DomainId::DataEngineering => "data_engineering",
            DomainId::DevopsCloud => "devops_cloud",
            DomainId::Cybersecurity => "cybersecurity",
            DomainId::DesignUx => "design_ux",
            DomainId::GraphicDesign => "graphic_design",
            DomainId::GameDevelopment => "game_development",
            DomainId::BlockchainWeb3 => "blockchain_web3",
            DomainId::QualityAssurance => "quality_assurance",
            DomainId::EmbeddedIot => "embedded_iot",
            DomainId::NetworkingSystems => "networking_systems",
            DomainId::DatabaseAdministration => "database_administration",
            DomainId::DigitalMarketing => "digital_marketing",
            DomainId::ContentWriting => "content_writing",
            DomainId::ProductManagement => "product_management",
            DomainId::ProjectManagement => "project_management",
            DomainId::BusinessAnalysis => "business_analysis",
            DomainId::FinanceAccounting => "finance_accounting",
            DomainId::SalesBusinessDevelopment => "sales_business_development",
            DomainId::HumanResources => "human_resources",
            DomainId::Healthcare => "healthcare",
            DomainId::EducationTraining => "education_training",
            DomainId::VideoMediaProduction => "video_media_production",
            DomainId::MechanicalEngineering => "mechanical_engineering",
            DomainId::ElectricalEngineering => "electrical_engineering",
            DomainId::CivilArchitecture => "civil_architecture",
            DomainId::Legal => "legal",
            DomainId::CustomerSupport => "customer_support",
        }
    }

    /// Lowercase keywords scored against the input. Kept at three or more
    /// characters so short tokens do not match inside unrelated words.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            DomainId::SoftwareDevelopment => &[
                "python", "javascript", "java", "programming", "coding", "django", "flask",
                "c++", ".net", "golang", "rust", "typescript", "software", "algorithms",
                "data structures", "oop", "spring", "node",
            ],
            DomainId::WebDevelopment => &[
                "html", "css", "react", "angular", "vue", "frontend", "front-end", "backend",
                "back-end", "full stack", "fullstack", "web development", "next.js", "express",
                "php", "laravel", "wordpress", "tailwind", "bootstrap",
            ],
            DomainId::MobileDevelopment => &[
                "android", "ios", "swift", "kotlin", "flutter", "react native", "mobile",
                "xamarin", "swiftui", "jetpack", "dart",
            ],
            DomainId::DataScience => &[
                "data science", "data analysis", "analytics", "pandas", "numpy", "statistics",
                "tableau", "power bi", "excel", "matplotlib", "visualization", "jupyter",
                "data analyst",
            ],
            DomainId::MachineLearningAi => &[
                "machine learning", "deep learning", "tensorflow", "pytorch", "keras",
                "scikit", "neural network", "nlp", "computer vision", "artificial intelligence",
                "llm", "langchain", "opencv", "hugging face",
            ],
            DomainId::DataEngineering => &[
                "spark", "hadoop", "kafka", "airflow", "etl", "data pipeline", "data warehouse",
                "snowflake", "bigquery", "databricks", "dbt", "data engineering",
            ],
            DomainId::DevopsCloud => &[
                "docker", "kubernetes", "aws", "azure", "gcp", "cloud", "devops", "terraform",
                "ansible", "jenkins", "ci/cd", "linux", "helm", "prometheus", "grafana",
            ],
            DomainId::Cybersecurity => &[
                "security", "cybersecurity", "penetration", "ethical hacking", "firewall",
                "siem", "malware", "cryptography", "owasp", "metasploit", "wireshark",
                "incident response", "vulnerability",
            ],
            DomainId::DesignUx => &[
                "figma", "photoshop", "adobe xd", "sketch", "wireframe", "prototyp",
                "user experience", "user interface", "ux design", "ui design", "usability",
                "user research", "interaction design", "invision",
            ],
            DomainId::GraphicDesign => &[
                "illustrator", "indesign", "graphic", "branding", "logo", "typography",
                "coreldraw", "print design", "canva", "visual design",
            ],
            DomainId::GameDevelopment => &[
                "unity", "unreal", "game", "godot", "blender", "3d modeling", "gamemaker",
                "level design", "shader",
            ],
            DomainId::BlockchainWeb3 => &[
                "blockchain", "solidity", "ethereum", "web3", "smart contract", "crypto",
                "defi", "nft", "bitcoin", "hardhat",
            ],
            DomainId::QualityAssurance => &[
                "testing", "selenium", "cypress", "quality assurance", "test automation",
                "jest", "pytest", "junit", "playwright", "manual testing",
            ],
            DomainId::EmbeddedIot => &[
                "embedded", "arduino", "raspberry pi", "iot", "microcontroller", "firmware",
                "rtos", "fpga", "verilog", "vhdl",
            ],
            DomainId::NetworkingSystems => &[
                "networking", "cisco", "ccna", "tcp/ip", "routing", "switching",
                "system administration", "sysadmin", "windows server", "active directory",
                "vpn",
            ],
            DomainId::DatabaseAdministration => &[
                "sql", "mysql", "postgresql", "oracle", "mongodb", "database", "dba",
                "sql server", "redis", "cassandra",
            ],
            DomainId::DigitalMarketing => &[
                "marketing", "seo", "sem", "social media", "google ads", "advertising",
                "email marketing", "google analytics", "campaign", "brand",
            ],
            DomainId::ContentWriting => &[
                "writing", "content", "copywriting", "blogging", "editing", "journalism",
                "technical writing", "storytelling", "proofreading",
            ],
            DomainId::ProductManagement => &[
                "product management", "product manager", "roadmapping", "user stories",
                "product strategy", "market research", "a/b testing", "product owner",
            ],
            DomainId::ProjectManagement => &[
                "project management", "agile", "scrum", "kanban", "pmp", "jira",
                "leadership", "stakeholder", "prince2", "planning",
            ],
            DomainId::BusinessAnalysis => &[
                "business analysis", "requirements", "process improvement", "bpmn",
                "business intelligence", "consulting", "strategy",
            ],
            DomainId::FinanceAccounting => &[
                "finance", "accounting", "financial", "bookkeeping", "tally", "audit", "tax",
                "investment", "banking", "cfa", "budgeting",
            ],
            DomainId::SalesBusinessDevelopment => &[
                "sales", "business development", "negotiation", "crm", "salesforce",
                "lead generation", "account management", "cold calling",
            ],
            DomainId::HumanResources => &[
                "human resources", "recruitment", "recruiting", "talent acquisition",
                "payroll", "onboarding", "employee relations", "hr management",
            ],
            DomainId::Healthcare => &[
                "healthcare", "nursing", "medical", "clinical", "pharmacy", "patient care",
                "biology", "health informatics", "public health",
            ],
            DomainId::EducationTraining => &[
                "teaching", "education", "tutoring", "curriculum", "training", "instructional",
                "e-learning", "lesson planning",
            ],
            DomainId::VideoMediaProduction => &[
                "video editing", "premiere", "after effects", "final cut", "animation",
                "photography", "filmmaking", "davinci", "motion graphics", "podcast",
            ],
            DomainId::MechanicalEngineering => &[
                "mechanical", "autocad", "solidworks", "cad", "thermodynamics",
                "manufacturing", "catia", "ansys",
            ],
            DomainId::ElectricalEngineering => &[
                "electrical", "electronics", "circuit", "pcb", "power systems", "matlab",
                "plc", "control systems",
            ],
            DomainId::CivilArchitecture => &[
                "civil", "architecture", "revit", "structural", "construction", "surveying",
                "staad", "urban planning",
            ],
            DomainId::Legal => &[
                "legal", "law", "contract", "compliance", "litigation", "paralegal",
                "intellectual property", "regulatory",
            ],
            DomainId::CustomerSupport => &[
                "customer service", "customer support", "help desk", "helpdesk",
                "zendesk", "communication", "client relations", "call center",
            ],
        }
    }

    fn score(&self, lowered: &str) -> usize {
        self.keywords()
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .count()
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the best-scoring domain for `skills_text`, or a random one when no
/// keyword matches at all.
pub fn classify<R: Rng + ?Sized>(skills_text: &str, rng: &mut R) -> DomainId {
    best_match(skills_text).unwrap_or_else(|| random_domain(rng))
}

/// The deterministic branch of `classify`: `None` when every score is zero.
pub fn best_match(skills_text: &str) -> Option<DomainId> {
    let lowered = skills_text.to_lowercase();
    let mut best: Option<(DomainId, usize)> = None;
    for domain in DomainId::ALL {
        let score = domain.score(&lowered);
        // Strictly greater keeps the earliest domain on ties.
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((domain, score));
        }
    }
    best.map(|(domain, _)| domain)
}

pub fn random_domain<R: Rng + ?Sized>(rng: &mut R) -> DomainId {
    *DomainId::ALL
        .choose(rng)
        .unwrap_or(&DomainId::SoftwareDevelopment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_design_tools_classify_as_design_ux() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            classify("I know Figma and Adobe Photoshop", &mut rng),
            DomainId::DesignUx
        );
    }

    #[test]
    fn test_python_django_is_software_development() {
        assert_eq!(best_match("Python, Django"), Some(DomainId::SoftwareDevelopment));
    }

    #[test]
    fn test_classification_is_stable_for_unique_maximum() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = classify("Docker, Kubernetes, Terraform", &mut rng);
        for _ in 0..20 {
            assert_eq!(classify("Docker, Kubernetes, Terraform", &mut rng), first);
        }
        assert_eq!(first, DomainId::DevopsCloud);
    }

    #[test]
    fn test_tie_goes_to_earlier_domain() {
        // One hit each: "python" (software) and "android" (mobile).
        assert_eq!(best_match("python android"), Some(DomainId::SoftwareDevelopment));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(best_match("TENSORFLOW and PyTorch"), Some(DomainId::MachineLearningAi));
    }

    #[test]
    fn test_empty_input_returns_member_of_table() {
        assert_eq!(best_match(""), None);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let domain = classify("", &mut rng);
            assert!(DomainId::ALL.contains(&domain));
        }
    }

    #[test]
    fn test_zero_score_draws_vary() {
        let mut rng = StdRng::seed_from_u64(3);
        let draws: std::collections::HashSet<DomainId> =
            (0..100).map(|_| classify("zzz", &mut rng)).collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn test_keywords_are_lowercase_and_not_tiny() {
        for domain in DomainId::ALL {
            for keyword in domain.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase(), "{domain}: {keyword}");
                assert!(keyword.trim().len() >= 3, "{domain}: {keyword}");
            }
        }
    }
}
