//! Fallback content synthesis: builds a complete, valid `AnalysisResult`
//! without any provider.
//!
//! Career paths come from the static catalog for the classified domain. The
//! selected path is drawn at random among the three, so repeated calls with
//! the same input do not always promote the same role. Roadmap and course
//! durations are scaled by the expertise multiplier.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::guidance::catalog::{self, PathTemplate};
use crate::guidance::certifications::certifications_for;
use crate::guidance::domains::DomainId;
use crate::models::career::{AnalysisResult, CareerPath, Course, Difficulty, RoadmapStep};
use crate::models::skills::ExpertiseLevel;

// ────────────────────────────────────────────────────────────────────────────
// Expertise scaling
// ────────────────────────────────────────────────────────────────────────────

/// Duration multiplier and difficulty label derived from free-text expertise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpertiseScale {
    pub multiplier: f64,
    pub difficulty: Difficulty,
}

impl ExpertiseScale {
    pub fn from_expertise(expertise: &str) -> Self {
        let (multiplier, difficulty) = match ExpertiseLevel::parse(expertise) {
            Some(ExpertiseLevel::Beginner) => (1.5, Difficulty::Beginner),
            Some(ExpertiseLevel::Intermediate) => (1.0, Difficulty::Intermediate),
            Some(ExpertiseLevel::Advanced) => (0.7, Difficulty::Advanced),
            Some(ExpertiseLevel::Expert) => (0.7, Difficulty::Expert),
            None => (1.0, Difficulty::Intermediate),
        };
        Self {
            multiplier,
            difficulty,
        }
    }

    /// Scales a `min-max` bound pair. Rounds half away from zero, never goes
    /// below 1 and keeps `max >= min`.
    pub fn scale(&self, (min, max): (u32, u32)) -> (u32, u32) {
        let scaled = |v: u32| ((v as f64 * self.multiplier).round() as u32).max(1);
        let lo = scaled(min);
        (lo, scaled(max).max(lo))
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Weeks,
    Months,
}

impl Unit {
    fn label(&self, n: u32) -> &'static str {
        match (self, n) {
            (Unit::Weeks, 1) => "week",
            (Unit::Weeks, _) => "weeks",
            (Unit::Months, 1) => "month",
            (Unit::Months, _) => "months",
        }
    }
}

fn format_span((min, max): (u32, u32), unit: Unit) -> String {
    if min == max {
        format!("{min} {}", unit.label(min))
    } else {
        format!("{min}-{max} {}", unit.label(max))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap and course templates
// ────────────────────────────────────────────────────────────────────────────

struct StepTemplate {
    title: &'static str,
    base: (u32, u32),
    unit: Unit,
    resources: &'static [&'static str],
}

const ROADMAP: [StepTemplate; 5] = [
    StepTemplate {
        title: "Skill Assessment and Gap Analysis",
        base: (2, 4),
        unit: Unit::Weeks,
        resources: &["Online assessments", "Portfolio review", "Industry research"],
    },
    StepTemplate {
        title: "Learn Core Technologies",
        base: (3, 6),
        unit: Unit::Months,
        resources: &["Online courses", "Documentation", "Practice projects"],
    },
    StepTemplate {
        title: "Build Portfolio Projects",
        base: (2, 4),
        unit: Unit::Months,
        resources: &["GitHub", "Personal website", "Case studies"],
    },
    StepTemplate {
        title: "Network and Gain Experience",
        base: (3, 6),
        unit: Unit::Months,
        resources: &["LinkedIn", "Meetups", "Open source contributions", "Internships"],
    },
    StepTemplate {
        title: "Job Search and Interview Preparation",
        base: (1, 3),
        unit: Unit::Months,
        resources: &["Interview practice", "Resume optimization", "Job boards", "Referrals"],
    },
];

fn step_description(index: usize, skills: &str, expertise: &str, target: &str) -> String {
    match index {
        0 => format!(
            "Evaluate your current {skills} skills at the {expertise} level and list the gaps between them and a {target} role"
        ),
        1 => format!(
            "Deepen your {skills} foundation and learn the core tools a {target} uses every day"
        ),
        2 => format!(
            "Build two or three projects that apply {skills} to real problems and publish them"
        ),
        3 => format!(
            "Connect with {target} professionals, contribute to communities and look for hands-on work that uses {skills}"
        ),
        _ => format!(
            "Tailor your resume around {skills}, practise {expertise}-level interview questions and apply for {target} positions"
        ),
    }
}

/// Learning platforms whose search pages accept a free-text query.
struct PlatformTemplate {
    provider: &'static str,
    title_suffix: &'static str,
    base_weeks: (u32, u32),
    search_prefix: &'static str,
    search_suffix: &'static str,
}

const PLATFORMS: [PlatformTemplate; 5] = [
    PlatformTemplate {
        provider: "YouTube",
        title_suffix: "Complete Tutorial Series",
        base_weeks: (2, 4),
        search_prefix: "https://www.youtube.com/results?search_query=",
        search_suffix: "%20full%20course",
    },
    PlatformTemplate {
        provider: "Coursera",
        title_suffix: "Specialization",
        base_weeks: (6, 8),
        search_prefix: "https://www.coursera.org/search?query=",
        search_suffix: "",
    },
    PlatformTemplate {
        provider: "Udemy",
        title_suffix: "Bootcamp",
        base_weeks: (8, 12),
        search_prefix: "https://www.udemy.com/courses/search/?q=",
        search_suffix: "",
    },
    PlatformTemplate {
        provider: "edX",
        title_suffix: "Professional Certificate Program",
        base_weeks: (8, 10),
        search_prefix: "https://www.edx.org/search?q=",
        search_suffix: "",
    },
    PlatformTemplate {
        provider: "freeCodeCamp",
        title_suffix: "Hands-on Guides",
        base_weeks: (4, 6),
        search_prefix: "https://www.freecodecamp.org/news/search/?query=",
        search_suffix: "",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Synthesis
// ────────────────────────────────────────────────────────────────────────────

/// Builds a complete analysis for `domain`. Never fails.
pub fn synthesize<R: Rng + ?Sized>(
    domain: DomainId,
    skills_text: &str,
    expertise: &str,
    rng: &mut R,
) -> AnalysisResult {
    let templates = domain_paths(domain, rng);
    let career_paths: Vec<CareerPath> = templates.iter().map(PathTemplate::render).collect();
    let selected_path = career_paths
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| templates[0].render());

    let scale = ExpertiseScale::from_expertise(expertise);
    let skills = display_skills(skills_text);
    let expertise_label = match expertise.trim() {
        "" => "current",
        e => e,
    };

    AnalysisResult {
        roadmap: build_roadmap(&skills, expertise_label, &selected_path.title, scale),
        courses: build_courses(&skills, scale),
        certifications: certifications_for(skills_text),
        career_paths,
        selected_path,
    }
}

/// Catalog paths for `domain`, or for a random catalogued domain when the
/// table has no entry for it.
fn domain_paths<R: Rng + ?Sized>(domain: DomainId, rng: &mut R) -> &'static [PathTemplate; 3] {
    catalog::paths_for(domain).unwrap_or_else(|| {
        tracing::warn!("No catalog entry for domain {domain}; using a random domain");
        catalog::random_paths(rng)
    })
}

pub fn build_roadmap(
    skills: &str,
    expertise: &str,
    target_role: &str,
    scale: ExpertiseScale,
) -> Vec<RoadmapStep> {
    ROADMAP
        .iter()
        .enumerate()
        .map(|(i, t)| RoadmapStep {
            step: i as u32 + 1,
            title: t.title.to_string(),
            description: step_description(i, skills, expertise, target_role),
            duration: format_span(scale.scale(t.base), t.unit),
            resources: t.resources.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
}

pub fn build_courses(skills: &str, scale: ExpertiseScale) -> Vec<Course> {
    let query = urlencoding::encode(skills);
    PLATFORMS
        .iter()
        .map(|p| Course {
            title: format!("{skills} {}", p.title_suffix),
            provider: p.provider.to_string(),
            duration: format_span(scale.scale(p.base_weeks), Unit::Weeks),
            difficulty: scale.difficulty,
            url: format!("{}{query}{}", p.search_prefix, p.search_suffix),
        })
        .collect()
}

fn display_skills(skills_text: &str) -> String {
    match skills_text.trim() {
        "" => "your chosen field".to_string(),
        s => s.to_string(),
    }
}
