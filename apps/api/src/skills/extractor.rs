//! Skill extraction from chat messages.
//!
//! Two paths: a provider asked for `[{skill, expertise_level}]`, and the
//! keyword table in `patterns` when the provider is unavailable or its reply
//! cannot be parsed. Messages without a trigger phrase skip both.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::llm_client::extract::{extract_as, JsonShape};
use crate::llm_client::TextGenerator;
use crate::models::skills::{ExpertiseLevel, ExtractedSkill, SkillExtractionResult};
use crate::skills::patterns::{find_word, has_trigger, infer_level, SKILL_PATTERNS};
use crate::skills::prompts::skill_extraction_prompt;

const ENCOURAGEMENTS: [&str; 4] = [
    "Thanks for sharing! I'm here to help you track your learning journey. Feel free to tell me about any new skills, technologies, or courses you've been working on! 📚",
    "I love hearing about your progress! Whether it's coding, design, or any other skills, I'm here to help you map out your career path. What would you like to explore next? 🎯",
    "Your dedication to learning is inspiring! Keep me updated on any new technologies or skills you pick up - I'll help you see how they fit into your career growth! ✨",
    "Every learning step counts towards your goals! Feel free to share any courses, tutorials, or projects you're working on. I'm here to support your journey! 🌱",
];

pub async fn extract_skills_from_message(
    llm: &dyn TextGenerator,
    message: &str,
    current_skills: &str,
    cancel: &CancellationToken,
) -> SkillExtractionResult {
    let lower = message.to_lowercase();
    if !has_trigger(&lower) {
        debug!("No skill trigger phrase in message");
        return SkillExtractionResult {
            extracted_skills: Vec::new(),
            updated_skills: current_skills.to_string(),
        };
    }

    let prompt = skill_extraction_prompt(message);
    let extracted = match llm.generate(&prompt, cancel).await.and_then(|raw| from_provider(&raw)) {
        Some(skills) => {
            info!("Provider extracted {} skills", skills.len());
            skills
        }
        None => {
            let skills = extract_by_rules(message);
            info!("Rule-based extraction found {} skills", skills.len());
            skills
        }
    };

    let extracted = dedupe(extracted);
    let updated_skills = merge_skills(current_skills, extracted.iter().map(|s| s.skill.as_str()));
    SkillExtractionResult {
        extracted_skills: extracted,
        updated_skills,
    }
}

#[derive(Debug, Deserialize)]
struct LooseSkill {
    skill: Option<String>,
    expertise_level: Option<String>,
}

/// Any parseable array is authoritative, including an empty one.
fn from_provider(raw: &str) -> Option<Vec<ExtractedSkill>> {
    match extract_as::<Vec<LooseSkill>>(raw, JsonShape::Array) {
        Ok(loose) => Some(
            loose
                .into_iter()
                .filter_map(|s| {
                    let skill = s.skill?.trim().to_string();
                    if skill.is_empty() {
                        return None;
                    }
                    let expertise_level = s
                        .expertise_level
                        .as_deref()
                        .and_then(ExpertiseLevel::parse)
                        .unwrap_or(ExpertiseLevel::Beginner);
                    Some(ExtractedSkill { skill, expertise_level })
                })
                .collect(),
        ),
        Err(e) => {
            warn!("Skill extraction reply unusable: {e}");
            None
        }
    }
}

/// Table lookup on word boundaries. Skills are ordered by where they are
/// first mentioned; every skill gets the level implied by the message.
pub fn extract_by_rules(message: &str) -> Vec<ExtractedSkill> {
    let lower = message.to_lowercase();
    let level = infer_level(&lower);

    let mut hits: Vec<(usize, usize, &str)> = SKILL_PATTERNS
        .iter()
        .enumerate()
        .filter_map(|(order, (keyword, name))| find_word(&lower, keyword).map(|pos| (pos, order, *name)))
        .collect();
    hits.sort_unstable();

    hits.into_iter()
        .map(|(_, _, name)| ExtractedSkill {
            skill: name.to_string(),
            expertise_level: level,
        })
        .collect()
}

/// First occurrence wins, compared case-insensitively.
fn dedupe(skills: Vec<ExtractedSkill>) -> Vec<ExtractedSkill> {
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .filter(|s| seen.insert(s.skill.to_lowercase()))
        .collect()
}

/// Existing skills keep their order and casing; new names are appended when
/// not already present in any casing.
pub fn merge_skills<'a>(current: &'a str, new: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    current
        .split(',')
        .map(str::trim)
        .chain(new)
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Short encouraging line about what was extracted.
pub fn acknowledgement<R: Rng + ?Sized>(skills: &[ExtractedSkill], rng: &mut R) -> String {
    match skills {
        [] => ENCOURAGEMENTS
            .choose(rng)
            .copied()
            .unwrap_or(ENCOURAGEMENTS[0])
            .to_string(),
        [only] => format!(
            "Great job learning {}! That's a valuable skill that will serve you well in your career journey. Keep up the excellent work! 🚀",
            only.skill
        ),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.skill.as_str()).collect();
            format!(
                "Wow, you've been busy! Learning {} and {} shows real dedication to your professional growth. These skills will definitely boost your career prospects! 🎆",
                head.join(", "),
                last.skill
            )
        }
    }
}
