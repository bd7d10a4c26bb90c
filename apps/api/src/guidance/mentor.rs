//! Mentor chat: a coaching reply for the user's message, plus any skills the
//! message reveals merged into their profile.

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::errors::{require_field, AppError};
use crate::guidance::prompts::mentor_prompt;
use crate::llm_client::TextGenerator;
use crate::models::skills::ExtractedSkill;
use crate::skills::extractor::extract_skills_from_message;

/// Profile fields supplied with the chat request. Blank values fall back to
/// generic defaults.
#[derive(Debug, Clone, Default)]
pub struct MentorProfile {
    pub name: Option<String>,
    pub skills: Option<String>,
    pub expertise: Option<String>,
}

impl MentorProfile {
    fn name(&self) -> &str {
        non_blank(&self.name).unwrap_or("there")
    }

    fn skills(&self) -> &str {
        non_blank(&self.skills).unwrap_or_default()
    }

    fn expertise(&self) -> &str {
        non_blank(&self.expertise).unwrap_or("Beginner")
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub bot_message: String,
    pub extracted_skills: Vec<ExtractedSkill>,
    pub updated_skills: String,
}

pub async fn mentor_reply(
    llm: &dyn TextGenerator,
    message: &str,
    profile: &MentorProfile,
    cancel: &CancellationToken,
) -> Result<ChatReply, AppError> {
    require_field(message, "message")?;

    let (name, skills, expertise) = (profile.name(), profile.skills(), profile.expertise());
    let prompt = mentor_prompt(name, skills, expertise, message);
    let mut bot_message = match llm.generate(&prompt, cancel).await {
        Some(text) => text,
        None => {
            info!("Using templated mentor reply");
            action_plan(name, skills, expertise)
        }
    };

    let extraction = extract_skills_from_message(llm, message, skills, cancel).await;
    if !extraction.extracted_skills.is_empty() {
        let names: Vec<&str> = extraction
            .extracted_skills
            .iter()
            .map(|s| s.skill.as_str())
            .collect();
        bot_message.push_str(&format!(
            "\n\n✨ Great! I've noted that you have experience with: {}. This opens up new opportunities for you!",
            names.join(", ")
        ));
    }

    Ok(ChatReply {
        bot_message,
        extracted_skills: extraction.extracted_skills,
        updated_skills: extraction.updated_skills,
    })
}

fn action_plan(name: &str, skills: &str, expertise: &str) -> String {
    let (skills_line, current_role) = match skills.split(',').next().map(str::trim) {
        Some(first) if !first.is_empty() => (skills, first),
        _ => ("Let's identify your strengths together!", "my current role"),
    };
    format!(
        r#"Hi {name}! 🚀 I'm your dedicated Career Mentor, and I'm here to guide you on your unique journey.

📋 **Your Current Profile:**
• Skills: {skills_line}
• Experience: {expertise}
• Goal: Understanding what you want to achieve next

🎯 **Your Personalized Action Plan:**

**IMMEDIATE NEXT STEPS (This Week):**
1. 📝 Complete a skills gap analysis for your target role
2. 📚 Set aside 1 hour daily for focused learning
3. 🌍 Research 3 companies in your field of interest

**30-DAY ROADMAP:**
• Week 1-2: Deep dive into industry trends and requirements
• Week 3-4: Start building a portfolio project or case study

**90-DAY VISION:**
• Month 2: Complete relevant certification or course
• Month 3: Network with 5 professionals in your target field

💡 **Quick Start Question:** What's the specific career goal or challenge you'd like me to help you tackle right now?

For example:
• "I want to transition from {current_role} to [target role]"
• "I need to level up my skills in [specific area]"
• "I'm unsure about my next career move"

Let's create your personalized roadmap together!"#
    )
}
