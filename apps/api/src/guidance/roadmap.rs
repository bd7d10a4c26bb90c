//! Free-text personalised roadmap. Provider prose is returned as is; without a
//! provider a templated markdown plan is filled in from the request.

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::errors::{require_field, AppError};
use crate::guidance::prompts::personalized_roadmap_prompt;
use crate::llm_client::TextGenerator;

pub async fn generate_personalized_roadmap(
    llm: &dyn TextGenerator,
    skills: &str,
    goal: &str,
    expertise: &str,
    cancel: &CancellationToken,
) -> Result<String, AppError> {
    require_field(goal, "goal")?;
    require_field(expertise, "expertise")?;

    let prompt = personalized_roadmap_prompt(skills, goal, expertise);
    if let Some(text) = llm.generate(&prompt, cancel).await {
        info!("Personalized roadmap generated by provider");
        return Ok(text);
    }

    info!("Using templated roadmap for goal '{goal}'");
    Ok(templated_roadmap(skills, goal, expertise))
}

fn templated_roadmap(skills: &str, goal: &str, expertise: &str) -> String {
    let skills = match skills.trim() {
        "" => "foundational areas",
        s => s,
    };
    format!(
        r#"🗺️ **Your Personalized Career Roadmap**

**Current Status:** {expertise} with skills in {skills}
**Target Goal:** {goal}

**🚀 Immediate Actions (Next 30 days):**
1. Assess your current skill gaps against {goal} job postings
2. Set up a dedicated learning schedule (1-2 hours daily)
3. Create accounts on key learning platforms

**🎯 Short-term Goals (3-6 months):**
1. Complete 2-3 foundational courses
2. Build your first portfolio project
3. Join relevant online communities
4. Start following industry leaders

**📈 Medium-term Goals (6-12 months):**
1. Complete an advanced certification
2. Build 3-5 portfolio projects
3. Start networking in your field
4. Apply for relevant positions

**🌟 Long-term Vision (1-2 years):**
1. Secure your target role as {goal}
2. Develop leadership skills
3. Consider specialization areas
4. Mentor others in your journey

**📚 Recommended Resources:**
- Online platforms: Coursera, Udemy, freeCodeCamp
- Books: Industry-specific bestsellers
- Tools: Popular industry software
- Communities: LinkedIn groups, Discord servers

**📊 Track Your Progress:**
- Weekly skill assessments
- Monthly portfolio updates
- Quarterly goal reviews"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_provider_text_passes_through() {
        let gen = ScriptedGenerator::replying(&["Month 1: learn Rust."]);
        let text = generate_personalized_roadmap(&gen, "Go", "Backend Engineer", "Intermediate", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(text, "Month 1: learn Rust.");
        assert!(gen.prompts.lock().unwrap()[0].contains("Career Goal: Backend Engineer"));
    }

    #[tokio::test]
    async fn test_template_interpolates_inputs() {
        let gen = ScriptedGenerator::offline();
        let text = generate_personalized_roadmap(&gen, "SQL, Excel", "Data Analyst", "Beginner", &CancellationToken::new())
            .await
            .unwrap();
        assert!(text.contains("**Current Status:** Beginner with skills in SQL, Excel"));
        assert!(text.contains("**Target Goal:** Data Analyst"));
        assert!(text.contains("Long-term Vision"));
    }

    #[tokio::test]
    async fn test_empty_skills_use_foundational_areas() {
        let gen = ScriptedGenerator::offline();
        let text = generate_personalized_roadmap(&gen, "  ", "Designer", "Beginner", &CancellationToken::new())
            .await
            .unwrap();
        assert!(text.contains("skills in foundational areas"));
    }

    #[tokio::test]
    async fn test_missing_goal_rejected() {
        let gen = ScriptedGenerator::offline();
        let result = generate_personalized_roadmap(&gen, "Go", "", "Beginner", &CancellationToken::new()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
