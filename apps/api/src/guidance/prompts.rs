// Prompt templates for the career guidance operations.
// All generation goes through llm_client; these only build prompt text.

use crate::llm_client::prompts::{JSON_ARRAY_ONLY, JSON_OBJECT_ONLY, MENTOR_TONE};

/// Career analysis: 3 paths, 1 selected, 5 roadmap steps, 3-5 courses and
/// certifications.
pub fn career_analysis_prompt(skills: &str, expertise: &str) -> String {
    format!(
        r#"Based on the following skills and expertise, provide a comprehensive career analysis.

Skills: {skills}
Expertise: {expertise}

Return a JSON object with this structure:
{{
  "career_paths": [
    {{
      "title": "Career Path Title",
      "description": "Brief description of the career path",
      "required_skills": ["skill1", "skill2", "skill3"],
      "salary_range": "$60,000 - $120,000",
      "growth_prospect": "High/Medium/Low with brief explanation"
    }}
  ],
  "selected_path": {{
    "title": "Best matching career path",
    "description": "Detailed description",
    "required_skills": ["skill1", "skill2", "skill3"],
    "salary_range": "$60,000 - $120,000",
    "growth_prospect": "High/Medium/Low with brief explanation"
  }},
  "roadmap": [
    {{
      "step": 1,
      "title": "Step title",
      "description": "What to do in this step",
      "duration": "3-6 months",
      "resources": ["resource1", "resource2"]
    }}
  ],
  "courses": [
    {{
      "title": "Course title",
      "provider": "Course provider",
      "duration": "8 weeks",
      "difficulty": "Beginner/Intermediate/Advanced",
      "url": "Course URL"
    }}
  ],
  "certifications": [
    {{
      "title": "Certification name",
      "provider": "Issuing organisation",
      "duration": "2-3 months",
      "difficulty": "Beginner/Intermediate/Advanced",
      "url": "Certification URL"
    }}
  ]
}}

Provide exactly 3 career paths, select the best one, create a 5-step roadmap,
and suggest 3-5 relevant courses and 3-5 certifications.
Focus on practical, actionable advice.

{JSON_OBJECT_ONLY}"#
    )
}

pub fn mock_test_prompt(skills: &str, expertise: &str, topic: Option<&str>) -> String {
    let focus = match topic {
        Some(t) => format!(" focusing on {t}"),
        None => String::new(),
    };
    format!(
        r#"Generate a 5-question mock test for a user with skills {skills} and expertise {expertise}{focus}.
Return the questions and answers as a JSON array:
[
  {{"question": "...", "answer": "..."}},
  {{"question": "...", "answer": "..."}},
  {{"question": "...", "answer": "..."}},
  {{"question": "...", "answer": "..."}},
  {{"question": "...", "answer": "..."}}
]

Make the questions challenging but appropriate for the specified skill level.
Provide detailed answers that explain the concepts.

{JSON_ARRAY_ONLY}"#
    )
}

pub fn personalized_roadmap_prompt(skills: &str, goal: &str, expertise: &str) -> String {
    let skills = if skills.trim().is_empty() {
        "Beginner level"
    } else {
        skills
    };
    format!(
        r#"Create a detailed, personalized career roadmap for someone with the following profile:

Current Skills: {skills}
Career Goal: {goal}
Experience Level: {expertise}

Provide a comprehensive roadmap that includes:

1. **Immediate Actions (Next 30 days):** 2-3 specific tasks, first skills to focus on, resources to begin with
2. **Short-term Goals (3-6 months):** key milestones, skills to develop, projects to build, certifications to pursue
3. **Medium-term Goals (6-12 months):** advanced skills, portfolio projects, networking, job search preparation
4. **Long-term Vision (1-2 years):** career advancement, leadership development, specialization areas
5. **Specific Resources:** courses with platforms, books, tools, communities
6. **Success Metrics:** how to measure progress, key indicators, portfolio pieces to create

Make this roadmap actionable, specific and tailored to their current skill level.
Include realistic timelines and practical next steps. {MENTOR_TONE}"#
    )
}

pub fn mentor_prompt(name: &str, skills: &str, expertise: &str, message: &str) -> String {
    let skills = if skills.trim().is_empty() {
        "Just starting their journey"
    } else {
        skills
    };
    format!(
        r#"You are "CareerMentor", an expert personal career coach. You are in a one-on-one mentoring session with {name}.

CURRENT USER PROFILE:
- Name: {name}
- Skills: {skills}
- Experience: {expertise}
- Latest Question: "{message}"

Respond as their dedicated mentor:
1. A personalized insight about their current situation
2. Immediate action steps for the next 1-2 weeks
3. A specific roadmap with timeline and milestones ("Week 1-2", "Month 1", "Month 2-3")
4. Resources: exact courses, tools or books
5. One targeted follow-up question

Avoid generic advice that could apply to anyone, vague suggestions and long unprioritised lists.
{MENTOR_TONE}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_has_inputs_and_json_instruction() {
        let prompt = career_analysis_prompt("Rust, Tokio", "Advanced");
        assert!(prompt.contains("Skills: Rust, Tokio"));
        assert!(prompt.contains("Expertise: Advanced"));
        assert!(prompt.contains("\"career_paths\""));
        assert!(prompt.ends_with(JSON_OBJECT_ONLY));
    }

    #[test]
    fn test_mock_test_prompt_topic_optional() {
        assert!(mock_test_prompt("Python", "Beginner", Some("decorators"))
            .contains("focusing on decorators"));
        assert!(!mock_test_prompt("Python", "Beginner", None).contains("focusing on"));
    }

    #[test]
    fn test_roadmap_prompt_defaults_empty_skills() {
        assert!(personalized_roadmap_prompt("", "Data Engineer", "Beginner")
            .contains("Current Skills: Beginner level"));
    }
}
