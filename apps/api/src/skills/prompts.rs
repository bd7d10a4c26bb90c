use crate::llm_client::prompts::JSON_ARRAY_ONLY;

/// Skill + level pairs as a JSON array.
pub fn skill_extraction_prompt(message: &str) -> String {
    format!(
        r#"Extract all new skills and expertise levels mentioned in this message: "{message}"

Return a JSON array with the following structure:
[
  {{"skill": "skill name", "expertise_level": "beginner/intermediate/advanced/expert"}}
]

Rules:
1. Extract only actual technical skills, programming languages, tools or professional competencies
2. Infer the expertise level from context ("learned" = beginner, "worked with" = intermediate, "mastered" = expert)
3. If no level is mentioned, use "beginner" for new learning and "intermediate" for general experience
4. Return an empty array if no skills are found
5. Use the usual display form of each skill (e.g. "JavaScript", "React", "Python", "SQL")

{JSON_ARRAY_ONLY}"#
    )
}
