//! Career analysis: provider-generated when possible, synthesized otherwise.
//!
//! Flow: prompt → dispatcher → object extraction → normalisation → shape
//! check. Any miss along the way falls through to the deterministic
//! synthesizer, whose output is checked strictly before it leaves.

use rand::Rng;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::errors::{require_field, AppError};
use crate::guidance::certifications::certifications_for;
use crate::guidance::currency::convert_usd_text;
use crate::guidance::domains::classify;
use crate::guidance::prompts::career_analysis_prompt;
use crate::guidance::synthesizer::synthesize;
use crate::llm_client::extract::{extract_as, JsonShape};
use crate::llm_client::TextGenerator;
use crate::models::career::{AnalysisResult, CareerPath, MAX_RECOMMENDATIONS};

/// Always returns a complete analysis for non-empty inputs. Provider outages
/// and unusable provider output degrade to synthesized content.
pub async fn generate_career_analysis<R: Rng + Send + ?Sized>(
    llm: &dyn TextGenerator,
    skills: &str,
    expertise: &str,
    cancel: &CancellationToken,
    rng: &mut R,
) -> Result<AnalysisResult, AppError> {
    require_field(skills, "skills")?;
    require_field(expertise, "expertise")?;

    let prompt = career_analysis_prompt(skills, expertise);
    if let Some(raw) = llm.generate(&prompt, cancel).await {
        match from_provider(&raw, skills) {
            Some(result) => {
                info!("Career analysis generated by provider");
                return Ok(result);
            }
            None => warn!("Provider analysis unusable; synthesizing"),
        }
    }

    let domain = classify(skills, rng);
    info!("Synthesizing career analysis for domain {domain}");
    let result = synthesize(domain, skills, expertise, rng);
    result.validate(true)?;
    Ok(result)
}

/// Parses and normalises provider output. `None` when it cannot be made to
/// satisfy the analysis shape.
fn from_provider(raw: &str, skills: &str) -> Option<AnalysisResult> {
    let mut result: AnalysisResult = match extract_as(raw, JsonShape::Object) {
        Ok(r) => r,
        Err(e) => {
            warn!("Analysis extraction failed: {e}");
            return None;
        }
    };
    normalise(&mut result, skills);
    match result.validate(false) {
        Ok(()) => Some(result),
        Err(e) => {
            warn!("Provider analysis rejected: {e}");
            None
        }
    }
}

/// Brings provider output into the service's conventions: rupee salaries,
/// certifications always present, capped recommendation lists and roadmap
/// steps numbered from 1.
pub fn normalise(result: &mut AnalysisResult, skills: &str) {
    for path in result
        .career_paths
        .iter_mut()
        .chain(std::iter::once(&mut result.selected_path))
    {
        convert_salary(path);
    }

    if result.certifications.is_empty() {
        result.certifications = certifications_for(skills);
    }
    result.courses.truncate(MAX_RECOMMENDATIONS);
    result.certifications.truncate(MAX_RECOMMENDATIONS);

    for (i, step) in result.roadmap.iter_mut().enumerate() {
        step.step = i as u32 + 1;
    }
}

fn convert_salary(path: &mut CareerPath) {
    if path.salary_range.contains('$') {
        path.salary_range = convert_usd_text(&path.salary_range);
    }
}
