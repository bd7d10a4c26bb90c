// Career guidance: analysis, mock tests, personalised roadmaps and mentor chat.
// Provider output goes through llm_client; every operation has a deterministic
// fallback so provider outages never reach the caller.

pub mod analysis;
pub mod catalog;
pub mod certifications;
pub mod currency;
pub mod domains;
pub mod handlers;
pub mod mentor;
pub mod prompts;
pub mod roadmap;
pub mod synthesizer;
