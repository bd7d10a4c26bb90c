//! Certification lookup: curated real certifications for common skills, with
//! generic search-link tiers when the skills text matches nothing.

use crate::models::career::{Certification, Difficulty, MAX_RECOMMENDATIONS, MIN_RECOMMENDATIONS};

struct CertTemplate {
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
    url: &'static str,
}

const fn cert(
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
    url: &'static str,
) -> CertTemplate {
    CertTemplate {
        title,
        provider,
        duration,
        difficulty,
        url,
    }
}

/// Keyword → certifications. A keyword matches when it occurs in the
/// lowercased skills text and is not followed by another letter, so "java"
/// does not fire for "javascript".
static CURATED: &[(&str, &[CertTemplate])] = &[
    ("python", &[
        cert("PCEP - Certified Entry-Level Python Programmer", "Python Institute", "4-6 weeks",
            Difficulty::Beginner, "https://pythoninstitute.org/pcep"),
        cert("PCAP - Certified Associate in Python Programming", "Python Institute", "2-3 months",
            Difficulty::Intermediate, "https://pythoninstitute.org/pcap"),
        cert("Google IT Automation with Python", "Google (Coursera)", "6 months",
            Difficulty::Beginner, "https://www.coursera.org/professional-certificates/google-it-automation"),
    ]),
    ("javascript", &[
        cert("JavaScript Algorithms and Data Structures", "freeCodeCamp", "300 hours",
            Difficulty::Beginner, "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures-v8/"),
        cert("Meta Front-End Developer Professional Certificate", "Meta (Coursera)", "7 months",
            Difficulty::Beginner, "https://www.coursera.org/professional-certificates/meta-front-end-developer"),
        cert("JSE - Certified Entry-Level JavaScript Programmer", "JS Institute", "4-6 weeks",
            Difficulty::Beginner, "https://jsinstitute.org/jse"),
    ]),
    ("java", &[
        cert("Oracle Certified Foundations Associate, Java", "Oracle", "1-2 months",
            Difficulty::Beginner, "https://education.oracle.com/oracle-certified-foundations-associate-java/trackp_OCFAJAVA"),
        cert("Oracle Certified Professional: Java SE 17 Developer", "Oracle", "3-4 months",
            Difficulty::Intermediate, "https://education.oracle.com/java-se-17-developer/pexam_1Z0-829"),
    ]),
    ("data science", &[
        cert("IBM Data Science Professional Certificate", "IBM (Coursera)", "5 months",
            Difficulty::Beginner, "https://www.coursera.org/professional-certificates/ibm-data-science"),
        cert("Google Data Analytics Professional Certificate", "Google (Coursera)", "6 months",
            Difficulty::Beginner, "https://www.coursera.org/professional-certificates/google-data-analytics"),
        cert("Microsoft Certified: Azure Data Scientist Associate", "Microsoft", "2-3 months",
            Difficulty::Intermediate, "https://learn.microsoft.com/en-us/credentials/certifications/azure-data-scientist/"),
    ]),
    ("aws", &[
        cert("AWS Certified Cloud Practitioner", "Amazon Web Services", "4-6 weeks",
            Difficulty::Beginner, "https://aws.amazon.com/certification/certified-cloud-practitioner/"),
        cert("AWS Certified Solutions Architect - Associate", "Amazon Web Services", "2-3 months",
            Difficulty::Intermediate, "https://aws.amazon.com/certification/certified-solutions-architect-associate/"),
        cert("AWS Certified Developer - Associate", "Amazon Web Services", "2-3 months",
            Difficulty::Intermediate, "https://aws.amazon.com/certification/certified-developer-associate/"),
    ]),
    ("security", &[
        cert("CompTIA Security+", "CompTIA", "2-3 months",
            Difficulty::Beginner, "https://www.comptia.org/certifications/security"),
        cert("Certified Ethical Hacker (CEH)", "EC-Council", "3-4 months",
            Difficulty::Intermediate, "https://www.eccouncil.org/train-certify/certified-ethical-hacker-ceh/"),
        cert("CISSP", "ISC2", "4-6 months",
            Difficulty::Expert, "https://www.isc2.org/certifications/cissp"),
    ]),
    ("devops", &[
        cert("HashiCorp Certified: Terraform Associate", "HashiCorp", "4-6 weeks",
            Difficulty::Intermediate, "https://developer.hashicorp.com/certifications/infrastructure-automation"),
        cert("Microsoft Certified: DevOps Engineer Expert", "Microsoft", "3-4 months",
            Difficulty::Advanced, "https://learn.microsoft.com/en-us/credentials/certifications/devops-engineer/"),
        cert("AWS Certified DevOps Engineer - Professional", "Amazon Web Services", "3-4 months",
            Difficulty::Advanced, "https://aws.amazon.com/certification/certified-devops-engineer-professional/"),
    ]),
    ("azure", &[
        cert("Microsoft Certified: Azure Fundamentals (AZ-900)", "Microsoft", "2-4 weeks",
            Difficulty::Beginner, "https://learn.microsoft.com/en-us/credentials/certifications/azure-fundamentals/"),
        cert("Microsoft Certified: Azure Administrator Associate (AZ-104)", "Microsoft", "2-3 months",
            Difficulty::Intermediate, "https://learn.microsoft.com/en-us/credentials/certifications/azure-administrator/"),
    ]),
    ("gcp", &[
        cert("Google Cloud Associate Cloud Engineer", "Google Cloud", "2-3 months",
            Difficulty::Intermediate, "https://cloud.google.com/learn/certification/cloud-engineer"),
        cert("Google Cloud Professional Cloud Architect", "Google Cloud", "3-4 months",
            Difficulty::Advanced, "https://cloud.google.com/learn/certification/cloud-architect"),
    ]),
    ("kubernetes", &[
        cert("Certified Kubernetes Administrator (CKA)", "CNCF", "2-3 months",
            Difficulty::Intermediate, "https://www.cncf.io/training/certification/cka/"),
        cert("Certified Kubernetes Application Developer (CKAD)", "CNCF", "2-3 months",
            Difficulty::Intermediate, "https://www.cncf.io/training/certification/ckad/"),
    ]),
    ("machine learning", &[
        cert("Machine Learning Specialization", "DeepLearning.AI (Coursera)", "3 months",
            Difficulty::Beginner, "https://www.coursera.org/specializations/machine-learning-introduction"),
        cert("Google Cloud Professional Machine Learning Engineer", "Google Cloud", "3-4 months",
            Difficulty::Advanced, "https://cloud.google.com/learn/certification/machine-learning-engineer"),
        cert("AWS Certified Machine Learning - Specialty", "Amazon Web Services", "3-4 months",
            Difficulty::Advanced, "https://aws.amazon.com/certification/certified-machine-learning-specialty/"),
    ]),
    ("project management", &[
        cert("Google Project Management Professional Certificate", "Google (Coursera)", "6 months",
            Difficulty::Beginner, "https://www.coursera.org/professional-certificates/google-project-management"),
        cert("Project Management Professional (PMP)", "PMI", "3-6 months",
            Difficulty::Advanced, "https://www.pmi.org/certifications/project-management-pmp"),
        cert("Professional Scrum Master I", "Scrum.org", "2-4 weeks",
            Difficulty::Intermediate, "https://www.scrum.org/assessments/professional-scrum-master-i-certification"),
    ]),
];

/// Certifications for `skills_text`: every curated match in table order,
/// deduplicated by title and capped at five, padded with generic tiers up to
/// three. With no curated match the result is the three generic tiers.
pub fn certifications_for(skills_text: &str) -> Vec<Certification> {
    let lowered = skills_text.to_lowercase();
    let mut certs: Vec<Certification> = Vec::new();

    for (keyword, templates) in CURATED {
        if !mentions(&lowered, keyword) {
            continue;
        }
        for t in templates.iter() {
            if certs.len() == MAX_RECOMMENDATIONS {
                return certs;
            }
            if certs.iter().all(|c| c.title != t.title) {
                certs.push(Certification {
                    title: t.title.to_string(),
                    provider: t.provider.to_string(),
                    duration: t.duration.to_string(),
                    difficulty: t.difficulty,
                    url: t.url.to_string(),
                });
            }
        }
    }

    let generic = generic_tiers(skills_text);
    for g in generic {
        if certs.len() >= MIN_RECOMMENDATIONS {
            break;
        }
        certs.push(g);
    }
    certs
}

/// Three search-link certifications at increasing difficulty.
pub fn generic_tiers(skills_text: &str) -> Vec<Certification> {
    let subject = display_subject(skills_text);
    let query = urlencoding::encode(&subject);
    vec![
        Certification {
            title: format!("{subject} Fundamentals Certificate"),
            provider: "Coursera".to_string(),
            duration: "4-6 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            url: format!("https://www.coursera.org/search?query={query}%20certificate"),
        },
        Certification {
            title: format!("{subject} Professional Certificate"),
            provider: "edX".to_string(),
            duration: "2-3 months".to_string(),
            difficulty: Difficulty::Intermediate,
            url: format!("https://www.edx.org/search?q={query}%20professional%20certificate"),
        },
        Certification {
            title: format!("Advanced {subject} Certification"),
            provider: "LinkedIn Learning".to_string(),
            duration: "3-4 months".to_string(),
            difficulty: Difficulty::Advanced,
            url: format!("https://www.linkedin.com/learning/search?keywords={query}%20advanced"),
        },
    ]
}

fn display_subject(skills_text: &str) -> String {
    let trimmed = skills_text.trim();
    if trimmed.is_empty() {
        "Career Skills".to_string()
    } else {
        trimmed.to_string()
    }
}

fn mentions(lowered: &str, keyword: &str) -> bool {
    lowered.match_indices(keyword).any(|(idx, _)| {
        !lowered[idx + keyword.len()..]
            .chars()
            .next()
            .is_some_and(char::is_alphabetic)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_gets_curated_certs() {
        let certs = certifications_for("Python, Django");
        assert_eq!(certs.len(), 3);
        assert!(certs[0].title.starts_with("PCEP"));
        assert!(certs.iter().all(|c| c.url.starts_with("https://")));
    }

    #[test]
    fn test_javascript_does_not_pull_java_certs() {
        let certs = certifications_for("JavaScript");
        assert!(certs.iter().all(|c| !c.provider.contains("Oracle")));
    }

    #[test]
    fn test_java_alone_is_padded_to_three() {
        let certs = certifications_for("Java");
        assert_eq!(certs.len(), 3);
        assert_eq!(certs[0].provider, "Oracle");
        assert_eq!(certs[2].provider, "Coursera");
    }

    #[test]
    fn test_many_matches_capped_at_five() {
        let certs = certifications_for("Python, AWS, Kubernetes, DevOps, machine learning");
        assert_eq!(certs.len(), 5);
    }

    #[test]
    fn test_cybersecurity_matches_security_entry() {
        let certs = certifications_for("cybersecurity");
        assert_eq!(certs[0].title, "CompTIA Security+");
    }

    #[test]
    fn test_no_match_returns_generic_tiers() {
        let certs = certifications_for("Pottery");
        assert_eq!(certs.len(), 3);
        assert_eq!(certs[0].difficulty, Difficulty::Beginner);
        assert_eq!(certs[1].difficulty, Difficulty::Intermediate);
        assert_eq!(certs[2].difficulty, Difficulty::Advanced);
        assert_eq!(
            certs[0].url,
            "https://www.coursera.org/search?query=Pottery%20certificate"
        );
    }
}
