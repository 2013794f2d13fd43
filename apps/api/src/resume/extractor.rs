//! Resume field extraction.
//!
//! Pure parsing over already-extracted text: a fixed skill vocabulary, degree
//! patterns anchored to a 2000s year, and a years-of-experience phrase.
//! Malformed input never fails; absent matches yield empty/sentinel values.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const NOT_SPECIFIED: &str = "Not specified";

/// Education entries are capped at this many hits.
pub const MAX_EDUCATION_ENTRIES: usize = 3;

/// Structured fields pulled out of resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeFields {
    /// Lower-cased, deduplicated, in stable (sorted) order.
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: String,
}

// The skill/title vocabulary the matcher recognizes. Order matters: the
// alternation tries alternatives left to right, so multi-word and prefixed
// terms come before their shorter cousins.
const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "SQL",
    "Machine Learning",
    "Data",
    "Engineer",
    "Developer",
    "AI",
    "Marketing",
    "Sales",
    "Excel",
    "React",
    "Node",
    "Frontend",
    "Backend",
    "Flask",
    "Django",
    "AWS",
    "Cloud",
    "PostgreSQL",
    "MongoDB",
    "UI",
    "UX",
    "Design",
    "Testing",
    "C++",
    "C",
    "Leadership",
    "Teamwork",
    "Communication",
];

static SKILL_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = SKILL_VOCABULARY
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).expect("valid skill pattern")
});

// Degree templates, each anchored to a four-digit year in the 2000s.
static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:bachelor(?:'s)?|b\.?\s?tech|b\.?\s?sc|b\.?\s?e\b|bca)[^\n]{0,80}?\b20\d{2}\b",
        r"(?i)\b(?:master(?:'s)?|m\.?\s?tech|m\.?\s?sc|mba|mca)[^\n]{0,80}?\b20\d{2}\b",
        r"(?i)\b(?:ph\.?\s?d|doctorate|doctoral)[^\n]{0,80}?\b20\d{2}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid degree pattern"))
    .collect()
});

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\+?\s*(?:years|yrs)(?:\s+of)?(?:\s+experience)?")
        .expect("valid experience pattern")
});

/// Extracts structured fields from resume text. Idempotent: identical input
/// always yields an identical value.
pub fn extract(raw_text: &str) -> ResumeFields {
    ResumeFields {
        skills: extract_skills(raw_text),
        education: extract_education(raw_text),
        experience_years: extract_experience_years(raw_text),
    }
}

/// Vocabulary hits, lower-cased and deduplicated.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    for hit in SKILL_RE.find_iter(text) {
        seen.insert(hit.as_str().to_lowercase());
    }
    seen.into_iter().collect()
}

/// All degree-pattern hits across all templates, capped at three.
pub fn extract_education(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    for pattern in DEGREE_RES.iter() {
        for hit in pattern.find_iter(text) {
            entries.push(hit.as_str().trim().to_string());
            if entries.len() == MAX_EDUCATION_ENTRIES {
                return entries;
            }
        }
    }
    entries
}

/// First "<n>(+) years/yrs [of] [experience]" hit, as a string.
pub fn extract_experience_years(text: &str) -> String {
    EXPERIENCE_RE
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        Senior Python Developer with 5 years of experience.\n\
        Skills: Python, SQL, Machine Learning, AWS, React\n\
        Bachelor of Technology, Computer Science, 2016\n\
        Master of Science, Data Analytics, 2019";

    #[test]
    fn test_skills_lowercased_and_present() {
        let fields = extract(SAMPLE);
        assert!(fields.skills.contains(&"python".to_string()));
        assert!(fields.skills.contains(&"sql".to_string()));
        assert!(fields.skills.contains(&"machine learning".to_string()));
        assert!(fields.skills.contains(&"aws".to_string()));
    }

    #[test]
    fn test_skills_deduplicated() {
        let skills = extract_skills("Python python PYTHON");
        assert_eq!(skills, vec!["python"]);
    }

    #[test]
    fn test_skill_requires_word_boundary() {
        // "data" inside "database" must not match on its own.
        let skills = extract_skills("worked with databases");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_experience_years_extracted() {
        assert_eq!(extract_experience_years("5 years of experience"), "5");
        assert_eq!(extract_experience_years("over 10+ yrs experience"), "10");
        assert_eq!(extract_experience_years("3 years in marketing"), "3");
    }

    #[test]
    fn test_experience_absent_is_sentinel() {
        assert_eq!(extract_experience_years("no duration given"), NOT_SPECIFIED);
        assert_eq!(extract_experience_years(""), NOT_SPECIFIED);
    }

    #[test]
    fn test_education_anchored_to_year() {
        let education = extract_education(SAMPLE);
        assert_eq!(education.len(), 2);
        assert!(education[0].to_lowercase().starts_with("bachelor"));
        assert!(education[0].contains("2016"));
        // Degrees without a 2000s year do not count.
        assert!(extract_education("Bachelor of Arts, 1998").is_empty());
    }

    #[test]
    fn test_education_capped_at_three() {
        let text = "B.Tech 2010\nB.Sc 2012\nBachelor of Arts 2014\nBCA 2015";
        assert_eq!(extract_education(text).len(), MAX_EDUCATION_ENTRIES);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let first = extract(SAMPLE);
        let second = extract(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_yields_empty_fields() {
        let fields = extract("");
        assert!(fields.skills.is_empty());
        assert!(fields.education.is_empty());
        assert_eq!(fields.experience_years, NOT_SPECIFIED);
    }
}
