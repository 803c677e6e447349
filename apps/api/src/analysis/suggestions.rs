//! Suggestion engine: turns scores and the skill report into ordered advice.
//!
//! Order is part of the output contract:
//! 1. ATS keyword advice (critical below `ats_critical`, softer below `ats_warning`)
//! 2. structure advice (critical below `format_critical`, softer below `format_warning`)
//! 3. up to three missing skills, alphabetical
//! 4. one line per category with missing skills, in taxonomy order
//! 5. "looks good" when nothing above fired, otherwise the closing metrics tip
//!
//! The returned list is never empty.

use crate::analysis::profile::Thresholds;
use crate::analysis::skills::SkillReport;

const MAX_NAMED_MISSING_SKILLS: usize = 3;

pub const LOOKS_GOOD: &str =
    "Your resume looks good! It is well structured and aligned with the role.";
pub const METRICS_TIP: &str =
    "Quantify your achievements with metrics (e.g. \"reduced latency by 30%\") to make impact concrete.";

pub fn suggest(
    ats_score: Option<u8>,
    format_score: u8,
    skills: &SkillReport,
    thresholds: &Thresholds,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(ats) = ats_score {
        if ats < thresholds.ats_critical {
            suggestions.push(format!(
                "Critical: your ATS keyword match is {ats}/100. Optimize your resume with \
                 keywords and exact phrases from the job description."
            ));
        } else if ats < thresholds.ats_warning {
            suggestions.push(format!(
                "Add more relevant keywords from the job description to raise your ATS match \
                 ({ats}/100)."
            ));
        }
    }

    if format_score < thresholds.format_critical {
        suggestions.push(format!(
            "Critical: your resume structure scores {format_score}/100. Add clear section \
             headings (Experience, Education, Skills, Projects) and your contact details."
        ));
    } else if format_score < thresholds.format_warning {
        suggestions.push(
            "Consider adding any missing sections or contact details to complete your resume \
             structure."
                .to_string(),
        );
    }

    if skills.missing_count > 0 {
        let named: Vec<&str> = skills
            .missing
            .iter()
            .take(MAX_NAMED_MISSING_SKILLS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider adding these skills required for the role: {}.",
            named.join(", ")
        ));
    }

    for category in skills.categories.iter().filter(|c| !c.missing.is_empty()) {
        let count = category.missing.len();
        let noun = if count == 1 { "skill" } else { "skills" };
        suggestions.push(format!(
            "Strengthen your {} profile: {count} required {noun} missing.",
            category.display_name
        ));
    }

    if suggestions.is_empty() {
        suggestions.push(LOOKS_GOOD.to_string());
    } else {
        suggestions.push(METRICS_TIP.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::profile::AnalyzerProfile;
    use crate::analysis::skills::extract_skills;
    use proptest::prelude::*;

    fn report(resume: &str, job: Option<&str>) -> SkillReport {
        let profile = AnalyzerProfile::builtin().unwrap();
        extract_skills(&profile.skill_categories, resume, job)
    }

    #[test]
    fn test_all_good_yields_single_positive_message() {
        let skills = report("python", Some("python"));
        let out = suggest(Some(95), 90, &skills, &Thresholds::default());
        assert_eq!(out, vec![LOOKS_GOOD.to_string()]);
    }

    #[test]
    fn test_unavailable_ats_emits_nothing_for_keywords() {
        let skills = report("python", None);
        let out = suggest(None, 100, &skills, &Thresholds::default());
        assert_eq!(out, vec![LOOKS_GOOD.to_string()]);
    }

    #[test]
    fn test_critical_ats_then_skills_then_metrics() {
        // two missing skills in two categories: docker (cloud), golang (programming)
        let skills = report("python", Some("python golang docker"));
        assert_eq!(skills.missing_count, 2);

        let out = suggest(Some(55), 90, &skills, &Thresholds::default());
        assert_eq!(out.len(), 5);
        assert!(out[0].starts_with("Critical: your ATS keyword match is 55/100"));
        assert_eq!(
            out[1],
            "Consider adding these skills required for the role: docker, golang."
        );
        assert_eq!(
            out[2],
            "Strengthen your Programming profile: 1 required skill missing."
        );
        assert_eq!(
            out[3],
            "Strengthen your Cloud profile: 1 required skill missing."
        );
        assert_eq!(out[4], METRICS_TIP);
        assert!(!out.iter().any(|s| s.contains("structure")));
    }

    #[test]
    fn test_threshold_boundaries() {
        let skills = report("", None);
        let t = Thresholds::default();

        let out = suggest(Some(60), 70, &skills, &t);
        assert!(out[0].starts_with("Add more relevant keywords"));
        assert!(out[1].starts_with("Consider adding any missing sections"));

        let out = suggest(Some(59), 69, &skills, &t);
        assert!(out[0].starts_with("Critical: your ATS"));
        assert!(out[1].starts_with("Critical: your resume structure scores 69/100"));

        let out = suggest(Some(80), 85, &skills, &t);
        assert_eq!(out, vec![LOOKS_GOOD.to_string()]);
    }

    #[test]
    fn test_names_at_most_three_missing_skills_alphabetically() {
        let skills = report("", Some("teamwork kubernetes python aws"));
        let out = suggest(Some(90), 90, &skills, &Thresholds::default());
        assert_eq!(
            out[0],
            "Consider adding these skills required for the role: aws, kubernetes, python."
        );
        assert_eq!(
            out[1],
            "Strengthen your Programming profile: 1 required skill missing."
        );
        assert_eq!(out[2], "Strengthen your Cloud profile: 2 required skills missing.");
        assert_eq!(
            out[3],
            "Strengthen your Soft Skills profile: 1 required skill missing."
        );
        assert_eq!(out.last().unwrap(), METRICS_TIP);
    }

    #[test]
    fn test_custom_thresholds_are_honored() {
        let skills = report("", None);
        let strict = Thresholds {
            ats_critical: 90,
            ats_warning: 95,
            format_critical: 95,
            format_warning: 99,
        };
        let out = suggest(Some(85), 90, &skills, &strict);
        assert!(out[0].starts_with("Critical: your ATS"));
        assert!(out[1].starts_with("Critical: your resume structure"));
    }

    proptest! {
        /// Property: suggestions are never empty and always close with one of the two fixed lines
        #[test]
        fn suggestions_never_empty(
            ats in prop::option::of(0u8..=100),
            format in 0u8..=100,
            resume in "\\PC{0,60}",
            job in prop::option::of("(python|aws|docker|kubernetes|teamwork| |\\PC){0,12}"),
        ) {
            let skills = report(&resume, job.as_deref());
            let out = suggest(ats, format, &skills, &Thresholds::default());
            prop_assert!(!out.is_empty());
            let last = out.last().map(String::as_str);
            prop_assert!(last == Some(LOOKS_GOOD) || last == Some(METRICS_TIP));
            if out.len() == 1 {
                prop_assert_eq!(out[0].as_str(), LOOKS_GOOD);
            }
        }
    }
}
