//! Content Formatter: pure functions mapping each résumé section to an
//! ordered sequence of display lines.
//!
//! Every function is deterministic and total over well-formed input. Empty
//! sequences produce headers with no body lines, never errors, and repeated
//! calls yield identical output.

use crate::record::{EducationEntry, ProjectEntry, Skills, TrainingEntry};

pub const HARD_SKILLS_HEADER: &str = "--- HARD SKILLS ---";
pub const SOFT_SKILLS_HEADER: &str = "--- SOFT SKILLS ---";
pub const HOBBIES_HEADER: &str = "--- HOBBIES ---";

/// Wraps `date` in parentheses unless it already carries its own pair.
#[inline]
fn parenthesized(date: &str) -> String {
    if date.starts_with('(') && date.ends_with(')') {
        date.to_string()
    } else {
        format!("({date})")
    }
}

/// A summary renders as a single display line; the renderer wraps it to the
/// panel width.
pub fn summary(text: &str) -> Vec<String> {
    vec![text.to_string()]
}

/// Hard skills under one header, soft skills under another, with a blank
/// separator line between the two groups. Input order is preserved.
pub fn skills(skills: &Skills) -> Vec<String> {
    let mut lines = Vec::with_capacity(skills.hard.len() + skills.soft.len() + 3);

    lines.push(HARD_SKILLS_HEADER.to_string());
    lines.extend(skills.hard.iter().cloned());
    lines.push(String::new());
    lines.push(SOFT_SKILLS_HEADER.to_string());
    lines.extend(skills.soft.iter().cloned());

    lines
}

/// One `"{degree} | {institution} ({details})"` line per entry.
pub fn education(entries: &[EducationEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("{} | {} ({})", e.degree, e.institution, e.details))
        .collect()
}

/// Per entry: a `ROLE:` header line, one `"  - "` bullet per description
/// item (zero or more), then a blank separator line.
pub fn training(entries: &[TrainingEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    for job in entries {
        lines.push(format!(
            "ROLE: {} | {} {}",
            job.role,
            job.company,
            parenthesized(&job.date)
        ));
        lines.extend(job.description.iter().map(|d| format!("  - {d}")));
        lines.push(String::new());
    }

    lines
}

/// Exactly five lines per entry: header, quoted description, joined
/// responsibilities, joined skills, blank separator. Responsibilities and
/// skills are joined with `", "`, never expanded to one line each.
pub fn projects(entries: &[ProjectEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() * 5);

    for proj in entries {
        lines.push(format!("PROJECT: {} ({})", proj.name, proj.domain));
        lines.push(format!("  \"{}\"", proj.description));
        lines.push(format!("  Role: {}", proj.responsibilities.join(", ")));
        lines.push(format!("  Skills: {}", proj.skills.join(", ")));
        lines.push(String::new());
    }

    lines
}

/// One `"- "` line per achievement, then a blank line, the hobbies header,
/// and the hobbies in order (unlabeled).
pub fn achievements(items: &[String], hobbies: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(items.len() + hobbies.len() + 2);

    lines.extend(items.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
    lines.push(HOBBIES_HEADER.to_string());
    lines.extend(hobbies.iter().cloned());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ResumeRecord;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn skills_layout_matches_example() {
        let input = Skills {
            hard: strings(&["A", "B"]),
            soft: strings(&["C"]),
        };

        assert_eq!(
            skills(&input),
            strings(&["--- HARD SKILLS ---", "A", "B", "", "--- SOFT SKILLS ---", "C"])
        );
    }

    #[test]
    fn skills_line_count_is_headers_plus_separator_plus_items() {
        let input = Skills {
            hard: strings(&["a", "b", "c"]),
            soft: strings(&["d", "e"]),
        };

        let lines = skills(&input);
        assert_eq!(lines.len(), 3 + input.hard.len() + input.soft.len());
        assert_eq!(lines[0], HARD_SKILLS_HEADER);
        assert_eq!(lines[input.hard.len() + 1], "");
        assert_eq!(lines[input.hard.len() + 2], SOFT_SKILLS_HEADER);
    }

    #[test]
    fn skills_empty_groups_keep_headers() {
        let input = Skills { hard: vec![], soft: vec![] };

        assert_eq!(
            skills(&input),
            strings(&["--- HARD SKILLS ---", "", "--- SOFT SKILLS ---"])
        );
    }

    #[test]
    fn training_entry_matches_example() {
        let entries = vec![TrainingEntry {
            role: "X".to_string(),
            company: "Y".to_string(),
            date: "(2020)".to_string(),
            description: strings(&["d1", "d2"]),
        }];

        assert_eq!(
            training(&entries),
            strings(&["ROLE: X | Y (2020)", "  - d1", "  - d2", ""])
        );
    }

    #[test]
    fn training_wraps_bare_dates_in_parentheses() {
        let entries = vec![TrainingEntry {
            role: "X".to_string(),
            company: "Y".to_string(),
            date: "2020".to_string(),
            description: vec![],
        }];

        assert_eq!(training(&entries), strings(&["ROLE: X | Y (2020)", ""]));
    }

    #[test]
    fn training_line_count_per_entry() {
        let record = ResumeRecord::builtin();
        let lines = training(&record.training);

        let expected: usize = record
            .training
            .iter()
            .map(|job| 1 + job.description.len() + 1)
            .sum();
        assert_eq!(lines.len(), expected);

        // Every non-header, non-blank line is a two-space-indented bullet.
        for line in lines.iter().filter(|l| !l.is_empty() && !l.starts_with("ROLE: ")) {
            assert!(line.starts_with("  - "), "not a bullet: {line:?}");
        }
    }

    #[test]
    fn projects_emit_five_lines_per_entry() {
        let record = ResumeRecord::builtin();
        let lines = projects(&record.projects);

        assert_eq!(lines.len(), record.projects.len() * 5);
        assert_eq!(
            lines[0],
            "PROJECT: Smart Parking Management (Web Application)"
        );
        assert_eq!(lines[2], "  Role: Designed UI/UX., Razorpay integration.");
        assert_eq!(lines[3], "  Skills: Html, Css, JavaScript, Bootstrap");
        assert_eq!(lines[4], "");
    }

    #[test]
    fn education_joins_fields_with_pipes() {
        let entries = vec![EducationEntry {
            degree: "BSc".to_string(),
            institution: "Uni".to_string(),
            details: "2020".to_string(),
        }];

        assert_eq!(education(&entries), strings(&["BSc | Uni (2020)"]));
    }

    #[test]
    fn achievements_end_with_hobbies_block() {
        let items = strings(&["won", "placed"]);
        let hobbies = strings(&["chess"]);

        assert_eq!(
            achievements(&items, &hobbies),
            strings(&["- won", "- placed", "", "--- HOBBIES ---", "chess"])
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let record = ResumeRecord::builtin();

        assert_eq!(summary(&record.summary), summary(&record.summary));
        assert_eq!(skills(&record.skills), skills(&record.skills));
        assert_eq!(education(&record.education), education(&record.education));
        assert_eq!(training(&record.training), training(&record.training));
        assert_eq!(projects(&record.projects), projects(&record.projects));
        assert_eq!(
            achievements(&record.achievements, &record.hobbies),
            achievements(&record.achievements, &record.hobbies)
        );
    }
}
