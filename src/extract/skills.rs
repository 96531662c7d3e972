//! Skills section parsing.

use regex::Regex;

use super::{DocumentInput, FieldExtractor};
use crate::error::Result;
use crate::record::Field;

/// Sub-labels read from the skills section, in output order.
pub const SKILL_LABELS: [&str; 2] = ["Programming Languages", "Libraries"];

const SECTION_TITLE: &str = "SKILLS";

/// A trimmed line that starts another section: any all-caps line ending in a
/// colon (`TOOLS & PLATFORMS:`), or a bare resume section title such as
/// `EXPERIENCE` or `WORK HISTORY`. A bare all-caps skill like `SQL` does not
/// end the section.
const HEADER_PATTERN: &str = r"^(?:[A-Z][A-Z &/]*:|(?:[A-Z]+ )*(?:EXPERIENCE|EDUCATION|EMPLOYMENT|HISTORY|PROJECTS|CERTIFICATIONS?|ACHIEVEMENTS|AWARDS|PUBLICATIONS|SUMMARY|PROFILE|OBJECTIVE|INTERESTS|HOBBIES|LANGUAGES|REFERENCES|VOLUNTEERING|QUALIFICATIONS))$";

/// Reads `Label: a, b, c` lines out of the `SKILLS` section.
///
/// No `SKILLS` line means absent. A section without any known label gives an
/// empty list.
#[derive(Debug, Clone)]
pub struct SkillsExtractor {
    header_re: Regex,
    label_res: Vec<Regex>,
}

impl SkillsExtractor {
    pub fn new() -> Result<Self> {
        let label_res = SKILL_LABELS
            .iter()
            .map(|label| Regex::new(&format!(r"(?i)^\s*{}\s*:\s*(.*)$", regex::escape(label))))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            header_re: Regex::new(HEADER_PATTERN)?,
            label_res,
        })
    }

    /// Lines of the section body, or `None` when there is no `SKILLS` line.
    fn section<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        let mut lines = text.lines();
        lines.by_ref().find(|line| line.trim() == SECTION_TITLE)?;

        Some(
            lines
                .take_while(|line| !self.header_re.is_match(line.trim()))
                .collect(),
        )
    }
}

impl FieldExtractor for SkillsExtractor {
    type Output = Vec<String>;

    fn field(&self) -> Field {
        Field::Skills
    }

    fn extract(&self, input: &DocumentInput<'_>) -> Option<Vec<String>> {
        let section = self.section(input.text())?;
        let mut skills = Vec::new();

        for label_re in &self.label_res {
            let value = section
                .iter()
                .find_map(|line| label_re.captures(line))
                .and_then(|caps| caps.get(1));

            if let Some(value) = value {
                skills.extend(
                    value
                        .as_str()
                        .split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(str::to_string),
                );
            }
        }

        Some(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Analysis;

    fn skills(text: &str) -> Option<Vec<String>> {
        let analysis = Analysis::default();
        SkillsExtractor::new()
            .unwrap()
            .extract(&DocumentInput::new(text, &analysis))
    }

    #[test]
    fn test_labels_in_order() {
        let text = "SKILLS\nProgramming Languages: Python, Go\nLibraries: NumPy\nEXPERIENCE\nLibraries: Ignored";
        assert_eq!(
            skills(text),
            Some(vec!["Python".to_string(), "Go".to_string(), "NumPy".to_string()])
        );
    }

    #[test]
    fn test_label_order_not_line_order() {
        let text = "  SKILLS  \nlibraries : Pandas,\nPROGRAMMING LANGUAGES:Rust , C++";
        assert_eq!(
            skills(text),
            Some(vec!["Rust".to_string(), "C++".to_string(), "Pandas".to_string()])
        );
    }

    #[test]
    fn test_no_labels_is_empty() {
        assert_eq!(skills("SKILLS\nTeamwork, Leadership\n"), Some(vec![]));
    }

    #[test]
    fn test_no_section_is_absent() {
        assert_eq!(skills("Programming Languages: Python"), None);
        assert_eq!(skills("Skills\nProgramming Languages: Python"), None);
    }

    #[test]
    fn test_section_ends_at_header() {
        let text = "SKILLS\nTOOLS & PLATFORMS:\nLibraries: Django";
        assert_eq!(skills(text), Some(vec![]));
    }

    #[test]
    fn test_bare_caps_skill_keeps_section_open() {
        let text = "SKILLS\nProgramming Languages: Python\nSQL\nAWS\nLibraries: NumPy\n";
        assert_eq!(
            skills(text),
            Some(vec!["Python".to_string(), "NumPy".to_string()])
        );
    }

    #[test]
    fn test_bare_section_titles_end_section() {
        for title in ["EXPERIENCE", "WORK EXPERIENCE", "PROJECTS", "EDUCATION:"] {
            let text = format!("SKILLS\nLibraries: Flask\n{}\nProgramming Languages: Go", title);
            assert_eq!(skills(&text), Some(vec!["Flask".to_string()]), "{}", title);
        }
    }

    #[test]
    fn test_crlf_lines() {
        let text = "SKILLS\r\nLibraries: Flask\r\n";
        assert_eq!(skills(text), Some(vec!["Flask".to_string()]));
    }
}
