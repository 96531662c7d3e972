//! Integration tests for the field extractors.

use unresume::extract::{
    CompetenciesExtractor, DocumentInput, EmailExtractor, FieldExtractor, KeywordExtractor,
    LinkedinExtractor, MeasurableResultsExtractor, MobileNumberExtractor, NameExtractor,
    SkillsExtractor, SKILL_LABELS,
};
use unresume::nlp::{Analysis, EntityLabel, EntitySpan, LanguageModel, RuleBasedModel};
use unresume::Field;

fn empty() -> Analysis {
    Analysis::default()
}

fn extract<E: FieldExtractor>(extractor: &E, text: &str) -> Option<E::Output> {
    let analysis = empty();
    extractor.extract(&DocumentInput::new(text, &analysis))
}

#[test]
fn test_email_properties() {
    let e = EmailExtractor::new().unwrap();
    assert_eq!(
        extract(&e, "reach me: j_doe%work@corp-mail.co.uk").as_deref(),
        Some("j_doe%work@corp-mail.co.uk")
    );
    assert_eq!(extract(&e, "nothing"), None);
    assert_eq!(
        extract(&e, "first@a.io then second@b.io").as_deref(),
        Some("first@a.io")
    );
    // Top-level segment is 2 to 7 letters.
    assert_eq!(extract(&e, "mail a@b.c now"), None);
    assert_eq!(extract(&e, "mail a@b.abcdefgh now"), None);
    assert_eq!(
        extract(&e, "mail a@b.museum now").as_deref(),
        Some("a@b.museum")
    );
}

#[test]
fn test_mobile_properties() {
    let e = MobileNumberExtractor::new().unwrap();
    assert_eq!(
        extract(&e, "Call 9876543210 now").as_deref(),
        Some("9876543210")
    );
    assert_eq!(extract(&e, "Call 98765432 now"), None);
    assert_eq!(extract(&e, "id 123456789012"), None);
}

#[test]
fn test_skills_properties() {
    let e = SkillsExtractor::new().unwrap();
    assert_eq!(
        extract(
            &e,
            "SKILLS\nProgramming Languages: Python, Go\nLibraries: NumPy\nEXPERIENCE\n..."
        ),
        Some(vec![
            "Python".to_string(),
            "Go".to_string(),
            "NumPy".to_string()
        ])
    );
    assert_eq!(extract(&e, "SKILLS\nCommunication\n"), Some(vec![]));
    assert_eq!(extract(&e, "EXPERIENCE\nLibraries: NumPy"), None);
    assert_eq!(SKILL_LABELS, ["Programming Languages", "Libraries"]);
}

#[test]
fn test_linkedin_properties() {
    let e = LinkedinExtractor::new().unwrap();
    assert_eq!(
        extract(&e, "Profile: https://www.linkedin.com/in/jdoe more text").as_deref(),
        Some("https://www.linkedin.com/in/jdoe")
    );
    assert_eq!(extract(&e, "Profile: https://github.com/jdoe"), None);
}

#[test]
fn test_name_properties() {
    let analysis = Analysis {
        entities: vec![
            EntitySpan::new(EntityLabel::Person, "Alice Smith", 0, 11),
            EntitySpan::new(EntityLabel::Org, "Acme", 12, 16),
            EntitySpan::new(EntityLabel::Person, "Bob Lee", 17, 24),
        ],
        ..Default::default()
    };
    let input = DocumentInput::new("Alice Smith Acme Bob Lee", &analysis);
    assert_eq!(
        NameExtractor::new().extract(&input).as_deref(),
        Some("Alice Smith")
    );
    assert_eq!(extract(&NameExtractor::new(), "Alice Smith"), None);
}

#[test]
fn test_education_and_experience_are_independent() {
    let text = "Experience in Education Technology Services\nEducation: Master Of Science";
    let education = KeywordExtractor::education().unwrap();
    let experience = KeywordExtractor::experience().unwrap();

    assert_eq!(
        extract(&education, text),
        Some(vec!["Technology".to_string(), "Master".to_string()])
    );
    assert_eq!(extract(&experience, text), Some(vec!["Education".to_string()]));
}

#[test]
fn test_custom_keyword_extractor() {
    let e = KeywordExtractor::with_keywords(Field::Education, &["certification"]).unwrap();
    assert_eq!(
        extract(&e, "Certification: Google Cloud Architect"),
        Some(vec!["Google".to_string()])
    );
    assert_eq!(e.field(), Field::Education);
}

#[test]
fn test_measurable_results() {
    let e = MeasurableResultsExtractor::new().unwrap();
    assert_eq!(
        extract(&e, "Served 2000000 users\nReduced latency by 35 percent"),
        Some(vec!["users".to_string(), "percent".to_string()])
    );
    assert_eq!(extract(&e, "No figures at all"), None);
}

#[test]
fn test_competencies_with_rule_based_model() {
    let model = RuleBasedModel::new().unwrap();
    let text = "• Designed and implemented APIs\n• Mentored interns and designed the tests";
    let analysis = model.analyze(text);
    let input = DocumentInput::new(text, &analysis);

    assert_eq!(
        CompetenciesExtractor::new().extract(&input),
        Some(vec![
            "Designed".to_string(),
            "implemented".to_string(),
            "Mentored".to_string(),
            "designed".to_string()
        ])
    );
}

#[test]
fn test_name_with_rule_based_model() {
    let model = RuleBasedModel::new().unwrap();
    let text = "Maria Garcia\nSenior Software Engineer\nReferences: John Smith";
    let analysis = model.analyze(text);
    let input = DocumentInput::new(text, &analysis);

    assert_eq!(
        NameExtractor::new().extract(&input).as_deref(),
        Some("Maria Garcia")
    );
}

#[test]
fn test_extractors_report_their_field() {
    assert_eq!(NameExtractor::new().field(), Field::Name);
    assert_eq!(SkillsExtractor::new().unwrap().field(), Field::Skills);
    assert_eq!(CompetenciesExtractor::new().field(), Field::Competencies);
    assert_eq!(
        MeasurableResultsExtractor::new().unwrap().field(),
        Field::MeasurableResults
    );
}
