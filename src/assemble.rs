//! Record assembly: one model pass, nine extractors, one record.

use std::borrow::Cow;

use crate::error::Result;
use crate::extract::{
    CompetenciesExtractor, DocumentInput, EmailExtractor, FieldExtractor, KeywordExtractor,
    LinkedinExtractor, MeasurableResultsExtractor, MobileNumberExtractor, NameExtractor,
    SkillsExtractor,
};
use crate::nlp::{Analysis, LanguageModel};
use crate::normalize::{NormalizeOptions, Normalizer};
use crate::record::{ExtractedRecord, Field};

/// Options for record extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Normalization applied to the text before analysis
    pub normalize: NormalizeOptions,
}

impl ExtractOptions {
    /// Create new extraction options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, options: NormalizeOptions) -> Self {
        self.normalize = options;
        self
    }

    /// Analyse the text exactly as decoded.
    pub fn without_normalization(mut self) -> Self {
        self.normalize = NormalizeOptions::none();
        self
    }
}

/// Runs the extraction pipeline over one document's text.
///
/// An assembler owns its language model, so each worker builds its own.
/// Construction compiles every field pattern; assembly cannot fail.
pub struct RecordAssembler {
    model: Box<dyn LanguageModel>,
    normalizer: Normalizer,
    name: NameExtractor,
    email: EmailExtractor,
    mobile_number: MobileNumberExtractor,
    skills: SkillsExtractor,
    education: KeywordExtractor,
    experience: KeywordExtractor,
    competencies: CompetenciesExtractor,
    measurable_results: MeasurableResultsExtractor,
    linkedin: LinkedinExtractor,
}

impl RecordAssembler {
    /// Create an assembler around `model`.
    pub fn new(model: Box<dyn LanguageModel>, options: ExtractOptions) -> Result<Self> {
        log::debug!("Building record assembler with model '{}'", model.name());

        Ok(Self {
            model,
            normalizer: Normalizer::new(options.normalize),
            name: NameExtractor::new(),
            email: EmailExtractor::new()?,
            mobile_number: MobileNumberExtractor::new()?,
            skills: SkillsExtractor::new()?,
            education: KeywordExtractor::education()?,
            experience: KeywordExtractor::experience()?,
            competencies: CompetenciesExtractor::new(),
            measurable_results: MeasurableResultsExtractor::new()?,
            linkedin: LinkedinExtractor::new()?,
        })
    }

    /// Name of the underlying language model.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// The text the extractors will see, after normalization.
    pub fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.normalizer.options().is_enabled() {
            Cow::Owned(self.normalizer.process(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Run the model over prepared text.
    pub fn analyze(&self, text: &str) -> Analysis {
        self.model.analyze(&self.prepare(text))
    }

    /// Extract a record from raw document text.
    pub fn assemble(&self, text: &str) -> ExtractedRecord {
        let text = self.prepare(text);
        let analysis = self.model.analyze(&text);
        let input = DocumentInput::new(&text, &analysis);

        let record = ExtractedRecord {
            name: run(&self.name, &input),
            email: run(&self.email, &input),
            mobile_number: run(&self.mobile_number, &input),
            skills: run(&self.skills, &input),
            education: run(&self.education, &input),
            experience: run(&self.experience, &input),
            competencies: run(&self.competencies, &input),
            measurable_results: run(&self.measurable_results, &input),
            linkedin: run(&self.linkedin, &input),
        };

        log::debug!(
            "Assembled record: {}/{} fields present",
            record.present_count(),
            Field::ALL.len()
        );
        record
    }
}

fn run<E: FieldExtractor>(extractor: &E, input: &DocumentInput<'_>) -> Option<E::Output>
where
    E::Output: std::fmt::Debug,
{
    let value = extractor.extract(input);
    log::trace!("{}: {:?}", extractor.field(), value);
    value
}

impl std::fmt::Debug for RecordAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordAssembler")
            .field("model", &self.model.name())
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}
