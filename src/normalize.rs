//! Text normalization applied to raw document text before analysis.
//!
//! Every stage is character-level. Line structure is preserved exactly,
//! because the section and keyword extractors are line-oriented.

use unicode_normalization::UnicodeNormalization;

/// Options for text normalization.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Expand typographic ligatures (ﬁ, ﬂ, etc.)
    pub fix_ligatures: bool,

    /// Convert `\r\n` and lone `\r` to `\n`
    pub unify_line_endings: bool,

    /// Replace non-breaking and exotic spaces with a plain space
    pub normalize_spaces: bool,

    /// Remove zero-width characters and the byte order mark
    pub remove_zero_width: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,
}

impl NormalizeOptions {
    /// Options with every stage enabled.
    pub fn all() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            unify_line_endings: true,
            normalize_spaces: true,
            remove_zero_width: true,
            remove_replacement_char: true,
        }
    }

    /// Options with every stage disabled.
    pub fn none() -> Self {
        Self {
            normalize_unicode: false,
            fix_ligatures: false,
            unify_line_endings: false,
            normalize_spaces: false,
            remove_zero_width: false,
            remove_replacement_char: false,
        }
    }

    /// Whether any stage is enabled.
    pub fn is_enabled(&self) -> bool {
        self.normalize_unicode
            || self.fix_ligatures
            || self.unify_line_endings
            || self.normalize_spaces
            || self.remove_zero_width
            || self.remove_replacement_char
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::all()
    }
}

const LIGATURES: &[(char, &str)] = &[
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "st"),
    ('\u{FB06}', "st"),
];

/// Text normalization pipeline.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Get the options this normalizer runs with.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Run the enabled stages over `text`.
    pub fn process(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.unify_line_endings && result.contains('\r') {
            result = result.replace("\r\n", "\n").replace('\r', "\n");
        }

        let mut out = String::with_capacity(result.len());
        for c in result.chars() {
            if self.options.fix_ligatures {
                if let Some((_, expanded)) = LIGATURES.iter().find(|(lig, _)| *lig == c) {
                    out.push_str(expanded);
                    continue;
                }
            }
            match c {
                '\u{00A0}' | '\u{202F}' | '\u{2000}'..='\u{200A}'
                    if self.options.normalize_spaces =>
                {
                    out.push(' ')
                }
                '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
                    if self.options.remove_zero_width => {}
                '\u{FFFD}' if self.options.remove_replacement_char => {}
                c => out.push(c),
            }
        }

        out
    }
}

/// Normalize text with the default options.
pub fn normalize(text: &str) -> String {
    Normalizer::default().process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ligatures_expanded() {
        assert_eq!(normalize("e\u{FB03}cient work\u{FB02}ow"), "efficient workflow");
    }

    #[test]
    fn test_line_endings_unified() {
        assert_eq!(normalize("SKILLS\r\nLibraries: NumPy\rEND"), "SKILLS\nLibraries: NumPy\nEND");
    }

    #[test]
    fn test_spaces_and_invisible_chars() {
        assert_eq!(normalize("Jane\u{00A0}Doe\u{200B}"), "Jane Doe");
        assert_eq!(normalize("\u{FEFF}Resume\u{FFFD}"), "Resume");
    }

    #[test]
    fn test_nfc_composition() {
        // "e" + combining acute accent composes to a single "é"
        assert_eq!(normalize("Jose\u{0301}"), "Jos\u{00E9}");
    }

    #[test]
    fn test_lines_preserved() {
        let text = "SKILLS\n\nProgramming Languages: Python\n";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_disabled_is_identity() {
        let normalizer = Normalizer::new(NormalizeOptions::none());
        let text = "a\u{00A0}b\r\n\u{FB01}";
        assert_eq!(normalizer.process(text), text);
        assert!(!normalizer.options().is_enabled());
    }
}
