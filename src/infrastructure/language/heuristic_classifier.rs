use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::LanguageClassifier;

const DEFAULT_MIN_LATIN_RATIO: f32 = 0.9;
const SHORT_PHRASE_WORDS: usize = 3;

const COMMON_WORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "are", "as", "at", "be", "but", "by", "can", "do", "for",
    "from", "have", "he", "hello", "her", "his", "i", "if", "in", "is", "it", "me", "my", "no",
    "not", "of", "on", "or", "our", "she", "so", "that", "the", "their", "there", "they", "this",
    "to", "was", "we", "what", "when", "which", "will", "with", "would", "yes", "you", "your",
];

/// Script and stop-word heuristic. Text dominated by non-ASCII letters is
/// non-English; longer ASCII text must contain at least one common English word.
pub struct HeuristicLanguageClassifier {
    min_latin_ratio: f32,
}

impl HeuristicLanguageClassifier {
    pub fn new(min_latin_ratio: f32) -> Self {
        Self { min_latin_ratio }
    }
}

impl Default for HeuristicLanguageClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LATIN_RATIO)
    }
}

impl LanguageClassifier for HeuristicLanguageClassifier {
    fn is_english(&self, text: &str) -> bool {
        let (letters, ascii_letters) = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .fold((0usize, 0usize), |(all, ascii), c| {
                (all + 1, ascii + usize::from(c.is_ascii_alphabetic()))
            });

        if letters == 0 {
            return true;
        }

        if (ascii_letters as f32 / letters as f32) < self.min_latin_ratio {
            return false;
        }

        let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();
        if words.len() <= SHORT_PHRASE_WORDS {
            return true;
        }

        words.iter().any(|w| COMMON_WORDS.contains(&w.as_str()))
    }
}
