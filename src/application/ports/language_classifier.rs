/// Black-box predicate deciding whether a transcript is English. Must be pure
/// and deterministic for a given text.
pub trait LanguageClassifier: Send + Sync {
    fn is_english(&self, text: &str) -> bool;
}
