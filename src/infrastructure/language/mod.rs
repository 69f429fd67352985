mod heuristic_classifier;

pub use heuristic_classifier::HeuristicLanguageClassifier;
