//! Classifier implementations

mod decision_tree;

pub use decision_tree::DecisionTreeObesityClassifier;
