//! Decision-tree backed obesity classifier trained on the inline sample

use std::fmt;

use linfa::prelude::{Dataset, Fit, Predict};
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2};
use tracing::{debug, info};

use crate::domain::{
    DomainError, FeatureRecord, LabeledRecord, ModelSummary, ObesityClassifier, ObesityLevel,
    TreeParams, FEATURE_COUNT, FEATURE_NAMES,
};

/// Obesity classifier fitted once at construction and queried read-only
pub struct DecisionTreeObesityClassifier {
    tree: DecisionTree<f64, usize>,
    /// Class index `i` is the `i`-th level in code order
    classes: Vec<ObesityLevel>,
    params: TreeParams,
    n_samples: usize,
}

impl DecisionTreeObesityClassifier {
    /// Fit a Gini decision tree on `sample`
    pub fn train(sample: &[LabeledRecord], params: TreeParams) -> Result<Self, DomainError> {
        if sample.is_empty() {
            return Err(DomainError::training("training sample is empty"));
        }

        let mut classes: Vec<ObesityLevel> = sample.iter().map(|r| r.level).collect();
        classes.sort_by_key(|level| level.code());
        classes.dedup();

        let records = Array2::from_shape_vec(
            (sample.len(), FEATURE_COUNT),
            sample.iter().flat_map(|r| r.features.to_vector()).collect(),
        )
        .map_err(|e| DomainError::training(e.to_string()))?;

        let targets = sample
            .iter()
            .map(|r| class_index(&classes, r.level))
            .collect::<Result<Vec<_>, _>>()?;

        let dataset = Dataset::new(records, Array1::from_vec(targets));

        let tree = DecisionTree::<f64, usize>::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(params.max_depth)
            .min_weight_split(params.min_samples_split as f32)
            .min_weight_leaf(1.0)
            .fit(&dataset)
            .map_err(|e| DomainError::training(e.to_string()))?;

        info!(
            samples = sample.len(),
            classes = classes.len(),
            depth = tree.max_depth(),
            leaves = tree.num_leaves(),
            "Decision tree trained"
        );

        Ok(Self {
            tree,
            classes,
            params,
            n_samples: sample.len(),
        })
    }
}

fn class_index(classes: &[ObesityLevel], level: ObesityLevel) -> Result<usize, DomainError> {
    classes
        .iter()
        .position(|&c| c == level)
        .ok_or_else(|| DomainError::internal(format!("Unencoded label '{}'", level.code())))
}

impl fmt::Debug for DecisionTreeObesityClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionTreeObesityClassifier")
            .field("classes", &self.classes)
            .field("params", &self.params)
            .field("n_samples", &self.n_samples)
            .finish_non_exhaustive()
    }
}

impl ObesityClassifier for DecisionTreeObesityClassifier {
    fn classify(&self, features: &FeatureRecord) -> Result<ObesityLevel, DomainError> {
        let row = features.to_vector();
        let records = Array2::from_shape_vec((1, FEATURE_COUNT), row.to_vec())
            .map_err(|e| DomainError::prediction(e.to_string()))?;

        let predicted: Array1<usize> = self.tree.predict(&records);
        let index = predicted
            .first()
            .copied()
            .ok_or_else(|| DomainError::prediction("model returned no label"))?;

        let level = self
            .classes
            .get(index)
            .copied()
            .ok_or_else(|| DomainError::prediction(format!("Unknown class index {}", index)))?;

        debug!(?row, level = %level, "Classified feature record");

        Ok(level)
    }

    fn summary(&self) -> ModelSummary {
        ModelSummary {
            algorithm: "decision_tree",
            criterion: "gini",
            n_samples: self.n_samples,
            feature_names: FEATURE_NAMES.to_vec(),
            classes: self.classes.clone(),
            depth: self.tree.max_depth(),
            n_leaves: self.tree.num_leaves(),
            max_depth: self.params.max_depth,
            min_samples_split: self.params.min_samples_split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::training_sample;

    fn classifier() -> DecisionTreeObesityClassifier {
        DecisionTreeObesityClassifier::train(training_sample(), TreeParams::default()).unwrap()
    }

    fn record(age: f64, weight: f64, height: f64, fhwo: u8, favc: u8, faf: u8) -> FeatureRecord {
        FeatureRecord {
            age,
            weight,
            height,
            fhwo,
            favc,
            faf,
        }
    }

    #[test]
    fn test_reproduces_training_labels() {
        let classifier = classifier();

        for row in training_sample() {
            let level = classifier.classify(&row.features).unwrap();
            assert_eq!(level, row.level, "row {:?}", row.features);
        }
    }

    #[test]
    fn test_reference_input_is_deterministic() {
        let input = record(30.0, 70.0, 1.70, 0, 0, 2);

        let first = classifier().classify(&input).unwrap();
        let second = classifier().classify(&input).unwrap();
        let repeated = classifier();

        assert_eq!(first, second);
        assert_eq!(
            repeated.classify(&input).unwrap(),
            repeated.classify(&input).unwrap()
        );
        assert!(ObesityLevel::ALL.contains(&first));
    }

    #[test]
    fn test_every_input_maps_to_a_known_level() {
        let classifier = classifier();

        for age in [15.0, 30.0, 65.0] {
            for weight in [30.0, 75.5, 200.0] {
                for height in [1.0, 1.7, 2.5] {
                    for faf in 0..=3 {
                        let input = record(age, weight, height, 1, 0, faf);
                        let level = classifier.classify(&input).unwrap();
                        assert!(ObesityLevel::ALL.contains(&level));
                    }
                }
            }
        }
    }

    #[test]
    fn test_summary() {
        let summary = classifier().summary();

        assert_eq!(summary.n_samples, 10);
        assert_eq!(summary.feature_names.len(), 6);
        assert_eq!(
            summary.classes,
            vec![
                ObesityLevel::InsufficientWeight,
                ObesityLevel::Normal,
                ObesityLevel::Obesity,
                ObesityLevel::Overweight,
            ]
        );
        assert_eq!(summary.criterion, "gini");
        assert_eq!(summary.min_samples_split, 2);
        assert!(summary.n_leaves >= 4);
        assert!(summary.depth >= 2);
    }

    #[test]
    fn test_max_depth_limits_tree() {
        let params = TreeParams {
            max_depth: Some(1),
            ..TreeParams::default()
        };
        let classifier = DecisionTreeObesityClassifier::train(training_sample(), params).unwrap();
        let summary = classifier.summary();

        assert!(summary.depth <= 1);
        assert!(summary.n_leaves <= 2);
        assert_eq!(summary.max_depth, Some(1));
    }

    #[test]
    fn test_train_on_empty_sample_fails() {
        let err = DecisionTreeObesityClassifier::train(&[], TreeParams::default()).unwrap_err();
        assert!(matches!(err, DomainError::Training { .. }));
    }
}
