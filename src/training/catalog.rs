//! Algorithms shown on the training screen and their baseline figures.

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Algorithm {
    pub name: &'static str,
    pub base_accuracy: f64,
    /// Baseline training time in milliseconds.
    pub base_train_ms: f64,
}

pub const ALGORITHMS: [Algorithm; 6] = [
    Algorithm { name: "Linear Regression", base_accuracy: 0.78, base_train_ms: 150.0 },
    Algorithm { name: "Random Forest", base_accuracy: 0.89, base_train_ms: 800.0 },
    Algorithm { name: "XGBoost", base_accuracy: 0.94, base_train_ms: 1000.0 },
    Algorithm { name: "Gradient Boosting", base_accuracy: 0.92, base_train_ms: 1200.0 },
    Algorithm { name: "Support Vector Machine", base_accuracy: 0.85, base_train_ms: 2000.0 },
    Algorithm { name: "Neural Network", base_accuracy: 0.91, base_train_ms: 3000.0 },
];
