//! Console output formatter for CLI results

use colored::Colorize;
use predictor_domain::Prediction;
use std::path::Path;

/// Formats prediction results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single-record prediction
    pub fn prediction(prediction: &Prediction) -> String {
        format!("{} {}", "Predicted price:".cyan().bold(), prediction)
    }

    /// Format the summary of a batch run written to `output`
    pub fn batch_summary(rows: usize, column: &str, output: &Path) -> String {
        format!(
            "{} {} rows, column '{}' written to {}",
            "Batch complete:".green().bold(),
            rows,
            column,
            output.display()
        )
    }

    /// Format a fatal error for stderr
    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}
