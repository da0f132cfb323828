//! Result formatting for the display contract.

use capm_api::DisplayConfig;

/// Format a computed expected return, or the placeholder when none exists.
///
/// `None` renders the placeholder text, kept distinct from any numeric
/// value so a fresh calculator never pretends it computed 0.00.
pub fn format_result(config: &DisplayConfig, result: Option<f64>) -> String {
    match result {
        Some(value) => format!(
            "{}{:.prec$}",
            config.prefix,
            value,
            prec = config.precision
        ),
        None => format!("{}{}", config.prefix, config.placeholder),
    }
}
