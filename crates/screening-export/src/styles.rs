use serde::{Deserialize, Serialize};

use screening_instruments::scoring::Severity;

/// Page styling for rendered questionnaires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageStyles {
    /// CSS font stack for body text.
    pub body_font: String,

    /// Colour of primary call-to-action buttons.
    pub primary_color: String,

    /// Colour of secondary call-to-action buttons.
    pub secondary_color: String,

    /// Result accent colours, one per severity class.
    pub minimal_color: String,
    pub mild_color: String,
    pub moderate_color: String,
    pub moderately_severe_color: String,
    pub severe_color: String,
}

impl Default for PageStyles {
    fn default() -> Self {
        Self {
            body_font: "system-ui, -apple-system, Segoe UI, Roboto, sans-serif".to_string(),
            primary_color: "#2563eb".to_string(),
            secondary_color: "#f97316".to_string(),
            minimal_color: "#10b981".to_string(),
            mild_color: "#84cc16".to_string(),
            moderate_color: "#f59e0b".to_string(),
            moderately_severe_color: "#f97316".to_string(),
            severe_color: "#ef4444".to_string(),
        }
    }
}

impl PageStyles {
    /// Accent colour for a result card.
    pub fn accent(&self, severity: Severity) -> &str {
        match severity {
            Severity::Minimal => &self.minimal_color,
            Severity::Mild => &self.mild_color,
            Severity::Moderate => &self.moderate_color,
            Severity::ModeratelySevere => &self.moderately_severe_color,
            Severity::Severe => &self.severe_color,
        }
    }
}
