//! Template validation
//!
//! Every check accumulates: one message per violation, nothing
//! short-circuits, so a single pass surfaces the full set of defects.
//! Errors block save/print; warnings are advisory.

mod field;
mod geometry;
mod quality;
mod required;

pub use geometry::{detect_field_overlaps, validate_field_position};
pub use required::{REQUIRED_ROLES, RequiredRole, validate_required_fields};

use serde::{Deserialize, Serialize};
use shared::models::{LabelSize, TemplateField};
use tracing::{debug, instrument};

use crate::limits::ValidationLimits;

/// Outcome of a template validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validator over a set of readability limits
///
/// `TemplateValidator::default()` applies the standard thresholds; the free
/// functions in this module are shorthands for it.
#[derive(Debug, Clone, Default)]
pub struct TemplateValidator {
    limits: ValidationLimits,
}

impl TemplateValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Run every check over a template
    #[instrument(level = "debug", skip(self, fields), fields(field_count = fields.len(), label_size = %label_size))]
    pub fn validate_template(
        &self,
        fields: &[TemplateField],
        label_size: LabelSize,
        template_name: &str,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        if template_name.trim().is_empty() {
            errors.push("Template name is required".to_string());
        }
        if fields.is_empty() {
            errors.push("Template must contain at least one field".to_string());
        }

        let enabled: Vec<&TemplateField> = fields.iter().filter(|f| f.enabled).collect();
        if enabled.is_empty() {
            errors.push("Template must have at least one enabled field".to_string());
        }

        for field in &enabled {
            errors.extend(validate_field_position(field, label_size));
        }
        for field in &enabled {
            errors.extend(self.validate_field_size(field));
        }
        for field in &enabled {
            errors.extend(self.validate_text_field(field));
        }

        errors.extend(detect_field_overlaps(fields));
        errors.extend(validate_required_fields(fields));

        let warnings = self.validate_print_quality(fields, label_size);

        debug!(
            errors = errors.len(),
            warnings = warnings.len(),
            "Template validated"
        );

        ValidationResult::new(errors, warnings)
    }
}

/// [`TemplateValidator::validate_field_size`] with default limits
pub fn validate_field_size(field: &TemplateField) -> Vec<String> {
    TemplateValidator::default().validate_field_size(field)
}

/// [`TemplateValidator::validate_text_field`] with default limits
pub fn validate_text_field(field: &TemplateField) -> Vec<String> {
    TemplateValidator::default().validate_text_field(field)
}

/// [`TemplateValidator::validate_print_quality`] with default limits
pub fn validate_print_quality(fields: &[TemplateField], label_size: LabelSize) -> Vec<String> {
    TemplateValidator::default().validate_print_quality(fields, label_size)
}

/// [`TemplateValidator::validate_template`] with default limits
pub fn validate_template(
    fields: &[TemplateField],
    label_size: LabelSize,
    template_name: &str,
) -> ValidationResult {
    TemplateValidator::default().validate_template(fields, label_size, template_name)
}

/// Format a point value without float noise (`12.000000000000002` -> `12`)
fn fmt_pt(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}
