//! Bounds and overlap checks

use shared::models::{LabelSize, TemplateField};

/// Check that a field sits inside the label
///
/// Every violated edge produces its own message.
pub fn validate_field_position(field: &TemplateField, label_size: LabelSize) -> Vec<String> {
    let dims = label_size.dimensions();
    let mut errors = Vec::new();

    if field.position.x < 0.0 {
        errors.push(format!("{}: X position cannot be negative", field.label));
    }
    if field.position.y < 0.0 {
        errors.push(format!("{}: Y position cannot be negative", field.label));
    }
    if field.position.x + field.size.width > dims.width {
        errors.push(format!(
            "{}: Field extends beyond right edge of label",
            field.label
        ));
    }
    if field.position.y + field.size.height > dims.height {
        errors.push(format!(
            "{}: Field extends beyond bottom edge of label",
            field.label
        ));
    }

    errors
}

/// Report every pair of enabled fields whose boxes intersect
pub fn detect_field_overlaps(fields: &[TemplateField]) -> Vec<String> {
    let enabled: Vec<&TemplateField> = fields.iter().filter(|f| f.enabled).collect();
    let mut errors = Vec::new();

    for (i, a) in enabled.iter().enumerate() {
        let bounds = a.bounds();
        for b in &enabled[i + 1..] {
            if bounds.intersects(&b.bounds()) {
                errors.push(format!("Fields \"{}\" and \"{}\" overlap", a.label, b.label));
            }
        }
    }

    errors
}
