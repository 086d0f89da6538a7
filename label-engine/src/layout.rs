//! Auto-layout suggestion
//!
//! Greedy single-column stacking: each enabled field gets its own vertical
//! band, so the suggestion never overlaps. Nothing guarantees it fits the
//! label height; re-validate the result.

use shared::models::{FieldSize, LabelSize, Position, TemplateField};
use tracing::{debug, instrument};

use crate::limits::LayoutOptions;

/// Suggest positions with the default margin and spacing
pub fn suggest_layout(fields: &[TemplateField], label_size: LabelSize) -> Vec<TemplateField> {
    suggest_layout_with(fields, label_size, LayoutOptions::default())
}

/// Suggest positions for `fields`
///
/// Returns a new list: required fields first, then by type precedence
/// (stable). Disabled fields are kept in that order but not moved. The input
/// is left untouched.
#[instrument(level = "debug", skip(fields), fields(field_count = fields.len(), label_size = %label_size))]
pub fn suggest_layout_with(
    fields: &[TemplateField],
    label_size: LabelSize,
    options: LayoutOptions,
) -> Vec<TemplateField> {
    let dims = label_size.dimensions();
    let available_width = dims.width - options.margin * 2.0;

    let mut sorted = fields.to_vec();
    sorted.sort_by_key(|f| (!f.required, f.field_type.precedence()));

    let mut current_y = options.margin;
    for field in sorted.iter_mut().filter(|f| f.enabled) {
        if field.size.width > available_width {
            let scale = available_width / field.size.width;
            field.size = FieldSize::new(available_width, field.size.height * scale);
        }
        field.position = Position::new(options.margin, current_y);
        current_y += field.size.height + options.spacing;
    }

    debug!(bottom = current_y - options.spacing, "Layout suggested");
    sorted
}
