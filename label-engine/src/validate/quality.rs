//! Thermal print-quality warnings
//!
//! Advisory only: nothing here makes a template invalid.

use shared::models::{LabelSize, TemplateField};

use super::{TemplateValidator, fmt_pt};

impl TemplateValidator {
    /// Warn about fields below thermal minimums and about crowded labels
    pub fn validate_print_quality(
        &self,
        fields: &[TemplateField],
        label_size: LabelSize,
    ) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut covered = 0.0;

        for field in fields.iter().filter(|f| f.enabled) {
            if let Some(min) = self.limits.thermal_min(field.field_type)
                && (field.size.width < min.width || field.size.height < min.height)
            {
                warnings.push(format!(
                    "{}: Below recommended thermal printing size ({}x{}pt minimum)",
                    field.label,
                    fmt_pt(min.width),
                    fmt_pt(min.height)
                ));
            }
            covered += field.area();
        }

        let density = covered / label_size.dimensions().area();
        if density > self.limits.max_density {
            warnings.push(format!(
                "Label appears crowded ({}% coverage); consider a larger label size or fewer fields",
                (density * 100.0).round()
            ));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::super::validate_print_quality;
    use shared::models::{FieldSize, FieldType, LabelSize, Position, TemplateField};

    fn field(field_type: FieldType, w: f64, h: f64) -> TemplateField {
        TemplateField::new("f", field_type, "F", Position::new(0.0, 0.0), FieldSize::new(w, h))
    }

    #[test]
    fn test_thermal_minimums() {
        let fields = vec![
            field(FieldType::Text, 29.0, 12.0),
            field(FieldType::Barcode, 60.0, 24.0),
            field(FieldType::QrCode, 40.0, 40.0),
            field(FieldType::Image, 1.0, 1.0),
        ];
        let warnings = validate_print_quality(&fields, LabelSize::A4);
        assert_eq!(
            warnings,
            vec![
                "F: Below recommended thermal printing size (30x12pt minimum)",
                "F: Below recommended thermal printing size (60x25pt minimum)",
            ]
        );
    }

    #[test]
    fn test_density_boundary() {
        // Receipt is 226x600: 480pt high is exactly 80%, 486pt is 81%
        let at_limit = vec![field(FieldType::Rectangle, 226.0, 480.0)];
        assert!(validate_print_quality(&at_limit, LabelSize::Receipt).is_empty());

        let over = vec![field(FieldType::Rectangle, 226.0, 486.0)];
        let warnings = validate_print_quality(&over, LabelSize::Receipt);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Label appears crowded (81% coverage)"));
    }

    #[test]
    fn test_disabled_fields_not_counted() {
        let fields = vec![
            field(FieldType::Rectangle, 226.0, 600.0).disabled(),
            field(FieldType::Text, 1.0, 1.0).disabled(),
        ];
        assert!(validate_print_quality(&fields, LabelSize::Receipt).is_empty());
    }
}
