//! Per-field size and text style checks

use shared::models::{FieldType, TemplateField};

use super::{TemplateValidator, fmt_pt};

/// Absorbs float noise in `font_size * line_height_factor`
const EPSILON: f64 = 1e-9;

impl TemplateValidator {
    /// Check dimensions and type-specific readability floors
    pub fn validate_field_size(&self, field: &TemplateField) -> Vec<String> {
        let limits = &self.limits;
        let name = &field.label;
        let (width, height) = (field.size.width, field.size.height);
        let mut errors = Vec::new();

        if field.label.trim().is_empty() {
            errors.push(format!("Field {}: label is required", field.id));
        }
        if width <= 0.0 {
            errors.push(format!("{name}: Width must be greater than 0"));
        }
        if height <= 0.0 {
            errors.push(format!("{name}: Height must be greater than 0"));
        }

        match field.field_type {
            FieldType::Barcode => {
                let min = limits.barcode_min;
                if width < min.width {
                    errors.push(format!(
                        "{name}: Barcode width should be at least {}pt for readability",
                        fmt_pt(min.width)
                    ));
                }
                if height < min.height {
                    errors.push(format!(
                        "{name}: Barcode height should be at least {}pt for readability",
                        fmt_pt(min.height)
                    ));
                }
            }
            FieldType::QrCode => {
                let min = limits.qr_min;
                if width < min.width {
                    errors.push(format!(
                        "{name}: QR code width should be at least {}pt",
                        fmt_pt(min.width)
                    ));
                }
                if height < min.height {
                    errors.push(format!(
                        "{name}: QR code height should be at least {}pt",
                        fmt_pt(min.height)
                    ));
                }
                if (width - height).abs() > limits.qr_square_tolerance {
                    errors.push(format!(
                        "{name}: QR code should be square (width and height within {}pt)",
                        fmt_pt(limits.qr_square_tolerance)
                    ));
                }
            }
            FieldType::Text => {
                if let Some(font_size) = field.font_size() {
                    let min_height = font_size * limits.line_height_factor;
                    if height + EPSILON < min_height {
                        errors.push(format!(
                            "{name}: Field height should be at least {}pt for {}pt font",
                            fmt_pt(min_height),
                            fmt_pt(font_size)
                        ));
                    }
                }
            }
            _ => {}
        }

        errors
    }

    /// Check font size bounds on text fields
    pub fn validate_text_field(&self, field: &TemplateField) -> Vec<String> {
        let mut errors = Vec::new();
        if field.field_type != FieldType::Text {
            return errors;
        }

        if let Some(font_size) = field.font_size() {
            if font_size < self.limits.min_font_size {
                errors.push(format!(
                    "{}: Font size must be at least {}pt for readability",
                    field.label,
                    fmt_pt(self.limits.min_font_size)
                ));
            }
            if font_size > self.limits.max_font_size {
                errors.push(format!(
                    "{}: Font size cannot exceed {}pt",
                    field.label,
                    fmt_pt(self.limits.max_font_size)
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::super::{validate_field_size, validate_text_field};
    use shared::models::{FieldSize, FieldStyle, FieldType, Position, TemplateField};

    fn field(field_type: FieldType, w: f64, h: f64) -> TemplateField {
        TemplateField::new("f", field_type, "Field", Position::new(0.0, 0.0), FieldSize::new(w, h))
    }

    fn text(font_size: f64, h: f64) -> TemplateField {
        field(FieldType::Text, 100.0, h).with_style(FieldStyle::with_font_size(font_size))
    }

    #[test]
    fn test_zero_size() {
        let errors = validate_field_size(&field(FieldType::Image, 0.0, -1.0));
        assert_eq!(
            errors,
            vec![
                "Field: Width must be greater than 0",
                "Field: Height must be greater than 0"
            ]
        );
    }

    #[test]
    fn test_empty_label() {
        let mut f = field(FieldType::Line, 10.0, 1.0);
        f.label = "  ".to_string();
        assert_eq!(validate_field_size(&f), vec!["Field f: label is required"]);
    }

    #[test]
    fn test_barcode_thresholds() {
        assert!(validate_field_size(&field(FieldType::Barcode, 50.0, 30.0)).is_empty());

        let errors = validate_field_size(&field(FieldType::Barcode, 49.9, 29.9));
        assert_eq!(
            errors,
            vec![
                "Field: Barcode width should be at least 50pt for readability",
                "Field: Barcode height should be at least 30pt for readability",
            ]
        );
    }

    #[test]
    fn test_qr_minimum() {
        let errors = validate_field_size(&field(FieldType::QrCode, 40.0, 40.0));
        assert_eq!(
            errors,
            vec![
                "Field: QR code width should be at least 50pt",
                "Field: QR code height should be at least 50pt",
            ]
        );
    }

    #[test]
    fn test_qr_squareness() {
        assert!(validate_field_size(&field(FieldType::QrCode, 50.0, 54.0)).is_empty());
        assert!(validate_field_size(&field(FieldType::QrCode, 50.0, 55.0)).is_empty());

        let errors = validate_field_size(&field(FieldType::QrCode, 50.0, 56.0));
        assert_eq!(
            errors,
            vec!["Field: QR code should be square (width and height within 5pt)"]
        );
    }

    #[test]
    fn test_text_line_height() {
        assert!(validate_field_size(&text(10.0, 12.0)).is_empty());
        assert!(validate_field_size(&field(FieldType::Text, 100.0, 1.0)).is_empty());

        let errors = validate_field_size(&text(10.0, 11.9));
        assert_eq!(
            errors,
            vec!["Field: Field height should be at least 12pt for 10pt font"]
        );
    }

    #[test]
    fn test_font_size_bounds() {
        assert!(validate_text_field(&text(6.0, 100.0)).is_empty());
        assert!(validate_text_field(&text(72.0, 100.0)).is_empty());
        assert_eq!(
            validate_text_field(&text(5.0, 100.0)),
            vec!["Field: Font size must be at least 6pt for readability"]
        );
        assert_eq!(
            validate_text_field(&text(73.0, 100.0)),
            vec!["Field: Font size cannot exceed 72pt"]
        );
    }

    #[test]
    fn test_font_size_ignored_for_other_types() {
        let f = field(FieldType::Barcode, 60.0, 30.0).with_style(FieldStyle::with_font_size(2.0));
        assert!(validate_text_field(&f).is_empty());
    }
}
