//! Essential shipping roles every label must carry

use shared::models::TemplateField;

/// A semantic role matched by id or by label substring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredRole {
    pub id: &'static str,
    pub name: &'static str,
}

pub const REQUIRED_ROLES: [RequiredRole; 3] = [
    RequiredRole {
        id: "tracking_number",
        name: "Tracking Number",
    },
    RequiredRole {
        id: "sender",
        name: "Sender Information",
    },
    RequiredRole {
        id: "receiver",
        name: "Receiver Information",
    },
];

impl RequiredRole {
    pub fn is_satisfied_by(&self, field: &TemplateField) -> bool {
        field.id == self.id
            || field
                .label
                .to_lowercase()
                .contains(&self.name.to_lowercase())
    }
}

/// One error per role with no enabled field filling it
pub fn validate_required_fields(fields: &[TemplateField]) -> Vec<String> {
    REQUIRED_ROLES
        .iter()
        .filter(|role| {
            !fields
                .iter()
                .any(|f| f.enabled && role.is_satisfied_by(f))
        })
        .map(|role| format!("Missing required field: {}", role.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{FieldSize, FieldType, Position};

    fn text(id: &str, label: &str) -> TemplateField {
        TemplateField::new(
            id,
            FieldType::Text,
            label,
            Position::new(0.0, 0.0),
            FieldSize::new(10.0, 10.0),
        )
    }

    #[test]
    fn test_all_roles_missing() {
        assert_eq!(
            validate_required_fields(&[]),
            vec![
                "Missing required field: Tracking Number",
                "Missing required field: Sender Information",
                "Missing required field: Receiver Information",
            ]
        );
    }

    #[test]
    fn test_match_by_id() {
        let fields = vec![
            text("tracking_number", "TN"),
            text("sender", "From"),
            text("receiver", "To"),
        ];
        assert!(validate_required_fields(&fields).is_empty());
    }

    #[test]
    fn test_label_substring_match() {
        let fields = vec![text("foo", "Tracking Number for Package")];
        let errors = validate_required_fields(&fields);
        assert_eq!(errors.len(), 2);
        assert!(!errors.iter().any(|e| e.contains("Tracking Number")));

        let fields = vec![
            text("a", "TRACKING NUMBER"),
            text("b", "sender information (return)"),
            text("c", "Receiver Information"),
        ];
        assert!(validate_required_fields(&fields).is_empty());
    }

    #[test]
    fn test_partial_name_does_not_match() {
        let fields = vec![text("a", "Sender"), text("b", "Tracking")];
        assert_eq!(validate_required_fields(&fields).len(), 3);
    }

    #[test]
    fn test_disabled_field_does_not_satisfy() {
        let fields = vec![text("tracking_number", "Tracking Number").disabled()];
        assert_eq!(validate_required_fields(&fields).len(), 3);
    }
}
