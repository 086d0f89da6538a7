use label_engine::{suggest_layout, validate_template};
use shared::models::{FieldSize, FieldType, LabelSize, Position, TemplateField};

fn field(id: &str, field_type: FieldType, label: &str, x: f64, y: f64, w: f64, h: f64) -> TemplateField {
    TemplateField::new(id, field_type, label, Position::new(x, y), FieldSize::new(w, h))
}

#[test]
fn test_undersized_barcode_on_4x6() {
    let fields = vec![
        field("tracking_number", FieldType::Text, "Tracking Number", 10.0, 10.0, 200.0, 30.0),
        field("barcode", FieldType::Barcode, "Barcode", 10.0, 50.0, 40.0, 20.0),
    ];

    let result = validate_template(&fields, LabelSize::FourBySix, "Parcel");

    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            "Barcode: Barcode width should be at least 50pt for readability",
            "Barcode: Barcode height should be at least 30pt for readability",
            "Missing required field: Sender Information",
            "Missing required field: Receiver Information",
        ]
    );
    assert_eq!(
        result.warnings,
        vec!["Barcode: Below recommended thermal printing size (60x25pt minimum)"]
    );
}

#[test]
fn test_suggested_layout_revalidates_clean() {
    // Everything piled at the origin
    let fields = vec![
        field("qr", FieldType::QrCode, "QR", 0.0, 0.0, 60.0, 60.0),
        field("barcode", FieldType::Barcode, "Barcode", 0.0, 0.0, 150.0, 50.0),
        field("receiver", FieldType::Text, "Receiver Information", 0.0, 0.0, 300.0, 60.0).required(),
        field("sender", FieldType::Text, "Sender Information", 0.0, 0.0, 248.0, 60.0).required(),
        field("tracking_number", FieldType::Text, "Tracking Number", 0.0, 0.0, 200.0, 30.0).required(),
        field("legacy", FieldType::Image, "Old Logo", 0.0, 0.0, 80.0, 80.0).disabled(),
    ];

    let before = validate_template(&fields, LabelSize::FourBySix, "Parcel");
    assert!(!before.is_valid);
    assert!(before.errors.iter().any(|e| e.ends_with("overlap")));

    let suggested = suggest_layout(&fields, LabelSize::FourBySix);
    let after = validate_template(&suggested, LabelSize::FourBySix, "Parcel");
    assert!(after.is_valid, "{:?}", after.errors);

    let order: Vec<&str> = suggested.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        order,
        vec!["receiver", "sender", "tracking_number", "barcode", "qr", "legacy"]
    );
    // Too wide for the 248pt column: scaled down keeping aspect ratio
    assert_eq!(suggested[0].size.width, 248.0);
    assert!((suggested[0].size.height - 49.6).abs() < 1e-9);
    // Disabled field keeps its place
    assert_eq!(suggested[5].position, Position::new(0.0, 0.0));
}
