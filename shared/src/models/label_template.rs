//! Label Template Model
//!
//! Geometry is expressed in points (pt) with a top-left origin.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label field type
///
/// Closed tag set; declaration order is the auto-layout precedence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[default]
    Text,
    Barcode,
    QrCode,
    Image,
    Line,
    Rectangle,
}

impl FieldType {
    /// Auto-layout precedence (lower sorts first)
    pub fn precedence(self) -> usize {
        match self {
            FieldType::Text => 0,
            FieldType::Barcode => 1,
            FieldType::QrCode => 2,
            FieldType::Image => 3,
            FieldType::Line => 4,
            FieldType::Rectangle => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Barcode => "barcode",
            FieldType::QrCode => "qr_code",
            FieldType::Image => "image",
            FieldType::Line => "line",
            FieldType::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label field alignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Top-left corner of a field
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldSize {
    pub width: f64,
    pub height: f64,
}

impl FieldSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box `[left, right] × [top, bottom]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    /// Open-rectangle intersection: shared edges do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BorderStyle {
    pub width: f64,
    pub color: Option<String>,
    /// solid | dashed | dotted
    pub style: Option<String>,
}

/// Visual style, only meaningful for renderable types
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldStyle {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub border: Option<BorderStyle>,
}

impl FieldStyle {
    pub fn with_font_size(font_size: f64) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }
}

/// Type-specific payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldData {
    /// Barcode symbology, e.g. `CODE128`
    pub barcode_format: Option<String>,
    /// QR error-correction level: L | M | Q | H
    pub qr_error_correction: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

/// One placeable element on a label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateField {
    /// Stable across edits
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub required: bool,
    pub position: Position,
    pub size: FieldSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FieldStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FieldData>,
}

impl TemplateField {
    /// Create an enabled, optional field with no style or payload
    pub fn new(
        id: impl Into<String>,
        field_type: FieldType,
        label: impl Into<String>,
        position: Position,
        size: FieldSize,
    ) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            enabled: true,
            required: false,
            position,
            size,
            style: None,
            data: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_style(mut self, style: FieldStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_data(mut self, data: FieldData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn font_size(&self) -> Option<f64> {
        self.style.as_ref().and_then(|s| s.font_size)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.position.x,
            top: self.position.y,
            right: self.position.x + self.size.width,
            bottom: self.position.y + self.size.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }
}

// ============================================================================
// Label sizes
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pt,
}

/// Physical label dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LabelDimensions {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

impl LabelDimensions {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Named label size preset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LabelSize {
    A4,
    A5,
    A6,
    #[default]
    #[serde(rename = "4x6")]
    FourBySix,
    Receipt,
}

impl LabelSize {
    pub const ALL: [LabelSize; 5] = [
        LabelSize::A4,
        LabelSize::A5,
        LabelSize::A6,
        LabelSize::FourBySix,
        LabelSize::Receipt,
    ];

    /// Fixed dimensions in points
    pub const fn dimensions(self) -> LabelDimensions {
        let (width, height) = match self {
            LabelSize::A4 => (595.0, 842.0),
            LabelSize::A5 => (420.0, 595.0),
            LabelSize::A6 => (298.0, 420.0),
            LabelSize::FourBySix => (288.0, 432.0),
            LabelSize::Receipt => (226.0, 600.0),
        };
        LabelDimensions {
            width,
            height,
            unit: Unit::Pt,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            LabelSize::A4 => "A4",
            LabelSize::A5 => "A5",
            LabelSize::A6 => "A6",
            LabelSize::FourBySix => "4x6",
            LabelSize::Receipt => "Receipt",
        }
    }
}

impl fmt::Display for LabelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown label size: {0}")]
pub struct UnknownLabelSize(pub String);

impl FromStr for LabelSize {
    type Err = UnknownLabelSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelSize::ALL
            .into_iter()
            .find(|size| size.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabelSize(s.to_string()))
    }
}

/// Persisted label template document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelTemplate {
    pub name: String,
    #[serde(default)]
    pub label_size: LabelSize,
    #[serde(default)]
    pub fields: Vec<TemplateField>,
}

impl LabelTemplate {
    pub fn new(name: impl Into<String>, label_size: LabelSize, fields: Vec<TemplateField>) -> Self {
        Self {
            name: name.into(),
            label_size,
            fields,
        }
    }

    pub fn enabled_fields(&self) -> impl Iterator<Item = &TemplateField> {
        self.fields.iter().filter(|f| f.enabled)
    }
}
