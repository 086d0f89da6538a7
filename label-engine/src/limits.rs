//! Readability and layout constants
//!
//! The defaults are the fixed contract values; a caller may tune them through
//! [`ValidationLimits`] and [`LayoutOptions`] without touching the checks.

use shared::models::FieldType;

/// Minimum width/height pair in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinSize {
    pub width: f64,
    pub height: f64,
}

impl MinSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Thresholds used by the template validator
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationLimits {
    /// Barcode readability floor
    pub barcode_min: MinSize,
    /// QR code readability floor
    pub qr_min: MinSize,
    /// Maximum allowed `|width - height|` for QR codes
    pub qr_square_tolerance: f64,
    /// Text field height must be at least `font_size * line_height_factor`
    pub line_height_factor: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
    /// Thermal-printing minimums (warnings only)
    pub thermal_text_min: MinSize,
    pub thermal_barcode_min: MinSize,
    pub thermal_qr_min: MinSize,
    /// Coverage ratio above which the label is reported as crowded
    pub max_density: f64,
}

impl ValidationLimits {
    /// Thermal minimum for a field type, if one applies
    pub fn thermal_min(&self, field_type: FieldType) -> Option<MinSize> {
        match field_type {
            FieldType::Text => Some(self.thermal_text_min),
            FieldType::Barcode => Some(self.thermal_barcode_min),
            FieldType::QrCode => Some(self.thermal_qr_min),
            _ => None,
        }
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            barcode_min: MinSize::new(50.0, 30.0),
            qr_min: MinSize::new(50.0, 50.0),
            qr_square_tolerance: 5.0,
            line_height_factor: 1.2,
            min_font_size: 6.0,
            max_font_size: 72.0,
            thermal_text_min: MinSize::new(30.0, 12.0),
            thermal_barcode_min: MinSize::new(60.0, 25.0),
            thermal_qr_min: MinSize::new(40.0, 40.0),
            max_density: 0.8,
        }
    }
}

/// Auto-layout spacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Left/top margin, also subtracted on the right
    pub margin: f64,
    /// Vertical gap between stacked fields
    pub spacing: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin: 20.0,
            spacing: 10.0,
        }
    }
}
