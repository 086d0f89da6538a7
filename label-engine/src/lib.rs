//! # label-engine
//!
//! Shipping-label template checking and layout.
//!
//! ## Scope
//!
//! This crate decides WHERE things go on a label and whether they will print:
//! - Bounds, overlap and readability validation
//! - Required shipping fields (tracking number, sender, receiver)
//! - Thermal print-quality warnings
//! - Single-column auto-layout suggestions
//! - Sequential batch printing of already-rendered labels
//!
//! Rendering field content to pixels stays with the caller.
//!
//! ## Example
//!
//! ```ignore
//! use label_engine::{suggest_layout, validate_template};
//! use shared::models::LabelSize;
//!
//! let result = validate_template(&fields, LabelSize::FourBySix, "Standard");
//! if !result.is_valid {
//!     let fields = suggest_layout(&fields, LabelSize::FourBySix);
//!     let retry = validate_template(&fields, LabelSize::FourBySix, "Standard");
//! }
//! ```

pub mod batch;
mod error;
pub mod layout;
pub mod limits;
mod printer;
pub mod validate;

// Re-exports
pub use batch::{BatchPrinter, JobReport, JobStatus, LabelJob};
pub use error::{LabelError, LabelResult};
pub use layout::{suggest_layout, suggest_layout_with};
pub use limits::{LayoutOptions, MinSize, ValidationLimits};
pub use printer::{LabelPrinter, NetworkPrinter};
pub use validate::{
    TemplateValidator, ValidationResult, detect_field_overlaps, validate_field_position,
    validate_field_size, validate_print_quality, validate_required_fields, validate_template,
    validate_text_field,
};

use shared::models::LabelTemplate;
use tracing::{error, instrument};

/// Parse a persisted template document
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn load_template(json: &str) -> LabelResult<LabelTemplate> {
    serde_json::from_str(json).map_err(|e| {
        error!(error = %e, "Template parse failed");
        LabelError::Template(e)
    })
}
