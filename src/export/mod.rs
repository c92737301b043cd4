//! Template export.
//!
//! The exporter never talks to a UI framework directly: templates come from
//! a [`TemplateProvider`]. The catalog is the provider used by the binary.

pub mod error;
mod output;
mod pipeline;
mod writer;

pub use error::ExportError;
pub use output::{open_path, write_outputs};
pub use pipeline::{load_catalog, Exporter};
pub use writer::FragmentWriter;

use crate::catalog::{Catalog, TypeInfo};

/// Source of default templates for resolved types.
pub trait TemplateProvider {
    /// The template markup for `ty`, `None` if the type has none.
    fn find_template(&self, ty: &TypeInfo) -> Result<Option<String>, ExportError>;
}

impl TemplateProvider for Catalog {
    fn find_template(&self, ty: &TypeInfo) -> Result<Option<String>, ExportError> {
        Ok(ty.template.clone())
    }
}
