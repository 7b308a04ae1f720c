//! Output formats.
//!
//! - [`html`] renders an effective configuration to a self-contained HTML
//!   document for preview and printing.
//! - [`json`] serializes overrides for download and re-import.

pub mod html;
pub mod json;
