//! Scorecard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the scorecard
//! composer and renderer. It includes:
//!
//! - **Colors**: Hex/CSS color parsing and HSL conversion ([`color::Color`])
//! - **Palettes**: The 11-color theme derived from a primary color ([`palette::Palette`])
//! - **Geometry**: Physical page sizes, margins and printable area ([`geometry`] module)
//! - **Model**: The typed, fully-populated scorecard configuration ([`model`] module)

pub mod color;
pub mod geometry;
mod lenient;
pub mod model;
pub mod palette;
