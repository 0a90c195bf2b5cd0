//! Library surface of the freq-charts CLI
//!
//! Exposes the SVG drawing backend so integration tests (and embedders
//! that want file output) can reuse it.

pub mod svg;

pub use svg::SvgSurface;
