//! Shared UI components reusable across panels
//!
//! Contains:
//! - `chart` - Line chart for sampled curves

pub mod chart;
