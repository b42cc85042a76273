//! Result payload models.

pub mod output;

pub use output::{MetricProjection, QuickProjection, SeriesPrediction, WhatIfProjection};
