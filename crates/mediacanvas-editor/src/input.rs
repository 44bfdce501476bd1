//! Numeric input validation for the property panel.
//!
//! Invalid edits are dropped without feedback. The field always renders the
//! externally supplied value, so a rejected edit reverts on the next render.

use mediacanvas_core::{CanvasError, InputRange, Result};
use tracing::debug;

/// How raw text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Whole numbers (pixel dimensions).
    Integer,
    /// Decimal numbers (seconds).
    Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    label: String,
    range: InputRange,
    format: NumberFormat,
}

impl NumericInput {
    pub fn new(label: impl Into<String>, range: InputRange, format: NumberFormat) -> Self {
        Self {
            label: label.into(),
            range,
            format,
        }
    }

    /// Integer input, default range `[10, 2000]`.
    pub fn dimension(label: impl Into<String>) -> Self {
        Self::new(label, InputRange::new(10.0, 2000.0), NumberFormat::Integer)
    }

    /// Decimal input in seconds, default range `[0, 300]`.
    pub fn time(label: impl Into<String>) -> Self {
        Self::new(label, InputRange::new(0.0, 300.0), NumberFormat::Decimal)
    }

    pub fn with_range(mut self, range: InputRange) -> Self {
        self.range = range;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Parse and range-check raw input.
    pub fn parse(&self, raw: &str) -> Result<f64> {
        let text = raw.trim();
        let parsed = match self.format {
            NumberFormat::Integer => text.parse::<i64>().ok().map(|v| v as f64),
            NumberFormat::Decimal => text.parse::<f64>().ok().filter(|v| v.is_finite()),
        };
        let value = parsed.ok_or_else(|| CanvasError::ParseFailure {
            field: self.label.clone(),
            input: raw.to_string(),
        })?;

        if !self.range.contains(value) {
            return Err(CanvasError::OutOfRange {
                field: self.label.clone(),
                value,
                min: self.range.min,
                max: self.range.max,
            });
        }
        Ok(value)
    }

    /// Hand a valid value to `on_change`; discard anything else.
    /// Returns whether `on_change` ran.
    pub fn commit<F>(&self, raw: &str, on_change: F) -> bool
    where
        F: FnOnce(f64),
    {
        match self.parse(raw) {
            Ok(value) => {
                on_change(value);
                true
            }
            Err(err) => {
                debug!(field = %self.label, error = %err, "Discarded input");
                false
            }
        }
    }

    /// Text shown in the field for the externally supplied `value`.
    pub fn display(&self, value: f64) -> String {
        match self.format {
            NumberFormat::Integer => format!("{}", value.round()),
            NumberFormat::Decimal => format!("{}", value),
        }
    }
}
