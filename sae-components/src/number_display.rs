//! Numeric display.

use serde::{Deserialize, Serialize};

pub const COMPONENT_NUMBER_DISPLAY: &str = "number-display";

/// The host may hand over either an already formatted string or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Number(f64),
    Text(String),
}

/// Numeric options arrive as JS numbers and are kept as `f64`; range checks
/// belong to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberDisplayProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thousand_separator: Option<f64>,
    pub value: NumberValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NumberDisplayEvent {
    Click,
    Focus,
}
