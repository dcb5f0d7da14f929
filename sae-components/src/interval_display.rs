//! Time interval display.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalDisplayProps {
    pub is_highlighted: bool,
    pub prefix: String,
    pub postfix: String,
    /// Divisor applied to `value` to get seconds.
    pub seconds_denominator: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IntervalDisplayEvent {
    Click,
}
