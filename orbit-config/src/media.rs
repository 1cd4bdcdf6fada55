//! Width-based media conditions for responsive breakpoints.
//!
//! Only the subset of media-query syntax that affects carousel geometry is
//! understood: `(max-width: Npx)`, `(min-width: Npx)` and conjunctions of
//! those joined by `and`. A leading `all` or `screen` media type is accepted
//! and ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a media condition string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaConditionParseError {
    /// Blank input.
    #[error("media condition is empty")]
    Empty,
    /// A clause without its parentheses.
    #[error("expected a parenthesised feature, found '{0}'")]
    Unparenthesised(String),
    /// Anything other than `max-width` or `min-width`.
    #[error("unsupported media feature '{0}'")]
    UnsupportedFeature(String),
    /// Not a non-negative `px` (or unitless) number.
    #[error("invalid length '{value}' for {feature}")]
    InvalidLength {
        /// Feature the length belongs to.
        feature: String,
        /// The offending text.
        value: String,
    },
}

/// A single width bound. Both bounds are inclusive, matching CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthClause {
    /// `(max-width: Npx)`
    MaxWidth(f32),
    /// `(min-width: Npx)`
    MinWidth(f32),
}

impl WidthClause {
    /// Whether a viewport of `width` px satisfies the bound.
    pub fn matches(&self, width: f32) -> bool {
        match *self {
            Self::MaxWidth(max) => width <= max,
            Self::MinWidth(min) => width >= min,
        }
    }
}

impl fmt::Display for WidthClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxWidth(v) => write!(f, "(max-width: {v}px)"),
            Self::MinWidth(v) => write!(f, "(min-width: {v}px)"),
        }
    }
}

/// Conjunction of width clauses keyed to one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaCondition {
    clauses: Vec<WidthClause>,
}

impl MediaCondition {
    /// `(max-width: {px}px)`
    pub fn max_width(px: f32) -> Self {
        Self {
            clauses: vec![WidthClause::MaxWidth(px)],
        }
    }

    /// `(min-width: {px}px)`
    pub fn min_width(px: f32) -> Self {
        Self {
            clauses: vec![WidthClause::MinWidth(px)],
        }
    }

    /// The bounds, all of which must hold.
    pub fn clauses(&self) -> &[WidthClause] {
        &self.clauses
    }

    /// Evaluate the condition against a viewport width in CSS pixels.
    pub fn matches(&self, width: f32) -> bool {
        self.clauses.iter().all(|clause| clause.matches(width))
    }
}

impl FromStr for MediaCondition {
    type Err = MediaConditionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_ascii_lowercase();
        if lowered.is_empty() {
            return Err(MediaConditionParseError::Empty);
        }

        let mut clauses = Vec::new();
        for (position, part) in lowered.split(" and ").enumerate() {
            let part = part.trim();
            if position == 0 && matches!(part, "all" | "screen") {
                continue;
            }
            clauses.push(parse_clause(part)?);
        }

        if clauses.is_empty() {
            return Err(MediaConditionParseError::Empty);
        }
        Ok(Self { clauses })
    }
}

fn parse_clause(part: &str) -> Result<WidthClause, MediaConditionParseError> {
    let inner = part
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            MediaConditionParseError::Unparenthesised(part.to_string())
        })?;

    let (feature, value) = inner.split_once(':').ok_or_else(|| {
        MediaConditionParseError::UnsupportedFeature(inner.trim().to_string())
    })?;
    let feature = feature.trim();
    let value = value.trim();

    let clause: fn(f32) -> WidthClause = match feature {
        "max-width" => WidthClause::MaxWidth,
        "min-width" => WidthClause::MinWidth,
        other => {
            return Err(MediaConditionParseError::UnsupportedFeature(
                other.to_string(),
            ));
        }
    };

    let length = value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite() && *px >= 0.0)
        .ok_or_else(|| MediaConditionParseError::InvalidLength {
            feature: feature.to_string(),
            value: value.to_string(),
        })?;

    Ok(clause(length))
}

impl fmt::Display for MediaCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for MediaCondition {
    type Error = MediaConditionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MediaCondition> for String {
    fn from(value: MediaCondition) -> Self {
        value.to_string()
    }
}
