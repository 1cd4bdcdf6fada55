//! Guard rails applied to every loaded configuration.
//!
//! Hard errors reject values the engine cannot work with. Warnings flag
//! values that work but probably do not do what was meant.

use thiserror::Error;

use crate::constants::MAX_SCALE_DROP;
use crate::models::CarouselConfig;

/// A configuration value the engine refuses.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    /// NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Offending field.
        field: &'static str,
    },
    /// Peek outside `[0, 0.5)` leaves no room for the slide.
    #[error("peek {value} must lie in [0, 0.5)")]
    PeekOutOfRange {
        /// Offending value.
        value: f32,
    },
    /// A length or coefficient below zero.
    #[error("{field} {value} must not be negative")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// Slide width cap of zero or less.
    #[error("max_slide_width must be positive")]
    NonPositiveSlideWidth,
    /// `interval_ms = 0`.
    #[error("autoplay interval must be positive")]
    ZeroInterval,
    /// A breakpoint override failed one of the checks above.
    #[error("breakpoint {index} ({media}): {reason}")]
    Breakpoint {
        /// Position in the breakpoint list.
        index: usize,
        /// The breakpoint's media condition.
        media: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// A soft finding with an optional remedy.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What looks wrong.
    pub message: String,
    /// How to fix it.
    pub hint: Option<String>,
}

/// Warnings collected by [`apply_guard_rails`].
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// In the order they were found.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Record a warning with a hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// No warnings.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Check `config` and every breakpoint override. Hard violations are
/// errors; everything else comes back as warnings.
pub fn apply_guard_rails(
    config: &CarouselConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    for (field, value) in [
        ("gap", config.gap),
        ("peek", config.peek),
        ("rotate_y", config.rotate_y),
        ("z_depth", config.z_depth),
        ("scale_drop", config.scale_drop),
        ("blur_max", config.blur_max),
        ("active_left_bias", config.active_left_bias),
        ("max_slide_width", config.max_slide_width),
        ("flick_threshold", config.flick_threshold),
    ] {
        if !value.is_finite() {
            return Err(ConfigGuardRailError::NonFinite { field });
        }
    }

    check_peek(config.peek).map_err(|_| {
        ConfigGuardRailError::PeekOutOfRange { value: config.peek }
    })?;
    if config.gap < 0.0 {
        return Err(ConfigGuardRailError::Negative {
            field: "gap",
            value: config.gap,
        });
    }
    if config.max_slide_width <= 0.0 {
        return Err(ConfigGuardRailError::NonPositiveSlideWidth);
    }
    if config.interval_ms == 0 {
        return Err(ConfigGuardRailError::ZeroInterval);
    }

    for (index, breakpoint) in config.breakpoints.iter().enumerate() {
        let overrides = &breakpoint.overrides;
        let fail = |reason: String| ConfigGuardRailError::Breakpoint {
            index,
            media: breakpoint.media.to_string(),
            reason,
        };

        for (field, value) in overrides.values() {
            if let Some(value) = value
                && !value.is_finite()
            {
                return Err(fail(format!("{field} must be a finite number")));
            }
        }
        if let Some(peek) = overrides.peek {
            check_peek(peek).map_err(fail)?;
        }
        if let Some(gap) = overrides.gap
            && gap < 0.0
        {
            return Err(fail(format!("gap {gap} must not be negative")));
        }
        if overrides.is_empty() {
            warnings.push(format!(
                "breakpoint {index} ({}) overrides nothing",
                breakpoint.media
            ));
        }
        if let Some(scale_drop) = overrides.scale_drop {
            warn_scale_drop(scale_drop, &mut warnings);
        }
    }

    warn_scale_drop(config.scale_drop, &mut warnings);

    if config.flick_threshold <= 0.0 {
        warnings.push_with_hint(
            "flick_threshold <= 0 turns every moving release into a flick",
            "Use a small positive speed such as 0.18 px/ms",
        );
    }

    if config.transition_ms > config.interval_ms {
        warnings.push_with_hint(
            format!(
                "transition_ms ({}) exceeds interval_ms ({})",
                config.transition_ms, config.interval_ms
            ),
            "Each slide dwells for interval_ms plus transition_ms",
        );
    }

    Ok(warnings)
}

fn check_peek(peek: f32) -> Result<(), String> {
    if (0.0..0.5).contains(&peek) {
        Ok(())
    } else {
        Err(format!("peek {peek} must lie in [0, 0.5)"))
    }
}

fn warn_scale_drop(scale_drop: f32, warnings: &mut ConfigWarnings) {
    if scale_drop >= MAX_SCALE_DROP {
        warnings.push_with_hint(
            format!("scale_drop {scale_drop} hits the {MAX_SCALE_DROP} clamp"),
            "Every non-active slide will render at the same scale",
        );
    }
}
