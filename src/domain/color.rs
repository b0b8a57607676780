//! Balance colors
//!
//! A category's share of all items maps onto a four-band HSL gradient:
//! washed-out blue while underrepresented, purple and blue approaching the
//! target, cyan once it holds a quarter or more of the items.

use serde::Serialize;
use std::fmt;

/// Hue/saturation/lightness triple (degrees, percent, percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Hsl { h, s, l }
    }

    /// CSS color string with each component rounded
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

const WASHED_BLUE: Hsl = Hsl::new(220.0, 50.0, 80.0);
const DARK_PURPLE: Hsl = Hsl::new(270.0, 60.0, 45.0);
const DARK_BLUE: Hsl = Hsl::new(210.0, 70.0, 50.0);
const BRIGHT_CYAN: Hsl = Hsl::new(180.0, 85.0, 55.0);
const TOXIC_CYAN: Hsl = Hsl::new(175.0, 100.0, 50.0);

/// Linear interpolation with the amount clamped to [0, 1]
fn interpolate(start: f64, end: f64, amount: f64) -> f64 {
    let amount = amount.clamp(0.0, 1.0);
    start * (1.0 - amount) + end * amount
}

fn blend(from: Hsl, to: Hsl, amount: f64) -> Hsl {
    Hsl {
        h: interpolate(from.h, to.h, amount),
        s: interpolate(from.s, to.s, amount),
        l: interpolate(from.l, to.l, amount),
    }
}

/// Color for a category share in percent.
///
/// Bands break at 15, 20 and 25. Values beyond either end pin to the
/// outermost anchor; NaN is treated as 0.
pub fn color_for_percent(p: f64) -> Hsl {
    let p = if p.is_nan() { 0.0 } else { p };

    if p >= 25.0 {
        blend(BRIGHT_CYAN, TOXIC_CYAN, (p - 25.0) / 25.0)
    } else if p >= 20.0 {
        blend(DARK_BLUE, BRIGHT_CYAN, (p - 20.0) / 5.0)
    } else if p >= 15.0 {
        blend(DARK_PURPLE, DARK_BLUE, (p - 15.0) / 5.0)
    } else {
        blend(WASHED_BLUE, DARK_PURPLE, p / 15.0)
    }
}

/// Traffic-light rating of a category share used by the pie legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// 20% to 25%
    Balanced,
    /// 15% up to 20%
    Close,
    /// Below 15% or above 25%
    Off,
}

impl BalanceStatus {
    pub fn for_percent(p: f64) -> Self {
        if (20.0..=25.0).contains(&p) {
            BalanceStatus::Balanced
        } else if (15.0..20.0).contains(&p) {
            BalanceStatus::Close
        } else {
            BalanceStatus::Off
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            BalanceStatus::Balanced => "#10b981",
            BalanceStatus::Close => "#f59e0b",
            BalanceStatus::Off => "#ef4444",
        }
    }
}

/// Page accent gradient derived from the share of progress items
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceTheme {
    pub start: Hsl,
    pub end: Hsl,
}

impl BalanceTheme {
    /// Gradient spanning 2.5 points either side of the progress share
    pub fn for_progress_share(pct: f64) -> Self {
        BalanceTheme {
            start: color_for_percent((pct - 2.5).max(0.0)),
            end: color_for_percent(pct + 2.5),
        }
    }
}
