use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested history window for a quote fetch.
///
/// Sampling granularity is a function of the window, not an independent
/// parameter: intraday windows request minute bars, everything else one bar
/// per trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    /// 1 day, minute bars
    Day1,
    /// 5 days, minute bars
    Day5,
    /// 1 month, daily bars
    Month1,
    /// 6 months, daily bars
    Month6,
    /// Year to date, daily bars
    Ytd,
    /// 1 year, daily bars
    Year1,
    /// 5 years, daily bars
    Year5,
    /// Maximum available history, daily bars
    Max,
}

impl Window {
    /// Provider range parameter for this window
    pub fn range_param(&self) -> &'static str {
        match self {
            Window::Day1 => "1d",
            Window::Day5 => "5d",
            Window::Month1 => "1mo",
            Window::Month6 => "6mo",
            Window::Ytd => "ytd",
            Window::Year1 => "1y",
            Window::Year5 => "5y",
            Window::Max => "max",
        }
    }

    /// Provider interval parameter: minute bars intraday, session bars otherwise
    pub fn interval_param(&self) -> &'static str {
        if self.is_intraday() {
            "1m"
        } else {
            "1d"
        }
    }

    /// Whether this window samples at minute resolution
    pub fn is_intraday(&self) -> bool {
        matches!(self, Window::Day1 | Window::Day5)
    }

    /// All selectable windows, in display order
    pub fn all() -> Vec<Window> {
        vec![
            Window::Day1,
            Window::Day5,
            Window::Month1,
            Window::Month6,
            Window::Ytd,
            Window::Year1,
            Window::Year5,
            Window::Max,
        ]
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.range_param())
    }
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" => Ok(Window::Day1),
            "5d" => Ok(Window::Day5),
            "1mo" | "1m" => Ok(Window::Month1),
            "6mo" | "6m" => Ok(Window::Month6),
            "ytd" => Ok(Window::Ytd),
            "1y" => Ok(Window::Year1),
            "5y" => Ok(Window::Year5),
            "max" | "all" => Ok(Window::Max),
            other => Err(format!(
                "unknown window '{}' (expected 1d, 5d, 1mo, 6mo, ytd, 1y, 5y or max)",
                other
            )),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::Year1
    }
}
