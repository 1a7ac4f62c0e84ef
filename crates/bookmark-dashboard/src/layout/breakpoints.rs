//! Viewport width tiers and per-tier values.

use serde::Serialize;
use std::fmt;

/// Responsive breakpoint class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthTier {
    /// Below 640px.
    Narrow,
    /// 640px and up.
    Small,
    /// 768px and up.
    Medium,
    /// 1024px and up.
    Wide,
}

impl WidthTier {
    /// Every tier, narrowest first.
    pub const ALL: [WidthTier; 4] = [
        WidthTier::Narrow,
        WidthTier::Small,
        WidthTier::Medium,
        WidthTier::Wide,
    ];

    /// Tier for a viewport `width` in CSS pixels.
    pub fn from_width(width: u32) -> Self {
        match width {
            w if w >= WidthTier::Wide.min_width() => WidthTier::Wide,
            w if w >= WidthTier::Medium.min_width() => WidthTier::Medium,
            w if w >= WidthTier::Small.min_width() => WidthTier::Small,
            _ => WidthTier::Narrow,
        }
    }

    /// Smallest width that falls in this tier.
    pub fn min_width(self) -> u32 {
        match self {
            WidthTier::Narrow => 0,
            WidthTier::Small => 640,
            WidthTier::Medium => 768,
            WidthTier::Wide => 1024,
        }
    }

    /// Utility-class prefix of this tier (`""` for the base tier).
    pub fn prefix(self) -> &'static str {
        match self {
            WidthTier::Narrow => "",
            WidthTier::Small => "sm:",
            WidthTier::Medium => "md:",
            WidthTier::Wide => "lg:",
        }
    }
}

impl fmt::Display for WidthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidthTier::Narrow => "narrow",
            WidthTier::Small => "small",
            WidthTier::Medium => "medium",
            WidthTier::Wide => "wide",
        };
        f.write_str(name)
    }
}

/// One value per width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Responsive {
    /// Value below 640px.
    pub narrow: u16,
    /// Value from 640px.
    pub small: u16,
    /// Value from 768px.
    pub medium: u16,
    /// Value from 1024px.
    pub wide: u16,
}

impl Responsive {
    /// Builds a set from the four tier values, narrowest first.
    pub const fn new(narrow: u16, small: u16, medium: u16, wide: u16) -> Self {
        Self {
            narrow,
            small,
            medium,
            wide,
        }
    }

    /// Same value at every tier.
    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Value in effect at `tier`.
    pub fn at(&self, tier: WidthTier) -> u16 {
        match tier {
            WidthTier::Narrow => self.narrow,
            WidthTier::Small => self.small,
            WidthTier::Medium => self.medium,
            WidthTier::Wide => self.wide,
        }
    }

    /// Renders as utility classes, e.g. `grid-cols-1 sm:grid-cols-2`.
    ///
    /// A tier is only emitted when its value differs from the tier below.
    /// Values above 12 have no stock utility and use the arbitrary-value form.
    pub fn classes(&self, utility: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut previous = None;
        for tier in WidthTier::ALL {
            let value = self.at(tier);
            if previous == Some(value) {
                continue;
            }
            previous = Some(value);
            let body = if value > 12 {
                format!("[repeat({value},minmax(0,1fr))]")
            } else {
                value.to_string()
            };
            out.push(format!("{}{utility}-{body}", tier.prefix()));
        }
        out.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width_boundaries() {
        assert_eq!(WidthTier::from_width(0), WidthTier::Narrow);
        assert_eq!(WidthTier::from_width(639), WidthTier::Narrow);
        assert_eq!(WidthTier::from_width(640), WidthTier::Small);
        assert_eq!(WidthTier::from_width(767), WidthTier::Small);
        assert_eq!(WidthTier::from_width(768), WidthTier::Medium);
        assert_eq!(WidthTier::from_width(1023), WidthTier::Medium);
        assert_eq!(WidthTier::from_width(1024), WidthTier::Wide);
        assert_eq!(WidthTier::from_width(u32::MAX), WidthTier::Wide);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(WidthTier::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_classes_skip_repeated_values() {
        let spec = Responsive::new(1, 2, 2, 2);
        assert_eq!(spec.classes("grid-cols"), "grid-cols-1 sm:grid-cols-2");
        assert_eq!(Responsive::uniform(12).classes("col-span"), "col-span-12");
    }

    #[test]
    fn test_classes_arbitrary_value_above_twelve() {
        let spec = Responsive::new(8, 8, 16, 12);
        assert_eq!(
            spec.classes("grid-cols"),
            "grid-cols-8 md:grid-cols-[repeat(16,minmax(0,1fr))] lg:grid-cols-12"
        );
    }
}
