//! Progress alignment flags
//!
//! A small combinable flag set used to place a square indicator inside the
//! available space. Horizontal and vertical flags resolve independently,
//! except that `CENTER` (both center bits) always centers both axes.

use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use iced::alignment::{Horizontal, Vertical};

/// Combinable alignment flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment(u8);

impl Alignment {
    pub const LEFT: Self = Self(0x01);
    pub const RIGHT: Self = Self(0x02);
    pub const HCENTER: Self = Self(0x04);
    pub const TOP: Self = Self(0x10);
    pub const BOTTOM: Self = Self(0x20);
    pub const VCENTER: Self = Self(0x40);
    pub const CENTER: Self = Self(Self::HCENTER.0 | Self::VCENTER.0);

    /// Empty flag set (pins the box to the top-left corner)
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Whether both center bits are set
    pub const fn is_center(self) -> bool {
        self.contains(Self::CENTER)
    }

    /// Resolved horizontal placement, `HCENTER > RIGHT > LEFT`
    ///
    /// Returns `None` when no horizontal flag is set.
    pub fn horizontal(self) -> Option<Horizontal> {
        if self.is_center() || self.contains(Self::HCENTER) {
            Some(Horizontal::Center)
        } else if self.contains(Self::RIGHT) {
            Some(Horizontal::Right)
        } else if self.contains(Self::LEFT) {
            Some(Horizontal::Left)
        } else {
            None
        }
    }

    /// Resolved vertical placement, `VCENTER > BOTTOM > TOP`
    pub fn vertical(self) -> Option<Vertical> {
        if self.is_center() || self.contains(Self::VCENTER) {
            Some(Vertical::Center)
        } else if self.contains(Self::BOTTOM) {
            Some(Vertical::Bottom)
        } else if self.contains(Self::TOP) {
            Some(Vertical::Top)
        } else {
            None
        }
    }

    /// Common placements offered by the demo pick list
    pub fn presets() -> Vec<Self> {
        vec![
            Self::CENTER,
            Self::TOP | Self::LEFT,
            Self::TOP | Self::HCENTER,
            Self::TOP | Self::RIGHT,
            Self::VCENTER | Self::LEFT,
            Self::VCENTER | Self::RIGHT,
            Self::BOTTOM | Self::LEFT,
            Self::BOTTOM | Self::HCENTER,
            Self::BOTTOM | Self::RIGHT,
        ]
    }

    fn flag_names(self) -> Vec<&'static str> {
        if self.is_center() && self.0 & !Self::CENTER.0 == 0 {
            return vec!["center"];
        }
        [
            (Self::LEFT, "left"),
            (Self::RIGHT, "right"),
            (Self::HCENTER, "hcenter"),
            (Self::TOP, "top"),
            (Self::BOTTOM, "bottom"),
            (Self::VCENTER, "vcenter"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::CENTER
    }
}

impl BitOr for Alignment {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Alignment {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

/// Error for unparseable alignment strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlignmentError(pub String);

impl std::fmt::Display for ParseAlignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown alignment flag: {}", self.0)
    }
}

impl std::error::Error for ParseAlignmentError {}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    /// Parses `|`-separated flag names, e.g. `"top|right"` or `"center"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut alignment = Self::empty();
        for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
            alignment |= match part.to_ascii_lowercase().as_str() {
                "left" => Self::LEFT,
                "right" => Self::RIGHT,
                "hcenter" => Self::HCENTER,
                "top" => Self::TOP,
                "bottom" => Self::BOTTOM,
                "vcenter" => Self::VCENTER,
                "center" => Self::CENTER,
                "none" => Self::empty(),
                _ => return Err(ParseAlignmentError(part.to_string())),
            };
        }
        Ok(alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_overrides_edges() {
        let alignment = Alignment::CENTER | Alignment::LEFT | Alignment::BOTTOM;
        assert_eq!(alignment.horizontal(), Some(Horizontal::Center));
        assert_eq!(alignment.vertical(), Some(Vertical::Center));
    }

    #[test]
    fn test_axes_resolve_independently() {
        let alignment = Alignment::RIGHT | Alignment::TOP;
        assert_eq!(alignment.horizontal(), Some(Horizontal::Right));
        assert_eq!(alignment.vertical(), Some(Vertical::Top));
        assert!(!alignment.is_center());
    }

    #[test]
    fn test_single_center_bit_is_not_full_center() {
        let alignment = Alignment::HCENTER | Alignment::BOTTOM;
        assert!(!alignment.is_center());
        assert_eq!(alignment.horizontal(), Some(Horizontal::Center));
        assert_eq!(alignment.vertical(), Some(Vertical::Bottom));
    }

    #[test]
    fn test_precedence_within_axis() {
        let alignment = Alignment::LEFT | Alignment::RIGHT | Alignment::TOP | Alignment::BOTTOM;
        assert_eq!(alignment.horizontal(), Some(Horizontal::Right));
        assert_eq!(alignment.vertical(), Some(Vertical::Bottom));
    }

    #[test]
    fn test_missing_axis() {
        let alignment = Alignment::LEFT;
        assert_eq!(alignment.horizontal(), Some(Horizontal::Left));
        assert_eq!(alignment.vertical(), None);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Alignment::CENTER.to_string(), "center");
        assert_eq!((Alignment::TOP | Alignment::RIGHT).to_string(), "right|top");
        assert_eq!("top | right".parse(), Ok(Alignment::TOP | Alignment::RIGHT));
        assert_eq!("Center".parse(), Ok(Alignment::CENTER));
        assert!("diagonal".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_presets_are_distinct() {
        let presets = Alignment::presets();
        for (i, a) in presets.iter().enumerate() {
            for b in presets.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
