//! Day/night presentation variables.
//!
//! A [`Palette`] carries the `--color-dark`/`--color-light` custom properties
//! (bare RGB triplets, consumed as `rgba(var(--color-dark), 0.8)` by
//! stylesheets) plus body colors. Applying a theme never touches filter or
//! page state.

use std::fmt::{Display, Formatter, Result as FmtResult};

const INK: &str = "10, 10, 20";
const PAPER: &str = "255, 255, 255";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Day,
    Night,
}
impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    /// Settings form semantics: only `"night"` selects [`Theme::Night`].
    pub fn from_form_value(value: impl AsRef<str>) -> Self {
        match value.as_ref().trim() {
            "night" => Self::Night,
            _ => Self::Day,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Day => Palette {
                theme: *self,
                dark: INK,
                light: PAPER,
                background: "white",
                foreground: "black",
            },
            // Night swaps the triplets around.
            Theme::Night => Palette {
                theme: *self,
                dark: PAPER,
                light: INK,
                background: "black",
                foreground: "white",
            },
        }
    }
}
impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation variables for a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    /// `--color-dark` RGB triplet
    pub dark: &'static str,
    /// `--color-light` RGB triplet
    pub light: &'static str,
    /// Body background color
    pub background: &'static str,
    /// Body text color
    pub foreground: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("night", Theme::Night)]
    #[case(" night ", Theme::Night)]
    #[case("day", Theme::Day)]
    #[case("", Theme::Day)]
    #[case("Night", Theme::Day)]
    fn form_values(#[case] value: &str, #[case] expected: Theme) {
        assert_eq!(Theme::from_form_value(value), expected);
    }

    #[test]
    fn night_swaps_colors() {
        let day = Theme::Day.palette();
        let night = Theme::Night.palette();
        assert_eq!(day.dark, night.light);
        assert_eq!(day.light, night.dark);
        assert_eq!((day.background, day.foreground), ("white", "black"));
        assert_eq!((night.background, night.foreground), ("black", "white"));
    }
}
