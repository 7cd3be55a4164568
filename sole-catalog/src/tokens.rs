//! Design tokens shared by every catalog surface.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Medium,
    Bold,
}

impl Weight {
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Normal => 500,
            Self::Medium => 600,
            Self::Bold => 800,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    White,
    Gray100,
    Gray300,
    Gray500,
    Gray700,
    Gray900,
    Primary,
    Secondary,
}

impl ColorToken {
    pub const ALL: [Self; 8] = [
        Self::White,
        Self::Gray100,
        Self::Gray300,
        Self::Gray500,
        Self::Gray700,
        Self::Gray900,
        Self::Primary,
        Self::Secondary,
    ];

    #[must_use]
    pub const fn custom_property(self) -> &'static str {
        match self {
            Self::White => "--color-white",
            Self::Gray100 => "--color-gray-100",
            Self::Gray300 => "--color-gray-300",
            Self::Gray500 => "--color-gray-500",
            Self::Gray700 => "--color-gray-700",
            Self::Gray900 => "--color-gray-900",
            Self::Primary => "--color-primary",
            Self::Secondary => "--color-secondary",
        }
    }

    #[must_use]
    pub const fn hsl(self) -> &'static str {
        match self {
            Self::White => "hsl(0deg 0% 100%)",
            Self::Gray100 => "hsl(185deg 5% 95%)",
            Self::Gray300 => "hsl(190deg 5% 80%)",
            Self::Gray500 => "hsl(196deg 4% 60%)",
            Self::Gray700 => "hsl(220deg 5% 40%)",
            Self::Gray900 => "hsl(220deg 3% 20%)",
            Self::Primary => "hsl(340deg 65% 47%)",
            Self::Secondary => "hsl(240deg 60% 63%)",
        }
    }

    /// CSS reference to the token, e.g. `var(--color-primary)`.
    #[must_use]
    pub fn var(self) -> String {
        format!("var({})", self.custom_property())
    }
}

/// `:root` block declaring every color token as a custom property.
#[must_use]
pub fn root_custom_properties() -> String {
    let mut css = String::from(":root{");
    for token in ColorToken::ALL {
        let _ = write!(css, "{}:{};", token.custom_property(), token.hsl());
    }
    css.push('}');
    css
}
