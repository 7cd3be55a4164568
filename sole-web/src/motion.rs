// Motion preference helpers

#[cfg(target_arch = "wasm32")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Whether the visitor's system allows decorative motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    /// Read the preference from the rendering surface.
    ///
    /// Outside a browser there is nothing to ask, so motion stays enabled and
    /// the stylesheet's media query remains the final gate.
    #[must_use]
    pub fn detect() -> Self {
        if prefers_reduced_motion() {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    #[must_use]
    pub const fn allows_hover_zoom(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Check the `prefers-reduced-motion` media feature
///
/// Returns false when no browser window is available or the query cannot be evaluated.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
