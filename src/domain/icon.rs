//! Symbolic icon names.

/// Icons the UI can ask the icon collaborator to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Icon {
    Compass,
    User,
    MapMarker,
    Search,
    Sliders,
    Google,
    Facebook,
    Picture,
}

impl Icon {
    /// Symbolic name, matching the common icon-font naming.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compass => "compass",
            Self::User => "user",
            Self::MapMarker => "map-marker",
            Self::Search => "search",
            Self::Sliders => "sliders",
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::Picture => "picture",
        }
    }

    /// Single-cell glyph used to draw the icon in a terminal.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Compass => '◈',
            Self::User => '☺',
            Self::MapMarker => '⌖',
            Self::Search => '⌕',
            Self::Sliders => '≡',
            Self::Google => 'G',
            Self::Facebook => 'f',
            Self::Picture => '▣',
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
