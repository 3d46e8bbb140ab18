/// Ambient theme as supplied by the embedding page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    /// Follows the OS preference, already resolved by the host.
    System { prefers_dark: bool },
}

impl Theme {
    pub fn is_dark(self) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System { prefers_dark } => prefers_dark,
        }
    }

    /// Explicit theme a toggle switch would select next.
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn parse(name: &str, prefers_dark: bool) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            _ => Theme::System { prefers_dark },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System {
            prefers_dark: false,
        }
    }
}

/// The two mutually exclusive rendering variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualMode {
    /// Planet with rings and moons on fixed orbits.
    OrbitingMoons,
    /// Black hole with accretion particles and a starfield.
    Gravitational,
}

impl VisualMode {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            VisualMode::Gravitational
        } else {
            VisualMode::OrbitingMoons
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualMode::OrbitingMoons => "orbiting-moons",
            VisualMode::Gravitational => "gravitational",
        }
    }
}
