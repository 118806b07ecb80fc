//! Built-in color presets.

/// A named, immutable color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const DEFAULT: Palette = Palette {
    name: "default",
    primary: "#3498db",
    secondary: "#2c3e50",
    accent: "#e74c3c",
    background: "#ffffff",
    text: "#333333",
};

pub const OCEAN: Palette = Palette {
    name: "ocean",
    primary: "#0077b6",
    secondary: "#023e8a",
    accent: "#00b4d8",
    background: "#f8fdff",
    text: "#03045e",
};

pub const FOREST: Palette = Palette {
    name: "forest",
    primary: "#2d6a4f",
    secondary: "#1b4332",
    accent: "#95d5b2",
    background: "#f6fff8",
    text: "#081c15",
};

pub const SUNSET: Palette = Palette {
    name: "sunset",
    primary: "#e76f51",
    secondary: "#264653",
    accent: "#f4a261",
    background: "#fffaf5",
    text: "#2b2d42",
};

pub const MIDNIGHT: Palette = Palette {
    name: "midnight",
    primary: "#bb86fc",
    secondary: "#121212",
    accent: "#03dac6",
    background: "#1e1e1e",
    text: "#e0e0e0",
};

pub const PALETTES: &[Palette] = &[DEFAULT, OCEAN, FOREST, SUNSET, MIDNIGHT];

/// Look up a preset by name, ignoring ASCII case.
pub fn palette(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
