//! Color scheme schema: Light/Dark modes, four roles, three shades.
//!
//! The serde field names match the wire format produced by the model and
//! returned to clients (`Light`, `Prime`, `background`, `strong`, ...).
//! Every slot is addressable by a `(Mode, Role, Shade)` key, and the
//! canonical slot order (modes, then roles, then shades) is shared by the
//! free-text prompt, positional regex fill, and the swatch table.

use serde::{Deserialize, Serialize};

/// Number of color slots in a [`ColorScheme`] (2 modes x 4 roles x 3 shades).
pub const SLOT_COUNT: usize = Mode::ALL.len() * Role::ALL.len() * Shade::ALL.len();

/// Fallback palette for light mode, indexed `[role][shade]`.
const DEFAULT_LIGHT: [[&str; 3]; 4] = [
    ["#1E40AF", "#3B82F6", "#93C5FD"],
    ["#C2410C", "#F97316", "#FDBA74"],
    ["#E5E7EB", "#F3F4F6", "#FFFFFF"],
    ["#111827", "#374151", "#6B7280"],
];

/// Fallback palette for dark mode, indexed `[role][shade]`.
const DEFAULT_DARK: [[&str; 3]; 4] = [
    ["#60A5FA", "#3B82F6", "#1E3A8A"],
    ["#FB923C", "#EA580C", "#7C2D12"],
    ["#030712", "#111827", "#1F2937"],
    ["#F9FAFB", "#E5E7EB", "#9CA3AF"],
];

// ---------------------------------------------------------------------------
// Slot keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Prime,
    Accent,
    Background,
    Text,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Prime, Role::Accent, Role::Background, Role::Text];

    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Prime => "Prime",
            Role::Accent => "Accent",
            Role::Background => "background",
            Role::Text => "text",
        }
    }

    fn index(self) -> usize {
        match self {
            Role::Prime => 0,
            Role::Accent => 1,
            Role::Background => 2,
            Role::Text => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Strong,
    Standard,
    Soft,
}

impl Shade {
    pub const ALL: [Shade; 3] = [Shade::Strong, Shade::Standard, Shade::Soft];

    /// Wire name of the shade.
    pub fn as_str(self) -> &'static str {
        match self {
            Shade::Strong => "strong",
            Shade::Standard => "standard",
            Shade::Soft => "soft",
        }
    }

    /// Column heading used by the swatch table.
    pub fn label(self) -> &'static str {
        match self {
            Shade::Strong => "Strong impression",
            Shade::Standard => "Standard",
            Shade::Soft => "Soft impression",
        }
    }

    fn index(self) -> usize {
        match self {
            Shade::Strong => 0,
            Shade::Standard => 1,
            Shade::Soft => 2,
        }
    }
}

/// Iterate every `(Mode, Role, Shade)` key in canonical order.
pub fn slot_keys() -> impl Iterator<Item = (Mode, Role, Shade)> {
    Mode::ALL.into_iter().flat_map(|mode| {
        Role::ALL.into_iter().flat_map(move |role| {
            Shade::ALL
                .into_iter()
                .map(move |shade| (mode, role, shade))
        })
    })
}

/// Hard-coded fallback color for a slot.
pub fn default_color(mode: Mode, role: Role, shade: Shade) -> &'static str {
    let table = match mode {
        Mode::Light => &DEFAULT_LIGHT,
        Mode::Dark => &DEFAULT_DARK,
    };
    table[role.index()][shade.index()]
}

// ---------------------------------------------------------------------------
// Schema types
// ---------------------------------------------------------------------------

/// Three shades of a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCategory {
    pub strong: String,
    pub standard: String,
    pub soft: String,
}

impl ColorCategory {
    pub fn get(&self, shade: Shade) -> &str {
        match shade {
            Shade::Strong => &self.strong,
            Shade::Standard => &self.standard,
            Shade::Soft => &self.soft,
        }
    }

    fn get_mut(&mut self, shade: Shade) -> &mut String {
        match shade {
            Shade::Strong => &mut self.strong,
            Shade::Standard => &mut self.standard,
            Shade::Soft => &mut self.soft,
        }
    }
}

/// The four roles of one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMode {
    #[serde(rename = "Prime")]
    pub prime: ColorCategory,
    #[serde(rename = "Accent")]
    pub accent: ColorCategory,
    pub background: ColorCategory,
    pub text: ColorCategory,
}

impl ColorMode {
    pub fn category(&self, role: Role) -> &ColorCategory {
        match role {
            Role::Prime => &self.prime,
            Role::Accent => &self.accent,
            Role::Background => &self.background,
            Role::Text => &self.text,
        }
    }

    fn category_mut(&mut self, role: Role) -> &mut ColorCategory {
        match role {
            Role::Prime => &mut self.prime,
            Role::Accent => &mut self.accent,
            Role::Background => &mut self.background,
            Role::Text => &mut self.text,
        }
    }
}

/// A full light/dark palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(rename = "Light")]
    pub light: ColorMode,
    #[serde(rename = "Dark")]
    pub dark: ColorMode,
}

/// One addressed value of a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub mode: Mode,
    pub role: Role,
    pub shade: Shade,
    pub value: &'a str,
}

impl ColorScheme {
    pub fn mode(&self, mode: Mode) -> &ColorMode {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    fn mode_mut(&mut self, mode: Mode) -> &mut ColorMode {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn get(&self, mode: Mode, role: Role, shade: Shade) -> &str {
        self.mode(mode).category(role).get(shade)
    }

    pub fn set(&mut self, mode: Mode, role: Role, shade: Shade, value: impl Into<String>) {
        *self.mode_mut(mode).category_mut(role).get_mut(shade) = value.into();
    }

    /// Iterate all slots in canonical order.
    pub fn slots(&self) -> impl Iterator<Item = Slot<'_>> {
        slot_keys().map(move |(mode, role, shade)| Slot {
            mode,
            role,
            shade,
            value: self.get(mode, role, shade),
        })
    }

    /// Build a scheme by assigning `values` to slots in canonical order.
    ///
    /// Slots past the end of `values` keep their default color; values past
    /// [`SLOT_COUNT`] are ignored.
    pub fn from_slots<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scheme = Self::default();
        for ((mode, role, shade), value) in slot_keys().zip(values) {
            scheme.set(mode, role, shade, value);
        }
        scheme
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        let build_mode = |mode: Mode| {
            let category = |role: Role| ColorCategory {
                strong: default_color(mode, role, Shade::Strong).to_string(),
                standard: default_color(mode, role, Shade::Standard).to_string(),
                soft: default_color(mode, role, Shade::Soft).to_string(),
            };
            ColorMode {
                prime: category(Role::Prime),
                accent: category(Role::Accent),
                background: category(Role::Background),
                text: category(Role::Text),
            }
        };
        Self {
            light: build_mode(Mode::Light),
            dark: build_mode(Mode::Dark),
        }
    }
}

/// A generated palette plus the optional narrated phrase returned with it.
///
/// Serializes as the success body of the color endpoint:
/// `{"color": {...}, "koujou": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPalette {
    pub color: ColorScheme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub koujou: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
