//! Colors, theming and display toggles.

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
}

/// Visual theme for plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Axis lines.
    pub axis: Color,
    /// Function curve.
    pub curve: Color,
    /// Markers whose `floor(y)` is even.
    pub marker_accent: Color,
    /// Markers whose `floor(y)` is odd.
    pub marker_secondary: Color,
    /// Zoom rectangle outline.
    pub selection: Color,
    /// Hover label text.
    pub label: Color,
}

impl Theme {
    /// Light theme with a white background.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            axis: Color::BLACK,
            curve: Color::BLACK,
            marker_accent: Color::RED,
            marker_secondary: Color::YELLOW,
            selection: Color::GRAY,
            label: Color::BLACK,
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            background: Color::new(0.08, 0.09, 0.11, 1.0),
            axis: Color::new(0.6, 0.62, 0.66, 1.0),
            curve: Color::new(0.2, 0.75, 0.95, 1.0),
            marker_accent: Color::new(0.95, 0.35, 0.3, 1.0),
            marker_secondary: Color::new(0.95, 0.85, 0.3, 1.0),
            selection: Color::new(0.7, 0.7, 0.7, 1.0),
            label: Color::new(0.9, 0.9, 0.9, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Display toggles owned by the host UI.
///
/// Read on every frame; changing them only affects the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Draw the two axis lines through the canvas center.
    pub show_axes: bool,
    /// Draw a star marker on every sample.
    pub show_markers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_axes: true,
            show_markers: true,
        }
    }
}
