//! Semantic color tokens and style functions.
//!
//! Mirrors MD3's tonal surface hierarchy with a warm pink accent.
//! Style functions return closures suitable for Iced's `.style()`
//! method, capturing the needed tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Theme};

use mikan_core::config::ThemeMode;

use crate::style;

/// All semantic color tokens for the application.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (warm pink), also the favorite accent
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,

    // Tertiary (warm gold), the watched accent
    pub tertiary: Color,

    // Error
    pub error: Color,
    pub error_hover: Color,
    pub error_pressed: Color,
    pub on_error: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0x0F, 0x0D, 0x0E),
            surface: Color::from_rgb8(0x17, 0x13, 0x15),
            surface_container_low: Color::from_rgb8(0x1F, 0x1A, 0x1C),
            surface_container: Color::from_rgb8(0x24, 0x1F, 0x21),
            surface_container_high: Color::from_rgb8(0x2E, 0x28, 0x2A),
            surface_bright: Color::from_rgb8(0x3B, 0x34, 0x36),

            on_surface: Color::from_rgb8(0xEC, 0xE0, 0xE2),
            on_surface_variant: Color::from_rgb8(0xD4, 0xC2, 0xC6),
            outline: Color::from_rgb8(0x9D, 0x8C, 0x90),
            outline_variant: Color::from_rgb8(0x51, 0x44, 0x48),

            primary: Color::from_rgb8(0xFF, 0xB1, 0xC5),
            primary_hover: Color::from_rgb8(0xFF, 0xC2, 0xD1),
            primary_dim: Color::from_rgb8(0xE5, 0x93, 0xA8),
            on_primary: Color::from_rgb8(0x54, 0x1D, 0x2C),
            primary_container: Color::from_rgb8(0x70, 0x33, 0x42),

            tertiary: Color::from_rgb8(0xE7, 0xC0, 0x8C),

            error: Color::from_rgb8(0xFF, 0xB4, 0xAB),
            error_hover: Color::from_rgb8(0xFF, 0xC5, 0xBE),
            error_pressed: Color::from_rgb8(0xE5, 0x9A, 0x91),
            on_error: Color::from_rgb8(0x69, 0x00, 0x05),
        }
    }

    pub fn light() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            surface: Color::from_rgb8(0xFF, 0xF8, 0xF8),
            surface_container_low: Color::from_rgb8(0xFB, 0xF2, 0xF3),
            surface_container: Color::from_rgb8(0xF5, 0xEC, 0xED),
            surface_container_high: Color::from_rgb8(0xEF, 0xE6, 0xE8),
            surface_bright: Color::from_rgb8(0xFF, 0xF8, 0xF8),

            on_surface: Color::from_rgb8(0x22, 0x19, 0x1B),
            on_surface_variant: Color::from_rgb8(0x51, 0x44, 0x48),
            outline: Color::from_rgb8(0x83, 0x73, 0x77),
            outline_variant: Color::from_rgb8(0xD6, 0xC2, 0xC6),

            primary: Color::from_rgb8(0x8C, 0x49, 0x58),
            primary_hover: Color::from_rgb8(0x9E, 0x5A, 0x69),
            primary_dim: Color::from_rgb8(0x74, 0x38, 0x46),
            on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            primary_container: Color::from_rgb8(0xFF, 0xD9, 0xE0),

            tertiary: Color::from_rgb8(0x7D, 0x57, 0x0F),

            error: Color::from_rgb8(0xBA, 0x1A, 0x1A),
            error_hover: Color::from_rgb8(0xD0, 0x2E, 0x2E),
            error_pressed: Color::from_rgb8(0x93, 0x00, 0x0A),
            on_error: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

/// The color scheme for a resolved mode (Dark is the fallback).
pub fn scheme(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        _ => ColorScheme::dark(),
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Mikan",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.tertiary,
            warning: cs.tertiary,
            danger: cs.error,
        },
    )
}

/// A card container: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Primary action button (Submit, etc.).
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => primary_hover,
            button::Status::Pressed => primary_dim,
            _ => primary,
        };
        let opacity = match status {
            button::Status::Disabled => 0.38,
            _ => 1.0,
        };
        button::Style {
            background: Some(Background::Color(Color { a: opacity, ..bg })),
            text_color: Color {
                a: opacity,
                ..on_primary
            },
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Ghost / outlined button: transparent bg, border outline.
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button: no border, subtle hover.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Stepper flank button: outlined, with tonal press feedback.
pub fn stepper_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container_high = cs.surface_container_high;
    let primary_container = cs.primary_container;
    let on_surface = cs.on_surface;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let bg = match status {
            button::Status::Pressed => primary_container,
            button::Status::Hovered => surface_container_high,
            _ => Color::TRANSPARENT,
        };
        let opacity = match status {
            button::Status::Disabled => 0.38,
            _ => 1.0,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: Color {
                a: opacity,
                ..on_surface
            },
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Standard text input.
pub fn text_input_style(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let primary = cs.primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_container_low = cs.surface_container_low;
    let on_surface_variant = cs.on_surface_variant;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => primary,
            text_input::Status::Hovered => outline,
            _ => outline_variant,
        };
        text_input::Style {
            background: Background::Color(surface_container_low),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            icon: on_surface_variant,
            placeholder: outline,
            value: on_surface,
            selection: primary,
        }
    }
}

/// Cover art placeholder container.
pub fn cover_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

/// Overlay scrollbar: thin transparent rail, pill scroller that becomes
/// more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: iced::Shadow::default(),
                icon: on_surface,
            },
        }
    }
}
