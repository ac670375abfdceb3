use ratatui::style::Color;

use crate::{
    cli::ColorArg,
    domain::{preferences::EffectiveTheme, weather::StyleClass},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Theme {
    /// Terminal defaults only, for `--color never` and `NO_COLOR`.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            background: Color::Reset,
            surface: Color::Reset,
            text: Color::Reset,
            muted_text: Color::Reset,
            accent: Color::Reset,
            border: Color::Reset,
            highlight: Color::Reset,
            warning: Color::Reset,
            danger: Color::Reset,
        }
    }
}

#[must_use]
pub fn theme_for(effective: EffectiveTheme, style: Option<StyleClass>, colors: bool) -> Theme {
    if !colors {
        return Theme::plain();
    }

    let base = match effective {
        EffectiveTheme::Light => Theme {
            background: Color::Rgb(244, 247, 251),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(28, 36, 48),
            muted_text: Color::Rgb(96, 108, 124),
            accent: Color::Rgb(30, 102, 158),
            border: Color::Rgb(178, 192, 210),
            highlight: Color::Rgb(214, 230, 248),
            warning: Color::Rgb(178, 112, 0),
            danger: Color::Rgb(190, 36, 48),
        },
        EffectiveTheme::Dark => Theme {
            background: Color::Rgb(13, 20, 34),
            surface: Color::Rgb(24, 33, 51),
            text: Color::Rgb(226, 234, 244),
            muted_text: Color::Rgb(150, 164, 184),
            accent: Color::Rgb(143, 196, 255),
            border: Color::Rgb(58, 74, 100),
            highlight: Color::Rgb(42, 60, 92),
            warning: Color::Rgb(255, 208, 95),
            danger: Color::Rgb(255, 120, 120),
        },
    };

    Theme {
        accent: style.map_or(base.accent, |style| condition_accent(style, effective)),
        ..base
    }
}

fn condition_accent(style: StyleClass, effective: EffectiveTheme) -> Color {
    let dark = effective == EffectiveTheme::Dark;
    let (r, g, b) = match (style, dark) {
        (StyleClass::Thunderstorm, false) => (92, 64, 170),
        (StyleClass::Thunderstorm, true) => (255, 223, 112),
        (StyleClass::Rain, false) => (32, 96, 170),
        (StyleClass::Rain, true) => (153, 214, 255),
        (StyleClass::Snow, false) => (70, 120, 160),
        (StyleClass::Snow, true) => (237, 247, 255),
        (StyleClass::Mist, false) => (110, 116, 124),
        (StyleClass::Mist, true) => (216, 220, 224),
        (StyleClass::ClearDay, false) => (214, 132, 0),
        (StyleClass::ClearDay, true) => (255, 215, 117),
        (StyleClass::ClearNight, false) => (62, 78, 140),
        (StyleClass::ClearNight, true) => (173, 216, 255),
        (StyleClass::Clouds, false) => (84, 104, 128),
        (StyleClass::Clouds, true) => (194, 207, 224),
        (StyleClass::Default, false) => (30, 102, 158),
        (StyleClass::Default, true) => (143, 196, 255),
    };
    Color::Rgb(r, g, b)
}

/// Whether styled output should be produced at all.
#[must_use]
pub fn colors_enabled(mode: ColorArg) -> bool {
    colors_enabled_from(
        mode,
        std::env::var("NO_COLOR").ok().as_deref(),
        std::env::var("TERM").ok().as_deref(),
    )
}

pub(crate) fn colors_enabled_from(
    mode: ColorArg,
    no_color: Option<&str>,
    term: Option<&str>,
) -> bool {
    match mode {
        ColorArg::Always => true,
        ColorArg::Never => false,
        ColorArg::Auto => {
            !no_color.is_some_and(|value| !value.is_empty())
                && !term.is_some_and(|value| value.eq_ignore_ascii_case("dumb"))
        }
    }
}
