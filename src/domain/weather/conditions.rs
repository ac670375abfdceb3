use crate::cli::IconMode;
use crate::domain::preferences::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Thunderstorm,
    RainShowers,
    Rain,
    Snow,
    Fog,
    ClearDay,
    ClearNight,
    MostlyClearDay,
    MostlyClearNight,
    PartlyCloudy,
    Overcast,
    DefaultClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Thunderstorm,
    Rain,
    Snow,
    Mist,
    ClearDay,
    ClearNight,
    Clouds,
    Default,
}

impl StyleClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thunderstorm => "weather-thunderstorm",
            Self::Rain => "weather-rain",
            Self::Snow => "weather-snow",
            Self::Mist => "weather-mist",
            Self::ClearDay => "weather-clear-day",
            Self::ClearNight => "weather-clear-night",
            Self::Clouds => "weather-clouds",
            Self::Default => "weather-default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub icon: IconKind,
    pub style: StyleClass,
}

/// Maps a WMO code to its display category.
///
/// Arms are checked top to bottom and the first match wins; 80..=82 is
/// claimed by the showers arm before the general rain arm can see it.
#[must_use]
pub fn classify(code: u8, is_day: bool) -> Classification {
    let (icon, style) = match code {
        95.. => (IconKind::Thunderstorm, StyleClass::Thunderstorm),
        80..=82 => (IconKind::RainShowers, StyleClass::Rain),
        51..=67 => (IconKind::Rain, StyleClass::Rain),
        71..=77 | 85..=86 => (IconKind::Snow, StyleClass::Snow),
        45..=48 => (IconKind::Fog, StyleClass::Mist),
        0 if is_day => (IconKind::ClearDay, StyleClass::ClearDay),
        0 => (IconKind::ClearNight, StyleClass::ClearNight),
        1 if is_day => (IconKind::MostlyClearDay, StyleClass::Clouds),
        1 => (IconKind::MostlyClearNight, StyleClass::Clouds),
        2 => (IconKind::PartlyCloudy, StyleClass::Clouds),
        3 => (IconKind::Overcast, StyleClass::Clouds),
        _ => (IconKind::DefaultClear, StyleClass::Default),
    };
    Classification { icon, style }
}

#[must_use]
pub fn icon_glyph(icon: IconKind, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) = icon_tokens(icon);
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(icon: IconKind) -> (&'static str, &'static str, &'static str) {
    match icon {
        IconKind::Thunderstorm => ("THN", "⛈️", "⚡"),
        IconKind::RainShowers => ("SHW", "🌦️", "☔"),
        IconKind::Rain => ("RAN", "🌧️", "☂"),
        IconKind::Snow => ("SNW", "🌨️", "❄"),
        IconKind::Fog => ("FOG", "🌫️", "░"),
        IconKind::ClearDay | IconKind::DefaultClear => ("SUN", "☀️", "☀"),
        IconKind::ClearNight => ("MON", "🌙", "☾"),
        IconKind::MostlyClearDay => ("SUN", "🌤️", "🌤"),
        IconKind::MostlyClearNight => ("MON", "🌙", "☽"),
        IconKind::PartlyCloudy => ("CLD", "⛅", "⛅"),
        IconKind::Overcast => ("OVC", "☁️", "☁"),
    }
}

pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

const BASELINE_LANGUAGE: Language = Language::En;

type Translations = &'static [(Language, &'static str)];

const WMO_DESCRIPTIONS: &[(u8, Translations)] = &[
    (
        0,
        &[
            (Language::En, "Clear sky"),
            (Language::Es, "Cielo despejado"),
            (Language::Fr, "Ciel dégagé"),
            (Language::It, "Cielo sereno"),
            (Language::De, "Klarer Himmel"),
        ],
    ),
    (
        1,
        &[
            (Language::En, "Mainly clear"),
            (Language::Es, "Mayormente despejado"),
            (Language::Fr, "Principalement dégagé"),
            (Language::It, "Prevalentemente sereno"),
            (Language::De, "Überwiegend klar"),
        ],
    ),
    (
        2,
        &[
            (Language::En, "Partly cloudy"),
            (Language::Es, "Parcialmente nublado"),
            (Language::Fr, "Partiellement nuageux"),
            (Language::It, "Parzialmente nuvoloso"),
            (Language::De, "Teilweise bewölkt"),
        ],
    ),
    (
        3,
        &[
            (Language::En, "Overcast"),
            (Language::Es, "Cubierto"),
            (Language::Fr, "Couvert"),
            (Language::It, "Coperto"),
            (Language::De, "Bedeckt"),
        ],
    ),
    (
        45,
        &[
            (Language::En, "Fog"),
            (Language::Es, "Niebla"),
            (Language::Fr, "Brouillard"),
            (Language::It, "Nebbia"),
            (Language::De, "Nebel"),
        ],
    ),
    (
        48,
        &[
            (Language::En, "Depositing rime fog"),
            (Language::Es, "Niebla con escarcha"),
            (Language::Fr, "Brouillard givrant"),
            (Language::It, "Nebbia con brina"),
            (Language::De, "Reifnebel"),
        ],
    ),
    (
        51,
        &[
            (Language::En, "Light drizzle"),
            (Language::Es, "Llovizna ligera"),
            (Language::Fr, "Bruine légère"),
            (Language::It, "Pioviggine leggera"),
            (Language::De, "Leichter Nieselregen"),
        ],
    ),
    (
        53,
        &[
            (Language::En, "Moderate drizzle"),
            (Language::Es, "Llovizna moderada"),
            (Language::Fr, "Bruine modérée"),
            (Language::It, "Pioviggine moderata"),
            (Language::De, "Mäßiger Nieselregen"),
        ],
    ),
    (
        55,
        &[
            (Language::En, "Dense drizzle"),
            (Language::Es, "Llovizna densa"),
            (Language::Fr, "Bruine dense"),
            (Language::It, "Pioviggine intensa"),
            (Language::De, "Dichter Nieselregen"),
        ],
    ),
    (
        56,
        &[
            (Language::En, "Light freezing drizzle"),
            (Language::Es, "Llovizna helada ligera"),
            (Language::Fr, "Bruine verglaçante légère"),
            (Language::It, "Pioviggine gelata leggera"),
            (Language::De, "Leichter gefrierender Nieselregen"),
        ],
    ),
    (
        57,
        &[
            (Language::En, "Dense freezing drizzle"),
            (Language::Es, "Llovizna helada densa"),
            (Language::Fr, "Bruine verglaçante dense"),
            (Language::It, "Pioviggine gelata intensa"),
            (Language::De, "Dichter gefrierender Nieselregen"),
        ],
    ),
    (
        61,
        &[
            (Language::En, "Slight rain"),
            (Language::Es, "Lluvia ligera"),
            (Language::Fr, "Pluie faible"),
            (Language::It, "Pioggia debole"),
            (Language::De, "Leichter Regen"),
        ],
    ),
    (
        63,
        &[
            (Language::En, "Moderate rain"),
            (Language::Es, "Lluvia moderada"),
            (Language::Fr, "Pluie modérée"),
            (Language::It, "Pioggia moderata"),
            (Language::De, "Mäßiger Regen"),
        ],
    ),
    (
        65,
        &[
            (Language::En, "Heavy rain"),
            (Language::Es, "Lluvia intensa"),
            (Language::Fr, "Pluie forte"),
            (Language::It, "Pioggia forte"),
            (Language::De, "Starker Regen"),
        ],
    ),
    (
        66,
        &[
            (Language::En, "Light freezing rain"),
            (Language::Es, "Lluvia helada ligera"),
            (Language::Fr, "Pluie verglaçante faible"),
            (Language::It, "Pioggia gelata debole"),
            (Language::De, "Leichter gefrierender Regen"),
        ],
    ),
    (
        67,
        &[
            (Language::En, "Heavy freezing rain"),
            (Language::Es, "Lluvia helada intensa"),
            (Language::Fr, "Pluie verglaçante forte"),
            (Language::It, "Pioggia gelata forte"),
            (Language::De, "Starker gefrierender Regen"),
        ],
    ),
    (
        71,
        &[
            (Language::En, "Slight snowfall"),
            (Language::Es, "Nevada ligera"),
            (Language::Fr, "Chute de neige faible"),
            (Language::It, "Nevicata debole"),
            (Language::De, "Leichter Schneefall"),
        ],
    ),
    (
        73,
        &[
            (Language::En, "Moderate snowfall"),
            (Language::Es, "Nevada moderada"),
            (Language::Fr, "Chute de neige modérée"),
            (Language::It, "Nevicata moderata"),
            (Language::De, "Mäßiger Schneefall"),
        ],
    ),
    (
        75,
        &[
            (Language::En, "Heavy snowfall"),
            (Language::Es, "Nevada intensa"),
            (Language::Fr, "Forte chute de neige"),
            (Language::It, "Nevicata forte"),
            (Language::De, "Starker Schneefall"),
        ],
    ),
    (
        77,
        &[
            (Language::En, "Snow grains"),
            (Language::Es, "Granos de nieve"),
            (Language::Fr, "Neige en grains"),
            (Language::It, "Granelli di neve"),
            (Language::De, "Schneegriesel"),
        ],
    ),
    (
        80,
        &[
            (Language::En, "Slight rain showers"),
            (Language::Es, "Chubascos ligeros"),
            (Language::Fr, "Averses faibles"),
            (Language::It, "Rovesci deboli"),
            (Language::De, "Leichte Regenschauer"),
        ],
    ),
    (
        81,
        &[
            (Language::En, "Moderate rain showers"),
            (Language::Es, "Chubascos moderados"),
            (Language::Fr, "Averses modérées"),
            (Language::It, "Rovesci moderati"),
            (Language::De, "Mäßige Regenschauer"),
        ],
    ),
    (
        82,
        &[
            (Language::En, "Violent rain showers"),
            (Language::Es, "Chubascos violentos"),
            (Language::Fr, "Averses violentes"),
            (Language::It, "Rovesci violenti"),
            (Language::De, "Heftige Regenschauer"),
        ],
    ),
    (
        85,
        &[
            (Language::En, "Slight snow showers"),
            (Language::Es, "Chubascos de nieve ligeros"),
            (Language::Fr, "Averses de neige faibles"),
            (Language::It, "Rovesci di neve deboli"),
            (Language::De, "Leichte Schneeschauer"),
        ],
    ),
    (
        86,
        &[
            (Language::En, "Heavy snow showers"),
            (Language::Es, "Chubascos de nieve intensos"),
            (Language::Fr, "Averses de neige fortes"),
            (Language::It, "Rovesci di neve forti"),
            (Language::De, "Starke Schneeschauer"),
        ],
    ),
    (
        95,
        &[
            (Language::En, "Thunderstorm"),
            (Language::Es, "Tormenta"),
            (Language::Fr, "Orage"),
            (Language::It, "Temporale"),
            (Language::De, "Gewitter"),
        ],
    ),
    (
        96,
        &[
            (Language::En, "Thunderstorm with slight hail"),
            (Language::Es, "Tormenta con granizo ligero"),
            (Language::Fr, "Orage avec grêle faible"),
            (Language::It, "Temporale con grandine debole"),
            (Language::De, "Gewitter mit leichtem Hagel"),
        ],
    ),
    (
        99,
        &[
            (Language::En, "Thunderstorm with heavy hail"),
            (Language::Es, "Tormenta con granizo fuerte"),
            (Language::Fr, "Orage avec forte grêle"),
            (Language::It, "Temporale con grandine forte"),
            (Language::De, "Gewitter mit starkem Hagel"),
        ],
    ),
];

/// Localized description, independent of the icon classification.
#[must_use]
pub fn describe(code: u8, language: Language) -> &'static str {
    describe_in(WMO_DESCRIPTIONS, code, language)
}

fn describe_in(table: &[(u8, Translations)], code: u8, language: Language) -> &'static str {
    let Some(translations) = table
        .iter()
        .find_map(|(candidate, labels)| (*candidate == code).then_some(*labels))
    else {
        return UNKNOWN_DESCRIPTION;
    };
    lookup(translations, language)
        .or_else(|| lookup(translations, BASELINE_LANGUAGE))
        .unwrap_or(UNKNOWN_DESCRIPTION)
}

fn lookup(translations: Translations, language: Language) -> Option<&'static str> {
    translations
        .iter()
        .find_map(|(candidate, label)| (*candidate == language).then_some(*label))
}
