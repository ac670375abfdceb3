use super::preferences::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub fetch_error: &'static str,
    pub search_placeholder: &'static str,
    pub local_time: &'static str,
    pub forecast: &'static str,
    pub details: &'static str,
    pub feels_like: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub uv_index: &'static str,
    pub precipitation_probability: &'static str,
    pub visibility: &'static str,
    pub cloud_cover: &'static str,
    pub pressure: &'static str,
    pub commentary_title: &'static str,
    pub commentary_pending: &'static str,
    pub commentary_unavailable: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub time_format: &'static str,
    pub key_hints: &'static str,
}

const EN: Dictionary = Dictionary {
    app_name: "Skycast",
    loading: "Loading weather data...",
    fetch_error: "Could not fetch weather data. Please try again.",
    search_placeholder: "Search for a city...",
    local_time: "Local time",
    forecast: "Forecast",
    details: "Details",
    feels_like: "Feels like",
    humidity: "Humidity",
    wind_speed: "Wind speed",
    uv_index: "UV index",
    precipitation_probability: "Chance of rain",
    visibility: "Visibility",
    cloud_cover: "Cloud cover",
    pressure: "Pressure",
    commentary_title: "AI weather commentary",
    commentary_pending: "Thinking about today's weather...",
    commentary_unavailable: "No commentary available right now.",
    theme: "Theme",
    language: "Language",
    time_format: "Time format",
    key_hints: "↑/↓ choose · Enter select · Esc close · F2 theme · F3 language · F4 clock · Ctrl+C quit",
};

const ES: Dictionary = Dictionary {
    app_name: "Skycast",
    loading: "Cargando datos del clima...",
    fetch_error: "No se pudieron obtener los datos del clima. Inténtalo de nuevo.",
    search_placeholder: "Busca una ciudad...",
    local_time: "Hora local",
    forecast: "Pronóstico",
    details: "Detalles",
    feels_like: "Sensación",
    humidity: "Humedad",
    wind_speed: "Viento",
    uv_index: "Índice UV",
    precipitation_probability: "Prob. de lluvia",
    visibility: "Visibilidad",
    cloud_cover: "Nubosidad",
    pressure: "Presión",
    commentary_title: "Comentario del tiempo con IA",
    commentary_pending: "Pensando en el tiempo de hoy...",
    commentary_unavailable: "No hay comentario disponible ahora mismo.",
    theme: "Tema",
    language: "Idioma",
    time_format: "Formato de hora",
    key_hints: "↑/↓ elegir · Enter seleccionar · Esc cerrar · F2 tema · F3 idioma · F4 reloj · Ctrl+C salir",
};

const FR: Dictionary = Dictionary {
    app_name: "Skycast",
    loading: "Chargement des données météo...",
    fetch_error: "Impossible de récupérer les données météo. Veuillez réessayer.",
    search_placeholder: "Rechercher une ville...",
    local_time: "Heure locale",
    forecast: "Prévisions",
    details: "Détails",
    feels_like: "Ressenti",
    humidity: "Humidité",
    wind_speed: "Vent",
    uv_index: "Indice UV",
    precipitation_probability: "Risque de pluie",
    visibility: "Visibilité",
    cloud_cover: "Couverture nuageuse",
    pressure: "Pression",
    commentary_title: "Commentaire météo IA",
    commentary_pending: "Réflexion sur la météo du jour...",
    commentary_unavailable: "Aucun commentaire disponible pour le moment.",
    theme: "Thème",
    language: "Langue",
    time_format: "Format de l'heure",
    key_hints: "↑/↓ choisir · Entrée valider · Échap fermer · F2 thème · F3 langue · F4 horloge · Ctrl+C quitter",
};

const IT: Dictionary = Dictionary {
    app_name: "Skycast",
    loading: "Caricamento dei dati meteo...",
    fetch_error: "Impossibile ottenere i dati meteo. Riprova.",
    search_placeholder: "Cerca una città...",
    local_time: "Ora locale",
    forecast: "Previsioni",
    details: "Dettagli",
    feels_like: "Percepita",
    humidity: "Umidità",
    wind_speed: "Vento",
    uv_index: "Indice UV",
    precipitation_probability: "Prob. di pioggia",
    visibility: "Visibilità",
    cloud_cover: "Nuvolosità",
    pressure: "Pressione",
    commentary_title: "Commento meteo IA",
    commentary_pending: "Sto pensando al meteo di oggi...",
    commentary_unavailable: "Nessun commento disponibile al momento.",
    theme: "Tema",
    language: "Lingua",
    time_format: "Formato ora",
    key_hints: "↑/↓ scegli · Invio seleziona · Esc chiudi · F2 tema · F3 lingua · F4 orologio · Ctrl+C esci",
};

const DE: Dictionary = Dictionary {
    app_name: "Skycast",
    loading: "Wetterdaten werden geladen...",
    fetch_error: "Wetterdaten konnten nicht abgerufen werden. Bitte erneut versuchen.",
    search_placeholder: "Stadt suchen...",
    local_time: "Ortszeit",
    forecast: "Vorhersage",
    details: "Details",
    feels_like: "Gefühlt",
    humidity: "Luftfeuchtigkeit",
    wind_speed: "Wind",
    uv_index: "UV-Index",
    precipitation_probability: "Regenwahrscheinlichkeit",
    visibility: "Sichtweite",
    cloud_cover: "Bewölkung",
    pressure: "Luftdruck",
    commentary_title: "KI-Wetterkommentar",
    commentary_pending: "Das heutige Wetter wird eingeschätzt...",
    commentary_unavailable: "Derzeit ist kein Kommentar verfügbar.",
    theme: "Design",
    language: "Sprache",
    time_format: "Zeitformat",
    key_hints: "↑/↓ wählen · Enter übernehmen · Esc schließen · F2 Design · F3 Sprache · F4 Uhr · Strg+C beenden",
};

#[must_use]
pub fn dictionary(language: Language) -> &'static Dictionary {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::It => &IT,
        Language::De => &DE,
    }
}

/// Display name of `target` in the UI language `ui`.
#[must_use]
pub fn language_name(target: Language, ui: Language) -> &'static str {
    match (ui, target) {
        (Language::Es, Language::En) => "Inglés",
        (Language::Es, Language::Es) => "Español",
        (Language::Es, Language::Fr) => "Francés",
        (Language::Es, Language::It) => "Italiano",
        (Language::Es, Language::De) => "Alemán",
        (Language::Fr, Language::En) => "Anglais",
        (Language::Fr, Language::Es) => "Espagnol",
        (Language::Fr, Language::Fr) => "Français",
        (Language::Fr, Language::It) => "Italien",
        (Language::Fr, Language::De) => "Allemand",
        (Language::It, Language::En) => "Inglese",
        (Language::It, Language::Es) => "Spagnolo",
        (Language::It, Language::Fr) => "Francese",
        (Language::It, Language::It) => "Italiano",
        (Language::It, Language::De) => "Tedesco",
        (Language::De, Language::En) => "Englisch",
        (Language::De, Language::Es) => "Spanisch",
        (Language::De, Language::Fr) => "Französisch",
        (Language::De, Language::It) => "Italienisch",
        (Language::De, Language::De) => "Deutsch",
        (Language::En, Language::En) => "English",
        (Language::En, Language::Es) => "Spanish",
        (Language::En, Language::Fr) => "French",
        (Language::En, Language::It) => "Italian",
        (Language::En, Language::De) => "German",
    }
}
