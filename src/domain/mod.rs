pub mod i18n;
pub mod preferences;
pub mod weather;
