pub mod i18n;
pub mod icons;
pub mod theme;
