//! Toggle entry label, chosen once at startup.

use tracing::debug;

use crate::window::WindowSystem;

pub const DEFAULT_LABEL: &str = "Always on top";

/// Label for a locale name such as `de-DE`, keyed on the language code.
pub fn for_locale(locale: &str) -> &'static str {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "ru" => "Поверх всех окон",
        "de" => "Immer im Vordergrund",
        _ => DEFAULT_LABEL,
    }
}

/// The configured label if any, otherwise the one for the user's locale.
pub fn resolve<W: WindowSystem + ?Sized>(configured: Option<&str>, os: &W) -> String {
    if let Some(label) = configured {
        return label.to_string();
    }
    let locale = os.user_locale();
    let label = locale.as_deref().map(for_locale).unwrap_or(DEFAULT_LABEL);
    debug!(event = "core.label.resolved", locale = ?locale, label = label);
    label.to_string()
}
