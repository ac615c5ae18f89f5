use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Build the effective config from embedded TOML text and an optional
/// base URL override.
///
/// If the text is unparseable, every setting falls back to its default.
pub fn resolve_config(toml_text: &str, base_url_override: Option<&str>) -> PortalConfig {
    let config = PortalConfig::from_toml(toml_text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "portal config unparseable; using defaults");
        PortalConfig::default()
    });
    match base_url_override.filter(|url| !url.trim().is_empty()) {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}

/// Resolve the config and store it in the global `OnceLock`. Only the first
/// call has effect; later calls return the stored value.
pub fn load_config(toml_text: &str, base_url_override: Option<&str>) -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let config = resolve_config(toml_text, base_url_override);
        tracing::info!(base_url = %config.api.base_url, lookup = ?config.api.case_lookup, "portal config loaded");
        config
    })
}
