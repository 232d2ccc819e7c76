//! Build-Time Configuration
//!
//! Row store endpoint comes from the build environment
//! (`SUPABASE_URL`, `SUPABASE_ANON_KEY`, optional `SUPABASE_TABLE`).

use grocery_core::{ConfigError, GatewayConfig, Locale};

pub fn gateway_config() -> Result<GatewayConfig, ConfigError> {
    GatewayConfig::from_parts(
        option_env!("SUPABASE_URL"),
        option_env!("SUPABASE_ANON_KEY"),
        option_env!("SUPABASE_TABLE"),
    )
}

/// Locale from `navigator.language`, pt-BR when unavailable
pub fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|win| win.navigator().language())
        .map(|tag| Locale::from_language_tag(&tag))
        .unwrap_or_default()
}
