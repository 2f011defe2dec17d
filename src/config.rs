//! App Configuration
//!
//! Read once at boot from `<body data-*>` attributes and `<html lang>`.
//! Unknown or malformed values fall back to the defaults.

use std::str::FromStr;

use web_sys::RequestCredentials;

use crate::i18n::Lang;

/// Which kind of page loaded the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Shop,
    Admin,
}

/// Credentials mode attached to every API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    Include,
}

impl Credentials {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "omit" => Some(Credentials::Omit),
            "same-origin" => Some(Credentials::SameOrigin),
            "include" => Some(Credentials::Include),
            _ => None,
        }
    }

    pub fn to_web(self) -> RequestCredentials {
        match self {
            Credentials::Omit => RequestCredentials::Omit,
            Credentials::SameOrigin => RequestCredentials::SameOrigin,
            Credentials::Include => RequestCredentials::Include,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every endpoint, without trailing slash
    pub api_base: String,
    pub page: PageKind,
    pub toast_ms: u32,
    pub popup_ms: u32,
    pub currency: String,
    pub credentials: Credentials,
    /// Drop out-of-order responses
    pub request_fencing: bool,
    pub log_level: log::Level,
    pub lang: Lang,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page: PageKind::Shop,
            toast_ms: 3000,
            popup_ms: 2500,
            currency: "€".to_string(),
            credentials: Credentials::SameOrigin,
            request_fencing: true,
            log_level: log::Level::Info,
            lang: Lang::default(),
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Build from an attribute lookup (`name` without the `data-` prefix),
    /// the current path and the document language
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>, path: &str, lang: Option<&str>) -> Self {
        let defaults = Self::default();

        let page = match attr("page").as_deref().map(str::trim) {
            Some("admin") => PageKind::Admin,
            Some("shop") => PageKind::Shop,
            _ if path.starts_with("/admin") => PageKind::Admin,
            _ => PageKind::Shop,
        };

        Self {
            api_base: attr("api-base")
                .map(|b| b.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            page,
            toast_ms: attr("toast-ms")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.toast_ms),
            popup_ms: attr("popup-ms")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.popup_ms),
            currency: attr("currency")
                .map(|c| c.trim().to_string())
                .unwrap_or(defaults.currency),
            credentials: attr("credentials")
                .and_then(|v| Credentials::parse(&v))
                .unwrap_or(defaults.credentials),
            request_fencing: attr("request-fencing")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.request_fencing),
            log_level: attr("log-level")
                .and_then(|v| log::Level::from_str(v.trim()).ok())
                .unwrap_or(defaults.log_level),
            lang: lang.map(Lang::parse).unwrap_or(defaults.lang),
        }
    }

    /// Read from the live document; defaults outside a browser
    pub fn from_document() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let path = win.location().pathname().unwrap_or_default();
        let body = win.document().and_then(|d| d.body());
        let lang = crate::dom::document_lang();
        Self::from_attrs(
            |name| body.as_ref()?.get_attribute(&format!("data-{}", name)),
            &path,
            lang.as_deref(),
        )
    }

    pub fn is_admin(&self) -> bool {
        self.page == PageKind::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_no_attrs() {
        let cfg = AppConfig::from_attrs(attrs(&[]), "/catalog", None);
        assert_eq!(cfg, AppConfig::default());
        assert!(!cfg.is_admin());
    }

    #[test]
    fn test_admin_from_path_or_attr() {
        assert!(AppConfig::from_attrs(attrs(&[]), "/admin/products", None).is_admin());
        assert!(AppConfig::from_attrs(attrs(&[("page", "admin")]), "/", None).is_admin());
        assert!(!AppConfig::from_attrs(attrs(&[("page", "shop")]), "/admin", None).is_admin());
    }

    #[test]
    fn test_parses_values() {
        let cfg = AppConfig::from_attrs(
            attrs(&[
                ("api-base", "https://shop.example/"),
                ("toast-ms", "5000"),
                ("popup-ms", "0"),
                ("currency", "EUR"),
                ("credentials", "include"),
                ("request-fencing", "off"),
                ("log-level", "debug"),
            ]),
            "/",
            Some("lv"),
        );
        assert_eq!(cfg.api_base, "https://shop.example");
        assert_eq!(cfg.toast_ms, 5000);
        assert_eq!(cfg.popup_ms, 2500);
        assert_eq!(cfg.currency, "EUR");
        assert_eq!(cfg.credentials, Credentials::Include);
        assert!(!cfg.request_fencing);
        assert_eq!(cfg.log_level, log::Level::Debug);
        assert_eq!(cfg.lang, Lang::Lv);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let cfg = AppConfig::from_attrs(
            attrs(&[("toast-ms", "soon"), ("credentials", "always"), ("request-fencing", "maybe")]),
            "/",
            None,
        );
        assert_eq!(cfg.toast_ms, 3000);
        assert_eq!(cfg.credentials, Credentials::SameOrigin);
        assert!(cfg.request_fencing);
    }
}
