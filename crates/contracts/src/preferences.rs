/// UI preferences persisted in the browser key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKey {
    DarkMode,
    SidebarCollapsed,
}

impl PreferenceKey {
    /// Storage key. Values are stored as `"true"` / `"false"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::DarkMode => "darkMode",
            PreferenceKey::SidebarCollapsed => "sidebarCollapsed",
        }
    }

    /// Class set on `<body>` while the preference is on.
    pub fn body_class(&self) -> &'static str {
        match self {
            PreferenceKey::DarkMode => "dark-mode",
            PreferenceKey::SidebarCollapsed => "sidebar-collapsed",
        }
    }
}

pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Anything other than the literal `"true"` reads as `false`.
pub fn decode_bool(raw: Option<&str>) -> bool {
    matches!(raw, Some("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_defaults_to_false() {
        assert!(!decode_bool(None));
        assert!(!decode_bool(Some("")));
        assert!(!decode_bool(Some("TRUE")));
        assert!(!decode_bool(Some("1")));
        assert!(decode_bool(Some("true")));
    }

    #[test]
    fn keys_match_storage_contract() {
        assert_eq!(PreferenceKey::DarkMode.as_str(), "darkMode");
        assert_eq!(PreferenceKey::SidebarCollapsed.as_str(), "sidebarCollapsed");
    }
}
