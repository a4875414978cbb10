//! Manufacturer body colors.

/// Body color for manufacturers without a dedicated color.
pub const DEFAULT_BODY_COLOR: &str = "#6b7280";

/// Manufacturers with a dedicated enclosure color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manufacturer {
    Boss,
    WalrusAudio,
    Zoom,
    /// Any manufacturer not listed above.
    Other,
}

impl Manufacturer {
    /// Looks up a manufacturer by its catalog name (exact match).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Boss" => Manufacturer::Boss,
            "Walrus Audio" => Manufacturer::WalrusAudio,
            "Zoom" => Manufacturer::Zoom,
            _ => Manufacturer::Other,
        }
    }

    /// Enclosure color as `#rrggbb`.
    pub fn body_color(&self) -> &'static str {
        match self {
            Manufacturer::Boss => "#2563eb",
            Manufacturer::WalrusAudio => "#059669",
            Manufacturer::Zoom => "#dc2626",
            Manufacturer::Other => DEFAULT_BODY_COLOR,
        }
    }
}

/// Resolves the enclosure color for a manufacturer name.
pub fn resolve_body_color(manufacturer: &str) -> &'static str {
    Manufacturer::from_name(manufacturer).body_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_manufacturers() {
        assert_eq!(resolve_body_color("Boss"), "#2563eb");
        assert_eq!(resolve_body_color("Walrus Audio"), "#059669");
        assert_eq!(resolve_body_color("Zoom"), "#dc2626");
    }

    #[test]
    fn test_unknown_manufacturer_uses_default() {
        assert_eq!(resolve_body_color("Acme"), "#6b7280");
        assert_eq!(resolve_body_color(""), DEFAULT_BODY_COLOR);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Manufacturer::from_name("boss"), Manufacturer::Other);
        assert_eq!(Manufacturer::from_name("Walrus Audio"), Manufacturer::WalrusAudio);
    }
}
