//! Marker lines delimiting the managed regions of a document.

/// A start/end marker pair. Regions never nest, and only the first pair in a
/// document is managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: &'static str,
    pub end: &'static str,
}

macro_rules! region {
    ($suffix:literal) => {
        Region {
            start: concat!("// Start of autogenerated code - DO NOT EDIT!", " (", $suffix, ")"),
            end: concat!("// End of autogenerated code - DO NOT EDIT!", " (", $suffix, ")"),
        }
    };
}

/// Trait description, profiles sentence and platform warning.
pub const DESCRIPTION: Region = region!("description");
/// Usage example and configuration table.
pub const CONFIGURATION: Region = region!("configuration");
/// Navigation entries in the shared nav document.
pub const NAV: Region = region!("trait-nav");
/// Page list in the optional list document.
pub const LIST: Region = region!("trait-list");

/// Prefix of a document title line.
pub const TITLE_PREFIX: &str = "= ";
