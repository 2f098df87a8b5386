//! Static catalog mapping raw council bin labels to display metadata.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::BinDisplay;

/// Icon served when a raw label has no catalog entry.
pub const FALLBACK_ICON: &str = "/binImages/default.svg";

// Keys must match the council's published labels exactly, including
// bag-count prefixes and trailing "(T)" qualifiers. The vocabulary is
// small and changes rarely, so an exact-match table beats fuzzy matching.
static CATALOG: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        (
            "Green Food Waste Caddy",
            ("Food Waste", "/binImages/green-food-waste-caddy.svg"),
        ),
        (
            "Green Food Waste Caddy (T)",
            ("Food Waste", "/binImages/green-food-waste-caddy.svg"),
        ),
        ("Blue Box (Paper)", ("Blue Box", "/binImages/blue-box.svg")),
        ("Green Box (Glass)", ("Green Box", "/binImages/green-box.svg")),
        (
            "3 x Black/Grey Bag (Residual Waste)",
            ("3 x Black/Grey Bags", "/binImages/black-grey-bags.svg"),
        ),
        (
            "1 x Black/Grey Bag (Residual Waste)",
            ("1 x Black/Grey Bags", "/binImages/black-grey-bags.svg"),
        ),
        (
            "Blue Bag (Card and Cardboard)",
            ("Blue Bag", "/binImages/blue-bag.svg"),
        ),
        (
            "Red Bag (Metal Packaging, Plastic packaging and cartons)",
            ("Red Bag", "/binImages/red-bag.svg"),
        ),
        ("Orange Bags (T)", ("Orange Bags", "/binImages/orange-bag.svg")),
    ])
});

/// Resolve a raw bin label to its display form.
///
/// Lookup is pure, total, and case-sensitive. Labels the catalog does not
/// recognize come back unchanged with [`FALLBACK_ICON`], so a new label on
/// the council site never breaks rendering.
#[must_use]
pub fn resolve(raw_name: &str) -> BinDisplay {
    match CATALOG.get(raw_name) {
        Some(&(short_name, icon_ref)) => BinDisplay {
            short_name: short_name.to_owned(),
            icon_ref: icon_ref.to_owned(),
        },
        None => BinDisplay {
            short_name: raw_name.to_owned(),
            icon_ref: FALLBACK_ICON.to_owned(),
        },
    }
}
