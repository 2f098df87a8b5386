//! Extraction of schedule data from a Pembrokeshire property page.
//!
//! Selectors target the Bootstrap layout the council currently renders:
//! the regular collection day sits in the first `.row p strong`, and each
//! bin type is a centered three-column card holding an icon and a date.
//! The markup is the only contract we have, so nothing here ever fails on
//! a missing node.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use kerbside_core::model::BinEntry;

static DAY_LABEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".row p strong").expect("static selector"));
static BIN_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".col-md-4.text-center.mb-3").expect("static selector"));
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("static selector"));
static STRONG: Lazy<Selector> = Lazy::new(|| Selector::parse("strong").expect("static selector"));

/// Extract the regular collection day label, if the page carries one.
pub(crate) fn day_label(document: &Html) -> Option<String> {
    let text = document
        .select(&DAY_LABEL)
        .next()?
        .text()
        .collect::<String>();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Extract every bin card in page order.
///
/// Blocks missing a usable name or date are skipped entirely; the
/// remaining entries keep their page order.
pub(crate) fn bin_entries(document: &Html) -> Vec<BinEntry> {
    let mut bins = Vec::new();

    for block in document.select(&BIN_BLOCK) {
        // The card image carries the bin name. `title` is the usual home,
        // but some bin types only set `alt`.
        let name = block.select(&IMG).next().and_then(|img| {
            let attrs = img.value();
            attrs.attr("title").or_else(|| attrs.attr("alt"))
        });

        let date = block
            .select(&STRONG)
            .next()
            .map(|node| node.text().collect::<String>());

        let (Some(name), Some(date)) = (name, date) else {
            continue;
        };

        let name = name.trim();
        let date = date.trim();
        if name.is_empty() || date.is_empty() {
            continue;
        }

        bins.push(BinEntry {
            raw_name: name.to_owned(),
            date_label: date.to_owned(),
        });
    }

    bins
}
