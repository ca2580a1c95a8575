use std::collections::BTreeSet;

use serde::Serialize;

/// Pages always shown on each side of the current page.
const AROUND_CURRENT: usize = 2;
/// Pages always shown at the start and at the end of the strip.
const EDGE: usize = 1;

/// One entry of the page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Pages to show for `current` out of `total`, with a single ellipsis for every
/// elided run.
///
/// The first and last pages are always present together with every page
/// within two of `current`. `current` is clamped into `1..=total`.
pub fn build_page_list(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= 1 {
        return vec![PageMarker::Page(1)];
    }

    let current = current.clamp(1, total);
    let mut pages = BTreeSet::new();

    pages.extend(1..=EDGE.min(total));
    let window_start = current.saturating_sub(AROUND_CURRENT).max(1);
    let window_end = current.saturating_add(AROUND_CURRENT).min(total);
    pages.extend(window_start..=window_end);
    pages.extend((total.saturating_sub(EDGE) + 1)..=total);

    let mut result = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if previous.is_some_and(|prev| page > prev + 1) {
            result.push(PageMarker::Ellipsis);
        }
        result.push(PageMarker::Page(page));
        previous = Some(page);
    }

    result
}

/// Previous/Next button of the page strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub page: usize,
    pub disabled: bool,
}

/// Numbered button or ellipsis in the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StripItem {
    pub page: usize,
    pub ellipsis: bool,
    pub active: bool,
}

/// Everything the page-strip template needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageStrip {
    pub previous: NavButton,
    pub items: Vec<StripItem>,
    pub next: NavButton,
}

impl PageStrip {
    /// `current` is clamped into `1..=total` like in [`build_page_list`].
    pub fn new(current: usize, total: usize) -> Self {
        let total = total.max(1);
        let current = current.clamp(1, total);
        let items = build_page_list(current, total)
            .into_iter()
            .map(|marker| match marker {
                PageMarker::Page(page) => StripItem {
                    page,
                    ellipsis: false,
                    active: page == current,
                },
                PageMarker::Ellipsis => StripItem {
                    page: 0,
                    ellipsis: true,
                    active: false,
                },
            })
            .collect();

        Self {
            previous: NavButton {
                page: current.saturating_sub(1),
                disabled: current <= 1,
            },
            items,
            next: NavButton {
                page: current.saturating_add(1),
                disabled: current >= total,
            },
        }
    }
}
