use std::{fmt, ops::RangeInclusive};

/// Number of numbered page links shown at once.
pub const WINDOW_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub target: u32,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

/// Previous / numbered / next controls for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub previous: PageLink,
    pub pages: Vec<PageLink>,
    pub next: PageLink,
}

impl PaginationView {
    pub fn links(&self) -> impl Iterator<Item = &PageLink> {
        std::iter::once(&self.previous)
            .chain(self.pages.iter())
            .chain(std::iter::once(&self.next))
    }
}

/// Pages to show numbered links for, centered on `current` and shifted left
/// near the end so the window stays full whenever `total` allows.
pub fn page_window(current: u32, total: u32) -> RangeInclusive<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(WINDOW_SIZE / 2).max(1);
    let end = (start + WINDOW_SIZE - 1).min(total);
    if end - start + 1 < WINDOW_SIZE {
        start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    }

    start..=end
}

/// Controls for `current` of `total` pages, or `None` when there is only one
/// page and the control area should be cleared. `busy` disables every link
/// while a fetch is in flight.
pub fn project(current: u32, total: u32, busy: bool) -> Option<PaginationView> {
    if total <= 1 {
        return None;
    }

    let previous = PageLink {
        target: current.saturating_sub(1).max(1),
        label: "Previous".to_string(),
        active: false,
        disabled: busy || current <= 1,
    };
    let next = PageLink {
        target: (current + 1).min(total),
        label: "Next".to_string(),
        active: false,
        disabled: busy || current >= total,
    };
    let pages = page_window(current, total)
        .map(|page| PageLink {
            target: page,
            label: page.to_string(),
            active: page == current,
            disabled: busy,
        })
        .collect();

    Some(PaginationView {
        previous,
        pages,
        next,
    })
}

/// The "showing X to Y of Z" line under a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl PageSummary {
    pub fn new(offset: u64, returned: usize, total: u64) -> Self {
        let start = offset + 1;
        Self {
            start,
            end: offset + returned as u64,
            total,
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {} entries", self.start, self.end, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbers(view: &PaginationView) -> Vec<u32> {
        view.pages.iter().map(|p| p.target).collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(project(1, 1, false), None);
        assert_eq!(project(1, 0, false), None);
    }

    #[test]
    fn window_centers_then_shifts_at_the_end() {
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(3, 10), 1..=5);
        assert_eq!(page_window(6, 10), 4..=8);
        assert_eq!(page_window(9, 10), 6..=10);
        assert_eq!(page_window(10, 10), 6..=10);
        assert_eq!(page_window(2, 3), 1..=3);
    }

    #[test]
    fn edges_are_disabled() {
        let first = project(1, 4, false).unwrap();
        assert!(first.previous.disabled);
        assert!(!first.next.disabled);
        assert_eq!(first.next.target, 2);

        let last = project(4, 4, false).unwrap();
        assert!(!last.previous.disabled);
        assert_eq!(last.previous.target, 3);
        assert!(last.next.disabled);
        assert_eq!(numbers(&last), vec![1, 2, 3, 4]);
    }

    #[test]
    fn active_page_is_marked() {
        let view = project(2, 2, false).unwrap();
        let active: Vec<_> = view.pages.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].target, 2);
    }

    #[test]
    fn busy_disables_everything() {
        let view = project(3, 9, true).unwrap();
        assert!(view.links().all(|link| link.disabled));
    }

    #[test]
    fn summary_text() {
        let summary = PageSummary::new(10, 4, 14);
        assert_eq!(summary, PageSummary { start: 11, end: 14, total: 14 });
        assert_eq!(summary.to_string(), "Showing 11 to 14 of 14 entries");
    }

    proptest! {
        #[test]
        fn window_is_full_width_and_contains_current(total in 1u32..500, pick in 0u32..500) {
            let current = pick % total + 1;
            let window = page_window(current, total);
            prop_assert_eq!(window.end() - window.start() + 1, total.min(WINDOW_SIZE));
            prop_assert!(window.contains(&current));
            prop_assert!(*window.start() >= 1);
            prop_assert!(*window.end() <= total);
        }
    }
}
