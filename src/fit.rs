//! Recipient prefix fitting 📐
//!
//! Given a list of recipient names and the width of the cell they must fit in,
//! find the longest leading prefix (joined by the configured separator) that
//! still leaves room for the ellipsis marker and the "+N" badge. The measuring
//! capability is injected so the search runs the same against a live terminal
//! (unicode-width cells) or a fake measure in tests.

use unicode_width::UnicodeWidthStr;

/// Maps candidate text to its rendered width.
pub trait TextMeasure {
    fn width(&self, text: &str) -> u16;
}

/// Terminal cell widths via unicode-width.
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn width(&self, text: &str) -> u16 {
        text.width().min(u16::MAX as usize) as u16
    }
}

/// Widths read for one fitting pass. All transient — measured fresh per pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitWidths {
    /// Available space in the cell.
    pub container: u16,
    /// Rendered width of the ellipsis marker (e.g. ", ...").
    pub ellipsis: u16,
    /// Rendered width of the count badge, 0 when none is shown.
    pub badge: u16,
}

/// Settled outcome of a fitting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitResult {
    /// Leading names that stay visible.
    pub visible: usize,
    /// Names hidden behind the badge.
    pub truncated: usize,
}

impl FitResult {
    /// Pessimistic placeholder used before the first measurement pass:
    /// assume one name is hidden until a real pass settles the count.
    pub fn placeholder(total: usize) -> Self {
        let truncated = if total > 1 { 1 } else { 0 };
        Self {
            visible: total - truncated,
            truncated,
        }
    }

    pub fn total(&self) -> usize {
        self.visible + self.truncated
    }
}

/// Monotonic prefix search.
///
/// Grows the joined prefix one name at a time, starting from two, and stops at
/// the first candidate whose width plus badge plus ellipsis overflows the
/// container; the previous prefix is the accepted visible set. A single name
/// is never truncated, whatever the width.
pub fn fit_prefix(
    names: &[String],
    separator: &str,
    widths: FitWidths,
    measure: &dyn TextMeasure,
) -> FitResult {
    let total = names.len();
    if total <= 1 {
        return FitResult {
            visible: total,
            truncated: 0,
        };
    }

    let budget = u32::from(widths.container);
    let reserved = u32::from(widths.badge) + u32::from(widths.ellipsis);

    let mut len = 2;
    while len <= total {
        let candidate = names[..len].join(separator);
        if u32::from(measure.width(&candidate)) + reserved > budget {
            return FitResult {
                visible: len - 1,
                truncated: total - (len - 1),
            };
        }
        len += 1;
    }

    // Never overflowed: everything fits.
    FitResult {
        visible: total,
        truncated: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: &str = ", ";
    const ELLIPSIS: u16 = 5; // ", ..."

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn widths(container: u16, badge: u16) -> FitWidths {
        FitWidths {
            container,
            ellipsis: ELLIPSIS,
            badge,
        }
    }

    /// Every char counts double — proves the measure is really injected.
    struct DoubleWide;

    impl TextMeasure for DoubleWide {
        fn width(&self, text: &str) -> u16 {
            (text.chars().count() * 2) as u16
        }
    }

    #[test]
    fn singleton_is_never_truncated() {
        let list = names(&["Alice"]);
        for container in [0, 1, 3, 80] {
            let fit = fit_prefix(&list, SEP, widths(container, 4), &CellMeasure);
            assert_eq!(fit, FitResult { visible: 1, truncated: 0 });
        }
    }

    #[test]
    fn empty_list_fits_trivially() {
        let fit = fit_prefix(&[], SEP, widths(0, 0), &CellMeasure);
        assert_eq!(fit, FitResult { visible: 0, truncated: 0 });
    }

    #[test]
    fn all_fit_when_container_is_wide() {
        // "Alice, Bob, Carol" is 17 cells; 17 + 0 + 5 <= 30
        let list = names(&["Alice", "Bob", "Carol"]);
        let fit = fit_prefix(&list, SEP, widths(30, 0), &CellMeasure);
        assert_eq!(fit, FitResult { visible: 3, truncated: 0 });
    }

    #[test]
    fn overflow_accepts_previous_prefix() {
        // "Alice, Bob" is 10; 10 + 4 + 5 = 19 fits in 20,
        // "Alice, Bob, Carol" is 17; 17 + 4 + 5 = 26 does not.
        let list = names(&["Alice", "Bob", "Carol"]);
        let fit = fit_prefix(&list, SEP, widths(20, 4), &CellMeasure);
        assert_eq!(fit, FitResult { visible: 2, truncated: 1 });
    }

    #[test]
    fn overflow_at_first_candidate_keeps_one_visible() {
        let list = names(&["Alice", "Bob", "Carol", "Dan"]);
        let fit = fit_prefix(&list, SEP, widths(5, 4), &CellMeasure);
        assert_eq!(fit, FitResult { visible: 1, truncated: 3 });
    }

    #[test]
    fn visible_count_is_monotonic_in_width() {
        let list = names(&["Ana", "Benjamin", "Cleo", "Dmitri", "Eve", "Felicity"]);
        let mut last_visible = 0;
        for container in 0..120u16 {
            let fit = fit_prefix(&list, SEP, widths(container, 4), &CellMeasure);
            assert!(fit.visible >= last_visible, "shrank at width {container}");
            last_visible = fit.visible;
        }
    }

    #[test]
    fn visible_plus_truncated_equals_total() {
        let list = names(&["Ana", "Benjamin", "Cleo", "Dmitri", "Eve"]);
        for container in 0..80u16 {
            let fit = fit_prefix(&list, SEP, widths(container, 4), &CellMeasure);
            assert_eq!(fit.total(), list.len());
        }
    }

    #[test]
    fn same_inputs_same_result() {
        let list = names(&["Ana", "Benjamin", "Cleo", "Dmitri"]);
        let first = fit_prefix(&list, SEP, widths(25, 4), &CellMeasure);
        let second = fit_prefix(&list, SEP, widths(25, 4), &CellMeasure);
        assert_eq!(first, second);
    }

    #[test]
    fn injected_measure_changes_the_outcome() {
        let list = names(&["Alice", "Bob", "Carol"]);
        let cells = fit_prefix(&list, SEP, widths(30, 0), &CellMeasure);
        let doubled = fit_prefix(&list, SEP, widths(30, 0), &DoubleWide);
        assert_eq!(cells.truncated, 0);
        assert!(doubled.truncated > 0);
    }

    #[test]
    fn placeholder_assumes_one_hidden() {
        assert_eq!(FitResult::placeholder(5), FitResult { visible: 4, truncated: 1 });
        assert_eq!(FitResult::placeholder(1), FitResult { visible: 1, truncated: 0 });
        assert_eq!(FitResult::placeholder(0), FitResult { visible: 0, truncated: 0 });
    }
}
