//! # Pagination Calculator
//!
//! Turns a [`PaginationArgs`] request into the buttons of a navigation bar.
//!
//! ## Strategy
//!
//! 1. Validate `first <= current <= last` and an odd window width
//! 2. Collect the pages to show into a sorted set: the window around `current`
//!    plus, when enabled, the `first` and `last` pages
//! 3. Walk the set in order, classifying each page and inserting an ellipsis
//!    wherever the next shown page is not adjacent
//!
//! Near either end the window slides inward instead of shrinking, so the
//! number of page buttons stays constant while there are enough pages.

use std::collections::BTreeSet;

use crate::schema::{Button, PageKind, PaginationArgs, PaginationData, PaginationError};

/// Computes the navigation bar for `args`.
///
/// # Errors
///
/// Returns [`PaginationError::OutOfRange`] when `current` is outside
/// `first..=last`, and [`PaginationError::EvenWindowSize`] when the window
/// width is even. No output is produced in either case.
///
/// # Example
///
/// ```
/// use pagination_buttons::{pagination, PaginationArgs};
///
/// let data = pagination(&PaginationArgs::new(2, 10)).unwrap();
/// assert_eq!(data.previous, Some(1));
/// assert_eq!(data.next, Some(3));
/// assert_eq!(data.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 10]);
/// ```
pub fn pagination(args: &PaginationArgs) -> Result<PaginationData, PaginationError> {
    validate(args)?;

    let pages = page_set(args);
    let previous = (args.current > args.first).then(|| args.current - 1);
    let next = (args.current < args.last).then(|| args.current + 1);

    Ok(PaginationData {
        previous,
        next,
        buttons: to_buttons(args, &pages),
    })
}

fn validate(args: &PaginationArgs) -> Result<(), PaginationError> {
    if !(args.first <= args.current && args.current <= args.last) {
        return Err(PaginationError::OutOfRange {
            first: args.first,
            current: args.current,
            last: args.last,
        });
    }
    if args.window_size % 2 == 0 {
        return Err(PaginationError::EvenWindowSize(args.window_size));
    }
    Ok(())
}

/// Inclusive bounds of the window around `current`, clamped to `first..=last`.
///
/// Expects a validated request, so `window_size >= 1`.
fn window_bounds(args: &PaginationArgs) -> (i64, i64) {
    let width = i64::from(args.window_size);
    let half = width / 2;

    let start = args
        .current
        .saturating_sub(half)
        .min(args.last.saturating_sub(width - 1))
        .max(args.first);
    let end = args
        .current
        .saturating_add(half)
        .max(args.first.saturating_add(width - 1))
        .min(args.last);

    (start, end)
}

fn page_set(args: &PaginationArgs) -> BTreeSet<i64> {
    let mut pages = BTreeSet::new();
    if args.show_first_last {
        pages.insert(args.first);
        pages.insert(args.last);
    }

    let (start, end) = window_bounds(args);
    pages.extend(start..=end);
    pages
}

fn classify(args: &PaginationArgs, page: i64) -> PageKind {
    // a single-page range reports `first`
    if page == args.first {
        PageKind::First
    } else if page == args.last {
        PageKind::Last
    } else {
        PageKind::Page
    }
}

fn to_buttons(args: &PaginationArgs, pages: &BTreeSet<i64>) -> Vec<Button> {
    let mut buttons = Vec::with_capacity(pages.len() * 2);
    let mut iter = pages.iter().copied().peekable();

    while let Some(page) = iter.next() {
        buttons.push(Button::Page {
            page,
            kind: classify(args, page),
            current: page == args.current,
        });

        if args.show_ellipsis {
            if let Some(&next) = iter.peek() {
                if next != page + 1 {
                    buttons.push(Button::Ellipsis);
                }
            }
        }
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ButtonType;

    /// Page numbers as the rendering layer sees them, with 0 for an ellipsis.
    fn wire_pages(data: &PaginationData) -> Vec<i64> {
        data.buttons
            .iter()
            .map(|button| button.page().unwrap_or(0))
            .collect()
    }

    fn page(page: i64, kind: PageKind, current: bool) -> Button {
        Button::Page {
            page,
            kind,
            current,
        }
    }

    #[test]
    fn test_base_scenario() {
        let data = pagination(&PaginationArgs::new(2, 10)).unwrap();
        assert_eq!(
            data.buttons,
            vec![
                page(1, PageKind::First, false),
                page(2, PageKind::Page, true),
                page(3, PageKind::Page, false),
                page(4, PageKind::Page, false),
                page(5, PageKind::Page, false),
                Button::Ellipsis,
                page(10, PageKind::Last, false),
            ]
        );
        assert_eq!(data.previous, Some(1));
        assert_eq!(data.next, Some(3));
        assert_eq!(data.current_button().and_then(Button::page), Some(2));
    }

    #[test]
    fn test_current_after_last() {
        assert_eq!(
            pagination(&PaginationArgs::new(6, 5)),
            Err(PaginationError::OutOfRange {
                first: 1,
                current: 6,
                last: 5
            })
        );
    }

    #[test]
    fn test_current_before_first() {
        let err = pagination(&PaginationArgs::new(1, 5).with_first(2)).unwrap_err();
        assert!(matches!(err, PaginationError::OutOfRange { first: 2, .. }));
    }

    #[test]
    fn test_even_window_size() {
        assert_eq!(
            pagination(&PaginationArgs::new(3, 5).with_window_size(4)),
            Err(PaginationError::EvenWindowSize(4))
        );
        assert_eq!(
            pagination(&PaginationArgs::new(3, 5).with_window_size(0)),
            Err(PaginationError::EvenWindowSize(0))
        );
    }

    #[test]
    fn test_ordering_checked_before_parity() {
        let err = pagination(&PaginationArgs::new(9, 5).with_window_size(4)).unwrap_err();
        assert!(matches!(err, PaginationError::OutOfRange { .. }));
    }

    #[test]
    fn test_window_of_three_with_ellipsis() {
        let cases: [(i64, &[i64]); 5] = [
            (1, &[1, 2, 3, 0, 5]),
            (2, &[1, 2, 3, 0, 5]),
            (3, &[1, 2, 3, 4, 5]),
            (4, &[1, 0, 3, 4, 5]),
            (5, &[1, 0, 3, 4, 5]),
        ];
        for (current, expected) in cases {
            let data = pagination(&PaginationArgs::new(current, 5).with_window_size(3)).unwrap();
            assert_eq!(wire_pages(&data), expected, "current: {current}");
        }
    }

    #[test]
    fn test_window_of_three_without_ellipsis() {
        let cases: [(i64, &[i64]); 5] = [
            (1, &[1, 2, 3, 5]),
            (2, &[1, 2, 3, 5]),
            (3, &[1, 2, 3, 4, 5]),
            (4, &[1, 3, 4, 5]),
            (5, &[1, 3, 4, 5]),
        ];
        for (current, expected) in cases {
            let args = PaginationArgs::new(current, 5)
                .with_window_size(3)
                .with_ellipsis(false);
            let data = pagination(&args).unwrap();
            assert_eq!(wire_pages(&data), expected, "current: {current}");
            assert!(!data.buttons.iter().any(Button::is_ellipsis));
        }
    }

    #[test]
    fn test_window_of_three_without_first_and_last() {
        let cases: [(i64, &[i64]); 5] = [
            (1, &[1, 2, 3]),
            (2, &[1, 2, 3]),
            (3, &[2, 3, 4]),
            (4, &[3, 4, 5]),
            (5, &[3, 4, 5]),
        ];
        for (current, expected) in cases {
            let args = PaginationArgs::new(current, 5)
                .with_window_size(3)
                .with_first_last(false);
            let data = pagination(&args).unwrap();
            assert_eq!(wire_pages(&data), expected, "current: {current}");
        }
    }

    #[test]
    fn test_single_page() {
        let data = pagination(&PaginationArgs::new(1, 1)).unwrap();
        assert_eq!(data.buttons, vec![page(1, PageKind::First, true)]);
        assert_eq!(data.previous, None);
        assert_eq!(data.next, None);
    }

    #[test]
    fn test_window_covers_short_range() {
        let data = pagination(&PaginationArgs::new(2, 3).with_window_size(7)).unwrap();
        assert_eq!(wire_pages(&data), vec![1, 2, 3]);
        assert_eq!(data.buttons[2].button_type(), ButtonType::Last);
    }

    #[test]
    fn test_window_slides_instead_of_shrinking() {
        for current in 1..=20 {
            let args = PaginationArgs::new(current, 20).with_first_last(false);
            let data = pagination(&args).unwrap();
            assert_eq!(data.pages().count(), 5, "current: {current}");
        }
        assert_eq!(window_bounds(&PaginationArgs::new(1, 20)), (1, 5));
        assert_eq!(window_bounds(&PaginationArgs::new(20, 20)), (16, 20));
        assert_eq!(window_bounds(&PaginationArgs::new(10, 20)), (8, 12));
    }

    #[test]
    fn test_non_default_first() {
        let data = pagination(&PaginationArgs::new(0, 9).with_first(0)).unwrap();
        assert_eq!(wire_pages(&data), vec![0, 1, 2, 3, 4, 0, 9]);
        assert!(data.buttons[5].is_ellipsis());
        assert_eq!(data.buttons[0].button_type(), ButtonType::First);
        assert!(data.buttons[0].is_current());
        assert_eq!(data.previous, None);

        let data = pagination(&PaginationArgs::new(-3, 4).with_first(-5)).unwrap();
        assert_eq!(data.pages().collect::<Vec<_>>(), vec![-5, -4, -3, -2, -1, 4]);
        assert_eq!(data.previous, Some(-4));
    }

    #[test]
    fn test_gap_on_both_sides() {
        let data = pagination(&PaginationArgs::new(50, 100)).unwrap();
        assert_eq!(wire_pages(&data), vec![1, 0, 48, 49, 50, 51, 52, 0, 100]);
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let args = PaginationArgs::new(i64::MAX, i64::MAX).with_first(i64::MIN);
        let data = pagination(&args).unwrap();
        assert_eq!(data.next, None);
        assert_eq!(data.pages().next(), Some(i64::MIN));
        assert_eq!(data.pages().last(), Some(i64::MAX));
        assert_eq!(data.pages().count(), 6);
    }

    #[test]
    fn test_invariants_hold_across_requests() {
        for last in 1..=12 {
            for current in 1..=last {
                for window_size in [1, 3, 5, 7] {
                    for (show_first_last, show_ellipsis) in
                        [(true, true), (true, false), (false, true), (false, false)]
                    {
                        let args = PaginationArgs::new(current, last)
                            .with_window_size(window_size)
                            .with_first_last(show_first_last)
                            .with_ellipsis(show_ellipsis);
                        let data = pagination(&args).unwrap();

                        let pages: Vec<i64> = data.pages().collect();
                        assert!(pages.windows(2).all(|pair| pair[0] < pair[1]), "{args:?}");

                        let current_buttons: Vec<&Button> =
                            data.buttons.iter().filter(|b| b.is_current()).collect();
                        assert_eq!(current_buttons.len(), 1, "{args:?}");
                        assert_eq!(current_buttons[0].page(), Some(current));

                        assert_eq!(data.previous, (current > 1).then(|| current - 1));
                        assert_eq!(data.next, (current < last).then(|| current + 1));

                        assert!(!data.buttons.first().is_some_and(Button::is_ellipsis));
                        assert!(!data.buttons.last().is_some_and(Button::is_ellipsis));

                        assert_eq!(pagination(&args).unwrap(), data);
                    }
                }
            }
        }
    }
}
