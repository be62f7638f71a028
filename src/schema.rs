//! Data structures and types for pagination.
//!
//! This module defines the request record, the button and result types handed
//! to the rendering layer, and the single error type the calculator returns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest page number when the caller does not supply one.
pub const DEFAULT_FIRST: i64 = 1;

/// Number of consecutive page buttons shown around the current page.
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// Errors returned when a pagination request is rejected.
///
/// Both variants are input errors: the request can never succeed as given,
/// so callers should fix the arguments rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// `first <= current <= last` does not hold.
    #[error(
        "numbers must be: first <= current <= last (got first={first}, current={current}, last={last})"
    )]
    OutOfRange { first: i64, current: i64, last: i64 },
    /// The window must be centered on the current page, so its width is odd.
    #[error("window size must be an odd number (got {0})")]
    EvenWindowSize(u32),
}

/// Optional display preferences for a pagination request.
///
/// Every field has a default, so an empty JSON object is a valid value:
///
/// ```json
/// {}
/// ```
///
/// Hiding the first/last shortcuts and showing seven pages:
/// ```json
/// { "windowSize": 7, "showFirstLast": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PaginationOptions {
    /// Lowest valid page number. Defaults to 1.
    pub first: i64,
    /// Width of the page window around the current page. Must be odd.
    /// Defaults to 5.
    #[serde(alias = "rangeDisplayed")]
    pub window_size: u32,
    /// Always include `first` and `last` as buttons. Defaults to `true`.
    #[serde(alias = "hasFirstAndLast")]
    pub show_first_last: bool,
    /// Mark gaps between non-consecutive pages. Defaults to `true`.
    #[serde(alias = "hasEllipsis")]
    pub show_ellipsis: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST,
            window_size: DEFAULT_WINDOW_SIZE,
            show_first_last: true,
            show_ellipsis: true,
        }
    }
}

/// A complete pagination request.
///
/// `current` and `last` are required; the remaining fields fall back to the
/// values in [`PaginationOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaginationArgs {
    /// The active page.
    pub current: i64,
    /// The highest valid page number.
    pub last: i64,
    #[serde(default = "default_first")]
    pub first: i64,
    #[serde(default = "default_window_size", alias = "rangeDisplayed")]
    pub window_size: u32,
    #[serde(default = "default_true", alias = "hasFirstAndLast")]
    pub show_first_last: bool,
    #[serde(default = "default_true", alias = "hasEllipsis")]
    pub show_ellipsis: bool,
}

fn default_first() -> i64 {
    DEFAULT_FIRST
}

fn default_window_size() -> u32 {
    DEFAULT_WINDOW_SIZE
}

fn default_true() -> bool {
    true
}

impl PaginationArgs {
    /// Creates a request for `current` out of `first..=last` using the default
    /// options.
    pub fn new(current: i64, last: i64) -> Self {
        Self::with_options(current, last, PaginationOptions::default())
    }

    /// Creates a request from the two required numbers and a set of options.
    pub fn with_options(current: i64, last: i64, options: PaginationOptions) -> Self {
        Self {
            current,
            last,
            first: options.first,
            window_size: options.window_size,
            show_first_last: options.show_first_last,
            show_ellipsis: options.show_ellipsis,
        }
    }

    pub fn with_first(mut self, first: i64) -> Self {
        self.first = first;
        self
    }

    pub fn with_window_size(mut self, window_size: u32) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    pub fn with_ellipsis(mut self, show: bool) -> Self {
        self.show_ellipsis = show;
        self
    }
}

/// Role of a button on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Page,
    First,
    Last,
    Ellipsis,
}

/// Role of a button that points at a real page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Page,
    First,
    Last,
}

impl From<PageKind> for ButtonType {
    fn from(kind: PageKind) -> Self {
        match kind {
            PageKind::Page => ButtonType::Page,
            PageKind::First => ButtonType::First,
            PageKind::Last => ButtonType::Last,
        }
    }
}

/// One entry in the navigation bar.
///
/// Serializes as `{"page": n, "type": "...", "current": bool}`. An ellipsis
/// has no page of its own and is written with `page: 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ButtonRecord", from = "ButtonRecord")]
pub enum Button {
    Page {
        page: i64,
        kind: PageKind,
        current: bool,
    },
    Ellipsis,
}

impl Button {
    /// The page this button navigates to, or `None` for an ellipsis.
    pub fn page(&self) -> Option<i64> {
        match self {
            Button::Page { page, .. } => Some(*page),
            Button::Ellipsis => None,
        }
    }

    pub fn button_type(&self) -> ButtonType {
        match self {
            Button::Page { kind, .. } => (*kind).into(),
            Button::Ellipsis => ButtonType::Ellipsis,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Button::Page { current: true, .. })
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Button::Ellipsis)
    }
}

/// Flat wire shape of a [`Button`].
#[derive(Serialize, Deserialize)]
struct ButtonRecord {
    page: i64,
    #[serde(rename = "type")]
    button_type: ButtonType,
    current: bool,
}

impl From<Button> for ButtonRecord {
    fn from(button: Button) -> Self {
        match button {
            Button::Page {
                page,
                kind,
                current,
            } => ButtonRecord {
                page,
                button_type: kind.into(),
                current,
            },
            Button::Ellipsis => ButtonRecord {
                page: 0,
                button_type: ButtonType::Ellipsis,
                current: false,
            },
        }
    }
}

impl From<ButtonRecord> for Button {
    fn from(record: ButtonRecord) -> Self {
        let kind = match record.button_type {
            ButtonType::Page => PageKind::Page,
            ButtonType::First => PageKind::First,
            ButtonType::Last => PageKind::Last,
            ButtonType::Ellipsis => return Button::Ellipsis,
        };
        Button::Page {
            page: record.page,
            kind,
            current: record.current,
        }
    }
}

/// The computed navigation bar.
///
/// `buttons` is ordered by page number with ellipses interleaved at the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationData {
    /// Page before `current`, or `None` when `current` is the first page.
    pub previous: Option<i64>,
    /// Page after `current`, or `None` when `current` is the last page.
    pub next: Option<i64>,
    pub buttons: Vec<Button>,
}

impl PaginationData {
    /// Page numbers of the non-ellipsis buttons, in display order.
    pub fn pages(&self) -> impl Iterator<Item = i64> + '_ {
        self.buttons.iter().filter_map(Button::page)
    }

    /// The button for the active page.
    pub fn current_button(&self) -> Option<&Button> {
        self.buttons.iter().find(|button| button.is_current())
    }
}
