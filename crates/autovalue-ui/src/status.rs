//! Status feedback views
//!
//! Loading and field-error feedback share one shape: a flag (fullscreen,
//! or whether there is a message at all) picks one of two fixed templates,
//! and the caller's text is dropped into it. The functions here make that
//! choice as plain data; the Dioxus components render the result.

use std::fmt;

/// Message shown by the loading spinner when none is given
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Class carrying the pulsing animation
pub const PULSE_CLASS: &str = "animate-pulse";

/// Glyph used as the field-error warning icon
pub const WARNING_ICON: &str = "\u{26A0}";

/// Class marking the warning icon element
pub const WARNING_ICON_CLASS: &str = "field-error-icon";

/// Icon edge length in pixels
pub const WARNING_ICON_SIZE: u32 = 14;

/// Built-in classes of the field-error row
pub const FIELD_ERROR_CLASSES: &[&str] = &["field-error", "text-danger", "text-sm"];

/// Ordered set of CSS class tokens.
///
/// Built from a component's fixed tokens; caller fragments are merged in
/// after them. A token appears at most once and fixed tokens are never
/// removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Start from a component's fixed tokens
    pub fn base(tokens: &[&str]) -> Self {
        let mut list = Self::default();
        for token in tokens {
            list.push(token);
        }
        list
    }

    /// Append every whitespace-separated token of `fragment` not yet present
    pub fn merge(mut self, fragment: &str) -> Self {
        for token in fragment.split_whitespace() {
            self.push(token);
        }
        self
    }

    fn push(&mut self, token: &str) {
        let token = token.trim();
        if !token.is_empty() && !self.contains(token) {
            self.0.push(token.to_string());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Result of a status resolver: nothing to show, or a view to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusView<T> {
    Empty,
    Rendered(T),
}

impl<T> StatusView<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, StatusView::Empty)
    }

    pub fn rendered(&self) -> Option<&T> {
        match self {
            StatusView::Empty => None,
            StatusView::Rendered(view) => Some(view),
        }
    }
}

/// Layout of the loading spinner
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SpinnerLayout {
    /// Covers the viewport, content centred
    Fullscreen,
    /// Centred in place with fixed vertical padding
    #[default]
    Inline,
}

impl SpinnerLayout {
    pub fn from_fullscreen(fullscreen: bool) -> Self {
        if fullscreen {
            SpinnerLayout::Fullscreen
        } else {
            SpinnerLayout::Inline
        }
    }

    /// Layout marker class. Each layout has exactly one.
    pub fn class(&self) -> &'static str {
        match self {
            SpinnerLayout::Fullscreen => "spinner-fullscreen",
            SpinnerLayout::Inline => "spinner-inline",
        }
    }
}

/// Everything the loading spinner renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinnerView {
    pub layout: SpinnerLayout,
    pub message: String,
    /// Container classes: `loading-spinner` plus the layout marker
    pub classes: ClassList,
    /// Pulsing ring
    pub ring_classes: ClassList,
    /// Pulsing message line
    pub message_classes: ClassList,
}

/// Resolve the loading spinner's view.
///
/// Absent inputs take their defaults (`"Loading..."`, inline). Total.
pub fn resolve_spinner(message: Option<&str>, fullscreen: Option<bool>) -> SpinnerView {
    let layout = SpinnerLayout::from_fullscreen(fullscreen.unwrap_or(false));
    SpinnerView {
        layout,
        message: message.unwrap_or(DEFAULT_LOADING_MESSAGE).to_string(),
        classes: ClassList::base(&["loading-spinner", layout.class()]),
        ring_classes: ClassList::base(&["spinner-ring", PULSE_CLASS]),
        message_classes: ClassList::base(&["spinner-message", PULSE_CLASS]),
    }
}

/// Everything the field-error row renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrorView {
    pub message: String,
    pub icon: &'static str,
    pub classes: ClassList,
}

/// Resolve the field-error row.
///
/// A missing or empty message resolves to [`StatusView::Empty`].
pub fn resolve_field_error(message: Option<&str>, class_name: &str) -> StatusView<FieldErrorView> {
    match message {
        Some(message) if !message.is_empty() => StatusView::Rendered(FieldErrorView {
            message: message.to_string(),
            icon: WARNING_ICON,
            classes: ClassList::base(FIELD_ERROR_CLASSES).merge(class_name),
        }),
        _ => StatusView::Empty,
    }
}
