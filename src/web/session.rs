//! Per-request genre selection.
//!
//! The previously chosen genre travels with the page itself (a hidden
//! `selected_genre` form field) instead of living in server state, so two
//! clients never see each other's selection.

/// Genre chosen for one request and echoed back into the rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSelection(Option<String>);

impl GenreSelection {
    /// Pick the genre for this request.
    ///
    /// A non-empty `submitted` genre always wins. Otherwise the `carried`
    /// value from the previous page is reused only when `sticky` is set.
    pub fn resolve(submitted: Option<&str>, carried: Option<&str>, sticky: bool) -> Self {
        let pick = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(String::from);
        match pick(submitted) {
            Some(genre) => Self(Some(genre)),
            None if sticky => Self(pick(carried)),
            None => Self(None),
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
