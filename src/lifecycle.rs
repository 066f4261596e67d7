//! Page start-up decisions that do not need a browser.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use crate::state::form::{FormView, update_time_range_state};
use crate::util::storage::KeyValueStore;
use crate::util::theme::{Theme, ThemeDocument, ThemeService};

/// `document.readyState` while the HTML is still being parsed.
pub const LOADING: &str = "loading";

/// Whether mounting has to wait for `DOMContentLoaded`. The module usually
/// instantiates after parsing, in which case it mounts right away.
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == LOADING
}

/// Initial page state: preferred theme applied and controls synced to the
/// source selector the page was rendered with.
pub fn prepare_page<V, S, D>(view: &V, theme: &ThemeService<S, D>) -> Theme
where
    V: FormView + ?Sized,
    S: KeyValueStore,
    D: ThemeDocument,
{
    let applied = theme.init();
    update_time_range_state(view);
    applied
}
