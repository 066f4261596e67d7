//! Source-dependent form state.
//!
//! DESIGN
//! ======
//! The form is reached only through [`FormView`], a typed view-model over the
//! page's elements. Every accessor returns `None` (or does nothing) for an
//! element that is missing from the markup, and the controller treats that
//! as "skip", never as an error.
//!
//! The time-range control is only meaningful for top tracks. Disabling it is
//! presentational: its value is still submitted.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Serialize;

pub const TOP_TRACKS_DESCRIPTION: &str = "Automatisch erstellt aus meinen Spotify Top Tracks";
pub const LIKED_SONGS_DESCRIPTION: &str = "Automatisch erstellt aus meinen Lieblingssongs";
/// Liked-songs default used by older page templates.
pub const LEGACY_LIKED_SONGS_DESCRIPTION: &str = "Automatisch erstellt aus meinen Spotify Liked Songs";
pub const LIKED_TIME_RANGE_HINT: &str = "Zeitraum ist nur bei Top Tracks relevant.";

const DIMMED: &str = "0.6";
const OPAQUE: &str = "1";

/// Where the playlist's tracks come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Liked,
    Top,
}

impl Source {
    /// Selector value to source. Anything but `"liked"` means top tracks.
    pub fn from_value(value: &str) -> Self {
        if value == "liked" { Self::Liked } else { Self::Top }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Liked => "liked",
            Self::Top => "top",
        }
    }
}

/// Elements of the playlist page the client reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormElement {
    Source,
    TimeRange,
    Limit,
    Name,
    Description,
    Public,
    SelectAll,
    Submit,
    Status,
    ThemeToggle,
}

impl FormElement {
    /// DOM id of the element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::TimeRange => "time_range",
            Self::Limit => "limit",
            Self::Name => "name",
            Self::Description => "description",
            Self::Public => "public",
            Self::SelectAll => "allSongsBtn",
            Self::Submit => "createBtn",
            Self::Status => "status",
            Self::ThemeToggle => "themeToggle",
        }
    }
}

/// Presentation of a control: enablement, opacity, tooltip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub disabled: bool,
    pub opacity: &'static str,
    /// `None` leaves the tooltip as it is.
    pub title: Option<&'static str>,
}

/// Typed access to the form. Missing elements read as `None` and ignore
/// writes.
pub trait FormView {
    fn is_present(&self, element: FormElement) -> bool;
    /// Current value; the text content for [`FormElement::Status`].
    fn value(&self, element: FormElement) -> Option<String>;
    fn set_value(&self, element: FormElement, value: &str);
    fn set_disabled(&self, element: FormElement, disabled: bool);
    fn set_opacity(&self, element: FormElement, opacity: &str);
    fn set_title(&self, element: FormElement, title: &str);

    fn apply(&self, element: FormElement, state: ControlState) {
        self.set_disabled(element, state.disabled);
        self.set_opacity(element, state.opacity);
        if let Some(title) = state.title {
            self.set_title(element, title);
        }
    }
}

fn time_range_state(source: Source) -> ControlState {
    match source {
        Source::Liked => ControlState {
            disabled: true,
            opacity: DIMMED,
            title: Some(LIKED_TIME_RANGE_HINT),
        },
        Source::Top => ControlState {
            disabled: false,
            opacity: OPAQUE,
            title: Some(""),
        },
    }
}

fn select_all_state(source: Source) -> ControlState {
    match source {
        Source::Liked => ControlState {
            disabled: false,
            opacity: OPAQUE,
            title: None,
        },
        Source::Top => ControlState {
            disabled: true,
            opacity: DIMMED,
            title: None,
        },
    }
}

/// Default description to switch to, if `current` is the other source's
/// untouched default.
fn rewritten_description(source: Source, current: &str) -> Option<&'static str> {
    let current = current.trim();
    match source {
        Source::Liked if current == TOP_TRACKS_DESCRIPTION => Some(LIKED_SONGS_DESCRIPTION),
        Source::Top if current == LIKED_SONGS_DESCRIPTION || current == LEGACY_LIKED_SONGS_DESCRIPTION => {
            Some(TOP_TRACKS_DESCRIPTION)
        }
        _ => None,
    }
}

/// Sync the time-range control, the "select all" action and the default
/// description with the selected source. Idempotent.
pub fn update_time_range_state<V: FormView + ?Sized>(view: &V) {
    let Some(source_value) = view.value(FormElement::Source) else {
        return;
    };
    if !view.is_present(FormElement::TimeRange) {
        return;
    }
    let source = Source::from_value(&source_value);

    view.apply(FormElement::TimeRange, time_range_state(source));
    if view.is_present(FormElement::SelectAll) {
        view.apply(FormElement::SelectAll, select_all_state(source));
    }

    if let Some(next) = view
        .value(FormElement::Description)
        .and_then(|current| rewritten_description(source, &current))
    {
        log::debug!("description reset to {} default", source.as_str());
        view.set_value(FormElement::Description, next);
    }
}

/// "Select all": for liked songs, raise the limit to `limit`.
pub fn select_all_songs<V: FormView + ?Sized>(view: &V, limit: u32) {
    let Some(source_value) = view.value(FormElement::Source) else {
        return;
    };
    if !view.is_present(FormElement::Limit) {
        return;
    }
    if Source::from_value(&source_value) == Source::Liked {
        view.set_value(FormElement::Limit, &limit.to_string());
    }
}
