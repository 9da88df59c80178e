//! Pure presentation rules for the roster: what a card shows and which
//! state the list region is in.

use crate::controller::SignupOutcome;
use api::ActivityCatalog;
use api::ApiError;

/// Participants listed on a card before the rest are summarized.
pub const MAX_SHOWN_PARTICIPANTS: usize = 5;

/// Shown in place of the list when the catalog could not be loaded.
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Shown on a card whose roster is empty.
pub const NO_PARTICIPANTS_NOTICE: &str = "No participants yet";

/// Everything the roster screen can be asked to do.
///
/// Rows, the signup form and the refresh control all send these to the
/// screen's single action handler; the variant carries the stable
/// (activity, email) key so no control owns request logic itself.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RosterAction {
    Refresh,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// What the user has typed into the signup form.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SignupDraft {
    pub email: String,
    pub activity: String,
}

impl SignupDraft {
    /// Applies a finished signup: an accepted one empties the form, a refused
    /// one leaves it as typed so the user can correct it.
    pub fn settle(&mut self, outcome: &SignupOutcome) {
        if outcome.is_accepted() {
            *self = Self::default();
        }
    }
}

/// The visible slice of a roster plus the size of the hidden remainder.
#[derive(Debug, PartialEq, Eq)]
pub struct ParticipantPreview<'a> {
    shown: &'a [String],
    hidden: usize,
}

impl<'a> ParticipantPreview<'a> {
    pub fn new(participants: &'a [String]) -> Self {
        let shown_len = participants.len().min(MAX_SHOWN_PARTICIPANTS);
        Self {
            shown: &participants[..shown_len],
            hidden: participants.len() - shown_len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn shown(&self) -> &'a [String] {
        self.shown
    }

    /// Number of participants folded into the "and N more" line, if any.
    pub fn hidden_count(&self) -> Option<usize> {
        (self.hidden > 0).then_some(self.hidden)
    }
}

/// Where the list region is in its `Loading → {Loaded, LoadFailed}` cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadState<'a> {
    Loading,
    Loaded(&'a ActivityCatalog),
    LoadFailed,
}

impl<'a> LoadState<'a> {
    /// Maps the value of the catalog resource: `None` while the first fetch is in flight.
    pub fn from_resource(value: Option<&'a Result<ActivityCatalog, ApiError>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(catalog)) => LoadState::Loaded(catalog),
            Some(Err(_)) => LoadState::LoadFailed,
        }
    }

    /// Options for the activity selector. Empty unless a catalog is loaded.
    pub fn activity_names(&self) -> Vec<String> {
        match self {
            LoadState::Loaded(catalog) => catalog.names().map(str::to_owned).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TransientMessage;
    use api::Activity;

    fn roster(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("student{i}@mergington.edu")).collect()
    }

    #[test]
    fn preview_caps_at_five_and_counts_the_rest() {
        let participants = roster(8);
        let preview = ParticipantPreview::new(&participants);

        assert_eq!(preview.shown().len(), 5);
        assert_eq!(preview.shown()[4], "student4@mergington.edu");
        assert_eq!(preview.hidden_count(), Some(3));
    }

    #[test]
    fn preview_of_exactly_five_has_no_summary() {
        let participants = roster(5);
        let preview = ParticipantPreview::new(&participants);

        assert_eq!(preview.shown().len(), 5);
        assert_eq!(preview.hidden_count(), None);
    }

    #[test]
    fn preview_of_empty_roster() {
        let preview = ParticipantPreview::new(&[]);
        assert!(preview.is_empty());
        assert_eq!(preview.hidden_count(), None);
    }

    fn typed_draft() -> SignupDraft {
        SignupDraft {
            email: "a@x.com".into(),
            activity: "Chess Club".into(),
        }
    }

    #[test]
    fn accepted_signup_empties_the_draft() {
        let mut draft = typed_draft();
        draft.settle(&SignupOutcome::Accepted(TransientMessage::success(
            "Signed up a@x.com for Chess Club",
        )));
        assert_eq!(draft, SignupDraft::default());
    }

    #[test]
    fn refused_signup_keeps_the_draft() {
        let mut draft = typed_draft();
        draft.settle(&SignupOutcome::Refused(TransientMessage::error(
            "Activity is full",
        )));
        assert_eq!(draft, typed_draft());
    }

    #[test]
    fn selector_options_only_when_loaded() {
        let catalog: ActivityCatalog = [
            ("Chess Club".to_string(), Activity::default()),
            ("Drama".to_string(), Activity::default()),
        ]
        .into_iter()
        .collect();
        let loaded: Result<ActivityCatalog, ApiError> = Ok(catalog);
        let failed: Result<ActivityCatalog, ApiError> = Err(ApiError::Rejected {
            status: 500,
            detail: None,
        });

        assert_eq!(
            LoadState::from_resource(Some(&loaded)).activity_names(),
            ["Chess Club", "Drama"]
        );
        assert!(LoadState::from_resource(Some(&failed)).activity_names().is_empty());
        assert_eq!(LoadState::from_resource(Some(&failed)), LoadState::LoadFailed);
        assert_eq!(LoadState::from_resource(None), LoadState::Loading);
    }
}
