//! Filter Drafts
//!
//! Per-column draft filter text and the debounce bookkeeping behind it.
//!
//! ```text
//! Idle ──keystroke──▶ Typing ──timer elapses──▶ (commit) ──▶ Idle
//!                      │  ▲
//!                      └──┘ keystroke: new draft, new generation
//! ```
//!
//! The draft always holds the latest keystroke. Every keystroke hands out a
//! [`DebounceTicket`]; only the ticket carrying the newest generation for its
//! column may commit, so an outdated timer firing late is harmless.

use std::collections::BTreeMap;

/// Debounce phase of a filter column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterPhase {
    #[default]
    Idle,
    Typing,
}

#[derive(Debug, Clone, Default)]
struct FilterDraft {
    text: String,
    phase: FilterPhase,
    generation: u64,
}

/// Handle for one scheduled commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTicket {
    pub field: String,
    pub generation: u64,
}

/// A filter value ready to be reported to the table owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCommit {
    pub field: String,
    pub value: String,
}

/// Draft filter text for every filterable column of one table
#[derive(Debug, Clone, Default)]
pub struct FilterDrafts {
    drafts: BTreeMap<String, FilterDraft>,
    /// Owner filters seen by the last sync
    committed: BTreeMap<String, String>,
}

impl FilterDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft text (empty if the column was never touched)
    pub fn value(&self, field: &str) -> &str {
        self.drafts
            .get(field)
            .map(|d| d.text.as_str())
            .unwrap_or_default()
    }

    pub fn phase(&self, field: &str) -> FilterPhase {
        self.drafts
            .get(field)
            .map(|d| d.phase)
            .unwrap_or_default()
    }

    /// Record a keystroke; the returned ticket supersedes any earlier one
    pub fn keystroke(&mut self, field: &str, text: impl Into<String>) -> DebounceTicket {
        let draft = self.drafts.entry(field.to_string()).or_default();
        draft.text = text.into();
        draft.phase = FilterPhase::Typing;
        draft.generation += 1;

        DebounceTicket {
            field: field.to_string(),
            generation: draft.generation,
        }
    }

    /// Timer for `ticket` elapsed; commits only if no newer keystroke arrived
    pub fn elapse(&mut self, ticket: &DebounceTicket) -> Option<FilterCommit> {
        let draft = self.drafts.get_mut(&ticket.field)?;
        if draft.phase != FilterPhase::Typing || draft.generation != ticket.generation {
            return None;
        }
        draft.phase = FilterPhase::Idle;

        Some(FilterCommit {
            field: ticket.field.clone(),
            value: draft.text.clone(),
        })
    }

    /// Commit immediately (used when debouncing is disabled)
    pub fn commit_now(&mut self, field: &str, text: impl Into<String>) -> FilterCommit {
        let ticket = self.keystroke(field, text);
        let value = self.value(field).to_string();
        if let Some(draft) = self.drafts.get_mut(&ticket.field) {
            draft.phase = FilterPhase::Idle;
        }

        FilterCommit {
            field: ticket.field,
            value,
        }
    }

    /// Adopt the owner's committed filters for columns that are not mid-typing.
    ///
    /// Does nothing while the owner's filters are unchanged, so a commit the
    /// owner treats as a no-op (such as whitespace) stays in the input.
    pub fn sync_committed(&mut self, committed: &BTreeMap<String, String>) {
        if *committed == self.committed {
            return;
        }
        self.committed = committed.clone();

        for (field, draft) in self.drafts.iter_mut() {
            if draft.phase == FilterPhase::Idle {
                draft.text = committed.get(field).cloned().unwrap_or_default();
            }
        }
        for (field, value) in committed {
            self.drafts
                .entry(field.clone())
                .or_insert_with(|| FilterDraft {
                    text: value.clone(),
                    ..FilterDraft::default()
                });
        }
    }

    /// Drop drafts of columns no longer rendered; returns the removed keys
    pub fn retain_fields(&mut self, fields: &[&str]) -> Vec<String> {
        let removed: Vec<String> = self
            .drafts
            .keys()
            .filter(|k| !fields.contains(&k.as_str()))
            .cloned()
            .collect();
        for field in &removed {
            self.drafts.remove(field);
        }
        if !removed.is_empty() {
            self.committed.clear();
        }
        removed
    }

    /// Abandon every pending commit, keeping the typed text
    pub fn cancel_all(&mut self) {
        for draft in self.drafts.values_mut() {
            draft.phase = FilterPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_echoes_every_keystroke() {
        let mut drafts = FilterDrafts::new();
        drafts.keystroke("name", "a");
        assert_eq!(drafts.value("name"), "a");
        drafts.keystroke("name", "ab");
        assert_eq!(drafts.value("name"), "ab");
        assert_eq!(drafts.phase("name"), FilterPhase::Typing);
    }

    #[test]
    fn rapid_typing_commits_once_with_latest_text() {
        let mut drafts = FilterDrafts::new();
        let first = drafts.keystroke("name", "a");
        let second = drafts.keystroke("name", "ab");

        // The timer of the first keystroke was superseded.
        assert_eq!(drafts.elapse(&first), None);

        let commit = drafts.elapse(&second).expect("latest ticket commits");
        assert_eq!(
            commit,
            FilterCommit {
                field: "name".to_string(),
                value: "ab".to_string(),
            }
        );
        assert_eq!(drafts.phase("name"), FilterPhase::Idle);

        // A late duplicate firing does not commit twice.
        assert_eq!(drafts.elapse(&second), None);
    }

    #[test]
    fn columns_debounce_independently() {
        let mut drafts = FilterDrafts::new();
        let name = drafts.keystroke("name", "an");
        let stream = drafts.keystroke("stream", "sci");

        assert_eq!(drafts.elapse(&stream).map(|c| c.value), Some("sci".to_string()));
        assert_eq!(drafts.phase("name"), FilterPhase::Typing);
        assert_eq!(drafts.elapse(&name).map(|c| c.value), Some("an".to_string()));
    }

    #[test]
    fn sync_does_not_clobber_text_being_typed() {
        let mut drafts = FilterDrafts::new();
        drafts.keystroke("name", "ann");
        let committed = drafts.commit_now("stream", "arts");
        assert_eq!(committed.value, "arts");

        let mut owner = BTreeMap::new();
        owner.insert("stream".to_string(), "commerce".to_string());
        owner.insert("code".to_string(), "c1".to_string());
        drafts.sync_committed(&owner);

        assert_eq!(drafts.value("name"), "ann");
        assert_eq!(drafts.value("stream"), "commerce");
        assert_eq!(drafts.value("code"), "c1");
    }

    #[test]
    fn sync_clears_idle_drafts_missing_from_owner() {
        let mut drafts = FilterDrafts::new();
        drafts.commit_now("name", "ann");
        let mut owner = BTreeMap::new();
        owner.insert("name".to_string(), "ann".to_string());
        drafts.sync_committed(&owner);
        assert_eq!(drafts.value("name"), "ann");

        drafts.sync_committed(&BTreeMap::new());
        assert_eq!(drafts.value("name"), "");
    }

    #[test]
    fn whitespace_commit_survives_unchanged_owner_filters() {
        let mut drafts = FilterDrafts::new();
        drafts.sync_committed(&BTreeMap::new());

        let ticket = drafts.keystroke("name", " ");
        let commit = drafts.elapse(&ticket).expect("commit");
        assert_eq!(commit.value, " ");

        // The owner ignores a blank filter and syncs back the same map.
        drafts.sync_committed(&BTreeMap::new());
        assert_eq!(drafts.value("name"), " ");
        assert_eq!(drafts.phase("name"), FilterPhase::Idle);
    }

    #[test]
    fn removed_columns_lose_pending_commits() {
        let mut drafts = FilterDrafts::new();
        let ticket = drafts.keystroke("email", "x");
        drafts.keystroke("name", "y");

        let removed = drafts.retain_fields(&["name"]);
        assert_eq!(removed, vec!["email".to_string()]);
        assert_eq!(drafts.elapse(&ticket), None);
    }

    #[test]
    fn cancel_all_stops_pending_commits() {
        let mut drafts = FilterDrafts::new();
        let ticket = drafts.keystroke("name", "a");
        drafts.cancel_all();
        assert_eq!(drafts.elapse(&ticket), None);
        assert_eq!(drafts.value("name"), "a");
    }
}
