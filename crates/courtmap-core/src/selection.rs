//! Drill-down selection state shared by the map and table views.
//!
//! ```text
//! Browsing --select--> DetailLoading --ok--> DetailVisible
//!    ^                     |                      |
//!    +-------err/back------+---------back---------+
//! ```
//!
//! The coordinator performs no I/O. [`select`](SelectionCoordinator::select)
//! hands back a [`DetailRequest`] for the caller to fetch, and the caller
//! reports the outcome through [`resolve`](SelectionCoordinator::resolve).
//! Each request carries a ticket; outcomes for any ticket other than the one
//! currently loading are discarded.

use std::fmt;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::record::CourtRecord;

/// Identifies one detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

/// A detail fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: RequestTicket,
    pub court_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    /// Table and map visible, nothing selected.
    Browsing,
    /// A court was selected and its detail fetch is in flight.
    DetailLoading {
        court_id: i64,
        court_name: String,
        ticket: RequestTicket,
    },
    /// Detail payload loaded, stored as received.
    DetailVisible {
        court_id: i64,
        court_name: String,
        detail: Value,
    },
}

/// What [`SelectionCoordinator::resolve`] did with a fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Shown,
    Failed,
    /// The ticket no longer matches the loading selection.
    Stale,
}

#[derive(Debug)]
pub struct SelectionCoordinator {
    state: SelectionState,
    next_ticket: u64,
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Browsing,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Loading flag for the UI; selection is disabled while set.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SelectionState::DetailLoading { .. })
    }

    /// The court currently loading or shown.
    pub fn selected_court(&self) -> Option<i64> {
        match &self.state {
            SelectionState::Browsing => None,
            SelectionState::DetailLoading { court_id, .. }
            | SelectionState::DetailVisible { court_id, .. } => Some(*court_id),
        }
    }

    /// Detail payload, once visible.
    pub fn detail(&self) -> Option<&Value> {
        match &self.state {
            SelectionState::DetailVisible { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Select a court while browsing.
    ///
    /// Returns the fetch to perform, or `None` if the event was ignored
    /// because a fetch is in flight or a detail view is open. Ignored
    /// clicks are not queued.
    pub fn select(&mut self, court: &CourtRecord) -> Option<DetailRequest> {
        if !matches!(self.state, SelectionState::Browsing) {
            debug!(
                court_id = court.id,
                current = ?self.selected_court(),
                "ignoring court selection"
            );
            return None;
        }

        self.next_ticket += 1;
        let ticket = RequestTicket(self.next_ticket);
        self.state = SelectionState::DetailLoading {
            court_id: court.id,
            court_name: court.name.clone(),
            ticket,
        };
        info!(court_id = court.id, court = %court.name, "loading court detail");
        Some(DetailRequest {
            ticket,
            court_id: court.id,
        })
    }

    /// Apply the outcome of a detail fetch.
    ///
    /// Failures return to `Browsing` after logging; nothing is retried.
    pub fn resolve<E: fmt::Display>(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Value, E>,
    ) -> Resolution {
        let (court_id, court_name) = match &self.state {
            SelectionState::DetailLoading {
                court_id,
                court_name,
                ticket: current,
            } if *current == ticket => (*court_id, court_name.clone()),
            _ => {
                debug!(?ticket, "discarding stale detail response");
                return Resolution::Stale;
            }
        };

        match outcome {
            Ok(detail) => {
                self.state = SelectionState::DetailVisible {
                    court_id,
                    court_name,
                    detail,
                };
                Resolution::Shown
            }
            Err(e) => {
                error!(court_id, error = %e, "error fetching court details");
                self.state = SelectionState::Browsing;
                Resolution::Failed
            }
        }
    }

    /// Return to the list view, clearing the selection. Any in-flight fetch
    /// becomes stale.
    pub fn back(&mut self) {
        self.state = SelectionState::Browsing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Assessment;
    use serde_json::json;

    fn court(id: i64) -> CourtRecord {
        CourtRecord {
            id,
            name: format!("Суд {id}"),
            instance: "Первая инстанция".into(),
            overall_assessment: 3.0,
            assessment: Assessment::default(),
            total_survey_responses: 4,
        }
    }

    #[test]
    fn starts_browsing() {
        let sel = SelectionCoordinator::new();
        assert_eq!(sel.state(), &SelectionState::Browsing);
        assert!(!sel.is_loading());
        assert_eq!(sel.selected_court(), None);
    }

    #[test]
    fn select_then_success_shows_detail() {
        let mut sel = SelectionCoordinator::new();
        let req = sel.select(&court(5)).unwrap();
        assert_eq!(req.court_id, 5);
        assert!(sel.is_loading());

        let payload = json!({ "questions": [1, 2, 3] });
        let res = sel.resolve::<String>(req.ticket, Ok(payload.clone()));
        assert_eq!(res, Resolution::Shown);
        assert!(!sel.is_loading());
        assert_eq!(sel.detail(), Some(&payload));
        assert_eq!(
            sel.state(),
            &SelectionState::DetailVisible {
                court_id: 5,
                court_name: "Суд 5".into(),
                detail: payload,
            }
        );
    }

    #[test]
    fn second_selection_while_loading_is_ignored() {
        let mut sel = SelectionCoordinator::new();
        let first = sel.select(&court(1)).unwrap();
        let before = sel.state().clone();

        assert_eq!(sel.select(&court(2)), None);
        assert_eq!(sel.state(), &before);
        assert_eq!(sel.selected_court(), Some(1));

        assert_eq!(sel.resolve::<String>(first.ticket, Ok(json!({}))), Resolution::Shown);
        assert_eq!(sel.selected_court(), Some(1));
    }

    #[test]
    fn failure_returns_to_browsing() {
        let mut sel = SelectionCoordinator::new();
        let req = sel.select(&court(3)).unwrap();
        let res = sel.resolve(req.ticket, Err("503 Service Unavailable"));
        assert_eq!(res, Resolution::Failed);
        assert_eq!(sel.state(), &SelectionState::Browsing);
        assert!(!sel.is_loading());
        assert_eq!(sel.detail(), None);
    }

    #[test]
    fn can_select_again_after_failure() {
        let mut sel = SelectionCoordinator::new();
        let req = sel.select(&court(3)).unwrap();
        sel.resolve(req.ticket, Err("timeout"));
        assert!(sel.select(&court(4)).is_some());
        assert_eq!(sel.selected_court(), Some(4));
    }

    #[test]
    fn response_after_back_is_discarded() {
        let mut sel = SelectionCoordinator::new();
        let req = sel.select(&court(1)).unwrap();
        sel.back();
        assert_eq!(sel.resolve::<String>(req.ticket, Ok(json!({}))), Resolution::Stale);
        assert_eq!(sel.state(), &SelectionState::Browsing);
    }

    #[test]
    fn stale_ticket_does_not_hijack_newer_selection() {
        let mut sel = SelectionCoordinator::new();
        let old = sel.select(&court(1)).unwrap();
        sel.back();
        let new = sel.select(&court(2)).unwrap();
        assert_ne!(old.ticket, new.ticket);

        assert_eq!(sel.resolve::<String>(old.ticket, Ok(json!({ "court": 1 }))), Resolution::Stale);
        assert!(sel.is_loading());
        assert_eq!(sel.selected_court(), Some(2));

        assert_eq!(sel.resolve::<String>(new.ticket, Ok(json!({ "court": 2 }))), Resolution::Shown);
        assert_eq!(sel.detail(), Some(&json!({ "court": 2 })));
    }

    #[test]
    fn selection_ignored_while_detail_visible() {
        let mut sel = SelectionCoordinator::new();
        let req = sel.select(&court(1)).unwrap();
        sel.resolve::<String>(req.ticket, Ok(json!({})));
        assert_eq!(sel.select(&court(2)), None);
        assert_eq!(sel.selected_court(), Some(1));

        sel.back();
        assert_eq!(sel.state(), &SelectionState::Browsing);
        assert!(sel.select(&court(2)).is_some());
    }

    #[test]
    fn duplicate_resolution_is_stale() {
        let mut sel = SelectionCoordinator::new();
        let req = sel.select(&court(1)).unwrap();
        assert_eq!(sel.resolve::<String>(req.ticket, Ok(json!(1))), Resolution::Shown);
        assert_eq!(sel.resolve::<String>(req.ticket, Ok(json!(2))), Resolution::Stale);
        assert_eq!(sel.detail(), Some(&json!(1)));
    }
}
