use crate::error::AppError;
use crate::models::{Show, ShowMatch};
use crate::reporter::{Report, ReportEnvelope, VoteReporter};
use crate::voting::rating::Stars;
use crate::voting::{GroupKind, Votable};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Card-local choice. Once voted it can be overwritten but never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Unvoted,
    Voted(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Unvoted
    }
}

impl<T> Selection<T> {
    fn record(&mut self, choice: T) {
        *self = Selection::Voted(choice);
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Selection::Unvoted => None,
            Selection::Voted(choice) => Some(choice),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    // Group is closed; nothing changed
    Ignored,
}

/// Identifies a rendered card whose state can be torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardId {
    Match(String),
    Show(String),
}

/// Transient state for everything currently on screen.
///
/// Each card's state lives here only while the card is mounted. Nothing is
/// persisted and fixture counts are never touched.
pub struct Session<R: VoteReporter> {
    id: Uuid,
    started_at: DateTime<Utc>,
    reporter: R,
    selections: HashMap<(GroupKind, String), Selection<String>>,
    ratings: HashMap<String, Selection<Stars>>,
    expanded: HashSet<String>,
}

impl<R: VoteReporter> Session<R> {
    pub fn new(reporter: R) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            reporter,
            selections: HashMap::new(),
            ratings: HashMap::new(),
            expanded: HashSet::new(),
        };
        info!("Session {} started at {}", session.id, session.started_at.to_rfc3339());
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn record_local_selection<V: Votable + ?Sized>(
        &mut self,
        group: &V,
        choice: &str,
    ) -> Result<VoteOutcome, AppError> {
        if !group.is_open() {
            debug!("Ignoring vote on closed group {}", group.group_id());
            return Ok(VoteOutcome::Ignored);
        }
        if !group.has_option(choice) {
            return Err(AppError::UnknownChoice {
                group_id: group.group_id().to_string(),
                choice: choice.to_string(),
            });
        }

        self.selections
            .entry((group.kind(), group.group_id().to_string()))
            .or_default()
            .record(choice.to_string());

        let report = match group.kind() {
            GroupKind::Prediction => Report::PredictionVote {
                prediction_id: group.group_id().to_string(),
                side: choice.to_string(),
            },
            GroupKind::Poll => Report::PollVote {
                poll_id: group.group_id().to_string(),
                option_id: choice.to_string(),
            },
        };
        self.emit(report);
        Ok(VoteOutcome::Recorded)
    }

    pub fn selection<V: Votable + ?Sized>(&self, group: &V) -> Option<&str> {
        self.selections
            .get(&(group.kind(), group.group_id().to_string()))
            .and_then(Selection::current)
            .map(String::as_str)
    }

    /// Whether the "your vote has been recorded" line should be shown.
    pub fn shows_confirmation<V: Votable + ?Sized>(&self, group: &V) -> bool {
        group.is_open() && self.selection(group).is_some()
    }

    /// Rates a match row. The row only exists while its show card is expanded.
    pub fn record_local_rating(
        &mut self,
        show: &Show,
        show_match: &ShowMatch,
        stars: i64,
    ) -> Result<Stars, AppError> {
        if !self.is_expanded(&show.id) {
            debug!("Ignoring rating for hidden match {}", show_match.id);
            return Err(AppError::MatchHidden {
                show_id: show.id.clone(),
                match_id: show_match.id.clone(),
            });
        }
        let stars = Stars::new(stars)?;
        self.ratings
            .entry(show_match.id.clone())
            .or_default()
            .record(stars);
        self.emit(Report::MatchRating {
            match_id: show_match.id.clone(),
            stars: stars.get(),
        });
        Ok(stars)
    }

    pub fn rating(&self, match_id: &str) -> Option<Stars> {
        self.ratings.get(match_id).and_then(Selection::current).copied()
    }

    /// Flips a show card open or closed and returns the new state.
    ///
    /// Collapsing unmounts the match rows, so their local ratings go too.
    pub fn toggle_expanded(&mut self, show: &Show) -> bool {
        if self.is_expanded(&show.id) {
            self.unmount(&CardId::Show(show.id.clone()));
            for show_match in &show.matches {
                self.unmount(&CardId::Match(show_match.id.clone()));
            }
            false
        } else {
            self.expanded.insert(show.id.clone());
            true
        }
    }

    pub fn is_expanded(&self, show_id: &str) -> bool {
        self.expanded.contains(show_id)
    }

    pub fn unmount(&mut self, card: &CardId) {
        match card {
            CardId::Match(id) => {
                self.ratings.remove(id);
            }
            CardId::Show(id) => {
                self.expanded.remove(id);
            }
        }
        debug!("Unmounted {:?}", card);
    }

    pub fn emit(&self, report: Report) {
        self.reporter.report(&ReportEnvelope {
            session_id: self.id,
            at: Utc::now(),
            report,
        });
    }
}
