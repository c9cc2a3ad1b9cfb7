use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

/// Something the user did that a backend would want to hear about.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    PredictionVote {
        prediction_id: String,
        side: String,
    },
    PollVote {
        poll_id: String,
        option_id: String,
    },
    MatchRating {
        match_id: String,
        stars: u8,
    },
    Application {
        name: String,
        email: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEnvelope {
    pub session_id: Uuid,
    pub at: DateTime<Utc>,
    pub report: Report,
}

/// Hook invoked after each accepted local action.
///
/// No request/response contract exists for this yet, so implementations
/// must not feed anything back into session state.
pub trait VoteReporter {
    fn report(&self, envelope: &ReportEnvelope);
}

// Only emits a trace
pub struct LogReporter;

impl VoteReporter for LogReporter {
    fn report(&self, envelope: &ReportEnvelope) {
        let at = envelope.at.to_rfc3339();
        match &envelope.report {
            Report::PredictionVote { prediction_id, side } => info!(
                "[{}] Voted for wrestler {} in prediction {} at {}",
                envelope.session_id, side, prediction_id, at
            ),
            Report::PollVote { poll_id, option_id } => info!(
                "[{}] Voted for option {} in poll {} at {}",
                envelope.session_id, option_id, poll_id, at
            ),
            Report::MatchRating { match_id, stars } => info!(
                "[{}] Rated match {} with {} stars at {}",
                envelope.session_id, match_id, stars, at
            ),
            Report::Application { name, email } => info!(
                "[{}] Application submitted by {} <{}> at {}",
                envelope.session_id, name, email, at
            ),
        }
    }
}
