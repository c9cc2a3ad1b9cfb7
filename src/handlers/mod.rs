use crate::catalog::Catalog;
use crate::commands::{events, news, predictions, profile, roster, shows};
use crate::error::AppError;
use crate::reporter::VoteReporter;
use crate::session::{Session, VoteOutcome};
use crate::settings::Toggle;
use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

lazy_static! {
    static ref PREDICT_ID: Regex = Regex::new(r"^predict_([^_\s]+)_([^_\s]+)$").unwrap();
    static ref POLL_ID: Regex = Regex::new(r"^poll_([^_\s]+)_([^_\s]+)$").unwrap();
    static ref RATE_ID: Regex = Regex::new(r"^rate_([^_\s]+)_(-?\d+)$").unwrap();
    static ref EXPAND_ID: Regex = Regex::new(r"^expand_([^_\s]+)$").unwrap();
    static ref OPEN_ID: Regex = Regex::new(r"^open_(wrestler|event|news)_([^_\s]+)$").unwrap();
}

/// Destination of a navigation request; the id is opaque to the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Wrestler(String),
    Event(String),
    News(String),
}

/// A user action addressed by its component id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    // Format: predict_<prediction_id>_<side>
    Predict { prediction_id: String, side: String },
    // Format: poll_<poll_id>_<option_id>
    PollVote { poll_id: String, option_id: String },
    // Format: rate_<match_id>_<stars>
    Rate { match_id: String, stars: i64 },
    // Format: expand_<show_id>
    Expand { show_id: String },
    Toggle(Toggle),
    // Format: open_<wrestler|event|news>_<id>
    Open(Route),
}

pub fn is_component_id(input: &str) -> bool {
    parse_component_id(input).is_ok()
}

pub fn parse_component_id(custom_id: &str) -> Result<Component, AppError> {
    let custom_id = custom_id.trim();

    if custom_id == "toggle_notifications" {
        return Ok(Component::Toggle(Toggle::Notifications));
    }
    if custom_id == "toggle_darkmode" {
        return Ok(Component::Toggle(Toggle::DarkMode));
    }

    if let Some(caps) = PREDICT_ID.captures(custom_id) {
        return Ok(Component::Predict {
            prediction_id: caps[1].to_string(),
            side: caps[2].to_string(),
        });
    }
    if let Some(caps) = POLL_ID.captures(custom_id) {
        return Ok(Component::PollVote {
            poll_id: caps[1].to_string(),
            option_id: caps[2].to_string(),
        });
    }
    if let Some(caps) = RATE_ID.captures(custom_id) {
        let stars = caps[2]
            .parse::<i64>()
            .map_err(|_| AppError::BadComponentId(custom_id.to_string()))?;
        return Ok(Component::Rate {
            match_id: caps[1].to_string(),
            stars,
        });
    }
    if let Some(caps) = EXPAND_ID.captures(custom_id) {
        return Ok(Component::Expand {
            show_id: caps[1].to_string(),
        });
    }
    if let Some(caps) = OPEN_ID.captures(custom_id) {
        let id = caps[2].to_string();
        let route = match &caps[1] {
            "wrestler" => Route::Wrestler(id),
            "event" => Route::Event(id),
            _ => Route::News(id),
        };
        return Ok(Component::Open(route));
    }

    Err(AppError::BadComponentId(custom_id.to_string()))
}

/// Applies a component action and returns the redrawn card or view.
pub fn handle_component<R: VoteReporter>(
    catalog: &Catalog,
    session: &mut Session<R>,
    custom_id: &str,
) -> Result<String, AppError> {
    info!("Received component interaction: {}", custom_id);

    match parse_component_id(custom_id)? {
        Component::Predict { prediction_id, side } => {
            let prediction = catalog.prediction(&prediction_id)?;
            match session.record_local_selection(prediction, &side)? {
                VoteOutcome::Recorded => info!(
                    "Picked {} in prediction {}",
                    prediction.side_name(&side).unwrap_or(&side),
                    prediction_id
                ),
                VoteOutcome::Ignored => warn!("Prediction {} is closed", prediction_id),
            }
            Ok(predictions::render_prediction_card(session, prediction))
        }
        Component::PollVote { poll_id, option_id } => {
            let poll = catalog.poll(&poll_id)?;
            match session.record_local_selection(poll, &option_id)? {
                VoteOutcome::Recorded => info!(
                    "Picked '{}' in poll {}",
                    poll.option_text(&option_id).unwrap_or(&option_id),
                    poll_id
                ),
                VoteOutcome::Ignored => warn!("Poll {} is closed", poll_id),
            }
            Ok(predictions::render_poll_card(session, poll))
        }
        Component::Rate { match_id, stars } => {
            let (show, show_match) = catalog.show_for_match(&match_id)?;
            session.record_local_rating(show, show_match, stars)?;
            Ok(shows::render_match_row(session, show_match))
        }
        Component::Expand { show_id } => {
            let show = catalog.show(&show_id)?;
            session.toggle_expanded(show);
            Ok(shows::render_show_card(session, show))
        }
        Component::Toggle(toggle) => Ok(profile::handle_toggle(toggle)),
        Component::Open(route) => navigate(catalog, &route),
    }
}

pub fn navigate(catalog: &Catalog, route: &Route) -> Result<String, AppError> {
    match route {
        Route::Wrestler(id) => Ok(roster::render_detail(catalog.wrestler(id)?)),
        Route::Event(id) => Ok(events::render_detail(catalog.event(id)?)),
        Route::News(id) => news::render_detail(catalog, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::testing::RecordingReporter;
    use crate::reporter::Report;
    use crate::voting::rating::Stars;

    fn setup() -> (Catalog, Session<RecordingReporter>) {
        (
            Catalog::embedded().unwrap(),
            Session::new(RecordingReporter::default()),
        )
    }

    #[test]
    fn parses_component_ids() {
        assert_eq!(
            parse_component_id("predict_p1_2").unwrap(),
            Component::Predict {
                prediction_id: "p1".to_string(),
                side: "2".to_string()
            }
        );
        assert_eq!(
            parse_component_id("rate_m1_-3").unwrap(),
            Component::Rate {
                match_id: "m1".to_string(),
                stars: -3
            }
        );
        assert_eq!(
            parse_component_id(" open_news_4 ").unwrap(),
            Component::Open(Route::News("4".to_string()))
        );
        assert_eq!(
            parse_component_id("toggle_darkmode").unwrap(),
            Component::Toggle(Toggle::DarkMode)
        );
        assert!(!is_component_id("poll_poll1"));
        assert!(!is_component_id("open_venue_1"));
        assert!(!is_component_id("roster"));
    }

    #[test]
    fn poll_revote_keeps_last_choice() {
        let (catalog, mut session) = setup();
        handle_component(&catalog, &mut session, "poll_poll1_o2").unwrap();
        let card = handle_component(&catalog, &mut session, "poll_poll1_o4").unwrap();
        assert_eq!(session.selection(catalog.poll("poll1").unwrap()), Some("o4"));
        assert!(card.contains("> Inferno Match"));
        assert!(!card.contains("> Steel Cage"));
        assert_eq!(
            *session.reporter().reports.borrow(),
            vec![
                Report::PollVote {
                    poll_id: "poll1".to_string(),
                    option_id: "o2".to_string()
                },
                Report::PollVote {
                    poll_id: "poll1".to_string(),
                    option_id: "o4".to_string()
                },
            ]
        );
    }

    #[test]
    fn closed_prediction_is_silently_ignored() {
        let (catalog, mut session) = setup();
        let card = handle_component(&catalog, &mut session, "predict_p3_1").unwrap();
        assert!(card.contains("[CLOSED]"));
        assert_eq!(session.selection(catalog.prediction("p3").unwrap()), None);
        assert!(session.reporter().reports.borrow().is_empty());
    }

    #[test]
    fn rating_three_then_five() {
        let (catalog, mut session) = setup();
        handle_component(&catalog, &mut session, "expand_s1").unwrap();
        handle_component(&catalog, &mut session, "rate_m1_3").unwrap();
        let row = handle_component(&catalog, &mut session, "rate_m1_5").unwrap();
        assert!(row.contains("★★★★★"));
        assert!(row.contains("4.7 (1284 ratings)"));
        assert_eq!(session.rating("m1").map(Stars::get), Some(5));
    }

    #[test]
    fn bad_rating_is_rejected() {
        let (catalog, mut session) = setup();
        handle_component(&catalog, &mut session, "expand_s1").unwrap();
        handle_component(&catalog, &mut session, "rate_m2_4").unwrap();
        assert!(matches!(
            handle_component(&catalog, &mut session, "rate_m2_9"),
            Err(AppError::InvalidRating(9))
        ));
        assert_eq!(session.rating("m2").map(Stars::get), Some(4));
    }

    #[test]
    fn collapsed_show_rejects_ratings() {
        let (catalog, mut session) = setup();
        assert!(matches!(
            handle_component(&catalog, &mut session, "rate_m1_4"),
            Err(AppError::MatchHidden { .. })
        ));
        assert_eq!(session.rating("m1"), None);

        let card = handle_component(&catalog, &mut session, "expand_s1").unwrap();
        assert!(card.contains("Your rating: ☆☆☆☆☆"));
        assert!(session.reporter().reports.borrow().is_empty());
    }

    #[test]
    fn unknown_targets() {
        let (catalog, mut session) = setup();
        assert!(matches!(
            handle_component(&catalog, &mut session, "poll_poll9_o1"),
            Err(AppError::NotFound { kind: "Poll", .. })
        ));
        assert!(matches!(
            handle_component(&catalog, &mut session, "predict_p1_3"),
            Err(AppError::UnknownChoice { .. })
        ));
        assert!(matches!(
            handle_component(&catalog, &mut session, "vote_now"),
            Err(AppError::BadComponentId(_))
        ));
    }

    #[test]
    fn navigation_opens_detail_views() {
        let (catalog, mut session) = setup();
        let detail = handle_component(&catalog, &mut session, "open_wrestler_6").unwrap();
        assert!(detail.contains("Phoenix Rising"));
        let detail = handle_component(&catalog, &mut session, "open_event_2").unwrap();
        assert!(detail.contains("Tag Team Championship Tournament"));
    }
}
