use crate::error::AppError;
use crate::models::{Event, NewsItem, Poll, Prediction, Show, ShowMatch, Wrestler};
use crate::voting::compute_share_percent;
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const EMBEDDED_FIXTURES: &str = include_str!("../../data/fixtures.json");
const RELATED_NEWS_LIMIT: usize = 3;

/// Read-only fixture records supplied at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub wrestlers: Vec<Wrestler>,
    pub events: Vec<Event>,
    pub news: Vec<NewsItem>,
    pub shows: Vec<Show>,
    pub predictions: Vec<Prediction>,
    pub polls: Vec<Poll>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_FIXTURES)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        info!("Loading fixtures from {}", path.display());
        Self::from_json(&raw)
    }

    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        info!(
            "Loaded {} wrestlers, {} events, {} news, {} shows, {} predictions, {} polls",
            catalog.wrestlers.len(),
            catalog.events.len(),
            catalog.news.len(),
            catalog.shows.len(),
            catalog.predictions.len(),
            catalog.polls.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), AppError> {
        unique_ids("wrestler", self.wrestlers.iter().map(|w| w.id.as_str()))?;
        unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;
        unique_ids("news", self.news.iter().map(|n| n.id.as_str()))?;
        unique_ids("show", self.shows.iter().map(|s| s.id.as_str()))?;
        unique_ids("match", self.matches().map(|m| m.id.as_str()))?;
        unique_ids("prediction", self.predictions.iter().map(|p| p.id.as_str()))?;
        unique_ids("poll", self.polls.iter().map(|p| p.id.as_str()))?;

        for poll in &self.polls {
            if poll.options.len() < 2 {
                return Err(AppError::InvalidFixtures(format!(
                    "poll {} needs at least two options",
                    poll.id
                )));
            }
            unique_ids("poll option", poll.options.iter().map(|o| o.id.as_str()))?;
        }

        for show_match in self.matches() {
            if !(0.0..=5.0).contains(&show_match.rating) {
                return Err(AppError::InvalidFixtures(format!(
                    "match {} has rating {} outside 0.0-5.0",
                    show_match.id, show_match.rating
                )));
            }
        }

        // Totals are shown as plain counts, so each one must fit in a u64
        for prediction in &self.predictions {
            let sides = [prediction.wrestler1_votes, prediction.wrestler2_votes];
            checked_total("prediction", &prediction.id, sides)?;
        }
        for poll in &self.polls {
            checked_total("poll", &poll.id, poll.options.iter().map(|o| o.votes))?;
        }
        for wrestler in &self.wrestlers {
            checked_total("wrestler", &wrestler.id, [wrestler.wins, wrestler.losses])?;
        }

        Ok(())
    }

    pub fn wrestler(&self, id: &str) -> Result<&Wrestler, AppError> {
        self.wrestlers
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::not_found("Wrestler", id))
    }

    pub fn event(&self, id: &str) -> Result<&Event, AppError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("Event", id))
    }

    pub fn article(&self, id: &str) -> Result<&NewsItem, AppError> {
        self.news
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found("Article", id))
    }

    pub fn show(&self, id: &str) -> Result<&Show, AppError> {
        self.shows
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("Show", id))
    }

    pub fn prediction(&self, id: &str) -> Result<&Prediction, AppError> {
        self.predictions
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Prediction", id))
    }

    pub fn poll(&self, id: &str) -> Result<&Poll, AppError> {
        self.polls
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Poll", id))
    }

    /// A match together with the show card that lists it.
    pub fn show_for_match(&self, match_id: &str) -> Result<(&Show, &ShowMatch), AppError> {
        self.shows
            .iter()
            .find_map(|s| s.matches.iter().find(|m| m.id == match_id).map(|m| (s, m)))
            .ok_or_else(|| AppError::not_found("Match", match_id))
    }

    pub fn matches(&self) -> impl Iterator<Item = &ShowMatch> {
        self.shows.iter().flat_map(|s| s.matches.iter())
    }

    /// Case-insensitive match on name or role. An empty query keeps everyone.
    pub fn search_roster(&self, query: &str) -> Vec<&Wrestler> {
        let query = query.to_lowercase();
        self.wrestlers
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&query) || w.role.to_lowercase().contains(&query))
            .collect()
    }

    pub fn champions(&self) -> Vec<&Wrestler> {
        self.wrestlers.iter().filter(|w| w.is_champion).collect()
    }

    /// Upcoming events soonest first.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| !e.is_past).collect();
        events.sort_by_key(|e| e.calendar_date());
        events
    }

    /// Past events most recent first.
    pub fn past_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.is_past).collect();
        events.sort_by_key(|e| std::cmp::Reverse(e.calendar_date()));
        events
    }

    pub fn related_news(&self, article_id: &str) -> Vec<&NewsItem> {
        self.news
            .iter()
            .filter(|n| n.id != article_id)
            .take(RELATED_NEWS_LIMIT)
            .collect()
    }
}

impl Wrestler {
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn win_percent(&self) -> u8 {
        // validate() keeps the sum within u64
        compute_share_percent(self.wins, self.wins.saturating_add(self.losses))
    }
}

// Component ids split on '_' and whitespace, so ids may contain neither
fn addressable(id: &str) -> bool {
    !id.is_empty() && !id.contains(|c: char| c == '_' || c.is_whitespace())
}

fn unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !addressable(id) {
            return Err(AppError::InvalidFixtures(format!(
                "{} id '{}' is empty or contains '_' or whitespace",
                kind, id
            )));
        }
        if !seen.insert(id) {
            return Err(AppError::InvalidFixtures(format!("duplicate {} id {}", kind, id)));
        }
    }
    Ok(())
}

fn checked_total(kind: &str, id: &str, counts: impl IntoIterator<Item = u64>) -> Result<u64, AppError> {
    counts
        .into_iter()
        .try_fold(0u64, u64::checked_add)
        .ok_or_else(|| AppError::InvalidFixtures(format!("{} {} has a total too large to count", kind, id)))
}
