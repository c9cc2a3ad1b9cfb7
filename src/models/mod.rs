use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wrestler {
    pub id: String,
    pub name: String,
    pub nickname: Option<String>,
    pub role: String,
    pub image: String,
    #[serde(default)]
    pub is_champion: bool,
    #[serde(default)]
    pub championships: Vec<String>,
    pub height: String,
    pub weight: String,
    pub hometown: String,
    pub finisher: String,
    pub bio: String,
    pub wins: u64,
    pub losses: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub day: String,
    pub month: String,
    pub location: String,
    pub venue: String,
    pub image: String,
    pub is_past: bool,
    pub main_event: Option<String>,
}

impl Event {
    /// Parses the display date ("October 28, 2024").
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%B %d, %Y").ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub image: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub thumbnail: String,
    pub matches: Vec<ShowMatch>,
}

// Aggregate rating and rater count are fixture values shown to everyone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMatch {
    pub id: String,
    pub title: String,
    pub participants: Vec<String>,
    pub rating: f32,
    pub rating_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: String,
    pub match_title: String,
    pub wrestler1: String,
    pub wrestler2: String,
    pub wrestler1_votes: u64,
    pub wrestler2_votes: u64,
    pub is_open: bool,
    pub deadline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub is_open: bool,
    #[serde(rename = "type")]
    pub kind: PollType,
    pub deadline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PollType {
    MatchType,
    Booking,
    General,
}

impl PollType {
    pub fn label(&self) -> &'static str {
        match self {
            PollType::MatchType => "MATCH TYPE",
            PollType::Booking => "BOOKING",
            PollType::General => "GENERAL",
        }
    }
}
