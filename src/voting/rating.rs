use crate::error::AppError;
use crate::models::ShowMatch;
use log::warn;

pub const MAX_STARS: u8 = 5;

/// A local star selection, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars(u8);

impl Stars {
    pub fn new(value: i64) -> Result<Self, AppError> {
        if (1..=MAX_STARS as i64).contains(&value) {
            Ok(Stars(value as u8))
        } else {
            warn!("Rating out of 1-5 range: {}", value);
            Err(AppError::InvalidRating(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Star row for a local selection; `None` renders all outlines.
pub fn star_row(selected: Option<Stars>) -> String {
    let filled = selected.map_or(0, Stars::get);
    (1..=MAX_STARS)
        .map(|star| if star <= filled { '★' } else { '☆' })
        .collect()
}

impl ShowMatch {
    pub fn aggregate_label(&self) -> String {
        format!("{:.1} ({} ratings)", self.rating, self.rating_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_through_five() {
        for value in 1..=5 {
            assert_eq!(Stars::new(value).map(Stars::get).ok(), Some(value as u8));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        for value in [0, 6, -1, 100] {
            assert!(matches!(Stars::new(value), Err(AppError::InvalidRating(v)) if v == value));
        }
    }

    #[test]
    fn renders_star_row() {
        assert_eq!(star_row(None), "☆☆☆☆☆");
        assert_eq!(star_row(Stars::new(3).ok()), "★★★☆☆");
        assert_eq!(star_row(Stars::new(5).ok()), "★★★★★");
    }

    #[test]
    fn aggregate_label_uses_one_decimal() {
        let m = ShowMatch {
            id: "m1".to_string(),
            title: "Main Event".to_string(),
            participants: vec!["BLAZE".to_string(), "TITAN".to_string()],
            rating: 4.5,
            rating_count: 1234,
        };
        assert_eq!(m.aggregate_label(), "4.5 (1234 ratings)");
    }
}
