use chrono::{Local, TimeDelta};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::text::wrapped_height;
use crate::domain::visual::VisualState;

/// Rows the author + meta header occupies.
const HEADER_ROWS: u16 = 2;
/// Rows for the media placeholder block.
const MEDIA_ROWS: u16 = 4;
/// Stats row plus separator row.
const FOOTER_ROWS: u16 = 2;
/// Collapsed cards show at most this many body rows.
const COLLAPSED_BODY_ROWS: usize = 3;
/// Columns of card chrome (border padding) unavailable to the body text.
const BODY_INSET_COLS: u16 = 2;

/// One rendered feed entry.
///
/// Ephemeral and synthesized: there is no backing store, so a card has no
/// identity beyond its position in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub author: String,
    pub location: String,
    pub hours_ago: u32,
    pub rating: f32,
    pub body: String,
    /// Long form revealed by expand; absent for short posts.
    pub long_body: Option<String>,
    /// Media placeholder badge ("1/1") when the post carries an image.
    pub media_badge: Option<String>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: u32,
    pub expanded: bool,
    /// Cinematic mode marker, cleared on mode teardown.
    pub in_view: bool,
    /// Mode-applied visual override, cleared on mode teardown.
    pub visual: Option<VisualState>,
}

impl Post {
    pub fn upvote(&mut self) {
        self.upvotes += 1;
    }

    pub fn downvote(&mut self) {
        self.downvotes = self.downvotes.saturating_sub(1);
    }

    pub fn can_expand(&self) -> bool {
        self.long_body.is_some()
    }

    pub fn toggle_expanded(&mut self) {
        if self.can_expand() {
            self.expanded = !self.expanded;
        }
    }

    /// The body text currently on display.
    pub fn body_text(&self) -> &str {
        match (&self.long_body, self.expanded) {
            (Some(long), true) => long,
            _ => &self.body,
        }
    }

    pub fn body_rows(&self, width: u16) -> u16 {
        let cols = usize::from(width.saturating_sub(BODY_INSET_COLS)).max(1);
        let rows = wrapped_height(self.body_text(), cols).max(1);
        if self.expanded {
            rows as u16
        } else {
            rows.min(COLLAPSED_BODY_ROWS) as u16
        }
    }

    /// Total rows this card occupies at the given feed width.
    pub fn height(&self, width: u16) -> u16 {
        let media = if self.media_badge.is_some() {
            MEDIA_ROWS
        } else {
            0
        };
        HEADER_ROWS + media + self.body_rows(width) + FOOTER_ROWS
    }

    pub fn meta_label(&self) -> String {
        format!("{} hours ago • {}", self.hours_ago, self.location)
    }

    /// Wall-clock time the post claims to have been made.
    pub fn posted_at(&self) -> String {
        let at = Local::now() - TimeDelta::hours(i64::from(self.hours_ago));
        at.format("%H:%M").to_string()
    }
}

const LOCATIONS: [&str; 6] = [
    "Random City",
    "Lisbon",
    "Kyoto",
    "Oslo",
    "Montreal",
    "Nairobi",
];

const BODIES: [&str; 5] = [
    "Amazing content here! Check this out.",
    "Shipped a small thing today and it feels great.",
    "Morning light over the harbor. No filter.",
    "Hot take: slow mornings beat busy ones.",
    "Week three of the sketch-a-day challenge.",
];

const LONG_BODIES: [&str; 2] = [
    "I used to jump straight into visuals. Open the editor, start designing, \
     ship it fast. But I learned the hard way that great design starts with \
     great thinking. Now I spend more time understanding the problem, \
     researching users, and mapping out solutions before touching any tools.",
    "We rewrote the onboarding flow three times before it clicked. The final \
     version is half the screens of the first draft and every step earned its \
     place. Deleting work is still the most underrated design skill.",
];

const MEDIA_BADGES: [&str; 3] = ["1/1", "1/3", "2/5"];

/// Synthesize one page of placeholder posts.
///
/// Author numbering matches the mockup's `page * 10 + i` labels so pages stay
/// distinguishable without a data store.
pub fn generate_batch<R: Rng>(rng: &mut R, page: u32, count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| {
            let has_media = rng.random_bool(0.5);
            let has_long_body = rng.random_bool(0.4);
            Post {
                author: format!("User {}", page * 10 + i as u32),
                location: LOCATIONS[rng.random_range(0..LOCATIONS.len())].to_string(),
                hours_ago: i as u32 + 1,
                rating: rng.random_range(3.0..5.0),
                body: BODIES[rng.random_range(0..BODIES.len())].to_string(),
                long_body: has_long_body
                    .then(|| LONG_BODIES[rng.random_range(0..LONG_BODIES.len())].to_string()),
                media_badge: has_media
                    .then(|| MEDIA_BADGES[rng.random_range(0..MEDIA_BADGES.len())].to_string()),
                upvotes: rng.random_range(0..100),
                downvotes: rng.random_range(0..10),
                comments: rng.random_range(0..50),
                expanded: false,
                in_view: false,
                visual: None,
            }
        })
        .collect()
}

/// Fixed-content posts for geometry-sensitive tests.
pub fn test_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post {
            author: format!("User {i}"),
            location: "Lisbon".to_string(),
            hours_ago: i as u32 + 1,
            rating: 4.2,
            body: "short body".to_string(),
            long_body: None,
            media_badge: None,
            upvotes: 1,
            downvotes: 1,
            comments: 1,
            expanded: false,
            in_view: false,
            visual: None,
        })
        .collect()
}
