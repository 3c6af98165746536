//! Card geometry in terminal rows.
//!
//! Offsets are fractional rows so the momentum decay and per-card translate
//! math keep their precision; rendering rounds at the last moment.

use serde::{Deserialize, Serialize};

use crate::domain::post::Post;

/// The visible window over the feed content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    /// Scroll offset from the top of the content, in rows.
    pub offset: f32,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            offset: 0.0,
        }
    }

    /// Vertical center of the window, in content rows.
    pub fn center(&self) -> f32 {
        self.offset + f32::from(self.height) / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.offset + f32::from(self.height)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A card's extent within the content, in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub top: f32,
    pub height: f32,
}

impl CardRect {
    pub fn center(&self) -> f32 {
        self.top + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Stack cards top to bottom with `gap` blank rows between them.
pub fn layout_cards(posts: &[Post], width: u16, gap: u16) -> Vec<CardRect> {
    let mut rects = Vec::with_capacity(posts.len());
    let mut top = 0.0;
    for post in posts {
        let height = f32::from(post.height(width));
        rects.push(CardRect { top, height });
        top += height + f32::from(gap);
    }
    rects
}

/// Total content height of a laid-out feed (gap after the last card excluded).
pub fn content_height(rects: &[CardRect]) -> f32 {
    rects.last().map(CardRect::bottom).unwrap_or(0.0)
}

/// The card top nearest to `offset`, for snap-style modes.
pub fn nearest_card_top(rects: &[CardRect], offset: f32) -> f32 {
    let mut nearest = 0.0;
    let mut best = f32::MAX;
    for rect in rects {
        let distance = (rect.top - offset).abs();
        if distance < best {
            best = distance;
            nearest = rect.top;
        }
    }
    nearest
}
