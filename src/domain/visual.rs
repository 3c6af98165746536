use serde::{Deserialize, Serialize};

use crate::domain::layout::{CardRect, Viewport};

/// Visual override a mode computes for one card.
///
/// Modes produce only these numbers; the rendering surface decides how to
/// express them (dimming, insets, row nudges). Identity means "no override".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub scale: f32,
    /// Signed tilt, degrees. Positive tips the card toward the viewer.
    pub rotation: f32,
    pub opacity: f32,
    /// Vertical nudge, rows.
    pub translate: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
            translate: 0.0,
        }
    }
}

impl VisualState {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Capability the mode math needs from whatever renders the cards.
///
/// The feed state implements this; tests use a plain stand-in. Keeping the
/// mode logic behind this seam means it contains only the math.
pub trait CardSurface {
    fn card_count(&self) -> usize;

    fn viewport(&self) -> Viewport;

    fn card_rect(&self, index: usize) -> Option<CardRect>;

    fn apply_visual(&mut self, index: usize, visual: VisualState);

    fn clear_visual(&mut self, index: usize);

    fn set_in_view(&mut self, index: usize, in_view: bool);

    /// Undo every per-card override in one pass; mode teardown calls this.
    fn clear_overrides(&mut self) {
        for index in 0..self.card_count() {
            self.clear_visual(index);
            self.set_in_view(index, false);
        }
    }
}
