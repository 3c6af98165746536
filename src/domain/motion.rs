//! Per-mode visual math.
//!
//! All constants are tuned by feel, inherited from the mockup this replaces;
//! treat them as knobs, not as a physical model. Pixel-based lengths were
//! rescaled to terminal rows at roughly twenty pixels per row.

use crate::domain::layout::{CardRect, Viewport};
use crate::domain::visual::{CardSurface, VisualState};

/// Velocity multiplier applied every decay frame.
pub const MOMENTUM_DECAY: f32 = 0.92;
/// Decay stops once |velocity| (rows/ms) drops below this.
pub const MOMENTUM_MIN_VELOCITY: f32 = 0.003;
/// Nominal frame length of the decay loop, ms.
pub const MOMENTUM_FRAME_MS: f32 = 16.0;

pub const PARALLAX_SCALE_MIN: f32 = 0.85;
pub const PARALLAX_SCALE_RANGE: f32 = 0.15;
pub const PARALLAX_OPACITY_MIN: f32 = 0.4;
pub const PARALLAX_OPACITY_RANGE: f32 = 0.6;
/// Max tilt in degrees for a card one viewport-height away from center.
pub const PARALLAX_TILT: f32 = 5.0;

/// Rows of translate per row of distance from center.
pub const ELASTIC_TRANSLATE: f32 = 0.05;
pub const ELASTIC_SHRINK: f32 = 0.15;
pub const ELASTIC_SCALE_MIN: f32 = 0.85;

/// Fraction of a card's rows that must be visible to count as in view.
pub const CINEMATIC_THRESHOLD: f32 = 0.4;
/// Viewport inset (both edges) for the in-view computation, rows.
pub const CINEMATIC_MARGIN_ROWS: f32 = 4.0;

/// Remaining rows to the bottom that arm the next page load.
pub const INFINITE_MARGIN_ROWS: f32 = 10.0;

/// How centered a card is: 1 at the viewport center, 0 at or beyond one
/// viewport-height away.
pub fn center_ratio(card: CardRect, view: Viewport) -> f32 {
    let max_distance = f32::from(view.height);
    if max_distance <= 0.0 {
        return 0.0;
    }
    let distance = (card.center() - view.center()).abs();
    (1.0 - distance / max_distance).max(0.0)
}

pub fn parallax_visual(card: CardRect, view: Viewport) -> VisualState {
    let ratio = center_ratio(card, view);
    let max_distance = f32::from(view.height);
    let tilt = if max_distance > 0.0 {
        (view.center() - card.center()) / max_distance * PARALLAX_TILT
    } else {
        0.0
    };
    VisualState {
        scale: PARALLAX_SCALE_MIN + ratio * PARALLAX_SCALE_RANGE,
        rotation: tilt,
        opacity: PARALLAX_OPACITY_MIN + ratio * PARALLAX_OPACITY_RANGE,
        translate: 0.0,
    }
}

pub fn elastic_visual(card: CardRect, view: Viewport) -> VisualState {
    let max_distance = f32::from(view.height);
    let signed = card.center() - view.center();
    // Only cards below center shrink; the clamp keeps far-off cards readable.
    let scale = if signed > 0.0 && max_distance > 0.0 {
        (1.0 - (signed / max_distance).clamp(0.0, 1.0) * ELASTIC_SHRINK).max(ELASTIC_SCALE_MIN)
    } else {
        1.0
    };
    VisualState {
        scale,
        rotation: 0.0,
        opacity: 1.0,
        translate: signed * ELASTIC_TRANSLATE,
    }
}

pub fn is_in_view(card: CardRect, view: Viewport) -> bool {
    if card.height <= 0.0 {
        return false;
    }
    let inset_top = view.offset + CINEMATIC_MARGIN_ROWS;
    let inset_bottom = view.bottom() - CINEMATIC_MARGIN_ROWS;
    let visible = (card.bottom().min(inset_bottom) - card.top.max(inset_top)).max(0.0);
    visible / card.height >= CINEMATIC_THRESHOLD
}

pub fn apply_parallax(surface: &mut impl CardSurface) {
    let view = surface.viewport();
    if view.is_degenerate() {
        return;
    }
    for index in 0..surface.card_count() {
        if let Some(card) = surface.card_rect(index) {
            surface.apply_visual(index, parallax_visual(card, view));
        }
    }
}

pub fn apply_elastic(surface: &mut impl CardSurface) {
    let view = surface.viewport();
    if view.is_degenerate() {
        return;
    }
    for index in 0..surface.card_count() {
        if let Some(card) = surface.card_rect(index) {
            surface.apply_visual(index, elastic_visual(card, view));
        }
    }
}

pub fn refresh_in_view(surface: &mut impl CardSurface) {
    let view = surface.viewport();
    if view.is_degenerate() {
        return;
    }
    for index in 0..surface.card_count() {
        if let Some(card) = surface.card_rect(index) {
            surface.set_in_view(index, is_in_view(card, view));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::visual::test_surface::TestSurface;

    fn centered_card(view: Viewport) -> CardRect {
        CardRect {
            top: view.center() - 5.0,
            height: 10.0,
        }
    }

    #[test]
    fn test_center_ratio_extremes() {
        let view = Viewport::new(40, 20);

        assert_eq!(center_ratio(centered_card(view), view), 1.0);

        // At exactly one viewport-height from center the ratio bottoms out.
        let far = CardRect {
            top: view.center() + 20.0 - 5.0,
            height: 10.0,
        };
        assert_eq!(center_ratio(far, view), 0.0);

        let beyond = CardRect {
            top: view.center() + 80.0,
            height: 10.0,
        };
        assert_eq!(center_ratio(beyond, view), 0.0);
    }

    #[test]
    fn test_parallax_centered_card_gets_maximums() {
        let view = Viewport::new(40, 20);
        let visual = parallax_visual(centered_card(view), view);

        assert_eq!(visual.scale, PARALLAX_SCALE_MIN + PARALLAX_SCALE_RANGE);
        assert_eq!(visual.opacity, PARALLAX_OPACITY_MIN + PARALLAX_OPACITY_RANGE);
        assert_eq!(visual.rotation, 0.0);
    }

    #[test]
    fn test_parallax_distant_card_gets_minimums() {
        let view = Viewport::new(40, 20);
        let far = CardRect {
            top: view.center() + 25.0,
            height: 10.0,
        };
        let visual = parallax_visual(far, view);

        assert_eq!(visual.scale, PARALLAX_SCALE_MIN);
        assert_eq!(visual.opacity, PARALLAX_OPACITY_MIN);
        assert!(visual.rotation < 0.0);
    }

    #[test]
    fn test_parallax_tilt_sign_follows_side_of_center() {
        let view = Viewport::new(40, 20);
        let above = CardRect {
            top: view.center() - 12.0,
            height: 4.0,
        };
        let below = CardRect {
            top: view.center() + 8.0,
            height: 4.0,
        };

        assert!(parallax_visual(above, view).rotation > 0.0);
        assert!(parallax_visual(below, view).rotation < 0.0);
    }

    #[test]
    fn test_elastic_center_and_extremes() {
        let view = Viewport::new(40, 20);

        let center = elastic_visual(centered_card(view), view);
        assert_eq!(center.scale, 1.0);
        assert_eq!(center.translate, 0.0);

        let below_far = CardRect {
            top: view.center() + 30.0,
            height: 10.0,
        };
        let visual = elastic_visual(below_far, view);
        assert_eq!(visual.scale, ELASTIC_SCALE_MIN);
        assert!(visual.translate > 0.0);

        // Cards above center translate up but never shrink.
        let above = CardRect {
            top: view.center() - 15.0,
            height: 10.0,
        };
        let visual = elastic_visual(above, view);
        assert_eq!(visual.scale, 1.0);
        assert!(visual.translate < 0.0);
    }

    #[test]
    fn test_in_view_threshold() {
        let view = Viewport::new(40, 28);

        let fully_visible = CardRect {
            top: view.offset + 8.0,
            height: 10.0,
        };
        assert!(is_in_view(fully_visible, view));

        let barely_entering = CardRect {
            top: view.bottom() - CINEMATIC_MARGIN_ROWS - 1.0,
            height: 10.0,
        };
        assert!(!is_in_view(barely_entering, view));

        let outside = CardRect {
            top: view.bottom() + 5.0,
            height: 10.0,
        };
        assert!(!is_in_view(outside, view));
    }

    #[test]
    fn test_apply_parallax_covers_every_card() {
        let mut surface = TestSurface::new(10.0, 5, Viewport::new(40, 20));
        apply_parallax(&mut surface);
        assert!(surface.visuals.iter().all(Option::is_some));
    }

    #[test]
    fn test_apply_passes_are_noops_on_degenerate_viewport() {
        let mut surface = TestSurface::new(10.0, 3, Viewport::new(40, 0));
        apply_parallax(&mut surface);
        apply_elastic(&mut surface);
        refresh_in_view(&mut surface);
        assert!(surface.visuals.iter().all(Option::is_none));
        assert!(surface.in_view.iter().all(|v| !v));
    }
}
