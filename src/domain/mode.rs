use serde::{Deserialize, Serialize};
use strum::Display;

/// The scrolling/viewing behavior attached to the feed container.
///
/// Exactly one mode is active at a time; activating a new one tears the
/// previous one down completely before installing anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case", from = "String")]
#[strum(serialize_all = "kebab-case")]
pub enum ScrollMode {
    /// Unrecognized identifiers fall back here; plain scrolling.
    #[default]
    Default,
    Smooth,
    Snap,
    Instagram,
    Momentum,
    Parallax,
    Elastic,
    Cinematic,
    Carousel,
    Infinite,
}

impl ScrollMode {
    pub const ALL: [ScrollMode; 10] = [
        ScrollMode::Default,
        ScrollMode::Smooth,
        ScrollMode::Snap,
        ScrollMode::Instagram,
        ScrollMode::Momentum,
        ScrollMode::Parallax,
        ScrollMode::Elastic,
        ScrollMode::Cinematic,
        ScrollMode::Carousel,
        ScrollMode::Infinite,
    ];

    /// Modes with no runtime handler state; the renderer alone interprets them.
    pub fn is_styling_only(&self) -> bool {
        matches!(
            self,
            ScrollMode::Default
                | ScrollMode::Smooth
                | ScrollMode::Snap
                | ScrollMode::Instagram
                | ScrollMode::Carousel
        )
    }

    /// Offset requests align to the nearest card top.
    pub fn snaps(&self) -> bool {
        matches!(self, ScrollMode::Snap | ScrollMode::Instagram)
    }

    /// Modes that leave per-card visual or in-view overrides behind.
    pub fn mutates_cards(&self) -> bool {
        matches!(
            self,
            ScrollMode::Parallax | ScrollMode::Elastic | ScrollMode::Cinematic
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrollMode::Default => "Default",
            ScrollMode::Smooth => "Smooth",
            ScrollMode::Snap => "Snap",
            ScrollMode::Instagram => "Instagram",
            ScrollMode::Momentum => "Momentum",
            ScrollMode::Parallax => "Parallax",
            ScrollMode::Elastic => "Elastic",
            ScrollMode::Cinematic => "Cinematic",
            ScrollMode::Carousel => "Carousel",
            ScrollMode::Infinite => "Infinite",
        }
    }

    pub fn next(&self) -> ScrollMode {
        let i = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> ScrollMode {
        let i = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a mode identifier, falling back to [`ScrollMode::Default`] for
    /// anything unrecognized (cosmetic behavior, never an error).
    pub fn parse(s: &str) -> ScrollMode {
        match s {
            "default" => ScrollMode::Default,
            "smooth" => ScrollMode::Smooth,
            "snap" => ScrollMode::Snap,
            "instagram" | "instagram-style" => ScrollMode::Instagram,
            "momentum" => ScrollMode::Momentum,
            "parallax" => ScrollMode::Parallax,
            "elastic" => ScrollMode::Elastic,
            "cinematic" => ScrollMode::Cinematic,
            "carousel" => ScrollMode::Carousel,
            "infinite" => ScrollMode::Infinite,
            _ => ScrollMode::Default,
        }
    }
}

impl From<String> for ScrollMode {
    fn from(s: String) -> Self {
        ScrollMode::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("momentum", ScrollMode::Momentum)]
    #[case("instagram-style", ScrollMode::Instagram)]
    #[case("instagram", ScrollMode::Instagram)]
    #[case("infinite", ScrollMode::Infinite)]
    #[case("", ScrollMode::Default)]
    #[case("zoom", ScrollMode::Default)]
    fn test_parse(#[case] input: &str, #[case] expected: ScrollMode) {
        assert_eq!(ScrollMode::parse(input), expected);
    }

    #[test]
    fn test_parse_unknown_via_serde() {
        let mode: ScrollMode = serde_json::from_str("\"does-not-exist\"").unwrap();
        assert_eq!(mode, ScrollMode::Default);
    }

    #[test]
    fn test_cycle_covers_all_modes() {
        let mut mode = ScrollMode::Default;
        let mut seen = vec![mode];
        for _ in 0..ScrollMode::ALL.len() - 1 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, ScrollMode::ALL.to_vec());
        assert_eq!(mode.next(), ScrollMode::Default);
        assert_eq!(ScrollMode::Default.prev(), ScrollMode::Infinite);
    }

    #[test]
    fn test_styling_only_modes_do_not_mutate_cards() {
        for mode in ScrollMode::ALL {
            assert!(
                !(mode.is_styling_only() && mode.mutates_cards()),
                "{mode} cannot be both styling-only and card-mutating"
            );
        }
    }
}
