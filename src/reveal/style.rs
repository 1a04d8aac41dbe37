use crate::config;

const IDENTITY_TRANSFORM: &str = "translateY(0) translateX(0)";

/// Side the content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn hidden_transform(self, distance_px: f64) -> String {
        match self {
            Direction::Up => format!("translateY({}px)", distance_px),
            Direction::Down => format!("translateY({}px)", -distance_px),
            Direction::Left => format!("translateX({}px)", -distance_px),
            Direction::Right => format!("translateX({}px)", distance_px),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub easing: &'static str,
    pub delay_secs: f64,
}

impl Transition {
    pub fn to_css(&self) -> String {
        let millis = |secs: f64| (secs * 1000.0).round() as i64;
        format!(
            "all {}ms {} {}ms",
            millis(self.duration_secs),
            self.easing,
            millis(self.delay_secs)
        )
    }
}

/// Maps a reveal flag to inline CSS: hidden content is transparent and
/// offset, revealed content is opaque with an identity transform.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub direction: Direction,
    pub distance_px: f64,
    pub transition: Transition,
}

impl RevealStyle {
    pub fn section(direction: Direction, delay_secs: f64) -> Self {
        Self {
            direction,
            distance_px: config::SECTION_OFFSET_PX,
            transition: Transition {
                duration_secs: config::SECTION_DURATION_SECS,
                easing: config::SECTION_EASING,
                delay_secs,
            },
        }
    }

    pub fn text() -> Self {
        Self {
            direction: Direction::Up,
            distance_px: config::TEXT_OFFSET_PX,
            transition: Transition {
                duration_secs: config::TEXT_DURATION_SECS,
                easing: config::TEXT_EASING,
                delay_secs: 0.0,
            },
        }
    }

    pub fn token(delay_secs: f64) -> Self {
        Self {
            distance_px: config::TOKEN_OFFSET_PX,
            transition: Transition {
                delay_secs,
                ..Self::text().transition
            },
            ..Self::text()
        }
    }

    pub fn opacity(visible: bool) -> f64 {
        if visible {
            1.0
        } else {
            0.0
        }
    }

    pub fn transform(&self, visible: bool) -> String {
        if visible {
            IDENTITY_TRANSFORM.to_string()
        } else {
            self.direction.hidden_transform(self.distance_px)
        }
    }

    pub fn css(&self, visible: bool) -> String {
        format!(
            "opacity: {}; transform: {}; transition: {};",
            Self::opacity(visible),
            self.transform(visible),
            self.transition.to_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_offsets_point_away_from_travel() {
        assert_eq!(Direction::Up.hidden_transform(60.0), "translateY(60px)");
        assert_eq!(Direction::Down.hidden_transform(60.0), "translateY(-60px)");
        assert_eq!(Direction::Left.hidden_transform(60.0), "translateX(-60px)");
        assert_eq!(Direction::Right.hidden_transform(60.0), "translateX(60px)");
    }

    #[test]
    fn visible_collapses_to_identity() {
        let style = RevealStyle::section(Direction::Left, 0.3);
        assert_eq!(style.transform(true), IDENTITY_TRANSFORM);
        assert_eq!(
            style.css(true),
            "opacity: 1; transform: translateY(0) translateX(0); \
             transition: all 800ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 300ms;"
        );
    }

    #[test]
    fn hidden_section_is_transparent_and_offset() {
        let css = RevealStyle::section(Direction::Up, 0.0).css(false);
        assert!(css.starts_with("opacity: 0; transform: translateY(60px);"));
    }

    #[test]
    fn token_delay_is_rounded_to_millis() {
        let style = RevealStyle::token(3.0 * 0.1);
        assert_eq!(style.transition.to_css(), "all 600ms ease-out 300ms");
        assert_eq!(style.transform(false), "translateY(20px)");
    }
}
