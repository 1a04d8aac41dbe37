use std::fmt;

use crate::error::RevealError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rectangles. Edge-adjacent rectangles overlap with zero
    /// area, which still counts as intersecting.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Fraction of `self` that lies inside `root`, in `[0, 1]`.
    pub fn intersection_ratio(&self, root: &Rect) -> f64 {
        match self.intersect(root) {
            None => 0.0,
            Some(_) if self.area() == 0.0 => 1.0,
            Some(overlap) => (overlap.area() / self.area()).clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl Default for MarginValue {
    fn default() -> Self {
        MarginValue::Px(0.0)
    }
}

impl MarginValue {
    /// Resolves against the viewport extent on the same axis.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            MarginValue::Px(px) => px,
            MarginValue::Percent(pct) => extent * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        let bare_zero = token
            .trim_start_matches(['-', '+'])
            .chars()
            .all(|c| c == '0' || c == '.');
        let (number, make): (&str, fn(f64) -> MarginValue) =
            if let Some(n) = token.strip_suffix("px") {
                (n, MarginValue::Px)
            } else if let Some(n) = token.strip_suffix('%') {
                (n, MarginValue::Percent)
            } else if bare_zero {
                (token, MarginValue::Px)
            } else {
                return None;
            };
        let value: f64 = number.parse().ok()?;
        value.is_finite().then(|| make(value))
    }
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(px) => write!(f, "{}px", px),
            MarginValue::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Offsets applied to the viewport before intersecting, in CSS `margin`
/// shorthand order. Negative values shrink the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl RootMargin {
    pub fn parse(raw: &str) -> Result<Self, RevealError> {
        let invalid = |reason: &str| RevealError::InvalidMargin {
            margin: raw.to_string(),
            reason: reason.to_string(),
        };

        let values = raw
            .split_whitespace()
            .map(|token| {
                MarginValue::parse(token)
                    .ok_or_else(|| invalid(&format!("bad component {:?}", token)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [top, right, bottom, left] = match values.as_slice() {
            [all] => [*all; 4],
            [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
            [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
            [top, right, bottom, left] => [*top, *right, *bottom, *left],
            [] => return Err(invalid("empty")),
            _ => return Err(invalid("more than four components")),
        };

        Ok(Self { top, right, bottom, left })
    }

    /// Grows (or, for negative margins, shrinks) the viewport rectangle.
    pub fn apply(&self, viewport: Rect) -> Rect {
        let top = self.top.resolve(viewport.height);
        let bottom = self.bottom.resolve(viewport.height);
        let left = self.left.resolve(viewport.width);
        let right = self.right.resolve(viewport.width);
        Rect::new(
            viewport.left - left,
            viewport.top - top,
            viewport.width + left + right,
            viewport.height + top + bottom,
        )
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_value_shorthand() {
        let margin = RootMargin::parse("-50px 0px").unwrap();
        assert_eq!(margin.top, MarginValue::Px(-50.0));
        assert_eq!(margin.bottom, MarginValue::Px(-50.0));
        assert_eq!(margin.left, MarginValue::Px(0.0));
        assert_eq!(margin.right, MarginValue::Px(0.0));
        assert_eq!(margin.to_string(), "-50px 0px -50px 0px");
    }

    #[test]
    fn parses_one_three_and_four_values() {
        assert_eq!(RootMargin::parse("10%").unwrap().left, MarginValue::Percent(10.0));

        let three = RootMargin::parse("1px 2px 3px").unwrap();
        assert_eq!(three.right, MarginValue::Px(2.0));
        assert_eq!(three.bottom, MarginValue::Px(3.0));
        assert_eq!(three.left, MarginValue::Px(2.0));

        let four = RootMargin::parse("0px 0px -50px 0").unwrap();
        assert_eq!(four.bottom, MarginValue::Px(-50.0));
        assert_eq!(four.left, MarginValue::Px(0.0));
    }

    #[test]
    fn rejects_malformed_margins() {
        for raw in ["", "   ", "10em", "1px 2px 3px 4px 5px", "px", "NaNpx"] {
            assert!(
                matches!(RootMargin::parse(raw), Err(RevealError::InvalidMargin { .. })),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn negative_margin_insets_viewport() {
        let root = RootMargin::parse("-50px 0px")
            .unwrap()
            .apply(Rect::new(0.0, 0.0, 1000.0, 800.0));
        assert_eq!(root, Rect::new(0.0, 50.0, 1000.0, 700.0));
    }

    #[test]
    fn percent_margin_resolves_per_axis() {
        let root = RootMargin::parse("10% 5%").unwrap().apply(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(root, Rect::new(-10.0, -10.0, 220.0, 120.0));
    }

    #[test]
    fn ratio_of_partially_visible_region() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(Rect::new(0.0, 50.0, 100.0, 100.0).intersection_ratio(&root), 0.5);
        assert_eq!(Rect::new(0.0, 200.0, 100.0, 100.0).intersection_ratio(&root), 0.0);
        assert_eq!(Rect::new(10.0, 10.0, 10.0, 10.0).intersection_ratio(&root), 1.0);
    }

    #[test]
    fn edge_adjacent_region_intersects_with_zero_ratio() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let below = Rect::new(0.0, 100.0, 100.0, 50.0);
        assert!(below.intersect(&root).is_some());
        assert_eq!(below.intersection_ratio(&root), 0.0);
    }
}
