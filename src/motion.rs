//! Scroll-linked values and one-shot entrance poses, rendered as inline CSS.

use crate::config::{PARALLAX_OPACITY, PARALLAX_Y1, PARALLAX_Y2, SCROLL_INPUT};

/// Linear map from a scroll offset range onto an output range, clamped at
/// both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTransform {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ScrollTransform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn map(&self, offset: f64) -> f64 {
        let (lo, hi) = self.input;
        let (start, end) = self.output;
        if offset.is_nan() || offset <= lo {
            return start;
        }
        if offset >= hi {
            return end;
        }
        let progress = (offset - lo) / (hi - lo);
        start + (end - start) * progress
    }
}

/// Hero background parameters for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub y1: f64,
    pub y2: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            y1: ScrollTransform::new(SCROLL_INPUT, PARALLAX_Y1).map(scroll_y),
            y2: ScrollTransform::new(SCROLL_INPUT, PARALLAX_Y2).map(scroll_y),
            opacity: ScrollTransform::new(SCROLL_INPUT, PARALLAX_OPACITY).map(scroll_y),
        }
    }

    pub fn layer_style(&self) -> String {
        format!("opacity: {};", self.opacity)
    }

    pub fn offset_style(offset: f64) -> String {
        format!("transform: translateY({}px);", offset)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Pose = Pose { x: 0.0, y: 0.0, scale: 1.0, opacity: 1.0 };

    pub const fn hidden() -> Self {
        Pose { opacity: 0.0, ..Pose::REST }
    }

    pub const fn shifted(x: f64, y: f64) -> Self {
        Pose { x, y, ..Pose::hidden() }
    }

    pub const fn scaled(scale: f64) -> Self {
        Pose { scale, ..Pose::hidden() }
    }

    fn css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}); opacity: {};",
            self.x, self.y, self.scale, self.opacity
        )
    }
}

/// A one-time transition from `from` to [`Pose::REST`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub duration: f64,
    pub delay: f64,
}

impl Entrance {
    pub const fn new(from: Pose, duration: f64) -> Self {
        Self { from, duration, delay: 0.0 }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Cards in a grid come in one after another.
    pub fn staggered(self, index: usize) -> Self {
        self.delayed(index as f64 * 0.2)
    }

    pub fn style(&self, revealed: bool) -> String {
        let pose = if revealed { Pose::REST } else { self.from };
        format!(
            "{} transition: transform {d}s ease-out {l}s, opacity {d}s ease-out {l}s;",
            pose.css(),
            d = self.duration,
            l = self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parallax_starts_at_rest() {
        let p = Parallax::at(0.0);
        assert_eq!(p, Parallax { y1: 0.0, y2: 0.0, opacity: 1.0 });
        assert_eq!(Parallax::at(-120.0), p);
    }

    #[test]
    fn parallax_clamps_past_range() {
        let end = Parallax { y1: 50.0, y2: -50.0, opacity: 0.3 };
        assert_eq!(Parallax::at(300.0), end);
        assert_eq!(Parallax::at(4_000.0), end);
    }

    #[test]
    fn parallax_is_linear_inside_range() {
        let mid = Parallax::at(150.0);
        assert!(close(mid.y1, 25.0));
        assert!(close(mid.y2, -25.0));
        assert!(close(mid.opacity, 0.65));

        for offset in [30.0, 75.0, 210.0, 299.0] {
            let p = Parallax::at(offset);
            let t = offset / 300.0;
            assert!(close(p.y1, 50.0 * t));
            assert!(close(p.y2, -50.0 * t));
            assert!(close(p.opacity, 1.0 - 0.7 * t));
            assert!((0.3..=1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn nan_scroll_falls_back_to_start() {
        let t = ScrollTransform::new((0.0, 300.0), (4.0, 8.0));
        assert_eq!(t.map(f64::NAN), 4.0);
    }

    #[test]
    fn entrance_style_switches_to_rest_pose() {
        let e = Entrance::new(Pose::shifted(-100.0, 0.0), 0.8);
        assert_eq!(
            e.style(false),
            "transform: translate(-100px, 0px) scale(1); opacity: 0; transition: transform 0.8s ease-out 0s, opacity 0.8s ease-out 0s;"
        );
        assert!(e.style(true).starts_with("transform: translate(0px, 0px) scale(1); opacity: 1;"));
    }

    #[test]
    fn stagger_adds_fifth_of_a_second_per_card() {
        let e = Entrance::new(Pose::scaled(0.8), 0.6);
        assert_eq!(e.staggered(0).delay, 0.0);
        assert!(close(e.staggered(2).delay, 0.4));
        assert!(e.staggered(1).style(true).contains("0.6s ease-out 0.2s"));
    }
}
