//! Carousel Paging
//!
//! Slide arithmetic for the projects slider: which slide leads the track,
//! where next/prev/dots go, and which slides are on screen.

use crate::models::CarouselSettings;

/// Paging state over a fixed number of slides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carousel {
    settings: CarouselSettings,
    slide_count: usize,
    /// Index of the left-most visible slide
    current: usize,
}

impl Carousel {
    pub fn new(settings: CarouselSettings, slide_count: usize) -> Self {
        Self {
            settings,
            slide_count,
            current: 0,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn show(&self) -> usize {
        self.settings.slides_to_show.max(1)
    }

    fn step(&self) -> usize {
        self.settings.slides_to_scroll.max(1)
    }

    /// Everything fits on screen; arrows, dots and autoplay are disabled
    pub fn is_static(&self) -> bool {
        self.slide_count <= self.show()
    }

    /// Largest lead index that still fills the viewport (finite mode)
    fn last_start(&self) -> usize {
        self.slide_count.saturating_sub(self.show())
    }

    pub fn next(&mut self) {
        if self.is_static() {
            return;
        }
        let step = self.step();
        self.current = if self.settings.infinite {
            (self.current + step) % self.slide_count
        } else if self.current >= self.last_start() {
            self.current
        } else {
            (self.current + step).min(self.last_start())
        };
    }

    pub fn prev(&mut self) {
        if self.is_static() {
            return;
        }
        let step = self.step() % self.slide_count;
        self.current = if self.settings.infinite {
            (self.current + self.slide_count - step) % self.slide_count
        } else {
            self.current.saturating_sub(step)
        };
    }

    pub fn can_go_prev(&self) -> bool {
        !self.is_static() && (self.settings.infinite || self.current > 0)
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_static() && (self.settings.infinite || self.current < self.last_start())
    }

    /// Number of pagination dots
    pub fn dot_count(&self) -> usize {
        if self.is_static() {
            return 0;
        }
        let step = self.step();
        if self.settings.infinite {
            self.slide_count.div_ceil(step)
        } else {
            self.last_start().div_ceil(step) + 1
        }
    }

    /// Dot highlighted for the current position
    pub fn active_dot(&self) -> usize {
        let dot = self.current / self.step();
        dot.min(self.dot_count().saturating_sub(1))
    }

    pub fn go_to_dot(&mut self, dot: usize) {
        if dot >= self.dot_count() {
            return;
        }
        let target = dot * self.step();
        self.current = if self.settings.infinite {
            target % self.slide_count
        } else {
            target.min(self.last_start())
        };
    }

    /// Slide indices currently on screen, left to right
    pub fn visible(&self) -> Vec<usize> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        let show = self.show().min(self.slide_count);
        (0..show)
            .map(|offset| (self.current + offset) % self.slide_count)
            .collect()
    }

    /// Track order including the leading slides cloned at the end, so the
    /// last slides can be followed by the first ones when wrapping
    pub fn track(&self) -> Vec<usize> {
        let mut track: Vec<usize> = (0..self.slide_count).collect();
        if self.settings.infinite && !self.is_static() {
            track.extend(0..self.show().min(self.slide_count));
        }
        track
    }

    /// Width of one slide as a percentage of the viewport
    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.show() as f64
    }

    /// CSS translation offset of the track
    pub fn offset_percent(&self) -> f64 {
        -(self.current as f64) * self.slide_width_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_carousel() -> Carousel {
        Carousel::new(CarouselSettings::default(), 4)
    }

    fn finite(slide_count: usize) -> Carousel {
        let settings = CarouselSettings {
            infinite: false,
            ..CarouselSettings::default()
        };
        Carousel::new(settings, slide_count)
    }

    #[test]
    fn test_infinite_wraps_forward_and_back() {
        let mut c = project_carousel();
        assert_eq!(c.visible(), vec![0, 1]);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current, 3);
        assert_eq!(c.visible(), vec![3, 0]);
        c.next();
        assert_eq!(c.current, 0);
        c.prev();
        assert_eq!(c.current, 3);
    }

    #[test]
    fn test_infinite_dots() {
        let mut c = project_carousel();
        assert_eq!(c.dot_count(), 4);
        c.go_to_dot(2);
        assert_eq!(c.current, 2);
        assert_eq!(c.active_dot(), 2);
        c.go_to_dot(9);
        assert_eq!(c.current, 2);
    }

    #[test]
    fn test_finite_stops_at_edges() {
        let mut c = finite(4);
        assert!(!c.can_go_prev());
        c.prev();
        assert_eq!(c.current, 0);
        c.next();
        c.next();
        assert_eq!(c.current, 2);
        assert!(!c.can_go_next());
        c.next();
        assert_eq!(c.current, 2);
        assert_eq!(c.dot_count(), 3);
        assert_eq!(c.active_dot(), 2);
    }

    #[test]
    fn test_finite_scroll_by_two_clamps() {
        let settings = CarouselSettings {
            infinite: false,
            slides_to_scroll: 2,
            ..CarouselSettings::default()
        };
        let mut c = Carousel::new(settings, 5);
        c.next();
        c.next();
        assert_eq!(c.current, 3);
        assert_eq!(c.dot_count(), 3);
        c.go_to_dot(2);
        assert_eq!(c.current, 3);
    }

    #[test]
    fn test_static_when_everything_fits() {
        let mut c = Carousel::new(CarouselSettings::default(), 2);
        assert!(c.is_static());
        c.next();
        assert_eq!(c.current, 0);
        assert_eq!(c.dot_count(), 0);
        assert_eq!(c.track(), vec![0, 1]);
    }

    #[test]
    fn test_track_clones_leading_slides() {
        let c = project_carousel();
        assert_eq!(c.track(), vec![0, 1, 2, 3, 0, 1]);
        assert_eq!(finite(4).track(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_offsets() {
        let mut c = project_carousel();
        assert_eq!(c.slide_width_percent(), 50.0);
        c.next();
        assert_eq!(c.offset_percent(), -50.0);
    }

    #[test]
    fn test_empty() {
        let mut c = Carousel::new(CarouselSettings::default(), 0);
        c.next();
        c.prev();
        assert!(c.visible().is_empty());
        assert_eq!(c.active_dot(), 0);
    }
}
