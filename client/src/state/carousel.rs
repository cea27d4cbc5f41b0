//! Hero carousel state.
//!
//! DESIGN
//! ======
//! Every navigation path (prev/next buttons, indicator dots, the auto-advance
//! timer) goes through [`Carousel::show_slide`], so the active slide and the
//! active indicator can never disagree. The timer keeps ticking while the
//! pointer hovers the carousel; [`Carousel::tick`] simply ignores ticks while
//! paused, so pausing never races timer setup or teardown.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Auto-advance period.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

/// One hero slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const HERO_SLIDES: [Slide; 4] = [
    Slide {
        image: "/assets/img/hero-campus.jpg",
        title: "Keep Our Campus Clean",
        caption: "Littering is tracked, recorded, and penalized across campus.",
    },
    Slide {
        image: "/assets/img/hero-detection.jpg",
        title: "AI-Assisted Detection",
        caption: "Cameras flag litter so violations are logged without manual patrols.",
    },
    Slide {
        image: "/assets/img/hero-penalties.jpg",
        title: "Transparent Penalties",
        caption: "Every fine is visible with its status, amount, and date.",
    },
    Slide {
        image: "/assets/img/hero-community.jpg",
        title: "A Shared Responsibility",
        caption: "Students and staff working together for a greener university.",
    },
];

/// Circularly indexed slide show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
    paused: bool,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(HERO_SLIDES.len())
    }
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { current: 0, len, paused: false }
    }

    /// Activate slide `n`, wrapping modulo the slide count (negative input
    /// wraps from the end). Returns the active index. An empty carousel
    /// stays at 0.
    pub fn show_slide(&mut self, n: i64) -> usize {
        let Ok(len) = i64::try_from(self.len) else {
            return self.current;
        };
        if len == 0 {
            return self.current;
        }
        self.current = usize::try_from(n.rem_euclid(len)).unwrap_or(0);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.step(1)
    }

    pub fn prev(&mut self) -> usize {
        self.step(-1)
    }

    /// Timer callback: advance unless paused. Returns true when it advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next();
        true
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left the carousel.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Class for slide or indicator `index`.
    #[must_use]
    pub fn class_for(&self, index: usize, base: &str) -> String {
        if index == self.current { format!("{base} active") } else { base.to_owned() }
    }

    fn step(&mut self, delta: i64) -> usize {
        let current = i64::try_from(self.current).unwrap_or(0);
        self.show_slide(current + delta)
    }
}
