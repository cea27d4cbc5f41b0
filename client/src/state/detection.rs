//! Upload "detection" demo state.
//!
//! The demo is a simulation: an uploaded image gets one canned outcome picked
//! uniformly at random and a matching number of randomly placed boxes. The
//! random source is injected so picking and placement are deterministic in
//! tests; the browser passes `Math.random`.
//!
//! DESIGN
//! ======
//! Each file selection takes a [`RequestToken`]. Image decode is async, so an
//! older selection can finish after a newer one; [`DetectionState::apply`]
//! drops any outcome whose token is no longer the latest. Reset also bumps the
//! token so an in-flight decode cannot resurrect the canvas.

#[cfg(test)]
#[path = "detection_test.rs"]
mod detection_test;

/// Canned result shown in the results panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CannedDetection {
    pub trash_count: u32,
    pub violation: &'static str,
    pub points: u32,
    pub student: &'static str,
}

/// Results panel contents before any upload and after reset.
pub const NO_DETECTION: CannedDetection = CannedDetection { trash_count: 0, violation: "None", points: 0, student: "N/A" };

pub const CANNED_DETECTIONS: [CannedDetection; 4] = [
    CannedDetection { trash_count: 2, violation: "Minor", points: 25, student: "S12345" },
    CannedDetection { trash_count: 5, violation: "Major", points: 50, student: "S12346" },
    CannedDetection { trash_count: 1, violation: "Minor", points: 25, student: "S12347" },
    NO_DETECTION,
];

/// Boxes start at least this far from the right and bottom edges.
pub const BOX_MARGIN: f64 = 100.0;
pub const BOX_MIN_SIZE: f64 = 50.0;
pub const BOX_SIZE_SPREAD: f64 = 100.0;

/// A simulated detection rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Identifies one file selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// A decoded upload with its simulated detection.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionOutcome {
    pub detection: CannedDetection,
    pub boxes: Vec<DetectionBox>,
    pub width: f64,
    pub height: f64,
}

/// Draw a sample in `[0, 1)` from `rand`, clamping misbehaving sources.
fn sample(rand: &mut impl FnMut() -> f64) -> f64 {
    let r = rand();
    if r.is_finite() { r.clamp(0.0, 1.0 - f64::EPSILON) } else { 0.0 }
}

/// Pick one canned outcome uniformly.
pub fn pick_detection(rand: &mut impl FnMut() -> f64) -> CannedDetection {
    let len = CANNED_DETECTIONS.len();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = ((sample(rand) * len as f64).floor() as usize).min(len - 1);
    CANNED_DETECTIONS[index]
}

/// Place `count` boxes on a `width` x `height` canvas.
pub fn place_boxes(count: u32, width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Vec<DetectionBox> {
    (0..count)
        .map(|_| {
            let x = sample(rand) * (width - BOX_MARGIN).max(0.0);
            let y = sample(rand) * (height - BOX_MARGIN).max(0.0);
            let w = BOX_MIN_SIZE + sample(rand) * BOX_SIZE_SPREAD;
            let h = BOX_MIN_SIZE + sample(rand) * BOX_SIZE_SPREAD;
            DetectionBox { x, y, width: w, height: h }
        })
        .collect()
}

/// Simulate detection on a decoded `width` x `height` image.
pub fn simulate(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> DetectionOutcome {
    let detection = pick_detection(rand);
    let boxes = place_boxes(detection.trash_count, width, height, rand);
    DetectionOutcome { detection, boxes, width, height }
}

/// Demo panel state.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionState {
    latest: u64,
    pub canvas_visible: bool,
    pub result: CannedDetection,
    pub boxes: Vec<DetectionBox>,
    /// Bumped whenever results change, to replay the fade-in animation.
    pub animation_seq: u64,
}

impl Default for DetectionState {
    fn default() -> Self {
        Self { latest: 0, canvas_visible: false, result: NO_DETECTION, boxes: Vec::new(), animation_seq: 0 }
    }
}

impl DetectionState {
    /// Start a new request; earlier tokens become stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Show `outcome` if `token` is still the latest request.
    pub fn apply(&mut self, token: RequestToken, outcome: &DetectionOutcome) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.canvas_visible = true;
        self.result = outcome.detection;
        self.boxes.clone_from(&outcome.boxes);
        self.animation_seq += 1;
        true
    }

    /// Hide the canvas and restore placeholder results.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.canvas_visible = false;
        self.result = NO_DETECTION;
        self.boxes.clear();
    }

    /// Result panel cells: trash count, violation level, points, student id.
    #[must_use]
    pub fn result_cells(&self) -> [(&'static str, String); 4] {
        [
            ("trash-count", self.result.trash_count.to_string()),
            ("violation-level", self.result.violation.to_owned()),
            ("penalty-points", self.result.points.to_string()),
            ("student-id", self.result.student.to_owned()),
        ]
    }
}
