//! Table geometry: felt rectangle, rails, pockets and diamond markers,
//! recomputed wholesale from the viewport and the selected table size.

use glam::Vec2;

use crate::api::error::ConfigError;

/// Padding between the outer rail edge and the viewport, in canvas pixels.
const EDGE_PADDING: f32 = 5.0;
/// Smallest usable extent either viewport axis clamps to, so a degenerate
/// resize never produces negative or NaN geometry.
const MIN_EXTENT: f32 = 64.0;
/// Regulation ball diameter in inches.
const BALL_DIAMETER_IN: f32 = 2.25;
/// Rail band width as a multiple of ball radius (30:10 in the base layout).
const RAIL_TO_BALL: f32 = 3.0;
/// Corner pocket radius as a multiple of ball radius (18:10 in the base layout).
const POCKET_TO_BALL: f32 = 1.8;
/// Side pockets are slightly tighter than corner pockets.
const SIDE_POCKET_SCALE: f32 = 0.9;

/// Diamond positions along a long rail, as fractions of rail length.
const LONG_RAIL_STOPS: [f32; 6] = [0.125, 0.25, 0.375, 0.625, 0.75, 0.875];
/// Diamond positions along a short rail.
const SHORT_RAIL_STOPS: [f32; 3] = [0.25, 0.5, 0.75];

/// Nominal table sizes, identified by their playfield width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSize {
    SevenFoot,
    EightFoot,
    NineFoot,
}

impl TableSize {
    /// Tournament-standard nine-foot table.
    pub const REFERENCE: TableSize = TableSize::NineFoot;

    /// Decode the numeric code the host sends (the nominal length in feet).
    pub fn from_code(code: u32) -> Result<Self, ConfigError> {
        match code {
            7 => Ok(Self::SevenFoot),
            8 => Ok(Self::EightFoot),
            9 => Ok(Self::NineFoot),
            _ => Err(ConfigError::InvalidTableSize(code)),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::SevenFoot => 7,
            Self::EightFoot => 8,
            Self::NineFoot => 9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenFoot => "7 FT",
            Self::EightFoot => "8 FT",
            Self::NineFoot => "9 FT",
        }
    }

    /// Playfield width in inches.
    fn playfield_width_in(&self) -> f32 {
        match self {
            Self::SevenFoot => 38.0,
            Self::EightFoot => 44.0,
            Self::NineFoot => 50.0,
        }
    }

    /// How many ball diameters span the playfield width. Bigger tables fit
    /// more balls across, so at a fixed canvas rectangle their balls render
    /// smaller — matching real table/ball proportions.
    pub fn balls_across(&self) -> f32 {
        self.playfield_width_in() / BALL_DIAMETER_IN
    }
}

/// One pocket mouth. A ball whose center enters the radius is captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub center: Vec2,
    pub radius: f32,
}

/// Full table geometry. A pure product of `compute`; never mutated piecemeal.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Top-left corner of the felt rectangle.
    pub origin: Vec2,
    /// Felt extent; `size.y == 2.0 * size.x` always (portrait-normalized).
    pub size: Vec2,
    pub rail_width: f32,
    pub ball_radius: f32,
    pub pocket_radius: f32,
    /// 4 corner pockets then 2 side pockets on the long rails.
    pub pockets: [Pocket; 6],
    /// 18 decorative markers: 6 per long rail, 3 per short rail.
    pub diamonds: Vec<Vec2>,
}

impl TableLayout {
    /// Lay out the largest 1:2 felt rectangle that fits the viewport minus
    /// edge padding and the rail band, centered.
    ///
    /// The rail width is itself a fixed multiple of the ball radius, which
    /// scales with felt width, so the fit is solved in closed form rather
    /// than iterated.
    pub fn compute(viewport_w: f32, viewport_h: f32, size: TableSize) -> Self {
        let balls_across = size.balls_across();
        // rail = c * felt_width
        let c = RAIL_TO_BALL / (2.0 * balls_across);

        let avail_w = (viewport_w - 2.0 * EDGE_PADDING).max(MIN_EXTENT);
        let avail_h = (viewport_h - 2.0 * EDGE_PADDING).max(MIN_EXTENT);

        // Constrain by height first: felt_h + 2*rail == avail_h with felt_h = 2*felt_w.
        let mut felt_w = avail_h / (2.0 + 2.0 * c);
        // Too wide for the viewport: constrain by width instead.
        if felt_w * (1.0 + 2.0 * c) > avail_w {
            felt_w = avail_w / (1.0 + 2.0 * c);
        }
        let felt_h = felt_w * 2.0;

        let ball_radius = felt_w / (2.0 * balls_across);
        let rail_width = ball_radius * RAIL_TO_BALL;
        let pocket_radius = ball_radius * POCKET_TO_BALL;

        let origin = Vec2::new(
            (viewport_w - felt_w) / 2.0,
            (viewport_h - felt_h) / 2.0,
        );

        let pockets = Self::pockets_for(origin, felt_w, felt_h, rail_width, pocket_radius);
        let diamonds = Self::diamonds_for(origin, felt_w, felt_h, rail_width);

        Self {
            origin,
            size: Vec2::new(felt_w, felt_h),
            rail_width,
            ball_radius,
            pocket_radius,
            pockets,
            diamonds,
        }
    }

    /// Pocket centers sit outside the felt edge, halfway into the rail band.
    /// The long rails run vertically (portrait normalization), so the side
    /// pockets hang off the left and right edges at mid-height.
    fn pockets_for(origin: Vec2, w: f32, h: f32, rail: f32, pocket_r: f32) -> [Pocket; 6] {
        let off = rail * 0.5;
        let side_r = pocket_r * SIDE_POCKET_SCALE;
        [
            Pocket { center: Vec2::new(origin.x - off, origin.y - off), radius: pocket_r },
            Pocket { center: Vec2::new(origin.x + w + off, origin.y - off), radius: pocket_r },
            Pocket { center: Vec2::new(origin.x - off, origin.y + h + off), radius: pocket_r },
            Pocket { center: Vec2::new(origin.x + w + off, origin.y + h + off), radius: pocket_r },
            Pocket { center: Vec2::new(origin.x - off, origin.y + h / 2.0), radius: side_r },
            Pocket { center: Vec2::new(origin.x + w + off, origin.y + h / 2.0), radius: side_r },
        ]
    }

    fn diamonds_for(origin: Vec2, w: f32, h: f32, rail: f32) -> Vec<Vec2> {
        let mut diamonds = Vec::with_capacity(18);
        let mid = rail / 2.0;
        for p in LONG_RAIL_STOPS {
            diamonds.push(Vec2::new(origin.x - mid, origin.y + h * p));
            diamonds.push(Vec2::new(origin.x + w + mid, origin.y + h * p));
        }
        for p in SHORT_RAIL_STOPS {
            diamonds.push(Vec2::new(origin.x + w * p, origin.y - mid));
            diamonds.push(Vec2::new(origin.x + w * p, origin.y + h + mid));
        }
        diamonds
    }

    /// Whether a ball centered at `pos` fits entirely inside the felt.
    pub fn contains_ball_center(&self, pos: Vec2) -> bool {
        let r = self.ball_radius;
        pos.x >= self.origin.x + r
            && pos.x <= self.origin.x + self.size.x - r
            && pos.y >= self.origin.y + r
            && pos.y <= self.origin.y + self.size.y - r
    }

    /// Clamp a ball center so the ball rests against the cushion face
    /// instead of passing through it. Per-axis, so sliding along a rail
    /// keeps the free axis untouched.
    pub fn clamp_ball_center(&self, pos: Vec2) -> Vec2 {
        let r = self.ball_radius;
        Vec2::new(
            pos.x.clamp(self.origin.x + r, self.origin.x + self.size.x - r),
            pos.y.clamp(self.origin.y + r, self.origin.y + self.size.y - r),
        )
    }

    /// The pocket whose capture zone contains `pos`, if any.
    pub fn pocket_at(&self, pos: Vec2) -> Option<&Pocket> {
        self.pockets
            .iter()
            .find(|p| p.center.distance(pos) <= p.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recompute_is_idempotent() {
        let a = TableLayout::compute(1280.0, 720.0, TableSize::EightFoot);
        let b = TableLayout::compute(1280.0, 720.0, TableSize::EightFoot);
        assert_eq!(a, b);
    }

    #[test]
    fn aspect_is_exactly_one_to_two() {
        for &(w, h) in &[(1000.0, 600.0), (320.0, 1200.0), (768.0, 768.0), (2560.0, 1440.0)] {
            for size in [TableSize::SevenFoot, TableSize::EightFoot, TableSize::NineFoot] {
                let layout = TableLayout::compute(w, h, size);
                assert_eq!(layout.size.y, layout.size.x * 2.0, "at {}x{}", w, h);
            }
        }
    }

    #[test]
    fn reference_layout_in_1000x600() {
        // Scenario: a landscape viewport with the reference table size.
        let layout = TableLayout::compute(1000.0, 600.0, TableSize::REFERENCE);
        assert_eq!(layout.size.x / layout.size.y, 0.5);
        assert_eq!(layout.pockets.len(), 6);
        assert_eq!(layout.diamonds.len(), 18);
        // Fit is height-constrained here, with room to spare horizontally.
        assert!(layout.size.y + 2.0 * layout.rail_width <= 590.0 + 1e-3);
        assert!(layout.origin.x > 0.0 && layout.origin.y > 0.0);
    }

    #[test]
    fn layout_is_centered() {
        let layout = TableLayout::compute(1000.0, 600.0, TableSize::NineFoot);
        let left = layout.origin.x;
        let right = 1000.0 - (layout.origin.x + layout.size.x);
        let top = layout.origin.y;
        let bottom = 600.0 - (layout.origin.y + layout.size.y);
        assert!((left - right).abs() < 1e-3);
        assert!((top - bottom).abs() < 1e-3);
    }

    #[test]
    fn narrow_viewport_constrains_by_width() {
        let layout = TableLayout::compute(200.0, 2000.0, TableSize::NineFoot);
        assert!(layout.size.x + 2.0 * layout.rail_width <= 190.0 + 1e-3);
        assert_eq!(layout.size.y, layout.size.x * 2.0);
    }

    #[test]
    fn degenerate_viewport_stays_finite() {
        for &(w, h) in &[(0.0, 0.0), (-50.0, 30.0), (10.0, f32::MIN_POSITIVE)] {
            let layout = TableLayout::compute(w, h, TableSize::SevenFoot);
            assert!(layout.size.x > 0.0 && layout.size.x.is_finite());
            assert!(layout.size.y > 0.0 && layout.size.y.is_finite());
            assert!(layout.ball_radius > 0.0 && layout.ball_radius.is_finite());
        }
    }

    #[test]
    fn bigger_tables_render_smaller_balls() {
        let seven = TableLayout::compute(1000.0, 600.0, TableSize::SevenFoot);
        let nine = TableLayout::compute(1000.0, 600.0, TableSize::NineFoot);
        assert!(nine.ball_radius < seven.ball_radius);
        // Rail and pocket stay in fixed proportion to the ball.
        for layout in [&seven, &nine] {
            assert!((layout.rail_width / layout.ball_radius - 3.0).abs() < 1e-5);
            assert!((layout.pocket_radius / layout.ball_radius - 1.8).abs() < 1e-5);
        }
    }

    #[test]
    fn pockets_sit_outside_the_felt() {
        let layout = TableLayout::compute(1000.0, 600.0, TableSize::EightFoot);
        for pocket in &layout.pockets {
            let inside_x = pocket.center.x > layout.origin.x
                && pocket.center.x < layout.origin.x + layout.size.x;
            let inside_y = pocket.center.y > layout.origin.y
                && pocket.center.y < layout.origin.y + layout.size.y;
            assert!(!(inside_x && inside_y), "pocket {:?} is on the felt", pocket);
        }
        // Side pockets are the tighter ones.
        assert!(layout.pockets[4].radius < layout.pockets[0].radius);
    }

    #[test]
    fn clamp_respects_cushion_face() {
        let layout = TableLayout::compute(1000.0, 600.0, TableSize::NineFoot);
        let r = layout.ball_radius;
        let clamped = layout.clamp_ball_center(Vec2::new(-500.0, 1e6));
        assert_eq!(clamped.x, layout.origin.x + r);
        assert_eq!(clamped.y, layout.origin.y + layout.size.y - r);
        // Interior points pass through untouched.
        let center = layout.origin + layout.size / 2.0;
        assert_eq!(layout.clamp_ball_center(center), center);
    }

    #[test]
    fn invalid_size_code_is_rejected() {
        assert!(TableSize::from_code(9).is_ok());
        assert!(TableSize::from_code(12).is_err());
        assert!(TableSize::from_code(0).is_err());
    }
}
