use std::f64::consts::TAU;

use crate::model::CategoryName;

use super::WheelError;

/// Sector fill colours, cycled by sector index.
pub const PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#8AC24A", "#607D8B",
    "#E91E63", "#3F51B5",
];

/// Gap between the wheel rim and the edge of the drawing surface.
pub const WHEEL_MARGIN: f64 = 10.0;

/// Upper bound for the responsive drawing surface.
pub const MAX_SURFACE_SIZE: f64 = 500.0;

/// Labels longer than this are cut down and end with an ellipsis.
pub const LABEL_MAX_CHARS: usize = 12;

/// Screen angle of the fixed pointer: the right-hand side of the wheel.
pub const POINTER_ANGLE: f64 = 0.0;

const TRUNCATED_CHARS: usize = 10;
const ELLIPSIS: &str = "...";

// Absorbs float error so an exact boundary lands in the sector that starts there.
const BOUNDARY_EPSILON: f64 = 1e-9;

#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let head: String = label.chars().take(TRUNCATED_CHARS).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        label.to_string()
    }
}

/// Side of the square drawing surface for a viewport of the given width.
#[must_use]
pub fn responsive_surface_size(viewport_width: f64) -> f64 {
    (viewport_width * 0.8).clamp(0.0, MAX_SURFACE_SIZE)
}

/// One angular slice of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    index: usize,
    category: CategoryName,
    label: String,
    color: &'static str,
    start_angle: f64,
    end_angle: f64,
}

impl Sector {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    /// Display text, already truncated.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Equal partition of the circle, one sector per category.
///
/// Both drawing and pointer resolution read from this type so the sector
/// the user sees under the pointer is the one that gets picked.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    sectors: Vec<Sector>,
    sector_angle: f64,
}

impl WheelGeometry {
    /// Partition the wheel for the given categories.
    ///
    /// # Errors
    ///
    /// Returns `WheelError::NoCategories` if `categories` is empty.
    pub fn new(categories: &[CategoryName]) -> Result<Self, WheelError> {
        if categories.is_empty() {
            return Err(WheelError::NoCategories);
        }

        #[allow(clippy::cast_precision_loss)]
        let sector_angle = TAU / categories.len() as f64;
        let sectors = categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                #[allow(clippy::cast_precision_loss)]
                let start_angle = index as f64 * sector_angle;
                Sector {
                    index,
                    category: category.clone(),
                    label: truncate_label(category.as_str()),
                    color: PALETTE[index % PALETTE.len()],
                    start_angle,
                    end_angle: start_angle + sector_angle,
                }
            })
            .collect();

        Ok(Self {
            sectors,
            sector_angle,
        })
    }

    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    #[must_use]
    pub fn sector_angle(&self) -> f64 {
        self.sector_angle
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Index of the sector sitting under the pointer after rotating the wheel by `rotation`.
    #[must_use]
    pub fn index_under_pointer(&self, rotation: f64) -> usize {
        // The wheel turns under a still pointer, so undo the rotation to find
        // which wheel-local angle is at the pointer.
        let local = (POINTER_ANGLE - rotation).rem_euclid(TAU);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let slot = ((local + BOUNDARY_EPSILON) / self.sector_angle).floor() as usize;
        slot % self.sectors.len()
    }

    #[must_use]
    pub fn sector_under_pointer(&self, rotation: f64) -> &Sector {
        &self.sectors[self.index_under_pointer(rotation)]
    }
}

/// Pixel placement of the wheel on a square drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    size: f64,
    center: f64,
    radius: f64,
}

impl WheelLayout {
    /// Lay the wheel out on a square surface of side `size`.
    ///
    /// # Errors
    ///
    /// Returns `WheelError::InvalidSurface` if the surface leaves no room for a wheel.
    pub fn new(size: f64) -> Result<Self, WheelError> {
        if !size.is_finite() || size <= WHEEL_MARGIN * 2.0 {
            return Err(WheelError::InvalidSurface { size });
        }
        let center = size / 2.0;
        Ok(Self {
            size,
            center,
            radius: center - WHEEL_MARGIN,
        })
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Surface coordinates of the point `distance` from the centre at `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64, distance: f64) -> (f64, f64) {
        (
            self.center + distance * angle.cos(),
            self.center + distance * angle.sin(),
        )
    }

    /// Where the pointer touches the rim.
    #[must_use]
    pub fn pointer_tip(&self) -> (f64, f64) {
        self.point_at(POINTER_ANGLE, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn names(raw: &[&str]) -> Vec<CategoryName> {
        raw.iter().map(|n| CategoryName::new(*n).unwrap()).collect()
    }

    #[test]
    fn geometry_rejects_zero_categories() {
        assert_eq!(WheelGeometry::new(&[]).unwrap_err(), WheelError::NoCategories);
    }

    #[test]
    fn sectors_partition_the_circle() {
        let geometry = WheelGeometry::new(&names(&["A", "B", "C"])).unwrap();
        assert_eq!(geometry.len(), 3);
        let sectors = geometry.sectors();
        assert!((sectors[0].start_angle() - 0.0).abs() < 1e-12);
        assert!((sectors[2].end_angle() - TAU).abs() < 1e-12);
        assert!((sectors[1].mid_angle() - PI).abs() < 1e-12);
        assert_eq!(sectors[1].color(), PALETTE[1]);
    }

    #[test]
    fn palette_cycles() {
        let raw: Vec<String> = (0..12).map(|i| format!("C{i}")).collect();
        let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
        let geometry = WheelGeometry::new(&names(&refs)).unwrap();
        assert_eq!(geometry.sectors()[10].color(), PALETTE[0]);
        assert_eq!(geometry.sectors()[11].color(), PALETTE[1]);
    }

    #[test]
    fn labels_are_truncated_past_twelve_chars() {
        assert_eq!(truncate_label("Twelve chars"), "Twelve chars");
        assert_eq!(truncate_label("Thirteen char"), "Thirteen c...");
        assert_eq!(truncate_label("Směrovací protokoly"), "Směrovací ...");
    }

    #[test]
    fn unrotated_pointer_sits_on_first_sector() {
        let geometry = WheelGeometry::new(&names(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(geometry.sector_under_pointer(0.0).category().as_str(), "A");
    }

    #[test]
    fn small_clockwise_turn_brings_last_sector_under_pointer() {
        let geometry = WheelGeometry::new(&names(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(geometry.sector_under_pointer(0.1).category().as_str(), "D");
        assert_eq!(geometry.sector_under_pointer(PI / 2.0 + 0.1).category().as_str(), "C");
    }

    #[test]
    fn half_turn_boundary_resolves_to_third_category() {
        let geometry = WheelGeometry::new(&names(&["A", "B", "C", "D"])).unwrap();
        let rotation = TAU * 3.5;
        let first = geometry.sector_under_pointer(rotation).category().clone();
        let second = geometry.sector_under_pointer(rotation).category().clone();
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "C");
    }

    #[test]
    fn pointer_resolution_matches_drawn_sector() {
        let geometry = WheelGeometry::new(&names(&["A", "B", "C", "D", "E"])).unwrap();
        for step in 0..200 {
            let rotation = f64::from(step) * 0.173;
            let sector = geometry.sector_under_pointer(rotation);
            // Screen angle of the picked sector's middle after rotation must be
            // within half a sector of the pointer.
            let screen_mid = (sector.mid_angle() + rotation - POINTER_ANGLE).rem_euclid(TAU);
            let distance = screen_mid.min(TAU - screen_mid);
            assert!(distance <= geometry.sector_angle() / 2.0 + 1e-6);
        }
    }

    #[test]
    fn layout_centers_wheel_with_margin() {
        let layout = WheelLayout::new(400.0).unwrap();
        assert!((layout.center() - 200.0).abs() < f64::EPSILON);
        assert!((layout.radius() - 190.0).abs() < f64::EPSILON);
        let (x, y) = layout.pointer_tip();
        assert!((x - 390.0).abs() < 1e-9);
        assert!((y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn layout_rejects_degenerate_surface() {
        assert!(WheelLayout::new(0.0).is_err());
        assert!(WheelLayout::new(f64::NAN).is_err());
    }

    #[test]
    fn responsive_size_is_capped() {
        assert!((responsive_surface_size(400.0) - 320.0).abs() < 1e-9);
        assert!((responsive_surface_size(2_000.0) - 500.0).abs() < 1e-9);
    }
}
