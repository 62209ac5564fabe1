//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and the square [-2, 2] x [-2, 2] on the real plane, which is where
//! every point of the de Jong map must land.

/// The half-width of the real square the attractor lives in.  Both
/// coordinates are a sine minus a cosine, so neither can leave
/// [-2, 2].
pub const EXTENT: f64 = 2.0;

/// Describes the x, y of a cell on the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps points on the real plane to cells of a width x height grid.
/// The left-lower corner of the real square lands on cell 0,0.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    width: usize,
    height: usize,
}

impl PlaneMapper {
    /// Constructor.  Takes the dimensions of the integral plane.
    pub fn new(width: usize, height: usize) -> PlaneMapper {
        PlaneMapper { width, height }
    }

    /// Width of the integral plane.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the integral plane.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Given a point on the real plane, find the cell it falls in:
    /// floor((v + 2) / 4 * size) on each axis.  Anything that lands
    /// outside [0, width) x [0, height) is not on the plane, and we
    /// say so rather than clamp it.
    pub fn point_to_pixel(&self, x: f64, y: f64) -> Option<Pixel> {
        let span = 2.0 * EXTENT;
        let left = ((x + EXTENT) / span * self.width as f64).floor();
        let top = ((y + EXTENT) / span * self.height as f64).floor();
        if !(left >= 0.0 && left < self.width as f64 && top >= 0.0 && top < self.height as f64) {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_centre() {
        let pm = PlaneMapper::new(640, 640);
        assert_eq!(pm.point_to_pixel(0.0, 0.0), Some(Pixel(320, 320)));
    }

    #[test]
    fn corners_of_the_square() {
        let pm = PlaneMapper::new(4, 4);
        assert_eq!(pm.point_to_pixel(-2.0, -2.0), Some(Pixel(0, 0)));
        assert_eq!(pm.point_to_pixel(1.999, 1.999), Some(Pixel(3, 3)));
        assert_eq!(pm.point_to_pixel(2.0, 0.0), None);
        assert_eq!(pm.point_to_pixel(0.0, 2.0), None);
    }

    #[test]
    fn points_off_the_plane_are_rejected() {
        let pm = PlaneMapper::new(10, 10);
        assert_eq!(pm.point_to_pixel(-2.1, 0.0), None);
        assert_eq!(pm.point_to_pixel(0.0, 3.0), None);
        assert_eq!(pm.point_to_pixel(std::f64::NAN, 0.0), None);
    }

    #[test]
    fn non_square_planes_scale_each_axis() {
        let pm = PlaneMapper::new(8, 4);
        assert_eq!(pm.point_to_pixel(-1.0, -1.0), Some(Pixel(2, 1)));
        assert_eq!(pm.point_to_pixel(1.0, 1.0), Some(Pixel(6, 3)));
    }
}
