//! Camera space → display space
//!
//! The tracking SDK normally owns this mapping; `CoordinateMapper` is the
//! seam it plugs into. `OrthographicMapper` is a plain scale-and-flip used
//! when the page only knows its canvas size.

use crate::skeleton::Position;

/// Point on the display surface (pixels, y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayPoint {
    pub x: f32,
    pub y: f32,
}

impl DisplayPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps a camera-space joint position onto the display
pub trait CoordinateMapper {
    fn to_display(&self, position: Position) -> DisplayPoint;
}

/// Camera origin at the display centre, y flipped, depth ignored
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicMapper {
    pub width: f32,
    pub height: f32,
    pub pixels_per_unit: f32,
}

impl OrthographicMapper {
    pub fn new(width: f32, height: f32, pixels_per_unit: f32) -> Self {
        Self {
            width,
            height,
            pixels_per_unit,
        }
    }
}

impl Default for OrthographicMapper {
    /// Kinect depth frame size, roughly one metre per 200 px at 2 m
    fn default() -> Self {
        Self::new(512.0, 424.0, 200.0)
    }
}

impl CoordinateMapper for OrthographicMapper {
    fn to_display(&self, position: Position) -> DisplayPoint {
        DisplayPoint {
            x: self.width * 0.5 + position.x * self.pixels_per_unit,
            y: self.height * 0.5 - position.y * self.pixels_per_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_centre() {
        let mapper = OrthographicMapper::new(800.0, 600.0, 100.0);
        let p = mapper.to_display(Position::new(0.0, 0.0, 3.0));
        assert_eq!(p, DisplayPoint::new(400.0, 300.0));
    }

    #[test]
    fn test_y_is_flipped() {
        let mapper = OrthographicMapper::new(800.0, 600.0, 100.0);
        let p = mapper.to_display(Position::new(1.0, 1.0, 0.5));
        assert_eq!(p, DisplayPoint::new(500.0, 200.0));
    }
}
