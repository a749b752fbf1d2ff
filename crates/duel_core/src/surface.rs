//! Fixed-size drawing surface

use duel_math::Rect;

/// Default surface width (16:9 with the height)
pub const DEFAULT_SURFACE_WIDTH: f32 = 1024.0;

/// Default surface height, also the floor line
pub const DEFAULT_SURFACE_HEIGHT: f32 = 576.0;

/// Logical drawing area in pixels
///
/// The size is fixed at construction. Window resizes only change how the
/// surface is scaled onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
}

impl Surface {
    /// Create a surface, rejecting empty or non-finite sizes
    pub fn new(width: f32, height: f32) -> Result<Self, SurfaceError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SurfaceError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(SurfaceError::Empty { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of the surface; bodies land on this line
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Rectangle covering the whole surface
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

/// Invalid surface configuration
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
    Empty { width: f32, height: f32 },
    NonFinite { width: f32, height: f32 },
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::Empty { width, height } => {
                write!(f, "Surface must have a positive size, got {}x{}", width, height)
            }
            SurfaceError::NonFinite { width, height } => {
                write!(f, "Surface size must be finite, got {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_16_9() {
        let surface = Surface::default();
        assert_eq!(surface.width(), 1024.0);
        assert_eq!(surface.height(), 576.0);
        assert!((surface.aspect_ratio() - 16.0 / 9.0).abs() < 0.0001);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            Surface::new(0.0, 576.0),
            Err(SurfaceError::Empty { width: 0.0, height: 576.0 })
        );
        assert!(Surface::new(1024.0, -1.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Surface::new(f32::INFINITY, 576.0),
            Err(SurfaceError::NonFinite { .. })
        ));
        assert!(Surface::new(1024.0, f32::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Surface::new(0.0, 0.0).unwrap_err();
        assert_eq!(format!("{}", err), "Surface must have a positive size, got 0x0");
    }

    #[test]
    fn test_bounds() {
        let surface = Surface::new(800.0, 450.0).unwrap();
        assert_eq!(surface.bounds(), Rect::from_size(800.0, 450.0));
    }
}
