use std::str::FromStr;

use ratatui::prelude::Rect;

use super::Window;
use crate::error::GeometryError;
use crate::layout::inset;

/// Space kept free around a window, outside its border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Margins {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn apply(self, rect: Rect) -> Rect {
        inset(rect, self.top, self.right, self.bottom, self.left)
    }
}

/// Position and size of a window, as given on a command line:
/// `X,Y,WIDTHxHEIGHT` (for example `4,2,40x12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl WindowGeometry {
    pub fn apply_to(&self, window: &Window) {
        window.set_position(self.x, self.y);
        window.set_size(self.width, self.height);
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<u16, GeometryError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|source| GeometryError::Number {
            field,
            value: value.trim().to_string(),
            source,
        })
}

impl FromStr for WindowGeometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GeometryError::Malformed(s.to_string());
        let mut parts = s.split(',');
        let (Some(x), Some(y), Some(size), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let (width, height) = size
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;
        Ok(Self {
            x: parse_field("x", x)?,
            y: parse_field("y", y)?,
            width: parse_field("width", width)?,
            height: parse_field("height", height)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_geometry() {
        let g: WindowGeometry = "4,2,40x12".parse().unwrap();
        assert_eq!(
            g,
            WindowGeometry {
                x: 4,
                y: 2,
                width: 40,
                height: 12
            }
        );
        let g: WindowGeometry = " 1, 0 ,8X3".parse().unwrap();
        assert_eq!((g.x, g.y, g.width, g.height), (1, 0, 8, 3));
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(matches!(
            "1,2".parse::<WindowGeometry>(),
            Err(GeometryError::Malformed(_))
        ));
        assert!(matches!(
            "1,2,3".parse::<WindowGeometry>(),
            Err(GeometryError::Malformed(_))
        ));
        assert!(matches!(
            "1,2,3x4,5".parse::<WindowGeometry>(),
            Err(GeometryError::Malformed(_))
        ));
    }

    #[test]
    fn reports_the_bad_field() {
        match "1,-2,3x4".parse::<WindowGeometry>() {
            Err(GeometryError::Number { field, value, .. }) => {
                assert_eq!(field, "y");
                assert_eq!(value, "-2");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn margins_inset_rect() {
        let m = Margins::new(1, 2, 3, 4);
        assert_eq!(m.apply(Rect::new(0, 0, 20, 10)), Rect::new(4, 1, 14, 6));
        assert_eq!(Margins::default().apply(Rect::new(3, 3, 5, 5)), Rect::new(3, 3, 5, 5));
    }
}
