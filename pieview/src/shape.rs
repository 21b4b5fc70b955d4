// Copyright 2025 the PieView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend swatch shapes.

use kurbo::{BezPath, Ellipse, Rect, RoundedRect, Shape};

/// Swatch shape drawn next to each legend label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LegendShape {
    /// An oval inscribed in the swatch box.
    #[default]
    Circle,
    /// A rounded rectangle filling the swatch box.
    Square,
}

impl LegendShape {
    /// Returns the geometry of this shape inside `bounds`.
    ///
    /// `corner_radius` only applies to [`LegendShape::Square`].
    pub fn geometry(self, bounds: Rect, corner_radius: f64) -> ShapeGeometry {
        match self {
            Self::Circle => ShapeGeometry::Circle(Ellipse::from_rect(bounds)),
            Self::Square => {
                let max_radius = 0.5 * bounds.width().min(bounds.height());
                let radius = corner_radius.clamp(0.0, max_radius.max(0.0));
                ShapeGeometry::Square(RoundedRect::from_rect(bounds, radius))
            }
        }
    }
}

/// Concrete swatch geometry, ready to fill.
#[derive(Clone, Copy, Debug)]
pub enum ShapeGeometry {
    /// Oval swatch.
    Circle(Ellipse),
    /// Rounded-rectangle swatch.
    Square(RoundedRect),
}

impl ShapeGeometry {
    /// Flattens the swatch into a path.
    pub fn path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Circle(e) => e.path_elements(tolerance).collect(),
            Self::Square(r) => r.path_elements(tolerance).collect(),
        }
    }

    /// The box the swatch was built from.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Circle(e) => e.bounding_box(),
            Self::Square(r) => r.rect(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn circle_is_inscribed_in_its_box() {
        let bounds = Rect::new(10.0, 20.0, 30.0, 40.0);
        let ShapeGeometry::Circle(e) = LegendShape::Circle.geometry(bounds, 5.0) else {
            panic!("expected an ellipse");
        };
        assert_eq!(e.center(), bounds.center());
        assert!((e.radii().x - 10.0).abs() < 1e-9);
        assert!((e.radii().y - 10.0).abs() < 1e-9);
        let b = LegendShape::Circle.geometry(bounds, 0.0).bounds();
        assert!((b.x0 - bounds.x0).abs() < 1e-9 && (b.y1 - bounds.y1).abs() < 1e-9);
    }

    #[test]
    fn square_keeps_its_box_and_clamps_the_radius() {
        let bounds = Rect::new(0.0, 0.0, 20.0, 20.0);
        let ShapeGeometry::Square(r) = LegendShape::Square.geometry(bounds, 25.0) else {
            panic!("expected a rounded rect");
        };
        assert_eq!(r.rect(), bounds);
        assert_eq!(r.radii().top_left, 10.0);
        assert_eq!(LegendShape::Square.geometry(bounds, 4.0).bounds(), bounds);
        assert_ne!(
            LegendShape::Square.geometry(bounds, 2.0).path(0.1).bounding_box(),
            Rect::ZERO
        );
    }
}
