// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover hulls: the convex region spanned by a set of element boxes.
//!
//! ## Overview
//!
//! A tooltip treats its trigger and content as one hoverable region, including
//! the gap between them, so the pointer can travel from one to the other
//! without the tooltip closing. That region is the convex hull of the corners
//! of both boxes.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_headless::hull::{hull_from_rects, point_in_polygon};
//!
//! let trigger = Rect::new(0.0, 0.0, 20.0, 10.0);
//! let content = Rect::new(40.0, 30.0, 80.0, 60.0);
//! let hull = hull_from_rects(&[trigger, content]);
//!
//! // The gap between the two boxes is part of the region...
//! assert!(point_in_polygon(Point::new(30.0, 20.0), &hull));
//! // ...but a point far away is not.
//! assert!(!point_in_polygon(Point::new(70.0, 5.0), &hull));
//! ```

use alloc::vec::Vec;
use kurbo::{Point, Rect};

/// Compute the convex hull of `points` using Andrew's monotone chain.
///
/// The result is counter-clockwise (in a y-up frame), starts at the
/// lexicographically smallest point and omits collinear points. Fewer than
/// three distinct points are returned as-is (deduplicated and sorted).
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// The convex hull of the corners of every rectangle.
pub fn hull_from_rects(rects: &[Rect]) -> Vec<Point> {
    let corners: Vec<Point> = rects
        .iter()
        .flat_map(|r| {
            [
                Point::new(r.x0, r.y0),
                Point::new(r.x1, r.y0),
                Point::new(r.x1, r.y1),
                Point::new(r.x0, r.y1),
            ]
        })
        .collect();
    convex_hull(&corners)
}

/// Whether `pt` lies inside `polygon` (even-odd rule).
///
/// Degenerate polygons (fewer than three vertices) contain nothing.
pub fn point_in_polygon(pt: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        let crosses = (a.y > pt.y) != (b.y > pt.y)
            && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `pt` lies in the hover region spanned by `rects`.
///
/// Points inside any of the rectangles always count, so the result never
/// depends on how the even-odd rule treats hull edges that coincide with a
/// rectangle edge.
pub fn point_in_region(pt: Point, rects: &[Rect]) -> bool {
    let on_or_in = |r: &Rect| r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1;
    if rects.iter().any(on_or_in) {
        return true;
    }
    point_in_polygon(pt, &hull_from_rects(rects))
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a - o).cross(b - o)
}
