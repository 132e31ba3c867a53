// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Visibility of a widget inside the scroll viewport, and the projection
//! used to draw a card turned around its vertical axis.

use egui::{Pos2, Rect};

/// Fraction of `item`'s area that lies inside `viewport`, in `[0, 1]`.
pub fn visible_fraction(item: Rect, viewport: Rect) -> f32 {
    let area = item.area();
    if area <= 0.0 {
        return 0.0;
    }
    let overlap = item.intersect(viewport);
    if overlap.width() <= 0.0 || overlap.height() <= 0.0 {
        return 0.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Whether at least `threshold` of `item` is on screen.
pub fn is_visible(item: Rect, viewport: Rect, threshold: f32) -> bool {
    let fraction = visible_fraction(item, viewport);
    fraction > 0.0 && fraction >= threshold
}

/// Corners (top-left, top-right, bottom-right, bottom-left) of `rect`
/// after turning it `rotate_y_deg` around its vertical centre line and
/// projecting with a viewer `perspective` points away.
pub fn project_rotated(rect: Rect, rotate_y_deg: f32, perspective: f32) -> [Pos2; 4] {
    let (sin, cos) = rotate_y_deg.to_radians().sin_cos();
    let half_w = rect.width() / 2.0;
    let half_h = rect.height() / 2.0;
    let center = rect.center();

    let edge = |side: f32| {
        let x = side * half_w * cos;
        let depth = side * half_w * sin;
        let k = perspective / (perspective + depth).max(1.0);
        (center.x + x * k, half_h * k)
    };

    let (left_x, left_h) = edge(-1.0);
    let (right_x, right_h) = edge(1.0);
    [
        Pos2::new(left_x, center.y - left_h),
        Pos2::new(right_x, center.y - right_h),
        Pos2::new(right_x, center.y + right_h),
        Pos2::new(left_x, center.y + left_h),
    ]
}
