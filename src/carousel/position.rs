// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Slide position mapping.
//!
//! Classifies each slide relative to the current one and provides the 3D
//! placement used to render it: the current slide in front, its neighbours
//! pushed sideways, scaled down and turned, everything else collapsed.

/// Display role of a slide relative to the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Current,
    Next,
    Prev,
    Hidden,
}

/// Where and how a slide is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    /// Horizontal offset from the stage centre, in points
    pub offset_x: f32,
    pub scale: f32,
    /// Rotation around the vertical axis, in degrees
    pub rotate_y_deg: f32,
    pub z_index: i32,
    pub opacity: f32,
    /// Whether the slide receives pointer input
    pub interactive: bool,
}

/// Map a slide to its role.
///
/// For two slides the non-current one is `Next`: `diff == 1` is checked
/// before `diff == len - 1`. Inputs outside `[0, len)` map to `Hidden`.
pub fn position_of(index: usize, current: usize, len: usize) -> SlidePosition {
    if index >= len || current >= len {
        return SlidePosition::Hidden;
    }

    let diff = (index + len - current) % len;
    if diff == 0 {
        SlidePosition::Current
    } else if diff == 1 {
        SlidePosition::Next
    } else if diff == len - 1 {
        SlidePosition::Prev
    } else {
        SlidePosition::Hidden
    }
}

impl SlidePosition {
    pub fn transform(self) -> SlideTransform {
        match self {
            SlidePosition::Current => SlideTransform {
                offset_x: 0.0,
                scale: 1.0,
                rotate_y_deg: 0.0,
                z_index: 30,
                opacity: 1.0,
                interactive: true,
            },
            SlidePosition::Prev => SlideTransform {
                offset_x: 400.0,
                scale: 0.8,
                rotate_y_deg: -15.0,
                z_index: 10,
                opacity: 0.5,
                interactive: true,
            },
            SlidePosition::Next => SlideTransform {
                offset_x: -400.0,
                scale: 0.8,
                rotate_y_deg: 15.0,
                z_index: 10,
                opacity: 0.5,
                interactive: true,
            },
            SlidePosition::Hidden => SlideTransform {
                offset_x: 0.0,
                scale: 0.5,
                rotate_y_deg: 0.0,
                z_index: 10,
                opacity: 0.0,
                interactive: false,
            },
        }
    }

    pub fn is_visible(self) -> bool {
        self != SlidePosition::Hidden
    }
}
