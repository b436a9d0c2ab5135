//! The placement engine.
//!
//! Each directional function follows the same sequence of clamps, applied in
//! order with the last write winning:
//!
//! 1. clamp the content to the usable span on the cross axis,
//! 2. center the content over the trigger on the cross axis,
//! 3. place it past the trigger on the main axis, never beyond the inset,
//! 4. pull the arrow anchor away from the screen corners,
//! 5. shrink the content on the main axis if it would overflow,
//! 6. re-pin the cross origin if the content still overflows.
//!
//! Left and right are the top and bottom algorithms with the axes
//! transposed. They expect the arrow size already transposed, which
//! [`compute_geometry`] takes care of.

use crate::{Insets, Placement, Point, Rect, Size};

/// Extra distance kept between the arrow anchor and the inset boundary.
///
/// Together with the width/height difference of the arrow this keeps the
/// arrow wedge from being cut at the tooltip corners.
pub const ARROW_EDGE_MARGIN: f32 = 8.0;

/// Everything a directional geometry function needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryInput {
    /// Absolute rectangle of the trigger view.
    pub child_rect: Rect,
    /// Natural size of the tooltip content.
    pub content_size: Size,
    /// Arrow size. Width runs along the trigger edge for vertical placements.
    pub arrow_size: Size,
    /// Display insets.
    pub insets: Insets,
    /// Screen (window) size.
    pub screen: Size,
    /// Gap between the trigger and the arrow tip.
    pub child_content_spacing: f32,
}

/// Output of the placement engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryResult {
    /// Top-left corner of the content box.
    pub tooltip_origin: Point,
    /// Where the arrow tip touches the trigger.
    pub anchor_point: Point,
    /// The placement this geometry was computed for.
    pub placement: Placement,
    /// Content size after clamping to the screen.
    pub adjusted_content_size: Size,
}

#[inline]
fn abs_diff(a: f32, b: f32) -> f32 {
    if a > b { a - b } else { b - a }
}

/// Cross-axis origin shared by all four directional placements.
///
/// Pins to the near inset when the content fills the span, otherwise centers
/// over the trigger without crossing the near inset.
#[inline]
fn centered_cross_origin(
    content: f32,
    adjusted: f32,
    span: f32,
    inset_near: f32,
    child_start: f32,
    child_extent: f32,
) -> f32 {
    if content >= span {
        inset_near
    } else {
        inset_near.max(child_start + (child_extent - adjusted) / 2.0)
    }
}

/// Keeps the arrow anchor away from both inset boundaries on the cross axis.
#[inline]
fn clamp_arrow_anchor(
    anchor: f32,
    arrow_cross: f32,
    arrow_size: Size,
    near_bound: f32,
    far_bound: f32,
) -> f32 {
    let correction = abs_diff(arrow_size.width, arrow_size.height) + ARROW_EDGE_MARGIN;
    if anchor + arrow_cross > far_bound {
        far_bound - correction
    } else if anchor - arrow_cross < near_bound {
        near_bound + correction
    } else {
        anchor
    }
}

/// Re-pins the cross origin against the far inset when the content overflows.
#[inline]
fn repin_cross_origin(
    origin: f32,
    content: f32,
    adjusted: f32,
    span: f32,
    screen_extent: f32,
    inset_far: f32,
) -> f32 {
    if origin + content > span {
        screen_extent - inset_far - adjusted
    } else {
        origin
    }
}

/// Computes a degenerate 1x1 anchor rect for a tooltip without a trigger.
///
/// `placement` must already be the effective (inverted) placement.
#[must_use]
pub fn childless_rect(insets: Insets, screen: Size, placement: Placement) -> Rect {
    match placement {
        Placement::Bottom => Rect::new(screen.width / 2.0, insets.top, 1.0, 1.0),
        Placement::Right => Rect::new(insets.left, screen.height / 2.0, 1.0, 1.0),
        Placement::Left => Rect::new(screen.width - insets.right, screen.height / 2.0, 1.0, 1.0),
        Placement::Top | Placement::Center => Rect::new(
            screen.width / 2.0,
            screen.height - insets.bottom,
            1.0,
            1.0,
        ),
    }
}

/// Centers the content on screen, clamping only the axes that do not fit.
///
/// An axis that fits is reported as [`Size::UNCONSTRAINED_DIMENSION`] so the
/// content keeps its natural size along it.
#[must_use]
pub fn compute_center_geometry(
    child_rect: Rect,
    content_size: Size,
    insets: Insets,
    screen: Size,
) -> GeometryResult {
    let max_width = screen.width - insets.horizontal();
    let max_height = screen.height - insets.vertical();

    let (width, x) = if content_size.width >= max_width {
        (max_width, insets.left)
    } else {
        (
            Size::UNCONSTRAINED_DIMENSION,
            (max_width - content_size.width) / 2.0 + insets.left,
        )
    };
    let (height, y) = if content_size.height >= max_height {
        (max_height, insets.top)
    } else {
        (
            Size::UNCONSTRAINED_DIMENSION,
            (max_height - content_size.height) / 2.0 + insets.top,
        )
    };

    GeometryResult {
        tooltip_origin: Point::new(x, y),
        anchor_point: Point::new(child_rect.mid_x(), child_rect.y),
        placement: Placement::Center,
        adjusted_content_size: Size::new(width, height),
    }
}

/// Places the tooltip above its trigger.
#[must_use]
pub fn compute_top_geometry(input: &GeometryInput) -> GeometryResult {
    let GeometryInput {
        child_rect,
        content_size,
        arrow_size,
        insets,
        screen,
        child_content_spacing: spacing,
    } = *input;
    let max_width = screen.width - insets.horizontal();

    let adjusted_width = max_width.min(content_size.width);
    let x = centered_cross_origin(
        content_size.width,
        adjusted_width,
        max_width,
        insets.left,
        child_rect.x,
        child_rect.width,
    );
    let y = (insets.top - spacing)
        .max(child_rect.y - content_size.height - arrow_size.height - spacing);

    let anchor_x = clamp_arrow_anchor(
        child_rect.mid_x(),
        arrow_size.width,
        arrow_size,
        insets.left,
        screen.width - insets.right,
    );
    let anchor_y = child_rect.y - spacing;

    let bottom_bound = anchor_y - arrow_size.height;
    let adjusted_height = if y + content_size.height > bottom_bound {
        bottom_bound - y
    } else {
        content_size.height
    };

    let x = repin_cross_origin(
        x,
        content_size.width,
        adjusted_width,
        max_width,
        screen.width,
        insets.right,
    );

    GeometryResult {
        tooltip_origin: Point::new(x, y),
        anchor_point: Point::new(anchor_x, anchor_y),
        placement: Placement::Top,
        adjusted_content_size: Size::new(adjusted_width, adjusted_height),
    }
}

/// Places the tooltip below its trigger.
#[must_use]
pub fn compute_bottom_geometry(input: &GeometryInput) -> GeometryResult {
    let GeometryInput {
        child_rect,
        content_size,
        arrow_size,
        insets,
        screen,
        child_content_spacing: spacing,
    } = *input;
    let max_width = screen.width - insets.horizontal();

    let adjusted_width = max_width.min(content_size.width);
    let x = centered_cross_origin(
        content_size.width,
        adjusted_width,
        max_width,
        insets.left,
        child_rect.x,
        child_rect.width,
    );
    let y = (screen.height - insets.bottom + spacing)
        .min(child_rect.max_y() + arrow_size.height + spacing);

    let anchor_x = clamp_arrow_anchor(
        child_rect.mid_x(),
        arrow_size.width,
        arrow_size,
        insets.left,
        screen.width - insets.right,
    );
    let anchor_y = child_rect.max_y() + spacing;

    let bottom_bound = screen.height - insets.bottom;
    let adjusted_height = if y + content_size.height > bottom_bound {
        bottom_bound - y
    } else {
        content_size.height
    };

    let x = repin_cross_origin(
        x,
        content_size.width,
        adjusted_width,
        max_width,
        screen.width,
        insets.right,
    );

    GeometryResult {
        tooltip_origin: Point::new(x, y),
        anchor_point: Point::new(anchor_x, anchor_y),
        placement: Placement::Bottom,
        adjusted_content_size: Size::new(adjusted_width, adjusted_height),
    }
}

/// Places the tooltip to the left of its trigger.
///
/// `input.arrow_size` must already be transposed.
#[must_use]
pub fn compute_left_geometry(input: &GeometryInput) -> GeometryResult {
    let GeometryInput {
        child_rect,
        content_size,
        arrow_size,
        insets,
        screen,
        child_content_spacing: spacing,
    } = *input;
    let max_height = screen.height - insets.vertical();

    let adjusted_height = max_height.min(content_size.height);
    let x = (insets.left - spacing)
        .max(child_rect.x - content_size.width - arrow_size.width - spacing);
    let y = centered_cross_origin(
        content_size.height,
        adjusted_height,
        max_height,
        insets.top,
        child_rect.y,
        child_rect.height,
    );

    let anchor_x = child_rect.x - spacing;
    let anchor_y = clamp_arrow_anchor(
        child_rect.mid_y(),
        arrow_size.height,
        arrow_size,
        insets.top,
        screen.height - insets.bottom,
    );

    let right_bound = anchor_x - arrow_size.width;
    let adjusted_width = if x + content_size.width > right_bound {
        right_bound - x
    } else {
        content_size.width
    };

    let y = repin_cross_origin(
        y,
        content_size.height,
        adjusted_height,
        max_height,
        screen.height,
        insets.bottom,
    );

    GeometryResult {
        tooltip_origin: Point::new(x, y),
        anchor_point: Point::new(anchor_x, anchor_y),
        placement: Placement::Left,
        adjusted_content_size: Size::new(adjusted_width, adjusted_height),
    }
}

/// Places the tooltip to the right of its trigger.
///
/// `input.arrow_size` must already be transposed.
#[must_use]
pub fn compute_right_geometry(input: &GeometryInput) -> GeometryResult {
    let GeometryInput {
        child_rect,
        content_size,
        arrow_size,
        insets,
        screen,
        child_content_spacing: spacing,
    } = *input;
    let max_height = screen.height - insets.vertical();

    let adjusted_height = max_height.min(content_size.height);
    let x = (screen.width - insets.right + spacing)
        .min(child_rect.max_x() + arrow_size.width + spacing);
    let y = centered_cross_origin(
        content_size.height,
        adjusted_height,
        max_height,
        insets.top,
        child_rect.y,
        child_rect.height,
    );

    let anchor_x = child_rect.max_x() + spacing;
    let anchor_y = clamp_arrow_anchor(
        child_rect.mid_y(),
        arrow_size.height,
        arrow_size,
        insets.top,
        screen.height - insets.bottom,
    );

    let right_bound = screen.width - insets.right;
    let adjusted_width = if x + content_size.width > right_bound {
        right_bound - x
    } else {
        content_size.width
    };

    let y = repin_cross_origin(
        y,
        content_size.height,
        adjusted_height,
        max_height,
        screen.height,
        insets.bottom,
    );

    GeometryResult {
        tooltip_origin: Point::new(x, y),
        anchor_point: Point::new(anchor_x, anchor_y),
        placement: Placement::Right,
        adjusted_content_size: Size::new(adjusted_width, adjusted_height),
    }
}

/// Dispatches to the geometry function for `placement`.
///
/// `placement` is the effective placement (already inverted for childless
/// tooltips). The arrow in `input` is given for vertical placements and is
/// transposed here for [`Placement::Left`] and [`Placement::Right`].
/// A centered tooltip only uses center geometry when it has no trigger;
/// with a trigger it falls back to the top algorithm, fed the transposed
/// arrow like every non-vertical placement.
#[must_use]
pub fn compute_geometry(
    placement: Placement,
    has_child: bool,
    input: &GeometryInput,
) -> GeometryResult {
    let transposed = || GeometryInput {
        arrow_size: input.arrow_size.swap(),
        ..*input
    };

    match placement {
        Placement::Center if !has_child => compute_center_geometry(
            input.child_rect,
            input.content_size,
            input.insets,
            input.screen,
        ),
        Placement::Bottom => compute_bottom_geometry(input),
        Placement::Left => compute_left_geometry(&transposed()),
        Placement::Right => compute_right_geometry(&transposed()),
        Placement::Center => compute_top_geometry(&transposed()),
        Placement::Top => compute_top_geometry(input),
    }
}
