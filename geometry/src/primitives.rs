//! Geometry value types shared by the placement engine and its callers.
//!
//! These are plain `Copy` aggregates. Construction never fails and accepts any
//! value, including negative ones; keeping inputs sane is the caller's job.

// ============================================================================
// Point
// ============================================================================

/// Absolute screen coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
///
/// A dimension of `0` means "not measured yet". Center placement reports
/// [`Size::UNCONSTRAINED_DIMENSION`] (`-1`) on an axis the content may size
/// naturally along.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Sentinel dimension meaning "do not constrain this axis".
    pub const UNCONSTRAINED_DIMENSION: f32 = -1.0;

    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns the size with width and height exchanged.
    ///
    /// Arrow sizes are expressed for vertical placements; horizontal
    /// placements use the transposed size.
    #[must_use]
    pub const fn swap(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Returns true if the width is a real, positive constraint.
    ///
    /// Both the unmeasured `0` and the unconstrained `-1` report `false`.
    #[must_use]
    pub const fn is_constrained_width(&self) -> bool {
        self.width > 0.0
    }

    /// Returns true if the height is a real, positive constraint.
    #[must_use]
    pub const fn is_constrained_height(&self) -> bool {
        self.height > 0.0
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle in absolute screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Rect {
    /// Creates a new [`Rect`].
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Creates a zero-sized rectangle at (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Returns the midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Returns a copy shifted horizontally by `dx`.
    #[must_use]
    pub const fn offset_x(self, dx: f32) -> Self {
        Self::new(self.x + dx, self.y, self.width, self.height)
    }
}

// ============================================================================
// Insets
// ============================================================================

/// Margins the tooltip content never intrudes into, one per screen edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Distance from the top edge.
    pub top: f32,
    /// Distance from the left edge.
    pub left: f32,
    /// Distance from the right edge.
    pub right: f32,
    /// Distance from the bottom edge.
    pub bottom: f32,
}

impl Default for Insets {
    fn default() -> Self {
        Self::DEFAULT_DISPLAY
    }
}

impl Insets {
    /// The display insets used when nothing else is configured: 24 on every side.
    pub const DEFAULT_DISPLAY: Self = Self::all(24.0);

    /// Creates insets with explicit edges.
    #[must_use]
    pub const fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of the left and right insets.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Shallow-merges `overrides` on top of `self`.
    ///
    /// Only the edges present in `overrides` replace the current values.
    #[must_use]
    pub fn merge(self, overrides: PartialInsets) -> Self {
        Self {
            top: overrides.top.unwrap_or(self.top),
            left: overrides.left.unwrap_or(self.left),
            right: overrides.right.unwrap_or(self.right),
            bottom: overrides.bottom.unwrap_or(self.bottom),
        }
    }
}

/// A user-supplied inset record where every edge is optional.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartialInsets {
    /// Optional top inset.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub top: Option<f32>,
    /// Optional left inset.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub left: Option<f32>,
    /// Optional right inset.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub right: Option<f32>,
    /// Optional bottom inset.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bottom: Option<f32>,
}

impl PartialInsets {
    /// An override that changes nothing.
    pub const NONE: Self = Self {
        top: None,
        left: None,
        right: None,
        bottom: None,
    };

    /// Sets the top inset.
    #[must_use]
    pub const fn top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    /// Sets the left inset.
    #[must_use]
    pub const fn left(mut self, value: f32) -> Self {
        self.left = Some(value);
        self
    }

    /// Sets the right inset.
    #[must_use]
    pub const fn right(mut self, value: f32) -> Self {
        self.right = Some(value);
        self
    }

    /// Sets the bottom inset.
    #[must_use]
    pub const fn bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }
}
