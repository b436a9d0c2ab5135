#![no_std]
//! Placement geometry for `WaterUI` tooltips.
//!
//! Given the on-screen rectangle of a trigger view, the natural size of the
//! tooltip content, the screen size, the arrow size and the display insets,
//! the functions in [`engine`] decide
//!
//! - where the content box is drawn ([`GeometryResult::tooltip_origin`]),
//! - where the arrow tip touches the trigger ([`GeometryResult::anchor_point`]),
//! - how large the content may be once it is clamped to the screen
//!   ([`GeometryResult::adjusted_content_size`]).
//!
//! Every function here is pure: identical inputs always produce identical
//! outputs and nothing is cached between calls.
//!
//! # Logical Pixels (Points)
//!
//! All values are **logical pixels**, the same unit used by the rest of the
//! `WaterUI` layout system. Native backends convert to physical pixels.
//!
//! # Example
//!
//! ```
//! use waterui_tooltip_geometry::{
//!     GeometryInput, Insets, Placement, Rect, Size, compute_geometry,
//! };
//!
//! let input = GeometryInput {
//!     child_rect: Rect::new(150.0, 100.0, 100.0, 40.0),
//!     content_size: Size::new(120.0, 60.0),
//!     arrow_size: Size::new(16.0, 8.0),
//!     insets: Insets::DEFAULT_DISPLAY,
//!     screen: Size::new(400.0, 800.0),
//!     child_content_spacing: 4.0,
//! };
//!
//! let geometry = compute_geometry(Placement::Top, true, &input);
//! assert_eq!(geometry.tooltip_origin.y, 28.0);
//! assert_eq!(geometry.anchor_point.x, 200.0);
//! ```

pub mod engine;
pub mod placement;
pub mod primitives;

pub use engine::{
    ARROW_EDGE_MARGIN, GeometryInput, GeometryResult, childless_rect, compute_bottom_geometry,
    compute_center_geometry, compute_geometry, compute_left_geometry, compute_right_geometry,
    compute_top_geometry,
};
pub use placement::Placement;
pub use primitives::{Insets, PartialInsets, Point, Rect, Size};
