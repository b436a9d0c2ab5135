//! Projection of a placement result onto drawable style descriptors.
//!
//! # Arrow construction
//!
//! The arrow is a box whose four borders meet in the middle. Every border is
//! transparent except the top one, which is painted with the content
//! background and therefore forms a downward wedge. The box is then rotated
//! to point at the trigger. It is drawn 2pt larger than the configured arrow
//! so no seam shows between arrow and bubble while the tooltip is scaled.

use waterui_tooltip_geometry::{GeometryResult, Insets, Placement, Point, Size};

use crate::Color;

/// Corner radius of the content bubble.
const CONTENT_BORDER_RADIUS: f32 = 12.0;
/// Inner padding of the content bubble.
const CONTENT_PADDING: f32 = 8.0;
/// Stacking order of the overlay container.
const CONTAINER_Z_INDEX: i32 = 500;
/// Growth applied to the arrow box on each axis.
const ARROW_OVERDRAW: f32 = 2.0;

/// Everything the projector needs besides the geometry itself.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleInput {
    /// Output of the placement engine.
    pub geometry: GeometryResult,
    /// The effective placement the tooltip is shown with.
    ///
    /// This can differ from `geometry.placement`: a centered tooltip with a
    /// trigger is laid out by the top algorithm but drawn as centered.
    pub placement: Placement,
    /// Arrow size as configured, not transposed.
    pub arrow_size: Size,
    /// Display insets.
    pub insets: Insets,
    /// Tint of the full-screen backdrop.
    pub background_color: Color,
    /// User overrides for the content bubble.
    pub content: ContentOverrides,
    /// Whether both the trigger and the content have been measured.
    pub measurements_finished: bool,
    /// Vertical offset applied to the whole overlay.
    pub top_adjustment: f32,
    /// Suppresses the drop shadow under the bubble.
    pub disable_shadow: bool,
}

/// User overrides applied on top of the default content style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContentOverrides {
    /// Bubble color. The arrow follows it.
    pub background: Option<Color>,
    /// Corner radius.
    pub border_radius: Option<f32>,
    /// Inner padding.
    pub padding: Option<f32>,
    /// Fixed width, replacing the computed one.
    pub width: Option<f32>,
    /// Fixed height, replacing the computed one.
    pub height: Option<f32>,
}

/// The five descriptor groups that make up a tooltip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TooltipStyles {
    /// Full-screen container.
    pub container: ContainerStyle,
    /// Tinted backdrop.
    pub background: BackgroundStyle,
    /// Positioned wrapper around arrow and content.
    pub tooltip: TooltipFrameStyle,
    /// The content bubble.
    pub content: ContentStyle,
    /// The arrow wedge.
    pub arrow: ArrowStyle,
}

/// Full-screen overlay container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContainerStyle {
    /// Whether the overlay is drawn opaque. It stays invisible while measuring.
    pub visible: bool,
    /// Offset from the top of the screen, when adjusted.
    pub top: Option<f32>,
    /// Stacking order.
    pub z_index: i32,
}

/// Backdrop filling the screen behind the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BackgroundStyle {
    /// Padding equal to the display insets.
    pub padding: Insets,
    /// Backdrop tint.
    pub color: Color,
}

/// Drop shadow under the bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shadow {
    /// Shadow color, including opacity.
    pub color: Color,
    /// Offset from the bubble.
    pub offset: Point,
    /// Blur radius.
    pub radius: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK.with_opacity(0.4),
            offset: Point::new(0.0, 2.0),
            radius: 3.0,
        }
    }
}

/// Absolutely positioned wrapper holding arrow and content.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TooltipFrameStyle {
    /// Top edge in screen coordinates.
    pub top: f32,
    /// Left edge in screen coordinates.
    pub left: f32,
    /// Room reserved for the arrow on the trigger side.
    pub padding: Insets,
    /// Drop shadow, unless disabled.
    pub shadow: Option<Shadow>,
}

/// The content bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContentStyle {
    /// Fixed width, or `None` to size naturally.
    pub width: Option<f32>,
    /// Fixed height, or `None` to size naturally.
    pub height: Option<f32>,
    /// Corner radius.
    pub border_radius: f32,
    /// Inner padding.
    pub padding: f32,
    /// Bubble color.
    pub background: Color,
}

/// Rotation applied to the arrow box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rotation {
    /// 0 degrees, wedge pointing down.
    None,
    /// 180 degrees, wedge pointing up.
    Half,
    /// -90 degrees, wedge pointing right.
    CounterClockwise,
    /// 90 degrees, wedge pointing left.
    Clockwise,
}

impl Rotation {
    /// Returns the rotation used for a placement.
    #[must_use]
    pub const fn for_placement(placement: Placement) -> Self {
        match placement {
            Placement::Bottom => Self::Half,
            Placement::Left => Self::CounterClockwise,
            Placement::Right => Self::Clockwise,
            Placement::Top | Placement::Center => Self::None,
        }
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub const fn degrees(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Half => 180.0,
            Self::CounterClockwise => -90.0,
            Self::Clockwise => 90.0,
        }
    }
}

/// The arrow box, positioned relative to the tooltip wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrowStyle {
    /// Left edge relative to the wrapper.
    pub left: f32,
    /// Top edge relative to the wrapper.
    pub top: f32,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
    /// Border widths; together they fill the box.
    pub border_widths: Insets,
    /// Color of the top border. All other borders are transparent.
    pub border_top_color: Color,
    /// Rotation pointing the wedge at the trigger.
    pub rotation: Rotation,
}

fn arrow_style(input: &StyleInput, color: Color) -> ArrowStyle {
    let StyleInput {
        geometry,
        placement,
        arrow_size,
        ..
    } = *input;

    let width = arrow_size.width + ARROW_OVERDRAW;
    let height = arrow_size.height * 2.0 + ARROW_OVERDRAW;
    let margin_top = if placement == Placement::Bottom {
        arrow_size.height
    } else {
        0.0
    };
    let margin_left = if placement == Placement::Right {
        arrow_size.height
    } else {
        0.0
    };

    ArrowStyle {
        left: geometry.anchor_point.x - geometry.tooltip_origin.x - (width / 2.0 - margin_left),
        top: geometry.anchor_point.y - geometry.tooltip_origin.y - (height / 2.0 - margin_top),
        width,
        height,
        border_widths: Insets::new(height / 2.0, width / 2.0, width / 2.0, height / 2.0),
        border_top_color: color,
        rotation: Rotation::for_placement(placement),
    }
}

fn frame_style(input: &StyleInput) -> TooltipFrameStyle {
    let origin = input.geometry.tooltip_origin;
    let arrow = input.arrow_size.height;
    let none = Insets::all(0.0);

    let (top, left, padding) = match input.placement {
        Placement::Bottom => (origin.y - arrow, origin.x, Insets { top: arrow, ..none }),
        Placement::Top => (origin.y, origin.x, Insets { bottom: arrow, ..none }),
        Placement::Right => (origin.y, origin.x - arrow, Insets { left: arrow, ..none }),
        Placement::Left => (origin.y, origin.x, Insets { right: arrow, ..none }),
        Placement::Center => (origin.y, origin.x, none),
    };

    TooltipFrameStyle {
        top,
        left,
        padding,
        shadow: (!input.disable_shadow).then(Shadow::default),
    }
}

fn content_style(input: &StyleInput) -> ContentStyle {
    let adjusted = input.geometry.adjusted_content_size;
    let overrides = input.content;

    // -1 (natural size) and 0 (unmeasured) leave the dimension open.
    ContentStyle {
        width: overrides
            .width
            .or_else(|| adjusted.is_constrained_width().then_some(adjusted.width)),
        height: overrides
            .height
            .or_else(|| adjusted.is_constrained_height().then_some(adjusted.height)),
        border_radius: overrides.border_radius.unwrap_or(CONTENT_BORDER_RADIUS),
        padding: overrides.padding.unwrap_or(CONTENT_PADDING),
        background: overrides.background.unwrap_or(Color::WHITE),
    }
}

/// Projects a placement result onto the five descriptor groups.
#[must_use]
pub fn project(input: &StyleInput) -> TooltipStyles {
    let content = content_style(input);
    let adjusted = input.geometry.adjusted_content_size;

    TooltipStyles {
        container: ContainerStyle {
            visible: adjusted.width != 0.0 && input.measurements_finished,
            top: (input.top_adjustment != 0.0).then_some(input.top_adjustment),
            z_index: CONTAINER_Z_INDEX,
        },
        background: BackgroundStyle {
            padding: input.insets,
            color: input.background_color,
        },
        tooltip: frame_style(input),
        arrow: arrow_style(input, content.background),
        content,
    }
}
