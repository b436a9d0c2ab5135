//! Style descriptors for `WaterUI` tooltips.
//!
//! The placement engine answers *where* a tooltip goes; this crate turns that
//! answer into the descriptors a backend draws:
//!
//! - a full-screen **container** that stays hidden until measuring is done,
//! - a tinted **background** padded by the display insets,
//! - the positioned **tooltip** wrapper that leaves room for the arrow,
//! - the **content** bubble,
//! - the **arrow**, a bordered box whose only colored border forms a wedge.
//!
//! Colors are plain sRGB values with an opacity and can be parsed from the
//! `#RRGGBB`, `rgb(...)` and `rgba(...)` notations.

mod color;
pub use color::{Color, ColorParseError};
mod parse;

pub mod projector;
pub use projector::{
    ArrowStyle, BackgroundStyle, ContainerStyle, ContentOverrides, ContentStyle, Rotation,
    Shadow, StyleInput, TooltipFrameStyle, TooltipStyles, project,
};
