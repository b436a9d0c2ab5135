#![doc = include_str!("../README.md")]

pub mod config;
pub mod controller;
/// Error type shared by the controller and configuration layer.
pub mod error;
pub mod logging;
pub mod screen;
pub mod task;

#[doc(inline)]
pub use config::TooltipConfig;
#[doc(inline)]
pub use controller::{
    ChildDuplicate, Interaction, MeasureRequest, RenderSnapshot, SCREEN_CHANGE_SETTLE_DELAY,
    TooltipController, TooltipProps,
};
pub use error::{Error, Result};
pub use screen::{ScreenBroadcaster, ScreenSizeProvider, ScreenSubscription};
pub use task::{Deferral, QueueScheduler, Scheduler, TaskHandle, Ticket};

pub use waterui_tooltip_geometry as geometry;
pub use waterui_tooltip_style as style;

#[doc(inline)]
pub use geometry::{Insets, PartialInsets, Placement, Point, Rect, Size};
#[doc(inline)]
pub use style::{Color, ContentOverrides, TooltipStyles};

#[cfg(test)]
mod tests;
