use thiserror::Error;
use waterui_tooltip_style::ColorParseError;

/// Errors surfaced by the tooltip controller and its configuration layer.
///
/// Placement and style projection are total and never fail; only the
/// surrounding plumbing can.
#[derive(Debug, Error)]
pub enum Error {
    /// The JSON configuration could not be decoded.
    #[error("invalid tooltip configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),
    /// The screen-size provider behind a subscription is gone.
    #[error("screen size subscription closed")]
    SubscriptionClosed,
}

/// Result type defaulting to the tooltip [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
