//! Static tooltip configuration.
//!
//! Every option has a default, so a configuration can be built in code with
//! the builder methods or decoded from a partial JSON document:
//!
//! ```
//! use waterui_tooltip::{Placement, TooltipConfig};
//!
//! let config = TooltipConfig::from_json(r#"{ "placement": "bottom" }"#).unwrap();
//! assert_eq!(config.placement, Placement::Bottom);
//! assert_eq!(config.child_content_spacing, 4.0);
//! ```

use serde::{Deserialize, Serialize};
use waterui_tooltip_geometry::{Insets, PartialInsets, Placement, Size};
use waterui_tooltip_style::{Color, ContentOverrides};

use crate::Result;

/// Options recognized by a tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
#[allow(clippy::struct_excessive_bools)]
pub struct TooltipConfig {
    /// Requested placement. Inverted when the tooltip has no trigger.
    pub placement: Placement,
    /// Arrow size for vertical placements; transposed for horizontal ones.
    pub arrow_size: Size,
    /// Edges overriding the default 24pt display insets.
    pub display_insets: PartialInsets,
    /// Gap between the trigger and the arrow tip.
    pub child_content_spacing: f32,
    /// Vertical offset applied to the whole overlay.
    pub top_adjustment: f32,
    /// Horizontal offset applied to the duplicated trigger.
    pub horizontal_adjustment: f32,
    /// Tint of the full-screen backdrop.
    pub background_color: Color,
    /// Overrides for the content bubble.
    pub content_style: ContentOverrides,
    /// Suppresses the drop shadow under the bubble.
    pub disable_shadow: bool,
    /// Defers measuring the trigger until pending interactions settle.
    pub use_interaction_manager: bool,
    /// Presents the overlay in a modal layer.
    pub use_modal: bool,
    /// Draws a copy of the trigger above the backdrop.
    pub show_child_in_tooltip: bool,
    /// Lets the duplicated trigger receive pointer events.
    pub allow_child_interaction: bool,
    /// Closes when the duplicated trigger is touched.
    pub close_on_child_interaction: bool,
    /// Closes when the content bubble is pressed.
    pub close_on_content_interaction: bool,
    /// Closes when the backdrop is pressed.
    pub close_on_background_interaction: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Center,
            arrow_size: Size::new(16.0, 8.0),
            display_insets: PartialInsets::NONE,
            child_content_spacing: 4.0,
            top_adjustment: 0.0,
            horizontal_adjustment: 0.0,
            background_color: Color::rgba(0, 0, 0, 0.5),
            content_style: ContentOverrides::default(),
            disable_shadow: false,
            use_interaction_manager: false,
            use_modal: true,
            show_child_in_tooltip: true,
            allow_child_interaction: true,
            close_on_child_interaction: true,
            close_on_content_interaction: true,
            close_on_background_interaction: true,
        }
    }
}

impl TooltipConfig {
    /// Decodes a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the document is
    /// malformed or a value has the wrong type, including unparseable colors.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display insets after merging the configured edges over the defaults.
    #[must_use]
    pub fn resolved_insets(&self) -> Insets {
        Insets::DEFAULT_DISPLAY.merge(self.display_insets)
    }

    /// Sets the requested placement.
    #[must_use]
    pub const fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the arrow size.
    #[must_use]
    pub const fn arrow_size(mut self, size: Size) -> Self {
        self.arrow_size = size;
        self
    }

    /// Overrides some of the display insets.
    #[must_use]
    pub const fn display_insets(mut self, insets: PartialInsets) -> Self {
        self.display_insets = insets;
        self
    }

    /// Sets the gap between trigger and arrow.
    #[must_use]
    pub const fn child_content_spacing(mut self, spacing: f32) -> Self {
        self.child_content_spacing = spacing;
        self
    }

    /// Sets the vertical overlay offset.
    #[must_use]
    pub const fn top_adjustment(mut self, offset: f32) -> Self {
        self.top_adjustment = offset;
        self
    }

    /// Sets the horizontal offset of the duplicated trigger.
    #[must_use]
    pub const fn horizontal_adjustment(mut self, offset: f32) -> Self {
        self.horizontal_adjustment = offset;
        self
    }

    /// Sets the backdrop tint.
    #[must_use]
    pub const fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the backdrop tint from a CSS-like color string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Color`](crate::Error::Color) if `color` is not
    /// `#RRGGBB`, `rgb(...)`, `rgba(...)` or `transparent`.
    pub fn background_color_str(mut self, color: &str) -> Result<Self> {
        self.background_color = color.parse()?;
        Ok(self)
    }

    /// Sets the content bubble overrides.
    #[must_use]
    pub const fn content_style(mut self, overrides: ContentOverrides) -> Self {
        self.content_style = overrides;
        self
    }

    /// Enables or disables the drop shadow.
    #[must_use]
    pub const fn disable_shadow(mut self, disable: bool) -> Self {
        self.disable_shadow = disable;
        self
    }

    /// Defers trigger measurement until interactions settle.
    #[must_use]
    pub const fn use_interaction_manager(mut self, enable: bool) -> Self {
        self.use_interaction_manager = enable;
        self
    }

    /// Presents the overlay in a modal layer.
    #[must_use]
    pub const fn use_modal(mut self, enable: bool) -> Self {
        self.use_modal = enable;
        self
    }

    /// Draws a copy of the trigger above the backdrop.
    #[must_use]
    pub const fn show_child_in_tooltip(mut self, show: bool) -> Self {
        self.show_child_in_tooltip = show;
        self
    }

    /// Lets the duplicated trigger receive pointer events.
    #[must_use]
    pub const fn allow_child_interaction(mut self, allow: bool) -> Self {
        self.allow_child_interaction = allow;
        self
    }

    /// Closes when the duplicated trigger is touched.
    #[must_use]
    pub const fn close_on_child_interaction(mut self, close: bool) -> Self {
        self.close_on_child_interaction = close;
        self
    }

    /// Closes when the content bubble is pressed.
    #[must_use]
    pub const fn close_on_content_interaction(mut self, close: bool) -> Self {
        self.close_on_content_interaction = close;
        self
    }

    /// Closes when the backdrop is pressed.
    #[must_use]
    pub const fn close_on_background_interaction(mut self, close: bool) -> Self {
        self.close_on_background_interaction = close;
        self
    }
}
