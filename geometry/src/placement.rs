//! The side of the trigger a tooltip is drawn on.

/// Where the tooltip bubble sits relative to its trigger view.
///
/// Without a trigger the directional placements refer to the screen edge
/// instead, which is why [`Placement::invert`] exists: a childless tooltip
/// placed at the top hangs down from the top edge and is therefore laid out
/// like a bottom placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// To the left of the trigger.
    Left,
    /// To the right of the trigger.
    Right,
    /// Centered on screen, without an arrow.
    #[default]
    Center,
}

impl Placement {
    /// Returns the opposite placement. [`Placement::Center`] maps to itself.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    /// Resolves the placement actually used for layout.
    ///
    /// Trigger-less tooltips use the inverted placement.
    #[must_use]
    pub const fn effective(self, has_child: bool) -> Self {
        if has_child { self } else { self.invert() }
    }

    /// Returns true for placements whose arrow points along the y-axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns true for placements whose arrow points along the x-axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Placement; 5] = [
        Placement::Top,
        Placement::Bottom,
        Placement::Left,
        Placement::Right,
        Placement::Center,
    ];

    #[test]
    fn test_invert_is_involution() {
        for placement in ALL {
            assert_eq!(placement.invert().invert(), placement);
        }
        assert_eq!(Placement::Top.invert(), Placement::Bottom);
        assert_eq!(Placement::Left.invert(), Placement::Right);
        assert_eq!(Placement::Center.invert(), Placement::Center);
    }

    #[test]
    fn test_effective_only_inverts_without_child() {
        assert_eq!(Placement::Top.effective(true), Placement::Top);
        assert_eq!(Placement::Top.effective(false), Placement::Bottom);
        assert_eq!(Placement::Right.effective(false), Placement::Left);
        assert_eq!(Placement::Center.effective(false), Placement::Center);
    }

    #[test]
    fn test_axis_classification() {
        assert!(Placement::Top.is_vertical());
        assert!(Placement::Bottom.is_vertical());
        assert!(Placement::Left.is_horizontal());
        assert!(!Placement::Center.is_vertical());
        assert!(!Placement::Center.is_horizontal());
    }
}
