//! Property-based invariant tests for the placement engine.
//!
//! Inputs are whole numbers of points so the arithmetic is exact:
//!
//! 1. Adjusted content never grows past the requested content.
//! 2. Center placement reports `-1` exactly on the axes that fit.
//! 3. Vertical placements keep the content inside the horizontal insets.
//! 4. Horizontal placements keep the content inside the vertical insets.
//! 5. The arrow anchor keeps `8 + |arrow.width - arrow.height|` from both
//!    inset boundaries on the cross axis (default 16x8 arrow).
//! 6. Childless tooltips lay out with the inverted placement.
//! 7. Identical inputs produce identical outputs.

use proptest::prelude::*;
use waterui_tooltip_geometry::{
    ARROW_EDGE_MARGIN, GeometryInput, Insets, Placement, Rect, Size, childless_rect,
    compute_geometry,
};

const EPSILON: f32 = 1e-3;
const ARROW: Size = Size::new(16.0, 8.0);

// ── Helpers ─────────────────────────────────────────────────────────────

fn placement_strategy() -> impl Strategy<Value = Placement> {
    prop_oneof![
        Just(Placement::Top),
        Just(Placement::Bottom),
        Just(Placement::Left),
        Just(Placement::Right),
        Just(Placement::Center),
    ]
}

fn insets_strategy() -> impl Strategy<Value = Insets> {
    (0u16..=40, 0u16..=40, 0u16..=40, 0u16..=40).prop_map(|(t, l, r, b)| {
        Insets::new(f32::from(t), f32::from(l), f32::from(r), f32::from(b))
    })
}

fn input_strategy() -> impl Strategy<Value = GeometryInput> {
    (200u16..=1200, 200u16..=1200, insets_strategy(), 0u16..=12)
        .prop_flat_map(|(screen_w, screen_h, insets, spacing)| {
            (
                Just((screen_w, screen_h, insets, spacing)),
                0..screen_w,
                0..screen_h,
                1u16..=200,
                1u16..=200,
                1u16..=1400,
                1u16..=1400,
            )
        })
        .prop_map(
            |((screen_w, screen_h, insets, spacing), x, y, w, h, content_w, content_h)| {
                GeometryInput {
                    child_rect: Rect::new(f32::from(x), f32::from(y), f32::from(w), f32::from(h)),
                    content_size: Size::new(f32::from(content_w), f32::from(content_h)),
                    arrow_size: ARROW,
                    insets,
                    screen: Size::new(f32::from(screen_w), f32::from(screen_h)),
                    child_content_spacing: f32::from(spacing),
                }
            },
        )
}

fn arrow_clearance() -> f32 {
    (ARROW.width - ARROW.height).abs() + ARROW_EDGE_MARGIN
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Adjusted content never grows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjusted_content_never_grows(
        input in input_strategy(),
        placement in placement_strategy(),
        has_child in any::<bool>(),
    ) {
        let geometry = compute_geometry(placement, has_child, &input);
        prop_assert!(
            geometry.adjusted_content_size.width <= input.content_size.width,
            "width grew: {:?} -> {:?}", input.content_size, geometry.adjusted_content_size
        );
        prop_assert!(
            geometry.adjusted_content_size.height <= input.content_size.height,
            "height grew: {:?} -> {:?}", input.content_size, geometry.adjusted_content_size
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Center sentinel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn center_reports_sentinel_on_fitting_axes(input in input_strategy()) {
        let geometry = compute_geometry(Placement::Center, false, &input);
        let usable_width = input.screen.width - input.insets.horizontal();
        let usable_height = input.screen.height - input.insets.vertical();

        if input.content_size.width < usable_width {
            prop_assert_eq!(geometry.adjusted_content_size.width, -1.0);
        } else {
            prop_assert_eq!(geometry.adjusted_content_size.width, usable_width);
        }
        if input.content_size.height < usable_height {
            prop_assert_eq!(geometry.adjusted_content_size.height, -1.0);
        } else {
            prop_assert_eq!(geometry.adjusted_content_size.height, usable_height);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. / 4. Content stays within the cross-axis insets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn vertical_placements_respect_horizontal_insets(
        input in input_strategy(),
        placement in prop_oneof![Just(Placement::Top), Just(Placement::Bottom)],
    ) {
        let geometry = compute_geometry(placement, true, &input);
        let origin = geometry.tooltip_origin;
        let width = geometry.adjusted_content_size.width;
        prop_assume!(width > 0.0);

        prop_assert!(origin.x >= input.insets.left - EPSILON, "{geometry:?}");
        prop_assert!(
            origin.x + width <= input.screen.width - input.insets.right + EPSILON,
            "{geometry:?}"
        );
    }

    #[test]
    fn horizontal_placements_respect_vertical_insets(
        input in input_strategy(),
        placement in prop_oneof![Just(Placement::Left), Just(Placement::Right)],
    ) {
        let geometry = compute_geometry(placement, true, &input);
        let origin = geometry.tooltip_origin;
        let height = geometry.adjusted_content_size.height;
        prop_assume!(height > 0.0);

        prop_assert!(origin.y >= input.insets.top - EPSILON, "{geometry:?}");
        prop_assert!(
            origin.y + height <= input.screen.height - input.insets.bottom + EPSILON,
            "{geometry:?}"
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Arrow anchor clearance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arrow_anchor_keeps_clear_of_insets(
        input in input_strategy(),
        placement in prop_oneof![
            Just(Placement::Top),
            Just(Placement::Bottom),
            Just(Placement::Left),
            Just(Placement::Right),
        ],
    ) {
        let geometry = compute_geometry(placement, true, &input);
        let clearance = arrow_clearance();
        let (anchor, near, far) = if placement.is_vertical() {
            (
                geometry.anchor_point.x,
                input.insets.left,
                input.screen.width - input.insets.right,
            )
        } else {
            (
                geometry.anchor_point.y,
                input.insets.top,
                input.screen.height - input.insets.bottom,
            )
        };

        prop_assert!(anchor >= near + clearance - EPSILON, "{placement:?} {geometry:?}");
        prop_assert!(anchor <= far - clearance + EPSILON, "{placement:?} {geometry:?}");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Childless inversion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn childless_tooltips_use_inverted_placement(
        input in input_strategy(),
        placement in placement_strategy(),
    ) {
        let effective = placement.effective(false);
        prop_assert_eq!(effective, placement.invert());

        let rect = childless_rect(input.insets, input.screen, effective);
        prop_assert_eq!(rect.size(), Size::new(1.0, 1.0));

        let geometry = compute_geometry(
            effective,
            false,
            &GeometryInput { child_rect: rect, ..input },
        );
        prop_assert_eq!(geometry.placement, effective);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Purity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_inputs_give_identical_outputs(
        input in input_strategy(),
        placement in placement_strategy(),
        has_child in any::<bool>(),
    ) {
        let first = compute_geometry(placement, has_child, &input);
        let second = compute_geometry(placement, has_child, &input);
        prop_assert_eq!(first, second);
    }
}
