//! Controller scenarios, driven the way a backend would drive them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    Interaction, PartialInsets, Placement, Point, QueueScheduler, Rect,
    SCREEN_CHANGE_SETTLE_DELAY, ScreenBroadcaster, ScreenSizeProvider, Size, Ticket,
    TooltipConfig, TooltipController,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

const BUTTON: Rect = Rect::new(150.0, 100.0, 100.0, 40.0);
const CONTENT: Size = Size::new(120.0, 60.0);

fn screen() -> ScreenBroadcaster {
    ScreenBroadcaster::new(Size::new(400.0, 800.0))
}

fn hidden(
    config: TooltipConfig,
    has_child: bool,
    screen: &ScreenBroadcaster,
) -> TooltipController<QueueScheduler> {
    TooltipController::new(config, has_child, false, screen, QueueScheduler::new())
}

fn show(controller: &mut TooltipController<QueueScheduler>) {
    let mut props = *controller.props();
    props.visible = true;
    controller.set_props(props);
}

fn hide(controller: &mut TooltipController<QueueScheduler>) {
    let mut props = *controller.props();
    props.visible = false;
    controller.set_props(props);
}

/// Pumps the scheduler once and answers every measurement request with `rect`.
fn pump(controller: &mut TooltipController<QueueScheduler>, elapsed: Duration, rect: Rect) -> usize {
    let mut requests = 0;
    for ticket in controller.scheduler_mut().advance(elapsed) {
        if let Some(request) = controller.run_deferred(ticket) {
            requests += 1;
            controller.child_measured(request, Some(rect));
        }
    }
    requests
}

fn counting_close() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = count.clone();
    (count, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// Presentation
// ============================================================================

#[test]
fn test_top_tooltip_is_placed_after_both_measurements() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), true, &screen);

    show(&mut tooltip);
    assert!(tooltip.has_pending_task());
    assert_eq!(pump(&mut tooltip, Duration::ZERO, BUTTON), 1);
    assert!(!tooltip.measurements_finished());

    tooltip.content_measured(CONTENT);
    assert!(tooltip.measurements_finished());
    assert_eq!(tooltip.tooltip_origin(), Point::new(140.0, 28.0));
    assert_eq!(tooltip.anchor_point(), Point::new(200.0, 96.0));
    assert_eq!(tooltip.adjusted_content_size(), CONTENT);

    let snapshot = tooltip.render();
    assert!(snapshot.show_tooltip);
    assert!(snapshot.use_modal);
    assert!(snapshot.show_arrow);
    assert!(snapshot.styles.container.visible);
    assert_eq!(snapshot.styles.arrow.left, 51.0);
    assert_eq!(snapshot.styles.arrow.top, 59.0);
}

#[test]
fn test_content_measured_first_waits_for_trigger() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), true, &screen);

    tooltip.content_measured(CONTENT);
    assert!(!tooltip.measurements_finished());
    assert!(!tooltip.styles().container.visible);

    let request = tooltip.measure_child_rect().unwrap();
    tooltip.child_measured(request, Some(BUTTON));
    assert!(tooltip.measurements_finished());
    assert_eq!(tooltip.tooltip_origin(), Point::new(140.0, 28.0));
}

#[test]
fn test_childless_center_is_centered_on_screen() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default(), false, &screen);
    assert_eq!(tooltip.placement(), Placement::Center);

    show(&mut tooltip);
    // No trigger: placement happens without a measurement request.
    assert_eq!(pump(&mut tooltip, Duration::ZERO, BUTTON), 0);
    assert_eq!(tooltip.child_rect(), Rect::new(200.0, 776.0, 1.0, 1.0));

    tooltip.content_measured(CONTENT);
    assert_eq!(tooltip.tooltip_origin(), Point::new(140.0, 370.0));
    assert_eq!(tooltip.anchor_point(), Point::new(200.5, 776.0));
    assert_eq!(tooltip.adjusted_content_size(), Size::new(-1.0, -1.0));

    let snapshot = tooltip.render();
    assert!(!snapshot.show_arrow);
    assert_eq!(snapshot.child_duplicate, None);
    assert_eq!(snapshot.styles.content.width, None);
    assert!(snapshot.styles.container.visible);
}

#[test]
fn test_childless_top_hangs_from_top_edge() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), false, &screen);
    assert_eq!(tooltip.placement(), Placement::Bottom);

    show(&mut tooltip);
    pump(&mut tooltip, Duration::ZERO, BUTTON);
    tooltip.content_measured(CONTENT);

    assert_eq!(tooltip.child_rect(), Rect::new(200.0, 24.0, 1.0, 1.0));
    assert_eq!(tooltip.tooltip_origin().y, 37.0);
    assert_eq!(tooltip.styles().tooltip.top, 29.0);
}

#[test]
fn test_failed_measurement_falls_back_to_childless_rect() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), true, &screen);

    let request = tooltip.measure_child_rect().unwrap();
    assert!(tooltip.is_measuring_child());
    // A second request while the first is in flight is dropped.
    assert!(tooltip.measure_child_rect().is_none());

    tooltip.child_measured(request, None);
    assert!(!tooltip.is_measuring_child());
    assert_eq!(tooltip.child_rect(), Rect::new(200.0, 776.0, 1.0, 1.0));
}

#[test]
fn test_child_duplicate_follows_configuration() {
    let screen = screen();
    let config = TooltipConfig::default()
        .placement(Placement::Bottom)
        .horizontal_adjustment(10.0)
        .allow_child_interaction(false);
    let mut tooltip = hidden(config, true, &screen);

    let request = tooltip.measure_child_rect().unwrap();
    tooltip.child_measured(request, Some(BUTTON));

    let duplicate = tooltip.render().child_duplicate.unwrap();
    assert_eq!(duplicate.rect, Rect::new(160.0, 100.0, 100.0, 40.0));
    assert!(!duplicate.pointer_events);

    let screen = self::screen();
    let tooltip = hidden(TooltipConfig::default().show_child_in_tooltip(false), true, &screen);
    assert_eq!(tooltip.render().child_duplicate, None);
}

// ============================================================================
// Props
// ============================================================================

#[test]
fn test_closing_forgets_measurements() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), true, &screen);
    show(&mut tooltip);
    pump(&mut tooltip, Duration::ZERO, BUTTON);
    tooltip.content_measured(CONTENT);
    assert!(tooltip.measurements_finished());

    hide(&mut tooltip);
    assert!(!tooltip.measurements_finished());
    assert_eq!(tooltip.adjusted_content_size(), Size::zero());
    assert!(!tooltip.has_pending_task());
    assert!(!tooltip.render().show_tooltip);
}

#[test]
fn test_prop_changes_schedule_remeasure() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default(), true, &screen);

    let mut props = *tooltip.props();
    props.content_revision += 1;
    tooltip.set_props(props);
    assert!(tooltip.has_pending_task());
    pump(&mut tooltip, Duration::ZERO, BUTTON);
    assert!(!tooltip.has_pending_task());

    props.display_insets = PartialInsets::NONE.top(48.0);
    tooltip.set_props(props);
    assert_eq!(tooltip.insets().top, 48.0);
    assert!(tooltip.has_pending_task());
    pump(&mut tooltip, Duration::ZERO, BUTTON);

    props.placement = Placement::Left;
    props.has_child = false;
    tooltip.set_props(props);
    assert_eq!(tooltip.placement(), Placement::Right);
    assert!(tooltip.has_pending_task());
    pump(&mut tooltip, Duration::ZERO, BUTTON);

    // Re-applying identical props changes nothing.
    tooltip.set_props(props);
    assert!(!tooltip.has_pending_task());
}

// ============================================================================
// Deferred Work
// ============================================================================

#[test]
fn test_superseded_deferral_never_mutates_state() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default(), true, &screen);

    show(&mut tooltip);
    let first = Ticket::new(1);
    screen.set_size(Size::new(800.0, 400.0));
    assert!(tooltip.poll_screen_changes());

    // The show-triggered measurement was superseded by the rotation.
    assert!(tooltip.run_deferred(first).is_none());
    assert!(!tooltip.is_measuring_child());
    assert!(tooltip.scheduler_mut().advance(Duration::ZERO).is_empty());

    assert!(tooltip.has_pending_task());
    assert_eq!(pump(&mut tooltip, Duration::from_millis(500), BUTTON), 1);
}

#[test]
fn test_interaction_manager_defers_measurement() {
    let screen = screen();
    let config = TooltipConfig::default().use_interaction_manager(true);
    let mut tooltip =
        TooltipController::new(config, true, true, &screen, QueueScheduler::new());

    assert!(tooltip.is_waiting_for_interactions());
    assert!(!tooltip.render().show_tooltip);

    assert!(tooltip.measure_child_rect().is_none());
    assert!(tooltip.measure_child_rect().is_none());

    let released = tooltip.scheduler_mut().interactions_settled();
    assert_eq!(released.len(), 1);
    let request = tooltip.run_deferred(released[0]).unwrap();

    tooltip.child_measured(request, Some(BUTTON));
    assert!(!tooltip.is_waiting_for_interactions());
    assert!(tooltip.render().show_tooltip);
}

// ============================================================================
// Screen Changes
// ============================================================================

#[test]
fn test_screen_change_resets_and_remeasures_after_delay() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), true, &screen);
    show(&mut tooltip);
    pump(&mut tooltip, Duration::ZERO, BUTTON);
    tooltip.content_measured(CONTENT);
    assert!(tooltip.measurements_finished());

    assert!(!tooltip.poll_screen_changes());

    screen.set_size(Size::new(600.0, 400.0));
    screen.set_size(Size::new(800.0, 400.0));
    assert!(tooltip.poll_screen_changes());

    assert_eq!(tooltip.screen(), Size::new(800.0, 400.0));
    assert_eq!(tooltip.child_rect(), Rect::zero());
    assert_eq!(tooltip.content_size(), Size::zero());
    assert_eq!(tooltip.adjusted_content_size(), Size::zero());
    assert_eq!(tooltip.anchor_point(), Point::zero());
    assert_eq!(tooltip.tooltip_origin(), Point::zero());
    assert!(!tooltip.measurements_finished());

    assert_eq!(pump(&mut tooltip, Duration::from_millis(499), BUTTON), 0);
    assert_eq!(pump(&mut tooltip, Duration::from_millis(1), BUTTON), 1);
    assert_eq!(tooltip.child_rect(), BUTTON);
}

#[test]
fn test_screen_change_discards_in_flight_measurement() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default().placement(Placement::Top), true, &screen);
    tooltip.content_measured(CONTENT);

    show(&mut tooltip);
    let ticket = tooltip.scheduler_mut().advance(Duration::ZERO)[0];
    let stale = tooltip.run_deferred(ticket).unwrap();
    assert!(tooltip.is_measuring_child());

    screen.set_size(Size::new(800.0, 400.0));
    assert!(tooltip.poll_screen_changes());
    assert!(!tooltip.is_measuring_child());

    let tickets = tooltip.scheduler_mut().advance(SCREEN_CHANGE_SETTLE_DELAY);
    assert_eq!(tickets.len(), 1);
    let fresh = tooltip.run_deferred(tickets[0]).unwrap();
    assert_ne!(fresh.epoch(), stale.epoch());

    // The pre-rotation answer arrives late and is dropped.
    tooltip.child_measured(stale, Some(BUTTON));
    assert_eq!(tooltip.child_rect(), Rect::zero());
    assert!(tooltip.is_measuring_child());
    assert!(!tooltip.measurements_finished());

    let rotated = Rect::new(350.0, 100.0, 100.0, 40.0);
    tooltip.content_measured(CONTENT);
    tooltip.child_measured(fresh, Some(rotated));
    assert_eq!(tooltip.child_rect(), rotated);
    assert!(tooltip.measurements_finished());
    assert_eq!(tooltip.tooltip_origin(), Point::new(340.0, 28.0));
}

#[test]
fn test_lost_provider_stops_tracking() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default(), true, &screen);
    drop(screen);

    assert!(!tooltip.poll_screen_changes());
    assert!(!tooltip.poll_screen_changes());
}

// ============================================================================
// Interaction
// ============================================================================

#[test]
fn test_presses_close_per_configuration() {
    let screen = screen();
    let (closed, on_close) = counting_close();
    let config = TooltipConfig::default().close_on_content_interaction(false);
    let mut tooltip = hidden(config, true, &screen).on_close(on_close);

    assert!(tooltip.press(Interaction::Background));
    assert!(!tooltip.press(Interaction::Content));
    assert!(tooltip.press(Interaction::Child));
    assert!(tooltip.press(Interaction::Dismiss));
    assert_eq!(closed.load(Ordering::SeqCst), 3);
}

#[test]
fn test_press_without_handler_only_warns() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default(), true, &screen);
    assert!(tooltip.press(Interaction::Background));
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_drop_unsubscribes_and_cancels() {
    let screen = screen();
    let mut tooltip = hidden(TooltipConfig::default(), true, &screen);
    show(&mut tooltip);
    assert_eq!(screen.subscriber_count(), 1);
    assert_eq!(tooltip.scheduler().len(), 1);

    tooltip.detach();
    assert!(!tooltip.has_pending_task());
    assert_eq!(screen.subscriber_count(), 0);
    assert!(tooltip.scheduler_mut().advance(Duration::ZERO).is_empty());

    let tooltip = hidden(TooltipConfig::default(), true, &screen);
    assert_eq!(screen.subscriber_count(), 1);
    drop(tooltip);
    assert_eq!(screen.subscriber_count(), 0);
    assert_eq!(screen.current(), Size::new(400.0, 800.0));
}
