//! The tooltip presentation controller.
//!
//! [`TooltipController`] owns everything between "the host wants a tooltip"
//! and "here is what to draw": it decides when the trigger has to be
//! measured, reacts to rotations, feeds measurements into the placement
//! engine and projects the result onto style descriptors.
//!
//! The controller is driven entirely by the host. It never blocks, never
//! spawns and never reads the clock; all it needs is a [`Scheduler`] for
//! deferred re-measurements and a [`ScreenSizeProvider`].
//!
//! # Lifecycle
//!
//! ```text
//! set_props(visible) ──► NextTick ──► measure_child_rect ──► MeasureRequest
//!                                                                  │
//!     content_measured(size) ──► compute_geometry ◄── child_measured(request, rect)
//! ```
//!
//! A screen change resets all measured state and re-measures after 500 ms,
//! giving the rotation time to finish.

use core::fmt;
use core::mem;
use std::time::Duration;

use tracing::{debug, trace, warn};
use waterui_tooltip_geometry::{
    GeometryInput, GeometryResult, Insets, PartialInsets, Placement, Point, Rect, Size,
    childless_rect, compute_geometry,
};
use waterui_tooltip_style::{StyleInput, TooltipStyles, project};

use crate::Error;
use crate::config::TooltipConfig;
use crate::screen::{ScreenSizeProvider, ScreenSubscription};
use crate::task::{Deferral, Scheduler, TaskHandle, Ticket};

/// Time given to a rotation to settle before re-measuring.
pub const SCREEN_CHANGE_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Properties the host may change while the tooltip is alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipProps {
    /// Whether the tooltip should be shown.
    pub visible: bool,
    /// Whether a trigger view is attached.
    pub has_child: bool,
    /// Requested placement.
    pub placement: Placement,
    /// Display inset overrides.
    pub display_insets: PartialInsets,
    /// Bumped by the host whenever the tooltip content changes.
    pub content_revision: u64,
}

impl TooltipProps {
    /// Initial properties taken from a configuration.
    #[must_use]
    pub const fn from_config(config: &TooltipConfig, has_child: bool, visible: bool) -> Self {
        Self {
            visible,
            has_child,
            placement: config.placement,
            display_insets: config.display_insets,
            content_revision: 0,
        }
    }
}

/// Asks the host to measure the trigger and report back through
/// [`TooltipController::child_measured`].
///
/// A request belongs to one screen layout. Answers to requests issued before
/// the latest screen change are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the trigger has to be measured and reported with `child_measured`"]
pub struct MeasureRequest {
    epoch: u64,
}

impl MeasureRequest {
    /// The screen layout this request was issued for.
    #[must_use]
    pub const fn epoch(self) -> u64 {
        self.epoch
    }
}

/// A user interaction the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The backdrop was pressed.
    Background,
    /// The content bubble was pressed.
    Content,
    /// The duplicated trigger was touched.
    Child,
    /// The system asked the modal to close, e.g. the Android back button.
    Dismiss,
}

/// The copy of the trigger drawn above the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildDuplicate {
    /// Where to draw it, shifted by the horizontal adjustment.
    pub rect: Rect,
    /// Whether it receives pointer events.
    pub pointer_events: bool,
}

/// Everything a backend needs to draw the tooltip in its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Whether the overlay is presented at all.
    pub show_tooltip: bool,
    /// Whether the overlay is hosted in a modal layer.
    pub use_modal: bool,
    /// Whether the arrow is drawn.
    pub show_arrow: bool,
    /// The duplicated trigger, if shown.
    pub child_duplicate: Option<ChildDuplicate>,
    /// Style descriptors for the overlay.
    pub styles: TooltipStyles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    /// Re-run the whole measurement request, including any interaction wait.
    Remeasure,
    /// Measure right away; interactions have settled.
    Measure,
}

#[derive(Debug)]
struct PendingTask {
    ticket: Ticket,
    handle: TaskHandle,
    action: DeferredAction,
}

type CloseHandler = Box<dyn FnMut() + Send>;

/// State machine behind a single tooltip.
pub struct TooltipController<S: Scheduler> {
    config: TooltipConfig,
    props: TooltipProps,
    scheduler: S,
    subscription: Option<ScreenSubscription>,
    on_close: Option<CloseHandler>,

    pending: Option<PendingTask>,
    last_ticket: Ticket,
    measure_epoch: u64,

    placement: Placement,
    insets: Insets,
    screen: Size,
    waiting_for_interactions: bool,
    is_measuring_child: bool,
    measurements_finished: bool,
    child_rect: Rect,
    content_size: Size,
    adjusted_content_size: Size,
    anchor_point: Point,
    tooltip_origin: Point,
}

impl<S: Scheduler> fmt::Debug for TooltipController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipController")
            .field("props", &self.props)
            .field("placement", &self.placement)
            .field("screen", &self.screen)
            .field("child_rect", &self.child_rect)
            .field("content_size", &self.content_size)
            .field("measurements_finished", &self.measurements_finished)
            .field("has_close_handler", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler> TooltipController<S> {
    /// Creates a controller and subscribes it to screen-size changes.
    ///
    /// The subscription lives until [`detach`](Self::detach) or drop.
    pub fn new(
        config: TooltipConfig,
        has_child: bool,
        visible: bool,
        screen: &impl ScreenSizeProvider,
        scheduler: S,
    ) -> Self {
        let props = TooltipProps::from_config(&config, has_child, visible);
        let waiting_for_interactions = visible && config.use_interaction_manager;

        debug!(
            placement = ?props.placement,
            has_child,
            visible,
            "tooltip controller created"
        );

        Self {
            placement: props.placement.effective(has_child),
            insets: Insets::DEFAULT_DISPLAY.merge(props.display_insets),
            screen: screen.current(),
            subscription: Some(screen.subscribe()),
            config,
            props,
            scheduler,
            on_close: None,
            pending: None,
            last_ticket: Ticket::new(0),
            measure_epoch: 0,
            waiting_for_interactions,
            is_measuring_child: false,
            measurements_finished: false,
            child_rect: Rect::zero(),
            content_size: Size::zero(),
            adjusted_content_size: Size::zero(),
            anchor_point: Point::zero(),
            tooltip_origin: Point::zero(),
        }
    }

    /// Sets the handler invoked when an interaction closes the tooltip.
    #[must_use]
    pub fn on_close(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    // ========================================================================
    // Props
    // ========================================================================

    /// Applies new properties.
    ///
    /// The effective placement and insets are derived again. Closing the
    /// tooltip forgets the previous measurement, and a re-measure is
    /// scheduled for the next tick when the content, the placement or the
    /// insets changed or the tooltip just became visible.
    pub fn set_props(&mut self, props: TooltipProps) {
        let previous = mem::replace(&mut self.props, props);

        self.placement = props.placement.effective(props.has_child);

        let insets = Insets::DEFAULT_DISPLAY.merge(props.display_insets);
        let insets_changed = insets != self.insets;
        self.insets = insets;

        if self.measurements_finished && !props.visible {
            self.measurements_finished = false;
            self.adjusted_content_size = Size::zero();
        }

        let content_changed = props.content_revision != previous.content_revision;
        let placement_changed = props.placement != previous.placement;
        let became_visible = props.visible && !previous.visible;

        if content_changed || placement_changed || became_visible || insets_changed {
            debug!(
                content_changed,
                placement_changed, became_visible, insets_changed, "props changed, re-measuring"
            );
            self.defer(Deferral::NextTick, DeferredAction::Remeasure);
        }
    }

    // ========================================================================
    // Measurement
    // ========================================================================

    /// Starts measuring the trigger.
    ///
    /// With the interaction manager enabled the measurement waits for
    /// interactions to settle and `None` is returned. A tooltip without a
    /// trigger is placed immediately against the screen edge.
    pub fn measure_child_rect(&mut self) -> Option<MeasureRequest> {
        if self.config.use_interaction_manager {
            self.defer(Deferral::AfterInteractions, DeferredAction::Measure);
            None
        } else {
            self.begin_measurement()
        }
    }

    fn begin_measurement(&mut self) -> Option<MeasureRequest> {
        if self.is_measuring_child {
            trace!("measurement already in flight");
            return None;
        }
        self.is_measuring_child = true;

        if self.props.has_child {
            Some(MeasureRequest {
                epoch: self.measure_epoch,
            })
        } else {
            self.place_childless();
            None
        }
    }

    fn place_childless(&mut self) {
        let rect = childless_rect(self.insets, self.screen, self.placement);
        debug!(?rect, placement = ?self.placement, "using childless placement");
        self.complete_child_measurement(rect);
    }

    /// Reports the trigger's screen rectangle for `request`.
    ///
    /// `None` means the trigger could not be measured; the tooltip then
    /// falls back to the childless placement. Answers to a request issued
    /// before the last screen change are ignored.
    pub fn child_measured(&mut self, request: MeasureRequest, rect: Option<Rect>) {
        if request.epoch != self.measure_epoch {
            trace!(
                epoch = request.epoch,
                current = self.measure_epoch,
                "ignoring measurement from before a screen change"
            );
            return;
        }

        match rect {
            Some(rect) => self.complete_child_measurement(rect),
            None => {
                debug!("trigger measurement failed");
                self.place_childless();
            }
        }
    }

    fn complete_child_measurement(&mut self, rect: Rect) {
        debug!(?rect, "trigger measured");
        self.child_rect = rect;
        self.waiting_for_interactions = false;
        self.is_measuring_child = false;

        if self.content_size.width != 0.0 {
            self.compute_geometry();
        }
    }

    /// Reports the natural size of the tooltip content.
    pub fn content_measured(&mut self, size: Size) {
        debug!(?size, "content measured");
        self.content_size = size;
        self.compute_geometry();
    }

    /// Places the tooltip using the current measurements.
    pub fn compute_geometry(&mut self) -> GeometryResult {
        let input = GeometryInput {
            child_rect: self.child_rect,
            content_size: self.content_size,
            arrow_size: self.config.arrow_size,
            insets: self.insets,
            screen: self.screen,
            child_content_spacing: self.config.child_content_spacing,
        };
        let geometry = compute_geometry(self.placement, self.props.has_child, &input);

        self.tooltip_origin = geometry.tooltip_origin;
        self.anchor_point = geometry.anchor_point;
        self.adjusted_content_size = geometry.adjusted_content_size;
        self.measurements_finished = self.child_rect.width != 0.0 && self.content_size.width != 0.0;

        debug!(
            origin = ?geometry.tooltip_origin,
            anchor = ?geometry.anchor_point,
            adjusted = ?geometry.adjusted_content_size,
            finished = self.measurements_finished,
            "geometry computed"
        );
        geometry
    }

    // ========================================================================
    // Deferred work
    // ========================================================================

    fn defer(&mut self, deferral: Deferral, action: DeferredAction) {
        if let Some(previous) = self.pending.take() {
            trace!(ticket = previous.ticket.id(), "superseding deferred task");
            previous.handle.cancel();
        }

        self.last_ticket = self.last_ticket.next();
        let ticket = self.last_ticket;
        let handle = self.scheduler.schedule(deferral, ticket);
        self.pending = Some(PendingTask {
            ticket,
            handle,
            action,
        });
    }

    /// Runs a deferred callback handed back by the scheduler.
    ///
    /// Tickets that were superseded or cancelled are ignored.
    pub fn run_deferred(&mut self, ticket: Ticket) -> Option<MeasureRequest> {
        let is_current = self
            .pending
            .as_ref()
            .is_some_and(|task| task.ticket == ticket && !task.handle.is_cancelled());
        if !is_current {
            trace!(ticket = ticket.id(), "ignoring stale deferred task");
            return None;
        }

        let task = self.pending.take()?;
        match task.action {
            DeferredAction::Remeasure => self.measure_child_rect(),
            DeferredAction::Measure => self.begin_measurement(),
        }
    }

    /// Returns true while a deferred callback is outstanding.
    #[must_use]
    pub const fn has_pending_task(&self) -> bool {
        self.pending.is_some()
    }

    // ========================================================================
    // Screen changes
    // ========================================================================

    /// Drains pending screen-size changes.
    ///
    /// On a change every measurement is discarded, including one still in
    /// flight, and a re-measure is scheduled after [`SCREEN_CHANGE_SETTLE_DELAY`]. Returns true if the
    /// screen changed.
    pub fn poll_screen_changes(&mut self) -> bool {
        let mut latest = None;
        while let Some(subscription) = &self.subscription {
            match subscription.try_next() {
                Ok(Some(size)) => latest = Some(size),
                Ok(None) => break,
                Err(Error::SubscriptionClosed) => {
                    warn!("screen size provider went away, no longer tracking rotations");
                    self.subscription = None;
                }
                Err(error) => {
                    warn!(%error, "failed to read screen size change");
                    break;
                }
            }
        }

        let Some(size) = latest else {
            return false;
        };

        debug!(width = size.width, height = size.height, "screen changed, resetting");
        self.screen = size;
        self.content_size = Size::zero();
        self.adjusted_content_size = Size::zero();
        self.anchor_point = Point::zero();
        self.tooltip_origin = Point::zero();
        self.child_rect = Rect::zero();
        self.measurements_finished = false;
        self.measure_epoch += 1;
        self.is_measuring_child = false;

        self.defer(
            Deferral::Delay(SCREEN_CHANGE_SETTLE_DELAY),
            DeferredAction::Remeasure,
        );
        true
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Projects the current state onto style descriptors.
    #[must_use]
    pub fn styles(&self) -> TooltipStyles {
        project(&StyleInput {
            geometry: GeometryResult {
                tooltip_origin: self.tooltip_origin,
                anchor_point: self.anchor_point,
                placement: self.placement,
                adjusted_content_size: self.adjusted_content_size,
            },
            placement: self.placement,
            arrow_size: self.config.arrow_size,
            insets: self.insets,
            background_color: self.config.background_color,
            content: self.config.content_style,
            measurements_finished: self.measurements_finished,
            top_adjustment: self.config.top_adjustment,
            disable_shadow: self.config.disable_shadow,
        })
    }

    /// Describes what the backend should draw right now.
    #[must_use]
    pub fn render(&self) -> RenderSnapshot {
        let child_duplicate = (self.props.has_child && self.config.show_child_in_tooltip).then(|| {
            ChildDuplicate {
                rect: self.child_rect.offset_x(self.config.horizontal_adjustment),
                pointer_events: self.config.allow_child_interaction,
            }
        });

        RenderSnapshot {
            show_tooltip: self.props.visible && !self.waiting_for_interactions,
            use_modal: self.config.use_modal,
            show_arrow: self.props.has_child,
            child_duplicate,
            styles: self.styles(),
        }
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Handles a press on the overlay. Returns true if a close was requested.
    pub fn press(&mut self, interaction: Interaction) -> bool {
        let closes = match interaction {
            Interaction::Background => self.config.close_on_background_interaction,
            Interaction::Content => self.config.close_on_content_interaction,
            Interaction::Child => self.config.close_on_child_interaction,
            Interaction::Dismiss => true,
        };
        if !closes {
            return false;
        }

        match self.on_close.as_mut() {
            Some(handler) => {
                debug!(?interaction, "closing tooltip");
                handler();
            }
            None => warn!(?interaction, "close requested but no on_close handler is set"),
        }
        true
    }

    /// Cancels pending work and stops listening for screen changes.
    pub fn detach(&mut self) {
        if let Some(task) = self.pending.take() {
            task.handle.cancel();
        }
        if self.subscription.take().is_some() {
            debug!("tooltip controller detached");
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The static configuration.
    #[must_use]
    pub const fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// The current properties.
    #[must_use]
    pub const fn props(&self) -> &TooltipProps {
        &self.props
    }

    /// The scheduler deferred work goes to.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, e.g. to pump a queue.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Effective placement, inverted when there is no trigger.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Display insets after merging overrides.
    #[must_use]
    pub const fn insets(&self) -> Insets {
        self.insets
    }

    /// Last known screen size.
    #[must_use]
    pub const fn screen(&self) -> Size {
        self.screen
    }

    /// Last measured trigger rectangle.
    #[must_use]
    pub const fn child_rect(&self) -> Rect {
        self.child_rect
    }

    /// Last measured content size.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Content size after clamping to the screen.
    #[must_use]
    pub const fn adjusted_content_size(&self) -> Size {
        self.adjusted_content_size
    }

    /// Where the arrow tip meets the trigger.
    #[must_use]
    pub const fn anchor_point(&self) -> Point {
        self.anchor_point
    }

    /// Top-left corner of the content bubble.
    #[must_use]
    pub const fn tooltip_origin(&self) -> Point {
        self.tooltip_origin
    }

    /// Whether both trigger and content have been measured.
    #[must_use]
    pub const fn measurements_finished(&self) -> bool {
        self.measurements_finished
    }

    /// Whether the tooltip is held back until interactions settle.
    #[must_use]
    pub const fn is_waiting_for_interactions(&self) -> bool {
        self.waiting_for_interactions
    }

    /// Whether a trigger measurement is in flight.
    #[must_use]
    pub const fn is_measuring_child(&self) -> bool {
        self.is_measuring_child
    }
}

impl<S: Scheduler> Drop for TooltipController<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
