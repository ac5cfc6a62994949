//! Wheel Page
//!
//! The selector widget: wheel, draw button, result modal and confetti.
//! Draw logic lives in `Selector`; this view runs the spin and confetti
//! animations and turns clicks and key presses into selector transitions.

use std::time::{Duration, Instant};

use gpui::{
    ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement, ParentElement, Render,
    Styled, Task, Window, anchored, deferred, div, point, prelude::*, px,
};
use smol::channel::Receiver;
use tracing::{debug, error, info};

use crate::components::composite::confetti::Confetti;
use crate::components::composite::modal::Modal;
use crate::components::composite::wheel::Wheel;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::constants::{CONFETTI_FRAME_MS, CONTENT_MAX_WIDTH, text};
use crate::domain::confetti::ConfettiField;
use crate::domain::config::{CelebrationConfig, WheelConfig};
use crate::domain::wheel::SpinAnimation;
use crate::error::Error;
use crate::features::wheel::controller::{ChannelSpinDriver, WindowViewport, spin_channel};
use crate::helpers::action::{CloseResult, Draw, ExcludeResult, WHEEL_CONTEXT};
use crate::state::capabilities::{SpinRequest, Viewport, ViewportProvider};
use crate::state::selector_state::Selector;

/// Selector widget view
pub struct WheelPage {
    selector: Selector<ChannelSpinDriver>,
    wheel_config: WheelConfig,
    celebration_config: CelebrationConfig,
    focus_handle: FocusHandle,
    /// Current wheel rotation in degrees
    rotation: f32,
    /// Viewport seen at the last render
    viewport: Viewport,
    confetti: Option<ConfettiField>,
    confetti_task: Option<Task<()>>,
    _spin_task: Task<()>,
}

impl WheelPage {
    pub fn new(
        wheel_config: WheelConfig,
        celebration_config: CelebrationConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let (driver, spin_rx) = spin_channel();
        let spin_task = Self::start_spin_loop(spin_rx, wheel_config.frame_interval(), cx);

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            selector: Selector::new(driver),
            wheel_config,
            celebration_config,
            focus_handle,
            rotation: 0.0,
            viewport: WindowViewport(window).current_size(),
            confetti: None,
            confetti_task: None,
            _spin_task: spin_task,
        }
    }

    /// Play each requested spin, then report completion to the selector
    fn start_spin_loop(rx: Receiver<SpinRequest>, frame: Duration, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |handle, cx| {
            while let Ok(request) = rx.recv().await {
                let Ok(spin) = handle.update(cx, |this, _| this.plan_spin(request)) else {
                    return;
                };
                let started = Instant::now();

                loop {
                    cx.background_executor().timer(frame).await;
                    let (rotation, done) = spin.sample(started.elapsed());

                    let updated = handle.update(cx, |this, cx| {
                        this.rotation = rotation;
                        if done {
                            this.finish_spin(cx);
                        }
                        cx.notify();
                    });
                    if updated.is_err() {
                        return;
                    }
                    if done {
                        break;
                    }
                }
            }
            debug!("Spin loop stopped");
        })
    }

    fn plan_spin(&self, request: SpinRequest) -> SpinAnimation {
        SpinAnimation::plan(
            self.rotation,
            request.index,
            request.pool_size,
            self.wheel_config.revolutions,
            self.wheel_config.spin_duration(),
        )
    }

    fn finish_spin(&mut self, cx: &mut Context<Self>) {
        self.rotation = self.rotation.rem_euclid(360.0);
        self.selector.on_spin_complete();
        if self.selector.is_celebrating() {
            self.start_confetti(cx);
        }
    }

    fn start_confetti(&mut self, cx: &mut Context<Self>) {
        self.confetti = Some(ConfettiField::spawn(
            self.viewport,
            self.celebration_config.particle_count,
            self.celebration_config.gravity,
            &mut rand::rng(),
        ));

        let frame = Duration::from_millis(CONFETTI_FRAME_MS);
        let dt = frame.as_secs_f32();
        self.confetti_task = Some(cx.spawn(async move |handle, cx| {
            loop {
                cx.background_executor().timer(frame).await;
                let running = handle.update(cx, |this, cx| match this.confetti.as_mut() {
                    Some(field) => {
                        field.step(dt, &mut rand::rng());
                        cx.notify();
                        true
                    }
                    None => false,
                });
                if !matches!(running, Ok(true)) {
                    break;
                }
            }
        }));
        info!(particles = self.celebration_config.particle_count, "Celebration started");
    }

    fn stop_confetti(&mut self) {
        if self.confetti.take().is_some() {
            debug!("Celebration stopped");
        }
        self.confetti_task = None;
    }

    // ==================== User actions ====================

    fn draw(&mut self, cx: &mut Context<Self>) {
        match self.selector.request_draw() {
            Ok(_) => {
                // A draw from the result view closes it first.
                if !self.selector.is_celebrating() {
                    self.stop_confetti();
                }
            }
            Err(Error::EmptyPool) => {}
            Err(e) => error!(error = %e, "Draw failed"),
        }
        cx.notify();
    }

    fn close_result(&mut self, cx: &mut Context<Self>) {
        self.selector.close_result();
        self.stop_confetti();
        cx.notify();
    }

    fn exclude_result(&mut self, cx: &mut Context<Self>) {
        if !self.selector.is_modal_open() {
            return;
        }
        self.selector.exclude_drawn_and_close();
        self.stop_confetti();
        cx.notify();
    }

    fn on_draw(&mut self, _: &Draw, _window: &mut Window, cx: &mut Context<Self>) {
        self.draw(cx);
    }

    fn on_close_result(&mut self, _: &CloseResult, _window: &mut Window, cx: &mut Context<Self>) {
        self.close_result(cx);
    }

    fn on_exclude_result(&mut self, _: &ExcludeResult, _window: &mut Window, cx: &mut Context<Self>) {
        self.exclude_result(cx);
    }

    // ==================== Rendering ====================

    fn render_result_modal(&self, cx: &mut Context<Self>) -> Option<Modal> {
        if !self.selector.is_modal_open() {
            return None;
        }
        let label = self
            .selector
            .drawn()
            .map(|e| e.label.clone())
            .unwrap_or_default();

        Some(
            Modal::new(text::MODAL_TITLE)
                .on_close({
                    let page = cx.entity().downgrade();
                    move |cx| {
                        let _ = page.update(cx, |this, cx| this.close_result(cx));
                    }
                })
                .child(
                    div()
                        .flex()
                        .child(text::RESULT_PREFIX)
                        .child(div().font_weight(gpui::FontWeight::BOLD).child(label)),
                )
                .action(
                    Button::new("close-result", text::CLOSE)
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.close_result(cx);
                        })),
                )
                .action(
                    Button::new("exclude-result", text::EXCLUDE)
                        .size(ButtonSize::Small)
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.exclude_result(cx);
                        })),
                ),
        )
    }
}

/// Lay `child` over the whole window, above the page
fn window_overlay(viewport: Viewport, child: impl IntoElement) -> impl IntoElement {
    deferred(
        anchored().position(point(px(0.0), px(0.0))).child(
            div()
                .relative()
                .w(px(viewport.width))
                .h(px(viewport.height))
                .child(child),
        ),
    )
}

impl Render for WheelPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.viewport = WindowViewport(window).current_size();
        if let Some(field) = self.confetti.as_mut() {
            field.resize(self.viewport);
        }

        let can_draw = self.selector.can_draw();
        let pool_empty = self.selector.pool().is_empty();
        let modal = self.render_result_modal(cx);

        div()
            .id("wheel-page")
            .key_context(WHEEL_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_draw))
            .on_action(cx.listener(Self::on_close_result))
            .on_action(cx.listener(Self::on_exclude_result))
            .flex()
            .flex_col()
            .gap_3()
            .child(Wheel::new(self.selector.pool().iter()).rotation(self.rotation))
            .child(
                div().max_w(px(CONTENT_MAX_WIDTH)).child(
                    Button::new("draw", text::DRAW)
                        .disabled(!can_draw)
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                            this.draw(cx);
                        })),
                ),
            )
            .when(pool_empty, |el| el.child(text::POOL_EMPTY))
            .when_some(modal, |el, modal| el.child(window_overlay(self.viewport, modal)))
            // Confetti paints above the modal
            .when_some(self.confetti.as_ref(), |el, field| {
                el.child(window_overlay(self.viewport, Confetti::new(field)))
            })
    }
}
