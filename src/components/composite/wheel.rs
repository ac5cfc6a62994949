//! Wheel Component
//!
//! Paints the energizer wheel at a given rotation, with a fixed pointer at
//! the top. Segment geometry comes from `domain::wheel`.

use gpui::{
    App, Bounds, Hsla, IntoElement, ParentElement, PathBuilder, Pixels, Point, RenderOnce, Rgba,
    SharedString, Styled, TextRun, Window, canvas, div, point, px,
};

use crate::constants::{POINTER_SIZE, WHEEL_DIAMETER, WHEEL_RIM_STEPS_PER_DEGREE};
use crate::domain::energizer::Energizer;
use crate::domain::wheel::{segment_angle, segment_span};
use crate::theme::colors::RadColors;
use crate::theme::typography::Typography;

/// Distance of the label center from the hub, as a fraction of the radius
const LABEL_RADIUS: f32 = 0.6;

/// One painted segment
#[derive(Debug, Clone)]
struct Segment {
    label: SharedString,
    font_size: f32,
}

/// Energizer wheel element
#[derive(IntoElement)]
pub struct Wheel {
    segments: Vec<Segment>,
    rotation: f32,
}

impl Wheel {
    pub fn new<'a>(energizers: impl IntoIterator<Item = &'a Energizer>) -> Self {
        let segments = energizers
            .into_iter()
            .map(|e| Segment {
                label: SharedString::from(e.label.clone()),
                font_size: Typography::wheel_label(e.font_hint),
            })
            .collect();
        Self {
            segments,
            rotation: 0.0,
        }
    }

    /// Set the clockwise rotation in degrees
    pub fn rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Point on a circle; `degrees` clockwise from 12 o'clock
fn polar(center: Point<Pixels>, radius: f32, degrees: f32) -> Point<Pixels> {
    let radians = degrees.to_radians();
    point(
        center.x + px(radius * radians.sin()),
        center.y - px(radius * radians.cos()),
    )
}

fn fill_path(builder: PathBuilder, color: Rgba, window: &mut Window) {
    match builder.build() {
        Ok(path) => window.paint_path(path, Hsla::from(color)),
        Err(e) => tracing::error!(error = ?e, "Failed to build wheel path"),
    }
}

fn paint_wheel(segments: &[Segment], rotation: f32, bounds: Bounds<Pixels>, window: &mut Window, cx: &mut App) {
    let center = bounds.center();
    let radius = f32::from(bounds.size.width).min(f32::from(bounds.size.height)) / 2.0;
    let count = segments.len();
    let backgrounds = RadColors::wheel_segments();
    let label_colors = RadColors::wheel_labels();

    // Segments
    let steps = ((segment_angle(count) * WHEEL_RIM_STEPS_PER_DEGREE) as usize).max(2);
    for index in 0..count {
        let (start, end) = segment_span(index, count);
        let mut builder = PathBuilder::fill();
        builder.move_to(center);
        for step in 0..=steps {
            let angle = start + (end - start) * step as f32 / steps as f32;
            builder.line_to(polar(center, radius, angle + rotation));
        }
        builder.close();
        fill_path(builder, backgrounds[index % 2], window);
    }

    // Labels
    let font = window.text_style().font();
    for (index, segment) in segments.iter().enumerate() {
        let (start, end) = segment_span(index, count);
        let anchor = polar(center, radius * LABEL_RADIUS, (start + end) / 2.0 + rotation);
        let font_size = px(segment.font_size);
        let run = TextRun {
            len: segment.label.len(),
            font: font.clone(),
            color: label_colors[index % 2].into(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let line = window
            .text_system()
            .shape_line(segment.label.clone(), font_size, &[run], None);
        let line_height = font_size * 1.25;
        let origin = point(anchor.x - line.width * 0.5, anchor.y - line_height * 0.5);
        if let Err(e) = line.paint(origin, line_height, window, cx) {
            tracing::error!(error = %e, label = %segment.label, "Failed to paint wheel label");
        }
    }

    // Pointer
    let tip = point(center.x, bounds.origin.y + px(POINTER_SIZE));
    let mut builder = PathBuilder::fill();
    builder.move_to(tip);
    builder.line_to(point(center.x - px(POINTER_SIZE / 2.0), bounds.origin.y));
    builder.line_to(point(center.x + px(POINTER_SIZE / 2.0), bounds.origin.y));
    builder.close();
    fill_path(builder, RadColors::pointer(), window);
}

impl RenderOnce for Wheel {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let segments = self.segments;
        let rotation = self.rotation;

        div()
            .size(px(WHEEL_DIAMETER))
            .rounded_full()
            .border_4()
            .border_color(RadColors::wheel_rim())
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, _, window, cx| paint_wheel(&segments, rotation, bounds, window, cx),
                )
                .size_full(),
            )
    }
}
