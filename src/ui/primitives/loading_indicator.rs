//! Circular loading indicator primitive
//!
//! Renders an [`Indicator`] with iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.
//! The draw-call sequence comes from `crate::indicator::render`; this module
//! only maps those calls onto a canvas `Frame`.

use iced::widget::Canvas;
use iced::widget::canvas::{Cache, Frame, Geometry, LineCap, Path, Program, Stroke, Text};
use iced::widget::canvas::path::arc::Elliptical;
use iced::{Color, Element, Fill, Pixels, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::indicator::{ArcStroke, CapStyle, Indicator, Painter};

/// Caption font size
const TEXT_SIZE: f32 = 16.0;

/// Drop shadow drawn under the arcs when `shadow` is enabled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowEffect {
    pub blur_radius: f32,
    pub offset: Vector,
    pub color: Color,
}

/// Blur 15, no offset, black at 80/255 alpha
pub const DROP_SHADOW: ShadowEffect = ShadowEffect {
    blur_radius: 15.0,
    offset: Vector::ZERO,
    color: Color::from_rgba(0.0, 0.0, 0.0, 80.0 / 255.0),
};

/// Number of translucent strokes approximating the blur
const SHADOW_LAYERS: usize = 5;

/// `Painter` implementation on top of a canvas frame
pub struct FramePainter<'a> {
    frame: &'a mut Frame,
    shadow: Option<ShadowEffect>,
}

impl<'a> FramePainter<'a> {
    pub fn new(frame: &'a mut Frame, shadow: Option<ShadowEffect>) -> Self {
        Self { frame, shadow }
    }

    fn arc_path(arc: &ArcStroke, offset: Vector) -> Path {
        let center = Point::new(
            arc.bounds.x + arc.bounds.width / 2.0 + offset.x,
            arc.bounds.y + arc.bounds.height / 2.0 + offset.y,
        );
        let radii = Vector::new(
            (arc.bounds.width / 2.0).max(0.0),
            (arc.bounds.height / 2.0).max(0.0),
        );
        // Screen angles grow clockwise; the arc spans [start - sweep, start]
        let end = arc.start_degrees.to_radians();
        let start = (arc.start_degrees - arc.sweep_degrees).to_radians();

        Path::new(|builder| {
            builder.ellipse(Elliptical {
                center,
                radii,
                rotation: Radians(0.0),
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        })
    }

    fn line_cap(cap: CapStyle) -> LineCap {
        match cap {
            CapStyle::Square => LineCap::Square,
            CapStyle::Round => LineCap::Round,
        }
    }
}

impl Painter for FramePainter<'_> {
    fn rect(&mut self, rect: Rectangle) {
        self.frame.fill_rectangle(
            Point::new(rect.x, rect.y),
            Size::new(rect.width.max(0.0), rect.height.max(0.0)),
            Color::TRANSPARENT,
        );
    }

    fn arc(&mut self, arc: &ArcStroke) {
        if let Some(shadow) = self.shadow {
            let path = Self::arc_path(arc, shadow.offset);
            let layer_alpha = shadow.color.a / SHADOW_LAYERS as f32;
            for layer in (1..=SHADOW_LAYERS).rev() {
                let spread = shadow.blur_radius * layer as f32 / SHADOW_LAYERS as f32;
                self.frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(arc.width.max(0.0) + spread)
                        .with_color(Color {
                            a: layer_alpha,
                            ..shadow.color
                        })
                        .with_line_cap(Self::line_cap(arc.cap)),
                );
            }
        }

        let path = Self::arc_path(arc, Vector::ZERO);
        self.frame.stroke(
            &path,
            Stroke::default()
                .with_width(arc.width.max(0.0))
                .with_color(arc.color)
                .with_line_cap(Self::line_cap(arc.cap)),
        );
    }

    fn text(&mut self, rect: Rectangle, content: &str, color: Color) {
        self.frame.fill_text(Text {
            content: content.to_string(),
            position: rect.center(),
            color,
            size: Pixels(TEXT_SIZE),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

/// Canvas program drawing an indicator through a shared geometry cache
///
/// The owner clears `cache` whenever `Indicator::take_redraw` reports a
/// pending request.
pub struct LoadingIndicatorProgram<'a> {
    indicator: &'a Indicator,
    cache: &'a Cache,
}

impl<'a> LoadingIndicatorProgram<'a> {
    pub fn new(indicator: &'a Indicator, cache: &'a Cache) -> Self {
        Self { indicator, cache }
    }
}

impl<Message> Program<Message> for LoadingIndicatorProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let shadow = self.indicator.shadow().then_some(DROP_SHADOW);
            let mut painter = FramePainter::new(frame, shadow);
            self.indicator.draw(&mut painter);
        });

        vec![geometry]
    }
}

/// Create an indicator element filling the available space
pub fn view<'a, Message: 'a>(
    indicator: &'a Indicator,
    cache: &'a Cache,
) -> Element<'a, Message> {
    Canvas::new(LoadingIndicatorProgram::new(indicator, cache))
        .width(Fill)
        .height(Fill)
        .into()
}
