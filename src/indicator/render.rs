//! Indicator renderer
//!
//! A pure function of a state snapshot that issues draw calls against a
//! `Painter`. The iced canvas adapter lives in
//! `crate::ui::primitives::loading_indicator`; tests use a recording painter.
//!
//! Angles are in degrees, measured clockwise from 3 o'clock on screen. An arc
//! with `start` and `sweep` covers `[start - sweep, start]`.

use iced::{Color, Rectangle};

use super::driver::{ANGLE_OFFSET, FULL_TURN};

/// Sub-degree steps used when quantizing arc angles
pub const ARC_PRECISION: f64 = 16.0;

/// Stroke cap style for both arcs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStyle {
    Square,
    Round,
}

/// One stroked arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    /// Bounding box of the ellipse the arc lies on
    pub bounds: Rectangle,
    pub start_degrees: f32,
    pub sweep_degrees: f32,
    pub color: Color,
    pub width: f32,
    pub cap: CapStyle,
}

/// Drawing surface used by `render`
pub trait Painter {
    /// Region of the indicator, painted without border
    fn rect(&mut self, rect: Rectangle);
    fn arc(&mut self, arc: &ArcStroke);
    /// Text centered in `rect`
    fn text(&mut self, rect: Rectangle, content: &str, color: Color);
}

/// Snapshot of everything the renderer reads
#[derive(Debug, Clone, PartialEq)]
pub struct RenderView<'a> {
    pub width: i32,
    pub height: i32,
    pub margin_x: i32,
    pub margin_y: i32,
    pub progress_width: i32,
    pub segment_size: i32,
    pub current_angle: f64,
    pub rounded_cap: bool,
    pub enable_bg: bool,
    pub enable_text: bool,
    pub bg_color: Color,
    pub progress_color: Color,
    pub text_color: Color,
    pub text: &'a str,
}

fn quantize(degrees: f64) -> f32 {
    ((degrees * ARC_PRECISION).trunc() / ARC_PRECISION) as f32
}

/// Start angle of the progress arc for an accumulated angle
pub fn progress_start(current_angle: f64) -> f32 {
    quantize((current_angle + ANGLE_OFFSET).rem_euclid(FULL_TURN))
}

/// Paint the indicator: region, background track, caption, progress arc
pub fn render(view: &RenderView<'_>, painter: &mut impl Painter) {
    // Widened so extreme stored values cannot overflow
    let (margin_x, margin_y) = (i64::from(view.margin_x), i64::from(view.margin_y));
    let (width, height) = (i64::from(view.width), i64::from(view.height));
    let progress_width = i64::from(view.progress_width);
    let half_stroke = progress_width / 2;

    let rect = Rectangle {
        x: (margin_x - half_stroke).abs() as f32,
        y: (margin_y - half_stroke).abs() as f32,
        width: width as f32,
        height: height as f32,
    };
    painter.rect(rect);

    // Arcs sit inside the box, inset by half the stroke
    let arc_bounds = Rectangle {
        x: (margin_x + half_stroke) as f32,
        y: (margin_y + half_stroke) as f32,
        width: (width - progress_width) as f32,
        height: (height - progress_width) as f32,
    };
    let cap = if view.rounded_cap {
        CapStyle::Round
    } else {
        CapStyle::Square
    };
    let stroke_width = view.progress_width as f32;

    if view.enable_bg {
        painter.arc(&ArcStroke {
            bounds: arc_bounds,
            start_degrees: 0.0,
            sweep_degrees: FULL_TURN as f32,
            color: view.bg_color,
            width: stroke_width,
            cap,
        });
    }

    if view.enable_text {
        painter.text(rect, view.text, view.text_color);
    }

    painter.arc(&ArcStroke {
        bounds: arc_bounds,
        start_degrees: progress_start(view.current_angle),
        sweep_degrees: view.segment_size as f32,
        color: view.progress_color,
        width: stroke_width,
        cap,
    });
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Draw call recorded by `RecordingPainter`
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Rect(Rectangle),
        Arc(ArcStroke),
        Text {
            rect: Rectangle,
            content: String,
            color: Color,
        },
    }

    #[derive(Debug, Default)]
    pub struct RecordingPainter {
        pub calls: Vec<DrawCall>,
    }

    impl Painter for RecordingPainter {
        fn rect(&mut self, rect: Rectangle) {
            self.calls.push(DrawCall::Rect(rect));
        }

        fn arc(&mut self, arc: &ArcStroke) {
            self.calls.push(DrawCall::Arc(*arc));
        }

        fn text(&mut self, rect: Rectangle, content: &str, color: Color) {
            self.calls.push(DrawCall::Text {
                rect,
                content: content.to_string(),
                color,
            });
        }
    }

    fn view(text: &str) -> RenderView<'_> {
        RenderView {
            width: 200,
            height: 200,
            margin_x: 0,
            margin_y: 0,
            progress_width: 10,
            segment_size: 12,
            current_angle: 0.0,
            rounded_cap: true,
            enable_bg: true,
            enable_text: false,
            bg_color: Color::BLACK,
            progress_color: Color::WHITE,
            text_color: Color::WHITE,
            text,
        }
    }

    #[test]
    fn test_default_draws_rect_background_progress() {
        let mut painter = RecordingPainter::default();
        render(&view("Loading..."), &mut painter);

        assert_eq!(painter.calls.len(), 3);
        assert!(matches!(painter.calls[0], DrawCall::Rect(_)));
        match &painter.calls[1] {
            DrawCall::Arc(arc) => {
                assert_eq!(arc.sweep_degrees, 360.0);
                assert_eq!(arc.color, Color::BLACK);
            }
            other => panic!("expected background arc, got {:?}", other),
        }
        match &painter.calls[2] {
            DrawCall::Arc(arc) => {
                assert_eq!(arc.start_degrees, 270.0, "arc starts at 12 o'clock");
                assert_eq!(arc.sweep_degrees, 12.0);
                assert_eq!(arc.color, Color::WHITE);
                assert_eq!(arc.cap, CapStyle::Round);
            }
            other => panic!("expected progress arc, got {:?}", other),
        }
    }

    #[test]
    fn test_text_without_background() {
        let mut v = view("X");
        v.enable_bg = false;
        v.enable_text = true;

        let mut painter = RecordingPainter::default();
        render(&v, &mut painter);

        let arcs = painter
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Arc(_)))
            .count();
        let texts: Vec<_> = painter
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(arcs, 1, "only the progress arc");
        assert_eq!(texts, vec!["X"]);
        assert!(
            matches!(painter.calls.last(), Some(DrawCall::Arc(arc)) if arc.sweep_degrees == 12.0),
            "progress arc is drawn last"
        );
    }

    #[test]
    fn test_arc_box_inset_by_half_stroke() {
        let mut v = view("");
        v.margin_x = 50;
        v.margin_y = 20;
        v.progress_width = 12;

        let mut painter = RecordingPainter::default();
        render(&v, &mut painter);

        assert_eq!(
            painter.calls[0],
            DrawCall::Rect(Rectangle {
                x: 44.0,
                y: 14.0,
                width: 200.0,
                height: 200.0,
            })
        );
        match &painter.calls[1] {
            DrawCall::Arc(arc) => {
                assert_eq!(
                    arc.bounds,
                    Rectangle {
                        x: 56.0,
                        y: 26.0,
                        width: 188.0,
                        height: 188.0,
                    }
                );
                assert_eq!(arc.width, 12.0);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_rect_origin_uses_absolute_offset() {
        let mut v = view("");
        v.margin_x = 0;
        v.progress_width = 20;

        let mut painter = RecordingPainter::default();
        render(&v, &mut painter);

        match painter.calls[0] {
            DrawCall::Rect(rect) => assert_eq!((rect.x, rect.y), (10.0, 10.0)),
            ref other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_square_cap_when_not_rounded() {
        let mut v = view("");
        v.rounded_cap = false;

        let mut painter = RecordingPainter::default();
        render(&v, &mut painter);

        for call in &painter.calls {
            if let DrawCall::Arc(arc) = call {
                assert_eq!(arc.cap, CapStyle::Square);
            }
        }
    }

    #[test]
    fn test_extreme_values_render_without_overflow() {
        let mut v = view("");
        v.margin_x = i32::MAX;
        v.margin_y = i32::MIN;
        v.width = i32::MIN;
        v.progress_width = i32::MAX;

        let mut painter = RecordingPainter::default();
        render(&v, &mut painter);

        assert_eq!(painter.calls.len(), 3, "rect and both arcs still issued");
        match &painter.calls[1] {
            DrawCall::Arc(arc) => {
                assert!(arc.bounds.width < 0.0);
                assert_eq!(arc.width, i32::MAX as f32);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_progress_start_wraps_and_quantizes() {
        assert_eq!(progress_start(90.0), 0.0);
        assert_eq!(progress_start(450.0), 0.0);
        assert_eq!(progress_start(-90.0), 180.0);
        // 1/16° steps, truncated
        assert_eq!(progress_start(0.03), 270.0);
        assert_eq!(progress_start(0.0625), 270.0625);
    }
}
