// src/app/update/controls.rs
//! Control panel handlers
//!
//! Every control writes through the indicator's setters. The panel reads the
//! getters on each view, so a rejected change reverts on its own; the handler
//! only has to explain why.

use iced::Task;

use super::RUNNING_WARNING;
use crate::app::message::Message;
use crate::app::state::App;
use crate::indicator::IndicatorError;
use crate::ui::widgets::{Toast, next_swatch};

impl App {
    /// Handle indicator setting messages
    pub fn handle_controls(&mut self, message: &Message) -> Option<Task<Message>> {
        let indicator = &mut self.indicator;
        let result = match message {
            Message::SquareToggled(enable) => indicator.set_square(*enable),
            Message::ShadowToggled(enable) => indicator.set_shadow(*enable),
            Message::EnableTextToggled(enable) => indicator.set_enable_text(*enable),
            Message::EnableBgToggled(enable) => indicator.set_enable_bg(*enable),
            Message::RoundedCapToggled(enable) => indicator.set_progress_rounded_cap(*enable),

            Message::SegmentSizeChanged(value) => indicator.set_segment_size(*value),
            Message::WidthChanged(value) => indicator.set_width(*value),
            Message::HeightChanged(value) => indicator.set_height(*value),
            Message::ProgressWidthChanged(value) => indicator.set_progress_width(*value),
            Message::MarginXChanged(value) => indicator.set_margin_x(*value),
            Message::MarginYChanged(value) => indicator.set_margin_y(*value),
            Message::MinimumSpeedChanged(value) => indicator.set_minimum_speed(*value),
            Message::MaximumSpeedChanged(value) => indicator.set_maximum_speed(*value),

            Message::TextChanged(text) => indicator.set_text(text.clone()),
            Message::CycleProgressColor => {
                let color = next_swatch(indicator.progress_color());
                indicator.set_progress_color(color)
            }
            Message::CycleBgColor => {
                let color = next_swatch(indicator.bg_color());
                indicator.set_bg_color(color)
            }
            Message::CycleTextColor => {
                let color = next_swatch(indicator.text_color());
                indicator.set_text_color(color)
            }
            Message::AlignmentSelected(alignment) => {
                indicator.set_progress_alignment(*alignment)
            }

            Message::PresetLoaded(preset) => {
                let skipped = preset.apply(indicator);
                // Square/alignment may have changed the box
                let (width, height) = self.indicator_area();
                self.indicator.resize(width, height);
                return Some(if skipped.is_empty() {
                    self.show_toast(Toast::info("Preset loaded"))
                } else {
                    self.show_toast(Toast::warning(format!(
                        "Preset loaded, {} value(s) skipped",
                        skipped.len()
                    )))
                });
            }

            _ => return None,
        };

        Some(self.report(result))
    }

    /// Explain a rejected change to the user
    fn report(&mut self, result: Result<(), IndicatorError>) -> Task<Message> {
        match result {
            Ok(()) => Task::none(),
            Err(e) if e.is_running_guard() => self.show_toast(Toast::warning(RUNNING_WARNING)),
            Err(e) => self.show_toast(Toast::warning(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::message::Message;
    use crate::app::state::{App, WINDOW_SIZE};
    use crate::app::update::RUNNING_WARNING;
    use crate::features::Preset;
    use crate::indicator::Alignment;
    use crate::ui::widgets::color_swatch::SWATCHES;
    use crate::ui::widgets::toast::ToastStyle;

    fn app() -> App {
        App::with_window_size(WINDOW_SIZE)
    }

    mod property_revert {
        use super::*;

        #[test]
        fn running_rejection_shows_warning() {
            let mut app = app();
            let _ = app.update(Message::Start);
            let _ = app.update(Message::AlignmentSelected(Alignment::LEFT));
            app.indicator.stop();

            let toast = app.toast.current.as_ref().expect("toast shown");
            assert_eq!(toast.style, ToastStyle::Warning);
            assert_eq!(toast.message, RUNNING_WARNING);
            assert_eq!(app.indicator.progress_alignment(), Alignment::CENTER);
        }

        #[test]
        fn range_rejection_shows_reason() {
            let mut app = app();
            let _ = app.update(Message::MaximumSpeedChanged(0.5));

            let toast = app.toast.current.as_ref().expect("toast shown");
            assert!(toast.message.contains("maximum speed"), "{}", toast.message);
            assert_eq!(app.indicator.maximum_speed(), 3.0);
        }

        #[test]
        fn hidden_text_editable_while_running() {
            let mut app = app();
            let _ = app.update(Message::Start);
            let _ = app.update(Message::TextChanged("Hold on".to_string()));
            app.indicator.stop();

            assert!(app.toast.current.is_none(), "no warning for hidden text");
            assert_eq!(app.indicator.text(), "Hold on");
        }
    }

    mod property_swatches {
        use super::*;

        #[test]
        fn color_buttons_cycle_palette() {
            let mut app = app();
            let _ = app.update(Message::CycleProgressColor);
            let first = app.indicator.progress_color();
            let _ = app.update(Message::CycleProgressColor);
            let second = app.indicator.progress_color();

            assert!(SWATCHES.contains(&first));
            assert!(SWATCHES.contains(&second));
            assert_ne!(first, second);
        }
    }

    #[test]
    fn test_preset_applied_and_relaid_out() {
        let mut app = app();
        let preset = Preset {
            alignment: Some("left|top".to_string()),
            segment_size: Some(45),
            ..Preset::default()
        };
        let _ = app.update(Message::PresetLoaded(preset));

        assert_eq!(app.indicator.segment_size(), 45);
        assert_eq!(
            (app.indicator.margin_x(), app.indicator.margin_y()),
            (0, 0),
            "box pinned to the top-left corner"
        );
        assert_eq!(
            app.toast.current.as_ref().map(|t| t.style),
            Some(ToastStyle::Info)
        );
    }
}
