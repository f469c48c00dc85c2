//=========================================================================
// Command Recorder
//=========================================================================
//
// Headless `Surface` that records every call as a `DrawCommand`.
//
// Used to assert draw order in tests and to run the simulation without
// any display attached.
//
//=========================================================================

use super::surface::{Color, Rect, Surface};

//=== DrawCommand =========================================================

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
    FillRoundedRect { rect: Rect, radius: f64, color: Color },
    FillEllipse { center: (f64, f64), radii: (f64, f64), color: Color },
    FillVerticalGradient { rect: Rect, top: Color, bottom: Color },
    DrawText { text: String, origin: (f64, f64), size: f64, color: Color },
}

//=== CommandRecorder =====================================================

/// Surface that appends each call to an in-memory list.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for CommandRecorder {
    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillRoundedRect { rect, radius, color });
    }

    fn fill_ellipse(&mut self, center: (f64, f64), radii: (f64, f64), color: Color) {
        self.commands.push(DrawCommand::FillEllipse { center, radii, color });
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::FillVerticalGradient { rect, top, bottom });
    }

    fn draw_text(&mut self, text: &str, origin: (f64, f64), size: f64, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_owned(),
            origin,
            size,
            color,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut recorder = CommandRecorder::new();
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);

        recorder.clear(rect);
        recorder.fill_rect(rect, Color::hex(0x112233));
        recorder.draw_text("hi", (1.0, 2.0), 14.0, Color::hex(0x003333));

        assert_eq!(recorder.commands().len(), 3);
        assert_eq!(recorder.commands()[0], DrawCommand::Clear(rect));
        assert!(matches!(
            &recorder.commands()[2],
            DrawCommand::DrawText { text, .. } if text == "hi"
        ));
    }

    #[test]
    fn take_empties_recorder() {
        let mut recorder = CommandRecorder::new();
        recorder.fill_ellipse((0.0, 0.0), (1.0, 1.0), Color::TRANSPARENT);
        assert_eq!(recorder.take().len(), 1);
        assert!(recorder.is_empty());
    }
}
