use egui::Key;

use crate::WhiteboardApp;

/// How the user answered the text prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

impl PromptOutcome {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Submitted(text) => Some(text),
            Self::Cancelled => None,
        }
    }
}

/// Edit buffer of the modal "Enter text:" prompt.
///
/// The prompt is an [`egui::Modal`], so nothing underneath it takes input while
/// it is open.
#[derive(Debug, Default)]
pub struct TextPrompt {
    buffer: String,
    open: bool,
}

impl TextPrompt {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the prompt for this frame. Returns the outcome once the user answers.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PromptOutcome> {
        let just_opened = !self.open;
        if just_opened {
            self.buffer.clear();
            self.open = true;
        }

        let mut outcome = None;
        egui::Modal::new(egui::Id::new("text_prompt")).show(ctx, |ui| {
            ui.label("Enter text:");
            let response = ui.text_edit_singleline(&mut self.buffer);
            if just_opened {
                response.request_focus();
            }
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            let escaped = ui.input(|i| i.key_pressed(Key::Escape));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    outcome = Some(PromptOutcome::Submitted(self.buffer.clone()));
                }
                if ui.button("Cancel").clicked() || escaped {
                    outcome = Some(PromptOutcome::Cancelled);
                }
            });
        });

        if outcome.is_some() {
            self.open = false;
        }
        outcome
    }
}

/// Show the prompt while the gesture handler waits on it and hand back the answer.
pub fn text_prompt(app: &mut WhiteboardApp, ctx: &egui::Context) {
    if app.gestures.pending_text().is_none() {
        return;
    }
    if let Some(outcome) = app.text_prompt.show(ctx) {
        app.gestures.resolve_text(outcome.into_text(), &mut app.store);
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text() {
        assert_eq!(
            PromptOutcome::Submitted("Hello".into()).into_text(),
            Some("Hello".to_owned())
        );
        assert_eq!(PromptOutcome::Cancelled.into_text(), None);
    }

    #[test]
    fn test_prompt_opens_on_first_show() {
        let ctx = egui::Context::default();
        let mut prompt = TextPrompt::default();
        let mut outcome = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            outcome = prompt.show(ctx);
        });
        assert!(outcome.is_none());
        assert!(prompt.is_open());
    }
}
