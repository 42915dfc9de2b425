mod central_panel;
mod properties_panel;
mod text_prompt;
mod tools_panel;

pub use central_panel::central_panel;
pub use properties_panel::properties_panel;
pub use text_prompt::{PromptOutcome, TextPrompt, text_prompt};
pub use tools_panel::tools_panel;
