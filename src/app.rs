use crate::config::WhiteboardConfig;
use crate::event::{EventHandler, StoreEvent};
use crate::input::{GestureHandler, InputHandler};
use crate::panels::{self, TextPrompt};
use crate::renderer::Renderer;
use crate::store::{WhiteboardState, WhiteboardStore};

/// Schedules one repaint for every store mutation.
///
/// egui coalesces pending requests into the next frame, which always paints the
/// latest state.
#[derive(Debug, Clone)]
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, _event: &StoreEvent, _state: &WhiteboardState) {
        self.ctx.request_repaint();
    }
}

#[derive(Debug)]
pub struct WhiteboardApp {
    pub(crate) config: WhiteboardConfig,
    pub(crate) store: WhiteboardStore,
    pub(crate) gestures: GestureHandler,
    pub(crate) input: InputHandler,
    pub(crate) renderer: Renderer,
    pub(crate) text_prompt: TextPrompt,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::with_config(WhiteboardConfig::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: WhiteboardConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let app = Self::with_config(config);
        app.store
            .subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        app
    }

    /// An app with no egui context attached yet.
    pub fn with_config(config: WhiteboardConfig) -> Self {
        Self {
            store: WhiteboardStore::with_style(config.default_style),
            renderer: Renderer::new(&config),
            gestures: GestureHandler::new(),
            input: InputHandler::default(),
            text_prompt: TextPrompt::default(),
            config,
        }
    }

    pub fn store(&self) -> &WhiteboardStore {
        &self.store
    }
}

impl eframe::App for WhiteboardApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::text_prompt(self, ctx);
        panels::central_panel(self, ctx);
    }
}
