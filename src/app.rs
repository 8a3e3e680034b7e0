use eframe::egui;

use crate::command::{Command, CommandOutcome};
use crate::config::AppConfig;
use crate::file_handler::{FileHandler, FilePicker, NativeFilePicker};
use crate::renderer::Renderer;
use crate::session::Session;

pub struct ImageProcessorApp {
    session: Session,
    renderer: Renderer,
    file_handler: FileHandler,
    picker: Box<dyn FilePicker>,
}

impl ImageProcessorApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_picker(config, Box::new(NativeFilePicker))
    }

    pub fn with_picker(config: &AppConfig, picker: Box<dyn FilePicker>) -> Self {
        Self {
            session: Session::new(),
            renderer: Renderer::new(config.pixel_size),
            file_handler: FileHandler::new(),
            picker,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a button action and react to its outcome
    pub fn run_command(&mut self, ctx: &egui::Context, command: Command) {
        match self.session.execute(command, self.picker.as_ref()) {
            CommandOutcome::Redraw => ctx.request_repaint(),
            CommandOutcome::Unchanged => {}
            CommandOutcome::Quit => {
                log::info!("Quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn buttons_panel(&mut self, ctx: &egui::Context) {
        let mut clicked = None;

        egui::SidePanel::left("buttons_panel")
            .resizable(false)
            .default_width(120.0)
            .show(ctx, |ui| {
                ui.heading("Image");
                ui.separator();
                for command in Command::ALL {
                    if matches!(command, Command::Quit | Command::Merge) {
                        ui.separator();
                    }
                    let button = egui::Button::new(command.label())
                        .min_size(egui::vec2(ui.available_width(), 0.0));
                    if ui.add(button).clicked() {
                        clicked = Some(command);
                    }
                }
            });

        // Dialogs block, so run commands outside the panel closure
        if let Some(command) = clicked {
            self.run_command(ctx, command);
        }
    }

    fn status_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let image = self.session.image();
                let selection = self.session.selection();
                ui.label(format!("{} rows x {} cols", image.rows(), image.cols()));
                ui.separator();
                match image.get(selection.row, selection.col) {
                    Some(value) => ui.label(format!(
                        "({}, {}) = {}",
                        selection.row, selection.col, value
                    )),
                    None => ui.label("no selection"),
                };
                if let Some(status) = self.session.status() {
                    ui.separator();
                    ui.label(status);
                }
            });
        });
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let size = self.renderer.canvas_size(self.session.image());
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;

                // Selection follows pointer release, as a click does
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - origin;
                        if self
                            .session
                            .select_at(local.x, local.y, self.renderer.pixel_size())
                        {
                            log::debug!("Selected {:?}", self.session.selection());
                        }
                    }
                }

                self.renderer.paint(
                    &painter,
                    self.session.image(),
                    self.session.selection(),
                    origin,
                );
            });
        });
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);

        // Only the last dropped image ends up as the current one
        if let Some(dropped) = self.file_handler.take_dropped_images(ctx).pop() {
            if self.session.load_dropped(&dropped).is_ok() {
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for ImageProcessorApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.buttons_panel(ctx);
        self.status_panel(ctx);
        self.canvas(ctx);
        self.handle_dropped_files(ctx);
    }
}
