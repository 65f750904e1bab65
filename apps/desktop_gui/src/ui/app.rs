use std::time::Duration;

use catalog_core::{CatalogAction, CatalogView};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::error::CatalogFailure;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::CatalogController,
};
use crate::ui::widgets::{self, ProductForm, LOADING_PLACEHOLDERS};

pub const APP_TITLE: &str = "My Products";

pub struct CatalogGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: CatalogController,
    form: ProductForm,
}

impl CatalogGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller: CatalogController::new(),
            form: ProductForm::default(),
        };
        app.run_action(CatalogAction::Mount);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(cmd) = self.controller.handle_event(event) {
                self.queue(cmd);
            }
        }
    }

    fn run_action(&mut self, action: CatalogAction) {
        if let Some(cmd) = self.controller.apply(action) {
            self.queue(cmd);
        }
    }

    fn queue(&mut self, cmd: BackendCommand) {
        let is_fetch = matches!(cmd, BackendCommand::FetchCatalog);
        let mut status = String::new();
        if dispatch_backend_command(&self.cmd_tx, cmd, &mut status) {
            return;
        }
        self.controller.set_status_line(status.clone());
        let action = if is_fetch {
            CatalogAction::CatalogLoadFailed(CatalogFailure::load(status))
        } else {
            CatalogAction::ProductCreateFailed(CatalogFailure::submit(status))
        };
        self.run_action(action);
    }

    fn show_header(&self, ctx: &egui::Context, actions: &mut Vec<CatalogAction>) {
        egui::TopBottomPanel::top("catalog_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(APP_TITLE).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add New Product").clicked() {
                        actions.push(CatalogAction::OpenModal);
                    }
                    ui.label(egui::RichText::new(self.controller.status_line()).weak());
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_catalog(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.controller.state().view() {
                    CatalogView::Loading => {
                        ui.horizontal_wrapped(|ui| {
                            for _ in 0..LOADING_PLACEHOLDERS {
                                widgets::loading_placeholder(ui);
                            }
                        });
                    }
                    CatalogView::Error => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(ui.available_height() / 3.0);
                            ui.label(
                                egui::RichText::new("No Data to show")
                                    .size(40.0)
                                    .strong()
                                    .color(egui::Color32::from_rgb(0xef, 0x44, 0x44)),
                            );
                            if let Some(err) = self.controller.load_error() {
                                ui.label(egui::RichText::new(err.hint()).weak());
                            }
                        });
                    }
                    CatalogView::Grid(products) => {
                        ui.horizontal_wrapped(|ui| {
                            for product in products {
                                widgets::product_card(ui, product);
                            }
                        });
                    }
                });
        });
    }

    fn show_add_product_modal(&mut self, ctx: &egui::Context, actions: &mut Vec<CatalogAction>) {
        if !self.controller.state().is_modal_open() {
            return;
        }

        egui::Window::new("Add Product Form")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                if widgets::product_form(ui, &mut self.form) {
                    actions.push(CatalogAction::DraftChanged(self.form.snapshot()));
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Add Product").clicked() {
                        actions.push(CatalogAction::Submit);
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(CatalogAction::CancelModal);
                    }
                    if ui.small_button("Clear").clicked() {
                        self.form.clear();
                        actions.push(CatalogAction::ClearDraft);
                    }
                });
            });
    }
}

impl eframe::App for CatalogGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_header(ctx, &mut actions);
        self.show_add_product_modal(ctx, &mut actions);
        self.show_catalog(ctx);

        for action in actions {
            self.run_action(action);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::{LoadStatus, Product, ProductDraft, ProductId};

    use super::*;

    fn app() -> (CatalogGuiApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (CatalogGuiApp::new(cmd_tx, ui_rx), cmd_rx, ui_tx)
    }

    #[test]
    fn construction_requests_catalog_exactly_once() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.process_ui_events();
        app.process_ui_events();

        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::FetchCatalog));
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.controller.state().status(), LoadStatus::Loading);
    }

    #[test]
    fn submit_queues_creation_and_appends_reply() {
        let (mut app, cmd_rx, ui_tx) = app();
        cmd_rx.try_recv().expect("fetch command");
        ui_tx
            .send(UiEvent::Catalog(CatalogAction::CatalogLoaded(Vec::new())))
            .expect("send");
        app.process_ui_events();

        let draft = ProductDraft {
            title: Some("New".into()),
            price: Some(5.0),
            ..ProductDraft::default()
        };
        app.run_action(CatalogAction::OpenModal);
        app.run_action(CatalogAction::DraftChanged(draft.clone()));
        app.run_action(CatalogAction::Submit);
        assert!(!app.controller.state().is_modal_open());
        assert_eq!(
            cmd_rx.try_recv().ok(),
            Some(BackendCommand::CreateProduct { draft })
        );

        let created = Product {
            id: ProductId(2),
            title: "New".into(),
            price: 5.0,
            description: String::new(),
            category: String::new(),
            image: String::new(),
        };
        ui_tx
            .send(UiEvent::Catalog(CatalogAction::ProductCreated(created.clone())))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.controller.state().products().last(), Some(&created));
    }

    #[test]
    fn disconnected_backend_turns_pending_load_into_error() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);
        drop(cmd_rx);

        let app = CatalogGuiApp::new(cmd_tx, ui_rx);
        assert_eq!(app.controller.state().status(), LoadStatus::Error);
        assert!(app.controller.status_line().contains("disconnected"));
    }
}
