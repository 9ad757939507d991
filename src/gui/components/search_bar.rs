// src/gui/components/search_bar.rs
use eframe::egui::{self, widgets::Spinner};

use crate::{data::PageType, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("검색어:");
        let resp = ui.add_enabled(
            !app.running(),
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text("Search term")
                .desired_width(260.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.separator();
        for pt in PageType::ALL {
            ui.add_enabled_ui(!app.running(), |ui| {
                ui.radio_value(&mut app.state.gui.page_type, pt, pt.label());
            });
        }
        ui.separator();

        let clicked = ui
            .add_enabled(!app.running(), egui::Button::new("Search & crawl"))
            .clicked();
        if clicked || submitted {
            app.start_crawl(ui.ctx());
        }

        if app.running() {
            ui.add(Spinner::new());
        }
    });
    ui.add_space(4.0);
}
