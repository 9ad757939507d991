// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::{debug, error, info};

use crate::{config::options::ExportFormat, csv, file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.options.export.set_dir(&app.out_dir_text);
            debug!("UI: out dir → {}", app.state.options.export.out_dir().display());
        }

        let has_rows = !app.table.is_empty() && !app.running();

        if ui.add_enabled(has_rows, egui::Button::new("Export CSV")).clicked() {
            export(app, ExportFormat::Csv);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export HTML")).clicked() {
            export(app, ExportFormat::Html);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            match csv::to_csv_string(&app.table) {
                Ok(txt) => {
                    ui.ctx().copy_text(txt);
                    info!(rows = app.table.len(), "Copy: table → clipboard");
                    app.status("Copied to clipboard");
                }
                Err(e) => {
                    error!("Copy: failed: {e}");
                    app.warn(format!("Copy failed: {e}"));
                }
            }
        }
    });
    ui.add_space(4.0);
}

fn export(app: &mut App, format: ExportFormat) {
    let Some(query) = app.last_query.clone() else {
        app.status("Nothing to export");
        return;
    };
    match file::write_export(&app.state.options.export, &query, &app.table, format) {
        Ok(path) => app.status(format!("Exported {} rows → {}", app.table.len(), path.display())),
        Err(e) => {
            error!("Export: {:?} failed: {e}", format);
            app.warn(format!("Export failed: {e}"));
        }
    }
}
