// src/gui/components/data_table.rs
//
// Read-only view of the last crawl. First column is the row index.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{data::ResultTable, gui::app::App};

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.table;
    if table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak(if app.running() { "Crawling…" } else { "No results yet" });
        });
        return;
    }

    let headers = ResultTable::HEADERS;
    let records = table.records();

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(40.0))
        .column(Column::initial(220.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::remainder().resizable(true).clip(true).at_least(120.0))
        .column(Column::initial(260.0).resizable(true).clip(true).at_least(60.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for h in headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, records.len(), |mut row| {
                let ix = row.index();
                let rec = &records[ix];
                row.col(|ui| {
                    ui.label(ix.to_string());
                });
                for cell in [&rec.volume_label, &rec.body_text, &rec.url] {
                    row.col(|ui| {
                        ui.label(cell.as_str()).on_hover_text(cell.as_str());
                    });
                }
            });
        });
}
