// src/gui/components/feed.rs
//
// Status line, progress bar and the running log of info/warnings.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{
    app::App,
    progress::{self, FeedEntry},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Drawn under the lock; the worker only waits out this frame.
    let shared = app.feed.clone();
    let feed = progress::lock(&shared);

    ui.label(RichText::new(&feed.status).strong());
    ui.add(egui::ProgressBar::new(feed.fraction).show_percentage());

    let warnings = feed.warnings();
    ui.horizontal(|ui| {
        if warnings > 0 {
            ui.colored_label(Color32::from_rgb(200, 140, 0), format!("{warnings} warning(s)"));
        }
        ui.checkbox(&mut app.state.gui.show_markup, "Show page dumps");
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("feed_scroll")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, entry) in feed.entries.iter().enumerate() {
                match entry {
                    FeedEntry::Info(msg) => {
                        ui.label(msg);
                    }
                    FeedEntry::Warn(msg) => {
                        ui.colored_label(Color32::from_rgb(200, 140, 0), format!("⚠ {msg}"));
                    }
                    FeedEntry::Markup(src) if app.state.gui.show_markup => {
                        egui::CollapsingHeader::new(format!("Page source ({} bytes)", src.len()))
                            .id_salt(("markup", i))
                            .show(ui, |ui| {
                                ui.add(
                                    egui::Label::new(RichText::new(src.as_str()).monospace().small())
                                        .wrap(),
                                );
                            });
                    }
                    FeedEntry::Markup(src) => {
                        ui.weak(format!("Page source dumped ({} bytes)", src.len()));
                    }
                }
            }
        });
}
