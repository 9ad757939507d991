// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul or Hanja glyphs. Pick up the first
// CJK font installed on the system and append it as a fallback.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

const FONT_NAME: &str = "cjk";

const CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
    "C:\\Windows\\Fonts\\gulim.ttc",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
];

pub fn install(ctx: &egui::Context) {
    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|b| (*p, b)))
    else {
        warn!("fonts: no CJK font found; Korean text may not render");
        return;
    };

    let mut defs = FontDefinitions::default();
    defs.font_data.insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        defs.families.entry(family).or_default().push(s!(FONT_NAME));
    }
    ctx.set_fonts(defs);
    info!(path, "fonts: loaded CJK fallback");
}
