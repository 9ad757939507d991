// src/config/state.rs
use super::options::AppOptions;
use crate::data::PageType;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Search box contents
    pub query: String,
    /// Which result tab to crawl
    pub page_type: PageType,

    pub window_w: u32,
    pub window_h: u32,

    /// Collapse markup dumps in the feed
    pub show_markup: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            page_type: PageType::Translated,
            window_w: 1100,
            window_h: 700,
            show_markup: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
