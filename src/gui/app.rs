// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex, MutexGuard},
    thread,
};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::state::AppState,
    data::{ResultTable, SearchQuery},
    runner,
    scrape::CrawlOutcome,
};

use super::progress::{Feed, FeedEntry, GuiProgress, SharedFeed};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sillok Crawler",
        options,
        Box::new(|cc| {
            super::fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )?;
    Ok(())
}

type WorkerResult = Result<CrawlOutcome, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output dir text field (mapped into ExportOptions on change)
    pub out_dir_text: String,

    // status/progress (worker writes here)
    pub feed: SharedFeed,

    // last finished crawl
    pub table: ResultTable,
    pub last_query: Option<SearchQuery>,

    worker: Option<mpsc::Receiver<WorkerResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();
        let feed = Feed { status: s!("Idle"), ..Feed::default() };
        Self {
            state,
            out_dir_text,
            feed: Arc::new(Mutex::new(feed)),
            table: ResultTable::new(),
            last_query: None,
            worker: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.worker.is_some()
    }

    pub fn feed(&self) -> MutexGuard<'_, Feed> {
        super::progress::lock(&self.feed)
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        self.feed().status = msg.into();
    }

    pub fn warn<T: Into<String>>(&self, msg: T) {
        let msg = msg.into();
        let mut feed = self.feed();
        feed.status = msg.clone();
        feed.push(FeedEntry::Warn(msg));
    }

    /// Kick off a crawl on a worker thread. No-op while one is running.
    pub fn start_crawl(&mut self, ctx: &egui::Context) {
        if self.running() {
            return;
        }

        let text = self.state.gui.query.trim();
        if text.is_empty() {
            self.warn("Please enter a search term");
            return;
        }

        let query = SearchQuery::new(text, self.state.gui.page_type);
        let options = self.state.options.crawl.clone();
        info!(query = %query.text, tab = %query.page_type, "UI: crawl requested");

        self.feed().clear();
        self.table = ResultTable::new();
        self.last_query = Some(query.clone());

        let (tx, rx) = mpsc::channel();
        let feed = self.feed.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let mut prog = GuiProgress::new(feed, ctx.clone());
            let res = runner::run_crawl(&query, &options, Some(&mut prog)).map_err(|e| e.to_string());
            // UI may be gone already
            let _ = tx.send(res);
            ctx.request_repaint();
        });
        self.worker = Some(rx);
    }

    fn poll_worker(&mut self) {
        let Some(rx) = &self.worker else { return };
        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => Err(s!("Crawl worker stopped unexpectedly")),
        };
        self.worker = None;

        match res {
            Ok(outcome) => {
                let n = outcome.table.len();
                info!(rows = n, end = ?outcome.end, "UI: crawl finished");
                let mut feed = self.feed();
                let msg = format!("Found {n} results");
                feed.status = msg.clone();
                feed.push(FeedEntry::Info(msg));
                drop(feed);
                self.table = outcome.table;
            }
            Err(e) => {
                error!("UI: crawl failed: {e}");
                self.warn(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            super::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            super::components::export_bar::draw(ui, self);
        });

        egui::SidePanel::right("feed")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                super::components::feed::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::data_table::draw(ui, self);
        });
    }
}
