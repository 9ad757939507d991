// src/gui/progress.rs
use std::sync::{Arc, Mutex, MutexGuard};

use eframe::egui;

use crate::progress::Progress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedEntry {
    Info(String),
    Warn(String),
    /// Page source dumped after a failed lookup
    Markup(String),
}

/// Everything the worker thread reports, read by the UI every frame.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    pub status: String,
    /// 0.0..=1.0 of the current phase
    pub fraction: f32,
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    pub fn clear(&mut self) {
        *self = Feed::default();
    }

    pub fn push(&mut self, entry: FeedEntry) {
        self.entries.push(entry);
    }

    pub fn warnings(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, FeedEntry::Warn(_))).count()
    }
}

pub type SharedFeed = Arc<Mutex<Feed>>;

/// Lock the feed. A poisoned lock only means an earlier frame panicked; keep going.
pub fn lock(feed: &SharedFeed) -> MutexGuard<'_, Feed> {
    match feed.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Feed writer for the worker thread. Every update asks egui for a repaint.
pub struct GuiProgress {
    feed: SharedFeed,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(feed: SharedFeed, ctx: egui::Context) -> Self {
        Self { feed, ctx, done: 0, total: 0 }
    }

    fn with_feed(&self, f: impl FnOnce(&mut Feed)) {
        let mut guard = lock(&self.feed);
        f(&mut *guard);
        drop(guard);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.done = 0;
        self.total = total;
        self.with_feed(|f| f.fraction = 0.0);
    }
    fn log(&mut self, msg: &str) {
        self.with_feed(|f| {
            f.status = s!(msg);
            f.push(FeedEntry::Info(s!(msg)));
        });
    }
    fn warn(&mut self, msg: &str) {
        self.with_feed(|f| f.push(FeedEntry::Warn(s!(msg))));
    }
    fn markup(&mut self, source: &str) {
        self.with_feed(|f| f.push(FeedEntry::Markup(s!(source))));
    }
    fn advance(&mut self, fraction: f32) {
        self.with_feed(|f| f.fraction = fraction.clamp(0.0, 1.0));
    }
    fn item_done(&mut self, _url: &str) {
        self.done += 1;
        let msg = format!("Fetched article {}/{}", self.done, self.total);
        self.with_feed(|f| f.status = msg);
    }
    fn finish(&mut self) {
        let msg = if self.total == 0 {
            s!("Crawl complete")
        } else {
            format!("Crawl complete ({}/{})", self.done, self.total)
        };
        self.with_feed(|f| {
            f.status = msg;
            f.fraction = 1.0;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_collects_entries_in_order() {
        let feed: SharedFeed = Arc::default();
        let mut p = GuiProgress::new(feed.clone(), egui::Context::default());
        p.begin(2);
        p.log("start");
        p.warn("skipped");
        p.markup("<html/>");
        p.item_done("a");
        p.item_done("b");
        p.finish();

        let f = feed.lock().unwrap();
        assert_eq!(f.entries.len(), 3);
        assert_eq!(f.entries[1], FeedEntry::Warn(s!("skipped")));
        assert_eq!(f.warnings(), 1);
        assert_eq!(f.status, "Crawl complete (2/2)");
        assert_eq!(f.fraction, 1.0);
    }

    #[test]
    fn feed_survives_a_poisoned_lock() {
        let feed: SharedFeed = Arc::default();
        let poisoner = feed.clone();
        let _ = std::thread::spawn(move || {
            let _g = poisoner.lock().unwrap();
            panic!("frame panicked");
        })
        .join();
        assert!(feed.is_poisoned());

        let mut p = GuiProgress::new(feed.clone(), egui::Context::default());
        p.warn("still here");
        assert_eq!(lock(&feed).warnings(), 1);
    }
}
