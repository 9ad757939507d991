/// Lightweight progress reporting used by the crawl (pagination + article fetch).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a phase with the total number of items (0 if unknown).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something was skipped or gave up; the crawl carries on.
    fn warn(&mut self, _msg: &str) {}

    /// Raw page markup, dumped when the page did not look like we expected.
    fn markup(&mut self, _source: &str) {}

    /// Overall fraction of the current phase, 0.0..=1.0.
    fn advance(&mut self, _fraction: f32) {}

    /// Called when one article URL has been handled (fetched or skipped).
    fn item_done(&mut self, _url: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
