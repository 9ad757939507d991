// src/browser/mod.rs
//! Browser session seam.
//!
//! The pagination phase only talks to a [`Session`]: navigate, wait for an element,
//! click it, list the anchors below it, dump the page. `chrome` provides the real
//! implementation on top of headless Chrome; tests provide scripted ones.
//!
//! The search site's markup moves around between deployments, so every element we
//! need is described by a short, ordered list of [`Locator`]s and resolved with
//! [`resolve_first`]: first candidate that shows up wins.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tracing::debug;

use crate::error::Result;

pub mod chrome;

pub use chrome::ChromeSession;

/// One way of addressing an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    Css(&'static str),
    XPath(&'static str),
}

impl Locator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locator::Css(s) | Locator::XPath(s) => *s,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "css:{s}"),
            Locator::XPath(s) => write!(f, "xpath:{s}"),
        }
    }
}

/// An `<a>` element read out of the result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    /// Raw `href` attribute; `None` when the element has none.
    pub href: Option<String>,
    /// Outer HTML, for diagnostics.
    pub outer_html: String,
}

/// Capabilities the crawl needs from a live browser.
pub trait Session {
    fn navigate(&mut self, url: &str) -> Result<()>;

    fn current_url(&self) -> String;

    /// Full markup of the current page.
    fn page_source(&self) -> Result<String>;

    /// Wait up to `wait` for the element to appear and become clickable.
    fn is_present(&self, locator: &Locator, wait: Duration) -> bool;

    /// Click the element; returns its visible text.
    fn click(&mut self, locator: &Locator) -> Result<String>;

    /// Every anchor below the element. The outer `Err` means the container itself
    /// could not be read; an inner `Err` concerns one anchor only.
    fn anchors(&self, container: &Locator) -> Result<Vec<Result<Anchor>>>;

    /// Release the browser. Must be safe to call more than once.
    fn close(&mut self);
}

/// Try `candidates` in order and return the first one present within `wait`.
pub fn resolve_first<'a, S>(
    session: &S,
    candidates: &'a [Locator],
    wait: Duration,
) -> Option<&'a Locator>
where
    S: Session + ?Sized,
{
    candidates.iter().find(|locator| {
        let hit = session.is_present(locator, wait);
        debug!(%locator, hit, "selector candidate");
        hit
    })
}

/// Owns a session for the duration of a crawl and closes it on drop,
/// whichever way the crawl ends.
pub struct SessionGuard<S: Session> {
    inner: S,
}

impl<S: Session> SessionGuard<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Session> Deref for SessionGuard<S> {
    type Target = S;
    fn deref(&self) -> &S {
        &self.inner
    }
}

impl<S: Session> DerefMut for SessionGuard<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

impl<S: Session> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        debug!("closing browser session");
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Probe {
        present: Vec<&'static str>,
        tried: RefCell<Vec<&'static str>>,
        closed: Rc<Cell<usize>>,
    }

    impl Probe {
        fn new(present: &[&'static str]) -> Self {
            Self {
                present: present.to_vec(),
                tried: RefCell::new(Vec::new()),
                closed: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Session for Probe {
        fn navigate(&mut self, _url: &str) -> Result<()> { Ok(()) }
        fn current_url(&self) -> String { s!() }
        fn page_source(&self) -> Result<String> { Ok(s!()) }
        fn is_present(&self, locator: &Locator, _wait: Duration) -> bool {
            self.tried.borrow_mut().push(locator.as_str());
            self.present.contains(&locator.as_str())
        }
        fn click(&mut self, _locator: &Locator) -> Result<String> { Ok(s!()) }
        fn anchors(&self, _container: &Locator) -> Result<Vec<Result<Anchor>>> { Ok(Vec::new()) }
        fn close(&mut self) { self.closed.set(self.closed.get() + 1); }
    }

    const CANDIDATES: [Locator; 3] = [
        Locator::Css("#a"),
        Locator::XPath("//b"),
        Locator::Css("#c"),
    ];

    #[test]
    fn first_present_candidate_wins_and_order_is_kept() {
        let probe = Probe::new(&["//b", "#c"]);
        let hit = resolve_first(&probe, &CANDIDATES, Duration::ZERO);
        assert_eq!(hit, Some(&Locator::XPath("//b")));
        // stops at the first hit
        assert_eq!(*probe.tried.borrow(), vec!["#a", "//b"]);
    }

    #[test]
    fn none_when_every_candidate_times_out() {
        let probe = Probe::new(&[]);
        assert_eq!(resolve_first(&probe, &CANDIDATES, Duration::ZERO), None);
        assert_eq!(*probe.tried.borrow(), vec!["#a", "//b", "#c"]);
    }

    #[test]
    fn empty_candidate_list_resolves_to_none() {
        let probe = Probe::new(&["#a"]);
        assert_eq!(resolve_first(&probe, &[], Duration::ZERO), None);
        assert!(probe.tried.borrow().is_empty());
    }

    #[test]
    fn guard_closes_once_on_drop() {
        let probe = Probe::new(&[]);
        let closed = Rc::clone(&probe.closed);
        {
            let _guard = SessionGuard::new(probe);
            assert_eq!(closed.get(), 0);
        }
        assert_eq!(closed.get(), 1);
    }
}
