//! Search coordination
//!
//! The search box belongs to the presentation layer; the filter belongs to
//! the catalog. [`SearchCoordinator`] holds the box's text and forwards it
//! to whichever [`SearchTarget`] the caller hands in.

/// Anything that can be narrowed by a free-text term
pub trait SearchTarget {
    fn search(&mut self, term: &str);
}

/// State of the search input
#[derive(Debug, Default, Clone)]
pub struct SearchCoordinator {
    input: String,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Input changed; clearing the box clears the results right away
    pub fn set_input<T: SearchTarget + ?Sized>(&mut self, text: impl Into<String>, target: &mut T) {
        self.input = text.into();
        if self.input.is_empty() {
            target.search("");
        }
    }

    /// Search submitted
    pub fn submit<T: SearchTarget + ?Sized>(&self, target: &mut T) {
        target.search(&self.input);
    }

    pub fn clear<T: SearchTarget + ?Sized>(&mut self, target: &mut T) {
        self.set_input(String::new(), target);
    }
}
