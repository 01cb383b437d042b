//! Cyclic navigation over a fixed list of content sections.

/// One page of static titled content.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Section heading.
    pub title: &'static str,
    /// Facts revealed one by one, in order.
    pub facts: &'static [&'static str],
}

/// A cyclic index over a fixed, non-empty list of sections.
///
/// Both operations are total: modular arithmetic keeps the index in
/// `[0, count)` for any sequence of calls.
#[derive(Debug, Clone, Copy)]
pub struct SectionNavigator {
    index: usize,
    count: usize,
}

impl SectionNavigator {
    /// Create a navigator over `count` sections, starting at the first.
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    /// The currently displayed section index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next section, wrapping at the end.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.count;
    }

    /// Move to the previous section, wrapping at the start.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.count - 1) % self.count;
    }
}
