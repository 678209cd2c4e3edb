//! Client-side pagination cursor.

use std::ops::Range;

/// Page index and size over the visible subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub index: usize,
    pub size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self { index: 0, size: 10 }
    }
}

impl PageWindow {
    pub fn new(size: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
        }
    }

    /// Number of pages for `len` items; an empty list still has one page.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size.max(1)).max(1)
    }

    /// Positions `[index*size, index*size+size)` clipped to `len`.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.index.saturating_mul(self.size).min(len);
        let end = start.saturating_add(self.size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// 1-based "first–last of total" label used under tables.
    pub fn label(&self, len: usize) -> String {
        let range = self.range(len);
        if range.is_empty() {
            format!("0 of {}", len)
        } else {
            format!("{}-{} of {}", range.start + 1, range.end, len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_page_is_short() {
        let items: Vec<u32> = (0..23).collect();
        let window = PageWindow { index: 2, size: 10 };
        assert_eq!(window.slice(&items), &[20, 21, 22]);
        assert_eq!(window.page_count(items.len()), 3);
    }

    #[test]
    fn slice_never_leaves_its_window() {
        let items: Vec<u32> = (0..17).collect();
        for size in 1..6 {
            for index in 0..8 {
                let window = PageWindow { index, size };
                let range = window.range(items.len());
                assert!(range.start >= index * size || range.is_empty());
                assert!(range.end <= index * size + size);
                assert_eq!(window.slice(&items).len(), range.len());
            }
        }
    }

    #[test]
    fn past_the_end_is_empty() {
        let items = [1, 2, 3];
        let window = PageWindow { index: 5, size: 10 };
        assert!(window.slice(&items).is_empty());
        assert_eq!(window.label(items.len()), "0 of 3");
    }

    #[test]
    fn empty_list_has_one_page() {
        assert_eq!(PageWindow::new(10).page_count(0), 1);
    }

    #[test]
    fn label_is_one_based() {
        let window = PageWindow { index: 1, size: 5 };
        assert_eq!(window.label(12), "6-10 of 12");
    }

    #[test]
    fn zero_size_is_raised_to_one() {
        assert_eq!(PageWindow::new(0).size, 1);
    }
}
