/// Client-side "load more" window over the fetched list: 8 cards up front,
/// 4 more per activation. The controller resets the window whenever a fetch
/// replaces the list, so a new search always starts back at 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListWindow {
    visible: usize,
}

const INITIAL_VISIBLE: usize = 8;
const LOAD_MORE_STEP: usize = 4;

impl Default for ListWindow {
    fn default() -> Self {
        ListWindow {
            visible: INITIAL_VISIBLE,
        }
    }
}

impl ListWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many of `len` items are currently shown.
    pub fn visible(&self, len: usize) -> usize {
        self.visible.min(len)
    }

    /// Whether a "load more" control should be offered.
    pub fn has_more(&self, len: usize) -> bool {
        len > self.visible
    }

    pub fn load_more(&mut self) {
        self.visible += LOAD_MORE_STEP;
    }

    pub fn reset(&mut self) {
        self.visible = INITIAL_VISIBLE;
    }
}

#[cfg(test)]
mod test {
    use crate::paging::*;

    #[test]
    fn ten_items_show_eight_then_all() {
        let mut window = ListWindow::new();
        assert_eq!(window.visible(10), 8);
        assert!(window.has_more(10));

        window.load_more();
        assert_eq!(window.visible(10), 10);
        assert!(!window.has_more(10));
    }

    #[test]
    fn short_lists_never_offer_load_more() {
        let window = ListWindow::new();
        assert_eq!(window.visible(3), 3);
        assert!(!window.has_more(3));
        assert!(!window.has_more(8));
    }

    #[test]
    fn reset_returns_to_initial_count() {
        let mut window = ListWindow::new();
        window.load_more();
        window.load_more();
        assert_eq!(window.visible(30), 16);

        window.reset();
        assert_eq!(window.visible(30), 8);
    }
}
