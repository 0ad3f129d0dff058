//! One-shot document title check run after the first render.

/// Anything with a readable and writable title.
pub trait TitleTarget {
    fn title(&self) -> String;
    fn set_title(&self, title: &str);
}

impl TitleTarget for web_sys::Document {
    fn title(&self) -> String {
        web_sys::Document::title(self)
    }

    fn set_title(&self, title: &str) {
        web_sys::Document::set_title(self, title)
    }
}

/// Writes `wanted` unless the target already carries it. Returns whether a
/// write happened.
pub fn ensure_title(target: &impl TitleTarget, wanted: &str) -> bool {
    if target.title() == wanted {
        return false;
    }
    target.set_title(wanted);
    true
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct FakeDocument {
        title: RefCell<String>,
        writes: Cell<usize>,
    }

    impl FakeDocument {
        fn titled(title: &str) -> Self {
            Self {
                title: RefCell::new(title.to_string()),
                writes: Cell::new(0),
            }
        }
    }

    impl TitleTarget for FakeDocument {
        fn title(&self) -> String {
            self.title.borrow().clone()
        }

        fn set_title(&self, title: &str) {
            *self.title.borrow_mut() = title.to_string();
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn sets_missing_title_once() {
        let document = FakeDocument::default();

        assert!(ensure_title(&document, "BeYou"));
        assert!(!ensure_title(&document, "BeYou"));

        assert_eq!(document.title(), "BeYou");
        assert_eq!(document.writes.get(), 1);
    }

    #[test]
    fn leaves_matching_title_alone() {
        let document = FakeDocument::titled("BeYou");

        assert!(!ensure_title(&document, "BeYou"));
        assert_eq!(document.writes.get(), 0);
    }

    #[test]
    fn replaces_a_different_title() {
        let document = FakeDocument::titled("Vite App");

        assert!(ensure_title(&document, "BeYou"));
        assert_eq!(document.title(), "BeYou");
        assert_eq!(document.writes.get(), 1);
    }
}
