//! Single selection over a static option list

use shavolts_core::prelude::*;

/// The chosen entry of a non-empty static option list.
///
/// Defaults to the first option. Selecting replaces the whole choice;
/// an out-of-range index is rejected and leaves the current choice as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<T: 'static> {
    options: &'static [T],
    index: usize,
}

impl<T> Selection<T> {
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(options: &'static [T]) -> Self {
        assert!(!options.is_empty(), "selection needs at least one option");
        Self { options, index: 0 }
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.options.len() {
            return Err(Error::OptionOutOfRange {
                index,
                len: self.options.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static T {
        &self.options[self.index]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn options(&self) -> &'static [T] {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["128GB", "256GB", "512GB"];

    #[test]
    fn test_defaults_to_first_option() {
        let sel = Selection::new(SIZES);
        assert_eq!(sel.index(), 0);
        assert_eq!(*sel.current(), "128GB");
    }

    #[test]
    fn test_select_replaces() {
        let mut sel = Selection::new(SIZES);
        sel.select(2).unwrap();
        sel.select(1).unwrap();
        assert_eq!(*sel.current(), "256GB");
        assert!(sel.is_selected(1));
        assert!(!sel.is_selected(2));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut sel = Selection::new(SIZES);
        sel.select(1).unwrap();
        let err = sel.select(3).unwrap_err();
        assert!(matches!(err, Error::OptionOutOfRange { index: 3, len: 3 }));
        assert_eq!(sel.index(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one option")]
    fn test_empty_options_panic() {
        let _ = Selection::<u8>::new(&[]);
    }
}
