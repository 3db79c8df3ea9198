use slidecast_types::SlideId;

/// Ordered slides plus the index of the one on screen
///
/// `current` stays within bounds whenever `slides` is non-empty and is 0
/// when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<SlideId>,
    current: usize,
}

impl SlideDeck {
    pub fn new(slides: Vec<SlideId>) -> Self {
        Self { slides, current: 0 }
    }

    /// Replace the whole deck and go back to the first slide
    pub fn replace(&mut self, slides: Vec<SlideId>) {
        self.slides = slides;
        self.current = 0;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Whether `go_to(index)` would change the displayed slide
    pub fn can_go_to(&self, index: usize) -> bool {
        index < self.slides.len() && index != self.current
    }

    /// Jump to `index`; out-of-range indices are ignored
    ///
    /// Returns whether the displayed slide changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.can_go_to(index) {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn current_slide(&self) -> Option<&SlideId> {
        self.slides.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based position and total, for "Slide X of N"
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.slides.is_empty() {
            None
        } else {
            Some((self.current + 1, self.slides.len()))
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.slides.len()
    }

    pub fn slides(&self) -> &[SlideId] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn deck(n: usize) -> SlideDeck {
        SlideDeck::new((1..=n).map(|i| format!("s{i}.png")).collect())
    }

    #[test]
    fn test_new_deck_starts_at_first_slide() {
        let deck = deck(3);
        assert_eq!(deck.current_slide().map(String::as_str), Some("s1.png"));
        assert_eq!(deck.position(), Some((1, 3)));
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut deck = deck(2);
        assert!(!deck.previous());
        assert_eq!(deck.current_index(), 0);

        assert!(deck.next());
        assert!(!deck.next());
        assert_eq!(deck.current_index(), 1);
        assert!(deck.is_last());
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut deck = deck(2);
        assert!(!deck.go_to(7));
        assert_eq!(deck.current_index(), 0);
        assert!(deck.go_to(1));
        assert_eq!(deck.current_slide().map(String::as_str), Some("s2.png"));
    }

    #[test]
    fn test_can_go_to_leaves_deck_untouched() {
        let deck = deck(3);
        assert!(deck.can_go_to(2));
        assert!(!deck.can_go_to(0));
        assert!(!deck.can_go_to(3));
        assert_eq!(deck.current_index(), 0);
        assert!(!SlideDeck::default().can_go_to(0));
    }

    #[test]
    fn test_replace_resets_index() {
        let mut deck = deck(3);
        deck.go_to(2);
        deck.replace(vec!["a.png".to_string()]);
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.position(), Some((1, 1)));
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = SlideDeck::default();
        assert!(!deck.next());
        assert!(!deck.previous());
        assert_eq!(deck.current_slide(), None);
        assert_eq!(deck.position(), None);
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_bounds(len in 1usize..20, moves in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut deck = deck(len);
            for forward in moves {
                if forward { deck.next(); } else { deck.previous(); }
                prop_assert!(deck.current_index() < deck.len());
            }
        }
    }
}
