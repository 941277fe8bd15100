use crate::artwork::{self, Artwork, ArtworkId};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GalleryEvent {
    Previous, // Step counter-clockwise, 1 wraps to 3
    Next,     // Step clockwise, 3 wraps to 1
}

/// Cursor over the three artworks, arranged as a ring.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GalleryState {
    current: ArtworkId,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self { current: ArtworkId::First }
    }

    pub fn starting_at(current: ArtworkId) -> Self {
        Self { current }
    }

    pub fn current(&self) -> ArtworkId {
        self.current
    }

    pub fn current_index(&self) -> u8 {
        self.current.index()
    }

    pub fn artwork(&self) -> &'static Artwork {
        artwork::lookup(self.current)
    }

    pub fn next(&mut self) {
        self.current = match self.current {
            ArtworkId::First => ArtworkId::Second,
            ArtworkId::Second => ArtworkId::Third,
            ArtworkId::Third => ArtworkId::First,
        };
    }

    pub fn previous(&mut self) {
        self.current = match self.current {
            ArtworkId::First => ArtworkId::Third,
            ArtworkId::Second => ArtworkId::First,
            ArtworkId::Third => ArtworkId::Second,
        };
    }

    /// Applies a user event and returns the newly selected artwork.
    pub fn apply(&mut self, event: GalleryEvent) -> ArtworkId {
        match event {
            GalleryEvent::Previous => self.previous(),
            GalleryEvent::Next => self.next(),
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(index: u8) -> GalleryState {
        GalleryState::starting_at(ArtworkId::from_index(index).unwrap())
    }

    #[test]
    fn starts_at_first_artwork() {
        let state = GalleryState::new();
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.artwork().id, ArtworkId::First);
        assert_eq!(GalleryState::default(), state);
    }

    #[test]
    fn next_from_first_goes_to_second() {
        let mut state = GalleryState::new();
        state.next();
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn previous_from_first_wraps_to_third() {
        let mut state = GalleryState::new();
        state.previous();
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn next_from_third_wraps_to_first() {
        let mut state = at(3);
        state.next();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn mixed_walk_from_second() {
        let mut state = at(2);
        state.next();
        assert_eq!(state.current_index(), 3);
        state.next();
        assert_eq!(state.current_index(), 1);
        state.previous();
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn three_steps_return_to_start() {
        for start in 1..=3 {
            let mut forward = at(start);
            let mut backward = at(start);
            for _ in 0..3 {
                forward.next();
                backward.previous();
            }
            assert_eq!(forward.current_index(), start);
            assert_eq!(backward.current_index(), start);
        }
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for start in 1..=3 {
            let mut state = at(start);
            state.next();
            state.previous();
            assert_eq!(state.current_index(), start);

            state.previous();
            state.next();
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn apply_dispatches_events() {
        let mut state = GalleryState::new();
        assert_eq!(state.apply(GalleryEvent::Next), ArtworkId::Second);
        assert_eq!(state.apply(GalleryEvent::Previous), ArtworkId::First);
        assert_eq!(state.apply(GalleryEvent::Previous), ArtworkId::Third);
    }

    #[test]
    fn artwork_follows_cursor() {
        let mut state = GalleryState::new();
        state.next();
        assert_eq!(state.artwork(), artwork::lookup(ArtworkId::Second));
    }

    fn event() -> impl Strategy<Value = GalleryEvent> {
        prop_oneof![Just(GalleryEvent::Previous), Just(GalleryEvent::Next)]
    }

    proptest! {
        #[test]
        fn index_stays_in_range(events in proptest::collection::vec(event(), 0..200)) {
            let mut state = GalleryState::new();
            for e in events {
                state.apply(e);
                prop_assert!((1..=3).contains(&state.current_index()));
            }
        }

        #[test]
        fn index_equals_net_steps_mod_three(events in proptest::collection::vec(event(), 0..200)) {
            let mut state = GalleryState::new();
            let mut net: i64 = 0;
            for e in &events {
                state.apply(*e);
                net += match e {
                    GalleryEvent::Next => 1,
                    GalleryEvent::Previous => -1,
                };
            }
            prop_assert_eq!(state.current_index() as i64, net.rem_euclid(3) + 1);
        }
    }
}
