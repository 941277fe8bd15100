/// Identifies one of the three artworks on display.
///
/// The gallery only ever holds these three values, so an index outside
/// `1..=3` cannot be constructed once a value of this type exists.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ArtworkId {
    First,
    Second,
    Third,
}

impl ArtworkId {
    pub const ALL: [ArtworkId; 3] = [ArtworkId::First, ArtworkId::Second, ArtworkId::Third];

    /// Converts a 1-based index into an id, `None` outside `1..=3`.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(ArtworkId::First),
            2 => Some(ArtworkId::Second),
            3 => Some(ArtworkId::Third),
            _ => None,
        }
    }

    /// 1-based index as shown to the user.
    pub fn index(self) -> u8 {
        match self {
            ArtworkId::First => 1,
            ArtworkId::Second => 2,
            ArtworkId::Third => 3,
        }
    }

    /// 0-based position in the catalogue.
    pub fn slot(self) -> usize {
        self.index() as usize - 1
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    /// File stem resolved by the texture loader against the assets directory.
    pub image_ref: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub year: &'static str,
}

static CATALOGUE: [Artwork; 3] = [
    Artwork {
        id: ArtworkId::First,
        image_ref: "image_1",
        title: "The Starry Night",
        author: "Vincent van Gogh",
        year: "1889",
    },
    Artwork {
        id: ArtworkId::Second,
        image_ref: "image_2",
        title: "The Great Wave off Kanagawa",
        author: "Katsushika Hokusai",
        year: "1831",
    },
    Artwork {
        id: ArtworkId::Third,
        image_ref: "image_3",
        title: "Girl with a Pearl Earring",
        author: "Johannes Vermeer",
        year: "1665",
    },
];

pub fn lookup(id: ArtworkId) -> &'static Artwork {
    &CATALOGUE[id.slot()]
}

pub fn catalogue() -> &'static [Artwork] {
    &CATALOGUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_from_index() {
        for id in ArtworkId::ALL {
            assert_eq!(ArtworkId::from_index(id.index()), Some(id));
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(ArtworkId::from_index(0), None);
        assert_eq!(ArtworkId::from_index(4), None);
        assert_eq!(ArtworkId::from_index(u8::MAX), None);
    }

    #[test]
    fn lookup_returns_matching_record() {
        for id in ArtworkId::ALL {
            assert_eq!(lookup(id).id, id);
        }
    }

    #[test]
    fn lookup_records_are_distinct() {
        let a = lookup(ArtworkId::First);
        let b = lookup(ArtworkId::Second);
        let c = lookup(ArtworkId::Third);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_ne!(a.image_ref, b.image_ref);
        assert_ne!(b.image_ref, c.image_ref);
        assert_ne!(a.image_ref, c.image_ref);
    }

    #[test]
    fn lookup_is_stable() {
        for id in ArtworkId::ALL {
            assert!(std::ptr::eq(lookup(id), lookup(id)));
            assert_eq!(lookup(id), lookup(id));
        }
    }

    #[test]
    fn catalogue_is_ordered_by_index() {
        let ids: Vec<u8> = catalogue().iter().map(|a| a.id.index()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
