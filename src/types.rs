use std::num::NonZeroI64;

pub type CityId = u32;
pub type Distance = u32;

/// A single entry in the traversal queue: either a city awaiting a visit, or
/// a marker announcing that the next entries belong to a deeper BFS frontier.
///
/// Encoded in one signed word: cities are stored biased by +1 in the positive
/// range (so city 0 is representable), frontier markers as the negated depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Token(NonZeroI64);

impl Token {
    /// Creates a token for a city awaiting visitation.
    #[inline(always)]
    pub fn city(id: CityId) -> Self {
        // id + 1 > 0, so the NonZeroI64 constructor cannot fail.
        Token(NonZeroI64::new(id as i64 + 1).unwrap())
    }

    /// Creates a marker token: every entry dequeued after it sits `depth`
    /// hops from the search origin.
    #[inline(always)]
    pub fn level(depth: Distance) -> Self {
        Token(NonZeroI64::new(-(depth as i64 + 1)).unwrap())
    }

    /// Returns `true` if this token holds a city.
    #[inline(always)]
    pub fn is_city(self) -> bool {
        self.raw() > 0
    }

    /// Returns `true` if this token is a frontier marker.
    #[inline(always)]
    pub fn is_level(self) -> bool {
        self.raw() < 0
    }

    /// Returns the city held by this token.
    #[inline(always)]
    pub fn city_id(self) -> CityId {
        debug_assert!(self.is_city(), "token is a frontier marker, not a city");
        (self.raw() - 1) as CityId
    }

    /// Returns the frontier depth announced by this marker.
    #[inline(always)]
    pub fn depth(self) -> Distance {
        debug_assert!(self.is_level(), "token is a city, not a frontier marker");
        (-self.raw() - 1) as Distance
    }

    /// Returns the underlying i64 value.
    #[inline(always)]
    pub fn raw(self) -> i64 {
        self.0.get()
    }
}
