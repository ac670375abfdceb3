/// Identifier handed out by a [`Sequence`]. Later tokens compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(u64);

impl Token {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic token source used to recognise superseded work.
///
/// Whoever starts a unit of work calls [`Sequence::advance`] and tags the
/// result with the returned token; whoever receives the result applies it
/// only if [`Sequence::is_current`] still holds.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    current: Token,
}

impl Sequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> Token {
        self.current = Token(self.current.0.saturating_add(1));
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Token {
        self.current
    }

    #[must_use]
    pub fn is_current(&self, token: Token) -> bool {
        self.current == token
    }
}
