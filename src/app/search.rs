use crate::{
    data::geocode::is_searchable,
    domain::weather::Place,
    resilience::sequence::{Sequence, Token},
};

/// Query text, geocoder suggestions and the highlighted row.
///
/// Every edit advances the token, so a lookup started for an older query
/// is recognised as stale when its result comes back.
#[derive(Debug, Default)]
pub struct SearchBox {
    query: String,
    suggestions: Vec<Place>,
    selected: Option<usize>,
    visible: bool,
    tokens: Sequence,
}

impl SearchBox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Place] {
        &self.suggestions
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn showing_suggestions(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    #[must_use]
    pub fn is_current(&self, token: Token) -> bool {
        self.tokens.is_current(token)
    }

    /// Replaces the query. Returns the token a debounced lookup should
    /// carry, or `None` when the query is too short to search.
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<Token> {
        self.query = query.into();
        let token = self.tokens.advance();
        if is_searchable(&self.query) {
            Some(token)
        } else {
            self.clear_suggestions();
            None
        }
    }

    pub fn push_char(&mut self, ch: char) -> Option<Token> {
        let mut query = std::mem::take(&mut self.query);
        query.push(ch);
        self.set_query(query)
    }

    pub fn pop_char(&mut self) -> Option<Token> {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query)
    }

    /// Stores `places` if `token` still belongs to the latest query.
    pub fn apply_suggestions(&mut self, token: Token, places: Vec<Place>) -> bool {
        if !self.tokens.is_current(token) {
            return false;
        }
        self.visible = !places.is_empty();
        self.suggestions = places;
        self.selected = None;
        true
    }

    pub fn select_next(&mut self) {
        if !self.showing_suggestions() {
            return;
        }
        let len = self.suggestions.len();
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if !self.showing_suggestions() {
            return;
        }
        let len = self.suggestions.len();
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    /// Takes the highlighted suggestion, or the first one when nothing is
    /// highlighted. The query becomes the place name and any lookup still
    /// in flight is invalidated.
    pub fn choose(&mut self) -> Option<Place> {
        let idx = self.selected.unwrap_or(0);
        let place = self.suggestions.get(idx).cloned()?;
        self.query.clone_from(&place.name);
        self.tokens.advance();
        self.clear_suggestions();
        Some(place)
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.visible = false;
    }
}
