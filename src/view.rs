//! Display List
//!
//! In-memory model of the rendered card list. Each card gets its own
//! `CardKey`, the same way each DOM element has its own identity, so
//! rendering one record twice yields two independent cards.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Animal;

/// Handle to one rendered card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey(u64);

impl CardKey {
    pub fn get(self) -> u64 {
        self.0
    }

    /// Parse the value written to a card's `data-key` attribute
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(CardKey)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: CardKey,
    pub animal: Animal,
}

/// Ordered list of rendered cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardList {
    cards: Vec<Card>,
    next_key: u64,
}

impl CardList {
    /// Append a card for `animal`. No check for an existing card with the same id.
    pub fn render_card(&mut self, animal: Animal) -> CardKey {
        let key = CardKey(self.next_key);
        self.next_key += 1;
        self.cards.push(Card { key, animal });
        key
    }

    pub fn render_all(&mut self, animals: impl IntoIterator<Item = Animal>) -> Vec<CardKey> {
        animals.into_iter().map(|animal| self.render_card(animal)).collect()
    }

    /// Detach a card. `None` if it was already gone.
    pub fn remove_card(&mut self, key: CardKey) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.key == key)?;
        Some(self.cards.remove(index))
    }

    /// Rewrite only the donation counter of a card
    pub fn update_donation_count(&mut self, key: CardKey, value: u32) -> bool {
        match self.cards.iter_mut().find(|card| card.key == key) {
            Some(card) => {
                card.animal.donations = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: CardKey) -> Option<&Card> {
        self.cards.iter().find(|card| card.key == key)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cards currently showing the record `id`
    pub fn cards_for<'a>(
        &'a self,
        id: &'a crate::models::AnimalId,
    ) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |card| &card.animal.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The render surface the sync controller drives
///
/// Methods take `&self`; implementors are cheap shared handles to one list.
pub trait CardView: Clone {
    fn render_card(&self, animal: Animal) -> CardKey;

    fn remove_card(&self, key: CardKey) -> Option<Animal>;

    fn update_donation_count(&self, key: CardKey, value: u32) -> bool;

    /// Record currently shown by a card
    fn card(&self, key: CardKey) -> Option<Animal>;

    fn render_all(&self, animals: Vec<Animal>) -> Vec<CardKey> {
        animals.into_iter().map(|animal| self.render_card(animal)).collect()
    }
}

/// Shared list outside of any reactive runtime
pub type SharedCardList = Rc<RefCell<CardList>>;

impl CardView for SharedCardList {
    fn render_card(&self, animal: Animal) -> CardKey {
        self.borrow_mut().render_card(animal)
    }

    fn remove_card(&self, key: CardKey) -> Option<Animal> {
        self.borrow_mut().remove_card(key).map(|card| card.animal)
    }

    fn update_donation_count(&self, key: CardKey, value: u32) -> bool {
        self.borrow_mut().update_donation_count(key, value)
    }

    fn card(&self, key: CardKey) -> Option<Animal> {
        self.borrow().get(key).map(|card| card.animal.clone())
    }
}
