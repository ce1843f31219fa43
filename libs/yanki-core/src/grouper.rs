//! Partitioning entries into decks.

use std::collections::HashMap;

use crate::types::{Deck, Entry};

/// Group entries by deck name.
///
/// Decks come out in the order their names are first seen and keep their
/// entries in input order.
pub fn group_entries<I>(entries: I) -> Vec<Deck>
where
    I: IntoIterator<Item = Entry>,
{
    let mut decks: Vec<Deck> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let slot = match index.get(entry.deck_name()) {
            Some(&slot) => slot,
            None => {
                let slot = decks.len();
                index.insert(entry.deck_name().to_string(), slot);
                decks.push(Deck::new(entry.deck_name()));
                slot
            }
        };
        decks[slot].entries.push(entry);
    }

    tracing::debug!(decks = decks.len(), "grouped entries");
    decks
}
