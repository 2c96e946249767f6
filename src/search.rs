//! Depth-first search over the trie, one word slot at a time.
//!
//! Each slot holds a cursor into the trie. A letter is taken by stepping the
//! slot's cursor to a child and marking the letter in use; it is given back
//! by stepping to the parent and clearing the mark. The marked set therefore
//! always equals the union of the letters under the cursors.
//!
//! Slots are ordered by first letter: a slot only starts with letters after
//! the previous slot's first letter. Since no letter is shared between slots,
//! every unordered set of signatures is reached exactly once.

use std::io::Write;

use itertools::Itertools;

use crate::anagram::AnagramClass;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::letters::{LetterSet, ALPHABET_SIZE};
use crate::outcome::SharedOutcome;
use crate::trie::{NodeId, Trie};

/// Letters in use and one trie cursor per word slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    used: LetterSet,
    cursors: Vec<NodeId>,
}

impl SearchState {
    /// Every slot at the root, nothing in use.
    pub fn new(word_count: usize) -> Self {
        SearchState {
            used: LetterSet::EMPTY,
            cursors: vec![NodeId::ROOT; word_count],
        }
    }

    pub fn used(&self) -> LetterSet {
        self.used
    }

    pub fn cursor(&self, slot: usize) -> NodeId {
        self.cursors[slot]
    }

    pub fn word_count(&self) -> usize {
        self.cursors.len()
    }

    /// Moves `slot` down to its child on `letter`, marking the letter.
    /// Returns false, changing nothing, when there is no such child or the
    /// letter is already taken.
    pub fn advance(&mut self, trie: &Trie, slot: usize, letter: u8) -> bool {
        if self.used.contains(letter) {
            return false;
        }
        match trie.child(self.cursors[slot], letter) {
            Some(child) => {
                self.used.insert(letter);
                self.cursors[slot] = child;
                true
            }
            None => false,
        }
    }

    /// Undoes the last [`advance`](Self::advance) of `slot`.
    pub fn retreat(&mut self, trie: &Trie, slot: usize) {
        let node = self.cursors[slot];
        if let (Some(letter), Some(parent)) = (trie.letter(node), trie.parent(node)) {
            self.used.remove(letter);
            self.cursors[slot] = parent;
        }
    }
}

/// Runs the search for one state against a shared outcome.
pub struct Searcher<'a, W> {
    dictionary: &'a Dictionary,
    word_length: usize,
    state: SearchState,
    outcome: &'a SharedOutcome<W>,
}

impl<'a, W: Write> Searcher<'a, W> {
    pub fn new(
        dictionary: &'a Dictionary,
        word_length: usize,
        state: SearchState,
        outcome: &'a SharedOutcome<W>,
    ) -> Self {
        Searcher {
            dictionary,
            word_length,
            state,
            outcome,
        }
    }

    /// Explores everything below slot 0 at `depth`.
    ///
    /// `first_letter` is slot 0's first letter when `depth > 0`, and the
    /// lowest letter slot 0 may start with otherwise.
    pub fn run(mut self, depth: usize, first_letter: u8) -> Result<SearchState> {
        if self.state.word_count() > 0 {
            self.find_words(0, depth, first_letter)?;
        }
        Ok(self.state)
    }

    fn find_words(&mut self, slot: usize, depth: usize, first_letter: u8) -> Result<()> {
        let dictionary = self.dictionary;
        let trie = dictionary.trie();
        let node = self.state.cursor(slot);

        if depth == self.word_length {
            if trie.terminal(node).is_none() {
                return Ok(());
            }
            if slot + 1 == self.state.word_count() {
                return self.emit();
            }
            return self.find_words(slot + 1, 0, first_letter + 1);
        }

        let lowest = if depth == 0 { first_letter } else { 0 };
        for letter in lowest..ALPHABET_SIZE as u8 {
            if !self.state.advance(trie, slot, letter) {
                continue;
            }
            let carried = if depth == 0 { letter } else { first_letter };
            let result = self.find_words(slot, depth + 1, carried);
            self.state.retreat(trie, slot);
            result?;
        }
        Ok(())
    }

    fn emit(&self) -> Result<()> {
        let trie = self.dictionary.trie();
        let anagrams = self.dictionary.anagrams();
        let classes: Vec<&AnagramClass> = self
            .state
            .cursors
            .iter()
            .filter_map(|&node| trie.terminal(node))
            .map(|terminal| anagrams.class(terminal.class))
            .collect_vec();
        log::trace!(
            "pattern {}",
            classes.iter().map(|c| c.signature()).join(" ")
        );
        self.outcome.record(&classes)
    }
}
