//! Letter indices and a 26-bit set of letters.

use std::fmt;

pub const ALPHABET_SIZE: usize = 26;

/// Maps `b'a'..=b'z'` to `0..26`.
pub fn letter_index(byte: u8) -> Option<u8> {
    byte.is_ascii_lowercase().then(|| byte - b'a')
}

pub fn letter_char(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_SIZE);
    (b'a' + index) as char
}

/// One bit per letter as bitset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    pub fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter) != 0
    }

    /// Marks `letter`, returning false if it was already marked.
    pub fn insert(&mut self, letter: u8) -> bool {
        let fresh = !self.contains(letter);
        self.0 |= 1 << letter;
        fresh
    }

    /// Clears `letter`, returning false if it was not marked.
    pub fn remove(&mut self, letter: u8) -> bool {
        let present = self.contains(letter);
        self.0 &= !(1 << letter);
        present
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_disjoint(self, other: LetterSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn union(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    /// The letters of `word`, or `None` if it holds a non-letter or repeats one.
    pub fn of_distinct(word: &str) -> Option<LetterSet> {
        let mut set = LetterSet::EMPTY;
        for byte in word.bytes() {
            if !set.insert(letter_index(byte)?) {
                return None;
            }
        }
        Some(set)
    }

    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8).filter(move |&l| self.contains(l))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|l| write!(f, "{}", letter_char(l)))
    }
}
