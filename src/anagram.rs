//! Signature to anagram-set index.

use std::collections::{BTreeSet, HashMap};

use crate::signature::Signature;

/// Position of an [`AnagramClass`] inside its [`AnagramIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Every dictionary word sharing one signature.
#[derive(Debug, Clone)]
pub struct AnagramClass {
    signature: Signature,
    words: BTreeSet<String>,
}

impl AnagramClass {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> + Clone {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct AnagramIndex {
    classes: Vec<AnagramClass>,
    by_signature: HashMap<Signature, ClassId>,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word` to the set for `signature`. Returns the class and whether
    /// the class was created by this call.
    pub fn insert(&mut self, signature: Signature, word: &str) -> (ClassId, bool) {
        let (id, created) = match self.by_signature.get(&signature) {
            Some(&id) => (id, false),
            None => {
                let id = ClassId(self.classes.len() as u32);
                self.classes.push(AnagramClass {
                    signature: signature.clone(),
                    words: BTreeSet::new(),
                });
                self.by_signature.insert(signature, id);
                (id, true)
            }
        };
        if !self.classes[id.index()].words.contains(word) {
            self.classes[id.index()].words.insert(word.to_owned());
        }
        (id, created)
    }

    pub fn class(&self, id: ClassId) -> &AnagramClass {
        &self.classes[id.index()]
    }

    pub fn get(&self, signature: &Signature) -> Option<&AnagramClass> {
        self.by_signature.get(signature).map(|&id| self.class(id))
    }

    pub fn classes(&self) -> impl Iterator<Item = &AnagramClass> {
        self.classes.iter()
    }

    /// Number of distinct signatures.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of distinct words across all classes.
    pub fn word_count(&self) -> usize {
        self.classes.iter().map(AnagramClass::len).sum()
    }
}
