//! Solution counter and output sink shared by every worker.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::anagram::AnagramClass;
use crate::error::Result;
use crate::expand::combinations;

#[derive(Debug)]
struct Tally<W> {
    solutions: u64,
    patterns: u64,
    sink: W,
}

/// Counters plus the sink, behind one lock.
///
/// A pattern's expansion is written and counted under a single acquisition,
/// so lines from different workers never interleave.
#[derive(Debug)]
pub struct SharedOutcome<W> {
    tally: Mutex<Tally<W>>,
}

impl<W: Write> SharedOutcome<W> {
    pub fn new(sink: W) -> Self {
        SharedOutcome {
            tally: Mutex::new(Tally {
                solutions: 0,
                patterns: 0,
                sink,
            }),
        }
    }

    /// Writes one line per anagram combination of `classes`.
    pub fn record(&self, classes: &[&AnagramClass]) -> Result<()> {
        let mut tally = self.lock();
        tally.patterns += 1;
        for words in combinations(classes) {
            writeln!(tally.sink, "{}", words.join(" "))?;
            tally.solutions += 1;
        }
        Ok(())
    }

    pub fn solutions(&self) -> u64 {
        self.lock().solutions
    }

    pub fn patterns(&self) -> u64 {
        self.lock().patterns
    }

    /// Flushes and hands back the sink.
    pub fn into_sink(self) -> Result<W> {
        let mut tally = self
            .tally
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        tally.sink.flush()?;
        Ok(tally.sink)
    }

    fn lock(&self) -> MutexGuard<'_, Tally<W>> {
        self.tally.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::SharedOutcome;
    use crate::anagram::AnagramIndex;
    use crate::signature::Signature;
    use std::io::{self, Write};

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn record_writes_and_counts() {
        let mut index = AnagramIndex::new();
        for word in ["cat", "act", "dog"] {
            index.insert(Signature::of(word), word);
        }
        let act = index.get(&Signature::of("act")).unwrap();
        let dgo = index.get(&Signature::of("dgo")).unwrap();

        let outcome = SharedOutcome::new(Vec::new());
        outcome.record(&[act, dgo]).unwrap();
        assert_eq!(outcome.solutions(), 2);
        assert_eq!(outcome.patterns(), 1);
        let out = String::from_utf8(outcome.into_sink().unwrap()).unwrap();
        assert_eq!(out, "act dog\ncat dog\n");
    }

    #[test]
    fn write_failure_is_reported() {
        let mut index = AnagramIndex::new();
        index.insert(Signature::of("cat"), "cat");
        let act = index.get(&Signature::of("act")).unwrap();

        let outcome = SharedOutcome::new(Closed);
        assert!(outcome.record(&[act]).is_err());
        assert_eq!(outcome.solutions(), 0);
    }
}
