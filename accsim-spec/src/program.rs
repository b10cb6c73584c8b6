//! # Program Structure
//!
//! An assembled program: a dense sequence of instruction words starting at
//! code address 0, plus the label table that produced it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Word, NOP_WORD};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Encoded words, one per instruction line
    pub code: Vec<Word>,

    /// Label name -> code address
    pub labels: BTreeMap<String, usize>,
}

impl Program {
    pub fn new(code: Vec<Word>) -> Self {
        Self {
            code,
            labels: BTreeMap::new(),
        }
    }

    pub fn with_labels(code: Vec<Word>, labels: BTreeMap<String, usize>) -> Self {
        Self { code, labels }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Number of words that are not the no-op marker
    pub fn instruction_count(&self) -> usize {
        self.code.iter().filter(|&&w| w != NOP_WORD).count()
    }

    /// A program with no real instruction has nothing to load
    pub fn is_loadable(&self) -> bool {
        self.instruction_count() > 0
    }

    /// Address a label resolves to
    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}
