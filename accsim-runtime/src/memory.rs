//! Memory subsystem
//!
//! Harvard split: code memory holds instruction words and is only written by
//! a load; data memory holds signed values and is read and written by the
//! program. Both have a fixed size chosen at construction.

use tracing::warn;

use accsim_spec::{Value, Word, NOP_WORD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    code: Vec<Word>,
    data: Vec<Value>,
}

impl Memory {
    pub fn new(code_size: usize, data_size: usize) -> Self {
        Memory {
            code: vec![NOP_WORD; code_size],
            data: vec![0; data_size],
        }
    }

    #[inline]
    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    /// Word at `addr`, or `None` past the end of code memory
    #[inline]
    pub fn fetch(&self, addr: usize) -> Option<Word> {
        self.code.get(addr).copied()
    }

    pub fn code(&self) -> &[Word] {
        &self.code
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Value] {
        &mut self.data
    }

    /// Overwrite code memory from address 0; remaining cells become no-ops.
    /// Returns the number of words stored.
    pub fn load_code(&mut self, code: &[Word]) -> usize {
        self.code.fill(NOP_WORD);
        let count = code.len().min(self.code.len());
        self.code[..count].copy_from_slice(&code[..count]);
        if count < code.len() {
            warn!(
                dropped = code.len() - count,
                capacity = self.code.len(),
                "program larger than code memory"
            );
        }
        count
    }

    /// Overwrite data memory from address 0; excess values are dropped.
    /// Returns the number of values stored.
    pub fn load_data(&mut self, data: &[Value]) -> usize {
        self.data.fill(0);
        let count = data.len().min(self.data.len());
        self.data[..count].copy_from_slice(&data[..count]);
        if count < data.len() {
            warn!(
                dropped = data.len() - count,
                capacity = self.data.len(),
                "data larger than data memory"
            );
        }
        count
    }

    pub fn clear(&mut self) {
        self.code.fill(NOP_WORD);
        self.data.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_memory_is_zeroed() {
        let mem = Memory::new(4, 3);
        assert_eq!(mem.code(), &[0, 0, 0, 0]);
        assert_eq!(mem.data(), &[0, 0, 0]);
    }

    #[test]
    fn test_load_code_pads_with_nops() {
        let mut mem = Memory::new(4, 1);
        mem.load_code(&[1, 2, 3, 4]);
        assert_eq!(mem.load_code(&[0x1001, 0xF000]), 2);
        assert_eq!(mem.code(), &[0x1001, 0xF000, 0, 0]);
    }

    #[test]
    fn test_load_data_drops_excess() {
        let mut mem = Memory::new(1, 3);
        assert_eq!(mem.load_data(&[1, 2, 3, 4, 5]), 3);
        assert_eq!(mem.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_fetch_past_end() {
        let mem = Memory::new(2, 1);
        assert_eq!(mem.fetch(1), Some(NOP_WORD));
        assert_eq!(mem.fetch(2), None);
    }
}
