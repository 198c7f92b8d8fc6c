use crate::code::{Code, BEYOND_VALID_CHR};

/// Allocates codes for learned patterns.
///
/// The offset is fixed once from the number of seeded literals, so that the first
/// pattern lands exactly on `BEYOND_VALID_CHR` when the dictionary holds only
/// those literals. Encoder and decoder derive it the same way.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodeAllocator {
    ext_base: Code,
}

impl CodeAllocator {
    /// Creates an allocator for a dictionary seeded with `seeded` literals.
    pub(crate) fn new(seeded: usize) -> Self {
        assert!(
            seeded <= BEYOND_VALID_CHR as usize,
            "Cannot seed more literals than there are code points"
        );
        Self {
            ext_base: BEYOND_VALID_CHR - seeded as Code,
        }
    }

    /// Code for the next entry of a dictionary currently holding `len` entries.
    ///
    /// `None` once the pattern range would pass `Code::MAX`.
    pub(crate) fn code_for(&self, len: usize) -> Option<Code> {
        Code::try_from(len)
            .ok()
            .and_then(|len| self.ext_base.checked_add(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pattern_is_threshold() {
        let alloc = CodeAllocator::new(3);
        assert_eq!(alloc.code_for(3), Some(BEYOND_VALID_CHR));
    }

    #[test]
    fn test_sequential_allocation() {
        let alloc = CodeAllocator::new(2);
        assert_eq!(alloc.code_for(2), Some(BEYOND_VALID_CHR));
        assert_eq!(alloc.code_for(3), Some(BEYOND_VALID_CHR + 1));
        assert_eq!(alloc.code_for(4), Some(BEYOND_VALID_CHR + 2));
    }

    #[test]
    fn test_empty_seed() {
        let alloc = CodeAllocator::new(0);
        assert_eq!(alloc.code_for(0), Some(BEYOND_VALID_CHR));
    }

    #[test]
    fn test_code_space_exhausted() {
        let alloc = CodeAllocator::new(0);
        let last = (Code::MAX - BEYOND_VALID_CHR) as usize;
        assert_eq!(alloc.code_for(last), Some(Code::MAX));
        assert_eq!(alloc.code_for(last + 1), None);
        assert_eq!(alloc.code_for(usize::MAX), None);
    }

    #[test]
    #[should_panic(expected = "Cannot seed more literals than there are code points")]
    fn test_oversized_seed() {
        CodeAllocator::new(BEYOND_VALID_CHR as usize + 1);
    }
}
