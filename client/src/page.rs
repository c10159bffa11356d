//! The two-level ownership bitmap.
//!
//! The contract records ownership per account as a `page_table` bitmap plus
//! one fixed-width `page_<n>` bitmap per populated page. Decoding either
//! level is the same operation: collect the indices of the set bits, in
//! on-chain bit order.

use crate::constants::{PAGE_DICTIONARY_PREFIX, PAGE_SIZE};

/// Indices of the set bits in `bits`, strictly increasing. An all-false
/// bitmap decodes to an empty sequence.
pub fn set_bit_indices(bits: &[bool]) -> Vec<u64> {
    bits.iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .map(|(index, _)| index as u64)
        .collect()
}

/// Name of the dictionary holding page `page_number`.
pub fn page_dictionary_name(page_number: u64) -> String {
    format!("{}{}", PAGE_DICTIONARY_PREFIX, page_number)
}

/// The page a global token index falls on.
pub fn page_number(token_index: u64) -> u64 {
    token_index / PAGE_SIZE
}

/// The bit position of a global token index within its page.
pub fn page_local_index(token_index: u64) -> u64 {
    token_index % PAGE_SIZE
}
