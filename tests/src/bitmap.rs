use rand::prelude::*;

use cep78_client::constants::PAGE_SIZE;
use cep78_client::page::{page_dictionary_name, page_local_index, page_number, set_bit_indices};

#[test]
fn set_bit_indices_should_report_exactly_the_true_positions() {
    let bits = vec![true, false, true, true, false, false, true];
    assert_eq!(set_bit_indices(&bits), vec![0, 2, 3, 6]);
}

#[test]
fn set_bit_indices_should_be_strictly_increasing_for_random_bitmaps() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let bits: Vec<bool> = (0..PAGE_SIZE).map(|_| rng.gen()).collect();
        let indices = set_bit_indices(&bits);
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        for index in &indices {
            assert!(bits[*index as usize]);
        }
        assert_eq!(indices.len(), bits.iter().filter(|set| **set).count());
    }
}

#[test]
fn all_false_bitmap_should_decode_to_empty() {
    for length in &[0usize, 1, 10, 100] {
        assert!(set_bit_indices(&vec![false; *length]).is_empty());
    }
}

#[test]
fn page_dictionary_name_should_follow_convention() {
    assert_eq!(page_dictionary_name(0), "page_0");
    assert_eq!(page_dictionary_name(7), "page_7");
}

#[test]
fn global_index_should_split_into_page_and_local_index() {
    assert_eq!(page_number(37), 37 / PAGE_SIZE);
    assert_eq!(page_local_index(37), 37 % PAGE_SIZE);
    assert_eq!(page_number(0), 0);
    assert_eq!(page_local_index(PAGE_SIZE - 1), PAGE_SIZE - 1);
}
