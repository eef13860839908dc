use tabulon::{CellValue, Column, Table};

fn numbered_table(count: usize) -> Table<i64> {
    let columns = vec![Column::new("n", |n: &i64| CellValue::from(*n))];
    Table::new(columns, (0..count as i64).collect()).unwrap()
}

// ============================================================================
// Page slicing
// ============================================================================

#[test]
fn twenty_five_rows_paginate_in_three_pages() {
    let mut table = numbered_table(25);

    assert_eq!(table.page_count(), 3);
    let first: Vec<i64> = table.page_rows().unwrap().into_iter().copied().collect();
    assert_eq!(first, (0..10).collect::<Vec<_>>());
    assert!(!table.can_prev_page());
    assert!(table.can_next_page());
    assert_eq!(table.pagination_label(), "Page 1 of 3");

    table.next_page();
    table.next_page();

    let last: Vec<i64> = table.page_rows().unwrap().into_iter().copied().collect();
    assert_eq!(last, vec![20, 21, 22, 23, 24]);
    assert!(table.can_prev_page());
    assert!(!table.can_next_page());
    assert_eq!(table.pagination_label(), "Page 3 of 3");
}

#[test]
fn page_rows_follow_sort_order() {
    let mut table = numbered_table(25);
    table.toggle_sort("n");
    table.toggle_sort("n"); // desc

    let first: Vec<i64> = table.page_rows().unwrap().into_iter().copied().collect();
    assert_eq!(first, (15..25).rev().collect::<Vec<_>>());
}

#[test]
fn exact_multiple_of_page_size_has_no_partial_page() {
    let mut table = numbered_table(20);
    assert_eq!(table.page_count(), 2);

    table.next_page();
    assert_eq!(table.page_rows().unwrap().len(), 10);
    assert!(!table.can_next_page());
}

#[test]
fn custom_page_size() {
    let columns = vec![Column::new("n", |n: &i64| CellValue::from(*n))];
    let table = Table::new(columns, (0..7).collect()).unwrap().with_page_size(3);

    assert_eq!(table.page_count(), 3);
    assert_eq!(table.page_rows().unwrap().len(), 3);
}

// ============================================================================
// Navigation clamping
// ============================================================================

#[test]
fn navigation_never_leaves_valid_range() {
    let mut table = numbered_table(25);

    for _ in 0..10 {
        table.next_page();
        assert!(table.page_index() < table.page_count());
    }
    assert_eq!(table.page_index(), 2);

    for _ in 0..10 {
        table.prev_page();
    }
    assert_eq!(table.page_index(), 0);

    // Boundary calls report no movement.
    assert!(!table.prev_page());
    assert_eq!(table.page_index(), 0);
}

#[test]
fn empty_dataset_has_no_pages_and_empty_label() {
    let mut table = numbered_table(0);

    assert_eq!(table.page_count(), 0);
    assert_eq!(table.pagination_label(), "");
    assert!(table.page_rows().unwrap().is_empty());
    assert!(!table.can_next_page());
    assert!(!table.can_prev_page());
    assert!(!table.next_page());
    assert!(!table.prev_page());
}

#[test]
fn single_partial_page() {
    let table = numbered_table(4);
    assert_eq!(table.page_count(), 1);
    assert_eq!(table.pagination_label(), "Page 1 of 1");
    assert_eq!(table.page_rows().unwrap().len(), 4);
}

// ============================================================================
// Dataset replacement
// ============================================================================

#[test]
fn shrinking_dataset_clamps_page_index() {
    let mut table = numbered_table(25);
    table.next_page();
    table.next_page();
    assert_eq!(table.page_index(), 2);

    table.set_rows((0..5).collect());
    assert_eq!(table.page_index(), 0);

    let rows: Vec<i64> = table.page_rows().unwrap().into_iter().copied().collect();
    assert_eq!(rows, vec![0, 1, 2, 3, 4]);
}

#[test]
fn replacing_dataset_keeps_sort_state() {
    let mut table = numbered_table(3);
    table.toggle_sort("n");
    table.toggle_sort("n"); // desc

    table.set_rows(vec![1, 9, 4]);
    let rows: Vec<i64> = table.sorted_rows().unwrap().into_iter().copied().collect();
    assert_eq!(rows, vec![9, 4, 1]);
}
