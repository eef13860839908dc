use tabulon::{CellValue, Column, Direction, SortState, Table, TableError};

#[derive(Debug, Clone, PartialEq)]
struct Pool {
    name: &'static str,
    volume_usd: f64,
}

fn pool(name: &'static str, volume_usd: f64) -> Pool {
    Pool { name, volume_usd }
}

fn columns() -> Vec<Column<Pool>> {
    vec![
        Column::new("pool", |p: &Pool| CellValue::from(p.name)),
        Column::new("volumeUSD", |p: &Pool| CellValue::from(p.volume_usd)),
    ]
}

// ============================================================================
// Toggle state machine
// ============================================================================

#[test]
fn toggle_cycles_unsorted_asc_desc_unsorted() {
    let mut table = Table::new(columns(), vec![pool("a", 5.0), pool("b", 1.0)]).unwrap();

    assert_eq!(table.sort_state().direction_of("volumeUSD"), None);

    table.toggle_sort("volumeUSD");
    assert_eq!(
        table.sort_state().direction_of("volumeUSD"),
        Some(Direction::Asc)
    );

    table.toggle_sort("volumeUSD");
    assert_eq!(
        table.sort_state().direction_of("volumeUSD"),
        Some(Direction::Desc)
    );

    table.toggle_sort("volumeUSD");
    assert_eq!(table.sort_state().direction_of("volumeUSD"), None);
}

#[test]
fn three_toggles_restore_original_order() {
    let rows = vec![pool("a", 5.0), pool("b", 1.0), pool("c", 3.0)];
    let mut table = Table::new(columns(), rows.clone()).unwrap();

    table.toggle_sort("volumeUSD");
    table.toggle_sort("volumeUSD");
    table.toggle_sort("volumeUSD");

    let sorted: Vec<Pool> = table.sorted_rows().unwrap().into_iter().cloned().collect();
    assert_eq!(sorted, rows);
}

#[test]
fn switching_columns_resets_previous_and_starts_ascending() {
    let mut table = Table::new(columns(), vec![pool("a", 5.0)]).unwrap();

    table.toggle_sort("volumeUSD");
    table.toggle_sort("volumeUSD"); // desc
    table.toggle_sort("pool");

    assert_eq!(table.sort_state().direction_of("volumeUSD"), None);
    assert_eq!(table.sort_state().direction_of("pool"), Some(Direction::Asc));
}

#[test]
fn toggling_unsortable_column_is_a_no_op() {
    let columns = vec![
        Column::new("pool", |p: &Pool| CellValue::from(p.name)).sortable(false),
        Column::new("volumeUSD", |p: &Pool| CellValue::from(p.volume_usd)),
    ];
    let mut table = Table::new(columns, vec![pool("a", 5.0)]).unwrap();

    table.toggle_sort("pool");
    assert!(table.sort_state().is_empty());
}

#[test]
fn toggling_unknown_column_is_a_no_op() {
    let mut table = Table::new(columns(), vec![pool("a", 5.0)]).unwrap();

    table.toggle_sort("does-not-exist");
    assert!(table.sort_state().is_empty());
}

// ============================================================================
// Sorted projection
// ============================================================================

#[test]
fn numeric_asc_then_desc() {
    let rows = vec![pool("a", 5.0), pool("b", 1.0), pool("c", 3.0)];
    let mut table = Table::new(columns(), rows).unwrap();

    table.toggle_sort("volumeUSD");
    let volumes: Vec<f64> = table
        .sorted_rows()
        .unwrap()
        .iter()
        .map(|p| p.volume_usd)
        .collect();
    assert_eq!(volumes, vec![1.0, 3.0, 5.0]);

    table.toggle_sort("volumeUSD");
    let volumes: Vec<f64> = table
        .sorted_rows()
        .unwrap()
        .iter()
        .map(|p| p.volume_usd)
        .collect();
    assert_eq!(volumes, vec![5.0, 3.0, 1.0]);
}

#[test]
fn sorting_is_a_permutation_of_the_input() {
    let rows = vec![
        pool("d", 2.0),
        pool("a", 9.0),
        pool("c", 2.0),
        pool("b", 7.0),
        pool("e", 0.5),
    ];
    let mut table = Table::new(columns(), rows.clone()).unwrap();
    table.toggle_sort("volumeUSD");

    let sorted: Vec<Pool> = table.sorted_rows().unwrap().into_iter().cloned().collect();
    assert_eq!(sorted.len(), rows.len());
    for row in &rows {
        assert_eq!(
            sorted.iter().filter(|r| *r == row).count(),
            rows.iter().filter(|r| *r == row).count()
        );
    }
}

#[test]
fn equal_keys_keep_original_relative_order() {
    let rows = vec![
        pool("first", 1.0),
        pool("second", 1.0),
        pool("third", 0.0),
        pool("fourth", 1.0),
    ];
    let mut table = Table::new(columns(), rows).unwrap();
    table.toggle_sort("volumeUSD");

    let names: Vec<&str> = table.sorted_rows().unwrap().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["third", "first", "second", "fourth"]);
}

#[test]
fn text_sort_is_codepoint_order() {
    let rows = vec![pool("weth", 0.0), pool("DAI", 0.0), pool("usdc", 0.0)];
    let mut table = Table::new(columns(), rows).unwrap();
    table.toggle_sort("pool");

    let names: Vec<&str> = table.sorted_rows().unwrap().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["DAI", "usdc", "weth"]);
}

#[test]
fn null_values_sort_first_ascending() {
    let rows = vec![pool("a", 3.0), pool("missing", -1.0), pool("b", 1.0)];
    let columns = vec![
        Column::new("pool", |p: &Pool| CellValue::from(p.name)),
        Column::new("volumeUSD", |p: &Pool| {
            if p.volume_usd < 0.0 {
                CellValue::Null
            } else {
                CellValue::from(p.volume_usd)
            }
        }),
    ];
    let mut table = Table::new(columns, rows).unwrap();
    table.toggle_sort("volumeUSD");

    let names: Vec<&str> = table.sorted_rows().unwrap().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["missing", "b", "a"]);
}

#[test]
fn unsorted_table_returns_rows_in_original_order() {
    let rows = vec![pool("z", 1.0), pool("a", 2.0)];
    let table = Table::new(columns(), rows.clone()).unwrap();

    let projected: Vec<Pool> = table.sorted_rows().unwrap().into_iter().cloned().collect();
    assert_eq!(projected, rows);
}

#[test]
fn multi_column_sort_via_sort_state() {
    let rows = vec![
        pool("b", 1.0),
        pool("a", 2.0),
        pool("c", 1.0),
        pool("a", 1.0),
    ];
    let mut table = Table::new(columns(), rows).unwrap();

    let mut sort = SortState::new();
    sort.then("volumeUSD", Direction::Asc);
    sort.then("pool", Direction::Asc);
    table.set_sort(sort);

    let names: Vec<&str> = table.sorted_rows().unwrap().iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["a", "b", "c", "a"]);
}

// ============================================================================
// Data heterogeneity errors
// ============================================================================

#[test]
fn mixed_type_column_fails_to_sort() {
    let rows = vec![pool("a", 1.0), pool("b", 2.0)];
    let columns = vec![Column::new("mixed", |p: &Pool| {
        if p.name == "a" {
            CellValue::from(p.volume_usd)
        } else {
            CellValue::from(p.name)
        }
    })];
    let mut table = Table::new(columns, rows).unwrap();
    table.toggle_sort("mixed");

    let err = table.sorted_rows().unwrap_err();
    assert!(matches!(err, TableError::Incomparable { .. }), "{err}");
}

#[test]
fn nan_sort_key_fails_to_sort() {
    let rows = vec![pool("a", 1.0), pool("b", f64::NAN)];
    let mut table = Table::new(columns(), rows).unwrap();
    table.toggle_sort("volumeUSD");

    let err = table.sorted_rows().unwrap_err();
    assert!(matches!(err, TableError::NanSortKey { .. }), "{err}");
}
