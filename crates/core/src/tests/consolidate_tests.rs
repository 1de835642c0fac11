// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for shift expansion and the cells ⇄ records round trip.

use super::helpers::{august_date, full_day_grid, work_shift};
use crate::{DayEmployeeRow, consolidate, expand_shift, shift_records_from_row, work_hours};
use salon_rota_audit::{AssemblyWarning, ShiftBoundary};
use salon_rota_domain::{Cell, CellType, ShiftRecord, ShiftType, TimeGrid};
use time::Weekday;

#[test]
fn test_expand_marks_the_half_open_span() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    let shift: ShiftRecord = work_shift(1, Weekday::Monday, "09:00", "12:30");

    expand_shift(&mut cells, &shift, &grid).unwrap();

    let marked: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.cell_type == CellType::Work)
        .map(|(index, _)| index)
        .collect();
    assert_eq!(marked, (10..17).collect::<Vec<usize>>());
}

#[test]
fn test_expand_carries_the_shift_reference() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    let mut shift: ShiftRecord = work_shift(1, Weekday::Monday, "09:00", "10:00");
    shift.shift_id = Some(42);

    expand_shift(&mut cells, &shift, &grid).unwrap();

    assert_eq!(cells[10].shift_id, Some(42));
    assert!(!cells[10].is_time_off);
}

#[test]
fn test_expand_reads_midnight_end_as_end_of_day() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    let shift: ShiftRecord = work_shift(1, Weekday::Monday, "22:00", "00:00");

    expand_shift(&mut cells, &shift, &grid).unwrap();

    assert_eq!(cells[35].cell_type, CellType::Empty);
    assert!(
        cells[36..40]
            .iter()
            .all(|cell| cell.cell_type == CellType::Work)
    );
}

#[test]
fn test_expand_rejects_off_grid_start() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    let shift: ShiftRecord = work_shift(1, Weekday::Monday, "09:15", "12:30");

    let warning: AssemblyWarning = expand_shift(&mut cells, &shift, &grid).unwrap_err();

    assert!(matches!(
        warning,
        AssemblyWarning::UnmatchedShiftBoundary {
            boundary: ShiftBoundary::Start,
            ..
        }
    ));
    assert!(cells.iter().all(|cell| cell.cell_type == CellType::Empty));
}

#[test]
fn test_expand_rejects_unparseable_end() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    let shift: ShiftRecord = work_shift(1, Weekday::Monday, "09:00", "noon");

    let warning: AssemblyWarning = expand_shift(&mut cells, &shift, &grid).unwrap_err();

    assert!(matches!(
        warning,
        AssemblyWarning::UnmatchedShiftBoundary {
            boundary: ShiftBoundary::End,
            ..
        }
    ));
}

#[test]
fn test_expand_rejects_inverted_span() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    let shift: ShiftRecord = work_shift(1, Weekday::Monday, "12:30", "09:00");

    let warning: AssemblyWarning = expand_shift(&mut cells, &shift, &grid).unwrap_err();

    assert!(matches!(warning, AssemblyWarning::EmptyShiftSpan { .. }));
}

#[test]
fn test_expand_then_consolidate_recovers_the_original_blocks() {
    let grid: TimeGrid = full_day_grid();
    let shifts: Vec<ShiftRecord> = vec![
        work_shift(3, Weekday::Wednesday, "09:00", "12:30"),
        work_shift(3, Weekday::Wednesday, "14:00", "18:00"),
    ];

    let mut row: DayEmployeeRow = DayEmployeeRow::new_empty(august_date(5), 3, grid.cell_count());
    for shift in &shifts {
        expand_shift(&mut row.cells, shift, &grid).unwrap();
    }

    let recovered: Vec<ShiftRecord> = shift_records_from_row(&row, &grid);

    assert_eq!(recovered, shifts);
}

#[test]
fn test_round_trip_preserves_a_span_ending_at_midnight() {
    let grid: TimeGrid = full_day_grid();
    let shifts: Vec<ShiftRecord> = vec![work_shift(3, Weekday::Wednesday, "20:00", "00:00")];

    let mut row: DayEmployeeRow = DayEmployeeRow::new_empty(august_date(5), 3, grid.cell_count());
    for shift in &shifts {
        expand_shift(&mut row.cells, shift, &grid).unwrap();
    }

    assert_eq!(shift_records_from_row(&row, &grid), shifts);
}

#[test]
fn test_derived_records_skip_time_off_cells() {
    let grid: TimeGrid = full_day_grid();
    let mut row: DayEmployeeRow = DayEmployeeRow::new_empty(august_date(5), 3, grid.cell_count());
    expand_shift(
        &mut row.cells,
        &work_shift(3, Weekday::Wednesday, "09:00", "12:00"),
        &grid,
    )
    .unwrap();
    for cell in &mut row.cells[20..24] {
        *cell = Cell::time_off(CellType::Vacation);
    }

    let records: Vec<ShiftRecord> = shift_records_from_row(&row, &grid);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].shift_type, ShiftType::Work);
}

#[test]
fn test_derived_records_carry_row_notes() {
    let grid: TimeGrid = full_day_grid();
    let mut row: DayEmployeeRow = DayEmployeeRow::new_empty(august_date(5), 3, grid.cell_count());
    row.notes = String::from("covering for Lea");
    expand_shift(
        &mut row.cells,
        &work_shift(3, Weekday::Wednesday, "09:00", "12:00"),
        &grid,
    )
    .unwrap();

    let records: Vec<ShiftRecord> = shift_records_from_row(&row, &grid);

    assert_eq!(records[0].notes.as_deref(), Some("covering for Lea"));
}

#[test]
fn test_work_hours_counts_only_work_runs() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    expand_shift(
        &mut cells,
        &work_shift(1, Weekday::Monday, "09:00", "12:30"),
        &grid,
    )
    .unwrap();
    let sick: ShiftRecord = ShiftRecord::new(
        1,
        Weekday::Monday,
        String::from("14:00"),
        String::from("18:00"),
        ShiftType::Sick,
    );
    expand_shift(&mut cells, &sick, &grid).unwrap();

    assert_eq!(work_hours(&cells), 3.0);
}

#[test]
fn test_each_split_run_loses_its_own_unpaid_lead() {
    let grid: TimeGrid = full_day_grid();
    let mut cells: Vec<Cell> = vec![Cell::empty(); grid.cell_count()];
    // Two 2-hour runs: each pays 1.5, not the 3.5 a single 4-hour run
    // would.
    expand_shift(
        &mut cells,
        &work_shift(1, Weekday::Monday, "09:00", "11:00"),
        &grid,
    )
    .unwrap();
    expand_shift(
        &mut cells,
        &work_shift(1, Weekday::Monday, "14:00", "16:00"),
        &grid,
    )
    .unwrap();

    assert_eq!(consolidate(&cells).len(), 2);
    assert_eq!(work_hours(&cells), 3.0);
}
