//! Terminal rendering of query artifacts with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ctae_model::{AeValue, BATCH_HEADERS, BatchRow, DetailTable, TrialReport, format_numeric};

pub fn print_trial_report(report: &TrialReport) {
    println!("Trial: {}", report.id);
    println!();
    for (category, detail) in [
        (report.sae.category, &report.sae.detail),
        (report.oae.category, &report.oae.detail),
    ] {
        println!("{} (Subject Count)", category.label());
        match detail {
            Some(table) => print_detail_table(table),
            None => println!(
                "There are 0 subjects with {}s",
                category.label()
            ),
        }
        println!();
    }
    print_category_summary(report);
    println!();
    print_aggregate_summary(report);
}

fn print_detail_table(detail: &DetailTable) {
    let mut table = Table::new();
    let mut headers = Vec::with_capacity(detail.arms.len() + 3);
    headers.push(header_cell("Term"));
    headers.extend(detail.arms.iter().map(|arm| header_cell(arm)));
    headers.push(header_cell("Total"));
    headers.push(header_cell("Percent"));
    table.set_header(headers);
    apply_table_style(&mut table);
    for idx in 1..=detail.arms.len() + 2 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for row in &detail.rows {
        let is_total = row.term == "Total";
        let mut cells = Vec::with_capacity(detail.arms.len() + 3);
        cells.push(term_cell(&row.term, is_total));
        cells.extend(row.cells.iter().map(|cell| value_cell(*cell, is_total)));
        cells.push(value_cell(row.total, is_total));
        cells.push(value_cell(row.percent, is_total));
        table.add_row(cells);
    }
    println!("{table}");
}

fn print_category_summary(report: &TrialReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Subjects"),
        header_cell("Percentage"),
        header_cell("AE Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in report.category_summary() {
        table.add_row(vec![
            Cell::new(row.group).add_attribute(Attribute::Bold),
            Cell::new(format_numeric(row.subjects)),
            Cell::new(&row.percentage),
            Cell::new(row.ae_count),
        ]);
    }
    println!("{table}");
}

fn print_aggregate_summary(report: &TrialReport) {
    let mut table = Table::new();
    table.set_header(
        BATCH_HEADERS[1..]
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 0..BATCH_HEADERS.len() - 1 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    table.add_row(
        report
            .summary
            .cells()
            .iter()
            .map(|cell| value_cell(*cell, false))
            .collect::<Vec<_>>(),
    );
    println!("{table}");
}

pub fn print_batch(rows: &[BatchRow]) {
    let mut table = Table::new();
    table.set_header(
        BATCH_HEADERS
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for idx in 1..BATCH_HEADERS.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for row in rows {
        let mut cells = Vec::with_capacity(BATCH_HEADERS.len());
        cells.push(
            Cell::new(row.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        );
        cells.extend(row.metrics.cells().iter().map(|cell| value_cell(*cell, false)));
        table.add_row(cells);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn term_cell(term: &str, is_total: bool) -> Cell {
    if is_total {
        Cell::new(term)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(term)
    }
}

fn value_cell(value: AeValue, emphasized: bool) -> Cell {
    let cell = match value {
        AeValue::Known(_) => Cell::new(value.render()),
        AeValue::NotAvailable => Cell::new(value.render()).fg(Color::DarkGrey),
    };
    if emphasized {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}
