use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wdi_cli::pipeline::BuildResult;
use wdi_model::{CountryCode, Indicator, Origin, OutputRecord};

pub fn print_summary(result: &BuildResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: dry run, nothing written"),
    }
    println!("Registry: {} countries", result.registry_size);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Code"),
        header_cell("Extract"),
        header_cell("Discarded"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for indicator in Indicator::ALL {
        let discarded = result
            .summary
            .discarded
            .iter()
            .find(|(i, _)| *i == indicator)
            .map(|(_, count)| *count);
        table.add_row(vec![
            Cell::new(indicator.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(indicator.source_code()),
            Cell::new(result.extracts.get(indicator).display()),
            count_cell(discarded, Color::DarkGrey),
        ]);
    }
    println!("{table}");

    let summary = &result.summary;
    let mut origins = Table::new();
    origins.set_header(vec![header_cell("Origin"), header_cell("Records")]);
    apply_summary_table_style(&mut origins);
    align_column(&mut origins, 1, CellAlignment::Right);
    origins.add_row(vec![
        origin_cell(Origin::Country),
        Cell::new(summary.from_country),
    ]);
    origins.add_row(vec![
        origin_cell(Origin::World),
        count_cell(Some(summary.from_world), Color::Yellow),
    ]);
    origins.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.countries).add_attribute(Attribute::Bold),
    ]);
    println!("{origins}");

    if !summary.fallbacks.is_empty() {
        let codes: Vec<&str> = summary.fallbacks.iter().map(CountryCode::as_str).collect();
        println!("World fallback: {}", codes.join(", "));
    }
}

pub fn print_records(records: &[OutputRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Origin"),
        header_cell("Emissions year"),
        header_cell("Emissions (kg CO2e)"),
        header_cell("Employees year"),
        header_cell("Employees"),
    ]);
    apply_table_style(&mut table);
    for index in 3..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        table.add_row(vec![
            Cell::new(record.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&record.name),
            origin_cell(record.origin),
            dim_cell(record.emissions_year),
            Cell::new(record.emissions),
            dim_cell(record.employees_year),
            Cell::new(record.employees),
        ]);
    }
    println!("{table}");
    println!("{} records", records.len());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn origin_cell(origin: Origin) -> Cell {
    match origin {
        Origin::Country => Cell::new(origin).fg(Color::Green),
        Origin::World => Cell::new(origin).fg(Color::Yellow),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
