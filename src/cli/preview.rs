use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::importer::import_file;
use crate::models::NormalizedRecord;
use crate::settings::load_settings;

pub fn run(input: &str, today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    let records = import_file(&settings.resolve_input(input), today)?;
    println!("{}", render(&records));
    println!("\n{} transactions", records.len());
    Ok(())
}

fn render(records: &[NormalizedRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Payee", "Memo", "Amount"]);
    for rec in records {
        let amount = if rec.is_inflow() {
            rec.amount.green().to_string()
        } else {
            rec.amount.red().to_string()
        };
        table.add_row(vec![
            Cell::new(&rec.date),
            Cell::new(&rec.payee),
            Cell::new(&rec.memo),
            Cell::new(amount),
        ]);
    }
    table
}
