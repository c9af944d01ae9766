use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dates::process_date_line;
use crate::error::{Result, YnabError};
use crate::models::{Candidate, NormalizedRecord};

/// Lines per transaction once the cashback row is gone.
pub const BLOCK_LEN: usize = 4;

/// Block-relative position of the "<User> - <date>" line.
const DATE_POSITION: usize = 3;

// ---------------------------------------------------------------------------
// Per-line cleanup
// ---------------------------------------------------------------------------

/// Strip commas and sign the amount: `+$` marks an inflow and loses the plus,
/// any other `$` is an outflow and gains a leading minus.
pub fn normalize_amount(line: &str) -> String {
    let line = line.replace(',', "");
    if line.contains("+$") {
        return line.replace("+$", "$");
    }
    if !line.contains('$') {
        return line;
    }
    let mut out = String::with_capacity(line.len() + 1);
    let mut prev = None;
    for c in line.chars() {
        if c == '$' && prev != Some('-') {
            out.push('-');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Drop the "2% Daily Cash" rows; purchases carry one, payments don't.
pub fn strip_cashback(lines: &[String]) -> Vec<String> {
    lines.iter().filter(|l| !l.contains('%')).cloned().collect()
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

fn reorder_block(block: &[String], number: usize) -> Result<NormalizedRecord> {
    let mut date = None;
    let mut amount = None;
    let mut texts = Vec::with_capacity(2);

    for line in block {
        match Candidate::classify(line) {
            Candidate::Amount if amount.is_none() => amount = Some(line.clone()),
            Candidate::Date if date.is_none() => date = Some(line.clone()),
            Candidate::Text => texts.push(line.clone()),
            Candidate::Amount => {
                return Err(block_error(number, "more than one amount line (containing '$')"))
            }
            Candidate::Date => {
                return Err(block_error(number, "more than one date line (containing '/')"))
            }
        }
    }

    let amount = amount.ok_or_else(|| block_error(number, "no amount line (containing '$')"))?;
    let date = date.ok_or_else(|| block_error(number, "no date line"))?;
    if texts.len() != 2 {
        return Err(block_error(
            number,
            &format!("expected payee and memo lines, found {} text lines", texts.len()),
        ));
    }
    let memo = texts.pop().unwrap_or_default();
    let payee = texts.pop().unwrap_or_default();

    Ok(NormalizedRecord { date, payee, memo, amount })
}

fn block_error(number: usize, reason: &str) -> YnabError {
    YnabError::Block { block: number, reason: reason.to_string() }
}

/// Group cleaned lines into blocks of four and sort each block into
/// Date, Payee, Memo, Amount by content shape. The physical order inside a
/// block doesn't matter except that the first text line is the payee.
///
/// Checks the block length itself since callers may skip `normalize`.
pub fn reorder(lines: &[String]) -> Result<Vec<NormalizedRecord>> {
    if lines.len() % BLOCK_LEN != 0 {
        return Err(YnabError::Format { lines: lines.len() });
    }
    lines
        .chunks(BLOCK_LEN)
        .enumerate()
        .map(|(i, block)| reorder_block(block, i + 1))
        .collect()
}

/// Flat Date/Payee/Memo/Amount sequence, same length as the reordered input.
pub fn flatten(records: &[NormalizedRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.fields().map(str::to_string))
        .collect()
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Full transform from raw OCR lines to YNAB records. `today` anchors
/// relative dates such as "Yesterday".
pub fn normalize(lines: &[String], today: NaiveDate) -> Result<Vec<NormalizedRecord>> {
    let filtered = strip_cashback(lines);
    debug!(dropped = lines.len() - filtered.len(), "removed cashback lines");

    if filtered.is_empty() {
        return Err(YnabError::NoTransactions);
    }
    if filtered.len() % BLOCK_LEN != 0 {
        return Err(YnabError::Format { lines: filtered.len() });
    }

    let cleaned = filtered
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = normalize_amount(line);
            if i % BLOCK_LEN == DATE_POSITION {
                process_date_line(&line, today)
            } else {
                Ok(line)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let records = reorder(&cleaned)?;
    info!(transactions = records.len(), "normalized transactions");
    Ok(records)
}
