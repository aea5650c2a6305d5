//! Record layout engine: one envelope page per record.
//!
//! Each record starts at `margin_top + 10` decipoints and every emitted line
//! moves the cursor down by 20. Optional address lines only advance the
//! cursor when they are actually written, while the cursor moves for the
//! street line and the city/state line happen regardless. Sparse records
//! therefore leave the vertical position and the printed text out of step.

use crate::core::pcl::{self, Axis};
use crate::domain::model::{DelimitedRecord, PrintConfiguration};
use std::borrow::Borrow;

pub const FIRST_LINE_OFFSET: u32 = 10;
pub const LINE_ADVANCE: u32 = 20;

/// Running state of one address block: where the next line goes and what
/// has been emitted so far.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    line: u32,
    text: String,
}

impl Block {
    fn start(config: &PrintConfiguration) -> Self {
        Self {
            line: config.margin_top.saturating_add(FIRST_LINE_OFFSET),
            text: String::new(),
        }
    }

    fn move_to_line(mut self) -> Self {
        self.text.push_str(&pcl::move_cursor(Axis::Vertical, self.line));
        self
    }

    fn move_to_column(mut self, column: u32) -> Self {
        self.text.push_str(&pcl::move_cursor(Axis::Horizontal, column));
        self
    }

    fn write(mut self, value: &str) -> Self {
        self.text.push_str(value);
        self.text.push_str(pcl::NEWLINE);
        self
    }

    fn advance(mut self) -> Self {
        self.line = self.line.saturating_add(LINE_ADVANCE);
        self
    }

    fn write_line(self, value: &str) -> Self {
        self.write(value).advance()
    }
}

fn recipient_name(record: &DelimitedRecord) -> &str {
    record
        .get("Nome")
        .or_else(|| record.get("Destinatario"))
        .unwrap_or("")
}

fn address_block(block: Block, record: &DelimitedRecord) -> Block {
    let mut block = block.move_to_line();
    if let Some(street) = record.get("Endereco") {
        block = block.write_line(street);
    }

    if let Some(complement) = record.get("Complemento").filter(|c| !c.is_empty()) {
        block = block.move_to_line().write_line(complement);
    }

    if let Some(district) = record.get("Bairro") {
        block = block.move_to_line().write_line(district);
    }

    let city = record.get("Cidade").unwrap_or("");
    let state = record
        .get("Estado")
        .or_else(|| record.get("UF"))
        .unwrap_or("");
    block
        .move_to_line()
        .write_line(&format!("{} - {}", city, state))
}

/// Lays out a single record as text, starting from the top of its page.
pub fn layout_record(record: &DelimitedRecord, config: &PrintConfiguration) -> String {
    let mut block = Block::start(config)
        .move_to_line()
        .move_to_column(config.margin_left)
        .write_line(recipient_name(record));

    if config.include_full_address {
        block = address_block(block, record);
    }

    if config.include_postal_code {
        if let Some(postal_code) = record.get("CEP") {
            // 最後一行不需要再往下移
            block = block.move_to_line().write(&format!("CEP: {}", postal_code));
        }
    }

    block.text
}

/// Lays out every record, separated by form feeds, in the configured encoding.
pub fn generate_pages<I>(records: I, config: &PrintConfiguration) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: Borrow<DelimitedRecord>,
{
    let body = records
        .into_iter()
        .enumerate()
        .fold(String::new(), |mut body, (index, record)| {
            if index > 0 {
                body.push_str(pcl::form_feed());
            }
            body.push_str(&layout_record(record.borrow(), config));
            body
        });

    config.encoding.encode(&body)
}
