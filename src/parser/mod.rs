//! Best-effort extraction of line items from pasted text.
//!
//! Two line shapes are recognised:
//!
//! - **Tabular** — any line containing a tab is treated as a spreadsheet row
//!   and read through a [`TabularLayout`] (12-column sales export by default).
//! - **Free text** — chat-style `qty unit part description… price`, split on
//!   whitespace runs.
//!
//! Lines that fit neither shape are skipped, never fatal. Blank lines are
//! ignored entirely.
//!
//! ```
//! use penawaran::parser::parse_items;
//! use rust_decimal_macros::dec;
//!
//! let items = parse_items("2 pcs SP-100 Spo2 sensor adult 1.250.000\nthanks!");
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].quantity, dec!(2));
//! assert_eq!(items[0].description.as_deref(), Some("Spo2 sensor adult"));
//! assert_eq!(items[0].unit_price, dec!(1250000));
//! ```

mod error;
mod fields;
mod layout;

pub use error::*;
pub use layout::*;

use tracing::debug;

use crate::core::LineItem;
use fields::{non_empty, parse_price, parse_quantity, parse_quantity_field};

/// Free-text lines need quantity, unit, part number and price.
pub const FREE_TEXT_MIN_TOKENS: usize = 4;

/// Result of parsing one non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Parsed(LineItem),
    Skipped(UnparsableLine),
}

impl LineOutcome {
    pub fn item(&self) -> Option<&LineItem> {
        match self {
            Self::Parsed(item) => Some(item),
            Self::Skipped(_) => None,
        }
    }
}

/// Parsed items together with the lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub items: Vec<LineItem>,
    pub skipped: Vec<UnparsableLine>,
}

impl ParseReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Stateless line-item parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemParser {
    layout: TabularLayout,
}

impl ItemParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different column layout for tab-separated rows.
    pub fn with_layout(mut self, layout: TabularLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &TabularLayout {
        &self.layout
    }

    /// Parse every non-blank line into a tagged outcome, in source order.
    pub fn parse_lines(&self, raw: &str) -> Vec<LineOutcome> {
        raw.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| match self.parse_line(line) {
                Ok(item) => LineOutcome::Parsed(item),
                Err(reason) => {
                    debug!(line = i + 1, %reason, "skipping unparsable line");
                    LineOutcome::Skipped(UnparsableLine { line: i + 1, reason })
                }
            })
            .collect()
    }

    /// Parse and split the outcomes into items and skipped lines.
    pub fn parse_report(&self, raw: &str) -> ParseReport {
        let mut report = ParseReport::default();
        for outcome in self.parse_lines(raw) {
            match outcome {
                LineOutcome::Parsed(item) => report.items.push(item),
                LineOutcome::Skipped(skipped) => report.skipped.push(skipped),
            }
        }
        report
    }

    /// Parse and keep only the successfully parsed items.
    pub fn parse_items(&self, raw: &str) -> Vec<LineItem> {
        self.parse_report(raw).items
    }

    /// Parse a single line. Tab-containing lines use the tabular layout.
    pub fn parse_line(&self, line: &str) -> Result<LineItem, SkipReason> {
        if line.contains('\t') {
            self.parse_tabular(line)
        } else {
            parse_free_text(line)
        }
    }

    fn parse_tabular(&self, line: &str) -> Result<LineItem, SkipReason> {
        let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
        let required = self.layout.required_columns();
        if cells.len() < required {
            return Err(SkipReason::TooFewFields {
                required,
                found: cells.len(),
            });
        }

        let (quantity, unit_of_measure) = parse_quantity_field(cells[self.layout.quantity])?;
        let unit_price = parse_price(cells[self.layout.unit_price])?;

        Ok(LineItem {
            quantity,
            unit_of_measure,
            part_number: non_empty(cells[self.layout.part_number]),
            description: non_empty(cells[self.layout.description]),
            unit_price,
        })
    }
}

fn parse_free_text(line: &str) -> Result<LineItem, SkipReason> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < FREE_TEXT_MIN_TOKENS {
        return Err(SkipReason::TooFewFields {
            required: FREE_TEXT_MIN_TOKENS,
            found: tokens.len(),
        });
    }

    let quantity = parse_quantity(tokens[0])?;
    let last = tokens.len() - 1;
    let unit_price = parse_price(tokens[last])?;
    let description = tokens[3..last].join(" ");

    Ok(LineItem {
        quantity,
        unit_of_measure: tokens[1].to_string(),
        part_number: Some(tokens[2].to_string()),
        description: non_empty(&description),
        unit_price,
    })
}

/// Parse raw text with the default parser, keeping parsed items only.
pub fn parse_items(raw: &str) -> Vec<LineItem> {
    ItemParser::default().parse_items(raw)
}

/// Parse raw text with the default parser into tagged per-line outcomes.
pub fn parse_lines(raw: &str) -> Vec<LineOutcome> {
    ItemParser::default().parse_lines(raw)
}

/// Parse raw text with the default parser into items and skipped lines.
pub fn parse_report(raw: &str) -> ParseReport {
    ItemParser::default().parse_report(raw)
}
