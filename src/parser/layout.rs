use serde::{Deserialize, Serialize};

/// Column positions of a tab-separated (spreadsheet paste) row.
///
/// Indices are zero-based. Rows with fewer than [`required_columns`]
/// cells are skipped.
///
/// [`required_columns`]: TabularLayout::required_columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularLayout {
    /// Minimum number of cells a row must have.
    pub min_columns: usize,
    pub part_number: usize,
    pub description: usize,
    /// Cell holding the quantity, optionally followed by a unit ("2 pcs").
    pub quantity: usize,
    /// Cell holding the price in the quotation currency.
    pub unit_price: usize,
}

impl TabularLayout {
    /// Sales-ledger export: date, document number, customer, brand, type,
    /// serial number, part number, description, quantity+unit, currency,
    /// foreign price, IDR price.
    pub const RICH: Self = Self {
        min_columns: 12,
        part_number: 6,
        description: 7,
        quantity: 8,
        unit_price: 11,
    };

    /// Quantity, part number, description, price.
    pub const COMPACT: Self = Self {
        min_columns: 4,
        quantity: 0,
        part_number: 1,
        description: 2,
        unit_price: 3,
    };

    /// Cell count a row needs: `min_columns`, or more if a configured index
    /// lies beyond it.
    pub fn required_columns(&self) -> usize {
        [
            self.min_columns,
            self.part_number + 1,
            self.description + 1,
            self.quantity + 1,
            self.unit_price + 1,
        ]
        .into_iter()
        .max()
        .unwrap_or(self.min_columns)
    }
}

impl Default for TabularLayout {
    fn default() -> Self {
        Self::RICH
    }
}
