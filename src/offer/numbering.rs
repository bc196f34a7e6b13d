use chrono::{Datelike, NaiveDate};

/// Roman numeral for a calendar month (1 = "I" … 12 = "XII").
pub fn roman_month(month: u32) -> Option<&'static str> {
    const MONTHS: [&str; 12] = [
        "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
    ];
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

/// Offer letter number sequence.
///
/// Generates numbers in the format
/// `{sequential}/{branch}/{division}/{code}/{roman month}/{yy}`,
/// e.g. "993/JKT/SRV/AA/III/24". Month and year come from the letter date.
///
/// ```
/// use chrono::NaiveDate;
/// use penawaran::offer::OfferNumberSequence;
///
/// let mut seq = OfferNumberSequence::starting_at(993);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
/// assert_eq!(seq.next_number(date), "993/JKT/SRV/AA/III/24");
/// ```
#[derive(Debug, Clone)]
pub struct OfferNumberSequence {
    branch: String,
    division: String,
    code: String,
    next_number: u64,
    zero_pad: usize,
}

impl Default for OfferNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferNumberSequence {
    /// Create a sequence starting at 1 with the Jakarta service prefix.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(next_number: u64) -> Self {
        Self {
            branch: "JKT".to_string(),
            division: "SRV".to_string(),
            code: "AA".to_string(),
            next_number,
            zero_pad: 0,
        }
    }

    /// Replace the branch, division and signer code segments.
    pub fn with_segments(
        mut self,
        branch: impl Into<String>,
        division: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        self.branch = branch.into();
        self.division = division.into();
        self.code = code.into();
        self
    }

    /// Set zero-padding width of the sequential part (default: none).
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next letter number for a letter dated `date`.
    pub fn next_number(&mut self, date: NaiveDate) -> String {
        let number = self.format(self.next_number, date);
        self.next_number += 1;
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self, date: NaiveDate) -> String {
        self.format(self.next_number, date)
    }

    /// Get the next number that will be issued (without segments).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    fn format(&self, number: u64, date: NaiveDate) -> String {
        // chrono months are always 1..=12
        let month = roman_month(date.month()).unwrap_or_default();
        format!(
            "{:0>width$}/{}/{}/{}/{}/{:02}",
            number,
            self.branch,
            self.division,
            self.code,
            month,
            date.year().rem_euclid(100),
            width = self.zero_pad
        )
    }
}
