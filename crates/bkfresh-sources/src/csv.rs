//! Header-keyed parsing of comma-separated spreadsheet exports.
//!
//! Lenient: ragged rows yield empty strings, never errors. Input is split on
//! newlines before quote tracking begins, so a quoted field cannot span lines.

/// One data row keyed by header name. Values are untyped display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Insert a field; a repeated header name overwrites the earlier value.
    fn insert(&mut self, name: &str, value: String) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name.to_string(), value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `name`, or `""` when the column does not exist.
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `(name, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Parse comma-separated text into records keyed by the first line.
///
/// A leading byte-order mark is ignored. Returns an empty vec when there is
/// no data row (empty or header-only input). Rows shorter than the header get `""` for the missing trailing
/// fields; extra fields are dropped.
#[must_use]
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut lines = text.trim_start_matches('\u{feff}').trim().split('\n');
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = split_fields(header_line)
        .into_iter()
        .map(|h| h.replace('"', "").trim().to_string())
        .collect();

    lines
        .map(|line| {
            let mut values = split_fields(line).into_iter();
            let mut record = Record::default();
            for name in &headers {
                record.insert(name, values.next().unwrap_or_default());
            }
            record
        })
        .collect()
}

/// Split one line on commas that are outside double quotes.
///
/// Quote characters toggle the quoted state and are not kept. Each field is
/// whitespace-trimmed.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;
