//! Display truncation for long field values

/// Width applied to every field unless configured otherwise.
pub const DEFAULT_MAX_LEN: usize = 20;

const ELLIPSIS: &str = " ...";

/// Truncation settings applied to each parsed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFormat {
    pub max_len: usize,
    pub ellipsis: bool,
}

impl Default for FieldFormat {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            ellipsis: true,
        }
    }
}

impl FieldFormat {
    pub fn apply(&self, field: String) -> String {
        if field.chars().count() <= self.max_len {
            return field;
        }
        truncate(&field, self.max_len, self.ellipsis)
    }
}

/// Cut `field` to `max_len` characters, appending `" ..."` when `ellipsis` is set.
///
/// Fields at or under the limit come back unchanged.
pub fn truncate(field: &str, max_len: usize, ellipsis: bool) -> String {
    match field.char_indices().nth(max_len) {
        None => field.to_string(),
        Some((cut, _)) => {
            let mut short = field[..cut].to_string();
            if ellipsis {
                short.push_str(ELLIPSIS);
            }
            short
        }
    }
}
