//! Line tokenizer for the comma-delimited form export.

/// Splits one comma-delimited line into raw fields.
///
/// A `"` toggles the inside-quotes state; a `,` inside quotes is literal
/// text, not a separator. Quote characters themselves are consumed and
/// there is no escaped-quote support — the form export never doubles
/// quotes. Fields are returned untrimmed; trimming is the caller's job.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    // Don't forget the last field
    fields.push(current);
    fields
}
