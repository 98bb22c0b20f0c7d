// Free-text ingredient line tokenization.
//
// Two distinct rules exist on purpose. The scaler splits a line once and
// treats everything after the number as one opaque suffix, so scaled lines
// render exactly like their source. The shopping-list aggregator splits
// twice to get unit and name separately and also accepts a decimal comma.
// Recipe text written against either behavior must keep rendering the same,
// so the rules are not unified.

/// Result of tokenizing one ingredient line.
///
/// Derived per call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedIngredient {
    Quantified {
        quantity: f64,
        unit: String,
        name: String,
    },
    /// No recognized leading quantity; the raw line is kept verbatim.
    Unparsed(String),
}

/// Splits `s` at the first whitespace run. The remainder keeps its internal
/// spacing. Returns `None` when there is no second part.
fn split_first_word(s: &str) -> Option<(&str, &str)> {
    let at = s.find(char::is_whitespace)?;
    let (head, tail) = s.split_at(at);
    let tail = tail.trim_start();
    if tail.is_empty() {
        None
    } else {
        Some((head, tail))
    }
}

/// Two-part rule used by the recipe scaler: a leading number plus one opaque
/// suffix. Only a period is accepted as decimal separator here.
pub fn split_quantity(line: &str) -> Option<(f64, &str)> {
    let (head, rest) = split_first_word(line)?;
    let quantity = head.parse::<f64>().ok()?;
    Some((quantity, rest))
}

/// Three-part rule used by the shopping-list aggregator: number, unit and
/// name. A decimal comma in the leading token is normalized to a period.
pub fn parse_line(line: &str) -> ParsedIngredient {
    if let Some((head, rest)) = split_first_word(line)
        && let Ok(quantity) = head.replace(',', ".").parse::<f64>()
    {
        let (unit, name) = match split_first_word(rest) {
            Some((unit, name)) => (unit, name),
            None => (rest, ""),
        };
        return ParsedIngredient::Quantified {
            quantity,
            unit: unit.to_string(),
            name: name.to_string(),
        };
    }
    ParsedIngredient::Unparsed(line.to_string())
}
