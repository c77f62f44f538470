//! Inventor name parsing and blocking signatures.
//!
//! Accepts `Last, First Middle` and `First Middle Last`. Tokens are folded to
//! ASCII where a Latin diacritic mapping exists, lowercased, and stripped of
//! punctuation. Periods split tokens (`J.R.` → `j r`); hyphens and
//! apostrophes join them (`O'Brien` → `obrien`).

use patnet_core::constants::{BLOCK_KEY_SEPARATOR, NAME_SUFFIXES};

/// A parsed, normalized inventor name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParsedName {
    pub first: String,
    pub middle: Vec<String>,
    pub last: String,
}

impl ParsedName {
    /// `first middle last`, space-separated, empty parts skipped.
    pub fn full(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.middle.len() + 2);
        if !self.first.is_empty() {
            parts.push(&self.first);
        }
        parts.extend(self.middle.iter().map(String::as_str));
        parts.push(&self.last);
        parts.join(" ")
    }

    pub fn first_initial(&self) -> Option<char> {
        self.first.chars().next()
    }

    pub fn middle_initial(&self) -> Option<char> {
        self.middle.first().and_then(|m| m.chars().next())
    }

    /// Blocking signature: last name + first initial.
    pub fn block_key(&self) -> String {
        let mut key = self.last.clone();
        key.push(BLOCK_KEY_SEPARATOR);
        if let Some(c) = self.first_initial() {
            key.push(c);
        }
        key
    }
}

/// Parse a raw inventor name. Returns `None` when no alphabetic token remains.
pub fn parse_name(raw: &str) -> Option<ParsedName> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (mut surname_tokens, mut given_tokens) = match raw.split_once(',') {
        Some((last, given)) => (tokenize(last), tokenize(given)),
        None => {
            let mut tokens = tokenize(raw);
            strip_suffixes(&mut tokens);
            let last = tokens.pop()?;
            (vec![last], tokens)
        }
    };
    strip_suffixes(&mut surname_tokens);
    strip_suffixes(&mut given_tokens);

    if surname_tokens.is_empty() {
        // "Smith," with nothing after the comma still names a surname;
        // ", John" does not.
        return None;
    }
    let last = surname_tokens.concat();

    let mut given = given_tokens.into_iter();
    let first = given.next().unwrap_or_default();
    let middle = given.collect();

    Some(ParsedName {
        first,
        middle,
        last,
    })
}

/// Blocking signature for a raw name, if parseable.
pub fn block_key(raw: &str) -> Option<String> {
    parse_name(raw).map(|p| p.block_key())
}

fn strip_suffixes(tokens: &mut Vec<String>) {
    while tokens.len() > 1
        && tokens
            .last()
            .is_some_and(|t| NAME_SUFFIXES.contains(&t.as_str()))
    {
        tokens.pop();
    }
}

fn tokenize(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in s.chars() {
        if c.is_whitespace() || c == '.' || c == ',' {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(folded) = fold_diacritic(c) {
            current.push_str(folded);
        } else if c.is_alphabetic() {
            current.extend(c.to_lowercase());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// ASCII replacement for common Latin letters with diacritics.
fn fold_diacritic(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å'
        | 'Ā' | 'Ă' | 'Ą' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' | 'Ç' | 'Ć' | 'Č' | 'Ĉ' | 'Ċ' => "c",
        'ď' | 'đ' | 'Ď' | 'Đ' | 'ð' | 'Ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' | 'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę'
        | 'Ě' => "e",
        'ğ' | 'ĝ' | 'ģ' | 'Ğ' | 'Ĝ' | 'Ģ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' | 'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' | 'İ' => "i",
        'ķ' | 'Ķ' => "k",
        'ł' | 'ľ' | 'ĺ' | 'ļ' | 'Ł' | 'Ľ' | 'Ĺ' | 'Ļ' => "l",
        'ñ' | 'ń' | 'ň' | 'ņ' | 'Ñ' | 'Ń' | 'Ň' | 'Ņ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō'
        | 'Ő' => "o",
        'œ' | 'Œ' => "oe",
        'ř' | 'ŕ' | 'Ř' | 'Ŕ' => "r",
        'ś' | 'š' | 'ş' | 'ș' | 'Ś' | 'Š' | 'Ş' | 'Ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' | 'Ť' | 'Ţ' | 'Ț' => "t",
        'þ' | 'Þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' | 'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű'
        | 'Ų' => "u",
        'ý' | 'ÿ' | 'Ý' | 'Ÿ' => "y",
        'ź' | 'ż' | 'ž' | 'Ź' | 'Ż' | 'Ž' => "z",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(first: &str, middle: &[&str], last: &str) -> ParsedName {
        ParsedName {
            first: first.to_string(),
            middle: middle.iter().map(|m| m.to_string()).collect(),
            last: last.to_string(),
        }
    }

    #[test]
    fn first_last_order() {
        assert_eq!(parse_name("John Smith"), Some(parsed("john", &[], "smith")));
        assert_eq!(parse_name("  J.  Smith "), Some(parsed("j", &[], "smith")));
        assert_eq!(
            parse_name("John Q. Public"),
            Some(parsed("john", &["q"], "public"))
        );
    }

    #[test]
    fn last_comma_first_order() {
        assert_eq!(
            parse_name("Smith, John Q."),
            Some(parsed("john", &["q"], "smith"))
        );
        assert_eq!(parse_name("Smith,"), Some(parsed("", &[], "smith")));
        assert_eq!(parse_name(", John"), None);
    }

    #[test]
    fn suffixes_and_punctuation() {
        assert_eq!(parse_name("John Smith Jr."), Some(parsed("john", &[], "smith")));
        assert_eq!(parse_name("Smith, John III"), Some(parsed("john", &[], "smith")));
        assert_eq!(parse_name("Sean O'Brien"), Some(parsed("sean", &[], "obrien")));
        assert_eq!(
            parse_name("Jean-Pierre Dupont"),
            Some(parsed("jeanpierre", &[], "dupont"))
        );
    }

    #[test]
    fn diacritics_fold_to_ascii() {
        assert_eq!(parse_name("José Müller"), Some(parsed("jose", &[], "muller")));
        assert_eq!(parse_name("Łukasz Wójcik"), Some(parsed("lukasz", &[], "wojcik")));
        assert_eq!(parse_name("Øystein Strauß"), Some(parsed("oystein", &[], "strauss")));
    }

    #[test]
    fn garbage_is_unparseable() {
        assert_eq!(parse_name(""), None);
        assert_eq!(parse_name("   "), None);
        assert_eq!(parse_name("1234 ###"), None);
        assert_eq!(parse_name("..."), None);
    }

    #[test]
    fn mononym_has_empty_first() {
        let p = parse_name("Prince").unwrap();
        assert_eq!(p.last, "prince");
        assert!(p.first.is_empty());
        assert_eq!(p.block_key(), "prince|");
        assert_eq!(p.full(), "prince");
    }

    #[test]
    fn block_key_is_last_and_initial() {
        assert_eq!(block_key("John Smith").as_deref(), Some("smith|j"));
        assert_eq!(block_key("J. Smith").as_deref(), Some("smith|j"));
        assert_eq!(block_key("SMITH, Jane").as_deref(), Some("smith|j"));
        assert_eq!(block_key("Émile Zola").as_deref(), Some("zola|e"));
    }
}
