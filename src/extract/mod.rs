//! Contact extraction from parsed pages
//!
//! Emails come from two sources that are merged into one set:
//! - A pattern scan of the page's visible text
//! - `mailto:` anchors, validated against the same pattern
//!
//! Phones likewise:
//! - `tel:` anchors, using the anchor text or the number in the href
//! - A pattern scan of visible text, filtered by digit count
//!
//! The compiled patterns live on the `ContactExtractor` value, which a crawl
//! builds once and reuses for every page.

use crate::crawler::PageDocument;
use crate::state::ContactSet;
use regex::Regex;

/// Email grammar: local part, `@`, domain, dot, alphabetic TLD of 2+ letters
const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Loose phone grammar: optional `+` and 1-3 digit country code, optional
/// parenthesized 2-5 digit group, two 2-4 digit groups, optional fourth group
const PHONE_PATTERN: &str =
    r"(?:\+?\d{1,3})?[-.\s]?\(?\d{2,5}\)?[-.\s]?\d{2,4}[-.\s]?\d{2,4}(?:[-.\s]?\d{2,4})?";

/// Fewer digits than this is treated as noise (dates, prices, counters)
pub const MIN_PHONE_DIGITS: usize = 7;

/// E.164 upper bound on the digits of a phone number
pub const MAX_PHONE_DIGITS: usize = 15;

const MAILTO_PREFIX: &str = "mailto:";
const TEL_PREFIX: &str = "tel:";

/// Per-page extraction counts, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionCounts {
    pub new_emails: usize,
    pub new_phones: usize,
}

/// Mines email addresses and phone numbers from pages
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    email_regex: Regex,
    email_prefix_regex: Regex,
    phone_regex: Regex,
}

impl ContactExtractor {
    /// Compiles the extraction patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email_regex: Regex::new(EMAIL_PATTERN)?,
            email_prefix_regex: Regex::new(&format!("^(?:{})", EMAIL_PATTERN))?,
            phone_regex: Regex::new(PHONE_PATTERN)?,
        })
    }

    /// Extracts all contacts from a page into `contacts`
    ///
    /// Insertion is idempotent, so running this twice over the same page
    /// leaves `contacts` unchanged the second time.
    pub fn extract(&self, page: &PageDocument, contacts: &mut ContactSet) -> ExtractionCounts {
        let text = page.visible_text();
        let mut counts = ExtractionCounts::default();

        for email in self.emails_in_text(&text) {
            if contacts.insert_email(email) {
                counts.new_emails += 1;
            }
        }

        for anchor in page.anchors_with_href_prefix(MAILTO_PREFIX) {
            if let Some(email) = self.email_from_mailto(&anchor.href) {
                if contacts.insert_email(email) {
                    counts.new_emails += 1;
                }
            }
        }

        for anchor in page.anchors_with_href_prefix(TEL_PREFIX) {
            if let Some(phone) = phone_from_tel(&anchor.href, &anchor.text) {
                if contacts.insert_phone(phone) {
                    counts.new_phones += 1;
                }
            }
        }

        for phone in self.phones_in_text(&text) {
            if contacts.insert_phone(phone) {
                counts.new_phones += 1;
            }
        }

        counts
    }

    /// Returns every email-grammar match in `text`, verbatim
    pub fn emails_in_text<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.email_regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Extracts the address from a `mailto:` href
    ///
    /// The scheme and any `?subject=...` suffix are removed, and the remainder
    /// must start with a valid address. Only the start is checked, so the full
    /// remainder is returned when it does.
    pub fn email_from_mailto(&self, href: &str) -> Option<String> {
        let address = href.strip_prefix(MAILTO_PREFIX)?;
        let address = address.split('?').next().unwrap_or_default();

        if self.email_prefix_regex.is_match(address) {
            Some(address.to_string())
        } else {
            None
        }
    }

    /// Returns phone-grammar matches in `text` that pass the digit-count filter
    ///
    /// Matches keep their original punctuation and spacing, trimmed of
    /// surrounding whitespace.
    pub fn phones_in_text<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.phone_regex
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|candidate| is_plausible_phone(candidate))
            .collect()
    }
}

/// Checks that a phone candidate carries between 7 and 15 digits
///
/// Digits are counted the way the phone pattern matches them, so full-width
/// and other Unicode decimal digits count too.
pub fn is_plausible_phone(candidate: &str) -> bool {
    let digits = candidate.chars().filter(|c| c.is_numeric()).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

/// Picks the phone value of a `tel:` anchor: its text if any, else the href number
fn phone_from_tel(href: &str, text: &str) -> Option<String> {
    let text = text.trim();
    if !text.is_empty() {
        return Some(text.to_string());
    }

    href.strip_prefix(TEL_PREFIX)
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .map(str::to_string)
}
