use std::collections::HashSet;

/// Emails and phone numbers accumulated over one crawl
///
/// Membership is by exact string: `A@b.com` and `a@b.com` are two entries, as
/// are `555-123-4567` and `555.123.4567`.
#[derive(Debug, Default, Clone)]
pub struct ContactSet {
    emails: HashSet<String>,
    phones: HashSet<String>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an email; returns `true` if it was new
    pub fn insert_email(&mut self, email: impl Into<String>) -> bool {
        self.emails.insert(email.into())
    }

    /// Adds a phone number; returns `true` if it was new
    pub fn insert_phone(&mut self, phone: impl Into<String>) -> bool {
        self.phones.insert(phone.into())
    }

    pub fn emails(&self) -> &HashSet<String> {
        &self.emails
    }

    pub fn phones(&self) -> &HashSet<String> {
        &self.phones
    }

    /// Consumes the set, returning emails and phones as sorted lists
    pub fn into_sorted(self) -> (Vec<String>, Vec<String>) {
        let mut emails: Vec<String> = self.emails.into_iter().collect();
        let mut phones: Vec<String> = self.phones.into_iter().collect();
        emails.sort();
        phones.sort();
        (emails, phones)
    }
}
