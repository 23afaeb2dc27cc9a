/// Address submitted to the newsletter sign-up.
///
/// Only the shape the newsletter providers rely on is checked: a non-empty
/// value containing `@`. Full address validation is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let s = s.trim().to_string();
        if s.is_empty() || !s.contains('@') {
            return Err(format!("{} is not a valid subscriber email.", s));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
