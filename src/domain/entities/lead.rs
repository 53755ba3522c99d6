//! Lead entity representing one submitted contact-form entry.

/// Sentinel rendered wherever an optional free-text field was left blank.
pub const NOT_PROVIDED: &str = "Not provided";

/// Company headcount bracket, drawn from the form's closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    OneToFive,
    SixToTwenty,
    TwentyOneToFifty,
    FiftyPlus,
}

impl CompanySize {
    /// All accepted brackets, in form order.
    pub const ALL: [CompanySize; 4] = [
        CompanySize::OneToFive,
        CompanySize::SixToTwenty,
        CompanySize::TwentyOneToFifty,
        CompanySize::FiftyPlus,
    ];

    /// The wire/display label for this bracket.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::OneToFive => "1-5",
            CompanySize::SixToTwenty => "6-20",
            CompanySize::TwentyOneToFifty => "21-50",
            CompanySize::FiftyPlus => "50+",
        }
    }

    /// Parses a wire label into a bracket.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// A validated lead, ready to be forwarded to the record store.
///
/// Has no identity of its own; the record store assigns one on creation
/// (see [`LeadRecord`]). Optional fields keep `None` for "left blank" —
/// rendering the [`NOT_PROVIDED`] sentinel is the concern of the
/// consumers that display or store the lead.
#[derive(Debug, Clone)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: String,
    pub company_size: CompanySize,
    pub challenge: Option<String>,
}

impl Lead {
    /// Phone for display, with the sentinel for blank values.
    pub fn phone_or_default(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_PROVIDED)
    }

    /// Challenge for display, with the sentinel for blank values.
    pub fn challenge_or_default(&self) -> &str {
        self.challenge.as_deref().unwrap_or(NOT_PROVIDED)
    }
}

/// Identity assigned to a lead by the record store.
#[derive(Debug, Clone)]
pub struct LeadRecord {
    pub id: String,
    pub url: String,
}
