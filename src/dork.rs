//! Search dorks built from phone number attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PhoneNumber;

/// Category of exposure a dork targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DorkCategory {
    /// Disposable / receive-SMS-online number providers.
    Disposable,
    /// Phone reputation and complaint sites.
    Reputation,
    /// People search and social sites.
    Individuals,
    /// The open web.
    General,
}

impl DorkCategory {
    /// Categories in the order they are searched.
    pub const ALL: [DorkCategory; 4] = [
        DorkCategory::Disposable,
        DorkCategory::Reputation,
        DorkCategory::Individuals,
        DorkCategory::General,
    ];
}

impl fmt::Display for DorkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DorkCategory::Disposable => "disposable",
            DorkCategory::Reputation => "reputation",
            DorkCategory::Individuals => "individuals",
            DorkCategory::General => "general",
        };
        f.write_str(name)
    }
}

/// A search query made of Google operators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dork {
    terms: Vec<String>,
}

impl Dork {
    /// Creates an empty dork.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dork from a raw query string.
    pub fn raw(query: impl Into<String>) -> Self {
        Self {
            terms: vec![query.into()],
        }
    }

    /// Restricts results to a domain.
    pub fn site(self, domain: &str) -> Self {
        self.push(format!("site:{}", domain))
    }

    /// Requires an exact phrase in the page text.
    pub fn intext(self, text: &str) -> Self {
        self.push(format!("intext:\"{}\"", text))
    }

    /// Requires an exact phrase in the page title.
    pub fn intitle(self, text: &str) -> Self {
        self.push(format!("intitle:\"{}\"", text))
    }

    /// Requires an exact phrase in the URL.
    pub fn inurl(self, text: &str) -> Self {
        self.push(format!("inurl:\"{}\"", text))
    }

    /// Restricts results to a file extension.
    pub fn ext(self, extension: &str) -> Self {
        self.push(format!("ext:{}", extension))
    }

    /// Joins the previous and next terms as alternatives.
    pub fn or(self) -> Self {
        self.push("OR".to_string())
    }

    /// Appends a parenthesized sub-query.
    pub fn group(self, inner: Dork) -> Self {
        self.push(format!("({})", inner.query()))
    }

    fn push(mut self, term: String) -> Self {
        self.terms.push(term);
        self
    }

    /// Returns the query string.
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }

    /// Returns the Google web search URL for this dork.
    pub fn google_url(&self) -> String {
        format!(
            "https://www.google.com/search?q={}",
            urlencoding::encode(&self.query())
        )
    }
}

impl fmt::Display for Dork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query())
    }
}

/// Produces the dorks of one category for a number.
pub type DorkGenerator = fn(&PhoneNumber) -> Vec<Dork>;

/// The four generators a scan draws its dorks from.
#[derive(Clone, Copy)]
pub struct DorkSet {
    pub disposable: DorkGenerator,
    pub reputation: DorkGenerator,
    pub individuals: DorkGenerator,
    pub general: DorkGenerator,
}

impl DorkSet {
    /// Returns the generator for a category.
    pub fn generator(&self, category: DorkCategory) -> DorkGenerator {
        match category {
            DorkCategory::Disposable => self.disposable,
            DorkCategory::Reputation => self.reputation,
            DorkCategory::Individuals => self.individuals,
            DorkCategory::General => self.general,
        }
    }

    /// Generates the dorks for each category, in search order.
    pub fn by_category(&self, number: &PhoneNumber) -> Vec<(DorkCategory, Vec<Dork>)> {
        DorkCategory::ALL
            .iter()
            .map(|&category| (category, (self.generator(category))(number)))
            .collect()
    }

    /// Generates the full ordered dork list.
    pub fn generate(&self, number: &PhoneNumber) -> Vec<Dork> {
        self.by_category(number)
            .into_iter()
            .flat_map(|(_, dorks)| dorks)
            .collect()
    }
}

impl Default for DorkSet {
    fn default() -> Self {
        Self {
            disposable: disposable_provider_dorks,
            reputation: reputation_dorks,
            individuals: individual_dorks,
            general: general_dorks,
        }
    }
}

impl fmt::Debug for DorkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DorkSet").finish_non_exhaustive()
    }
}

const DISPOSABLE_PROVIDERS: &[&str] = &[
    "hs3x.com",
    "receive-sms-now.com",
    "smslisten.com",
    "smsnumbersonline.com",
    "freesmscode.com",
    "catchsms.com",
    "smstibo.com",
    "smsreceiving.com",
    "getfreesmsnumber.com",
    "sellaite.com",
    "receive-sms-online.info",
    "receivesmsonline.com",
    "receive-a-sms.com",
    "sms-receive.net",
    "receivefreesms.com",
    "receive-sms.com",
    "receivetxt.com",
    "freephonenum.com",
    "freesmsverification.com",
    "receive-sms-online.com",
    "smslive.co",
    "freeonlinephone.org",
    "freereceivesms.com",
    "temporary-phone-number.com",
];

const DOCUMENT_EXTENSIONS: &[&str] = &[
    "doc", "docx", "odt", "pdf", "rtf", "sxw", "psw", "ppt", "pptx", "pps", "csv", "txt", "xls",
];

/// Dorks looking for the number on disposable SMS provider sites.
pub fn disposable_provider_dorks(number: &PhoneNumber) -> Vec<Dork> {
    DISPOSABLE_PROVIDERS
        .iter()
        .map(|provider| {
            Dork::new()
                .site(provider)
                .intext(&number.international)
                .or()
                .intext(&number.raw_local)
        })
        .collect()
}

/// Dorks looking for the number on reputation and complaint sites.
pub fn reputation_dorks(number: &PhoneNumber) -> Vec<Dork> {
    vec![
        Dork::new()
            .site("whosenumber.info")
            .intext(&number.e164)
            .intitle("who called"),
        Dork::new()
            .intitle("Phone Fraud")
            .intext(&number.e164)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("findwhocallsme.com")
            .intext(&number.e164)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("yellowpages.ca")
            .intext(&number.e164),
        Dork::new()
            .site("phonenumbers.ie")
            .intext(&number.e164),
        Dork::new()
            .site("who-calledme.com")
            .intext(&number.e164),
        Dork::new()
            .site("usphonesearch.net")
            .intext(&number.raw_local),
        Dork::new()
            .site("whocalled.us")
            .inurl(&number.raw_local),
        Dork::new()
            .site("quinumero.info")
            .intext(&number.local)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("uk.popularphotolook.com")
            .inurl(&number.raw_local),
    ]
}

/// Dorks looking for the number on people search and social sites.
pub fn individual_dorks(number: &PhoneNumber) -> Vec<Dork> {
    vec![
        Dork::new()
            .site("numinfo.net")
            .intext(&number.international)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("sync.me")
            .intext(&number.international)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("whocallsyou.de")
            .intext(&format!("0{}", number.raw_local)),
        Dork::new()
            .site("pastebin.com")
            .intext(&number.international)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("whycall.me")
            .intext(&number.international)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("locatefamily.com")
            .intext(&number.international)
            .or()
            .intext(&number.local)
            .or()
            .intext(&number.raw_local),
        Dork::new()
            .site("spytox.com")
            .intext(&number.local),
    ]
}

/// Dorks looking for the number anywhere on the web and in documents.
pub fn general_dorks(number: &PhoneNumber) -> Vec<Dork> {
    let documents = DOCUMENT_EXTENSIONS
        .iter()
        .enumerate()
        .fold(Dork::new(), |dork, (i, extension)| {
            let dork = if i > 0 { dork.or() } else { dork };
            dork.ext(extension)
        });

    vec![
        Dork::new()
            .intext(&number.international)
            .or()
            .intext(&number.e164)
            .or()
            .intext(&number.raw_local)
            .or()
            .intext(&number.local),
        Dork::new()
            .group(documents)
            .intext(&number.international)
            .or()
            .intext(&number.e164)
            .or()
            .intext(&number.raw_local)
            .or()
            .intext(&number.local),
    ]
}
