//! Whole-span pattern classifiers for tokens the lexicon does not know

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Top-level domains accepted by the URL classifier
const TOP_LEVEL_DOMAINS: &[&str] = &[
    "aero", "asia", "biz", "cat", "com", "coop", "edu", "gov", "info", "int", "jobs", "mil",
    "mobi", "museum", "name", "net", "org", "pro", "tel", "travel", "ac", "ad", "ae", "af", "ag",
    "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au", "aw", "ax", "az", "ba", "bb", "bd",
    "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs", "bt", "bv", "bw", "by", "bz",
    "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn", "co", "cr", "cu", "cv", "cx",
    "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "ee", "eg", "er", "es", "et", "eu", "fi",
    "fj", "fk", "fm", "fo", "fr", "ga", "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn",
    "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie",
    "il", "im", "in", "io", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki",
    "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu",
    "lv", "ly", "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mn", "mo", "mp", "mr", "ms", "mt",
    "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np", "nr",
    "nu", "nz", "nom", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw",
    "py", "qa", "re", "ra", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj",
    "sk", "sl", "sm", "sn", "so", "sr", "st", "su", "sv", "sy", "sz", "tc", "td", "tf", "tg", "th",
    "tj", "tk", "tl", "tm", "tn", "to", "tp", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk", "us",
    "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "yu", "za", "zm",
    "zw", "arpa",
];

/// Pattern a token span was recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternClass {
    /// Decimal (optionally ordinal `e`), Roman numeral or hexadecimal
    Number,
    /// `H[h:]MM`
    Time,
    /// `D/M/Y` or `Y/M/D`
    Date,
    /// Signed integer with a degree unit
    Temperature,
    /// Domain name, URL or `@handle`
    Url,
}

/// Compiled classifier set, tried in priority order
#[derive(Debug, Clone)]
pub struct Classifiers {
    decimal: Regex,
    roman: Regex,
    hexadecimal: Regex,
    time: Regex,
    date: Regex,
    temperature: Regex,
    url: Regex,
}

impl Classifiers {
    pub fn new() -> Result<Self> {
        let url = format!(
            r"^(?:@\w+|(?:(?:https?|ftp)://)?(?:[0-9a-z_-]+\.)+(?:{})(?::[0-9]+)?(?:/[0-9a-z/?=#()_.\[\]-]*)?)$",
            TOP_LEVEL_DOMAINS.join("|")
        );
        Ok(Self {
            decimal: Regex::new(r"^[0-9]+e?$")?,
            roman: Regex::new(r"^[MDCLXVI]+e?$")?,
            hexadecimal: Regex::new(r"^(?:0x)?[0-9a-fA-F]+$")?,
            time: Regex::new(r"^(?:[01]?[0-9]|2[0-3])[h:][0-5][0-9]$")?,
            date: Regex::new(
                r"^(?:[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}|[0-9]{4}/[0-9]{1,2}/[0-9]{1,2})$",
            )?,
            temperature: Regex::new(r"^-?[0-9]+°[CFK]$")?,
            url: Regex::new(&url)?,
        })
    }

    /// First classifier matching the whole span, in order number, time,
    /// date, temperature, URL
    pub fn classify(&self, span: &str) -> Option<PatternClass> {
        if span.is_empty() {
            None
        } else if self.is_number(span) {
            Some(PatternClass::Number)
        } else if self.time.is_match(span) {
            Some(PatternClass::Time)
        } else if self.date.is_match(span) {
            Some(PatternClass::Date)
        } else if self.temperature.is_match(span) {
            Some(PatternClass::Temperature)
        } else if self.url.is_match(span) {
            Some(PatternClass::Url)
        } else {
            None
        }
    }

    pub fn is_number(&self, span: &str) -> bool {
        self.decimal.is_match(span) || self.roman.is_match(span) || self.hexadecimal.is_match(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(span: &str) -> Option<PatternClass> {
        Classifiers::new().unwrap().classify(span)
    }

    #[test]
    fn test_numbers() {
        for span in ["42", "1e", "XIVe", "MMXX", "0x1F", "ff"] {
            assert_eq!(classify(span), Some(PatternClass::Number), "{span}");
        }
        assert_eq!(classify("12a3g"), None);
    }

    #[test]
    fn test_time() {
        assert_eq!(classify("12h40"), Some(PatternClass::Time));
        assert_eq!(classify("9h05"), Some(PatternClass::Time));
        assert_eq!(classify("23:59"), Some(PatternClass::Time));
        assert_eq!(classify("24h00"), None);
        assert_eq!(classify("12h60"), None);
        assert_eq!(classify("12h40x"), None);
    }

    #[test]
    fn test_date() {
        assert_eq!(classify("14/07/1789"), Some(PatternClass::Date));
        assert_eq!(classify("1/2/24"), Some(PatternClass::Date));
        assert_eq!(classify("2024/01/15"), Some(PatternClass::Date));
        assert_eq!(classify("14/07"), None);
    }

    #[test]
    fn test_temperature() {
        assert_eq!(classify("-5°C"), Some(PatternClass::Temperature));
        assert_eq!(classify("300°K"), Some(PatternClass::Temperature));
        assert_eq!(classify("20°"), None);
    }

    #[test]
    fn test_urls() {
        for span in [
            "lapresse.ca",
            "www.lapresse.ca",
            "http://example.com",
            "ftp://files.example.org:21/pub",
            "example.com/path?q=1",
            "@mots_fr",
        ] {
            assert_eq!(classify(span), Some(PatternClass::Url), "{span}");
        }
        for span in ["lapresse", "lapresse.", "vie.est", "@", "@mots fr", "Lapresse.CA"] {
            assert_eq!(classify(span), None, "{span}");
        }
    }

    #[test]
    fn test_priority_prefers_number() {
        // hexadecimal wins over every later classifier
        assert_eq!(classify("cafe"), Some(PatternClass::Number));
    }
}
