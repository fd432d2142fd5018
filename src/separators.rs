//! Characters accepted as decimal or grouping separators inside numbers.
//!
//! Comma, period, apostrophe and inline whitespace always separate digit
//! groups. A locale may contribute its own decimal and grouping separators
//! on top of that base set. Nothing here is cached: callers resolve the
//! locale when they need it and pass the resulting [`SeparatorSet`] down.

use std::env;

use phf::phf_map;

/// Environment variables consulted for the numeric locale, in POSIX order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Separator set used while scanning numeric runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeparatorSet {
    decimal: Option<char>,
    grouping: Option<char>,
}

impl SeparatorSet {
    /// Build the base set extended with optional locale separators.
    #[must_use]
    pub const fn new(decimal: Option<char>, grouping: Option<char>) -> Self {
        Self { decimal, grouping }
    }

    /// Resolve the separators of the host locale at call time.
    ///
    /// Falls back to the base set when no locale is configured or the
    /// configured one is unknown.
    #[must_use]
    pub fn from_env() -> Self {
        LocaleSeparators::from_env().map_or_else(Self::default, Self::from)
    }

    /// Whether `c` separates digit groups in a numeric run.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        matches!(c, ',' | '.' | '\'')
            || is_inline_whitespace(c)
            || self.decimal == Some(c)
            || self.grouping == Some(c)
    }

    /// Whether `c` may appear anywhere in a numeric run.
    #[must_use]
    pub fn accepts_in_run(&self, c: char) -> bool {
        c.is_ascii_digit() || self.contains(c)
    }
}

impl From<LocaleSeparators> for SeparatorSet {
    fn from(locale: LocaleSeparators) -> Self {
        Self::new(Some(locale.decimal), locale.grouping)
    }
}

/// Number formatting conventions of a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSeparators {
    pub decimal: char,
    pub grouping: Option<char>,
}

const NBSP: char = '\u{A0}';
const NNBSP: char = '\u{202F}';

const fn conventions(decimal: char, grouping: Option<char>) -> LocaleSeparators {
    LocaleSeparators { decimal, grouping }
}

/// Separator conventions keyed by `language` or `language_TERRITORY`.
static LOCALES: phf::Map<&'static str, LocaleSeparators> = phf_map! {
    "C" => conventions('.', None),
    "POSIX" => conventions('.', None),
    "ar" => conventions('\u{066B}', Some('\u{066C}')),
    "cs" => conventions(',', Some(NBSP)),
    "da" => conventions(',', Some('.')),
    "de" => conventions(',', Some('.')),
    "de_AT" => conventions(',', Some(NBSP)),
    "de_CH" => conventions('.', Some('\u{2019}')),
    "en" => conventions('.', Some(',')),
    "en_ZA" => conventions(',', Some(NBSP)),
    "es" => conventions(',', Some('.')),
    "fi" => conventions(',', Some(NBSP)),
    "fr" => conventions(',', Some(NNBSP)),
    "fr_CH" => conventions(',', Some(NNBSP)),
    "hi" => conventions('.', Some(',')),
    "it" => conventions(',', Some('.')),
    "it_CH" => conventions('.', Some('\u{2019}')),
    "ja" => conventions('.', Some(',')),
    "ko" => conventions('.', Some(',')),
    "nb" => conventions(',', Some(NBSP)),
    "nl" => conventions(',', Some('.')),
    "pl" => conventions(',', Some(NBSP)),
    "pt" => conventions(',', Some(NBSP)),
    "pt_BR" => conventions(',', Some('.')),
    "ru" => conventions(',', Some(NBSP)),
    "sv" => conventions(',', Some(NBSP)),
    "tr" => conventions(',', Some('.')),
    "uk" => conventions(',', Some(NBSP)),
    "zh" => conventions('.', Some(',')),
};

impl LocaleSeparators {
    /// Look up the conventions for a POSIX or BCP 47 style locale name.
    ///
    /// Codeset and modifier suffixes are ignored, so `de_DE.UTF-8@euro`
    /// resolves like `de_DE`. A territory without its own entry falls back
    /// to the language entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decalc::LocaleSeparators;
    ///
    /// let swiss = LocaleSeparators::for_locale("de_CH.UTF-8").unwrap_or_else(|| panic!("known"));
    /// assert_eq!(swiss.decimal, '.');
    /// assert_eq!(LocaleSeparators::for_locale("de-DE").map(|l| l.decimal), Some(','));
    /// assert_eq!(LocaleSeparators::for_locale("xx_YY"), None);
    /// ```
    #[must_use]
    pub fn for_locale(name: &str) -> Option<Self> {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if let Some(found) = LOCALES.get(base) {
            return Some(*found);
        }
        let mut parts = base.split(['_', '-']);
        let language = parts.next()?.to_ascii_lowercase();
        if let Some(territory) = parts.next() {
            let key = format!("{language}_{}", territory.to_ascii_uppercase());
            if let Some(found) = LOCALES.get(key.as_str()) {
                return Some(*found);
            }
        }
        LOCALES.get(language.as_str()).copied()
    }

    /// Resolve the numeric locale from the process environment.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Resolve the numeric locale through `lookup`.
    ///
    /// The first non-empty value of `LC_ALL`, `LC_NUMERIC` and `LANG` wins,
    /// matching how the C library picks `LC_NUMERIC`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let name = LOCALE_VARS
            .iter()
            .find_map(|key| lookup(*key).filter(|value| !value.is_empty()))?;
        let found = Self::for_locale(&name);
        if found.is_none() {
            log::debug!("unknown numeric locale {name:?}, using default separators");
        }
        found
    }
}

fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
