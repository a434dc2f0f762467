/// Environment variables consulted for the host locale, highest precedence first.
const HOST_LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LocaleError {
    #[error("Malformed locale tag {0:?}")]
    Malformed(String),
    #[error("Unsupported locale {0}")]
    Unsupported(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$2.50`
    Prefix,
    /// `R$ 2,50`
    PrefixSpaced,
    /// `2,50 €`
    SuffixSpaced,
}

/// Locale conventions for rendering an amount of money.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrencyFormat {
    pub locale: &'static str,
    pub symbol: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub fraction_digits: u32,
    pub placement: SymbolPlacement,
}

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

impl CurrencyFormat {
    pub const EN_US: Self = Self::new("en-US", "$", '.', ',', 2, SymbolPlacement::Prefix);
    pub const EN_GB: Self = Self::new("en-GB", "£", '.', ',', 2, SymbolPlacement::Prefix);
    pub const EN_CA: Self = Self::new("en-CA", "$", '.', ',', 2, SymbolPlacement::Prefix);
    pub const DE_DE: Self = Self::new("de-DE", "€", ',', '.', 2, SymbolPlacement::SuffixSpaced);
    pub const FR_FR: Self =
        Self::new("fr-FR", "€", ',', NARROW_NBSP, 2, SymbolPlacement::SuffixSpaced);
    pub const IT_IT: Self = Self::new("it-IT", "€", ',', '.', 2, SymbolPlacement::SuffixSpaced);
    pub const PT_BR: Self = Self::new("pt-BR", "R$", ',', '.', 2, SymbolPlacement::PrefixSpaced);
    pub const JA_JP: Self = Self::new("ja-JP", "￥", '.', ',', 0, SymbolPlacement::Prefix);

    // Language-only tags resolve to the first entry with a matching language.
    const SUPPORTED: [Self; 8] = [
        Self::EN_US,
        Self::EN_GB,
        Self::EN_CA,
        Self::DE_DE,
        Self::FR_FR,
        Self::IT_IT,
        Self::PT_BR,
        Self::JA_JP,
    ];

    const fn new(
        locale: &'static str,
        symbol: &'static str,
        decimal_separator: char,
        grouping_separator: char,
        fraction_digits: u32,
        placement: SymbolPlacement,
    ) -> Self {
        Self {
            locale,
            symbol,
            decimal_separator,
            grouping_separator,
            fraction_digits,
            placement,
        }
    }

    /// Looks up the format for a BCP 47 tag or a POSIX locale name such as `de_DE.UTF-8`.
    pub fn for_locale(tag: &str) -> Result<Self, LocaleError> {
        let (language, region) = parse_locale_tag(tag)?;

        Self::SUPPORTED
            .into_iter()
            .find(|format| {
                let (supported_language, supported_region) = format
                    .locale
                    .split_once('-')
                    .unwrap_or((format.locale, ""));
                supported_language == language
                    && region.as_deref().is_none_or(|region| region == supported_region)
            })
            .ok_or_else(|| LocaleError::Unsupported(tag.to_owned()))
    }

    /// The currency format of the host environment, falling back to en-US.
    pub fn host() -> Self {
        Self::from_locale_variables(|name| std::env::var(name).ok())
    }

    fn from_locale_variables(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some((variable, tag)) = HOST_LOCALE_VARIABLES.into_iter().find_map(|variable| {
            lookup(variable)
                .filter(|value| !value.is_empty())
                .map(|value| (variable, value))
        }) else {
            tracing::debug!("No host locale set, using en-US");
            return Self::EN_US;
        };

        match Self::for_locale(&tag) {
            Ok(format) => {
                tracing::debug!(%variable, locale = format.locale, "Using host locale");
                format
            }
            Err(error) => {
                tracing::warn!(
                    %variable,
                    %error,
                    "Host locale not supported, falling back to en-US"
                );
                Self::EN_US
            }
        }
    }

    /// Renders `value`, rounding half-to-even at the locale's minor unit.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            let text = if value.is_nan() { "NaN" } else { "∞" };
            return self.place_symbol(text, value == f64::NEG_INFINITY);
        }

        // Rounds the exact binary value half-to-even: 0.6749999999999999 renders as 0.67.
        let digits = format!("{:.*}", self.fraction_digits as usize, value.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((&digits, ""));
        let rounds_to_zero = digits.chars().all(|c| c == '0' || c == '.');

        let mut number = group_thousands(whole, self.grouping_separator);
        if !fraction.is_empty() {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        self.place_symbol(&number, value < 0.0 && !rounds_to_zero)
    }

    fn place_symbol(&self, number: &str, negative: bool) -> String {
        let sign = if negative { "-" } else { "" };
        match self.placement {
            SymbolPlacement::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPlacement::PrefixSpaced => format!("{sign}{}{NBSP}{number}", self.symbol),
            SymbolPlacement::SuffixSpaced => format!("{sign}{number}{NBSP}{}", self.symbol),
        }
    }
}

fn group_thousands(whole: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 * separator.len_utf8());
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Splits a locale tag into a lowercase language and an optional uppercase region.
fn parse_locale_tag(tag: &str) -> Result<(String, Option<String>), LocaleError> {
    let malformed = || LocaleError::Malformed(tag.to_owned());

    // Drop POSIX codeset and modifier, e.g. `de_DE.UTF-8@euro`.
    let base = tag.split(['.', '@']).next().unwrap_or_default().trim();
    if base == "C" || base == "POSIX" {
        return Ok(("en".to_owned(), Some("US".to_owned())));
    }

    let mut subtags = base.split(['-', '_']);
    let language = subtags
        .next()
        .filter(|language| {
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic())
        })
        .ok_or_else(malformed)?
        .to_ascii_lowercase();

    let mut region = None;
    for subtag in subtags {
        let is_script = subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic());
        let is_region = (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
            || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()));

        if is_region && region.is_none() {
            region = Some(subtag.to_ascii_uppercase());
        } else if !is_script {
            return Err(malformed());
        }
    }

    Ok((language, region))
}
