use std::borrow::Cow;
use std::cmp::Ordering;

use icu_normalizer::properties::CanonicalCombiningClassMapBorrowed;
use icu_normalizer::DecomposingNormalizerBorrowed;

/// Human ordering for organization and neighborhood names.
///
/// Three levels, as in root collation: base letters (case-insensitive, with
/// whitespace and punctuation before digits before letters), then accents,
/// then case with lowercase first. Remaining ties fall back to code point
/// order so the result is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (a_nfd, b_nfd) = (decompose(a), decompose(b));
    let (a_base, b_base) = (base_letters(&a_nfd), base_letters(&b_nfd));

    a_base
        .iter()
        .map(|c| primary_key(*c))
        .cmp(b_base.iter().map(|c| primary_key(*c)))
        .then_with(|| accent_keys(&a_nfd).cmp(&accent_keys(&b_nfd)))
        .then_with(|| {
            a_base
                .iter()
                .map(|c| case_key(*c))
                .cmp(b_base.iter().map(|c| case_key(*c)))
        })
        .then_with(|| a.cmp(b))
}

fn decompose(s: &str) -> Cow<'_, str> {
    DecomposingNormalizerBorrowed::new_nfd().normalize(s)
}

fn is_mark(c: char) -> bool {
    CanonicalCombiningClassMapBorrowed::new().get_u8(c) != 0
}

fn base_letters(nfd: &str) -> Vec<char> {
    nfd.chars().filter(|c| !is_mark(*c)).collect()
}

/// Base letters weigh 0 so only the marks and their positions differ.
fn accent_keys(nfd: &str) -> Vec<u32> {
    nfd.chars()
        .map(|c| if is_mark(c) { u32::from(c) } else { 0 })
        .collect()
}

fn primary_key(c: char) -> (u8, char) {
    let rank = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (rank, c.to_lowercase().next().unwrap_or(c))
}

fn case_key(c: char) -> u8 {
    u8::from(c.is_uppercase())
}
