//! Static phoneme sample catalog and request selection.
//!
//! The table is generated from the project's phoneme list: one entry per
//! sample word, carrying the IPA symbol, the SSML markup sent to the
//! synthesis service, and a human-readable gloss. It is fixed at build time
//! and never mutated.

use thiserror::Error;

/// One catalog entry: a sample word and how to pronounce its phoneme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemeSample {
    /// Unique key, also the output file stem (`<word>.wav`).
    pub word: &'static str,
    /// IPA symbol the sample illustrates.
    pub ipa: &'static str,
    /// SSML markup instructing the service how to pronounce the symbol.
    pub ssml: &'static str,
    /// Human-readable gloss, e.g. `"as in 'popular'"`.
    pub description: &'static str,
}

/// All phoneme samples, in generation order.
#[rustfmt::skip]
pub static PHONEME_SAMPLES: &[PhonemeSample] = &[
    PhonemeSample { word: "popular", ipa: "p", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='p'>p</phoneme></prosody></speak>", description: "as in 'popular'" },
    PhonemeSample { word: "bubble", ipa: "b", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='b'>b</phoneme></prosody></speak>", description: "as in 'bubble'" },
    PhonemeSample { word: "tinker", ipa: "t", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='t'>t</phoneme></prosody></speak>", description: "as in 'tinker'" },
    PhonemeSample { word: "Dundee", ipa: "d", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='d'>d</phoneme></prosody></speak>", description: "as in 'Dundee'" },
    PhonemeSample { word: "crown", ipa: "k", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='k'>k</phoneme></prosody></speak>", description: "as in 'crown'" },
    PhonemeSample { word: "gravely", ipa: "ɡ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɡ'>ɡ</phoneme></prosody></speak>", description: "as in 'gravely'" },
    PhonemeSample { word: "mapping", ipa: "m", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='m'>m</phoneme></prosody></speak>", description: "as in 'mapping'" },
    PhonemeSample { word: "nine", ipa: "n", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='n'>n</phoneme></prosody></speak>", description: "as in 'nine'" },
    PhonemeSample { word: "bank", ipa: "ŋ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ŋ'>ŋ</phoneme></prosody></speak>", description: "as in 'bank'" },
    PhonemeSample { word: "frog", ipa: "f", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='f'>f</phoneme></prosody></speak>", description: "as in 'frog'" },
    PhonemeSample { word: "valve", ipa: "v", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='v'>v</phoneme></prosody></speak>", description: "as in 'valve'" },
    PhonemeSample { word: "massage", ipa: "s", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='s'>s</phoneme></prosody></speak>", description: "as in 'massage'" },
    PhonemeSample { word: "zoom", ipa: "z", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='z'>z</phoneme></prosody></speak>", description: "as in 'zoom'" },
    PhonemeSample { word: "thigh", ipa: "θ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='θ'>θ</phoneme></prosody></speak>", description: "as in 'thigh'" },
    PhonemeSample { word: "mother", ipa: "ð", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ð'>ð</phoneme></prosody></speak>", description: "as in 'mother'" },
    PhonemeSample { word: "shopping", ipa: "ʃ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʃ'>ʃ</phoneme></prosody></speak>", description: "as in 'shopping'" },
    PhonemeSample { word: "leisure", ipa: "ʒ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʒ'>ʒ</phoneme></prosody></speak>", description: "as in 'leisure'" },
    PhonemeSample { word: "mahogany", ipa: "h", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='h'>h</phoneme></prosody></speak>", description: "as in 'mahogany'" },
    PhonemeSample { word: "lately", ipa: "l", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='l'>l</phoneme></prosody></speak>", description: "as in 'lately'" },
    PhonemeSample { word: "roaring", ipa: "ɹ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɹ'>ɹ</phoneme></prosody></speak>", description: "as in 'roaring'" },
    PhonemeSample { word: "changed", ipa: "ʧ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʧ'>ʧ</phoneme></prosody></speak>", description: "as in 'changed'" },
    PhonemeSample { word: "magenta", ipa: "ʤ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʤ'>ʤ</phoneme></prosody></speak>", description: "as in 'magenta'" },
    PhonemeSample { word: "younger", ipa: "j", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='j'>j</phoneme></prosody></speak>", description: "as in 'younger'" },
    PhonemeSample { word: "whirlwind", ipa: "w", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='w'>w</phoneme></prosody></speak>", description: "as in 'whirlwind'" },
    PhonemeSample { word: "cat", ipa: "æ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='æ'>æ</phoneme></prosody></speak>", description: "as in 'cat'" },
    PhonemeSample { word: "car", ipa: "ɑː", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɑː'>ɑː</phoneme></prosody></speak>", description: "as in 'car'" },
    PhonemeSample { word: "again", ipa: "ə", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ə'>ə</phoneme></prosody></speak>", description: "as in 'again'" },
    PhonemeSample { word: "bed", ipa: "ɛ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɛ'>ɛ</phoneme></prosody></speak>", description: "as in 'bed'" },
    PhonemeSample { word: "kit", ipa: "ɪ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɪ'>ɪ</phoneme></prosody></speak>", description: "as in 'kit'" },
    PhonemeSample { word: "unique", ipa: "iː", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='iː'>iː</phoneme></prosody></speak>", description: "as in 'unique'" },
    PhonemeSample { word: "yacht", ipa: "ɒ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɒ'>ɒ</phoneme></prosody></speak>", description: "as in 'yacht'" },
    PhonemeSample { word: "caught", ipa: "ɔː", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɔː'>ɔː</phoneme></prosody></speak>", description: "as in 'caught'" },
    PhonemeSample { word: "could", ipa: "ʊ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʊ'>ʊ</phoneme></prosody></speak>", description: "as in 'could'" },
    PhonemeSample { word: "school", ipa: "uː", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='uː'>uː</phoneme></prosody></speak>", description: "as in 'school'" },
    PhonemeSample { word: "pulse", ipa: "ʌ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʌ'>ʌ</phoneme></prosody></speak>", description: "as in 'pulse'" },
    PhonemeSample { word: "nurse", ipa: "ɜː", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɜː'>ɜː</phoneme></prosody></speak>", description: "as in 'nurse'" },
    PhonemeSample { word: "price", ipa: "aɪ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='aɪ'>aɪ</phoneme></prosody></speak>", description: "as in 'price'" },
    PhonemeSample { word: "flower", ipa: "aʊ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='aʊ'>aʊ</phoneme></prosody></speak>", description: "as in 'flower'" },
    PhonemeSample { word: "shade", ipa: "eɪ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='eɪ'>eɪ</phoneme></prosody></speak>", description: "as in 'shade'" },
    PhonemeSample { word: "square", ipa: "eə", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='eə'>eə</phoneme></prosody></speak>", description: "as in 'square'" },
    PhonemeSample { word: "near", ipa: "iə", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='iə'>iə</phoneme></prosody></speak>", description: "as in 'near'" },
    PhonemeSample { word: "choice", ipa: "ɔɪ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ɔɪ'>ɔɪ</phoneme></prosody></speak>", description: "as in 'choice'" },
    PhonemeSample { word: "boat", ipa: "əʊ", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='əʊ'>əʊ</phoneme></prosody></speak>", description: "as in 'boat'" },
    PhonemeSample { word: "cure", ipa: "ʊə", ssml: "<speak><prosody rate='medium' pitch='+2st'><phoneme alphabet='ipa' ph='ʊə'>ʊə</phoneme></prosody></speak>", description: "as in 'cure'" },
];

/// Requested words that are not in the catalog, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported words requested: {}", .0.join(", "))]
pub struct UnknownWords(pub Vec<String>);

/// Look up a sample by word.
pub fn find(word: &str) -> Option<&'static PhonemeSample> {
    PHONEME_SAMPLES.iter().find(|sample| sample.word == word)
}

/// Resolve the requested words into the sequence of samples to process.
///
/// An empty request selects the whole catalog in table order; otherwise the
/// caller's order is preserved. All unknown words are collected and reported
/// together, before any network activity happens.
pub fn resolve(words: &[String]) -> Result<Vec<&'static PhonemeSample>, UnknownWords> {
    if words.is_empty() {
        return Ok(PHONEME_SAMPLES.iter().collect());
    }

    let mut selected = Vec::with_capacity(words.len());
    let mut unknown = Vec::new();
    for word in words {
        match find(word) {
            Some(sample) => selected.push(sample),
            None => unknown.push(word.clone()),
        }
    }

    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(UnknownWords(unknown));
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::{find, resolve, UnknownWords, PHONEME_SAMPLES};
    use std::collections::HashSet;

    #[test]
    fn words_are_unique() {
        let words: HashSet<&str> = PHONEME_SAMPLES.iter().map(|s| s.word).collect();
        assert_eq!(words.len(), PHONEME_SAMPLES.len());
    }

    #[test]
    fn every_entry_embeds_its_ipa_symbol_in_the_markup() {
        for sample in PHONEME_SAMPLES {
            assert!(
                sample.ssml.contains(&format!("ph='{}'", sample.ipa)),
                "{}: markup does not carry its IPA symbol",
                sample.word
            );
            assert!(sample.ssml.starts_with("<speak>"));
            assert!(sample.ssml.ends_with("</speak>"));
        }
    }

    #[test]
    fn find_returns_the_matching_entry() {
        let sample = find("bubble").unwrap();
        assert_eq!(sample.ipa, "b");
        assert_eq!(sample.description, "as in 'bubble'");
        assert!(find("bobble").is_none());
    }

    #[test]
    fn empty_request_selects_full_catalog_in_order() {
        let selected = resolve(&[]).unwrap();
        assert_eq!(selected.len(), PHONEME_SAMPLES.len());
        assert_eq!(selected[0].word, "popular");
        assert_eq!(selected.last().unwrap().word, "cure");
    }

    #[test]
    fn explicit_request_preserves_caller_order() {
        let words = vec!["cure".to_string(), "popular".to_string()];
        let selected = resolve(&words).unwrap();
        let order: Vec<&str> = selected.iter().map(|s| s.word).collect();
        assert_eq!(order, ["cure", "popular"]);
    }

    #[test]
    fn unknown_words_are_all_reported_sorted() {
        let words = vec![
            "zebra".to_string(),
            "popular".to_string(),
            "aardvark".to_string(),
        ];
        let err = resolve(&words).unwrap_err();
        assert_eq!(
            err,
            UnknownWords(vec!["aardvark".to_string(), "zebra".to_string()])
        );
        assert_eq!(
            err.to_string(),
            "Unsupported words requested: aardvark, zebra"
        );
    }
}
