use crate::script::{Script, ScriptEntry};

use phf::{Map, phf_map};

pub const ARA: Script = Script {
    code: "ARA",
    name: "Arabic",
};
pub const ENG: Script = Script {
    code: "ENG",
    name: "English",
};
pub const FRA: Script = Script {
    code: "FRA",
    name: "French",
};

/// Hamza-bearing alef variants → bare alef (U+0627).
static ARABIC_ALEF_FOLDS: Map<char, char> = phf_map! {
    '\u{0623}' => '\u{0627}', // ALEF WITH HAMZA ABOVE
    '\u{0625}' => '\u{0627}', // ALEF WITH HAMZA BELOW
    '\u{0622}' => '\u{0627}', // ALEF WITH MADDA ABOVE
};

static FRENCH_GENDER_MARKERS: &[&str] = &["(m.)", "(f.)", "[m.]", "[f.]"];

pub static SCRIPT_TABLE: Map<&'static str, ScriptEntry> = phf_map! {
    "ARA" => ScriptEntry {
        block: Some(('\u{0600}', '\u{06FF}')),
        // fathatan .. sukun: tanwin, short vowels, shadda
        diacritics: Some(('\u{064B}', '\u{0652}')),
        elongation: Some('\u{0640}'),
        definite_article: Some("\u{0627}\u{0644}"),
        letter_folds: Some(&ARABIC_ALEF_FOLDS),
        gender_markers: &[],
    },
    "ENG" => ScriptEntry::NEUTRAL,
    "FRA" => ScriptEntry {
        gender_markers: FRENCH_GENDER_MARKERS,
        ..ScriptEntry::NEUTRAL
    },
};

static ALL_SCRIPTS: &[Script] = &[ARA, ENG, FRA];

#[inline]
pub fn all_scripts() -> &'static [Script] {
    ALL_SCRIPTS
}
