#[cfg(test)]
mod unit_tests {

    use crate::context::Context;
    use crate::profile::{Profile, preset};
    use crate::{
        ARA, ENG, FRA, NormalizeWhitespace, StripDiacritics, StripGenderMarkers, normalize,
        normalize_arabic, normalize_english, normalize_french,
    };
    use std::borrow::Cow;

    #[test]
    fn zero_copy_clean_english() {
        let input = "personal computer";
        let ctx = Context::new(ENG);
        let result = preset::english_gloss().run(Cow::Borrowed(input), &ctx);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn zero_copy_clean_arabic() {
        let input = "حاسوب شخصي";
        let ctx = Context::new(ARA);
        let result = preset::arabic_headword().run(Cow::Borrowed(input), &ctx);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn zero_copy_clean_french() {
        let input = "ordinateur personnel";
        let ctx = Context::new(FRA);
        let result = preset::french_gloss().run(Cow::Borrowed(input), &ctx);
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn diacritics_and_spacing() {
        assert_eq!(normalize_arabic("  كِتَابٌ   جَمِيلٌ "), "كتاب جميل");
    }

    #[test]
    fn alef_variants_fold() {
        assert_eq!(normalize_arabic("أحمد"), "احمد");
        assert_eq!(normalize_arabic("إسلام"), "اسلام");
        assert_eq!(normalize_arabic("آمن"), "امن");
    }

    #[test]
    fn article_on_every_word() {
        assert_eq!(normalize_arabic("الحاسوب الشخصي"), "حاسوب شخصي");
    }

    #[test]
    fn elongation_removed() {
        assert_eq!(normalize_arabic("كـــتاب"), "كتاب");
    }

    #[test]
    fn parenthetical_and_latin_removed() {
        assert_eq!(normalize_arabic("حاسوب (كمبيوتر) PC"), "حاسوب");
    }

    #[test]
    fn english_case_preserved() {
        assert_eq!(normalize_english("  Central   Processing Unit "), "Central Processing Unit");
    }

    #[test]
    fn french_markers_every_form() {
        assert_eq!(normalize_french("chat (m.)"), "chat");
        assert_eq!(normalize_french("table [f.]"), "table");
        assert_eq!(normalize_french("(f.) souris (f.)"), "souris");
        assert_eq!(normalize_french("chat (M.)"), "chat (M.)");
    }

    #[test]
    fn dispatch_by_script() {
        assert_eq!(normalize(ARA, "الكتاب"), "كتاب");
        assert_eq!(normalize(ENG, " a  b "), "a b");
        assert_eq!(normalize(FRA, "chat (m.)"), "chat");
    }

    #[test]
    fn custom_profile_composes() {
        let profile = Profile::builder("custom")
            .add_stage(StripGenderMarkers)
            .add_stage(StripDiacritics)
            .add_stage(NormalizeWhitespace)
            .build();
        assert_eq!(profile.name(), "custom");

        // Gender markers are only declared for French.
        let fra = profile.run(Cow::Borrowed(" chat (m.) "), &Context::new(FRA));
        assert_eq!(fra, "chat");
        let eng = profile.run(Cow::Borrowed(" chat (m.) "), &Context::new(ENG));
        assert_eq!(eng, "chat (m.)");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(normalize_arabic(""), "");
        assert_eq!(normalize_english(""), "");
        assert_eq!(normalize_french(""), "");
    }
}
