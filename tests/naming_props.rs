// tests/naming_props.rs
use proptest::prelude::*;

use m365_catalog::naming::{ segment, to_friendly_name, WordDictionary };

proptest! {
    #[test]
    fn segments_concatenate_to_input(ident in "[a-z0-9_]{0,40}") {
        let dict = WordDictionary::builtin();
        prop_assert_eq!(segment(&dict, &ident).concat(), ident);
    }

    #[test]
    fn no_match_means_one_token_per_char(ident in "[qxz]{0,24}") {
        let dict = WordDictionary::new(["abc", "def"]);
        let tokens = segment(&dict, &ident);
        prop_assert_eq!(tokens.len(), ident.chars().count());
        prop_assert!(tokens.iter().all(|t| t.chars().count() == 1));
    }

    #[test]
    fn lowercase_names_resegment_stably(
        words in proptest::collection::vec(
            prop::sample::select(vec![
                "device", "compliance", "policy", "mailbox", "configuration",
                "conditional", "access", "administrative", "unit", "retention",
            ]),
            1..5,
        )
    ) {
        let dict = WordDictionary::builtin();
        let ident: String = words.concat();
        let first = segment(&dict, &ident);

        let friendly = to_friendly_name(&dict, &ident);
        let again = segment(&dict, &friendly.replace(' ', "").to_lowercase());
        prop_assert_eq!(first, again);
    }

    #[test]
    fn protected_ad_never_splits(
        head in "[a-z]{1,8}",
        tail in "[A-Z][a-z]{1,8}",
    ) {
        let dict = WordDictionary::builtin();
        let name = format!("{head}AD{tail}");
        let friendly = to_friendly_name(&dict, &name);
        prop_assert!(friendly.contains(" AD "), "{}", friendly);
        prop_assert!(!friendly.contains("A D"), "{}", friendly);
    }
}
