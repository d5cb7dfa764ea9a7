// Host-side tests for variant selection from the page URL.

use dont_let_go::config::{resolve_variant, variant_from_query};
use dont_let_go::core::SabotageVariant;

#[test]
fn variant_from_query_reads_the_parameter() {
    assert_eq!(
        variant_from_query("?variant=interstitial"),
        Ok(Some(SabotageVariant::Interstitial))
    );
    assert_eq!(
        variant_from_query("?debug=1&variant=psychedelic"),
        Ok(Some(SabotageVariant::Psychedelic))
    );
    assert_eq!(
        variant_from_query("variant=b"),
        Ok(Some(SabotageVariant::Interstitial))
    );
}

#[test]
fn variant_from_query_absent_or_empty() {
    assert_eq!(variant_from_query(""), Ok(None));
    assert_eq!(variant_from_query("?"), Ok(None));
    assert_eq!(variant_from_query("?variant="), Ok(None));
    assert_eq!(variant_from_query("?other=interstitial"), Ok(None));
}

#[test]
fn variant_from_query_rejects_unknown_names() {
    let err = variant_from_query("?variant=rainbow").unwrap_err();
    assert_eq!(err.0, "rainbow");
}

#[test]
fn resolve_variant_falls_back_to_default() {
    assert_eq!(resolve_variant("?variant=rainbow"), SabotageVariant::Psychedelic);
    assert_eq!(resolve_variant(""), SabotageVariant::Psychedelic);
    assert_eq!(
        resolve_variant("?variant=interstitial"),
        SabotageVariant::Interstitial
    );
}
