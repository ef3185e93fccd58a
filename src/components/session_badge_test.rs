use super::*;

#[test]
fn mask_token_hides_short_tokens_entirely() {
    assert_eq!(mask_token("abc"), "••••");
    assert_eq!(mask_token("abcd"), "••••");
}

#[test]
fn mask_token_shows_only_the_last_four_characters() {
    assert_eq!(mask_token("abc123"), "••••c123");
}

#[test]
fn mask_token_counts_characters_not_bytes() {
    assert_eq!(mask_token("ключ-доступа"), "••••тупа");
}
