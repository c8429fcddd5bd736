use crate::common::{ENV_LOCK, remove_env, set_env};
use jquants_client::utils::config::{get_env_non_blank, get_env_or_default, get_env_or_none};

#[test]
fn get_env_or_default_parses_or_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env("JQUANTS_TEST_U64", " 42 ");
    set_env("JQUANTS_TEST_BAD_U64", "forty-two");

    assert_eq!(get_env_or_default("JQUANTS_TEST_U64", 7u64), 42);
    assert_eq!(get_env_or_default("JQUANTS_TEST_BAD_U64", 7u64), 7);
    assert_eq!(get_env_or_default("JQUANTS_TEST_MISSING", 7u64), 7);

    remove_env("JQUANTS_TEST_U64");
    remove_env("JQUANTS_TEST_BAD_U64");
}

#[test]
fn get_env_or_none_skips_invalid_and_blank() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env("JQUANTS_TEST_OPT", "3");
    set_env("JQUANTS_TEST_OPT_BLANK", "   ");

    assert_eq!(get_env_or_none::<u8>("JQUANTS_TEST_OPT"), Some(3));
    assert_eq!(get_env_or_none::<u8>("JQUANTS_TEST_OPT_BLANK"), None);
    assert_eq!(get_env_or_none::<u8>("JQUANTS_TEST_OPT_MISSING"), None);
    assert_eq!(get_env_non_blank("JQUANTS_TEST_OPT_BLANK"), None);
    assert_eq!(get_env_non_blank("JQUANTS_TEST_OPT").as_deref(), Some("3"));

    remove_env("JQUANTS_TEST_OPT");
    remove_env("JQUANTS_TEST_OPT_BLANK");
}
