#[test]
fn test_first_substitution() {
    let res = rematch::substitute_first("SPeling is hard speling", "speling", "Spelling", "i");

    assert_eq!(res.unwrap(), "Spelling is hard speling");
}

#[test]
fn test_global_substitution() {
    let res = rematch::substitute_all("1337 1337 1337!!!", "3+", "4", "");

    assert_eq!(res.unwrap(), "147 147 147!!!");
}

#[test]
fn test_no_match_substitution_is_identity() {
    let subject = "the quick brown fox";
    assert!(rematch::match_first(subject, "duck", "").unwrap().is_none());

    assert_eq!(
        rematch::substitute_first(subject, "duck", "goose", "").unwrap(),
        subject
    );
    assert_eq!(
        rematch::substitute_all(subject, "duck", "goose", "").unwrap(),
        subject
    );
}

#[test]
fn test_global_substitution_round_trip() {
    let once = rematch::substitute_all("1337 1337 1337!!!", "3+", "4", "").unwrap();
    assert_eq!(once, "147 147 147!!!");

    // The replacement text cannot match the pattern again, so a second
    // application is a no-op.
    let twice = rematch::substitute_all(&once, "3+", "4", "").unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_template_backreferences() {
    let res = rematch::substitute_first("john smith", r"(\w+) (\w+)", "$2 $1", "");
    assert_eq!(res.unwrap(), "smith john");

    let res = rematch::substitute_all("a1 b2", r"([a-z])(\d)", "$2$1", "");
    assert_eq!(res.unwrap(), "1a 2b");
}

#[test]
fn test_substitution_with_flags() {
    let res = rematch::substitute_all("duck\nDuck\nDUCK", "^duck$", "goose", "ia");

    assert_eq!(res.unwrap(), "goose\ngoose\ngoose");
}
