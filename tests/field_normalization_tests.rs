// Table tests for duration field input handling
use online_timer::models::timer::TimeField;
use test_case::test_case;

#[test_case("abc5d", "5" ; "strips non digits")]
#[test_case("", "0" ; "empty reads zero")]
#[test_case("150", "15" ; "keeps two characters")]
#[test_case("07", "07" ; "keeps leading zero")]
#[test_case("1a2b3", "12" ; "mixed input")]
fn test_sanitize_input(raw: &str, expected: &str) {
    assert_eq!(TimeField::sanitize_input(raw), expected);
}

#[test_case(TimeField::Seconds, "abc5d", 5 ; "seconds strips letters")]
#[test_case(TimeField::Minutes, "", 0 ; "minutes empty is zero")]
#[test_case(TimeField::Minutes, "150", 59 ; "minutes clamp")]
#[test_case(TimeField::Seconds, "60", 59 ; "seconds clamp")]
#[test_case(TimeField::Hours, "150", 99 ; "hours clamp")]
#[test_case(TimeField::Hours, "99", 99 ; "hours max")]
#[test_case(TimeField::Hours, "--", 0 ; "non numeric is zero")]
fn test_normalize(field: TimeField, raw: &str, expected: u32) {
    assert_eq!(field.normalize(raw), expected);
}
