use crate::spectral::SpectralClass;

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(SpectralClass::parse("g"), Some(SpectralClass::G));
    assert_eq!(SpectralClass::parse("M4V"), Some(SpectralClass::M));
    assert_eq!(SpectralClass::parse("  b "), Some(SpectralClass::B));
}

#[test]
fn test_unrecognised_resolves_to_g() {
    assert_eq!(SpectralClass::resolve("X"), SpectralClass::G);
    assert_eq!(SpectralClass::resolve(""), SpectralClass::G);
    assert_eq!(SpectralClass::resolve("white dwarf"), SpectralClass::G);
}

#[test]
fn test_codes_follow_temperature_sequence() {
    let codes: Vec<u8> = SpectralClass::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes, vec![7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_code_round_trip_and_out_of_range() {
    assert_eq!(SpectralClass::from_code(2), Some(SpectralClass::K));
    assert_eq!(SpectralClass::from_code(0), None);
    assert_eq!(SpectralClass::from_code(8), None);
}

#[test]
fn test_display() {
    assert_eq!(SpectralClass::F.to_string(), "F");
}
