use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Color::from_hex("#ff4d6d").unwrap(), Color::rgb(255, 77, 109));
    assert_eq!(Color::from_hex("3A86FF").unwrap(), Color::rgb(58, 134, 255));
    assert_eq!(
        Color::from_hex("#ffffff80").unwrap(),
        Color::rgba(255, 255, 255, 128)
    );
}

#[test]
fn hex_rejects_bad_input() {
    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
    assert!(Color::from_hex("#ééé").is_err());
}

#[test]
fn serde_accepts_hex_and_arrays() {
    let cs: Vec<Color> = serde_json::from_str(r##"["#8338ec", [1, 2, 3], [1, 2, 3, 4]]"##).unwrap();
    assert_eq!(cs[0], Color::rgb(0x83, 0x38, 0xec));
    assert_eq!(cs[1], Color::rgb(1, 2, 3));
    assert_eq!(cs[2], Color::rgba(1, 2, 3, 4));

    let s = serde_json::to_string(&Color::rgb(255, 183, 3)).unwrap();
    assert_eq!(s, "\"#ffb703\"");
}

#[test]
fn premul_scales_by_opacity() {
    let p = Color::WHITE.premul(0.5);
    assert_eq!(p.a, 128);
    assert_eq!(p.r, 128);
    assert_eq!(Color::WHITE.premul(-1.0).a, 0);
}
