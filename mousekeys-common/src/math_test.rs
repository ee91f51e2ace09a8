use super::*;

#[test]
fn acceleration_curve() {
    assert_eq!(acceleration(0), 1);
    assert_eq!(acceleration(15), 1);
    assert_eq!(acceleration(16), 4);
    assert_eq!(acceleration(32), 13);
    assert_eq!(acceleration(64), 41);
    assert_eq!(acceleration(128), 129);
    assert_eq!(acceleration(200), 227);
    assert_eq!(acceleration(240), 255);
    assert_eq!(acceleration(255), 255);
}

#[test]
fn acceleration_only_dips_by_truncation() {
    let mut prev = acceleration(0);
    for i in 1..=255u8 {
        let a = acceleration(i);
        assert!(a >= 1);
        assert!(a as u16 + 2 >= prev as u16, "curve fell from {prev} to {a} at {i}");
        prev = a;
    }

    assert!(acceleration(51) > acceleration(52));
    assert!(acceleration(52) < acceleration(54));
}

#[test]
fn diagonalize_scales() {
    assert_eq!(diagonalize(127), 89);
    assert_eq!(diagonalize(-127), -89);
    assert_eq!(diagonalize(255), 180);
    assert_eq!(diagonalize(16), 11);
    assert_eq!(diagonalize(0), 0);
}

#[test]
fn diagonalize_never_loses_motion() {
    for x in i8::MIN..=i8::MAX {
        if x == 0 {
            continue;
        }
        let d = diagonalize(x as i16);
        assert_ne!(d, 0, "{x}");
        assert_eq!(d.signum(), (x as i16).signum(), "{x}");
        assert!(d.abs() <= (x as i16).abs());
    }

    assert_eq!(diagonalize(1), 1);
    assert_eq!(diagonalize(-1), -1);
    assert_eq!(diagonalize(2), 1);
}
