use super::*;

#[test]
fn flags() {
    let cmd = WarpCommand::UP | WarpCommand::LEFT;
    assert!(cmd.contains(WarpCommand::UP));
    assert!(cmd.contains(WarpCommand::LEFT));
    assert!(!cmd.contains(WarpCommand::DOWN));
    assert!(!cmd.is_end());
    assert!(!cmd.is_zoom());
    assert_eq!(cmd.bits(), 0b1010);

    let mut cmd = WarpCommand::DOWN;
    cmd |= WarpCommand::UP;
    assert!(cmd.is_zoom());

    assert!(WarpCommand::END.is_end());
    assert!((WarpCommand::END | WarpCommand::RIGHT).is_end());
    assert!(WarpCommand::NONE.contains(WarpCommand::NONE));
}

#[test]
fn from_raw_bits() {
    assert_eq!(WarpCommand::from(0x06), WarpCommand::UP | WarpCommand::DOWN);
    assert_eq!(WarpCommand::from_bits(0xe1), WarpCommand::END);
    assert_eq!(WarpCommand::from(0), WarpCommand::NONE);
}
