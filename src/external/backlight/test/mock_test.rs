use crate::external::backlight::{mock, BacklightController, BacklightRange};

#[test]
fn test_backlight_setting() {
    let controller = mock::MockBacklightController::new(100, Some(BacklightRange::new(0, 937)));
    assert_eq!(controller.get().unwrap(), 100);
    controller.set(45).unwrap();
    assert_eq!(controller.get().unwrap(), 45);
    assert_eq!(controller.min(), 0);
    assert_eq!(controller.max(), 937);
}

#[test]
fn test_shared_state() {
    let writing_controller = mock::MockBacklightController::new(1, None);
    let reading_controller = writing_controller.clone();
    writing_controller.set(12).unwrap();
    assert_eq!(reading_controller.get().unwrap(), 12);
    writing_controller.set_range(Some(BacklightRange::new(1, 2)));
    assert_eq!(reading_controller.range(), Some(BacklightRange::new(1, 2)));
}

#[test]
fn test_missing_range() {
    let controller = mock::MockBacklightController::new(3, None);
    assert_eq!(controller.range(), None);
    assert_eq!(controller.min(), 0);
    assert_eq!(controller.max(), 0);
}

#[test]
fn test_errors() {
    let controller = mock::MockBacklightController::new(100, None);
    controller.set_failure_mode(true);
    assert!(controller.get().is_err());
    assert!(controller.set(42).is_err());
    controller.set_failure_mode(false);
    assert_eq!(controller.get().unwrap(), 100);
}
