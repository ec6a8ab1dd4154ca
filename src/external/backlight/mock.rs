use std::{
    cell::Cell,
    sync::{Arc, Mutex},
};

use super::{BacklightController, BacklightError, BacklightRange, Result};

/// A mock [BacklightController], usable when testing code built on top of the trait.
///
/// Clones share their state, so a value set through one clone can be read
/// through another.
#[derive(Debug, Clone)]
pub struct MockBacklightController {
    value: Arc<Mutex<Cell<i32>>>,
    range: Arc<Mutex<Cell<Option<BacklightRange>>>>,
    should_fail: Arc<Mutex<Cell<bool>>>,
}

impl MockBacklightController {
    /// Create a new controller with the specified initial value and range
    pub fn new(initial_value: i32, range: Option<BacklightRange>) -> MockBacklightController {
        MockBacklightController {
            value: Arc::new(Mutex::new(Cell::new(initial_value))),
            range: Arc::new(Mutex::new(Cell::new(range))),
            should_fail: Arc::new(Mutex::new(Cell::new(false))),
        }
    }

    /// Set whether operations on this controller should return an error or not
    pub fn set_failure_mode(&self, should_fail: bool) {
        self.should_fail.lock().unwrap().set(should_fail);
    }

    pub fn set_range(&self, range: Option<BacklightRange>) {
        self.range.lock().unwrap().set(range);
    }

    fn check_failure(&self) -> Result<()> {
        if self.should_fail.lock().unwrap().get() {
            Err(BacklightError::Mock(
                "Mock BacklightController is failing".to_owned(),
            ))
        } else {
            Ok(())
        }
    }
}

impl BacklightController for MockBacklightController {
    fn get(&self) -> Result<i32> {
        self.check_failure()?;
        Ok(self.value.lock().unwrap().get())
    }

    fn set(&self, value: i32) -> Result<()> {
        self.check_failure()?;
        self.value.lock().unwrap().set(value);
        Ok(())
    }

    fn range(&self) -> Option<BacklightRange> {
        self.range.lock().unwrap().get()
    }
}
