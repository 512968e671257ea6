// Shared switches for the cooperative render loop.
//
// A hidden page suspends frame callbacks rather than cancelling them, so a
// paused tick may still be parked inside the platform scheduler. `running`
// gates whether frames execute; `armed` records whether a tick is still
// registered, so resuming never schedules a second loop next to a parked one.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoopControl {
    running: Rc<RefCell<bool>>,
    armed: Rc<RefCell<bool>>,
}

impl LoopControl {
    pub fn new() -> Self {
        Self {
            running: Rc::new(RefCell::new(true)),
            armed: Rc::new(RefCell::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        *self.running.borrow()
    }

    pub fn pause(&self) {
        *self.running.borrow_mut() = false;
    }

    pub fn resume(&self) {
        *self.running.borrow_mut() = true;
    }

    /// Claim the single tick slot. Returns false when a tick is already
    /// registered (possibly parked by a hidden page), in which case the
    /// caller must not start another loop.
    pub fn try_arm(&self) -> bool {
        let mut armed = self.armed.borrow_mut();
        if *armed {
            return false;
        }
        *armed = true;
        true
    }

    /// Release the tick slot; called by a tick that returns without
    /// re-registering itself.
    pub fn disarm(&self) {
        *self.armed.borrow_mut() = false;
    }
}

impl Default for LoopControl {
    fn default() -> Self {
        Self::new()
    }
}
