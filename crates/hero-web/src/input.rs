use hero_core::PointerReading;
use std::cell::Cell;
use std::rc::Rc;

/// Shared cell holding the latest normalized pointer reading. Event handlers
/// write, the frame loop reads; last write wins.
#[derive(Clone, Default)]
pub struct PointerTracker {
    reading: Rc<Cell<PointerReading>>,
}

impl PointerTracker {
    pub fn set(&self, reading: PointerReading) {
        self.reading.set(reading);
    }

    pub fn get(&self) -> PointerReading {
        self.reading.get()
    }
}
