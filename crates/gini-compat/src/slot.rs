use std::ffi::c_int;

/// Value the bridge seeds into every slot before dispatch.
pub const DEFAULT_SENTINEL: c_int = -999;

/// Caller-owned integer location an external routine writes its result into.
///
/// The bridge keeps one on its stack per call; the routine only ever sees a
/// raw pointer to it.
#[derive(Debug)]
#[repr(transparent)]
pub struct OutputSlot {
    value: c_int,
}

impl OutputSlot {
    pub fn new(sentinel: c_int) -> Self {
        Self { value: sentinel }
    }

    pub fn as_mut_ptr(&mut self) -> *mut c_int {
        &mut self.value
    }

    pub fn address(&self) -> *const c_int {
        &self.value
    }

    pub fn get(&self) -> c_int {
        self.value
    }
}

impl Default for OutputSlot {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel() {
        assert_eq!(OutputSlot::default().get(), DEFAULT_SENTINEL);
        assert_eq!(OutputSlot::new(7).get(), 7);
    }

    #[test]
    fn observes_writes_through_raw_pointer() {
        let mut slot = OutputSlot::default();
        let ptr = slot.as_mut_ptr();
        unsafe { ptr.write(43) };
        assert_eq!(slot.get(), 43);
        assert_eq!(slot.address(), ptr.cast_const());
    }
}
