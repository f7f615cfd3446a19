/// An owned slot that is filled on first use and reused afterwards.
///
/// Unlike a global, the handle is passed explicitly to whoever needs the
/// resource. A failed initialization leaves the slot empty so the next
/// request tries again.
#[derive(Debug)]
pub struct LazyHandle<T> {
    slot: Option<T>,
}

impl<T> Default for LazyHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LazyHandle<T> {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    pub fn get_or_try_init<E>(&mut self, init: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        let value = match self.slot.take() {
            Some(v) => v,
            None => init()?,
        };
        Ok(self.slot.insert(value))
    }
}
