/// Holds at most one live instance of an ephemeral UI element.
///
/// Putting a new instance in hands back the one it displaced, so the caller
/// can tear it down before showing the replacement.
#[derive(Debug)]
pub struct SingleFlight<T> {
    current: Option<T>,
}

impl<T> SingleFlight<T> {
    pub const fn new() -> Self {
        Self { current: None }
    }

    pub fn replace(&mut self, next: T) -> Option<T> {
        self.current.replace(next)
    }

    pub fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    /// Takes the live instance only when `is_it` recognises it.
    pub fn take_if(&mut self, is_it: impl FnOnce(&T) -> bool) -> Option<T> {
        match &self.current {
            Some(current) if is_it(current) => self.current.take(),
            _ => None,
        }
    }
}

impl<T> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}
