/// Runs `cleanup` when dropped, so it also happens on early returns.
pub struct OnExit<F: FnMut()> {
    cleanup: F,
}

impl<F: FnMut()> OnExit<F> {
    pub fn new(cleanup: F) -> Self {
        Self { cleanup }
    }
}

impl<F: FnMut()> Drop for OnExit<F> {
    fn drop(&mut self) {
        (self.cleanup)();
    }
}
