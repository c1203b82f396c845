/// Visibility of the ground-floor sub-type menu.
///
/// Transient UI state, independent of the answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Popover {
    open: bool,
}

impl Popover {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip visibility. Returns whether the popover is open afterwards.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the popover. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
