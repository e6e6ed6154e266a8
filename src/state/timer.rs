// Solving clock, advanced by a once-per-second tick from the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    pub running: bool,
    pub elapsed_secs: u64,
}

impl Timer {
    /// Restarts from zero.
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_secs = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
        self.running
    }
}
