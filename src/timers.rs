/// # Timers
/// Two 8-bit counters that count down to zero, once per `tick`.
///
/// Ticking is the driver's job and happens at 60Hz of wall-clock time, independently of how many
/// instructions run in between. The sound timer is only modeled as a counter; nothing plays.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decrements each non-zero timer by one
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }
}
