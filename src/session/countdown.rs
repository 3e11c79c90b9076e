//! Pre-scan countdown (3 -> 2 -> 1 -> GO)
//!
//! The tick source lives outside the frame loop (a 1 Hz JS interval); this
//! is only the deterministic counter it drives. The session transitions on
//! the GO tick, never from inside the interval callback itself.

/// Outcome of one countdown tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    /// Show this label and keep ticking
    Display(&'static str),
    /// Countdown elapsed: show "GO!" and start scanning
    Go,
    /// Nothing left to do; the tick source should stop
    Finished,
}

/// Three-second countdown state
pub struct Countdown {
    remaining: u8,
    go_fired: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            remaining: 3,
            go_fired: false,
        }
    }

    pub fn tick(&mut self) -> CountdownTick {
        if self.remaining > 0 {
            let label = match self.remaining {
                3 => "3",
                2 => "2",
                _ => "1",
            };
            self.remaining -= 1;
            CountdownTick::Display(label)
        } else if !self.go_fired {
            self.go_fired = true;
            CountdownTick::Go
        } else {
            CountdownTick::Finished
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_sequence() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(), CountdownTick::Display("3"));
        assert_eq!(countdown.tick(), CountdownTick::Display("2"));
        assert_eq!(countdown.tick(), CountdownTick::Display("1"));
        assert_eq!(countdown.tick(), CountdownTick::Go);
        assert_eq!(countdown.tick(), CountdownTick::Finished);
        assert_eq!(countdown.tick(), CountdownTick::Finished);
    }
}
