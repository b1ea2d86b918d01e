use std::time::{
    Duration,
    Instant,
};

/// One-shot fade-in for freshly swapped content.
///
/// `trigger` unconditionally restarts the ramp, so retriggering an element
/// that is mid-fade (or already fully faded in) replays the animation from
/// the start every time.
pub struct FadeIn {
    started: Option<Instant>,
    duration: Duration,
}

impl FadeIn {
    pub fn new(duration: Duration) -> Self {
        Self { started: None, duration }
    }

    pub fn trigger(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Opacity in [0, 1]. Content that was never triggered shows fully opaque.
    pub fn alpha(&self) -> f32 {
        self.alpha_at(Instant::now())
    }

    pub fn is_animating(&self) -> bool {
        self.alpha() < 1.0
    }

    fn alpha_at(&self, now: Instant) -> f32 {
        match self.started {
            Some(started) => {
                let elapsed = now.saturating_duration_since(started).as_secs_f32();
                (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            None => 1.0,
        }
    }
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untriggered_fade_is_opaque() {
        let fade = FadeIn::new(Duration::from_millis(500));
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn alpha_ramps_from_zero_to_one() {
        let mut fade = FadeIn::new(Duration::from_millis(500));
        fade.trigger();
        let started = fade.started.unwrap();

        assert_eq!(fade.alpha_at(started), 0.0);
        assert_eq!(fade.alpha_at(started + Duration::from_millis(250)), 0.5);
        assert_eq!(fade.alpha_at(started + Duration::from_millis(500)), 1.0);
        assert_eq!(fade.alpha_at(started + Duration::from_millis(2000)), 1.0);
    }

    #[test]
    fn retrigger_restarts_a_finished_ramp() {
        let mut fade = FadeIn::new(Duration::from_millis(500));
        fade.trigger();
        let first = fade.started.unwrap();
        assert_eq!(fade.alpha_at(first + Duration::from_secs(5)), 1.0);

        fade.trigger();
        let second = fade.started.unwrap();
        assert_eq!(fade.alpha_at(second), 0.0);
    }
}
