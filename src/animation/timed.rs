//! Driver that models effect durations on a clock.
//!
//! [`TimedDriver`] resolves each effect after its configured duration and
//! keeps the interpolated visual state (positions, tints, announcement
//! opacity) a renderer needs to draw any frame in between.

use std::task::Poll;

use glam::Vec2;
use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use super::driver::{AnimationDriver, EffectHandle};
use super::effect::{AnnouncementId, Effect};
use crate::options::{ColorOptions, Options, PlaybackOptions, TimingOptions};
use crate::scene::{Element, ElementId};
use crate::util::easing::EasingFunction;

/// A value moving from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy)]
struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Copy> Tween<T> {
    fn settled(value: T, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    /// Normalized progress (0.0 to 1.0).
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    fn sample(
        &self,
        now: Instant,
        easing: EasingFunction,
        lerp: fn(T, T, f32) -> T,
    ) -> T {
        lerp(self.from, self.to, easing.evaluate(self.progress(now)))
    }

    /// Restart toward `to` from wherever the value is at `now`.
    fn retarget(
        &self,
        to: T,
        now: Instant,
        duration: Duration,
        easing: EasingFunction,
        lerp: fn(T, T, f32) -> T,
    ) -> Self {
        Self {
            from: self.sample(now, easing, lerp),
            to,
            start: now,
            duration,
        }
    }
}

fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a.lerp(b, t)
}

fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[derive(Debug, Clone, Copy)]
struct ElementVisual {
    position: Tween<Vec2>,
    tint: Tween<[f32; 3]>,
}

#[derive(Debug, Clone)]
struct AnnouncementVisual {
    id: AnnouncementId,
    text: String,
    opacity: Tween<f32>,
    dismissed: bool,
}

/// An announcement as a renderer should draw it this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleAnnouncement<'a> {
    /// Announcement id.
    pub id: AnnouncementId,
    /// Message text.
    pub text: &'a str,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Clock-driven [`AnimationDriver`] with interpolated visual state.
#[derive(Debug)]
pub struct TimedDriver {
    timing: TimingOptions,
    playback: PlaybackOptions,
    colors: ColorOptions,
    elements: FxHashMap<ElementId, ElementVisual>,
    announcements: Vec<AnnouncementVisual>,
    /// Handle -> instant the effect finishes.
    deadlines: FxHashMap<EffectHandle, Instant>,
    next_handle: u64,
}

impl TimedDriver {
    /// Driver using the durations, speed and colors from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            timing: options.timing.clone(),
            playback: options.playback.clone(),
            colors: options.colors.clone(),
            elements: FxHashMap::default(),
            announcements: Vec::new(),
            deadlines: FxHashMap::default(),
            next_handle: 0,
        }
    }

    /// Register elements so moves start from their real positions.
    ///
    /// Elements not yet known snap to their scene position with the base
    /// tint. Known elements whose move already finished are snapped to the
    /// scene position (e.g. after a drag); running moves are left alone.
    pub fn track(&mut self, elements: &[Element], now: Instant) {
        let base = self.colors.base;
        for element in elements {
            let visual = self.elements.entry(element.id).or_insert(ElementVisual {
                position: Tween::settled(element.position(), now),
                tint: Tween::settled(base, now),
            });
            if visual.position.progress(now) >= 1.0 {
                visual.position = Tween::settled(element.position(), now);
            }
        }
    }

    /// Forget an element (e.g. after it was deleted from the scene).
    pub fn untrack(&mut self, id: ElementId) {
        let _ = self.elements.remove(&id);
    }

    /// Interpolated position of an element.
    #[must_use]
    pub fn position(&self, id: ElementId, now: Instant) -> Option<Vec2> {
        self.elements
            .get(&id)
            .map(|v| v.position.sample(now, EasingFunction::CubicInOut, lerp_vec2))
    }

    /// Interpolated RGB fill of an element.
    #[must_use]
    pub fn tint(&self, id: ElementId, now: Instant) -> Option<[f32; 3]> {
        self.elements
            .get(&id)
            .map(|v| v.tint.sample(now, EasingFunction::Linear, lerp_rgb))
    }

    /// Announcements that are at least partly visible at `now`.
    #[must_use]
    pub fn announcements(&self, now: Instant) -> Vec<VisibleAnnouncement<'_>> {
        self.announcements
            .iter()
            .map(|a| VisibleAnnouncement {
                id: a.id,
                text: &a.text,
                opacity: a.opacity.sample(now, EasingFunction::QuadraticOut, lerp_f32),
            })
            .filter(|a| a.opacity > 0.0)
            .collect()
    }

    /// Number of effects whose deadline has not been observed yet.
    #[must_use]
    pub fn tracked_effects(&self) -> usize {
        self.deadlines.len()
    }

    /// Whether every applied effect has finished by `now`.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.deadlines.values().all(|&deadline| now >= deadline)
    }

    fn element_mut(&mut self, id: ElementId, fallback: Vec2, now: Instant) -> &mut ElementVisual {
        let base = self.colors.base;
        self.elements.entry(id).or_insert_with(|| {
            log::warn!("effect on untracked element {id}");
            ElementVisual {
                position: Tween::settled(fallback, now),
                tint: Tween::settled(base, now),
            }
        })
    }

    /// Drop announcements whose fade-out completed.
    fn prune_announcements(&mut self, now: Instant) {
        self.announcements
            .retain(|a| !(a.dismissed && a.opacity.progress(now) >= 1.0));
    }

    fn apply_effect(&mut self, effect: &Effect, now: Instant) -> Duration {
        match effect {
            Effect::Highlight { id, color } => {
                let duration = self.playback.scale(self.timing.highlight());
                let rgb = self.colors.rgb(*color);
                let visual = self.element_mut(*id, Vec2::ZERO, now);
                visual.tint =
                    visual.tint.retarget(rgb, now, duration, EasingFunction::Linear, lerp_rgb);
                duration
            }
            Effect::Clear { id } => {
                let duration = self.playback.scale(self.timing.highlight());
                let base = self.colors.base;
                let visual = self.element_mut(*id, Vec2::ZERO, now);
                visual.tint =
                    visual.tint.retarget(base, now, duration, EasingFunction::Linear, lerp_rgb);
                duration
            }
            Effect::Move { id, to } => {
                let duration = self.playback.scale(self.timing.movement());
                let visual = self.element_mut(*id, *to, now);
                visual.position = visual.position.retarget(
                    *to,
                    now,
                    duration,
                    EasingFunction::CubicInOut,
                    lerp_vec2,
                );
                duration
            }
            Effect::Announce { id, text } => {
                let duration = self.playback.scale(self.timing.announce());
                self.announcements.push(AnnouncementVisual {
                    id: *id,
                    text: text.clone(),
                    opacity: Tween {
                        from: 0.0,
                        to: 1.0,
                        start: now,
                        duration,
                    },
                    dismissed: false,
                });
                duration
            }
            Effect::Dismiss { id } => {
                let duration = self.playback.scale(self.timing.dismiss());
                for a in self.announcements.iter_mut().filter(|a| a.id == *id) {
                    a.opacity = a.opacity.retarget(
                        0.0,
                        now,
                        duration,
                        EasingFunction::QuadraticOut,
                        lerp_f32,
                    );
                    a.dismissed = true;
                }
                duration
            }
        }
    }
}

impl AnimationDriver for TimedDriver {
    fn apply(&mut self, effect: &Effect, now: Instant) -> EffectHandle {
        self.prune_announcements(now);
        self.deadlines.retain(|_, deadline| *deadline > now);
        let duration = self.apply_effect(effect, now);
        let handle = EffectHandle(self.next_handle);
        self.next_handle += 1;
        let _ = self.deadlines.insert(handle, now + duration);
        handle
    }

    fn poll(&mut self, handle: EffectHandle, now: Instant) -> Poll<()> {
        match self.deadlines.get(&handle) {
            Some(&deadline) if now < deadline => Poll::Pending,
            _ => {
                let _ = self.deadlines.remove(&handle);
                Poll::Ready(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Color;

    fn setup() -> (TimedDriver, Instant) {
        let now = Instant::now();
        let mut driver = TimedDriver::new(&Options::default());
        driver.track(&[Element::new(ElementId(0), 5, 100.0, 50.0)], now);
        (driver, now)
    }

    #[test]
    fn highlight_resolves_after_its_duration() {
        let (mut driver, start) = setup();
        let handle = driver.apply(
            &Effect::Highlight {
                id: ElementId(0),
                color: Color::Compare,
            },
            start,
        );

        assert!(driver.poll(handle, start).is_pending());
        assert!(driver.poll(handle, start + Duration::from_millis(299)).is_pending());
        assert!(!driver.is_settled(start + Duration::from_millis(299)));
        assert!(driver.poll(handle, start + Duration::from_millis(300)).is_ready());

        let tint = driver.tint(ElementId(0), start + Duration::from_millis(300)).unwrap();
        let expected = ColorOptions::default().compare;
        for (got, want) in tint.iter().zip(expected) {
            assert!((got - want).abs() < 1e-5);
        }
    }

    #[test]
    fn move_interpolates_with_ease_in_out() {
        let (mut driver, start) = setup();
        let _ = driver.apply(
            &Effect::Move {
                id: ElementId(0),
                to: Vec2::new(300.0, 50.0),
            },
            start,
        );

        let mid = driver.position(ElementId(0), start + Duration::from_millis(300)).unwrap();
        assert!((mid.x - 200.0).abs() < 0.01);
        let early = driver.position(ElementId(0), start + Duration::from_millis(150)).unwrap();
        assert!(early.x < 150.0, "ease-in start, got {}", early.x);
        let end = driver.position(ElementId(0), start + Duration::from_secs(1)).unwrap();
        assert_eq!(end, Vec2::new(300.0, 50.0));
    }

    #[test]
    fn speed_shortens_every_effect() {
        let mut options = Options::default();
        options.playback.speed = 2.0;
        let mut driver = TimedDriver::new(&options);
        let start = Instant::now();
        let handle = driver.apply(&Effect::Clear { id: ElementId(9) }, start);
        assert!(driver.poll(handle, start + Duration::from_millis(150)).is_ready());
    }

    #[test]
    fn dismissed_announcements_fade_then_disappear() {
        let (mut driver, start) = setup();
        let id = AnnouncementId(1);
        let _ = driver.apply(
            &Effect::Announce {
                id,
                text: "Node 5 found".to_owned(),
            },
            start,
        );
        let shown = start + Duration::from_millis(300);
        let visible = driver.announcements(shown);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "Node 5 found");
        assert!((visible[0].opacity - 1.0).abs() < 1e-6);

        let _ = driver.apply(&Effect::Dismiss { id }, shown);
        let half = shown + Duration::from_millis(250);
        let fading = driver.announcements(half);
        assert!(fading[0].opacity > 0.0 && fading[0].opacity < 1.0);
        assert!(driver.announcements(shown + Duration::from_millis(500)).is_empty());
    }

    #[test]
    fn expired_deadlines_are_dropped_without_polling() {
        let (mut driver, start) = setup();
        for i in 0..50 {
            let at = start + Duration::from_secs(i);
            let _ = driver.apply(&Effect::Clear { id: ElementId(0) }, at);
        }
        // Only the effect applied last is still running.
        assert_eq!(driver.tracked_effects(), 1);
        assert!(driver.is_settled(start + Duration::from_secs(60)));
    }

    #[test]
    fn unknown_handles_are_ready() {
        let (mut driver, now) = setup();
        assert!(driver.poll(EffectHandle(42), now).is_ready());
    }
}
