//! Animated camera flights between poses.
//!
//! A [`TransitionController`] owns at most one in-flight transition. The host calls
//! [`TransitionController::tick`] once per frame with the current time in
//! milliseconds and applies the returned pose. Arrival is reported through the
//! returned [`Tick`], together with whatever token the flight was started with, so
//! the animation code never calls back into UI code.

use crate::easing::Easing;
use crate::pose::Pose;

/// Result of advancing the controller by one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick<T> {
    /// No flight is in progress; the camera belongs to the user.
    Idle,
    /// A flight is in progress and the camera should be placed at this pose.
    Moving(Pose),
    /// The flight finished this frame. Reported exactly once per flight.
    Arrived {
        /// The destination pose, exactly as passed to `start`.
        pose: Pose,
        /// The token the flight was started with.
        arrival: Option<T>,
    },
}

impl<T> Tick<T> {
    /// The pose to apply this frame, if any.
    pub fn pose(&self) -> Option<Pose> {
        match self {
            Tick::Idle => None,
            Tick::Moving(pose) | Tick::Arrived { pose, .. } => Some(*pose),
        }
    }
}

#[derive(Debug, Clone)]
struct Transition<T> {
    start_ms: f64,
    duration_seconds: f64,
    from: Pose,
    to: Pose,
    arrival: Option<T>,
}

impl<T> Transition<T> {
    /// Linear progress in `[0, 1]`. Non-positive or non-finite durations are
    /// already complete.
    fn progress(&self, now_ms: f64) -> f64 {
        if !(self.duration_seconds.is_finite() && self.duration_seconds > 0.0) {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / (self.duration_seconds * 1000.0);
        if t.is_nan() {
            return 0.0;
        }
        t.clamp(0.0, 1.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sample(&self, progress: f64, easing: Easing) -> Pose {
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, easing.apply(progress as f32))
    }
}

/// Drives one camera flight at a time.
///
/// `T` is the arrival token handed back in [`Tick::Arrived`]; the viewer uses the
/// destination viewpoint's name.
#[derive(Debug, Clone)]
pub struct TransitionController<T> {
    easing: Easing,
    active: Option<Transition<T>>,
}

impl<T> Default for TransitionController<T> {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

impl<T> TransitionController<T> {
    /// Creates an idle controller using the given easing curve.
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            active: None,
        }
    }

    /// Starts a flight from `from` to `to`.
    ///
    /// Any in-flight transition is discarded and its arrival token dropped without
    /// being reported.
    pub fn start(
        &mut self,
        now_ms: f64,
        from: Pose,
        to: Pose,
        duration_seconds: f64,
        arrival: Option<T>,
    ) {
        if self.active.is_some() {
            log::debug!("superseding in-flight camera transition");
        }
        self.active = Some(Transition {
            start_ms: now_ms,
            duration_seconds,
            from,
            to,
            arrival,
        });
    }

    /// Starts a flight from wherever the current flight has the camera at `now_ms`.
    ///
    /// When idle, the flight starts from `current`.
    pub fn retarget(
        &mut self,
        now_ms: f64,
        current: Pose,
        to: Pose,
        duration_seconds: f64,
        arrival: Option<T>,
    ) {
        let from = self.sample(now_ms).unwrap_or(current);
        self.start(now_ms, from, to, duration_seconds, arrival);
    }

    /// Evaluates the in-flight pose at `now_ms` without advancing state.
    pub fn sample(&self, now_ms: f64) -> Option<Pose> {
        self.active
            .as_ref()
            .map(|t| t.sample(t.progress(now_ms), self.easing))
    }

    /// Advances the controller to `now_ms`.
    ///
    /// When progress reaches 1 the transition is removed and its arrival reported.
    pub fn tick(&mut self, now_ms: f64) -> Tick<T> {
        let Some(transition) = &self.active else {
            return Tick::Idle;
        };

        let progress = transition.progress(now_ms);
        if progress < 1.0 {
            return Tick::Moving(transition.sample(progress, self.easing));
        }

        match self.active.take() {
            Some(done) => Tick::Arrived {
                pose: done.to,
                arrival: done.arrival,
            },
            None => Tick::Idle,
        }
    }

    /// Returns true while a flight is in progress.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Destination of the in-flight transition.
    pub fn destination(&self) -> Option<Pose> {
        self.active.as_ref().map(|t| t.to)
    }

    /// Arrival token of the in-flight transition.
    pub fn pending_arrival(&self) -> Option<&T> {
        self.active.as_ref().and_then(|t| t.arrival.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn pose(x: f32, tx: f32) -> Pose {
        Pose::new(Vec3::new(x, 0.0, 0.0), Vec3::new(tx, 0.0, 0.0))
    }

    #[test]
    fn test_idle_controller() {
        let mut controller: TransitionController<()> = TransitionController::default();
        assert!(!controller.is_active());
        assert_eq!(controller.tick(0.0), Tick::Idle);
        assert_eq!(controller.sample(0.0), None);
    }

    #[test]
    fn test_endpoints() {
        let from = pose(0.0, 1.0);
        let to = pose(10.0, 3.0);
        let mut controller = TransitionController::default();
        controller.start(1_000.0, from, to, 2.0, Some("b"));

        assert_eq!(controller.tick(1_000.0), Tick::Moving(from));
        assert!(controller.is_active());
        assert_eq!(
            controller.tick(3_000.0),
            Tick::Arrived {
                pose: to,
                arrival: Some("b")
            }
        );
        assert!(!controller.is_active());
        assert_eq!(controller.tick(3_500.0), Tick::Idle);
    }

    #[test]
    fn test_overshoot_arrives_at_exact_destination() {
        let from = pose(0.1, 0.0);
        let to = pose(0.7, 0.3);
        let mut controller = TransitionController::default();
        controller.start(0.0, from, to, 1.0, Some(1));
        assert_eq!(
            controller.tick(60_000.0),
            Tick::Arrived {
                pose: to,
                arrival: Some(1)
            }
        );
    }

    #[test]
    fn test_midpoint_scenario() {
        let from = Pose::new(Vec3::ZERO, Vec3::ZERO);
        let to = Pose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        let mut controller: TransitionController<()> = TransitionController::default();
        controller.start(0.0, from, to, 1.0, None);
        let Tick::Moving(mid) = controller.tick(500.0) else {
            panic!("expected an in-flight pose");
        };
        assert_eq!(mid.position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(mid.target, Vec3::ZERO);
    }

    #[test]
    fn test_motion_is_eased_not_linear() {
        let mut controller: TransitionController<()> = TransitionController::default();
        controller.start(0.0, pose(0.0, 0.0), pose(10.0, 0.0), 1.0, None);
        let quarter = controller.tick(250.0).pose().unwrap();
        assert!((quarter.position.x - 0.625).abs() < 1e-5);
    }

    #[test]
    fn test_zero_and_negative_duration_finish_on_first_tick() {
        for duration in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let mut controller = TransitionController::default();
            controller.start(100.0, pose(0.0, 0.0), pose(4.0, 2.0), duration, Some("x"));
            assert_eq!(
                controller.tick(100.0),
                Tick::Arrived {
                    pose: pose(4.0, 2.0),
                    arrival: Some("x")
                },
                "duration {duration}"
            );
            assert_eq!(controller.tick(101.0), Tick::Idle);
        }
    }

    #[test]
    fn test_time_before_start_clamps_to_origin() {
        let mut controller: TransitionController<()> = TransitionController::default();
        controller.start(1_000.0, pose(2.0, 0.0), pose(8.0, 0.0), 1.0, None);
        assert_eq!(controller.tick(0.0), Tick::Moving(pose(2.0, 0.0)));
    }

    #[test]
    fn test_restart_drops_previous_arrival() {
        let mut controller = TransitionController::default();
        controller.start(0.0, pose(0.0, 0.0), pose(10.0, 0.0), 1.0, Some("first"));
        controller.tick(400.0);
        controller.start(400.0, pose(3.0, 0.0), pose(-5.0, 0.0), 1.0, Some("second"));

        let mut arrivals = Vec::new();
        let mut now = 400.0;
        while now <= 3_000.0 {
            if let Tick::Arrived { arrival, .. } = controller.tick(now) {
                arrivals.push(arrival);
            }
            now += 16.0;
        }
        assert_eq!(arrivals, vec![Some("second")]);
    }

    #[test]
    fn test_back_to_back_starts_without_tick() {
        let mut controller = TransitionController::default();
        controller.start(0.0, pose(0.0, 0.0), pose(10.0, 0.0), 5.0, Some(1));
        controller.start(0.0, pose(20.0, 0.0), pose(30.0, 0.0), 1.0, Some(2));

        assert_eq!(controller.tick(0.0), Tick::Moving(pose(20.0, 0.0)));
        assert_eq!(controller.tick(500.0).pose().unwrap(), pose(25.0, 0.0));
        assert_eq!(
            controller.tick(1_000.0),
            Tick::Arrived {
                pose: pose(30.0, 0.0),
                arrival: Some(2)
            }
        );
    }

    #[test]
    fn test_retarget_starts_from_interpolated_pose() {
        let mut controller = TransitionController::default();
        controller.start(0.0, pose(0.0, 0.0), pose(10.0, 0.0), 1.0, Some("a"));
        let mid = controller.tick(500.0).pose().unwrap();

        controller.retarget(500.0, pose(0.0, 0.0), pose(-10.0, 0.0), 1.0, Some("b"));
        assert_eq!(controller.tick(500.0), Tick::Moving(mid));
        assert_eq!(controller.pending_arrival(), Some(&"b"));
        assert_eq!(controller.destination(), Some(pose(-10.0, 0.0)));
    }

    #[test]
    fn test_retarget_when_idle_uses_current_pose() {
        let mut controller: TransitionController<()> = TransitionController::default();
        controller.retarget(0.0, pose(7.0, 1.0), pose(0.0, 0.0), 1.0, None);
        assert_eq!(controller.tick(0.0), Tick::Moving(pose(7.0, 1.0)));
    }

    #[test]
    fn test_linear_easing() {
        let mut controller: TransitionController<()> = TransitionController::new(Easing::Linear);
        controller.start(0.0, pose(0.0, 0.0), pose(10.0, 0.0), 1.0, None);
        let quarter = controller.tick(250.0).pose().unwrap();
        assert!((quarter.position.x - 2.5).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn interpolated_pose_is_convex_combination(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, az in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, bz in -100.0f32..100.0,
            elapsed in 0.0f64..1_500.0,
        ) {
            let from = Pose::new(Vec3::new(ax, ay, az), Vec3::new(az, ax, ay));
            let to = Pose::new(Vec3::new(bx, by, bz), Vec3::new(bz, bx, by));
            let mut controller: TransitionController<()> = TransitionController::default();
            controller.start(0.0, from, to, 1.2, None);
            let sampled = controller.tick(elapsed).pose().unwrap();

            for (p, (a, b)) in [
                (sampled.position, (from.position, to.position)),
                (sampled.target, (from.target, to.target)),
            ] {
                let lo = a.min(b) - Vec3::splat(1e-3);
                let hi = a.max(b) + Vec3::splat(1e-3);
                prop_assert!(p.cmpge(lo).all() && p.cmple(hi).all());
            }
        }

        #[test]
        fn distance_to_destination_never_grows(steps in 2usize..60, duration in 0.1f64..5.0) {
            let from = pose(-40.0, 3.0);
            let to = pose(25.0, -8.0);
            let mut controller: TransitionController<()> = TransitionController::default();
            controller.start(0.0, from, to, duration, None);
            let mut prev = f32::MAX;
            for i in 0..=steps {
                let now = if i == steps {
                    duration * 1000.0
                } else {
                    duration * 1000.0 * i as f64 / steps as f64
                };
                let pose = controller.tick(now).pose().unwrap();
                let remaining = pose.position.distance(to.position);
                prop_assert!(remaining <= prev + 1e-4);
                prev = remaining;
            }
            prop_assert!(!controller.is_active());
        }
    }
}
