// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-stepped interpolation between two scalar values.
//!
//! [`Animator`] owns no timer. The host calls [`Animator::step`] once every
//! [`STEP_MS`] milliseconds until it yields [`AnimationStep::Last`] or
//! [`AnimationStep::Complete`]; dropping the animator cancels the run.
//!
//! ```
//! use understory_pager::{AnimationStep, Animator};
//!
//! // 0 → 1 over 40ms: four intermediate steps, then the exact target.
//! let mut animator = Animator::new(0.0, 1.0, 40);
//! assert_eq!(animator.step(), AnimationStep::Value(0.0));
//! assert_eq!(animator.step(), AnimationStep::Value(0.25));
//! assert_eq!(animator.step(), AnimationStep::Value(0.5));
//! assert_eq!(animator.step(), AnimationStep::Value(0.75));
//! assert_eq!(animator.step(), AnimationStep::Last(1.0));
//! assert!(animator.is_finished());
//! ```

/// Interval between two animation steps, in milliseconds.
pub const STEP_MS: u32 = 10;

/// What a single [`Animator::step`] produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStep {
    /// An intermediate value; more steps follow.
    Value(f64),
    /// The exact target value; the run is complete.
    Last(f64),
    /// The run completed without producing a value (start equals target).
    Complete,
}

/// Linear (optionally eased) interpolation from one value to another in fixed
/// [`STEP_MS`] steps.
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    from: f64,
    to: f64,
    duration_ms: u32,
    progress: u32,
    easing: fn(f64) -> f64,
    finished: bool,
}

impl Animator {
    /// Creates an animator moving from `from` to `to` over `duration_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            progress: 0,
            easing: linear,
            finished: false,
        }
    }

    /// Replaces the easing function applied to the normalized progress.
    ///
    /// `easing` maps `[0, 1]` onto `[0, 1]`; the default is the identity.
    #[must_use]
    pub fn with_easing(mut self, easing: fn(f64) -> f64) -> Self {
        self.easing = easing;
        self
    }

    /// Target value of this run.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Returns `true` once the final step has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the run by one step.
    ///
    /// After the run has finished this keeps returning
    /// [`AnimationStep::Complete`].
    pub fn step(&mut self) -> AnimationStep {
        if self.finished {
            return AnimationStep::Complete;
        }
        if self.from == self.to {
            self.finished = true;
            return AnimationStep::Complete;
        }
        let elapsed = u64::from(self.progress) * u64::from(STEP_MS);
        if u64::from(self.duration_ms) <= elapsed {
            self.finished = true;
            return AnimationStep::Last(self.to);
        }
        let steps = f64::from(self.duration_ms) / f64::from(STEP_MS);
        let t = (f64::from(self.progress) / steps).min(1.0);
        let value = self.from + (self.to - self.from) * (self.easing)(t);
        self.progress += 1;
        AnimationStep::Value(value)
    }
}

fn linear(t: f64) -> f64 {
    t
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn run(mut animator: Animator) -> Vec<AnimationStep> {
        let mut steps = Vec::new();
        loop {
            let step = animator.step();
            steps.push(step);
            if !matches!(step, AnimationStep::Value(_)) {
                return steps;
            }
        }
    }

    #[test]
    fn equal_endpoints_complete_without_a_value() {
        let mut animator = Animator::new(2.0, 2.0, 320);
        assert_eq!(animator.step(), AnimationStep::Complete);
        assert!(animator.is_finished());
    }

    #[test]
    fn reference_duration_takes_thirty_three_steps() {
        let steps = run(Animator::new(1.0, 2.0, 320));
        // 32 intermediate steps (0ms..310ms) plus the exact target.
        assert_eq!(steps.len(), 33);
        assert_eq!(steps[0], AnimationStep::Value(1.0));
        assert_eq!(steps[16], AnimationStep::Value(1.5));
        assert_eq!(steps[32], AnimationStep::Last(2.0));
    }

    #[test]
    fn backwards_runs_decrease_monotonically() {
        let steps = run(Animator::new(3.0, 1.0, 100));
        let values: Vec<f64> = steps
            .iter()
            .map(|s| match s {
                AnimationStep::Value(v) | AnimationStep::Last(v) => *v,
                AnimationStep::Complete => f64::NAN,
            })
            .collect();
        assert!(
            values.windows(2).all(|w| w[1] < w[0]),
            "values should strictly decrease: {values:?}"
        );
        assert_eq!(values.last().copied(), Some(1.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut animator = Animator::new(0.0, 5.0, 0);
        assert_eq!(animator.step(), AnimationStep::Last(5.0));
        assert_eq!(animator.step(), AnimationStep::Complete);
    }

    #[test]
    fn easing_shapes_intermediate_values() {
        let mut animator = Animator::new(0.0, 10.0, 20).with_easing(|t| t * t);
        assert_eq!(animator.step(), AnimationStep::Value(0.0));
        assert_eq!(animator.step(), AnimationStep::Value(2.5));
        assert_eq!(animator.step(), AnimationStep::Last(10.0));
        assert_eq!(animator.target(), 10.0);
    }
}
