//! Screen transitions.
//!
//! Two clocks drive a menu screen on and off:
//! - [`ScreenTransition`] is the screen-stack state machine with a fade
//!   position (`0` fully on, `1` fully off) advanced at a fixed rate.
//! - [`MenuSlide`] eases the menu's horizontal slide toward a target
//!   (`0` hidden, `1` active, `2` exiting) with a timer that restarts
//!   whenever the screen is covered, uncovered or cancelled.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    TransitionOn,
    Active,
    TransitionOff,
    Hidden,
}

/// What the host should do with a screen after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStatus {
    Running,
    /// The screen finished exiting and should be removed from the stack.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenTransition {
    state: ScreenState,
    position: f32,
    on_time: f32,
    off_time: f32,
    exiting: bool,
    elapsed: f32,
}

impl ScreenTransition {
    pub fn new(on_time: f32, off_time: f32) -> Self {
        Self {
            state: ScreenState::TransitionOn,
            position: 1.0,
            on_time,
            off_time,
            exiting: false,
            elapsed: 0.0,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Fade position: `0` fully on, `1` fully off.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Opacity to draw the screen with.
    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    /// Seconds since the screen was created.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// True while the screen may react to input.
    pub fn is_active(&self) -> bool {
        !self.exiting && matches!(self.state, ScreenState::TransitionOn | ScreenState::Active)
    }

    /// Start leaving the stack.
    pub fn exit(&mut self) {
        self.exiting = true;
        self.state = ScreenState::TransitionOff;
    }

    pub fn update(&mut self, dt: f32, covered: bool) -> ScreenStatus {
        self.elapsed += dt;

        if self.exiting {
            self.state = ScreenState::TransitionOff;
            if !self.advance(dt, self.off_time, 1.0) {
                return ScreenStatus::Finished;
            }
        } else if covered {
            self.state = if self.advance(dt, self.off_time, 1.0) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            };
        } else {
            self.state = if self.advance(dt, self.on_time, -1.0) {
                ScreenState::TransitionOn
            } else {
                ScreenState::Active
            };
        }
        ScreenStatus::Running
    }

    /// Move the fade position; false once it reached its end.
    fn advance(&mut self, dt: f32, duration: f32, direction: f32) -> bool {
        let delta = if duration <= 0.0 { 1.0 } else { dt / duration };
        self.position += delta * direction;

        if (direction < 0.0 && self.position <= 0.0) || (direction > 0.0 && self.position >= 1.0) {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }
        true
    }
}

pub const SLIDE_HIDDEN: f32 = 0.0;
pub const SLIDE_ACTIVE: f32 = 1.0;
pub const SLIDE_EXITING: f32 = 2.0;

/// One easing step: move `position` toward `target` by a fraction given by
/// the timer clamped to [0, 1].
pub fn ease_toward(position: f32, target: f32, timer: f32) -> f32 {
    position + (target - position) * timer.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSlide {
    position: f32,
    timer: f32,
    last_covered: bool,
}

impl Default for MenuSlide {
    fn default() -> Self {
        Self {
            position: SLIDE_EXITING,
            timer: 0.0,
            last_covered: false,
        }
    }
}

impl MenuSlide {
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Advance the timer, restarting it when the covered flag flips.
    pub fn tick(&mut self, dt: f32, covered: bool) {
        self.timer += dt;
        if covered != self.last_covered {
            self.timer = 0.0;
        }
        self.last_covered = covered;
    }

    pub fn restart(&mut self) {
        self.timer = 0.0;
    }

    pub fn target(covered: bool, transition: &ScreenTransition) -> f32 {
        if covered {
            SLIDE_HIDDEN
        } else if transition.is_exiting() {
            SLIDE_EXITING
        } else {
            match transition.state() {
                ScreenState::TransitionOn | ScreenState::Active => SLIDE_ACTIVE,
                ScreenState::TransitionOff | ScreenState::Hidden => SLIDE_HIDDEN,
            }
        }
    }

    /// Ease toward `target` and return the new position.
    ///
    /// A non-finite result snaps to the target.
    pub fn ease(&mut self, target: f32) -> f32 {
        let next = ease_toward(self.position, target, self.timer);
        self.position = if next.is_finite() {
            next.clamp(SLIDE_HIDDEN, SLIDE_EXITING)
        } else {
            log::warn!("menu slide position went non-finite (timer {}), snapping to {target}", self.timer);
            target
        };
        self.position
    }
}
