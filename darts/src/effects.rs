use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation};

/// Keyed effect manager for whole-screen effects
pub type FxManager = EffectManager<&'static str>;

/// Start-up: the board materializes out of empty space
pub fn startup_reveal() -> Effect {
    fx::coalesce((600, Interpolation::CubicOut))
}
