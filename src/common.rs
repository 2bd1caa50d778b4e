mod angles;
pub mod points;

pub use angles::{ANGLE_TOL, sign, wrap_pi_once};
