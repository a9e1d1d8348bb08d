//! The shared capability of every physical part of an arm.

/// Anything with a mass, a length along the arm axis and a center of mass.
///
/// Distances are measured from the entity's own proximal end. Base torque is
/// derived from the entity's own mass and center of mass, so a composite must
/// compose its center of mass first rather than summing child torques.
pub trait Massive {
    /// Mass (lb).
    fn mass(&self) -> f64;

    /// Length along the arm axis (in).
    fn length(&self) -> f64;

    /// Distance from the proximal end to the center of mass (in).
    fn center_of_mass(&self) -> f64;

    /// Gravitational moment about the proximal end (lb·in).
    fn torque_at_base(&self) -> f64 {
        self.mass() * self.center_of_mass()
    }
}
