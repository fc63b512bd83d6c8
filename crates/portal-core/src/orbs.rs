//! Drifting light orbs rendered behind the portal UI.
//!
//! The field is advanced once per display refresh by [`OrbField::tick`] and
//! nudged toward the pointer by [`OrbField::apply_pointer_influence`] on a
//! separate fixed-period timer. Nothing here touches platform APIs; the web
//! frontend reads [`OrbSample`]s and decides how to draw them.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// One of the fixed palette entries an orb is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbArchetype {
    pub color: &'static str,
    pub size: f32,
    pub speed: f32,
}

impl OrbArchetype {
    /// Palette entry for the orb at `index`, assigned round-robin.
    pub fn for_index(index: usize) -> Self {
        let (color, size, speed) = ORB_PALETTE[index % ORB_PALETTE.len()];
        Self { color, size, speed }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-left coordinate an orb of `size` may occupy. Collapses to
    /// zero when the viewport is smaller than the orb.
    pub fn max_position(&self, size: f32) -> Vec2 {
        Vec2::new((self.width - size).max(0.0), (self.height - size).max(0.0))
    }
}

#[derive(Clone, Debug)]
pub struct Orb {
    pub archetype: OrbArchetype,
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub dissipate_rate: f32,
    /// Set on the tick the orb was recreated after running out of life.
    pub fresh: bool,
}

/// Per-orb renderable state published each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbSample {
    pub position: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub color: &'static str,
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct OrbParams {
    pub initial_orbs: usize,
    pub min_orbs: usize,
    pub max_orbs: usize,
    pub max_life: f32,
    pub base_opacity: f32,
    pub scale_base: f32,
    pub scale_span: f32,
    pub dissipate_min: f32,
    pub dissipate_span: f32,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
}

impl Default for OrbParams {
    fn default() -> Self {
        Self {
            initial_orbs: INITIAL_ORBS,
            min_orbs: MIN_ORBS,
            max_orbs: INITIAL_ORBS + EXTRA_ORBS,
            max_life: DEFAULT_MAX_LIFE,
            base_opacity: BASE_OPACITY,
            scale_base: SCALE_BASE,
            scale_span: SCALE_SPAN,
            dissipate_min: DISSIPATE_MIN,
            dissipate_span: DISSIPATE_SPAN,
            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
        }
    }
}

pub type OrbVec = SmallVec<[Orb; INITIAL_ORBS + EXTRA_ORBS]>;

pub struct OrbField {
    pub orbs: OrbVec,
    pub params: OrbParams,
    viewport: Viewport,
    pointer: Vec2,
    rng: StdRng,
}

#[allow(clippy::len_without_is_empty)]
impl OrbField {
    pub fn new(params: OrbParams, viewport: Viewport, seed: u64) -> Self {
        let mut field = Self {
            orbs: SmallVec::new(),
            params,
            viewport,
            pointer: Vec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
        };
        let count = field.params.initial_orbs.min(field.params.max_orbs);
        for i in 0..count {
            let orb = field.spawn(i);
            field.orbs.push(orb);
        }
        field
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Adopt new bounds and pull every live orb back inside them.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for orb in &mut self.orbs {
            let max = viewport.max_position(orb.archetype.size);
            orb.position = orb.position.clamp(Vec2::ZERO, max);
        }
    }

    /// Advance every orb by one display frame.
    pub fn tick(&mut self) {
        let viewport = self.viewport;
        for i in 0..self.orbs.len() {
            let orb = &mut self.orbs[i];
            orb.fresh = false;
            integrate(orb, viewport);
            if orb.life <= 0.0 {
                self.recreate(i);
            }
        }
    }

    /// Pull orbs near the last pointer position toward it. Impulses add up
    /// across calls, so lingering near an orb keeps speeding it up.
    pub fn apply_pointer_influence(&mut self) {
        let pointer = self.pointer;
        let radius = self.params.pointer_radius;
        let strength = self.params.pointer_strength;
        for orb in &mut self.orbs {
            orb.velocity += pointer_impulse(orb.position, pointer, radius, strength);
        }
    }

    /// Append one orb unless the hard cap is reached. Returns whether an orb was added.
    pub fn add_orb(&mut self) -> bool {
        let len = self.orbs.len();
        if len >= self.params.max_orbs {
            return false;
        }
        let orb = self.spawn(len);
        self.orbs.push(orb);
        log::debug!("[orbs] added orb {} (count={})", len, len + 1);
        true
    }

    /// Drop the most recently added orb unless at the floor. Returns whether an orb was removed.
    pub fn remove_orb(&mut self) -> bool {
        if self.orbs.len() <= self.params.min_orbs {
            return false;
        }
        self.orbs.pop();
        log::debug!("[orbs] removed orb (count={})", self.orbs.len());
        true
    }

    pub fn scale_speed(&mut self, multiplier: f32) {
        for orb in &mut self.orbs {
            orb.velocity *= multiplier;
        }
    }

    /// Rescale maximum and current life. Negative multipliers count as zero,
    /// and no orb's maximum drops below `MIN_MAX_LIFE`.
    pub fn scale_life(&mut self, multiplier: f32) {
        let m = multiplier.max(0.0);
        self.params.max_life = (self.params.max_life * m).max(MIN_MAX_LIFE);
        for orb in &mut self.orbs {
            orb.max_life = (orb.max_life * m).max(MIN_MAX_LIFE);
            orb.life = (orb.life * m).max(MIN_MAX_LIFE).min(orb.max_life);
        }
    }

    pub fn sample(&self, orb: &Orb) -> OrbSample {
        let (opacity, scale) = if orb.fresh {
            (self.params.base_opacity, FRESH_SCALE)
        } else {
            // lives stretched past the default still render as full
            let level = (orb.life / DEFAULT_MAX_LIFE).clamp(0.0, 1.0);
            (
                (self.params.base_opacity * level).min(1.0),
                self.params.scale_base + level * self.params.scale_span,
            )
        };
        OrbSample {
            position: orb.position,
            opacity,
            scale,
            color: orb.archetype.color,
            size: orb.archetype.size,
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = OrbSample> + '_ {
        self.orbs.iter().map(|orb| self.sample(orb))
    }

    fn spawn(&mut self, index: usize) -> Orb {
        let archetype = OrbArchetype::for_index(index);
        Orb {
            archetype,
            position: self.random_position(archetype.size),
            velocity: self.random_velocity(archetype.speed),
            life: self.params.max_life,
            max_life: self.params.max_life,
            dissipate_rate: self.random_dissipation(),
            fresh: false,
        }
    }

    fn recreate(&mut self, index: usize) {
        let archetype = OrbArchetype::for_index(index);
        let position = self.random_position(archetype.size);
        let velocity = self.random_velocity(archetype.speed);
        let dissipate_rate = self.random_dissipation();
        let orb = &mut self.orbs[index];
        orb.archetype = archetype;
        orb.position = position;
        orb.velocity = velocity;
        orb.dissipate_rate = dissipate_rate;
        orb.life = orb.max_life;
        orb.fresh = true;
    }

    fn random_position(&mut self, size: f32) -> Vec2 {
        let max = self.viewport.max_position(size);
        Vec2::new(self.rng.gen::<f32>() * max.x, self.rng.gen::<f32>() * max.y)
    }

    fn random_velocity(&mut self, speed: f32) -> Vec2 {
        Vec2::new(
            (self.rng.gen::<f32>() - 0.5) * speed,
            (self.rng.gen::<f32>() - 0.5) * speed,
        )
    }

    fn random_dissipation(&mut self) -> f32 {
        self.params.dissipate_min + self.rng.gen::<f32>() * self.params.dissipate_span
    }
}

// Move, bounce off the walls, clamp, then burn life.
fn integrate(orb: &mut Orb, viewport: Viewport) {
    let max = viewport.max_position(orb.archetype.size);
    orb.position += orb.velocity;
    if orb.position.x <= 0.0 || orb.position.x >= max.x {
        orb.velocity.x = -orb.velocity.x;
    }
    if orb.position.y <= 0.0 || orb.position.y >= max.y {
        orb.velocity.y = -orb.velocity.y;
    }
    orb.position = orb.position.clamp(Vec2::ZERO, max);
    orb.life -= orb.dissipate_rate;
}

/// Velocity change pulling an orb at `position` toward `pointer`.
///
/// Zero outside `radius` and at zero distance (where the direction is undefined).
pub fn pointer_impulse(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = pointer - position;
    let distance = delta.length();
    if !(distance > 0.0 && distance < radius) {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius;
    delta / distance * force * strength
}
