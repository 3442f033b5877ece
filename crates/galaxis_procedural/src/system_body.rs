//! # System Bodies
//!
//! Arena-backed body hierarchy of one star system.
//!
//! Every body lives in a [`SystemBodyTree`] and is addressed by its
//! [`BodyId`]. Children are owned through the arena; the parent link is a
//! plain index used only for upward traversal, so the tree has no reference
//! cycles.
//!
//! A generated system is a binary merge tree: stars are leaves, every
//! interior node is a gravpoint with exactly two children.

use std::ops::{Index, IndexMut};

use galaxis_core::Fixed;

use crate::star_type::BodyType;

/// Index of a body in its tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BodyId(u32);

impl BodyId {
    /// Creates an id from an arena index.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Orbital plane orientation, radians.
///
/// Only the angles are stored. The rotation matrix is derived on demand so
/// that no platform-dependent `sin`/`cos` result ever feeds generation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitRotation {
    /// Rotation about the X axis.
    pub tilt: f64,
    /// Rotation about the Y axis, applied after the tilt.
    pub yaw: f64,
}

impl OrbitRotation {
    /// Row-major 3x3 rotation, `RotY(yaw) * RotX(tilt)`.
    #[must_use]
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        let (sx, cx) = self.tilt.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        let rot_y = [[cy, 0.0, sy], [0.0, 1.0, 0.0], [-sy, 0.0, cy]];
        let rot_x = [[1.0, 0.0, 0.0], [0.0, cx, -sx], [0.0, sx, cx]];

        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| rot_y[row][k] * rot_x[k][col]).sum();
            }
        }
        out
    }
}

/// Keplerian orbit of a body around its parent's centre of mass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    /// Eccentricity in `[0, 1)`.
    pub eccentricity: f64,
    /// Semi-major axis of this body's own orbit, metres.
    pub semi_major_axis: f64,
    /// Orbital period, seconds.
    pub period: f64,
    /// Orientation of the orbital plane.
    pub rotation: OrbitRotation,
}

/// A star or gravpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemBody {
    /// Arena index.
    pub id: BodyId,
    /// Display name.
    pub name: String,
    /// Body class.
    pub body_type: BodyType,
    /// Enclosing gravpoint.
    pub parent: Option<BodyId>,
    /// Child bodies.
    pub children: Vec<BodyId>,
    /// Per-body seed.
    pub seed: u32,
    /// Solar masses.
    pub mass: Fixed,
    /// Solar radii.
    pub radius: Fixed,
    /// Surface temperature, Kelvin.
    pub average_temp: i32,
    /// Eccentricity of the pair this body belongs to.
    pub eccentricity: Fixed,
    /// Separation of the pair this body belongs to, AU.
    pub semi_major_axis: Fixed,
    /// Orbit around the parent.
    pub orbit: Orbit,
    /// Closest approach of the pair, AU.
    pub orb_min: Fixed,
    /// Widest separation of the pair, AU.
    pub orb_max: Fixed,
}

impl SystemBody {
    /// Creates an unattached body with zeroed physical data.
    #[must_use]
    pub fn new(name: impl Into<String>, body_type: BodyType) -> Self {
        Self {
            id: BodyId::new(0),
            name: name.into(),
            body_type,
            parent: None,
            children: Vec::new(),
            seed: 0,
            mass: Fixed::ZERO,
            radius: Fixed::ZERO,
            average_temp: 0,
            eccentricity: Fixed::ZERO,
            semi_major_axis: Fixed::ZERO,
            orbit: Orbit::default(),
            orb_min: Fixed::ZERO,
            orb_max: Fixed::ZERO,
        }
    }

    /// Returns true for stars.
    #[inline]
    #[must_use]
    pub fn is_star(&self) -> bool {
        self.body_type.is_star()
    }
}

/// Owns every body of one system.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemBodyTree {
    bodies: Vec<SystemBody>,
}

impl SystemBodyTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body and returns its id.
    pub fn add(&mut self, mut body: SystemBody) -> BodyId {
        debug_assert!(u32::try_from(self.bodies.len()).is_ok(), "body arena overflow");
        #[allow(clippy::cast_possible_truncation)]
        let id = BodyId::new(self.bodies.len() as u32);
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Makes `child` a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either id is not in this tree, or if `child` already has a
    /// parent.
    pub fn attach(&mut self, parent: BodyId, child: BodyId) {
        let child_body = &mut self.bodies[child.index()];
        assert!(
            child_body.parent.is_none(),
            "body {} already has a parent",
            child_body.name
        );
        child_body.parent = Some(parent);
        self.bodies[parent.index()].children.push(child);
    }

    /// Returns a body.
    #[inline]
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&SystemBody> {
        self.bodies.get(id.index())
    }

    /// Returns a body mutably.
    #[inline]
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut SystemBody> {
        self.bodies.get_mut(id.index())
    }

    /// Borrows two distinct bodies mutably.
    ///
    /// Returns `None` if the ids are equal or either is out of range.
    pub fn pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<(&mut SystemBody, &mut SystemBody)> {
        let (ia, ib) = (a.index(), b.index());
        if ia == ib || ia >= self.bodies.len() || ib >= self.bodies.len() {
            return None;
        }
        if ia < ib {
            let (low, high) = self.bodies.split_at_mut(ib);
            Some((&mut low[ia], &mut high[0]))
        } else {
            let (low, high) = self.bodies.split_at_mut(ia);
            Some((&mut high[0], &mut low[ib]))
        }
    }

    /// Children of a body, in attachment order.
    #[must_use]
    pub fn children(&self, id: BodyId) -> &[BodyId] {
        self.get(id).map_or(&[], |body| body.children.as_slice())
    }

    /// Parent of a body.
    #[must_use]
    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.get(id).and_then(|body| body.parent)
    }

    /// Number of edges between a body and the root.
    #[must_use]
    pub fn depth(&self, id: BodyId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// All stars, in creation order.
    pub fn stars(&self) -> impl Iterator<Item = &SystemBody> {
        self.bodies.iter().filter(|body| body.is_star())
    }

    /// All gravpoints, in creation order.
    pub fn gravpoints(&self) -> impl Iterator<Item = &SystemBody> {
        self.bodies
            .iter()
            .filter(|body| body.body_type == BodyType::Gravpoint)
    }

    /// All bodies, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SystemBody> {
        self.bodies.iter()
    }

    /// Number of bodies.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if the tree has no bodies.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Index<BodyId> for SystemBodyTree {
    type Output = SystemBody;

    #[inline]
    fn index(&self, id: BodyId) -> &SystemBody {
        &self.bodies[id.index()]
    }
}

impl IndexMut<BodyId> for SystemBodyTree {
    #[inline]
    fn index_mut(&mut self, id: BodyId) -> &mut SystemBody {
        &mut self.bodies[id.index()]
    }
}
