use glam::{Vec2, Vec3};

/// A ray with a unit-length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[must_use]
    pub fn down(origin: Vec3) -> Self {
        Self {
            origin,
            direction: Vec3::NEG_Y,
        }
    }

    #[inline]
    #[must_use]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
}

/// Static geometry the ground probe can intersect.
pub trait GroundSurface {
    /// Nearest intersection in front of the ray origin, if any.
    fn intersect(&self, ray: &Ray) -> Option<RayHit>;
}

impl<T: GroundSurface> GroundSurface for [T] {
    fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        self.iter()
            .filter_map(|s| s.intersect(ray))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

impl<T: GroundSurface> GroundSurface for Vec<T> {
    fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        self.as_slice().intersect(ray)
    }
}

/// Double-sided horizontal rectangle centred on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub center: Vec3,
    /// Half size along X and Z.
    pub half_extents: Vec2,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            half_extents: Vec2::splat(50.0),
        }
    }
}

impl GroundPlane {
    #[must_use]
    pub fn new(center: Vec3, width: f32, depth: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width * 0.5, depth * 0.5),
        }
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.center.y
    }

    fn contains_xz(&self, point: Vec3) -> bool {
        let local = point - self.center;
        local.x.abs() <= self.half_extents.x && local.z.abs() <= self.half_extents.y
    }
}

impl GroundSurface for GroundPlane {
    fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let denom = ray.direction.y;
        if denom.abs() < f32::EPSILON {
            return None;
        }

        let distance = (self.center.y - ray.origin.y) / denom;
        if distance < 0.0 {
            return None;
        }

        let point = ray.at(distance);
        self.contains_xz(point).then_some(RayHit { distance, point })
    }
}

/// Result of a successful ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// World-space height of the contact point.
    pub height: f32,
    /// Distance from the probe origin.
    pub distance: f32,
}

/// Single downward ray used for ground contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    /// Offset above the character base the ray starts from, so a character
    /// resting exactly on the surface does not start inside it.
    pub lift: f32,
    pub max_distance: f32,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            lift: 0.1,
            max_distance: 0.15,
        }
    }
}

impl GroundProbe {
    #[must_use]
    pub fn new(lift: f32, max_distance: f32) -> Self {
        Self { lift, max_distance }
    }

    /// Casts straight down from `origin`; `None` means airborne.
    #[must_use]
    pub fn probe<S>(surface: &S, origin: Vec3, max_distance: f32) -> Option<GroundContact>
    where
        S: GroundSurface + ?Sized,
    {
        let hit = surface.intersect(&Ray::down(origin))?;
        (hit.distance <= max_distance).then_some(GroundContact {
            height: hit.point.y,
            distance: hit.distance,
        })
    }

    /// Probes below a character standing at `base`.
    #[must_use]
    pub fn probe_below<S>(&self, surface: &S, base: Vec3) -> Option<GroundContact>
    where
        S: GroundSurface + ?Sized,
    {
        Self::probe(surface, base + Vec3::Y * self.lift, self.max_distance)
    }
}
