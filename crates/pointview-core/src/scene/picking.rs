/// A point after projection into screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub index: usize,
    pub center: [f32; 2],
    pub radius: f32,
}

impl ProjectedPoint {
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        let dx = pos[0] - self.center[0];
        let dy = pos[1] - self.center[1];
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Index of the topmost point under `pointer`.
///
/// Points are drawn in order, so the last match is the one on top.
pub fn pick(projected: &[ProjectedPoint], pointer: [f32; 2]) -> Option<usize> {
    projected
        .iter()
        .rev()
        .find(|p| p.contains(pointer))
        .map(|p| p.index)
}
