/// How neighbor lookups resolve coordinates past the grid edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Edges wrap around like a torus
    #[default]
    Toroidal,
    /// Anything past the edge counts as dead
    Bounded,
}

impl EdgePolicy {
    /// Resolve `pos + delta` on an axis of length `len`.
    /// Returns `None` when the neighbor falls off a bounded edge
    /// or the axis is empty.
    #[inline]
    pub fn resolve(self, pos: usize, delta: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            EdgePolicy::Toroidal => {
                Some((pos as isize + delta).rem_euclid(len as isize) as usize)
            }
            EdgePolicy::Bounded => pos
                .checked_add_signed(delta)
                .filter(|&p| p < len),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EdgePolicy::Toroidal => "toroidal",
            EdgePolicy::Bounded => "bounded",
        }
    }
}
