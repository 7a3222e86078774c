/// Number of grid steps the virtual canvas has been shifted. Unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanOffset {
    pub gx: i64,
    pub gy: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Right,
    Down,
    Left,
}

impl PanOffset {
    /// Horizontal keys move the canvas origin against the arrow: right
    /// decrements `gx`, left increments it.
    pub fn step(&mut self, direction: PanDirection) {
        match direction {
            PanDirection::Up => self.gy += 1,
            PanDirection::Right => self.gx -= 1,
            PanDirection::Down => self.gy -= 1,
            PanDirection::Left => self.gx += 1,
        }
    }

    /// Pixel position of the buffer origin relative to the unshifted screen.
    pub fn pixel_origin(self, grid_step: i64) -> (i64, i64) {
        (grid_step * self.gx, grid_step * self.gy)
    }
}
