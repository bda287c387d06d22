use crate::error::{Error, Result};
use crate::gfx::math::{self, Matrix4};

/// Two parallel composition chains: model-view and model-view-projection.
///
/// View operations (translate, rotate) are folded into both chains while
/// projection operations (ortho, frustum) only reach the MVP chain, so `mv`
/// always holds the camera/object transform alone. Each push multiplies the
/// new matrix on the right of the current top, which means the last pushed
/// operation is the first one applied to model-space geometry.
///
/// The stack is a plain value owned by whoever renders the frame. Build it,
/// push, read the tops, then reset or drop it.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    mvp: Vec<Matrix4>,
    mv: Vec<Matrix4>,
    /// One entry per push, `true` when that push also extended `mv`.
    history: Vec<bool>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            mvp: vec![math::identity()],
            mv: vec![math::identity()],
            history: Vec::new(),
        }
    }

    /// Clear both chains back to a single identity matrix each.
    pub fn reset(&mut self) -> &mut Self {
        self.mvp.clear();
        self.mv.clear();
        self.history.clear();
        self.mvp.push(math::identity());
        self.mv.push(math::identity());
        self
    }

    pub fn ortho(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        self.push_projection(math::ortho(left, right, bottom, top, near, far))
    }

    pub fn frustum(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        self.push_projection(math::frustum(left, right, bottom, top, near, far))
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.push_view(math::translate(x, y, z))
    }

    /// Rotate by `angle` degrees around `(x, y, z)`; the axis must be unit length.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> &mut Self {
        self.push_view(math::rotate(angle, x, y, z))
    }

    /// Fold `m` into the MVP chain only.
    pub fn push_projection(&mut self, m: Matrix4) -> &mut Self {
        let top = Self::top_of(&self.mvp);
        self.mvp.push(math::multiply(top, m));
        self.history.push(false);
        log::trace!("pushed projection, depth {}", self.history.len());
        self
    }

    /// Fold `m` into both chains.
    pub fn push_view(&mut self, m: Matrix4) -> &mut Self {
        let top_mvp = Self::top_of(&self.mvp);
        let top_mv = Self::top_of(&self.mv);
        self.mvp.push(math::multiply(top_mvp, m));
        self.mv.push(math::multiply(top_mv, m));
        self.history.push(true);
        log::trace!("pushed view transform, depth {}", self.history.len());
        self
    }

    /// Undo the most recent push, restoring the previous composition.
    pub fn pop(&mut self) -> Result<&mut Self> {
        let touched_mv = self.history.pop().ok_or(Error::EmptyStack)?;
        self.mvp.pop();
        if touched_mv {
            self.mv.pop();
        }
        Ok(self)
    }

    pub fn top_mvp(&self) -> Result<Matrix4> {
        self.mvp.last().copied().ok_or(Error::EmptyStack)
    }

    pub fn top_mv(&self) -> Result<Matrix4> {
        self.mv.last().copied().ok_or(Error::EmptyStack)
    }

    /// Number of pushes since the last reset.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    // Both chains are seeded by `new`/`reset` and `pop` never removes the seed.
    fn top_of(chain: &[Matrix4]) -> Matrix4 {
        chain.last().copied().unwrap_or_else(math::identity)
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::math::{frustum, identity, multiply, rotate, translate};

    #[test]
    fn test_new_stack_is_identity() {
        let stack = MatrixStack::new();
        assert_eq!(stack.top_mvp().unwrap(), identity());
        assert_eq!(stack.top_mv().unwrap(), identity());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_projection_does_not_reach_model_view() {
        let mut stack = MatrixStack::new();
        stack
            .frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0)
            .translate(0.0, 0.0, -5.0);

        assert_eq!(stack.top_mv().unwrap(), translate(0.0, 0.0, -5.0));
        assert_eq!(
            stack.top_mvp().unwrap(),
            multiply(frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0), translate(0.0, 0.0, -5.0))
        );
    }

    #[test]
    fn test_composition_order() {
        let mut stack = MatrixStack::new();
        stack
            .translate(0.0, 0.0, -5.0)
            .rotate(30.0, 1.0, 0.0, 0.0)
            .rotate(60.0, 0.0, 1.0, 0.0);

        let expected = multiply(
            multiply(translate(0.0, 0.0, -5.0), rotate(30.0, 1.0, 0.0, 0.0)),
            rotate(60.0, 0.0, 1.0, 0.0),
        );
        assert_eq!(stack.top_mv().unwrap(), expected);
        assert_eq!(stack.top_mvp().unwrap(), expected);
    }

    #[test]
    fn test_pop_restores_previous_state() {
        let mut stack = MatrixStack::new();
        stack.frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0).translate(1.0, 2.0, 3.0);
        let mvp_before = stack.top_mvp().unwrap();
        let mv_before = stack.top_mv().unwrap();

        stack.rotate(45.0, 0.0, 0.0, 1.0);
        assert_ne!(stack.top_mv().unwrap(), mv_before);

        stack.pop().unwrap();
        assert_eq!(stack.top_mvp().unwrap(), mvp_before);
        assert_eq!(stack.top_mv().unwrap(), mv_before);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_pop_projection_leaves_model_view() {
        let mut stack = MatrixStack::new();
        stack.translate(0.0, 0.0, -3.0).ortho(-1.0, 1.0, -1.0, 1.0, 1.0, 5.0);
        stack.pop().unwrap();

        assert_eq!(stack.top_mv().unwrap(), translate(0.0, 0.0, -3.0));
        assert_eq!(stack.top_mvp().unwrap(), translate(0.0, 0.0, -3.0));
    }

    #[test]
    fn test_pop_past_seed_fails() {
        let mut stack = MatrixStack::new();
        stack.translate(1.0, 0.0, 0.0);
        assert!(stack.pop().is_ok());
        assert!(matches!(stack.pop(), Err(Error::EmptyStack)));
        assert_eq!(stack.top_mvp().unwrap(), identity());
    }

    #[test]
    fn test_reset() {
        let mut stack = MatrixStack::new();
        stack.frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0).translate(0.0, 0.0, -5.0);
        stack.reset();

        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.top_mvp().unwrap(), identity());
        assert_eq!(stack.top_mv().unwrap(), identity());
    }
}
