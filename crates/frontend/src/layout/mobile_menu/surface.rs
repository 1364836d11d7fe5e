//! Seams between the menu controller and its host environment.

use contracts::shared::mobile_menu::MenuState;

/// Page elements the menu state is projected onto.
pub trait MenuSurface {
    /// Write the markers and scroll lock for `state`.
    ///
    /// Must be a pure projection: the result depends only on `state`, never on
    /// what the page currently shows.
    fn apply(&self, state: MenuState);

    /// Current viewport width in logical pixels, NaN when unknown.
    fn viewport_width(&self) -> f64;
}

/// Deferred one-shot callbacks.
pub trait TimerHost {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}
