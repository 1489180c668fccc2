use thiserror::Error;

/// Geometry failures surfaced by the public entry points. The inner engine
/// itself assumes validated inputs and carries no error channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("input image is empty")]
    EmptyImage,

    #[error("window {wx}x{wy} does not fit a {w}x{h} image")]
    WindowTooLarge {
        wx: usize,
        wy: usize,
        w: usize,
        h: usize,
    },

    #[error("output buffer is {got_w}x{got_h}, expected {want_w}x{want_h}")]
    OutputSizeMismatch {
        got_w: usize,
        got_h: usize,
        want_w: usize,
        want_h: usize,
    },
}
