//! Sliding-window median filter engine.
//!
//! Overview
//! - Validates geometry once, then dispatches: a 1×1 window degenerates to
//!   a buffer copy, a 3×3 window takes the median-of-9 network, everything
//!   else runs the double-heap sliding engine.
//! - `BorderMode::Filter` composes iteratively: build the parity-halo
//!   scratch image, run the CROP-mode engine over it, drop the scratch.
//!   The enlarged CROP output is exactly the full-size result, so border
//!   handling never needs its own engine path.
//! - COPY and ZERO are wrapper passes over the border frame after the
//!   interior run; NOP leaves the frame untouched.
//!
//! Modules
//! - [`params`] – window geometry and border policy.
//! - [`error`] – geometry validation failures.
//! - `dheap` / `columns` / `driver` – the general engine.
//! - `fast3` – the 3×3 network, `halo` – the FILTER scratch builder.
//!
//! The engine is sequential and self-contained: each call allocates its
//! own transient working set (heaps, inverse map, column caches, FILTER
//! scratch) and drops it on return, so independent calls on independent
//! buffers are thread-safe.

mod columns;
mod dheap;
mod driver;
mod fast3;
mod halo;
mod select;

pub mod error;
pub mod params;

pub use error::FilterError;
pub use params::{BorderMode, MedianParams};

use crate::image::{Image, ImageView, ImageViewMut, Pixel};
use driver::SlideOutput;
use log::debug;

/// Filter `input` into a freshly allocated output image.
pub fn median_filter<T: Pixel>(
    input: &Image<T>,
    params: &MedianParams,
) -> Result<Image<T>, FilterError> {
    let (ow, oh) = validate(input, params)?;
    let mut out = Image::new(ow, oh);
    run(input, &mut out, params);
    Ok(out)
}

/// Filter `input` into a caller-owned, pre-allocated output image. The
/// output must match [`MedianParams::output_dims`]; under
/// `BorderMode::Nop` its border cells are left exactly as provided.
pub fn median_filter_into<T: Pixel>(
    input: &Image<T>,
    output: &mut Image<T>,
    params: &MedianParams,
) -> Result<(), FilterError> {
    let (ow, oh) = validate(input, params)?;
    if output.w != ow || output.h != oh {
        return Err(FilterError::OutputSizeMismatch {
            got_w: output.w,
            got_h: output.h,
            want_w: ow,
            want_h: oh,
        });
    }
    run(input, output, params);
    Ok(())
}

fn validate<T: Pixel>(
    input: &Image<T>,
    params: &MedianParams,
) -> Result<(usize, usize), FilterError> {
    if input.w == 0 || input.h == 0 {
        return Err(FilterError::EmptyImage);
    }
    let wx = params.window_width();
    let wy = params.window_height();
    if input.w < wx || input.h < wy {
        return Err(FilterError::WindowTooLarge {
            wx,
            wy,
            w: input.w,
            h: input.h,
        });
    }
    Ok(params.output_dims(input.w, input.h))
}

/// Dispatch after validation.
fn run<T: Pixel>(input: &Image<T>, out: &mut Image<T>, params: &MedianParams) {
    let MedianParams { rx, ry, border } = *params;
    debug!(
        "median filter: {}x{} window={}x{} border={:?}",
        input.w,
        input.h,
        2 * rx + 1,
        2 * ry + 1,
        border
    );

    if rx == 0 && ry == 0 {
        // A one-pixel window's median is the pixel itself.
        out.data.copy_from_slice(&input.data);
        return;
    }

    if rx == 1 && ry == 1 {
        fast3::run(input, out, border);
    } else {
        general(input, out, rx, ry, border);
    }

    match border {
        BorderMode::Copy => copy_border(input, out, rx, ry),
        BorderMode::Zero => zero_border(out, rx, ry),
        _ => {}
    }
}

/// General engine for windows other than 1×1 and 3×3.
fn general<T: Pixel>(input: &Image<T>, out: &mut Image<T>, rx: usize, ry: usize, border: BorderMode) {
    match border {
        BorderMode::Crop => driver::slide(
            &input.data,
            input.w,
            input.h,
            rx,
            ry,
            SlideOutput {
                data: &mut out.data,
                stride: out.stride,
                x0: 0,
                y0: 0,
            },
        ),
        BorderMode::Filter => {
            let scratch = halo::build(input, rx, ry);
            debug!(
                "filter border: halo scratch {}x{}",
                scratch.w, scratch.h
            );
            driver::slide(
                &scratch.data,
                scratch.w,
                scratch.h,
                rx,
                ry,
                SlideOutput {
                    data: &mut out.data,
                    stride: out.stride,
                    x0: 0,
                    y0: 0,
                },
            );
        }
        BorderMode::Zero | BorderMode::Nop | BorderMode::Copy => driver::slide(
            &input.data,
            input.w,
            input.h,
            rx,
            ry,
            SlideOutput {
                data: &mut out.data,
                stride: out.stride,
                x0: rx,
                y0: ry,
            },
        ),
    }
}

/// COPY border pass: the frame comes verbatim from the input.
fn copy_border<T: Pixel>(input: &Image<T>, out: &mut Image<T>, rx: usize, ry: usize) {
    let w = input.w;
    let h = input.h;
    for y in 0..h {
        if y < ry || y >= h - ry {
            out.row_mut(y).copy_from_slice(input.row(y));
        } else {
            for x in 0..rx {
                out.set(x, y, input.get(x, y));
            }
            for x in w - rx..w {
                out.set(x, y, input.get(x, y));
            }
        }
    }
}

/// ZERO border pass.
fn zero_border<T: Pixel>(out: &mut Image<T>, rx: usize, ry: usize) {
    let w = out.w;
    let h = out.h;
    for (y, row) in out.rows_mut().enumerate() {
        if y < ry || y >= h - ry {
            row.fill(T::ZERO);
        } else {
            row[..rx].fill(T::ZERO);
            row[w - rx..].fill(T::ZERO);
        }
    }
}
