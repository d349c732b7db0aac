//! Broadcasting elementwise operations on dynamic-dimension arrays.
use crate::error::{DistributionError, Result};
use ndarray::{arr0, ArrayD, ArrayViewD, Axis, Dimension, IxDyn};

/// A zero-dimensional array holding `value`.
pub fn scalar(value: f64) -> ArrayD<f64> {
    arr0(value).into_dyn()
}

/// The shape that all of `shapes` broadcast to.
///
/// Shapes are aligned on their trailing axes and length-1 axes stretch to match.
///
/// # Panics
/// If the shapes cannot be broadcast together.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Vec<usize> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];
    for shape in shapes {
        let offset = ndim - shape.len();
        for (target, &len) in out[offset..].iter_mut().zip(shape.iter()) {
            if *target == 1 {
                *target = len;
            } else if len != 1 && len != *target {
                panic!("shapes {:?} cannot be broadcast together", shapes);
            }
        }
    }
    out
}

/// View `array` with the given shape, which must be a broadcast of its own.
///
/// # Panics
/// If `array` does not broadcast to `shape`.
pub fn broadcast_view<'a, A>(array: &'a ArrayD<A>, shape: &[usize]) -> ArrayViewD<'a, A> {
    array
        .broadcast(IxDyn(shape))
        .expect("shape must be a broadcast of the array shape")
}

/// Apply `f` elementwise over the broadcast of `arrays`.
///
/// # Panics
/// If the array shapes cannot be broadcast together.
pub fn map_n<T, F, const N: usize>(arrays: [&ArrayD<f64>; N], mut f: F) -> ArrayD<T>
where
    F: FnMut([f64; N]) -> T,
{
    let shapes: [&[usize]; N] = array_init::array_init(|i| arrays[i].shape());
    let shape = broadcast_shape(&shapes);
    let views: [ArrayViewD<f64>; N] = array_init::array_init(|i| broadcast_view(arrays[i], &shape));
    ArrayD::from_shape_fn(IxDyn(&shape), |index| {
        f(array_init::array_init(|i| views[i][index.slice()]))
    })
}

/// Remove leading length-1 axes until `view` has at most `ndim` axes.
///
/// Leading singleton axes never affect how an array lines up against trailing axes,
/// so this keeps broadcast compatibility with any shape of `ndim` axes.
pub fn trim_leading<'a, A>(mut view: ArrayViewD<'a, A>, ndim: usize) -> ArrayViewD<'a, A> {
    while view.ndim() > ndim && view.len_of(Axis(0)) == 1 {
        view = view.index_axis_move(Axis(0), 0);
    }
    view
}

/// Fill an array of the given shape by calling `f` on the broadcast parameters at each index.
///
/// Parameters may have extra leading length-1 axes beyond the rank of `shape`.
/// Stops calling `f` after its first error and returns that error.
///
/// # Errors
/// [`DistributionError::IncompatibleShape`] if a parameter does not broadcast to `shape`,
/// or the first error returned by `f`.
pub fn try_fill_from<F, const N: usize>(
    params: [&ArrayD<f64>; N],
    shape: &[usize],
    mut f: F,
) -> Result<ArrayD<f64>>
where
    F: FnMut([f64; N]) -> Result<f64>,
{
    let trimmed: [ArrayViewD<f64>; N] =
        array_init::array_init(|i| trim_leading(params[i].view(), shape.len()));
    let views: [ArrayViewD<f64>; N] = array_init::try_array_init(|i| {
        trimmed[i]
            .broadcast(IxDyn(shape))
            .ok_or_else(|| DistributionError::IncompatibleShape {
                from: params[i].shape().to_vec(),
                to: shape.to_vec(),
            })
    })?;

    let mut error = None;
    let out = ArrayD::from_shape_fn(IxDyn(shape), |index| {
        if error.is_some() {
            return f64::NAN;
        }
        match f(array_init::array_init(|i| views[i][index.slice()])) {
            Ok(x) => x,
            Err(err) => {
                error = Some(err);
                f64::NAN
            }
        }
    });
    match error {
        Some(err) => Err(err),
        None => Ok(out),
    }
}

/// Remove all axes of length 1.
pub fn squeeze<A>(mut array: ArrayD<A>) -> ArrayD<A> {
    for axis in (0..array.ndim()).rev() {
        if array.len_of(Axis(axis)) == 1 {
            array = array.index_axis_move(Axis(axis), 0);
        }
    }
    array
}
