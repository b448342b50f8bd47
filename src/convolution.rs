//! Linear convolution through real-to-complex FFTs.
//!
//! Both inputs are zero-padded to the smallest power of two that can hold the whole linear
//! convolution, so that the circular convolution computed by the transform never wraps around.
//! Results are rounded to the nearest integer, with ties rounded away from zero.

use std::ops::Not;

use fftw::{
    array::{AlignedAllocable, AlignedVec},
    plan::{C2RPlan, C2RPlan32, C2RPlan64, R2CPlan, R2CPlan32, R2CPlan64},
    types::Flag,
};
use num_complex::Complex;
use num_traits::{Float, FromPrimitive, ToPrimitive};
use tracing::trace;

use crate::{Error, InvalidInput, PreconditionViolation, Sample};

/// A float type with FFTW real transforms available.
pub trait TransformFloat: Float + FromPrimitive + AlignedAllocable {
    type ForwardPlan: R2CPlan<Real = Self, Complex = Complex<Self>>;
    type BackwardPlan: C2RPlan<Real = Self, Complex = Complex<Self>>;
}

impl TransformFloat for f32 {
    type ForwardPlan = R2CPlan32;
    type BackwardPlan = C2RPlan32;
}

impl TransformFloat for f64 {
    type ForwardPlan = R2CPlan64;
    type BackwardPlan = C2RPlan64;
}

/// Convolution engine planned for a fixed pair of input lengths.
///
/// Plans and aligned buffers are allocated once, so the same instance can be applied to many
/// pairs of sequences with the same lengths.
pub struct Convolver<T = Sample>
where
    T: TransformFloat,
    Complex<T>: AlignedAllocable,
{
    lens: [usize; 2],
    size: usize,
    scale_factor: T,
    forward: T::ForwardPlan,
    backward: T::BackwardPlan,
    lhs: AlignedVec<T>,
    rhs: AlignedVec<T>,
    lhs_spectrum: AlignedVec<Complex<T>>,
    rhs_spectrum: AlignedVec<Complex<T>>,
    output: AlignedVec<T>,
}

impl<T> Convolver<T>
where
    T: TransformFloat,
    Complex<T>: AlignedAllocable,
{
    pub fn new(lhs_len: usize, rhs_len: usize) -> Result<Self, Error> {
        if lhs_len == 0 || rhs_len == 0 {
            return Err(InvalidInput::EmptySequence.into());
        }

        let size = transform_size(lhs_len + rhs_len - 1);
        let spectrum_len = size / 2 + 1;
        let forward: T::ForwardPlan = R2CPlan::aligned(&[size], Flag::ESTIMATE)?;
        let backward: T::BackwardPlan = C2RPlan::aligned(&[size], Flag::ESTIMATE)?;
        trace!(lhs_len, rhs_len, size, "created convolution plans");

        let scale_factor = T::from_usize(size)
            .ok_or(PreconditionViolation::UnrepresentableSize(size))?
            .recip();
        let lhs = AlignedVec::new(size);
        let rhs = lhs.clone();
        let output = lhs.clone();
        let lhs_spectrum = AlignedVec::new(spectrum_len);
        let rhs_spectrum = lhs_spectrum.clone();

        Ok(Self {
            lens: [lhs_len, rhs_len],
            size,
            scale_factor,
            forward,
            backward,
            lhs,
            rhs,
            lhs_spectrum,
            rhs_spectrum,
            output,
        })
    }

    #[inline]
    pub fn output_len(&self) -> usize {
        self.lens[0] + self.lens[1] - 1
    }

    #[inline]
    pub fn transform_size(&self) -> usize {
        self.size
    }

    pub fn convolve(&mut self, lhs: &[T], rhs: &[T]) -> Result<Vec<i64>, Error> {
        let actual = [lhs.len(), rhs.len()];
        if actual != self.lens {
            return Err(PreconditionViolation::LengthMismatch {
                expected: self.lens,
                actual,
            }
            .into());
        }
        check_finite(lhs)?;
        check_finite(rhs)?;

        load_padded(&mut self.lhs, lhs);
        load_padded(&mut self.rhs, rhs);
        self.forward.r2c(&mut self.lhs, &mut self.lhs_spectrum)?;
        self.forward.r2c(&mut self.rhs, &mut self.rhs_spectrum)?;

        self.lhs_spectrum
            .iter_mut()
            .zip(&*self.rhs_spectrum)
            .for_each(|(x, &y)| *x = *x * y);

        // The backward transform clobbers its input, the product is not needed afterwards
        self.backward.c2r(&mut self.lhs_spectrum, &mut self.output)?;

        let scale_factor = self.scale_factor;
        self.output
            .iter()
            .take(self.output_len())
            .enumerate()
            .map(|(index, &value)| {
                round_to_i64(value * scale_factor)
                    .ok_or(Error::from(PreconditionViolation::MagnitudeOverflow(index)))
            })
            .collect()
    }
}

/// Linear convolution of `lhs` and `rhs`, rounded to integers.
///
/// The result has length `lhs.len() + rhs.len() - 1`. Fails if any of the sequences is empty.
pub fn convolve<T>(lhs: &[T], rhs: &[T]) -> Result<Vec<i64>, Error>
where
    T: TransformFloat,
    Complex<T>: AlignedAllocable,
{
    Convolver::new(lhs.len(), rhs.len())?.convolve(lhs, rhs)
}

/// Smallest power of two not lower than `len`.
#[inline]
pub fn transform_size(len: usize) -> usize {
    len.max(1).next_power_of_two()
}

#[inline]
fn round_to_i64<T: Float>(value: T) -> Option<i64> {
    value.round().to_i64()
}

fn load_padded<T: Float>(buffer: &mut [T], data: &[T]) {
    let (head, padding) = buffer.split_at_mut(data.len());
    head.copy_from_slice(data);
    padding.fill(T::zero());
}

fn check_finite<T: Float>(data: &[T]) -> Result<(), InvalidInput> {
    match data.iter().position(|x| x.is_finite().not()) {
        Some(index) => Err(InvalidInput::NonFiniteValue(index)),
        None => Ok(()),
    }
}
