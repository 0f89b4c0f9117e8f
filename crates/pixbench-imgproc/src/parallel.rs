use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride for AutoRows must be valid.
    #[error("row stride must be > 0 for AutoRows strategy")]
    InvalidRowStride(usize),

    /// Input and output sizes do not match.
    #[error("source and destination slices must have the same length")]
    SizeMismatch,
}

/// Controls how the pixel kernels are executed.
///
/// Every strategy yields the same output for the same input; they only
/// differ in how the pixel range is partitioned across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// This is the reference behavior of the benchmark.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process every element in parallel.
    ParallelElements,

    /// Use the global Rayon thread pool to process rows (chunks) in parallel.
    ///
    /// You must provide the row stride, which is the image width for the
    /// planar channels.
    AutoRows(usize),

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl std::fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionStrategy::Serial => write!(f, "serial"),
            ExecutionStrategy::ParallelElements => write!(f, "parallel-elements"),
            ExecutionStrategy::AutoRows(stride) => write!(f, "auto-rows({stride})"),
            ExecutionStrategy::Fixed(n) => write!(f, "fixed({n})"),
        }
    }
}

impl ExecutionStrategy {
    /// Check the strategy parameters before any work is scheduled.
    pub fn validate(&self) -> Result<(), ParallelError> {
        match *self {
            ExecutionStrategy::AutoRows(0) => Err(ParallelError::InvalidRowStride(0)),
            ExecutionStrategy::Fixed(0) => Err(ParallelError::InvalidThreadCount(0)),
            _ => Ok(()),
        }
    }
}

// run `f` inside a dedicated pool for `Fixed`, or on the caller's context otherwise.
fn run_with<R, F>(strategy: ExecutionStrategy, f: F) -> Result<R, ParallelError>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    strategy.validate()?;
    match strategy {
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;
            Ok(pool.install(f))
        }
        _ => Ok(f()),
    }
}

/// Apply `op` to every element of `data` in place, passing the linear index.
///
/// # Arguments
///
/// * `data` - The slice to update.
/// * `strategy` - The execution strategy.
/// * `op` - The operation to perform on each (index, element) pair.
pub fn for_each_indexed<T, F>(
    data: &mut [T],
    strategy: ExecutionStrategy,
    op: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    run_with(strategy, || match strategy {
        ExecutionStrategy::Serial => {
            data.iter_mut().enumerate().for_each(|(i, v)| op(i, v));
        }
        ExecutionStrategy::AutoRows(stride) => {
            data.par_chunks_mut(stride)
                .enumerate()
                .for_each(|(row, chunk)| {
                    let offset = row * stride;
                    chunk
                        .iter_mut()
                        .enumerate()
                        .for_each(|(i, v)| op(offset + i, v));
                });
        }
        ExecutionStrategy::ParallelElements | ExecutionStrategy::Fixed(_) => {
            data.par_iter_mut().enumerate().for_each(|(i, v)| op(i, v));
        }
    })
}

/// Apply `op` to every element of `data` in place.
pub fn for_each_in_place<T, F>(
    data: &mut [T],
    strategy: ExecutionStrategy,
    op: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    for_each_indexed(data, strategy, |_, v| op(v))
}

/// Write `op(a[i], b[i], c[i])` into `dst[i]` for every index.
///
/// # Errors
///
/// Returns [`ParallelError::SizeMismatch`] if the slices differ in length.
pub fn zip3_into<T, U, F>(
    a: &[T],
    b: &[T],
    c: &[T],
    dst: &mut [U],
    strategy: ExecutionStrategy,
    op: F,
) -> Result<(), ParallelError>
where
    T: Sync,
    U: Send,
    F: Fn(&T, &T, &T, &mut U) + Sync + Send,
{
    if a.len() != dst.len() || b.len() != dst.len() || c.len() != dst.len() {
        return Err(ParallelError::SizeMismatch);
    }

    run_with(strategy, || match strategy {
        ExecutionStrategy::Serial => {
            dst.iter_mut()
                .zip(a.iter().zip(b.iter()).zip(c.iter()))
                .for_each(|(d, ((x, y), z))| op(x, y, z, d));
        }
        ExecutionStrategy::AutoRows(stride) => {
            dst.par_chunks_mut(stride)
                .zip(a.par_chunks(stride))
                .zip(b.par_chunks(stride))
                .zip(c.par_chunks(stride))
                .for_each(|(((d_row, a_row), b_row), c_row)| {
                    d_row
                        .iter_mut()
                        .zip(a_row.iter().zip(b_row.iter()).zip(c_row.iter()))
                        .for_each(|(d, ((x, y), z))| op(x, y, z, d));
                });
        }
        ExecutionStrategy::ParallelElements | ExecutionStrategy::Fixed(_) => {
            dst.par_iter_mut()
                .zip(a.par_iter())
                .zip(b.par_iter())
                .zip(c.par_iter())
                .for_each(|(((d, x), y), z)| op(x, y, z, d));
        }
    })
}

/// Sum `f(x)` over every element of `data` in a `u64` accumulator.
///
/// Partial sums of the parallel strategies are combined as integers, so the
/// result is exact and independent of the partitioning.
pub fn sum_u64<T, F>(data: &[T], strategy: ExecutionStrategy, f: F) -> Result<u64, ParallelError>
where
    T: Sync,
    F: Fn(&T) -> u64 + Sync + Send,
{
    run_with(strategy, || match strategy {
        ExecutionStrategy::Serial => data.iter().map(&f).sum(),
        ExecutionStrategy::AutoRows(stride) => data
            .par_chunks(stride)
            .map(|row| row.iter().map(&f).sum::<u64>())
            .sum(),
        ExecutionStrategy::ParallelElements | ExecutionStrategy::Fixed(_) => {
            data.par_iter().map(&f).sum()
        }
    })
}
