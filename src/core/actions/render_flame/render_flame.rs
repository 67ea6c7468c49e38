use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::core::actions::render_flame::camera::Camera;
use crate::core::actions::render_flame::chaos_iterator::ChaosIterator;
use crate::core::actions::tone_map::tone_map::tone_map;
use crate::core::data::hdr_image::{HdrImage, HdrImageError};
use crate::core::data::histogram::Histogram;
use crate::core::flames::flame::Flame;
use crate::core::flames::transformation_context::TransformationContext;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFlameError {
    FlameNotPrepared { thread_count: usize },
    EmptyImage { width: usize, height: usize },
    HdrImage(HdrImageError),
    WorkerPanicked { thread_idx: usize },
}

impl fmt::Display for RenderFlameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlameNotPrepared { thread_count } => {
                write!(
                    f,
                    "flame has not been prepared for {} render threads",
                    thread_count
                )
            }
            Self::EmptyImage { width, height } => {
                write!(f, "cannot render a {}x{} image", width, height)
            }
            Self::HdrImage(err) => write!(f, "hdr image error: {}", err),
            Self::WorkerPanicked { thread_idx } => {
                write!(f, "render thread {} panicked", thread_idx)
            }
        }
    }
}

impl Error for RenderFlameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::HdrImage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HdrImageError> for RenderFlameError {
    fn from(err: HdrImageError) -> Self {
        Self::HdrImage(err)
    }
}

/// Iterate budget of each thread; the last one takes the remainder.
fn thread_budgets(total: u64, thread_count: usize) -> Vec<u64> {
    let share = total / thread_count as u64;
    let mut budgets = vec![share; thread_count];
    if let Some(last) = budgets.last_mut() {
        *last = total - share * (thread_count as u64 - 1);
    }
    budgets
}

/// Runs the chaos walk on `thread_count` scoped threads and merges their
/// histograms.
pub(crate) fn accumulate_histogram(
    flame: &Flame,
    thread_count: usize,
    seed: Option<u64>,
) -> Result<Histogram, RenderFlameError> {
    if !flame.is_prepared_for(thread_count) {
        return Err(RenderFlameError::FlameNotPrepared { thread_count });
    }

    let params = flame.params();
    let (raster_width, raster_height) = params.raster_size();
    let camera = Camera::new(params, raster_width, raster_height);
    let budgets = thread_budgets(params.sample_count(), thread_count);

    let joined = thread::scope(|scope| {
        let handles = budgets
            .iter()
            .enumerate()
            .map(|(thread_idx, &budget)| {
                let camera = &camera;
                scope.spawn(move || -> Result<Histogram, RenderFlameError> {
                    let ctx = TransformationContext::new(seed, thread_idx, params.preserve_z);
                    let mut histogram = Histogram::new(raster_width, raster_height);
                    let mut iterator = ChaosIterator::new(flame, ctx, budget)?;
                    iterator.run(camera, &mut histogram);
                    debug!(
                        "Thread {} finished {} iterations, {} restarts",
                        thread_idx,
                        iterator.iterations(),
                        iterator.restarts()
                    );
                    Ok(histogram)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    let histograms = joined
        .into_iter()
        .enumerate()
        .map(|(thread_idx, result)| {
            result
                .map_err(|_| RenderFlameError::WorkerPanicked { thread_idx })
                .and_then(|histogram| histogram)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(histograms
        .into_par_iter()
        .reduce_with(Histogram::merged)
        .unwrap_or_else(|| Histogram::new(raster_width, raster_height)))
}

/// Renders a prepared flame with freshly seeded generators.
pub fn render_flame(flame: &Flame, thread_count: usize) -> Result<HdrImage, RenderFlameError> {
    render_flame_with_seed(flame, thread_count, None)
}

/// Renders a prepared flame. With a seed, thread `k` draws from `seed + k`,
/// so a fixed seed and thread count reproduce the same image.
pub fn render_flame_with_seed(
    flame: &Flame,
    thread_count: usize,
    seed: Option<u64>,
) -> Result<HdrImage, RenderFlameError> {
    let params = flame.params();
    if params.width == 0 || params.height == 0 {
        return Err(RenderFlameError::EmptyImage {
            width: params.width,
            height: params.height,
        });
    }
    if params.spatial_oversample == 0 {
        return Err(HdrImageError::InvalidOversampleFactor {
            factor: 0,
            width: params.width,
            height: params.height,
        }
        .into());
    }

    let start = Instant::now();
    let histogram = accumulate_histogram(flame, thread_count, seed)?;
    info!(
        "Accumulated {} samples on {} threads in {:.2?}",
        histogram.total_count(),
        thread_count,
        start.elapsed()
    );

    let mut image = HdrImage::new(histogram.width(), histogram.height());
    let background = params.background;
    image.fill_background(background.r, background.g, background.b);
    tone_map(&histogram, params, &mut image)?;
    image.sample_down(params.spatial_oversample)?;

    info!(
        "Rendered {}x{} image in {:.2?}",
        image.width(),
        image.height(),
        start.elapsed()
    );

    Ok(image)
}
