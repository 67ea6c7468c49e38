use crate::core::actions::render_flame::camera::Camera;
use crate::core::actions::render_flame::render_flame::RenderFlameError;
use crate::core::data::histogram::Histogram;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::flame::Flame;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::transition_table::TABLE_SIZE;

/// Iterates discarded after the walk is (re)seeded.
pub const INITIAL_ITERATIONS: usize = 20;
/// A non-finite point is only looked for every this many iterates.
pub const RECOVERY_CHECK_INTERVAL: u64 = 100;
/// The walk is reseeded unconditionally every this many iterates.
pub const REFUSE_INTERVAL: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IteratorPhase {
    Warmup,
    Sampling,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IteratorStep {
    /// `point` is the iterate after every final XForm, ready to plot.
    Sample { xform_idx: usize, point: XYZPoint },
    /// The current XForm had no successor; the walk starts over.
    Restarted,
    Done,
}

/// One thread's random walk across the XForms of a prepared flame.
#[derive(Debug)]
pub struct ChaosIterator<'a> {
    flame: &'a Flame,
    ctx: TransformationContext,
    point: XYZPoint,
    xform_idx: usize,
    phase: IteratorPhase,
    iterations: u64,
    budget: u64,
    restarts: u64,
}

impl<'a> ChaosIterator<'a> {
    /// Fails unless `flame` has been prepared with a lane for
    /// `ctx.thread_idx()`. The context is reset, so draws made before
    /// sampling do not leak into the walk.
    pub fn new(
        flame: &'a Flame,
        mut ctx: TransformationContext,
        budget: u64,
    ) -> Result<Self, RenderFlameError> {
        let thread_count = ctx.thread_idx() + 1;
        match flame.prepared_thread_count() {
            Some(lanes) if lanes >= thread_count => {}
            _ => return Err(RenderFlameError::FlameNotPrepared { thread_count }),
        }
        ctx.reset();

        Ok(Self {
            flame,
            ctx,
            point: XYZPoint::default(),
            xform_idx: 0,
            phase: IteratorPhase::Warmup,
            iterations: 0,
            budget,
            restarts: 0,
        })
    }

    #[must_use]
    pub fn phase(&self) -> IteratorPhase {
        self.phase
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    #[must_use]
    pub fn point(&self) -> &XYZPoint {
        &self.point
    }

    #[must_use]
    pub fn xform_idx(&self) -> usize {
        self.xform_idx
    }

    /// Seeds a random point, applies XForm 0 and discards the first
    /// `INITIAL_ITERATIONS` iterates.
    fn fuse(&mut self) {
        let xforms = self.flame.xforms();

        self.point = XYZPoint::new(
            2.0 * self.ctx.random() - 1.0,
            2.0 * self.ctx.random() - 1.0,
            0.0,
            self.ctx.random(),
        );
        self.xform_idx = 0;
        self.point = xforms[0].transform_point(&mut self.ctx, &self.point);

        for _ in 0..INITIAL_ITERATIONS {
            let slot = self.ctx.random_index(TABLE_SIZE);
            let Some(next) = xforms[self.xform_idx].transition_table().next(slot) else {
                break;
            };
            self.xform_idx = next;
            self.point = xforms[next].transform_point(&mut self.ctx, &self.point);
        }

        self.phase = IteratorPhase::Sampling;
    }

    fn needs_refuse(&self) -> bool {
        if self.iterations == 0 {
            return false;
        }
        self.iterations % REFUSE_INTERVAL == 0
            || (self.iterations % RECOVERY_CHECK_INTERVAL == 0 && !self.point.is_finite())
    }

    /// Advances the walk by one iterate.
    pub fn step(&mut self) -> IteratorStep {
        if self.phase == IteratorPhase::Done {
            return IteratorStep::Done;
        }
        if self.iterations >= self.budget {
            self.phase = IteratorPhase::Done;
            return IteratorStep::Done;
        }
        if self.phase == IteratorPhase::Warmup || self.needs_refuse() {
            self.fuse();
        }

        let flame = self.flame;
        let xforms = flame.xforms();
        let slot = self.ctx.random_index(TABLE_SIZE);
        let next = xforms[self.xform_idx].transition_table().next(slot);
        self.iterations += 1;

        let Some(next) = next else {
            self.restarts += 1;
            self.phase = IteratorPhase::Warmup;
            return IteratorStep::Restarted;
        };

        self.xform_idx = next;
        self.point = xforms[next].transform_point(&mut self.ctx, &self.point);

        let mut plotted = self.point;
        for final_xform in flame.final_xforms() {
            plotted = final_xform.transform_point(&mut self.ctx, &plotted);
        }

        IteratorStep::Sample {
            xform_idx: next,
            point: plotted,
        }
    }

    /// Walks until the budget is spent, plotting every sample the camera
    /// can see.
    pub fn run(&mut self, camera: &Camera, histogram: &mut Histogram) {
        let palette = self.flame.palette();
        loop {
            match self.step() {
                IteratorStep::Sample { point, .. } => {
                    if let Some((x, y)) = camera.project(&point) {
                        histogram.add_sample(x, y, palette.lookup(point.color));
                    }
                }
                IteratorStep::Restarted => {}
                IteratorStep::Done => break,
            }
        }
    }
}
