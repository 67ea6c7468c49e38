use log::{debug, error, info};

use crate::core::flames::errors::{FlameError, InitFailure, XFormSlot};
use crate::core::flames::flame_params::FlameParams;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::xform::XForm;
use crate::core::palette::factory::palette_factory;
use crate::core::palette::kinds::PaletteKind;
use crate::core::palette::rgb_palette::RgbPalette;

/// A complete flame: parameters, the selectable XForms, the final XForms
/// applied to every iterate, and the palette.
#[derive(Debug, Clone)]
pub struct Flame {
    params: FlameParams,
    xforms: Vec<XForm>,
    final_xforms: Vec<XForm>,
    palette: RgbPalette,
    prepared_threads: Option<usize>,
}

impl Default for Flame {
    fn default() -> Self {
        Self::new(FlameParams::default(), palette_factory(PaletteKind::default()))
    }
}

impl Flame {
    #[must_use]
    pub fn new(params: FlameParams, palette: RgbPalette) -> Self {
        Self {
            params,
            xforms: Vec::new(),
            final_xforms: Vec::new(),
            palette,
            prepared_threads: None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &FlameParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut FlameParams {
        &mut self.params
    }

    #[must_use]
    pub fn palette(&self) -> &RgbPalette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: RgbPalette) {
        self.palette = palette;
    }

    #[must_use]
    pub fn xforms(&self) -> &[XForm] {
        &self.xforms
    }

    #[must_use]
    pub fn final_xforms(&self) -> &[XForm] {
        &self.final_xforms
    }

    pub fn add_xform(&mut self, xform: XForm) {
        self.invalidate();
        self.xforms.push(xform);
    }

    pub fn add_final_xform(&mut self, xform: XForm) {
        self.invalidate();
        self.final_xforms.push(xform);
    }

    /// Mutable access drops the prepared state.
    pub fn xform_mut(&mut self, idx: usize) -> Option<&mut XForm> {
        self.invalidate();
        self.xforms.get_mut(idx)
    }

    /// Mutable access drops the prepared state.
    pub fn final_xform_mut(&mut self, idx: usize) -> Option<&mut XForm> {
        self.invalidate();
        self.final_xforms.get_mut(idx)
    }

    #[must_use]
    pub fn is_prepared(&self) -> bool {
        self.prepared_threads.is_some()
    }

    /// Lane count of the last successful `prepare_flame`, if still valid.
    #[must_use]
    pub fn prepared_thread_count(&self) -> Option<usize> {
        self.prepared_threads
    }

    #[must_use]
    pub fn is_prepared_for(&self, thread_count: usize) -> bool {
        self.prepared_threads == Some(thread_count)
    }

    fn invalidate(&mut self) {
        if self.prepared_threads.take().is_some() {
            debug!("Flame modified, prepared state dropped");
        }
    }

    /// Readies the flame for a render pass on `thread_count` lanes: clones
    /// and initialises one variation set per lane, then rebuilds every
    /// transition table.
    ///
    /// `ctx` is used for the `init` calls; its thread index is moved through
    /// each lane and restored afterwards. All init failures are collected
    /// before returning.
    pub fn prepare_flame(
        &mut self,
        ctx: &mut TransformationContext,
        thread_count: usize,
    ) -> Result<(), FlameError> {
        self.invalidate();

        if thread_count == 0 {
            return Err(FlameError::InvalidThreadCount { thread_count });
        }
        if self.xforms.is_empty() {
            return Err(FlameError::NoXForms);
        }
        if let Some((xform_idx, xform)) = self
            .xforms
            .iter()
            .enumerate()
            .find(|(_, xform)| !(xform.weight() >= 0.0 && xform.weight().is_finite()))
        {
            return Err(FlameError::InvalidWeight {
                xform_idx,
                weight: xform.weight(),
            });
        }

        let original_thread_idx = ctx.thread_idx();
        let mut failures = Vec::new();

        let main = self
            .xforms
            .iter_mut()
            .enumerate()
            .map(|(idx, xform)| (XFormSlot::Main(idx), xform));
        let finals = self
            .final_xforms
            .iter_mut()
            .enumerate()
            .map(|(idx, xform)| (XFormSlot::Final(idx), xform));

        for (slot, xform) in main.chain(finals) {
            xform.prepare_lanes(thread_count);
            for thread_idx in 0..thread_count {
                ctx.set_thread_idx(thread_idx);
                failures.extend(xform.init_lane(ctx).into_iter().map(
                    |(variation_idx, source)| InitFailure {
                        thread_idx,
                        xform: slot,
                        variation_idx,
                        source,
                    },
                ));
            }
        }

        ctx.set_thread_idx(original_thread_idx);

        if !failures.is_empty() {
            for failure in &failures {
                error!("Variation init failed: {}", failure);
            }
            for xform in self.xforms.iter_mut().chain(self.final_xforms.iter_mut()) {
                xform.clear_lanes();
            }
            return Err(FlameError::VariationInit(failures));
        }

        let weights: Vec<f64> = self.xforms.iter().map(XForm::weight).collect();
        for xform in self.xforms.iter_mut() {
            let tp: Vec<f64> = weights
                .iter()
                .enumerate()
                .map(|(idx, weight)| weight * xform.modified_weight(idx))
                .collect();
            xform.rebuild_transition_table(&tp);
        }

        let terminal = self
            .xforms
            .iter()
            .filter(|xform| xform.transition_table().is_terminal())
            .count();
        info!(
            "Prepared flame: {} xforms, {} final xforms, {} threads, {} terminal tables",
            self.xforms.len(),
            self.final_xforms.len(),
            thread_count,
            terminal
        );

        self.prepared_threads = Some(thread_count);
        Ok(())
    }
}
