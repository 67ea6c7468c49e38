use crate::core::data::affine::Affine;
use crate::core::data::xyz_point::XYZPoint;
use crate::core::flames::transition_table::TransitionTable;
use crate::core::flames::transformation_context::TransformationContext;
use crate::core::flames::variations::errors::VariationError;
use crate::core::flames::variations::variation::{
    Variation, VariationPriority, WeightedVariation,
};

const DEFAULT_MODIFIED_WEIGHT: f64 = 1.0;

/// One weighted transform step of the chaos walk.
#[derive(Debug, Clone)]
pub struct XForm {
    weight: f64,
    color: f64,
    color_symmetry: f64,
    affine: Affine,
    post_affine: Option<Affine>,
    variations: Vec<WeightedVariation>,
    modified_weights: Vec<f64>,
    transition_table: TransitionTable,
    lanes: Vec<Vec<WeightedVariation>>,
}

impl Default for XForm {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl XForm {
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Self {
            weight,
            color: 0.0,
            color_symmetry: 0.0,
            affine: Affine::IDENTITY,
            post_affine: None,
            variations: Vec::new(),
            modified_weights: Vec::new(),
            transition_table: TransitionTable::default(),
            lanes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_affine(mut self, affine: Affine) -> Self {
        self.affine = affine;
        self
    }

    #[must_use]
    pub fn with_post_affine(mut self, post_affine: Affine) -> Self {
        self.set_post_affine(Some(post_affine));
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: f64, color_symmetry: f64) -> Self {
        self.color = color;
        self.color_symmetry = color_symmetry;
        self
    }

    #[must_use]
    pub fn with_variation(mut self, amount: f64, func: Box<dyn Variation>) -> Self {
        self.add_variation(amount, func);
        self
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    #[must_use]
    pub fn color(&self) -> f64 {
        self.color
    }

    #[must_use]
    pub fn color_symmetry(&self) -> f64 {
        self.color_symmetry
    }

    pub fn set_color(&mut self, color: f64, color_symmetry: f64) {
        self.color = color;
        self.color_symmetry = color_symmetry;
    }

    #[must_use]
    pub fn affine(&self) -> &Affine {
        &self.affine
    }

    pub fn set_affine(&mut self, affine: Affine) {
        self.affine = affine;
    }

    #[must_use]
    pub fn post_affine(&self) -> Option<&Affine> {
        self.post_affine.as_ref()
    }

    /// An identity post-transform is stored as absent.
    pub fn set_post_affine(&mut self, post_affine: Option<Affine>) {
        self.post_affine = post_affine.filter(|affine| !affine.is_identity());
    }

    pub fn add_variation(&mut self, amount: f64, func: Box<dyn Variation>) {
        self.variations.push(WeightedVariation::new(amount, func));
    }

    #[must_use]
    pub fn variations(&self) -> &[WeightedVariation] {
        &self.variations
    }

    pub fn variation_mut(&mut self, idx: usize) -> Option<&mut WeightedVariation> {
        self.variations.get_mut(idx)
    }

    /// Transition bias towards sibling `idx`; 1 unless set.
    #[must_use]
    pub fn modified_weight(&self, idx: usize) -> f64 {
        self.modified_weights
            .get(idx)
            .copied()
            .unwrap_or(DEFAULT_MODIFIED_WEIGHT)
    }

    pub fn set_modified_weight(&mut self, idx: usize, value: f64) {
        if idx >= self.modified_weights.len() {
            self.modified_weights
                .resize(idx + 1, DEFAULT_MODIFIED_WEIGHT);
        }
        self.modified_weights[idx] = value;
    }

    #[must_use]
    pub fn transition_table(&self) -> &TransitionTable {
        &self.transition_table
    }

    pub(crate) fn rebuild_transition_table(&mut self, tp: &[f64]) {
        self.transition_table = TransitionTable::build(tp);
    }

    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Clones one priority-sorted variation set per lane.
    pub(crate) fn prepare_lanes(&mut self, lane_count: usize) {
        let mut sorted = self.variations.clone();
        sorted.sort_by_key(|v| v.func.priority());

        self.lanes = vec![sorted; lane_count];
    }

    /// Runs `init` on every variation of lane `ctx.thread_idx()`, returning
    /// the failures with their variation index.
    pub(crate) fn init_lane(
        &mut self,
        ctx: &mut TransformationContext,
    ) -> Vec<(usize, VariationError)> {
        let affine = self.affine;
        let Some(lane) = self.lanes.get_mut(ctx.thread_idx()) else {
            return Vec::new();
        };

        lane.iter_mut()
            .enumerate()
            .filter_map(|(idx, v)| v.func.init(ctx, &affine, v.amount).err().map(|e| (idx, e)))
            .collect()
    }

    pub(crate) fn clear_lanes(&mut self) {
        self.lanes.clear();
    }

    /// Maps `src` through the affine transform, the variation stack, the
    /// optional post-transform and the colour blend.
    ///
    /// Runs the initialised variations of lane `ctx.thread_idx()`, which
    /// must have been prepared.
    pub(crate) fn transform_point(
        &self,
        ctx: &mut TransformationContext,
        src: &XYZPoint,
    ) -> XYZPoint {
        let variations = &self.lanes[ctx.thread_idx()];

        let mut affine_tp = XYZPoint::default();
        self.affine.apply(src, &mut affine_tp);
        affine_tp.color = src.color * (1.0 + self.color_symmetry) / 2.0
            + self.color * (1.0 - self.color_symmetry) / 2.0;

        let mut var_tp = XYZPoint::new(0.0, 0.0, 0.0, affine_tp.color);

        for v in variations {
            match v.func.priority() {
                VariationPriority::Pre => {
                    let input = affine_tp;
                    v.func
                        .transform(ctx, &self.affine, &input, &mut affine_tp, v.amount);
                }
                VariationPriority::Normal => {
                    v.func
                        .transform(ctx, &self.affine, &affine_tp, &mut var_tp, v.amount);
                }
                VariationPriority::Post => {
                    let input = var_tp;
                    v.func
                        .transform(ctx, &self.affine, &input, &mut var_tp, v.amount);
                }
            }
        }

        match &self.post_affine {
            Some(post) => {
                let mut dst = XYZPoint::default();
                post.apply(&var_tp, &mut dst);
                dst
            }
            None => var_tp,
        }
    }
}
