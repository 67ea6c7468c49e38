use std::error::Error;
use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_config::RenderConfig;
use crate::core::actions::render_flame::render_flame::render_flame_with_seed;
use crate::core::data::hdr_image::HdrImage;
use crate::core::flames::flame::Flame;
use crate::core::flames::transformation_context::TransformationContext;
use crate::storage::write_hdr::WriteHdrError;

/// Prepares and renders flames, handing results to a file presenter.
pub struct FlameController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
    image: Option<HdrImage>,
}

impl<P: FilePresenterPort> FlameController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self {
            presenter,
            config,
            image: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn image(&self) -> Option<&HdrImage> {
        self.image.as_ref()
    }

    pub fn generate(&mut self, flame: &mut Flame) -> Result<(), Box<dyn Error>> {
        let params = flame.params();
        info!("Rendering flame...");
        info!("Image size: {}x{}", params.width, params.height);
        info!(
            "Sample density: {}, oversample: {}",
            params.sample_density, params.spatial_oversample
        );
        info!("Threads: {}", self.config.thread_count);

        let mut ctx = TransformationContext::new(self.config.seed, 0, params.preserve_z);
        flame.prepare_flame(&mut ctx, self.config.thread_count)?;

        let image = render_flame_with_seed(flame, self.config.thread_count, self.config.seed)?;
        let (min_lum, max_lum) = image.min_max_lum();
        info!("Luminance range: {:.4} .. {:.4}", min_lum, max_lum);

        self.image = Some(image);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), WriteHdrError> {
        if let Some(image) = &self.image {
            self.presenter.present(image, filepath)?
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flames::variations::funcs::linear::Linear;
    use crate::core::flames::xform::XForm;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct StubPresenter {
        presented: RefCell<Vec<(PathBuf, usize, usize)>>,
    }

    impl FilePresenterPort for StubPresenter {
        fn present(
            &self,
            image: &HdrImage,
            filepath: impl AsRef<Path>,
        ) -> Result<(), WriteHdrError> {
            self.presented.borrow_mut().push((
                filepath.as_ref().to_path_buf(),
                image.width(),
                image.height(),
            ));
            Ok(())
        }
    }

    fn small_flame() -> Flame {
        let mut flame = Flame::default();
        let params = flame.params_mut();
        params.width = 16;
        params.height = 12;
        params.pixels_per_unit = 8.0;
        params.sample_density = 20.0;
        flame.add_xform(XForm::new(1.0).with_variation(0.5, Box::new(Linear)));
        flame
    }

    fn config() -> RenderConfig {
        RenderConfig {
            thread_count: 2,
            seed: Some(17),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let controller = FlameController::new(StubPresenter::default(), config());

        controller.write("unused.hdr").unwrap();

        assert!(controller.presenter.presented.borrow().is_empty());
        assert!(controller.image().is_none());
    }

    #[test]
    fn test_generate_then_write() {
        let mut controller = FlameController::new(StubPresenter::default(), config());
        let mut flame = small_flame();

        controller.generate(&mut flame).unwrap();
        controller.write("out/flame.hdr").unwrap();

        assert!(flame.is_prepared_for(2));
        assert_eq!(
            controller.presenter.presented.borrow().as_slice(),
            &[(PathBuf::from("out/flame.hdr"), 16, 12)]
        );
    }

    #[test]
    fn test_generate_reports_empty_flame() {
        let mut controller = FlameController::new(StubPresenter::default(), config());
        let mut flame = Flame::default();

        let err = controller.generate(&mut flame).unwrap_err();

        assert_eq!(err.to_string(), "Flame has no xforms to iterate");
    }
}
