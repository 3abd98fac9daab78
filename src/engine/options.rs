use super::CarouselEngine;
use crate::error::CarouselError;
use crate::options::Options;
use crate::overlay::FadeBand;

impl CarouselEngine {
    /// Re-tune the engine without resetting motion, distortion, or panel
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OptionsParse`] for option sets that would
    /// make the strip degenerate; the previous options stay active.
    ///
    /// The panel count is fixed for the session: a different
    /// `layout.slide_count` is logged and replaced by the current count.
    pub fn set_options(
        &mut self,
        mut options: Options,
    ) -> Result<(), CarouselError> {
        options.validate()?;
        self.motion_model.set_options(options.motion.clone());
        self.distortion_model.set_options(options.distortion.clone());
        self.distortion
            .set_max_distortion(options.distortion.max_distortion);
        self.layout
            .set_options(options.layout.clone(), options.distortion.clone());
        self.overlay.set_band(FadeBand::new(
            &options.overlay,
            options.layout.slide_width,
        ));
        self.camera.apply_options(&options.camera);
        options.layout.slide_count = self.layout.panels().len();
        self.options = options;
        log::debug!("carousel options updated");
        Ok(())
    }
}
