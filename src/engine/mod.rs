//! The room engine: owns the GPU context, renderer, camera and input state
//! and advances them one frame at a time.

mod construction;

use crate::{
    camera::CameraController,
    error::RoomviewError,
    gpu::render_context::RenderContext,
    input::{InputEvent, InputProcessor},
    options::Options,
    renderer::SceneRenderer,
    scene::Scene,
    util::frame_timing::FrameTiming,
};

/// Windowing-agnostic core of the viewer.
///
/// The host feeds it [`InputEvent`]s as they arrive, then once per redraw
/// calls [`update`](Self::update) followed by [`render`](Self::render).
pub struct RoomEngine {
    context: RenderContext,
    renderer: SceneRenderer,
    scene: Scene,
    camera: CameraController,
    input: InputProcessor,
    options: Options,
    /// Session clock and FPS counter.
    pub frame_timing: FrameTiming,
}

impl RoomEngine {
    /// Create the GPU context, load textures and build the bathroom scene.
    ///
    /// Missing textures are logged and replaced by white; only GPU
    /// initialization failures are fatal.
    ///
    /// # Errors
    ///
    /// Returns [`RoomviewError::Gpu`] if the surface, adapter or device
    /// cannot be created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, RoomviewError> {
        let context = RenderContext::new(window, size).await?;

        let scene = Scene::bathroom();
        let images = construction::load_scene_textures(&scene, &options.textures);
        let renderer = SceneRenderer::new(&context, &scene, &images);
        log::info!(
            "scene ready: {} objects, {}/{} textures loaded",
            scene.objects().len(),
            images.len(),
            scene.textures_used().len()
        );

        Ok(Self {
            context,
            renderer,
            camera: CameraController::new(&options.camera),
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            frame_timing: FrameTiming::new(options.window.target_fps),
            scene,
            options,
        })
    }

    /// Feed one input event. Returns `true` if it was consumed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input.handle_event(event, &mut self.camera)
    }

    /// Advance the camera clock and apply held keys.
    ///
    /// Returns `true` if the quit key is held.
    pub fn update(&mut self) -> bool {
        self.camera.on_frame_tick(self.frame_timing.elapsed_secs());
        let frame = self.input.frame_input();
        self.camera.apply_input(&frame);
        frame.quit
    }

    /// Draw one frame with the current camera.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain image cannot be
    /// acquired. `Lost` and `Outdated` are recovered by calling
    /// [`resize`](Self::resize) with the current window size.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let uniform = self.camera.uniform(self.context.aspect_ratio());
        self.renderer
            .render(&self.context, &uniform, self.options.window.clear_color)?;
        self.frame_timing.end_frame();
        if let Some(fps) = self.frame_timing.fps_report() {
            log::debug!("{fps:.1} fps");
        }
        Ok(())
    }

    /// Reconfigure the surface and depth buffer. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The scene being drawn.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Options the engine was created with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
