use std::path::{Path, PathBuf};
use std::sync::Arc;

use loci::environment::AmbientEnvironment;
use loci::input::InputEvent;
use loci::options::Options;
use loci::player::SyncOutcome;
use loci::scene::{Scene, SceneHost};
use loci::util::{FrameClock, WallClock};
use loci::{LociError, PresentationEngine, PresentationMode};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct PresenterApp {
    window: Option<Arc<Window>>,
    engine: PresentationEngine,
    scene: Scene,
    env: AmbientEnvironment,
    clock: WallClock,
    arrived: bool,
}

impl PresenterApp {
    fn new(scene_path: &Path, options_path: Option<&Path>) -> Result<Self, LociError> {
        let options = match options_path {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        let mut scene = Scene::load(scene_path)?;
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, options);
        let _ = engine.start(&mut scene);

        Ok(Self {
            window: None,
            engine,
            scene,
            env: AmbientEnvironment::new(),
            clock: WallClock::default(),
            arrived: false,
        })
    }

    fn update_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let title = match self.engine.current_slide() {
            Some(slide) => format!(
                "loci: {} [{}/{}]",
                self.scene.name(slide).unwrap_or("untitled"),
                self.engine.current_index() + 1,
                self.engine.player().len()
            ),
            None => "loci: no slides".to_owned(),
        };
        window.set_title(&title);
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();
        let report = self.engine.frame(dt, &self.scene, &mut self.env, None);

        if report.index_changed {
            self.arrived = false;
            self.update_title();
        }
        if let SyncOutcome::Synced { arrived: true } = report.outcome {
            if !self.arrived {
                let camera = self.engine.live_camera();
                log::info!(
                    "arrived at slide {} (eye {:?}, skybox {:?})",
                    self.engine.current_index(),
                    camera.pose.position,
                    self.env.skybox().map(|s| s.name().to_owned())
                );
                self.arrived = true;
            }
        }
    }
}

impl ApplicationHandler for PresenterApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title("loci");
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        let size = window.inner_size();
        self.engine.resize(size.width, size.height);
        window.request_redraw();
        self.window = Some(window);
        self.clock.reset();
        self.update_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
            }

            WindowEvent::Focused(false) => {
                self.engine.reset_input();
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                if let Some(input) = InputEvent::from_window_event(&other) {
                    self.engine.handle_event(&input);
                }
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(scene_path) = args.next().map(PathBuf::from) else {
        log::error!("Usage: loci <scene.toml> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next().map(PathBuf::from);

    let mut app = match PresenterApp::new(&scene_path, options_path.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("{}", LociError::Viewer(e.to_string()));
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("{}", LociError::Viewer(e.to_string()));
        std::process::exit(1);
    }
}
