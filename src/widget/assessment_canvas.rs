//! AssessmentCanvas: one joint count widget
//!
//! This widget handles:
//! - Drawing the body diagram, joint markers and the running count
//! - Click events toggling every joint under the pointer
//! - Pointer moves showing the name of the first joint under the pointer
//!
//! Pointer handling stays off until the background has been drawn once, so a
//! click can never change state without a visible marker update.

use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::assets::BackgroundImage;
use crate::audio::{CueBank, CuePlayer};
use crate::config::MarkerPalette;
use crate::domain::{
    AssessmentState, AssessmentType, JointId, LocationModel, Locations, Point, joint,
};
use crate::error::Result;
use crate::render::geometry::status;
use crate::render::{PixmapSurface, RenderEngine, Surface, count_label};

/// Raw pointer input in page coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button click at position
    Click(f32, f32),
    /// Pointer moved to position
    Move(f32, f32),
}

/// Construction options for an assessment canvas
#[derive(Clone, Debug)]
pub struct CanvasOptions {
    /// Which joint count this widget records
    pub assessment_type: AssessmentType,
    /// Marker colors
    pub palette: MarkerPalette,
    /// Surface size relative to the body diagram image
    pub scale: f64,
    /// Joints selected when the widget opens
    pub preselected: Vec<JointId>,
    /// Surface position on the page (left, top)
    pub offset: (f32, f32),
}

impl CanvasOptions {
    pub fn new(assessment_type: AssessmentType) -> Self {
        Self {
            assessment_type,
            palette: MarkerPalette::default(),
            scale: 0.5,
            preselected: Vec::new(),
            offset: (0.0, 0.0),
        }
    }
}

/// Interactive joint count widget
pub struct AssessmentCanvas<S: Surface = PixmapSurface, R: RngCore = ChaCha8Rng> {
    surface: S,
    engine: RenderEngine,
    state: AssessmentState,
    location_model: LocationModel,
    locations: Arc<Locations>,
    offset: (f32, f32),
    cues: CueBank<R>,
    player: Box<dyn CuePlayer>,
    background: Option<RgbaImage>,
    count_text: String,
    hover_text: String,
}

impl<S: Surface, R: RngCore> AssessmentCanvas<S, R> {
    /// Create a widget; nothing is drawn until a background is rendered
    pub fn new(
        options: CanvasOptions,
        surface: S,
        cues: CueBank<R>,
        player: Box<dyn CuePlayer>,
    ) -> Result<Self> {
        let state = AssessmentState::create(options.assessment_type, &options.preselected)?;
        let mut location_model = LocationModel::new();
        let locations = location_model.locations(options.scale)?;
        let count_text = count_label(
            state.assessment_type(),
            state.selected_count(),
            state.total_count(),
        );

        Ok(Self {
            surface,
            engine: RenderEngine::new(options.palette, options.scale),
            state,
            location_model,
            locations,
            offset: options.offset,
            cues,
            player,
            background: None,
            count_text,
            hover_text: String::new(),
        })
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Whether pointer events are being handled
    pub fn is_active(&self) -> bool {
        self.background.is_some()
    }

    /// Text currently shown in the count box
    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    /// Text currently shown in the hover box (empty when cleared)
    pub fn hover_text(&self) -> &str {
        &self.hover_text
    }

    /// Load the background image, then draw the widget and enable input
    pub async fn load_and_render(&mut self, path: &Path) -> Result<()> {
        let image = BackgroundImage::load(path).await.inspect_err(|e| {
            log::error!("Widget stays inactive: {}", e);
        })?;
        self.render(image.rgba)
    }

    /// Draw the background, every marker and the count, then enable input
    pub fn render(&mut self, image: RgbaImage) -> Result<()> {
        self.engine.render_background(&mut self.surface, &image);
        self.background = Some(image);
        self.redraw_markers()?;
        self.engine
            .draw_status_line(&mut self.surface, &self.count_text, status::COUNT_BOX);
        log::debug!(
            "{} widget rendered: {}",
            self.state.assessment_type(),
            self.count_text
        );
        Ok(())
    }

    /// Switch to a new scale, redrawing if a background is present
    pub fn rescale(&mut self, scale: f64) -> Result<()> {
        self.locations = self.location_model.locations(scale)?;
        self.engine = RenderEngine::new(*self.engine.palette(), scale);
        if let Some(image) = self.background.take() {
            self.render(image)?;
        }
        Ok(())
    }

    fn redraw_markers(&mut self) -> Result<()> {
        for joint in self.state.joints() {
            let location = self.locations.get(joint.id)?;
            self.engine
                .draw_joint(&mut self.surface, location, joint.selected);
        }
        Ok(())
    }

    /// Dispatch a page-coordinate event
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<()> {
        let (left, top) = self.offset;
        match event {
            PointerEvent::Click(x, y) => {
                self.handle_click(Point::new(x, y).relative_to(left, top))?;
            }
            PointerEvent::Move(x, y) => {
                self.handle_pointer_move(Point::new(x, y).relative_to(left, top));
            }
        }
        Ok(())
    }

    /// Joints whose marker contains `point`, in catalog order
    fn hits(&self, point: Point) -> impl Iterator<Item = JointId> + '_ {
        self.state
            .joints()
            .iter()
            .map(|j| j.id)
            .filter(move |id| {
                self.locations
                    .get(*id)
                    .is_ok_and(|location| location.contains_point(point))
            })
    }

    /// Toggle every joint under `point` and return the toggled ids
    pub fn handle_click(&mut self, point: Point) -> Result<Vec<JointId>> {
        if !self.is_active() {
            log::debug!("Click at {:?} before first render ignored", point);
            return Ok(Vec::new());
        }

        let toggled: Vec<JointId> = self.hits(point).collect();
        for &id in &toggled {
            let selected = self.state.toggle(id)?;
            let location = self.locations.get(id)?;
            self.engine.draw_joint(&mut self.surface, location, selected);
            log::debug!("Joint {} selected={}", id, selected);

            if selected && let Some(clip) = self.cues.pick() {
                self.player.play(clip);
            }
        }

        if !toggled.is_empty() {
            self.count_text = count_label(
                self.state.assessment_type(),
                self.state.selected_count(),
                self.state.total_count(),
            );
            self.engine
                .draw_status_line(&mut self.surface, &self.count_text, status::COUNT_BOX);
        }
        Ok(toggled)
    }

    /// Show the first joint under `point`, or clear the hover box
    pub fn handle_pointer_move(&mut self, point: Point) -> Option<JointId> {
        if !self.is_active() {
            return None;
        }

        let hovered = self.hits(point).next();
        self.hover_text = hovered
            .and_then(|id| joint::lookup(id).ok())
            .map(|j| j.name.to_string())
            .unwrap_or_default();
        self.engine
            .draw_status_line(&mut self.surface, &self.hover_text, status::HOVER_BOX);
        hovered
    }
}
