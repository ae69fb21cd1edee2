//! Bulk page initializer
//!
//! A page description lists the drawing surfaces on a page with their class
//! lists and positions. Every element carrying the `jc` class becomes one
//! joint count widget.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::audio::{CueBank, CuePlayer};
use crate::config::WidgetConfig;
use crate::domain::{AssessmentType, JointId, parse_selection};
use crate::render::PixmapSurface;
use crate::render::text::{default_font, load_font};
use crate::widget::{AssessmentCanvas, CanvasOptions};

/// Class marking an element as a joint count widget
pub const WIDGET_CLASS: &str = "jc";

fn default_width() -> u32 {
    300
}

fn default_height() -> u32 {
    150
}

/// One drawing surface on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub id: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub offset_left: f32,
    #[serde(default)]
    pub offset_top: f32,
    /// Size before the background is drawn, like an unsized canvas
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl PageElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Assessment type for a widget element: `tjc` class, otherwise `sjc`
    pub fn assessment_type(&self) -> AssessmentType {
        if self.has_class("tjc") {
            AssessmentType::Tjc
        } else {
            AssessmentType::Sjc
        }
    }
}

/// Page description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub elements: Vec<PageElement>,
}

impl PageDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Elements flagged as joint count widgets, in document order
    pub fn widget_elements(&self) -> impl Iterator<Item = &PageElement> {
        self.elements.iter().filter(|e| e.has_class(WIDGET_CLASS))
    }
}

/// Seed ids, as a list or in the `"3;9"` form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionSpec {
    Ids(Vec<JointId>),
    Delimited(String),
}

impl SelectionSpec {
    pub fn ids(&self) -> crate::error::Result<Vec<JointId>> {
        match self {
            SelectionSpec::Ids(ids) => Ok(ids.clone()),
            SelectionSpec::Delimited(text) => parse_selection(text),
        }
    }
}

/// Externally supplied selections per assessment type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedJoints {
    #[serde(default)]
    pub tjc: Option<SelectionSpec>,
    #[serde(default)]
    pub sjc: Option<SelectionSpec>,
}

impl SelectedJoints {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn for_type(&self, kind: AssessmentType) -> Option<&SelectionSpec> {
        match kind {
            AssessmentType::Tjc => self.tjc.as_ref(),
            AssessmentType::Sjc => self.sjc.as_ref(),
        }
    }
}

/// A constructed widget with the element it belongs to
pub struct PageWidget {
    pub element_id: String,
    pub canvas: AssessmentCanvas<PixmapSurface>,
}

/// Construct one widget per flagged element, in document order
///
/// `player` is called once per widget so each instance owns its player.
pub fn initialize(
    document: &PageDocument,
    selected: Option<&SelectedJoints>,
    config: &WidgetConfig,
    mut player: impl FnMut() -> Box<dyn CuePlayer>,
) -> anyhow::Result<Vec<PageWidget>> {
    let font = match &config.font {
        Some(path) => load_font(path)?,
        None => default_font()?,
    };

    let mut widgets = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for element in document.widget_elements() {
        *seen.entry(element.id.as_str()).or_default() += 1;
        if seen[element.id.as_str()] > 1 {
            log::warn!("Duplicate widget element id '{}'", element.id);
        }

        let kind = element.assessment_type();
        let preselected = match selected.and_then(|s| s.for_type(kind)) {
            Some(spec) => spec
                .ids()
                .with_context(|| format!("selection for {kind} on '{}'", element.id))?,
            None => Vec::new(),
        };

        let options = CanvasOptions {
            assessment_type: kind,
            palette: config.palette,
            scale: config.scale,
            preselected,
            offset: (element.offset_left, element.offset_top),
        };
        let surface = PixmapSurface::new(element.width, element.height)?.with_font(font.clone());
        let canvas = AssessmentCanvas::new(options, surface, CueBank::from_config(config), player())
            .with_context(|| format!("creating widget '{}'", element.id))?;

        log::debug!("Initialized {} widget '{}'", kind, element.id);
        widgets.push(PageWidget {
            element_id: element.id.clone(),
            canvas,
        });
    }
    Ok(widgets)
}
