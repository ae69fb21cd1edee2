//! Replay session: drive page widgets from an event script
//!
//! This module contains:
//! - Event script parsing
//! - Background loading, event replay and result export for a set of widgets

pub mod script;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, anyhow};
use serde::Serialize;

use crate::domain::{AssessmentType, JointId};
use crate::page::PageWidget;
use script::ScriptedEvent;

/// Result of one widget, as printed by the binary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetSummary {
    #[serde(rename = "type")]
    pub kind: AssessmentType,
    pub selected: Vec<JointId>,
    pub count: String,
}

/// Load the background into every widget, enabling their input
pub async fn load_backgrounds(widgets: &mut [PageWidget], image: &Path) -> anyhow::Result<()> {
    for widget in widgets.iter_mut() {
        widget
            .canvas
            .load_and_render(image)
            .await
            .with_context(|| format!("rendering widget '{}'", widget.element_id))?;
    }
    Ok(())
}

/// Feed scripted events to the widgets they address
pub fn replay(widgets: &mut [PageWidget], events: &[ScriptedEvent]) -> anyhow::Result<()> {
    for scripted in events {
        let widget = widgets
            .iter_mut()
            .find(|w| w.element_id == scripted.element_id)
            .ok_or_else(|| anyhow!("no widget with id '{}'", scripted.element_id))?;
        widget.canvas.handle_event(scripted.event)?;
    }
    log::info!("Replayed {} events", events.len());
    Ok(())
}

/// Selected joints per widget, keyed by element id
pub fn summarize(widgets: &[PageWidget]) -> BTreeMap<String, WidgetSummary> {
    widgets
        .iter()
        .map(|w| {
            let state = w.canvas.state();
            (
                w.element_id.clone(),
                WidgetSummary {
                    kind: state.assessment_type(),
                    selected: state.selected_ids(),
                    count: w.canvas.count_text().to_string(),
                },
            )
        })
        .collect()
}

/// Write `<element-id>.png` for every widget
pub fn write_pngs(widgets: &[PageWidget], out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    for widget in widgets {
        let path = out_dir.join(format!("{}.png", widget.element_id));
        widget.canvas.surface().save_png(&path)?;
        log::debug!("Wrote {}", path.display());
    }
    Ok(())
}
