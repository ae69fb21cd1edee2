//! Selection state for one joint count assessment

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::joint::{self, JointId};
use crate::error::{Error, Result};

/// Which joint count the widget records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    /// Tender joint count, every catalog joint
    Tjc,
    /// Swollen joint count, hips excluded
    Sjc,
}

impl AssessmentType {
    /// Lower-case name as used in markup and selection maps
    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentType::Tjc => "tjc",
            AssessmentType::Sjc => "sjc",
        }
    }

    /// Upper-case label for the count line
    pub fn label(self) -> &'static str {
        match self {
            AssessmentType::Tjc => "TJC",
            AssessmentType::Sjc => "SJC",
        }
    }

    /// Whether joints of this kind take part in the assessment
    pub fn includes(self, joint: &joint::Joint) -> bool {
        match self {
            AssessmentType::Tjc => true,
            AssessmentType::Sjc => !joint.is_hip(),
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tjc" => Ok(AssessmentType::Tjc),
            "sjc" => Ok(AssessmentType::Sjc),
            other => Err(Error::InvalidSelection(format!(
                "unknown assessment type '{other}'"
            ))),
        }
    }
}

/// A joint taking part in an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentJoint {
    pub id: JointId,
    pub selected: bool,
}

impl AssessmentJoint {
    /// Anatomical name from the catalog
    pub fn name(&self) -> &'static str {
        joint::lookup(self.id).map(|j| j.name).unwrap_or_default()
    }
}

/// Parse the semicolon-delimited id form, e.g. `"3;9;17"`
pub fn parse_selection(spec: &str) -> Result<Vec<JointId>> {
    spec.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<JointId>()
                .map_err(|_| Error::InvalidSelection(format!("'{token}' is not a joint id")))
        })
        .collect()
}

/// Joints of one assessment with their selected flags
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentState {
    kind: AssessmentType,
    joints: Vec<AssessmentJoint>,
    selected: usize,
}

impl AssessmentState {
    /// Build the filtered joint list and mark `preselected` ids as selected
    pub fn create(kind: AssessmentType, preselected: &[JointId]) -> Result<Self> {
        let mut joints: Vec<AssessmentJoint> = joint::all_joints()
            .iter()
            .filter(|j| kind.includes(j))
            .map(|j| AssessmentJoint {
                id: j.id,
                selected: false,
            })
            .collect();

        let wanted: BTreeSet<JointId> = preselected.iter().copied().collect();
        for id in &wanted {
            let entry = joints.iter_mut().find(|j| j.id == *id).ok_or_else(|| {
                Error::InvalidSelection(format!("joint {id} is not part of a {kind} assessment"))
            })?;
            entry.selected = true;
        }

        Ok(Self {
            kind,
            joints,
            selected: wanted.len(),
        })
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.kind
    }

    /// Flip a joint and return its new selected state
    pub fn toggle(&mut self, id: JointId) -> Result<bool> {
        let entry = self
            .joints
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(Error::NotFound(id))?;
        entry.selected = !entry.selected;
        if entry.selected {
            self.selected += 1;
        } else {
            self.selected -= 1;
        }
        Ok(entry.selected)
    }

    pub fn is_selected(&self, id: JointId) -> Result<bool> {
        self.joints
            .iter()
            .find(|j| j.id == id)
            .map(|j| j.selected)
            .ok_or(Error::NotFound(id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected
    }

    pub fn total_count(&self) -> usize {
        self.joints.len()
    }

    pub fn joints(&self) -> &[AssessmentJoint] {
        &self.joints
    }

    /// Selected ids in catalog order
    pub fn selected_ids(&self) -> Vec<JointId> {
        self.joints
            .iter()
            .filter(|j| j.selected)
            .map(|j| j.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjc_excludes_hips() {
        let state = AssessmentState::create(AssessmentType::Sjc, &[]).unwrap();
        assert_eq!(state.total_count(), 66);
        assert!(state.joints().iter().all(|j| j.id != 12 && j.id != 13));
        assert!(state.joints().iter().all(|j| !j.name().contains("hip")));
    }

    #[test]
    fn test_tjc_includes_all() {
        let state = AssessmentState::create(AssessmentType::Tjc, &[]).unwrap();
        assert_eq!(state.total_count(), 68);
        assert_eq!(state.selected_count(), 0);
        let ids: Vec<JointId> = state.joints().iter().map(|j| j.id).collect();
        assert_eq!(ids, (1..=68).collect::<Vec<_>>());
    }

    #[test]
    fn test_preselected() {
        let state = AssessmentState::create(AssessmentType::Tjc, &[3, 9]).unwrap();
        assert_eq!(state.selected_count(), 2);
        for joint in state.joints() {
            assert_eq!(joint.selected, joint.id == 3 || joint.id == 9);
        }
        assert_eq!(state.selected_ids(), vec![3, 9]);
    }

    #[test]
    fn test_duplicate_preselection_counts_once() {
        let state = AssessmentState::create(AssessmentType::Sjc, &[9, 3, 9]).unwrap();
        assert_eq!(state.selected_count(), 2);
    }

    #[test]
    fn test_invalid_preselection() {
        let err = AssessmentState::create(AssessmentType::Sjc, &[12]).unwrap_err();
        assert!(matches!(err, Error::InvalidSelection(_)));
        assert!(AssessmentState::create(AssessmentType::Tjc, &[12]).is_ok());
        assert!(AssessmentState::create(AssessmentType::Tjc, &[0]).is_err());
        assert!(AssessmentState::create(AssessmentType::Tjc, &[69]).is_err());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = AssessmentState::create(AssessmentType::Tjc, &[5]).unwrap();
        for id in [5, 6] {
            let before = state.is_selected(id).unwrap();
            let count = state.selected_count();
            assert_eq!(state.toggle(id).unwrap(), !before);
            assert_eq!(state.toggle(id).unwrap(), before);
            assert_eq!(state.selected_count(), count);
        }
    }

    #[test]
    fn test_toggle_unknown() {
        let mut state = AssessmentState::create(AssessmentType::Sjc, &[]).unwrap();
        assert_eq!(state.toggle(12), Err(Error::NotFound(12)));
        assert_eq!(state.toggle(70), Err(Error::NotFound(70)));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("3;9").unwrap(), vec![3, 9]);
        assert_eq!(parse_selection(" 1 ; 68 ;").unwrap(), vec![1, 68]);
        assert!(parse_selection("").unwrap().is_empty());
        assert!(matches!(
            parse_selection("3;knee"),
            Err(Error::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_assessment_type_names() {
        assert_eq!("TJC".parse::<AssessmentType>().unwrap(), AssessmentType::Tjc);
        assert_eq!("sjc".parse::<AssessmentType>().unwrap(), AssessmentType::Sjc);
        assert!("das28".parse::<AssessmentType>().is_err());
        assert_eq!(AssessmentType::Sjc.label(), "SJC");
        assert_eq!(
            serde_json::to_string(&AssessmentType::Tjc).unwrap(),
            "\"tjc\""
        );
    }
}
