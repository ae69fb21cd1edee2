//! Joint catalog: the 68 anatomical sites shown on the body diagram

use crate::error::{Error, Result};

/// Stable catalog identifier, 1-based
pub type JointId = u32;

/// Number of joints in the catalog
pub const JOINT_COUNT: usize = 68;

/// Body region used to filter joints per assessment type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Hip,
    Other,
}

/// Catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joint {
    pub id: JointId,
    pub name: &'static str,
    pub region: Region,
}

impl Joint {
    const fn new(id: JointId, name: &'static str) -> Self {
        Self {
            id,
            name,
            region: Region::Other,
        }
    }

    const fn hip(id: JointId, name: &'static str) -> Self {
        Self {
            id,
            name,
            region: Region::Hip,
        }
    }

    /// Whether this joint is excluded from swollen joint counts
    pub fn is_hip(&self) -> bool {
        self.region == Region::Hip
    }
}

static CATALOG: [Joint; JOINT_COUNT] = [
    Joint::new(1, "Right TMJ"),
    Joint::new(2, "Left TMJ"),
    Joint::new(3, "Right shoulder"),
    Joint::new(4, "Right AC"),
    Joint::new(5, "Right SC"),
    Joint::new(6, "Left SC"),
    Joint::new(7, "Left AC"),
    Joint::new(8, "Left shoulder"),
    Joint::new(9, "Right elbow"),
    Joint::new(10, "Left elbow"),
    Joint::new(11, "Right wrist"),
    Joint::hip(12, "Right hip"),
    Joint::hip(13, "Left hip"),
    Joint::new(14, "Left wrist"),
    Joint::new(15, "Right hand MCP 1"),
    Joint::new(16, "Right knee"),
    Joint::new(17, "Left knee"),
    Joint::new(18, "Left hand MCP 1"),
    Joint::new(19, "Right hand MCP 5"),
    Joint::new(20, "Right hand MCP 4"),
    Joint::new(21, "Right hand MCP 3"),
    Joint::new(22, "Right hand MCP 2"),
    Joint::new(23, "Right hand IP1"),
    Joint::new(24, "Left hand IP1"),
    Joint::new(25, "Left hand MCP 2"),
    Joint::new(26, "Left hand MCP 3"),
    Joint::new(27, "Left hand MCP 4"),
    Joint::new(28, "Left hand MCP 5"),
    Joint::new(29, "Right hand PIP 5"),
    Joint::new(30, "Right hand PIP 4"),
    Joint::new(31, "Right hand PIP 3"),
    Joint::new(32, "Right hand PIP 2"),
    Joint::new(33, "Right ankle"),
    Joint::new(34, "Left ankle"),
    Joint::new(35, "Left hand PIP 2"),
    Joint::new(36, "Left hand PIP 3"),
    Joint::new(37, "Left hand PIP 4"),
    Joint::new(38, "Left hand PIP 5"),
    Joint::new(39, "Right hand DIP 5"),
    Joint::new(40, "Right hand DIP 4"),
    Joint::new(41, "Right hand DIP 3"),
    Joint::new(42, "Right hand DIP 2"),
    Joint::new(43, "Left hand DIP 2"),
    Joint::new(44, "Left hand DIP 3"),
    Joint::new(45, "Left hand DIP 4"),
    Joint::new(46, "Left hand DIP 5"),
    Joint::new(47, "Right tarsus"),
    Joint::new(48, "Left tarsus"),
    Joint::new(49, "Right foot MTP 5"),
    Joint::new(50, "Right foot MTP 4"),
    Joint::new(51, "Right foot MTP 3"),
    Joint::new(52, "Right foot MTP 2"),
    Joint::new(53, "Right foot MTP 1"),
    Joint::new(54, "Left foot MTP 1"),
    Joint::new(55, "Left foot MTP 2"),
    Joint::new(56, "Left foot MTP 3"),
    Joint::new(57, "Left foot MTP 4"),
    Joint::new(58, "Left foot MTP 5"),
    Joint::new(59, "Right foot PIP 5"),
    Joint::new(60, "Right foot PIP 4"),
    Joint::new(61, "Right foot PIP 3"),
    Joint::new(62, "Right foot PIP 2"),
    Joint::new(63, "Right foot IP1"),
    Joint::new(64, "Left foot IP1"),
    Joint::new(65, "Left foot PIP 2"),
    Joint::new(66, "Left foot PIP 3"),
    Joint::new(67, "Left foot PIP 4"),
    Joint::new(68, "Left foot PIP 5"),
];

/// All joints in catalog order
pub fn all_joints() -> &'static [Joint] {
    &CATALOG
}

/// Look up a joint by id
pub fn lookup(id: JointId) -> Result<&'static Joint> {
    let index = (id as usize).checked_sub(1).ok_or(Error::NotFound(id))?;
    CATALOG.get(index).ok_or(Error::NotFound(id))
}
