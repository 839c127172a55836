//! Overlay values: what sits on top of a tile's ground.
//!
//! Chunks bake a prop id per tile. Player edits (placed structures, removed
//! props) are stored as overrides in the world and always win over the baked
//! value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tiles::{self, NO_PROP};

/// Build state of a construction site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteState {
    #[default]
    Building,
    Built,
}

/// A structure being built (or finished) on a tile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstructionSite {
    /// Recipe identifier of the structure
    pub craft_id: String,
    pub name: String,
    /// Prop id shown for the structure
    pub pid: u16,
    #[serde(default)]
    pub state: SiteState,
    #[serde(default)]
    pub work_done: f32,
    pub work_required: f32,
    /// Resources consumed, by resource name
    #[serde(default)]
    pub cost: BTreeMap<String, u32>,
}

impl ConstructionSite {
    pub fn new(craft_id: impl Into<String>, name: impl Into<String>, pid: u16, work_required: f32) -> Self {
        Self {
            craft_id: craft_id.into(),
            name: name.into(),
            pid,
            state: SiteState::Building,
            work_done: 0.0,
            work_required: work_required.max(0.0),
            cost: BTreeMap::new(),
        }
    }

    pub fn with_cost(mut self, resource: impl Into<String>, amount: u32) -> Self {
        self.cost.insert(resource.into(), amount);
        self
    }

    /// Completion in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.state == SiteState::Built || self.work_required <= 0.0 {
            return 1.0;
        }
        (self.work_done / self.work_required).clamp(0.0, 1.0)
    }

    pub fn is_built(&self) -> bool {
        self.state == SiteState::Built
    }

    /// Add work; returns true only on the call that completes the site.
    pub fn apply_work(&mut self, amount: f32) -> bool {
        if self.is_built() {
            return false;
        }
        self.work_done = (self.work_done + amount.max(0.0)).min(self.work_required);
        if self.work_done >= self.work_required {
            self.state = SiteState::Built;
            return true;
        }
        false
    }
}

/// Effective overlay of a tile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    #[default]
    Empty,
    Prop { id: u16 },
    ConstructionSite(ConstructionSite),
}

impl Overlay {
    /// Baked prop ids map to `Prop`, 0 maps to `Empty`.
    pub fn from_prop_id(id: u16) -> Self {
        if id == NO_PROP {
            Overlay::Empty
        } else {
            Overlay::Prop { id }
        }
    }

    pub fn prop(name: &str) -> Self {
        Overlay::from_prop_id(tiles::get_prop_id(name))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Overlay::Empty)
    }

    /// Prop id displayed for this overlay (a site shows its structure's id)
    pub fn prop_id(&self) -> Option<u16> {
        match self {
            Overlay::Empty => None,
            Overlay::Prop { id } => Some(*id),
            Overlay::ConstructionSite(site) => Some(site.pid),
        }
    }

    pub fn as_site(&self) -> Option<&ConstructionSite> {
        match self {
            Overlay::ConstructionSite(site) => Some(site),
            _ => None,
        }
    }

    pub fn as_site_mut(&mut self) -> Option<&mut ConstructionSite> {
        match self {
            Overlay::ConstructionSite(site) => Some(site),
            _ => None,
        }
    }
}

impl From<ConstructionSite> for Overlay {
    fn from(site: ConstructionSite) -> Self {
        Overlay::ConstructionSite(site)
    }
}
