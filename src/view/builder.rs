use super::FlowView;
use crate::layout::{FocusConfig, LayoutConfig};
use crate::search::IdentityJoin;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};

/// Everything configurable about a `FlowView`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub layout: LayoutConfig,
    pub focus: FocusConfig,
    pub identity_join: IdentityJoin,
    /// Maximum number of entries in the search drop-down.
    pub hit_limit: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            focus: FocusConfig::default(),
            identity_join: IdentityJoin::Name,
            hit_limit: 100,
        }
    }
}

pub struct FlowViewBuilder<'a> {
    forest: &'a [TreeNode],
    config: ViewConfig,
}

impl<'a> FlowViewBuilder<'a> {
    pub fn new(forest: &'a [TreeNode]) -> Self {
        Self {
            forest,
            config: ViewConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn with_focus(mut self, focus: FocusConfig) -> Self {
        self.config.focus = focus;
        self
    }

    pub fn with_identity_join(mut self, join: IdentityJoin) -> Self {
        self.config.identity_join = join;
        self
    }

    pub fn with_hit_limit(mut self, limit: usize) -> Self {
        self.config.hit_limit = limit;
        self
    }

    pub fn build(self) -> FlowView<'a> {
        FlowView::from_parts(self.forest, self.config)
    }
}
