//! Renderer trait
//!
//! A renderer turns display models into a printable string. Implementations
//! have no parsing or escaping duties: the models are already final.

use crate::controller::TabStatus;
use crate::view::{Notice, SearchPanel, StatisticsPanel};

pub trait Renderer {
    /// Renders the statistics panel
    fn statistics(&self, panel: &StatisticsPanel) -> String;

    /// Renders the search results panel
    fn search(&self, panel: &SearchPanel) -> String;

    /// Renders a feedback notice
    fn notice(&self, notice: &Notice) -> String;

    /// Renders the tab strip
    fn tabs(&self, tabs: &[TabStatus]) -> String;
}
