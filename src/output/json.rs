//! JSON rendering for scripting

use crate::controller::TabStatus;
use crate::output::traits::Renderer;
use crate::view::{Notice, SearchPanel, StatisticsPanel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonTab<'a> {
    id: &'a str,
    active: bool,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl Renderer for JsonRenderer {
    fn statistics(&self, panel: &StatisticsPanel) -> String {
        to_json(panel)
    }

    fn search(&self, panel: &SearchPanel) -> String {
        to_json(panel)
    }

    fn notice(&self, notice: &Notice) -> String {
        to_json(notice)
    }

    fn tabs(&self, tabs: &[TabStatus]) -> String {
        let tabs: Vec<_> = tabs
            .iter()
            .map(|t| JsonTab {
                id: &t.id,
                active: t.active,
            })
            .collect();
        to_json(&tabs)
    }
}
