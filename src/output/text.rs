//! Human-readable terminal rendering

use crate::controller::TabStatus;
use crate::output::traits::Renderer;
use crate::view::{Notice, NoticeLevel, SearchPanel, SiteBlock, StatisticsPanel, StatisticsView};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn statistics(&self, panel: &StatisticsPanel) -> String {
        match panel {
            StatisticsPanel::Pending => "Статистика загружается...".to_string(),
            StatisticsPanel::Failed(error) => error.clone(),
            StatisticsPanel::Ready(view) => render_statistics(view),
        }
    }

    fn search(&self, panel: &SearchPanel) -> String {
        match panel {
            SearchPanel::Empty => String::new(),
            SearchPanel::Failed(error) => error.clone(),
            SearchPanel::Results(results) => {
                let mut out = String::new();
                let _ = writeln!(out, "{}", results.header);
                for entry in &results.entries {
                    let _ = writeln!(out);
                    let _ = writeln!(out, "{} <{}>", entry.link.label, entry.link.target);
                    let _ = writeln!(out, "  {}", entry.snippet);
                    let _ = writeln!(out, "  Релевантность: {}", entry.relevance);
                }
                out.trim_end().to_string()
            }
        }
    }

    fn notice(&self, notice: &Notice) -> String {
        match notice.level {
            NoticeLevel::Success => format!("✓ {}", notice.message),
            NoticeLevel::Failure => format!("✗ {}", notice.message),
        }
    }

    fn tabs(&self, tabs: &[TabStatus]) -> String {
        tabs.iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.id)
                } else {
                    format!(" {} ", t.id)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn render_statistics(view: &StatisticsView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Общая статистика ===");
    let _ = writeln!(out, "  Сайтов: {}", view.summary.sites);
    let _ = writeln!(out, "  Страниц: {}", view.summary.pages);
    let _ = writeln!(out, "  Лемм: {}", view.summary.lemmas);
    let _ = writeln!(out, "  Индексация: {}", view.summary.indexing.label());

    for site in &view.sites {
        let _ = writeln!(out);
        render_site(&mut out, site);
    }

    out.trim_end().to_string()
}

fn render_site(out: &mut String, site: &SiteBlock) {
    let _ = writeln!(out, "=== {} ===", site.name);
    let _ = writeln!(out, "  URL: {}", site.url);
    match site.status_time {
        Some(time) => {
            let _ = writeln!(
                out,
                "  Статус: {} ({})",
                site.status,
                time.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        None => {
            let _ = writeln!(out, "  Статус: {}", site.status);
        }
    }
    let _ = writeln!(out, "  Страниц: {}", site.pages);
    let _ = writeln!(out, "  Лемм: {}", site.lemmas);
    if let Some(error) = &site.error {
        let _ = writeln!(out, "  Ошибка: {}", error);
    }
}
