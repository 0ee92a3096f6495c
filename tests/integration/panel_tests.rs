use crate::{client_for, config_for, search_body, statistics_body};
use search_panel::controller::{
    PageForm, RenderOutcome, SearchController, SearchForm, TriggerElement,
};
use search_panel::output::{Renderer, TextRenderer};
use search_panel::view::{NoticeLevel, SearchPanel, StatisticsPanel};
use search_panel::{Panel, PanelError, StatisticsRenderer};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_statistics(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statistics_body(false)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_dashboard_activation_refreshes_statistics_once() {
    let server = MockServer::start().await;
    mount_statistics(&server, 1).await;

    let mut config = config_for(&server);
    config.tabs.initial = Some("search".to_string());
    let (mut panel, _notices) = Panel::new(&config).unwrap();

    let handle = panel
        .activate_tab("dashboard", TriggerElement::new("dashboard-button"))
        .unwrap()
        .expect("dashboard activation should spawn a refresh");
    handle.await.unwrap();

    assert_eq!(panel.tabs().active_tab(), "dashboard");
    assert_eq!(
        panel.tabs().active_trigger(),
        Some(&TriggerElement::new("dashboard-button"))
    );

    let view = panel.statistics_panel();
    let view = view.view().expect("statistics should be rendered");
    assert_eq!(view.summary.indexing.label(), "Завершена");
    assert_eq!(view.sites.len(), 2);

    server.verify().await;
}

#[tokio::test]
async fn test_other_tabs_do_not_refresh_statistics() {
    let server = MockServer::start().await;
    mount_statistics(&server, 0).await;

    let (mut panel, _notices) = Panel::new(&config_for(&server)).unwrap();

    for tab in ["management", "search"] {
        let handle = panel
            .activate_tab(tab, TriggerElement::new(format!("{}-button", tab)))
            .unwrap();
        assert!(handle.is_none());

        let active: Vec<_> = panel.tabs().tabs().iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, tab);
        assert!(active[0].panel_active);
    }

    assert_eq!(panel.statistics_panel(), StatisticsPanel::Pending);
    server.verify().await;
}

#[tokio::test]
async fn test_unknown_tab_is_rejected() {
    let server = MockServer::start().await;
    let (mut panel, _notices) = Panel::new(&config_for(&server)).unwrap();

    let result = panel.activate_tab("reports", TriggerElement::new("reports-button"));
    assert!(matches!(result, Err(PanelError::Tab(_))));
    assert_eq!(panel.tabs().active_tab(), "dashboard");
}

#[tokio::test]
async fn test_initial_load_refreshes_regardless_of_tab() {
    let server = MockServer::start().await;
    mount_statistics(&server, 1).await;

    let mut config = config_for(&server);
    config.tabs.initial = Some("management".to_string());
    let (panel, _notices) = Panel::new(&config).unwrap();

    assert_eq!(panel.load().await.unwrap(), RenderOutcome::Rendered);
    assert_eq!(panel.tabs().active_tab(), "management");

    let text = TextRenderer.statistics(&panel.statistics_panel());
    assert!(text.contains("Сайтов: 2"));
    assert!(text.contains("Ошибка: Ошибка индексации"));
    assert_eq!(text.matches("Ошибка:").count(), 1);

    server.verify().await;
}

#[tokio::test]
async fn test_statistics_application_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "result": false,
            "error": "Произошла внутренняя ошибка сервера"
        })))
        .mount(&server)
        .await;

    let (panel, _notices) = Panel::new(&config_for(&server)).unwrap();
    panel.refresh_statistics().await.unwrap();

    assert_eq!(
        panel.statistics_panel(),
        StatisticsPanel::Failed("Произошла внутренняя ошибка сервера".to_string())
    );
}

#[tokio::test]
async fn test_failed_background_refresh_reports_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.tabs.initial = Some("search".to_string());
    let (mut panel, mut notices) = Panel::new(&config).unwrap();

    panel
        .activate_tab("dashboard", TriggerElement::new("dashboard-button"))
        .unwrap()
        .unwrap()
        .await
        .unwrap();

    let notice = notices.try_recv().expect("transport failure should be reported");
    assert_eq!(notice.level, NoticeLevel::Failure);
    assert_eq!(notice.message, "Не удалось выполнить запрос к серверу");
    assert_eq!(panel.statistics_panel(), StatisticsPanel::Pending);
}

#[tokio::test]
async fn test_start_then_stop_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/startIndexing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stopIndexing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (panel, mut notices) = Panel::new(&config_for(&server)).unwrap();

    let started = panel.start_indexing().await.unwrap();
    let stopped = panel.stop_indexing().await.unwrap();
    assert_eq!(started.message, "Индексация запущена");
    assert_eq!(stopped.message, "Индексация остановлена");

    assert_eq!(notices.try_recv().unwrap(), started);
    assert_eq!(notices.try_recv().unwrap(), stopped);
    assert!(notices.try_recv().is_err());

    let paths: Vec<_> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/api/startIndexing", "/api/stopIndexing"]);
}

#[tokio::test]
async fn test_start_while_running_surfaces_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/startIndexing"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": false, "error": "Индексация уже запущена" })),
        )
        .mount(&server)
        .await;

    let (panel, _notices) = Panel::new(&config_for(&server)).unwrap();
    let notice = panel.start_indexing().await.unwrap();

    assert_eq!(notice.level, NoticeLevel::Failure);
    assert_eq!(notice.message, "Индексация уже запущена");
}

#[tokio::test]
async fn test_index_page_from_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/indexPage"))
        .and(query_param("url", "http://x.com/y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": true })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut panel, _notices) = Panel::new(&config_for(&server)).unwrap();
    panel.page_form = PageForm::new("http://x.com/y");

    let notice = panel.index_page().await.unwrap();
    assert!(notice.is_success());
    assert_eq!(notice.message, "Страница добавлена в очередь");

    server.verify().await;
}

#[tokio::test]
async fn test_transport_failure_on_action_reports_generic_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stopIndexing"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let (panel, mut notices) = Panel::new(&config_for(&server)).unwrap();
    assert!(panel.stop_indexing().await.is_err());

    let notice = notices.try_recv().unwrap();
    assert_eq!(notice.message, "Не удалось выполнить запрос к серверу");
    assert!(notices.try_recv().is_err());
}

#[tokio::test]
async fn test_search_renders_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;

    let (mut panel, _notices) = Panel::new(&config_for(&server)).unwrap();
    panel.search_form = SearchForm::new("query", "");
    panel.search().await.unwrap();

    let results = match panel.search_panel() {
        SearchPanel::Results(results) => results,
        other => panic!("expected results, got {:?}", other),
    };
    assert_eq!(results.header, "Найдено результатов: 2");
    assert_eq!(results.entries.len(), 2);
    assert_eq!(results.entries[0].link.target, "https://a.com/p1");
    assert_eq!(results.entries[0].relevance, "0.88");
    assert_eq!(results.entries[1].link.label, "B");
}

#[tokio::test]
async fn test_search_failure_replaces_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "bad"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": false, "error": "bad query" })),
        )
        .mount(&server)
        .await;

    let (mut panel, _notices) = Panel::new(&config_for(&server)).unwrap();

    panel.search_form = SearchForm::new("good", "");
    panel.search().await.unwrap();
    assert!(matches!(panel.search_panel(), SearchPanel::Results(_)));

    panel.search_form = SearchForm::new("bad", "");
    panel.search().await.unwrap();
    assert_eq!(
        panel.search_panel(),
        SearchPanel::Failed("bad query".to_string())
    );
    assert_eq!(TextRenderer.search(&panel.search_panel()), "bad query");
}

#[tokio::test]
async fn test_configured_limit_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.search.limit = Some(5);
    let (mut panel, _notices) = Panel::new(&config).unwrap();
    panel.search_form = SearchForm::new("rust", "https://a.com");
    panel.search().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("query=rust&site=https%3A%2F%2Fa.com&limit=5")
    );
}

#[tokio::test]
async fn test_superseded_search_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "result": true,
                    "count": 1,
                    "data": [{ "site": "https://slow.com", "uri": "/", "title": "Slow", "snippet": "", "relevance": 0.1 }]
                }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .mount(&server)
        .await;

    let controller = SearchController::new(client_for(&server), None);
    let slow_form = SearchForm::new("slow", "");
    let fast_form = SearchForm::new("fast", "");

    // The slow search is issued first and resolves last
    let (slow, fast) = tokio::join!(controller.search(&slow_form), controller.search(&fast_form));

    assert_eq!(slow.unwrap(), RenderOutcome::Discarded);
    assert_eq!(fast.unwrap(), RenderOutcome::Rendered);

    match controller.current() {
        SearchPanel::Results(results) => {
            assert_eq!(results.header, "Найдено результатов: 2");
            assert_eq!(results.entries[0].link.target, "https://a.com/p1");
        }
        other => panic!("expected fast results, got {:?}", other),
    }
}

/// The first statistics request answers late with `indexing: true`; later
/// ones answer at once with `indexing: false`
async fn mount_slow_then_fast_statistics(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(statistics_body(true))
                .set_delay(Duration::from_millis(500)),
        )
        .up_to_n_times(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(statistics_body(false)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_superseded_statistics_refresh_is_discarded() {
    let server = MockServer::start().await;
    mount_slow_then_fast_statistics(&server).await;

    let renderer = StatisticsRenderer::new(client_for(&server));
    let late = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        renderer.refresh().await
    };

    let (slow, fast) = tokio::join!(renderer.refresh(), late);

    assert_eq!(slow.unwrap(), RenderOutcome::Discarded);
    assert_eq!(fast.unwrap(), RenderOutcome::Rendered);

    let current = renderer.current();
    let view = current.view().expect("statistics should be rendered");
    assert_eq!(view.summary.indexing.label(), "Завершена");
}

#[tokio::test]
async fn test_tab_refresh_superseded_by_manual_refresh() {
    let server = MockServer::start().await;
    mount_slow_then_fast_statistics(&server).await;

    let mut config = config_for(&server);
    config.tabs.initial = Some("search".to_string());
    let (mut panel, mut notices) = Panel::new(&config).unwrap();

    let handle = panel
        .activate_tab("dashboard", TriggerElement::new("dashboard-button"))
        .unwrap()
        .expect("dashboard activation should spawn a refresh");

    // Let the tab-triggered request reach the backend first
    tokio::time::sleep(Duration::from_millis(100)).await;
    let outcome = panel.refresh_statistics().await.unwrap();
    assert_eq!(outcome, RenderOutcome::Rendered);

    handle.await.unwrap();

    let current = panel.statistics_panel();
    let view = current.view().expect("statistics should be rendered");
    assert_eq!(view.summary.indexing.label(), "Завершена");
    assert!(notices.try_recv().is_err());
}
