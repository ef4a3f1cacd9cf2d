//! End-to-end scenarios through the Store, storage included.

use std::sync::Arc;
use todomvc::persistence;
use todomvc::{
    render, Config, Filter, Key, Route, Target, TodoAction, TodoApp, TodoEnvironment, TodoId,
    TodoReducer, TodoState, UiEvent,
};
use todomvc_core::storage::{KeyValueStorage, MemoryStorage};
use todomvc_runtime::Store;
use todomvc_testing::{FailingStorage, RecordingStorage, SequentialIdGenerator};

const KEY: &str = "todos-composable";

fn env(storage: Arc<dyn KeyValueStorage>) -> TodoEnvironment {
    TodoEnvironment::new(storage, Arc::new(SequentialIdGenerator::new("todo")), KEY)
}

fn create(title: &str) -> TodoAction {
    TodoAction::CreateTodo {
        title: title.to_string(),
    }
}

fn id(n: u32) -> TodoId {
    TodoId::new(format!("todo-{n}"))
}

fn titles(state: &TodoState, filter: Filter) -> Vec<String> {
    state.todos.filtered(filter).map(|t| t.title.clone()).collect()
}

#[tokio::test]
async fn create_one_item() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Store::new(TodoState::new(), TodoReducer::new(), env(storage.clone()));

    store.send(create("Buy milk")).await.unwrap();

    let view = store.state(render).await;
    assert_eq!(view.todos.len(), 1);
    assert!(!view.todos[0].completed);
    assert!(view.to_string().contains("1 item left"));
    assert_eq!(
        storage.writes(),
        vec![(
            KEY.to_string(),
            r#"[{"id":"todo-1","title":"Buy milk","completed":false}]"#.to_string()
        )]
    );
}

#[tokio::test]
async fn toggle_splits_active_and_completed() {
    let store = Store::new(
        TodoState::new(),
        TodoReducer::new(),
        env(Arc::new(MemoryStorage::new())),
    );
    store.send(create("A")).await.unwrap();
    store.send(create("B")).await.unwrap();
    store.send(TodoAction::ToggleTodo { id: id(1) }).await.unwrap();

    let state = store.state(TodoState::clone).await;
    assert_eq!(titles(&state, Filter::Active), ["B"]);
    assert_eq!(titles(&state, Filter::Completed), ["A"]);
}

#[tokio::test]
async fn clear_completed_returns_to_all() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Store::new(TodoState::new(), TodoReducer::new(), env(storage.clone()));
    store.send(create("A")).await.unwrap();
    store.send(create("B")).await.unwrap();
    store.send(TodoAction::ToggleAll { completed: true }).await.unwrap();
    store
        .send(TodoAction::Navigate {
            fragment: "#/completed".to_string(),
        })
        .await
        .unwrap();
    store.send(TodoAction::ClearCompleted).await.unwrap();

    let state = store.state(TodoState::clone).await;
    assert!(state.todos.is_empty());
    assert_eq!(state.route, Route::Filter(Filter::All));
    assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("[]"));
    // One save per mutation; navigation saves nothing
    assert_eq!(storage.write_count(), 4);
}

#[tokio::test]
async fn blank_edit_removes_item() {
    let storage = Arc::new(MemoryStorage::new());
    let app = TodoApp::with_environment(env(storage.clone()), Route::default());
    app.send(create("A")).await.unwrap();

    app.dispatch(UiEvent::DoubleClick {
        target: Target::Label(id(1)),
    })
    .await
    .unwrap();
    app.dispatch(UiEvent::Input {
        target: Target::Edit(id(1)),
        value: "   ".to_string(),
    })
    .await
    .unwrap();
    let view = app
        .dispatch(UiEvent::KeyUp {
            target: Target::Edit(id(1)),
            key: Key::Enter,
            value: "   ".to_string(),
        })
        .await
        .unwrap();

    assert!(view.todos.is_empty());
    assert!(view.footer.is_none());
    assert!(persistence::load(storage.as_ref(), KEY).is_empty());
}

#[tokio::test]
async fn toggle_all_shows_clear_completed() {
    let app = TodoApp::with_environment(env(Arc::new(MemoryStorage::new())), Route::default());
    for title in ["A", "B", "C"] {
        app.send(create(title)).await.unwrap();
    }

    let view = app
        .dispatch(UiEvent::Change {
            target: Target::ToggleAll,
            checked: true,
        })
        .await
        .unwrap();

    assert!(view.todos.iter().all(|t| t.completed));
    assert!(view.toggle_all_checked);
    let footer = view.footer.as_ref().unwrap();
    assert!(footer.show_clear_completed);
    assert_eq!(footer.completed_count, 3);
    assert!(view.to_html().contains("class=\"clear-completed\""));
}

#[tokio::test]
async fn escape_then_blur_keeps_title() {
    let app = TodoApp::with_environment(env(Arc::new(MemoryStorage::new())), Route::default());
    app.send(create("A")).await.unwrap();
    app.send(TodoAction::StartEditing { id: id(1) }).await.unwrap();
    app.dispatch(UiEvent::Input {
        target: Target::Edit(id(1)),
        value: "Changed".to_string(),
    })
    .await
    .unwrap();
    app.dispatch(UiEvent::KeyUp {
        target: Target::Edit(id(1)),
        key: Key::Escape,
        value: "Changed".to_string(),
    })
    .await
    .unwrap();
    let view = app
        .dispatch(UiEvent::FocusOut {
            target: Target::Edit(id(1)),
            value: "Changed".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(view.todos[0].title, "A");
    assert!(!view.todos[0].editing);
}

#[tokio::test]
async fn failed_saves_keep_memory_authoritative() {
    let store = Store::new(
        TodoState::new(),
        TodoReducer::new(),
        env(Arc::new(FailingStorage::new("quota exceeded"))),
    );
    store.send(create("A")).await.unwrap();

    let state = store.state(TodoState::clone).await;
    assert_eq!(titles(&state, Filter::All), ["A"]);
    assert!(state.last_error.as_deref().is_some_and(|e| e.contains("quota exceeded")));
    assert!(store.state(render).await.to_string().contains("not saved"));
}

#[tokio::test]
async fn reload_reads_back_what_was_saved() {
    let storage = Arc::new(MemoryStorage::new());
    let store = Store::new(TodoState::new(), TodoReducer::new(), env(storage.clone()));
    store.send(create("A")).await.unwrap();
    store.send(create("B")).await.unwrap();
    let before = store.state(|s| s.todos.clone()).await;

    storage.set_item(KEY, r#"[{"id":"x","title":"From elsewhere","completed":true}]"#).unwrap();
    store.send(TodoAction::Reload).await.unwrap();

    let after = store.state(TodoState::clone).await;
    assert_ne!(after.todos, before);
    assert_eq!(titles(&after, Filter::Completed), ["From elsewhere"]);
}

#[tokio::test]
async fn file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        storage_path: dir.path().join("state/storage.json"),
        initial_route: "#/active".to_string(),
        ..Config::default()
    };

    {
        let app = TodoApp::open(&config).unwrap();
        app.send(create("Buy milk")).await.unwrap();
        app.send(create("Walk dog")).await.unwrap();
        let first = app.visible_id(1).await.unwrap();
        app.send(TodoAction::ToggleTodo { id: first }).await.unwrap();
        app.close();
    }

    let app = TodoApp::open(&config).unwrap();
    let state = app.state().await;
    assert_eq!(state.todos.len(), 2);
    assert_eq!(state.filter(), Filter::Active);
    assert_eq!(titles(&state, Filter::Active), ["Walk dog"]);
}

#[tokio::test]
async fn corrupt_storage_starts_empty() {
    let storage = Arc::new(MemoryStorage::with_item(KEY, "{{{"));
    let app = TodoApp::with_environment(env(storage), Route::parse("#/nonsense"));

    let view = app.view().await;
    assert!(view.todos.is_empty());
    assert_eq!(view.fragment, "#/nonsense");
}
