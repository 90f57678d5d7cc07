use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store::{StoreError, load_tasks, next_id, save_tasks};
use crate::model::{Config, Task};

use super::input;
use super::list::TaskList;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Rows below the list: status row + help row
pub const FOOTER_HEIGHT: u16 = 2;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    View,
    /// Typing the title of a new task
    Add,
    /// Retitling the task with this id
    Edit { id: u64 },
}

/// Main application state
pub struct App {
    /// All tasks, in insertion (= display) order
    pub tasks: Vec<Task>,
    pub tasks_path: PathBuf,
    pub mode: Mode,
    /// Id handed to the next added task
    pub next_id: u64,
    /// Set when the task file could not be loaded at startup
    pub load_error: Option<String>,
    /// Transient message shown in the status row until the next key press
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
    pub list: TaskList,
    pub input: TextInput,
    pub theme: Theme,
}

impl App {
    pub fn new(tasks_path: PathBuf, tasks: Vec<Task>, theme: Theme) -> Self {
        let list = TaskList::new(tasks.iter().map(|t| t.id).collect());
        App {
            next_id: next_id(&tasks),
            tasks,
            tasks_path,
            mode: Mode::View,
            load_error: None,
            status_message: None,
            status_is_error: false,
            should_quit: false,
            list,
            input: TextInput::default(),
            theme,
        }
    }

    /// Load tasks from `tasks_path`. A load failure still yields an App,
    /// with an empty list and `load_error` set.
    pub fn open(tasks_path: PathBuf, theme: Theme) -> Self {
        match load_tasks(&tasks_path) {
            Ok(tasks) => {
                log::info!("loaded {} tasks from {}", tasks.len(), tasks_path.display());
                App::new(tasks_path, tasks, theme)
            }
            Err(e) => {
                log::error!("{}", e);
                let mut app = App::new(tasks_path, Vec::new(), theme);
                app.load_error = Some(e.to_string());
                app
            }
        }
    }

    /// Id of the task being edited, if any
    pub fn selected_id(&self) -> Option<u64> {
        match self.mode {
            Mode::Edit { id } => Some(id),
            Mode::View | Mode::Add => None,
        }
    }

    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_task_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Number of tasks, and how many of them are done
    pub fn counts(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|t| t.is_complete()).count();
        (self.tasks.len(), done)
    }

    /// Append a task with a fresh id, select it, and save. Returns the id,
    /// or None once the id space is used up.
    pub fn add_task(&mut self, title: &str) -> Option<u64> {
        let id = self.next_id;
        let Some(following) = id.checked_add(1) else {
            log::error!("cannot add {:?}: no task ids left", title);
            self.status_message = Some("cannot add task: no task ids left".to_string());
            self.status_is_error = true;
            return None;
        };
        self.next_id = following;
        self.tasks.push(Task::new(id, title));
        log::debug!("added task {}: {:?}", id, title);
        self.sync_list();
        self.list.select(id);
        self.persist();
        Some(id)
    }

    /// Overwrite the title of task `id` and save. Returns false if no such task.
    pub fn rename_task(&mut self, id: u64, title: &str) -> bool {
        let Some(task) = self.find_task_mut(id) else {
            log::warn!("rename: no task with id {}", id);
            return false;
        };
        task.title = title.to_string();
        log::debug!("renamed task {} to {:?}", id, title);
        self.persist();
        true
    }

    pub fn toggle_done(&mut self, id: u64) {
        if let Some(task) = self.find_task_mut(id) {
            task.toggle_done();
            log::debug!("task {} is now {}", id, task.status.label());
            self.persist();
        }
    }

    pub fn mark_in_progress(&mut self, id: u64) {
        if let Some(task) = self.find_task_mut(id) {
            task.mark_in_progress();
            log::debug!("task {} is now {}", id, task.status.label());
            self.persist();
        }
    }

    /// Save and stop the event loop. Nothing is written if the initial load
    /// failed, so an unreadable file is never clobbered.
    pub fn quit(&mut self) {
        if self.load_error.is_none() {
            self.persist();
        }
        log::info!("quitting");
        self.should_quit = true;
    }

    /// Save the task list, reporting failure in the status row
    pub fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::warn!("{}", e);
            self.status_message = Some(format!("save failed: {}", e));
            self.status_is_error = true;
        }
    }

    pub fn save(&self) -> Result<(), StoreError> {
        save_tasks(&self.tasks_path, &self.tasks)
    }

    /// Fit the list viewport to a terminal of `width` x `height`
    pub fn resize(&mut self, width: u16, height: u16) {
        self.list
            .set_size(width, height.saturating_sub(FOOTER_HEIGHT));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    fn sync_list(&mut self) {
        self.list.set_items(self.tasks.iter().map(|t| t.id).collect());
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let theme = Theme::from_config(&config.ui);
    let mut app = App::open(config.tasks_file.clone(), theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A failed save on quit can't be shown in the TUI anymore
    if app.status_is_error
        && let Some(msg) = &app.status_message
    {
        eprintln!("warning: {}", msg);
    }

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let ev: Event = event::read()?;
        input::handle_event(app, ev);

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        App::open(dir.path().join("tasks.json"), Theme::default())
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let app = app_in(&dir);
        assert!(app.tasks.is_empty());
        assert!(app.load_error.is_none());
        assert_eq!(app.next_id, 1);
        assert_eq!(app.mode, Mode::View);
    }

    #[test]
    fn open_malformed_file_records_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tasks.json"), "{not json").unwrap();
        let app = app_in(&dir);
        assert!(app.tasks.is_empty());
        assert!(app.load_error.as_deref().unwrap().contains("could not parse"));
    }

    #[test]
    fn next_id_seeded_from_max_existing() {
        let dir = TempDir::new().unwrap();
        let app = App::new(
            dir.path().join("tasks.json"),
            vec![Task::new(7, "a"), Task::new(3, "b")],
            Theme::default(),
        );
        assert_eq!(app.next_id, 8);
        assert_eq!(app.list.items(), &[7, 3]);
    }

    #[test]
    fn add_task_persists_and_selects() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.add_task("one");
        let id = app.add_task("two");
        assert_eq!(id, Some(2));
        assert_eq!(app.list.selected(), Some(2));

        let on_disk = load_tasks(&app.tasks_path).unwrap();
        assert_eq!(on_disk, app.tasks);
    }

    #[test]
    fn add_task_refuses_when_ids_run_out() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            dir.path().join("tasks.json"),
            vec![Task::new(u64::MAX - 1, "last")],
            Theme::default(),
        );
        assert_eq!(app.next_id, u64::MAX);
        assert_eq!(app.add_task("one too many"), None);
        assert_eq!(app.tasks.len(), 1);
        assert!(app.status_is_error);
        assert!(app.status_message.as_deref().unwrap().contains("no task ids left"));
        assert!(!app.tasks_path.exists());
    }

    #[test]
    fn open_out_of_range_id_records_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("tasks.json"),
            r#"[{"id": 18446744073709551615, "title": "x", "status": "Todo", "complete": false}]"#,
        )
        .unwrap();
        let app = app_in(&dir);
        assert!(app.tasks.is_empty());
        assert!(app.load_error.as_deref().unwrap().contains("out of range"));
    }

    #[test]
    fn open_duplicate_ids_records_error() {
        let dir = TempDir::new().unwrap();
        save_tasks(
            &dir.path().join("tasks.json"),
            &[Task::new(4, "a"), Task::new(4, "b")],
        )
        .unwrap();
        let app = app_in(&dir);
        assert!(app.tasks.is_empty());
        assert!(app.load_error.as_deref().unwrap().contains("duplicate task id 4"));
    }

    #[test]
    fn rename_unknown_id_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        assert!(!app.rename_task(42, "x"));
        assert!(!app.tasks_path.exists());
    }

    #[test]
    fn status_operations_persist() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let id = app.add_task("a").unwrap();
        app.mark_in_progress(id);
        assert_eq!(load_tasks(&app.tasks_path).unwrap()[0].status, TaskStatus::InProgress);
        app.toggle_done(id);
        assert_eq!(load_tasks(&app.tasks_path).unwrap()[0].status, TaskStatus::Done);
        assert_eq!(app.counts(), (1, 1));
    }

    #[test]
    fn save_failure_sets_error_status_and_keeps_state() {
        let dir = TempDir::new().unwrap();
        let mut app = App::open(dir.path().join("missing/tasks.json"), Theme::default());
        app.add_task("kept in memory");
        assert_eq!(app.tasks.len(), 1);
        assert!(app.status_is_error);
        assert!(app.status_message.as_deref().unwrap().starts_with("save failed:"));
    }

    #[test]
    fn quit_after_load_error_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "garbage").unwrap();
        let mut app = App::open(path.clone(), Theme::default());
        app.quit();
        assert!(app.should_quit);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
    }

    #[test]
    fn resize_reserves_footer_rows() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.resize(100, 30);
        assert_eq!(app.list.size(), (100, 28));
        app.resize(10, 1);
        assert_eq!(app.list.size(), (10, 0));
    }
}
