//! Column file browser: favorites on the left, one column per expanded directory on the right.
//!
//! `Browser` holds the navigation state and turns widget notices into driver commands. It never
//! touches the widget tree directly; every structural change goes out as an `Update` the driver
//! applies between dispatch passes.

pub mod favorites;
pub mod listing;
pub mod open;
pub mod view;

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::event::{Buttons, Key, KeyCode};
use crate::ui::core::id::Id;
use crate::ui::core::style::Style;
use crate::ui::core::theme::Theme;
use crate::ui::core::widget::{KidsUpdate, Notice, NoticeKind, Update, Widget};
use crate::ui::driver::Command;
use crate::ui::widgets::equal_split;

pub use favorites::{Favorite, FavoritesError};
pub use open::{CommandOpener, Opener};
pub use view::{BrowserIds, ColumnIds};

#[derive(Debug)]
pub enum BrowserError {
    Listing { path: String, source: io::Error },
    Favorites(FavoritesError),
}

impl std::fmt::Display for BrowserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserError::Listing { path, source } => write!(f, "listing {}: {}", path, source),
            BrowserError::Favorites(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::Listing { source, .. } => Some(source),
            BrowserError::Favorites(e) => Some(e),
        }
    }
}

impl From<FavoritesError> for BrowserError {
    fn from(e: FavoritesError) -> Self {
        BrowserError::Favorites(e)
    }
}

/// One directory level. `name` is the selected entry (possibly empty); `visible` is the part of
/// `names` the filter currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub names: Vec<String>,
    pub visible: Vec<String>,
    /// Set when the directory could not be listed.
    pub error: Option<String>,
    pub ids: ColumnIds,
}

impl Column {
    fn listed(names: Vec<String>) -> Self {
        Self {
            name: String::new(),
            visible: names.clone(),
            names,
            error: None,
            ids: ColumnIds::new(),
        }
    }

    fn failed(message: String) -> Self {
        Self {
            name: String::new(),
            names: Vec::new(),
            visible: Vec::new(),
            error: Some(message),
            ids: ColumnIds::new(),
        }
    }

    fn list(path: &str) -> Self {
        match listing::list_dir(Path::new(path)) {
            Ok(names) => Self::listed(names),
            Err(err) => {
                tracing::warn!(path, error = %err, "listing failed");
                Self::failed(format!("{}: {}", path, err))
            }
        }
    }
}

pub struct Browser {
    favorites_path: PathBuf,
    favorites: Vec<Favorite>,
    /// Directory of the active favorite, ending in `/`.
    base: String,
    columns: Vec<Column>,
    ids: BrowserIds,
    opener: Box<dyn Opener>,
    error_style: Style,
}

impl Browser {
    /// Load favorites and list the home directory. Either failing is fatal.
    pub fn new(config: &Config, opener: Box<dyn Opener>) -> Result<Self, BrowserError> {
        let favorites = favorites::load(&config.favorites_path, &config.home_dir())?;
        let base = dir_path(&config.home_dir());
        let names = listing::list_dir(Path::new(&base)).map_err(|source| {
            BrowserError::Listing {
                path: base.clone(),
                source,
            }
        })?;
        tracing::info!(base = %base, favorites = favorites.len(), "browser started");
        Ok(Self {
            favorites_path: config.favorites_path.clone(),
            favorites,
            base,
            columns: vec![Column::listed(names)],
            ids: BrowserIds::new(),
            opener,
            error_style: Theme::default().error,
        })
    }

    pub fn ids(&self) -> &BrowserIds {
        &self.ids
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// The active favorite followed by every column's selection.
    pub fn path(&self) -> String {
        self.compose(self.columns.len())
    }

    pub fn toggle_text(&self) -> &'static str {
        if favorites::find(&self.favorites, &self.path()).is_some() {
            "-"
        } else {
            "+"
        }
    }

    /// Build the widget tree for the current state.
    pub fn ui(&self) -> Box<dyn Widget> {
        let columns = self.columns.iter().map(|c| self.column_ui(c)).collect();
        view::browser(
            &self.ids,
            self.toggle_text(),
            &self.path(),
            &self.favorites,
            columns,
        )
    }

    /// Where the pointer should start: the first column's filter field.
    pub fn initial_focus(&self) -> Id {
        self.columns[0].ids.field
    }

    pub fn handle(&mut self, notice: &Notice) -> Vec<Command> {
        let source = notice.source;
        if source == self.ids.toggle {
            if let NoticeKind::Clicked { .. } = notice.kind {
                return self.toggle_clicked();
            }
            return Vec::new();
        }
        if source == self.ids.favorites {
            if let NoticeKind::Selected { index, selected } = notice.kind {
                return if selected {
                    self.activate(index)
                } else {
                    self.keep_active_selected()
                };
            }
            return Vec::new();
        }
        let Some(col) = self.columns.iter().position(|c| {
            c.ids.field == source || c.ids.list == source
        }) else {
            return Vec::new();
        };
        match &notice.kind {
            NoticeKind::Edited { text } => self.filter(col, text),
            NoticeKind::Selected { index, selected } => {
                let name = match self.columns[col].visible.get(*index) {
                    Some(name) if *selected => name.clone(),
                    Some(_) => String::new(),
                    None => return Vec::new(),
                };
                self.select_name(col, &name)
            }
            NoticeKind::RowClicked { index, buttons } if *buttons == Buttons::RIGHT => {
                self.open_entry(col, *index);
                Vec::new()
            }
            NoticeKind::ListKey { key, selection } => self.list_key(col, *key, selection),
            _ => Vec::new(),
        }
    }

    /// Make `name` the selection of column `col`, dropping every column after it. When the
    /// resulting path is a directory and `name` is non-empty, its listing becomes a new last
    /// column.
    pub fn select_name(&mut self, col: usize, name: &str) -> Vec<Command> {
        if col >= self.columns.len() {
            tracing::warn!(col, name, "select past last column");
            return Vec::new();
        }
        tracing::info!(col, name, "select");
        self.columns.truncate(col + 1);
        self.columns[col].name = name.to_string();

        let path = self.path();
        let mut append = Vec::new();
        if listing::is_dir_name(&path) && !name.is_empty() {
            let column = Column::list(&path);
            append.push(self.column_ui(&column));
            self.columns.push(column);
        }

        let mut cmds = vec![Command::Update {
            target: self.ids.columns,
            update: Update::Kids(KidsUpdate {
                keep: col + 1,
                append,
                split: Some(equal_split(self.columns.len())),
            }),
        }];
        cmds.extend(self.header_updates());
        cmds
    }

    /// Switch the columns to favorite `index`.
    pub fn activate(&mut self, index: usize) -> Vec<Command> {
        let Some(reset) = self.switch_favorite(index) else {
            return Vec::new();
        };
        let mut cmds = vec![reset];
        cmds.extend(self.header_updates());
        cmds
    }

    /// Point the columns at favorite `index`, returning the update that replaces them.
    fn switch_favorite(&mut self, index: usize) -> Option<Command> {
        let fav = self.favorites.get(index)?;
        self.base = dir_path(&fav.path);
        tracing::info!(base = %self.base, "activate favorite");
        for (i, f) in self.favorites.iter_mut().enumerate() {
            f.active = i == index;
        }
        let column = Column::list(&self.base);
        let ui = self.column_ui(&column);
        self.columns = vec![column];
        Some(Command::Update {
            target: self.ids.columns,
            update: Update::Kids(KidsUpdate {
                keep: 0,
                append: vec![ui],
                split: Some(equal_split(1)),
            }),
        })
    }

    /// Add the current path to the favorites, or remove it when present. The built-in entries
    /// are left alone. The list on screen follows even when saving fails.
    pub fn toggle_favorite(&mut self) -> Result<Vec<Command>, BrowserError> {
        let Some(mut cmds) = self.toggle_entry() else {
            return Ok(Vec::new());
        };
        favorites::save(&self.favorites_path, &self.favorites)?;
        cmds.extend(self.header_updates());
        Ok(cmds)
    }

    fn toggle_clicked(&mut self) -> Vec<Command> {
        let Some(mut cmds) = self.toggle_entry() else {
            return Vec::new();
        };
        match favorites::save(&self.favorites_path, &self.favorites) {
            Ok(()) => cmds.extend(self.header_updates()),
            Err(err) => {
                tracing::error!(error = %err, "toggle favorite");
                cmds.push(Command::Update {
                    target: self.ids.path,
                    update: Update::Text(format!("{} ({})", self.path(), err)),
                });
                cmds.push(Command::Update {
                    target: self.ids.toggle,
                    update: Update::Text(self.toggle_text().to_string()),
                });
            }
        }
        cmds
    }

    /// Flip the current path's membership in memory. Removing the active favorite moves the
    /// columns back to home. `None` when the path is a built-in entry.
    fn toggle_entry(&mut self) -> Option<Vec<Command>> {
        let path = self.path();
        let mut cmds = Vec::new();
        match favorites::find(&self.favorites, &path) {
            Some(i) if i < favorites::SYNTHETIC => {
                tracing::info!(path = %path, "built-in favorite left alone");
                return None;
            }
            Some(i) => {
                tracing::info!(path = %path, "remove favorite");
                if self.favorites.remove(i).active {
                    cmds.extend(self.switch_favorite(0));
                }
            }
            None => {
                tracing::info!(path = %path, "add favorite");
                self.favorites.push(Favorite::new(path));
            }
        }
        cmds.insert(0, self.favorites_update());
        Some(cmds)
    }

    /// The favorites list has no "nothing selected" state; undo a deselect.
    fn keep_active_selected(&self) -> Vec<Command> {
        let active = self
            .favorites
            .iter()
            .enumerate()
            .filter(|(_, f)| f.active)
            .map(|(i, _)| i)
            .collect();
        vec![Command::Update {
            target: self.ids.favorites,
            update: Update::Select(active),
        }]
    }

    /// Narrow column `col` to names containing `text`. An exact match selects that name and
    /// moves the pointer to the last column's field.
    fn filter(&mut self, col: usize, text: &str) -> Vec<Command> {
        let column = &mut self.columns[col];
        column.visible = column
            .names
            .iter()
            .filter(|n| n.contains(text))
            .cloned()
            .collect();
        let exact = column.names.iter().any(|n| n == text);

        let mut cmds = Vec::new();
        if exact {
            cmds = self.select_name(col, text);
        }
        let column = &self.columns[col];
        cmds.insert(
            0,
            Command::Update {
                target: column.ids.list,
                update: Update::Values(view::list_values(&column.visible, &column.name)),
            },
        );
        if exact {
            if let Some(last) = self.columns.last().filter(|c| c.error.is_none()) {
                cmds.push(Command::Focus(last.ids.field));
            }
        }
        cmds
    }

    fn list_key(&mut self, col: usize, key: Key, selection: &[usize]) -> Vec<Command> {
        let single = match selection {
            [index] => self.columns[col].visible.get(*index).cloned(),
            _ => None,
        };
        match key.code {
            KeyCode::Enter => {
                if let [index] = selection {
                    self.open_entry(col, *index);
                }
                Vec::new()
            }
            KeyCode::Left if col > 0 => {
                let prev = col - 1;
                let mut cmds = self.select_name(prev, "");
                let list = self.columns[prev].ids.list;
                cmds.push(Command::Update {
                    target: list,
                    update: Update::Select(Vec::new()),
                });
                cmds.push(Command::Focus(list));
                cmds
            }
            KeyCode::Left => {
                let mut cmds = self.select_name(col, "");
                cmds.push(Command::Update {
                    target: self.columns[col].ids.list,
                    update: Update::Select(Vec::new()),
                });
                cmds
            }
            KeyCode::Right => match single {
                Some(elem) if listing::is_dir_name(&elem) => self.expand(col, &elem),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Open directory `elem` of column `col`, select the first entry of the new column and move
    /// the pointer into it.
    fn expand(&mut self, col: usize, elem: &str) -> Vec<Command> {
        let mut cmds = self.select_name(col, elem);
        let next = col + 1;
        let Some(column) = self.columns.get(next).filter(|c| c.error.is_none()) else {
            return cmds;
        };
        let target = column.ids.column;
        if let Some(first) = column.names.first().cloned() {
            let list = column.ids.list;
            cmds.extend(self.select_name(next, &first));
            cmds.push(Command::Update {
                target: list,
                update: Update::Select(vec![0]),
            });
        }
        cmds.push(Command::Focus(target));
        cmds
    }

    fn open_entry(&self, col: usize, index: usize) {
        if let Some(name) = self.columns[col].visible.get(index) {
            let path = format!("{}{}", self.compose(col), name);
            self.opener.open(&path);
        }
    }

    fn compose(&self, cols: usize) -> String {
        let mut path = self.base.clone();
        for column in self.columns.iter().take(cols) {
            path.push_str(&column.name);
        }
        path
    }

    fn column_ui(&self, column: &Column) -> Box<dyn Widget> {
        match &column.error {
            Some(message) => view::failed_column(column.ids, message, self.error_style),
            None => view::column(column.ids, &column.visible, &column.name),
        }
    }

    fn favorites_update(&self) -> Command {
        Command::Update {
            target: self.ids.favorites,
            update: Update::Values(view::favorite_values(&self.favorites)),
        }
    }

    fn header_updates(&self) -> [Command; 2] {
        [
            Command::Update {
                target: self.ids.path,
                update: Update::Text(self.path()),
            },
            Command::Update {
                target: self.ids.toggle,
                update: Update::Text(self.toggle_text().to_string()),
            },
        ]
    }
}

/// `path` as a directory prefix, ending in `/`.
fn dir_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/files/mod.rs"]
mod tests;
