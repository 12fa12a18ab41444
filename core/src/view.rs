//! View controller: turns UI events into collection operations and re-renders
//! the affected regions.
//!
//! # Design
//! The controller is in one of two modes. `Browsing` shows the list;
//! `Editing` shows the modal form, bound to an existing todo or to none when
//! creating. Rendering always goes through [`Templates`] and lands on a
//! [`Surface`], so nothing here knows about a DOM.
//!
//! Rejections from the server become alerts and leave the mode as it was.
//! Network failures also alert and are returned to the host.

use thiserror::Error;
use tracing::{debug, warn};

use crate::collection::Group;
use crate::error::ApiError;
use crate::form::{FormField, TodoForm};
use crate::surface::{Region, Surface};
use crate::templates::{TemplateError, Templates};
use crate::todos::{Mutation, Todos};
use crate::transport::Transport;
use crate::types::{TodoId, UpdateTodo};
use crate::view_model::ViewModel;

pub const UNSAVED_COMPLETE: &str = "Cannot mark as complete as item has not been created yet!";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Editing(TodoForm),
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// "Add new to do" clicked.
    NewItem,
    /// A todo's label clicked.
    EditItem(TodoId),
    /// A form input changed.
    Input { field: FormField, value: String },
    Submit,
    /// Click on the modal backdrop.
    Dismiss,
    /// "Mark as complete" clicked inside the form.
    MarkComplete,
    /// A row's checkbox toggled.
    Toggle(TodoId),
    Delete(TodoId),
    SelectSection { group: Group, title: String },
}

pub struct View<T, S> {
    todos: Todos<T>,
    templates: Templates,
    surface: S,
    mode: Mode,
}

impl<T: Transport, S: Surface> View<T, S> {
    /// Render the page shell. The list is empty until [`View::start`].
    pub fn new(todos: Todos<T>, templates: Templates, surface: S) -> Result<Self, ViewError> {
        let mut view = Self {
            todos,
            templates,
            surface,
            mode: Mode::Browsing,
        };
        view.render(&[Region::Body])?;
        Ok(view)
    }

    /// Fetch the initial list and render everything.
    pub fn start(&mut self) -> Result<(), ViewError> {
        let result = self.todos.initialize();
        if let Err(err) = result {
            return Err(self.network_failure(err));
        }
        self.render_page()
    }

    pub fn todos(&self) -> &Todos<T> {
        &self.todos
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn handle(&mut self, event: Event) -> Result<(), ViewError> {
        debug!(?event, "handling event");
        match event {
            Event::NewItem => {
                self.open_form(TodoForm::default());
                Ok(())
            }
            Event::EditItem(id) => {
                if let Some(form) = self.todos.get(&id).map(TodoForm::populate) {
                    self.open_form(form);
                }
                Ok(())
            }
            Event::Input { field, value } => {
                if let Mode::Editing(form) = &mut self.mode {
                    form.set(field, value);
                }
                Ok(())
            }
            Event::Submit => self.submit(),
            Event::Dismiss => {
                self.close_form();
                Ok(())
            }
            Event::MarkComplete => self.mark_complete(),
            Event::Toggle(id) => self.toggle(&id),
            Event::Delete(id) => {
                let result = self.todos.remove(&id);
                self.settle(result)?;
                self.render_page()
            }
            Event::SelectSection { group, title } => {
                self.todos.set_current_section(group, title);
                self.surface.highlight(self.todos.section());
                self.render_main()
            }
        }
    }

    pub fn render_page(&mut self) -> Result<(), ViewError> {
        self.render_main()?;
        self.render_sidebar()
    }

    pub fn render_main(&mut self) -> Result<(), ViewError> {
        self.render(&Region::MAIN)
    }

    pub fn render_sidebar(&mut self) -> Result<(), ViewError> {
        self.render(&Region::SIDEBAR)?;
        self.surface.highlight(self.todos.section());
        Ok(())
    }

    fn render(&mut self, regions: &[Region]) -> Result<(), ViewError> {
        let model = ViewModel::from_collection(self.todos.collection());
        for &region in regions {
            let markup = self.templates.render(region.template(), &model)?;
            self.surface.replace(region, markup);
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), ViewError> {
        let Mode::Editing(form) = &self.mode else {
            return Ok(());
        };
        let bound = form.bound().cloned();
        let data = match form.validate() {
            Ok(data) => data,
            Err(err) => {
                self.surface.alert(&err.to_string());
                return Ok(());
            }
        };

        let result = match &bound {
            None => self.todos.add(&data.to_create()),
            Some(id) => self.todos.update(id, &data.to_update()),
        };
        if self.settle(result)? {
            self.close_form();
            self.render_page()?;
        }
        Ok(())
    }

    fn mark_complete(&mut self) -> Result<(), ViewError> {
        let Mode::Editing(form) = &self.mode else {
            return Ok(());
        };
        let Some(id) = form.bound().cloned() else {
            self.surface.alert(UNSAVED_COMPLETE);
            return Ok(());
        };
        self.close_form();
        if self.todos.get(&id).is_some_and(|todo| !todo.completed) {
            self.toggle(&id)?;
        }
        Ok(())
    }

    /// Flip completion through the regular update path.
    fn toggle(&mut self, id: &TodoId) -> Result<(), ViewError> {
        let Some(completed) = self.todos.get(id).map(|todo| todo.completed) else {
            debug!(%id, "toggle for a todo that is no longer listed");
            return Ok(());
        };
        let result = self.todos.update(id, &UpdateTodo::completion(!completed));
        self.settle(result)?;
        self.render_page()
    }

    /// Report the outcome of a mutation to the user. `Ok(true)` when it was
    /// applied.
    fn settle(&mut self, result: Result<Mutation, ApiError>) -> Result<bool, ViewError> {
        match result {
            Ok(Mutation::Applied) => Ok(true),
            Ok(Mutation::Rejected(message)) => {
                self.surface.alert(&message);
                Ok(false)
            }
            Err(err) => Err(self.network_failure(err)),
        }
    }

    fn network_failure(&mut self, err: ApiError) -> ViewError {
        warn!(error = %err, "operation failed");
        self.surface.alert(&err.to_string());
        ViewError::Api(err)
    }

    fn open_form(&mut self, form: TodoForm) {
        self.surface.show_form(&form);
        self.mode = Mode::Editing(form);
    }

    fn close_form(&mut self) {
        self.mode = Mode::Browsing;
        self.surface.hide_form();
    }
}
