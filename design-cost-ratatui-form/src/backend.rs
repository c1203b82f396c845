//! Ratatui implementation of the design-cost form.
//!
//! Shows every question at once in a scrollable page, with the ground-floor
//! menu drawn as a popover under its button.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use design_cost::{
    AnswerSet, FormComponent, FormCopy, FormError, FormFrontend, PointerHub, SubmitOutcome,
    Submitter,
};
use ratatui::{Frame, Terminal, prelude::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use thiserror::Error;

use crate::view::{Action, FormView, Status};

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// User cancelled the form (e.g., pressed Esc).
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl RatatuiFormError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Form(FormError::Cancelled))
    }
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Terminal frontend for the design-cost form.
#[derive(Debug, Clone, Default)]
pub struct RatatuiFormBackend {
    theme: Theme,
}

impl RatatuiFormBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        copy: &FormCopy,
        submitter: &dyn Submitter,
    ) -> Result<AnswerSet, RatatuiFormError> {
        let mut session = Session::new(copy, &self.theme);
        loop {
            terminal.draw(|frame| session.draw(frame))?;
            match session.handle(event::read()?, submitter)? {
                Step::Continue => {}
                Step::Done(answers) => return Ok(answers),
                Step::Cancelled => return Err(RatatuiFormError::Cancelled),
            }
        }
    }
}

impl FormFrontend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn collect(&self, copy: &FormCopy, submitter: &dyn Submitter) -> Result<AnswerSet, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        tracing::debug!("terminal ready");
        let result = self.run(&mut terminal, copy, submitter);
        let restored = self.restore_terminal(&mut terminal);
        settle(result, restored)
    }
}

/// A failed terminal restore is logged; the form's own result is returned.
fn settle(
    result: Result<AnswerSet, RatatuiFormError>,
    restored: Result<(), RatatuiFormError>,
) -> Result<AnswerSet, RatatuiFormError> {
    if let Err(err) = restored {
        tracing::error!(%err, "failed to restore terminal");
    }
    result
}

/// Outcome of one terminal event.
#[derive(Debug)]
enum Step {
    Continue,
    Done(AnswerSet),
    Cancelled,
}

/// A mounted form plus its terminal presentation.
struct Session<'a> {
    copy: &'a FormCopy,
    theme: &'a Theme,
    form: FormComponent,
    hub: PointerHub,
    view: FormView,
}

impl<'a> Session<'a> {
    fn new(copy: &'a FormCopy, theme: &'a Theme) -> Self {
        let hub = PointerHub::new();
        let form = FormComponent::mount(&hub);
        Self {
            copy,
            theme,
            form,
            hub,
            view: FormView::new(),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.view.draw(frame, &self.form, self.copy, self.theme);
    }

    fn handle(&mut self, event: Event, submitter: &dyn Submitter) -> Result<Step, RatatuiFormError> {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.view.handle_key(key, &self.form)
            }
            Event::Mouse(mouse) => self.view.handle_mouse(mouse, &self.form, &self.hub),
            _ => Action::None,
        };

        match action {
            Action::None => Ok(Step::Continue),
            Action::Cancel => {
                tracing::info!("form cancelled");
                Ok(Step::Cancelled)
            }
            Action::Submit => match self.form.submit(submitter) {
                Ok(SubmitOutcome::Accepted) => {
                    tracing::info!("enquiry accepted");
                    Ok(Step::Done(self.form.answers()))
                }
                Ok(SubmitOutcome::Rejected(reason)) => {
                    tracing::warn!(%reason, "enquiry rejected");
                    self.view.set_status(Status::Error(reason));
                    Ok(Step::Continue)
                }
                Err(err @ FormError::MissingRequired(_)) => {
                    self.view.show_error(&err, &self.form);
                    Ok(Step::Continue)
                }
                Err(err) => Err(err.into()),
            },
        }
    }
}
