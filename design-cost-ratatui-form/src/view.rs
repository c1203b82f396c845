//! Layout, drawing and input handling for the terminal form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use design_cost::{
    AnswerSet, Bedrooms, CheckboxField, Choice, ExtensionType, FormComponent, FormCopy, FormError,
    FormEvent, GroundFloorSubtype, PointerDown, PointerHub, PointerTarget, PropertyType,
    RequiredField, Service, TextField, Timeline,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
};

use crate::Theme;

/// Extra vertical space between questions.
const SECTION_SPACING: u16 = 1;

/// How far one wheel notch scrolls.
const WHEEL_STEP: u16 = 3;

/// One question block on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    PropertyType,
    ExtensionType,
    Bedrooms,
    Timeline,
    Services,
    Text(TextField),
    Checkbox(CheckboxField),
}

pub(crate) const SECTIONS: [Section; 14] = [
    Section::PropertyType,
    Section::ExtensionType,
    Section::Bedrooms,
    Section::Timeline,
    Section::Services,
    Section::Text(TextField::FirstName),
    Section::Text(TextField::LastName),
    Section::Text(TextField::Address),
    Section::Text(TextField::Postcode),
    Section::Text(TextField::Email),
    Section::Text(TextField::Phone),
    Section::Text(TextField::Source),
    Section::Checkbox(CheckboxField::AcceptTerms),
    Section::Checkbox(CheckboxField::Newsletter),
];

impl Section {
    fn index(self) -> usize {
        SECTIONS
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }

    fn option_count(self) -> usize {
        match self {
            Self::PropertyType => PropertyType::ALL.len(),
            Self::ExtensionType => ExtensionType::ALL.len(),
            Self::Bedrooms => Bedrooms::ALL.len(),
            Self::Timeline => Timeline::ALL.len(),
            Self::Services => Service::ALL.len(),
            Self::Text(_) | Self::Checkbox(_) => 0,
        }
    }

    /// Options laid out side by side, navigated with Left/Right.
    fn is_button_row(self) -> bool {
        matches!(
            self,
            Self::PropertyType | Self::ExtensionType | Self::Bedrooms | Self::Timeline
        )
    }

    /// A line of text above the block.
    fn heading(self, copy: &FormCopy) -> Option<&str> {
        match self {
            Self::Text(TextField::FirstName) => Some(&copy.details_prompt),
            _ => None,
        }
    }

    fn height(self, copy: &FormCopy) -> u16 {
        let block = match self {
            Self::Services => 2 + Service::ALL.len() as u16,
            _ => 3,
        };
        block + u16::from(self.heading(copy).is_some())
    }

    fn prompt(self, copy: &FormCopy) -> String {
        match self {
            Self::PropertyType => copy.property_type_prompt.clone(),
            Self::ExtensionType => copy.extension_type_prompt.clone(),
            Self::Bedrooms => copy.bedrooms_prompt.clone(),
            Self::Timeline => copy.timeline_prompt.clone(),
            Self::Services => copy.services_prompt.clone(),
            Self::Text(field) if field.is_required() => format!("{}*", field.label()),
            Self::Text(field) => field.label().to_string(),
            Self::Checkbox(field) if field.is_required() => "Required".to_string(),
            Self::Checkbox(_) => "Optional".to_string(),
        }
    }

    /// The clickable option at `index`.
    fn option(self, index: usize) -> Option<Element> {
        match self {
            Self::PropertyType => PropertyType::ALL.get(index).map(|p| Element::PropertyType(*p)),
            Self::ExtensionType => ExtensionType::ALL
                .get(index)
                .map(|e| Element::ExtensionType(*e)),
            Self::Bedrooms => Bedrooms::ALL.get(index).map(|b| Element::Bedrooms(*b)),
            Self::Timeline => Timeline::ALL.get(index).map(|t| Element::Timeline(*t)),
            Self::Services => Service::ALL.get(index).map(|s| Element::Service(*s)),
            Self::Text(_) | Self::Checkbox(_) => None,
        }
    }

    /// Index of the stored answer, for placing the keyboard highlight.
    fn selected_index(self, answers: &AnswerSet) -> Option<usize> {
        match self {
            Self::PropertyType => answers.property_type.map(Choice::index),
            Self::ExtensionType => answers.extension.extension_type().map(Choice::index),
            Self::Bedrooms => answers.bedrooms.map(Choice::index),
            Self::Timeline => answers.timeline.map(Choice::index),
            Self::Services => answers.services.iter().next().map(Choice::index),
            Self::Text(_) | Self::Checkbox(_) => None,
        }
    }
}

/// Anything on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Element {
    PropertyType(PropertyType),
    ExtensionType(ExtensionType),
    GroundFloorSubtype(GroundFloorSubtype),
    /// The ground-floor menu body around its options.
    GroundFloorMenu,
    Bedrooms(Bedrooms),
    Timeline(Timeline),
    Service(Service),
    Text(TextField),
    Checkbox(CheckboxField),
    Submit,
}

impl Element {
    fn pointer_target(self) -> PointerTarget {
        match self {
            Self::ExtensionType(ExtensionType::GroundFloor) => PointerTarget::GroundFloorTrigger,
            Self::GroundFloorSubtype(_) | Self::GroundFloorMenu => PointerTarget::GroundFloorMenu,
            _ => PointerTarget::Elsewhere,
        }
    }

    fn section(self) -> Option<Section> {
        match self {
            Self::PropertyType(_) => Some(Section::PropertyType),
            Self::ExtensionType(_) | Self::GroundFloorSubtype(_) | Self::GroundFloorMenu => {
                Some(Section::ExtensionType)
            }
            Self::Bedrooms(_) => Some(Section::Bedrooms),
            Self::Timeline(_) => Some(Section::Timeline),
            Self::Service(_) => Some(Section::Services),
            Self::Text(field) => Some(Section::Text(field)),
            Self::Checkbox(field) => Some(Section::Checkbox(field)),
            Self::Submit => None,
        }
    }

    /// Position of this option within its section.
    fn option_index(self) -> Option<usize> {
        match self {
            Self::PropertyType(p) => Some(p.index()),
            Self::ExtensionType(e) => Some(e.index()),
            Self::Bedrooms(b) => Some(b.index()),
            Self::Timeline(t) => Some(t.index()),
            Self::Service(s) => Some(s.index()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Section(usize),
    Submit,
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Submit,
    Cancel,
}

/// Message shown next to the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Error(String),
}

/// Presentation state of the terminal form.
///
/// The answers themselves live in the [`FormComponent`]; this only tracks
/// focus, scrolling and where things were drawn.
pub(crate) struct FormView {
    focus: Focus,
    /// Highlighted option in the focused section.
    highlight: usize,
    /// Highlighted option in the ground-floor menu.
    menu_highlight: usize,
    /// Cursor position, in characters, in the focused text input.
    cursor: usize,
    scroll_offset: u16,
    /// Keep the focused section in view; cleared by wheel scrolling.
    follow_focus: bool,
    status: Option<Status>,
    /// Clickable regions from the last draw, bottom-most first.
    hits: Vec<(Rect, Element)>,
}

impl FormView {
    pub(crate) fn new() -> Self {
        Self {
            focus: Focus::Section(0),
            highlight: 0,
            menu_highlight: 0,
            cursor: 0,
            scroll_offset: 0,
            follow_focus: true,
            status: None,
            hits: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn focus(&self) -> Focus {
        self.focus
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    fn focused_section(&self) -> Option<Section> {
        match self.focus {
            Focus::Section(idx) => SECTIONS.get(idx).copied(),
            Focus::Submit => None,
        }
    }

    fn focus_section(&mut self, idx: usize, form: &FormComponent) {
        let Some(section) = SECTIONS.get(idx).copied() else {
            return;
        };
        self.focus = Focus::Section(idx);
        self.follow_focus = true;
        let answers = form.answers_ref();
        self.highlight = section.selected_index(&answers).unwrap_or(0);
        self.cursor = match section {
            Section::Text(field) => answers.text(field).chars().count(),
            _ => 0,
        };
    }

    fn next_section(&mut self, form: &FormComponent) {
        match self.focus {
            Focus::Section(idx) if idx + 1 < SECTIONS.len() => self.focus_section(idx + 1, form),
            _ => {
                self.focus = Focus::Submit;
                self.follow_focus = true;
            }
        }
    }

    fn prev_section(&mut self, form: &FormComponent) {
        match self.focus {
            Focus::Submit => self.focus_section(SECTIONS.len() - 1, form),
            Focus::Section(idx) if idx > 0 => self.focus_section(idx - 1, form),
            Focus::Section(_) => {}
        }
    }

    /// Show a failed submission and move focus to the first field to fix.
    pub(crate) fn show_error(&mut self, err: &FormError, form: &FormComponent) {
        self.status = Some(Status::Error(err.to_string()));
        if let Some(first) = err.missing_fields().first() {
            let section = match first {
                RequiredField::Text(field) => Section::Text(*field),
                RequiredField::Checkbox(field) => Section::Checkbox(*field),
            };
            self.focus_section(section.index(), form);
        }
    }

    // === Input ===

    pub(crate) fn handle_key(&mut self, key: KeyEvent, form: &FormComponent) -> Action {
        if form.popover_open() {
            let count = GroundFloorSubtype::ALL.len();
            match key.code {
                KeyCode::Esc => {
                    form.handle(FormEvent::DismissPopover);
                    return Action::None;
                }
                KeyCode::Up => {
                    self.menu_highlight = (self.menu_highlight + count - 1) % count;
                    return Action::None;
                }
                KeyCode::Down => {
                    self.menu_highlight = (self.menu_highlight + 1) % count;
                    return Action::None;
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(subtype) = GroundFloorSubtype::ALL.get(self.menu_highlight) {
                        form.handle(FormEvent::SelectGroundFloorSubtype(*subtype));
                    }
                    return Action::None;
                }
                // Leaving the question closes its menu.
                KeyCode::Tab | KeyCode::BackTab => form.handle(FormEvent::DismissPopover),
                _ => return Action::None,
            }
        }

        match key.code {
            KeyCode::Esc => return Action::Cancel,
            // Ctrl+Enter or F10 submit from anywhere
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Submit;
            }
            KeyCode::F(10) => return Action::Submit,
            KeyCode::BackTab | KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.prev_section(form);
            }
            KeyCode::BackTab => self.prev_section(form),
            KeyCode::Tab => self.next_section(form),
            KeyCode::Enter => match self.focused_section() {
                None => return Action::Submit,
                Some(Section::Text(_)) => self.next_section(form),
                Some(section) => self.activate(section, form),
            },
            KeyCode::Char(' ') => match self.focused_section() {
                None => return Action::Submit,
                Some(Section::Text(field)) => self.insert_char(field, ' ', form),
                Some(section) => self.activate(section, form),
            },
            KeyCode::Char(c) => {
                if let Some(Section::Text(field)) = self.focused_section() {
                    self.insert_char(field, c, form);
                }
            }
            KeyCode::Left => match self.focused_section() {
                Some(Section::Text(_)) => self.cursor = self.cursor.saturating_sub(1),
                Some(section) if section.is_button_row() => self.move_highlight(section, -1),
                _ => {}
            },
            KeyCode::Right => match self.focused_section() {
                Some(Section::Text(field)) => {
                    let len = form.answers_ref().text(field).chars().count();
                    self.cursor = (self.cursor + 1).min(len);
                }
                Some(section) if section.is_button_row() => self.move_highlight(section, 1),
                _ => {}
            },
            KeyCode::Up => match self.focused_section() {
                Some(Section::Services) if self.highlight > 0 => self.highlight -= 1,
                _ => self.prev_section(form),
            },
            KeyCode::Down => match self.focused_section() {
                Some(Section::Services) if self.highlight + 1 < Service::ALL.len() => {
                    self.highlight += 1;
                }
                _ => self.next_section(form),
            },
            KeyCode::Backspace => {
                if let Some(Section::Text(field)) = self.focused_section()
                    && self.cursor > 0
                {
                    self.cursor -= 1;
                    self.remove_char(field, self.cursor, form);
                }
            }
            KeyCode::Delete => {
                if let Some(Section::Text(field)) = self.focused_section() {
                    self.remove_char(field, self.cursor, form);
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => {
                if let Some(Section::Text(field)) = self.focused_section() {
                    self.cursor = form.answers_ref().text(field).chars().count();
                }
            }
            KeyCode::PageDown => {
                for _ in 0..5 {
                    self.next_section(form);
                }
            }
            KeyCode::PageUp => {
                for _ in 0..5 {
                    self.prev_section(form);
                }
            }
            _ => {}
        }
        Action::None
    }

    pub(crate) fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        form: &FormComponent,
        hub: &PointerHub,
    ) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let element = self.hit_test(mouse.column, mouse.row);
                let target = element.map_or(PointerTarget::Elsewhere, Element::pointer_target);
                hub.dispatch(PointerDown::new(target));
                match element {
                    Some(element) => self.click(element, form),
                    None => Action::None,
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                // A scroll counts as a press outside the menu.
                hub.dispatch(PointerDown::new(PointerTarget::Elsewhere));
                self.follow_focus = false;
                self.scroll_offset = if mouse.kind == MouseEventKind::ScrollDown {
                    self.scroll_offset.saturating_add(WHEEL_STEP)
                } else {
                    self.scroll_offset.saturating_sub(WHEEL_STEP)
                };
                Action::None
            }
            _ => Action::None,
        }
    }

    pub(crate) fn hit_test(&self, column: u16, row: u16) -> Option<Element> {
        let position = Position::new(column, row);
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, element)| *element)
    }

    /// Where `element` was drawn last, if it was visible.
    #[cfg(test)]
    pub(crate) fn region_of(&self, element: Element) -> Option<Rect> {
        self.hits
            .iter()
            .rev()
            .find(|(_, e)| *e == element)
            .map(|(rect, _)| *rect)
    }

    fn click(&mut self, element: Element, form: &FormComponent) -> Action {
        if let Some(section) = element.section()
            && self.focused_section() != Some(section)
        {
            self.focus_section(section.index(), form);
        }
        if let Some(index) = element.option_index() {
            self.highlight = index;
        }

        match element {
            Element::Submit => {
                self.focus = Focus::Submit;
                return Action::Submit;
            }
            Element::GroundFloorMenu => {}
            Element::Text(_) => {}
            Element::Checkbox(field) => {
                let checked = form.answers_ref().checkbox(field);
                form.handle(FormEvent::SetCheckbox(field, !checked));
            }
            other => {
                if let Some(event) = option_event(other) {
                    self.apply_option(event, form);
                }
            }
        }
        Action::None
    }

    /// Space/Enter on a focused section.
    fn activate(&mut self, section: Section, form: &FormComponent) {
        if let Section::Checkbox(field) = section {
            let checked = form.answers_ref().checkbox(field);
            form.handle(FormEvent::SetCheckbox(field, !checked));
        } else if let Some(event) = section.option(self.highlight).and_then(option_event) {
            self.apply_option(event, form);
        }
    }

    fn apply_option(&mut self, event: FormEvent, form: &FormComponent) {
        form.handle(event);
        if form.popover_open() {
            let current = form.answers_ref().extension.ground_floor_subtype();
            self.menu_highlight = current.map_or(0, Choice::index);
        }
    }

    fn move_highlight(&mut self, section: Section, delta: isize) {
        let count = section.option_count();
        if count == 0 {
            return;
        }
        self.highlight = (self.highlight as isize + delta).rem_euclid(count as isize) as usize;
    }

    fn insert_char(&mut self, field: TextField, c: char, form: &FormComponent) {
        let mut value = form.answers_ref().text(field).to_string();
        let at = byte_offset(&value, self.cursor);
        value.insert(at, c);
        self.cursor += 1;
        form.handle(FormEvent::SetText(field, value));
    }

    fn remove_char(&mut self, field: TextField, char_idx: usize, form: &FormComponent) {
        let mut value = form.answers_ref().text(field).to_string();
        if char_idx >= value.chars().count() {
            return;
        }
        value.remove(byte_offset(&value, char_idx));
        form.handle(FormEvent::SetText(field, value));
    }

    // === Layout ===

    fn section_y(idx: usize, copy: &FormCopy) -> u16 {
        SECTIONS[..idx]
            .iter()
            .map(|section| section.height(copy) + SECTION_SPACING)
            .sum()
    }

    fn total_content_height(copy: &FormCopy) -> u16 {
        Self::section_y(SECTIONS.len(), copy).saturating_sub(SECTION_SPACING)
    }

    /// Keep the focused section inside the viewport.
    fn adjust_scroll(&mut self, viewport_height: u16, copy: &FormCopy) {
        let max_offset = Self::total_content_height(copy).saturating_sub(viewport_height);
        if self.follow_focus
            && let Focus::Section(idx) = self.focus
        {
            let top = Self::section_y(idx, copy);
            let bottom = top + SECTIONS[idx].height(copy);
            if top < self.scroll_offset {
                self.scroll_offset = top;
            }
            if bottom > self.scroll_offset + viewport_height {
                self.scroll_offset = bottom.saturating_sub(viewport_height);
            }
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    // === Drawing ===

    pub(crate) fn draw(
        &mut self,
        frame: &mut Frame,
        form: &FormComponent,
        copy: &FormCopy,
        theme: &Theme,
    ) {
        self.hits.clear();
        let answers = form.answers();
        let area = frame.area();

        let [title_area, form_area, submit_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        self.draw_title(frame, title_area, copy, theme);

        let viewport_height = form_area.height;
        let content_width = form_area.width.saturating_sub(2);
        self.adjust_scroll(viewport_height, copy);

        for (idx, section) in SECTIONS.iter().copied().enumerate() {
            let top = Self::section_y(idx, copy);
            let height = section.height(copy);
            // Only whole sections are drawn.
            if top < self.scroll_offset || top + height > self.scroll_offset + viewport_height {
                continue;
            }
            let section_area = Rect {
                x: form_area.x + 1,
                y: form_area.y + top - self.scroll_offset,
                width: content_width,
                height,
            };
            let focused = self.focus == Focus::Section(idx);
            self.draw_section(frame, section, section_area, focused, form, &answers, copy, theme);
        }

        let total_height = Self::total_content_height(copy);
        if total_height > viewport_height {
            let scrollbar_area = Rect {
                x: form_area.x + form_area.width.saturating_sub(1),
                y: form_area.y,
                width: 1,
                height: viewport_height,
            };
            let mut scrollbar_state = ScrollbarState::new(total_height as usize)
                .position(self.scroll_offset as usize)
                .viewport_content_length(viewport_height as usize);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█");
            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
        }

        if form.popover_open() {
            self.draw_menu(frame, form_area, &answers, copy, theme);
        }

        self.draw_submit_bar(frame, submit_area, copy, theme);

        let help_text = if form.popover_open() {
            "↑/↓: Choose  Space/Enter: Select  Esc: Close menu"
        } else {
            "Tab: Next  ←/→ ↑/↓: Move  Space/Enter: Select  F10: Submit  Esc: Cancel"
        };
        let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
        frame.render_widget(help, help_area);
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect, copy: &FormCopy, theme: &Theme) {
        let mut lines = vec![Line::from(Span::styled(
            copy.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(intro) = &copy.intro {
            lines.push(Line::from(Span::styled(
                intro.clone(),
                Style::default().fg(theme.text),
            )));
        }
        let title = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(title, area);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_section(
        &mut self,
        frame: &mut Frame,
        section: Section,
        mut area: Rect,
        focused: bool,
        form: &FormComponent,
        answers: &AnswerSet,
        copy: &FormCopy,
        theme: &Theme,
    ) {
        if let Some(heading) = section.heading(copy) {
            let heading_area = Rect { height: 1, ..area };
            let heading = Paragraph::new(heading.to_string()).style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(heading, heading_area);
            area.y += 1;
            area.height -= 1;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { theme.primary } else { theme.border }))
            .title(format!(" {} ", section.prompt(copy)))
            .title_style(Style::default().fg(if focused { theme.highlight } else { theme.text }));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let highlight = focused.then_some(self.highlight);
        match section {
            Section::PropertyType => {
                let options = PropertyType::ALL
                    .iter()
                    .map(|p| {
                        let selected = answers.property_type == Some(*p);
                        (p.label().to_string(), selected, Element::PropertyType(*p))
                    })
                    .collect();
                self.draw_buttons(frame, inner, options, highlight, theme);
            }
            Section::ExtensionType => {
                let open = form.popover_open();
                let options = ExtensionType::ALL
                    .iter()
                    .map(|e| {
                        let selected = form.is_extension_selected(*e);
                        let label = match (e, answers.extension.ground_floor_subtype()) {
                            (ExtensionType::GroundFloor, _) if open => format!("{} ▴", e.label()),
                            (ExtensionType::GroundFloor, Some(subtype)) => {
                                format!("{}: {}", e.label(), subtype.label())
                            }
                            (ExtensionType::GroundFloor, None) => format!("{} ▾", e.label()),
                            _ => e.label().to_string(),
                        };
                        (label, selected, Element::ExtensionType(*e))
                    })
                    .collect();
                self.draw_buttons(frame, inner, options, highlight, theme);
            }
            Section::Bedrooms => {
                let options = Bedrooms::ALL
                    .iter()
                    .map(|b| {
                        let selected = answers.bedrooms == Some(*b);
                        (b.label().to_string(), selected, Element::Bedrooms(*b))
                    })
                    .collect();
                self.draw_buttons(frame, inner, options, highlight, theme);
            }
            Section::Timeline => {
                let options = Timeline::ALL
                    .iter()
                    .map(|t| {
                        let selected = answers.timeline == Some(*t);
                        (t.label().to_string(), selected, Element::Timeline(*t))
                    })
                    .collect();
                self.draw_buttons(frame, inner, options, highlight, theme);
            }
            Section::Services => {
                for (idx, service) in Service::ALL.iter().enumerate() {
                    let row = Rect {
                        y: inner.y + idx as u16,
                        height: 1,
                        ..inner
                    };
                    if row.y >= inner.y + inner.height {
                        break;
                    }
                    let checked = answers.services.contains(*service);
                    let marker = if checked { "[✓]" } else { "[ ]" };
                    let mut style =
                        Style::default().fg(if checked { theme.success } else { theme.text });
                    if highlight == Some(idx) {
                        style = style.bg(theme.selected_bg).add_modifier(Modifier::BOLD);
                    }
                    let text = Paragraph::new(format!("{marker} {}", service.label())).style(style);
                    frame.render_widget(text, row);
                    self.hits.push((row, Element::Service(*service)));
                }
            }
            Section::Text(field) => {
                // Keep the cursor inside the box by scrolling the text sideways.
                let offset = if focused {
                    self.cursor
                        .saturating_sub(usize::from(inner.width.saturating_sub(1)))
                } else {
                    0
                };
                let visible: String = answers.text(field).chars().skip(offset).collect();
                let text = Paragraph::new(visible).style(Style::default().fg(theme.text));
                frame.render_widget(text, inner);
                self.hits.push((area, Element::Text(field)));

                if focused {
                    let cursor_x = inner.x + (self.cursor - offset) as u16;
                    if cursor_x < inner.x + inner.width {
                        frame.set_cursor_position((cursor_x, inner.y));
                    }
                }
            }
            Section::Checkbox(field) => {
                let checked = answers.checkbox(field);
                let marker = if checked { "[✓]" } else { "[ ]" };
                let mut style =
                    Style::default().fg(if checked { theme.success } else { theme.text });
                if focused {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let text = Paragraph::new(format!("{marker} {}", field.label())).style(style);
                frame.render_widget(text, inner);
                self.hits.push((area, Element::Checkbox(field)));
            }
        }
    }

    /// A row of equally wide single-select buttons.
    fn draw_buttons(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        options: Vec<(String, bool, Element)>,
        highlight: Option<usize>,
        theme: &Theme,
    ) {
        let count = options.len() as u32;
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, count); options.len()]).split(area);

        for (idx, ((label, selected, element), cell)) in options.into_iter().zip(cells.iter()).enumerate() {
            let mut style = if selected {
                Style::default()
                    .fg(theme.highlight)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            if highlight == Some(idx) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let text = if selected {
                format!("(●) {label}")
            } else {
                format!("( ) {label}")
            };
            let button = Paragraph::new(text).style(style).alignment(Alignment::Center);
            frame.render_widget(button, *cell);
            self.hits.push((*cell, element));
        }
    }

    /// The ground-floor menu, anchored to its trigger.
    fn draw_menu(
        &mut self,
        frame: &mut Frame,
        bounds: Rect,
        answers: &AnswerSet,
        copy: &FormCopy,
        theme: &Theme,
    ) {
        let trigger = self
            .hits
            .iter()
            .find(|(_, e)| *e == Element::ExtensionType(ExtensionType::GroundFloor))
            .map(|(rect, _)| *rect);
        // Trigger scrolled out of view.
        let Some(trigger) = trigger else {
            return;
        };

        let widest = GroundFloorSubtype::ALL
            .iter()
            .map(|s| s.label().chars().count() as u16)
            .max()
            .unwrap_or_default();
        let width = (widest + 6).max(trigger.width).min(bounds.width);
        let height = (GroundFloorSubtype::ALL.len() as u16 + 2).min(bounds.height);

        let below = trigger.y + trigger.height;
        let y = if below + height <= bounds.y + bounds.height {
            below
        } else {
            trigger.y.saturating_sub(height).max(bounds.y)
        };
        let x = trigger.x.min((bounds.x + bounds.width).saturating_sub(width));
        let menu = Rect { x, y, width, height };

        frame.render_widget(Clear, menu);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.secondary))
            .title(format!(" {} ", copy.ground_floor_prompt));
        let inner = block.inner(menu);
        frame.render_widget(block, menu);
        self.hits.push((menu, Element::GroundFloorMenu));

        let current = answers.extension.ground_floor_subtype();
        for (idx, subtype) in GroundFloorSubtype::ALL.iter().enumerate() {
            let row = Rect {
                y: inner.y + idx as u16,
                height: 1,
                ..inner
            };
            if row.y >= inner.y + inner.height {
                break;
            }
            let marker = if current == Some(*subtype) { "(●)" } else { "( )" };
            let style = if idx == self.menu_highlight {
                Style::default()
                    .fg(theme.text)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else if current == Some(*subtype) {
                Style::default().fg(theme.highlight)
            } else {
                Style::default().fg(theme.text)
            };
            frame.render_widget(
                Paragraph::new(format!("{marker} {}", subtype.label())).style(style),
                row,
            );
            self.hits.push((row, Element::GroundFloorSubtype(*subtype)));
        }
    }

    fn draw_submit_bar(&mut self, frame: &mut Frame, area: Rect, copy: &FormCopy, theme: &Theme) {
        let button_width = (copy.submit_label.chars().count() as u16 + 8).min(area.width);
        let [status_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(area);

        if let Some(status) = &self.status {
            let Status::Error(text) = status;
            let status = Paragraph::new(format!("⚠ {text}"))
                .style(Style::default().fg(theme.error))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(theme.border)));
            frame.render_widget(status, status_area);
        }

        let focused = self.focus == Focus::Submit;
        let style = if focused {
            Style::default()
                .fg(theme.text)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        };
        let text = if focused {
            format!("[ {} ]", copy.submit_label)
        } else {
            copy.submit_label.clone()
        };
        let button = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if focused { theme.primary } else { theme.border })),
            );
        frame.render_widget(button, button_area);
        self.hits.push((button_area, Element::Submit));
    }
}

/// The form event a click on an option stands for.
fn option_event(element: Element) -> Option<FormEvent> {
    match element {
        Element::PropertyType(p) => Some(FormEvent::SelectPropertyType(p)),
        Element::ExtensionType(e) => Some(FormEvent::SelectExtensionType(e)),
        Element::GroundFloorSubtype(s) => Some(FormEvent::SelectGroundFloorSubtype(s)),
        Element::Bedrooms(b) => Some(FormEvent::SelectBedrooms(b)),
        Element::Timeline(t) => Some(FormEvent::SelectTimeline(t)),
        Element::Service(s) => Some(FormEvent::ToggleService(s)),
        _ => None,
    }
}

fn byte_offset(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map_or(value.len(), |(offset, _)| offset)
}
