//! The page state record and its message-driven transitions.
//!
//! The view layer owns one [`Portfolio`], feeds every user and timer event in
//! as a [`Msg`] and re-renders from the record afterwards. Timers are not
//! owned here: [`Portfolio::intro_timer`] and [`Portfolio::list_timer`] say
//! which reveal should be pending right now, and the view arms exactly that
//! one, cancelling the previous timer whenever the request changes.

use crate::config::Pacing;
use crate::contact::{ContactForm, ContactWizard, Field};
use crate::content::{Project, Skill, DESCRIPTION_TEXT, PROJECTS, SKILLS, TITLE_TEXT, WELCOME_TEXT};
use crate::cursor::CursorState;
use crate::typewriter::{IntroLine, IntroSequence, Typewriter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Skills,
    Projects,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::About, Tab::Skills, Tab::Projects, Tab::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Program name shown at the panel prompt.
    pub fn command(self) -> &'static str {
        match self {
            Self::About => "run portfolio.exe",
            Self::Skills => "list_skills.exe",
            Self::Projects => "list_projects.exe",
            Self::Contact => "contact.exe",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reveal {
    Intro,
    Skills,
    Projects,
}

/// A reveal step the view should schedule `delay_ms` from now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub reveal: Reveal,
    pub activation: u32,
    pub cursor: usize,
    pub delay_ms: u32,
}

impl TimerRequest {
    pub fn tick(&self) -> Msg {
        Msg::RevealTick {
            reveal: self.reveal,
            activation: self.activation,
            cursor: self.cursor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    SelectTab(Tab),
    RevealTick {
        reveal: Reveal,
        activation: u32,
        cursor: usize,
    },
    SelectProject(usize),
    EditField(Field, String),
    Advance,
    PointerMoved { x: i32, y: i32 },
    PointerVisible(bool),
    Hover(bool),
    ToggleMenu,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Portfolio {
    pacing: Pacing,
    tab: Tab,
    activation: u32,
    intro: IntroSequence,
    skills: Typewriter,
    projects: Typewriter,
    selected_project: Option<usize>,
    contact: ContactWizard,
    cursor: CursorState,
    menu_open: bool,
}

impl Portfolio {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            tab: Tab::default(),
            activation: 0,
            intro: IntroSequence::new(WELCOME_TEXT, TITLE_TEXT, DESCRIPTION_TEXT),
            skills: Typewriter::with_len(SKILLS.len()),
            projects: Typewriter::with_len(PROJECTS.len()),
            selected_project: None,
            contact: ContactWizard::default(),
            cursor: CursorState::default(),
            menu_open: false,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn activation(&self) -> u32 {
        self.activation
    }

    pub fn intro(&self) -> &IntroSequence {
        &self.intro
    }

    pub fn intro_text(&self, line: IntroLine) -> &'static str {
        let text = match line {
            IntroLine::Welcome => WELCOME_TEXT,
            IntroLine::Title => TITLE_TEXT,
            IntroLine::Description => DESCRIPTION_TEXT,
        };
        self.intro.line(line).revealed(text)
    }

    pub fn skills(&self) -> &Typewriter {
        &self.skills
    }

    pub fn projects(&self) -> &Typewriter {
        &self.projects
    }

    pub fn revealed_skills(&self) -> &'static [Skill] {
        self.skills.revealed_items(&SKILLS)
    }

    pub fn revealed_projects(&self) -> &'static [Project] {
        self.projects.revealed_items(&PROJECTS)
    }

    pub fn selected_project(&self) -> Option<usize> {
        self.selected_project
    }

    pub fn contact(&self) -> &ContactWizard {
        &self.contact
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The pending intro reveal, independent of the active tab.
    pub fn intro_timer(&self) -> Option<TimerRequest> {
        self.intro.active_line().map(|_| TimerRequest {
            reveal: Reveal::Intro,
            activation: 0,
            cursor: self.intro.progress(),
            delay_ms: self.pacing.typing_delay_ms,
        })
    }

    /// The pending list reveal for the active tab, if it still has items left.
    pub fn list_timer(&self) -> Option<TimerRequest> {
        let (reveal, typewriter) = match self.tab {
            Tab::Skills => (Reveal::Skills, &self.skills),
            Tab::Projects => (Reveal::Projects, &self.projects),
            Tab::About | Tab::Contact => return None,
        };

        if typewriter.is_complete() {
            return None;
        }

        Some(TimerRequest {
            reveal,
            activation: self.activation,
            cursor: typewriter.cursor(),
            delay_ms: self.pacing.list_delay_ms,
        })
    }

    /// Applies `msg`. Returns the completed contact form when the message
    /// submits it.
    pub fn update(&mut self, msg: Msg) -> Option<ContactForm> {
        match msg {
            Msg::SelectTab(tab) => self.select_tab(tab),
            Msg::RevealTick {
                reveal,
                activation,
                cursor,
            } => self.reveal_tick(reveal, activation, cursor),
            Msg::SelectProject(index) => self.select_project(index),
            Msg::EditField(field, value) => {
                self.contact.edit(field, value);
            }
            Msg::Advance => return self.contact.advance(),
            Msg::PointerMoved { x, y } => {
                self.cursor.x = x;
                self.cursor.y = y;
            }
            Msg::PointerVisible(visible) => self.cursor.visible = visible,
            Msg::Hover(hovering) => self.cursor.hovering = hovering,
            Msg::ToggleMenu => self.menu_open = !self.menu_open,
        }
        None
    }

    // Reselecting the active tab resets it again.
    fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.activation = self.activation.wrapping_add(1);
        self.menu_open = false;

        match tab {
            Tab::Skills => self.skills.reset(),
            Tab::Projects => {
                self.projects.reset();
                self.selected_project = None;
            }
            Tab::About | Tab::Contact => {}
        }
    }

    fn reveal_tick(&mut self, reveal: Reveal, activation: u32, cursor: usize) {
        let expected = match reveal {
            Reveal::Intro => self.intro_timer(),
            Reveal::Skills | Reveal::Projects => self.list_timer(),
        };

        let Some(expected) = expected else {
            return;
        };

        if expected.reveal != reveal || expected.activation != activation || expected.cursor != cursor
        {
            return;
        }

        match reveal {
            Reveal::Intro => self.intro.advance(),
            Reveal::Skills => self.skills.advance(),
            Reveal::Projects => self.projects.advance(),
        };
    }

    fn select_project(&mut self, index: usize) {
        if index >= self.projects.cursor().min(PROJECTS.len()) {
            return;
        }

        self.selected_project = if self.selected_project == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
