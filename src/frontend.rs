use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use serde_json::json;
use terminal_portfolio::config::SiteConfig;
use terminal_portfolio::contact::{ContactWizard, Field};
use terminal_portfolio::content::{COPYRIGHT_LINE, OWNER_INITIALS, RESUME_PATH};
use terminal_portfolio::cursor::PointerCoalescer;
use terminal_portfolio::log::Logger;
use terminal_portfolio::particles::{scatter, Particle};
use terminal_portfolio::portfolio::{Msg, Portfolio, Tab, TimerRequest};
use terminal_portfolio::theme::{Theme, THEME_KEY};
use terminal_portfolio::typewriter::IntroLine;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
    MouseEvent, Storage,
};
use yew::prelude::*;

const CURSOR_ATTRIBUTE: &str = "data-cursor";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn resolve_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::resolve(stored.as_deref(), system_prefers_dark())
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || {
        apply_theme(theme);
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

#[derive(Clone)]
struct PageState {
    portfolio: Portfolio,
    config: SiteConfig,
    logger: Logger,
}

impl PageState {
    fn log_action(&self, action: &Msg) {
        match action {
            Msg::SelectTab(tab) => self.logger.debug(
                "tab_selected",
                json!({
                    "tab": tab.as_str(),
                    "reselected": *tab == self.portfolio.tab(),
                }),
            ),
            Msg::SelectProject(index) => self.logger.debug(
                "project_toggled",
                json!({
                    "index": index,
                    "open": self.portfolio.selected_project() != Some(*index),
                }),
            ),
            _ => {}
        }
    }
}

impl Reducible for PageState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Msg) -> Rc<Self> {
        let mut next = (*self).clone();
        next.log_action(&action);

        if let Some(form) = next.portfolio.update(action) {
            next.logger
                .info("contact_submitted", next.config.contact_log_mode.fields(&form));
        }

        Rc::new(next)
    }
}

/// Keeps one browser timeout armed for `request`. Dropping the previous
/// `Timeout` when the request changes cancels it.
#[hook]
fn use_reveal_timer(request: Option<TimerRequest>, dispatcher: UseReducerDispatcher<PageState>) {
    use_effect_with(request, move |request| {
        let timeout = request.map(|request| {
            Timeout::new(request.delay_ms, move || dispatcher.dispatch(request.tick()))
        });
        move || drop(timeout)
    });
}

/// Document-level pointer tracking for the custom cursor. Moves are folded
/// into one dispatch per animation frame. Everything is released on drop.
struct PointerListeners {
    document: Document,
    root: Element,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
    on_enter: Closure<dyn FnMut(MouseEvent)>,
    _on_frame: Closure<dyn FnMut(f64)>,
    coalescer: Rc<RefCell<PointerCoalescer>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl PointerListeners {
    fn attach(dispatcher: UseReducerDispatcher<PageState>) -> Option<Self> {
        let document = window()?.document()?;
        let root = document.document_element()?;
        let coalescer = Rc::new(RefCell::new(PointerCoalescer::default()));
        let frame_id = Rc::new(Cell::new(None));

        let on_frame = {
            let coalescer = coalescer.clone();
            let frame_id = frame_id.clone();
            let dispatcher = dispatcher.clone();
            Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                frame_id.set(None);
                let latest = coalescer.borrow_mut().flush();
                if let Some((x, y)) = latest {
                    dispatcher.dispatch(Msg::PointerMoved { x, y });
                }
            })
        };
        let frame_callback: Function = on_frame.as_ref().unchecked_ref::<Function>().clone();

        let on_move = {
            let coalescer = coalescer.clone();
            let frame_id = frame_id.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let needs_frame = coalescer
                    .borrow_mut()
                    .record(event.client_x(), event.client_y());
                if !needs_frame {
                    return;
                }

                match window().and_then(|w| w.request_animation_frame(&frame_callback).ok()) {
                    Some(id) => frame_id.set(Some(id)),
                    None => coalescer.borrow_mut().cancel(),
                }
            })
        };

        let on_leave = {
            let dispatcher = dispatcher.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
                dispatcher.dispatch(Msg::PointerVisible(false));
            })
        };

        let on_enter = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            dispatcher.dispatch(Msg::PointerVisible(true));
        });

        let _ = document
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        let _ =
            root.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        let _ =
            root.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
        let _ = root.set_attribute(CURSOR_ATTRIBUTE, "custom");

        Some(Self {
            document,
            root,
            on_move,
            on_leave,
            on_enter,
            _on_frame: on_frame,
            coalescer,
            frame_id,
        })
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self.root.remove_event_listener_with_callback(
            "mouseleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
        let _ = self.root.remove_event_listener_with_callback(
            "mouseenter",
            self.on_enter.as_ref().unchecked_ref(),
        );

        if let Some(id) = self.frame_id.take() {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        self.coalescer.borrow_mut().cancel();
        let _ = self.root.remove_attribute(CURSOR_ATTRIBUTE);
    }
}

/// Handlers every interactive control carries so the cursor can grow on hover.
#[derive(Clone, PartialEq)]
struct Hover {
    on: Callback<MouseEvent>,
    off: Callback<MouseEvent>,
}

#[derive(Clone, Default, PartialEq)]
struct ContactRefs {
    name: NodeRef,
    email: NodeRef,
    message: NodeRef,
}

impl ContactRefs {
    fn for_field(&self, field: Field) -> &NodeRef {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

fn prompt(tab: Tab) -> String {
    format!("C:\\Users\\Developer> {}", tab.command())
}

fn caret() -> Html {
    html! { <span class="caret" aria-hidden="true">{"|"}</span> }
}

#[derive(Properties, PartialEq)]
struct ParticleFieldProps {
    particles: Rc<Vec<Particle>>,
}

#[function_component(ParticleField)]
fn particle_field(props: &ParticleFieldProps) -> Html {
    html! {
        <div class="particle-field" aria-hidden="true">
            { for props.particles.iter().enumerate().map(|(index, particle)| html! {
                <span key={index} class="particle" style={particle.style()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TabListProps {
    active: Tab,
    on_select: Callback<Tab>,
    hover: Hover,
    #[prop_or_default]
    vertical: bool,
}

#[function_component(TabList)]
fn tab_list(props: &TabListProps) -> Html {
    html! {
        <div class={classes!("tab-list", props.vertical.then_some("is-vertical"))} role="tablist">
            { for Tab::ALL.into_iter().map(|tab| {
                let active = tab == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                html! {
                    <button
                        key={tab.as_str()}
                        type="button"
                        role="tab"
                        class={classes!("tab-button", active.then_some("is-active"))}
                        aria-selected={active.to_string()}
                        onclick={onclick}
                        onmouseenter={props.hover.on.clone()}
                        onmouseleave={props.hover.off.clone()}
                    >
                        {format!("{}.exe", tab.as_str())}
                    </button>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    theme: Theme,
    on_toggle: Callback<MouseEvent>,
    hover: Hover,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <div class="theme-toggle-group">
            <span class="theme-glyph" aria-hidden="true">{"☀"}</span>
            <button
                class={classes!("theme-toggle", props.theme.is_dark().then_some("is-on"))}
                type="button"
                role="switch"
                aria-checked={props.theme.is_dark().to_string()}
                aria-label={props.theme.toggle_label()}
                onclick={props.on_toggle.clone()}
                onmouseenter={props.hover.on.clone()}
                onmouseleave={props.hover.off.clone()}
            >
                <span class="theme-thumb" aria-hidden="true" />
            </button>
            <span class="theme-glyph" aria-hidden="true">{"☾"}</span>
        </div>
    }
}

fn about_panel(portfolio: &Portfolio, hover: &Hover) -> Html {
    html! {
        <section class="panel about-panel" aria-labelledby="about-heading">
            <div class="terminal-card">
                <p class="prompt">{prompt(Tab::About)}</p>
                <p class="welcome">{portfolio.intro_text(IntroLine::Welcome)}{caret()}</p>
            </div>
            <h1 id="about-heading" class="title">{portfolio.intro_text(IntroLine::Title)}{caret()}</h1>
            <p class="description">{portfolio.intro_text(IntroLine::Description)}{caret()}</p>
            <a
                class="primary-button"
                href={RESUME_PATH}
                download=""
                onmouseenter={hover.on.clone()}
                onmouseleave={hover.off.clone()}
            >
                {"Download Resume.pdf"}
            </a>
        </section>
    }
}

fn skills_panel(portfolio: &Portfolio) -> Html {
    html! {
        <section class="panel terminal-card" aria-labelledby="skills-heading">
            <h2 id="skills-heading" class="sr-only">{"Skills"}</h2>
            <p class="prompt">{prompt(Tab::Skills)}</p>
            <ul class="skill-grid">
                { for portfolio.revealed_skills().iter().enumerate().map(|(index, skill)| html! {
                    <li key={index} class="reveal-item">
                        <span class="chevron" aria-hidden="true">{">"}</span>
                        <span class="item-name">{skill.name}</span>
                        <span class="skill-icon" aria-hidden="true">{skill.icon.glyph()}</span>
                    </li>
                }) }
            </ul>
            if !portfolio.skills().is_complete() {
                {caret()}
            }
        </section>
    }
}

fn projects_panel(portfolio: &Portfolio, on_select: &Callback<usize>, hover: &Hover) -> Html {
    let selected = portfolio.selected_project();

    html! {
        <section class="panel terminal-card" aria-labelledby="projects-heading">
            <h2 id="projects-heading" class="sr-only">{"Projects"}</h2>
            <p class="prompt">{prompt(Tab::Projects)}</p>
            <ul class="project-list">
                { for portfolio.revealed_projects().iter().enumerate().map(|(index, project)| {
                    let open = selected == Some(index);
                    let detail_id = format!("project-detail-{index}");
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(index))
                    };
                    html! {
                        <li key={index} class="reveal-item">
                            <div class="project-row">
                                <span class="chevron" aria-hidden="true">{">"}</span>
                                <button
                                    type="button"
                                    class="project-button"
                                    aria-expanded={open.to_string()}
                                    aria-controls={detail_id.clone()}
                                    onclick={onclick}
                                    onmouseenter={hover.on.clone()}
                                    onmouseleave={hover.off.clone()}
                                >
                                    <span class="folder" aria-hidden="true">{ if open { "📂" } else { "📁" } }</span>
                                    {project.name}
                                </button>
                            </div>
                            if open {
                                <div id={detail_id} class="project-detail">
                                    <img src={project.image} alt={project.name} width="400" height="250" loading="lazy" />
                                    <p>{project.description}</p>
                                    <p>{project.details}</p>
                                </div>
                            }
                        </li>
                    }
                }) }
            </ul>
            if !portfolio.projects().is_complete() {
                {caret()}
            }
        </section>
    }
}

struct ContactHandlers {
    on_edit: Callback<(Field, String)>,
    on_key: Callback<KeyboardEvent>,
    on_submit: Callback<MouseEvent>,
}

fn contact_panel(wizard: &ContactWizard, refs: &ContactRefs, handlers: &ContactHandlers, hover: &Hover) -> Html {
    html! {
        <section class="panel terminal-card" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="sr-only">{"Contact"}</h2>
            <p class="prompt">{prompt(Tab::Contact)}</p>
            <div class="contact-steps">
                { for wizard.visible_fields().map(|field| {
                    let id = format!("contact-{}", field.as_str());
                    let value = wizard.form().value(field).to_string();
                    let frozen = wizard.is_frozen(field);
                    let oninput = {
                        let on_edit = handlers.on_edit.clone();
                        Callback::from(move |event: InputEvent| {
                            let value = match field {
                                Field::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                                Field::Name | Field::Email => event.target_unchecked_into::<HtmlInputElement>().value(),
                            };
                            on_edit.emit((field, value));
                        })
                    };
                    let control = match field {
                        Field::Message => html! {
                            <textarea
                                id={id.clone()}
                                ref={refs.for_field(field).clone()}
                                name={field.as_str()}
                                rows="4"
                                value={value}
                                oninput={oninput}
                                onkeydown={handlers.on_key.clone()}
                                disabled={frozen}
                            />
                        },
                        Field::Name | Field::Email => html! {
                            <input
                                id={id.clone()}
                                ref={refs.for_field(field).clone()}
                                type={if field == Field::Email { "email" } else { "text" }}
                                name={field.as_str()}
                                value={value}
                                oninput={oninput}
                                onkeydown={handlers.on_key.clone()}
                                disabled={frozen}
                            />
                        },
                    };
                    html! {
                        <div key={field.as_str()} class="contact-step reveal-item">
                            <label class="step-prompt" for={id}>{"> "}{field.prompt()}</label>
                            <div class="step-input">
                                <span class="dollar" aria-hidden="true">{"$"}</span>
                                {control}
                            </div>
                        </div>
                    }
                }) }
                if wizard.current() == Field::Message {
                    <button
                        type="button"
                        class="primary-button reveal-item"
                        onclick={handlers.on_submit.clone()}
                        onmouseenter={hover.on.clone()}
                        onmouseleave={hover.off.clone()}
                    >
                        {"Submit"}
                    </button>
                }
            </div>
        </section>
    }
}

fn footer(hover: &Hover) -> Html {
    html! {
        <footer class="site-footer">
            <p>{COPYRIGHT_LINE}</p>
            <div class="footer-links">
                { for [("✉", "Email"), ("◍", "Website"), ("</>", "GitHub")].into_iter().map(|(glyph, label)| html! {
                    <button
                        key={label}
                        type="button"
                        class="icon-button"
                        onmouseenter={hover.on.clone()}
                        onmouseleave={hover.off.clone()}
                    >
                        <span aria-hidden="true">{glyph}</span>
                        <span class="sr-only">{label}</span>
                    </button>
                }) }
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config;
    let logger = Logger::new(config.log_level);
    let page = use_reducer(move || PageState {
        portfolio: Portfolio::new(config.pacing),
        config,
        logger,
    });
    let theme = use_state(resolve_theme);
    let particles = use_memo((), move |_| {
        let count = if prefers_reduced_motion() {
            0
        } else {
            config.particle_count
        };
        scatter(count, viewport_size(), js_sys::Math::random)
    });
    let contact_refs = use_memo((), |_| ContactRefs::default());

    {
        let current = *theme;
        let particle_count = particles.len();
        use_effect_with((), move |_| {
            apply_theme(current);
            logger.info(
                "portfolio_mounted",
                json!({
                    "theme": current.as_str(),
                    "particles": particle_count,
                    "typingDelayMs": config.pacing.typing_delay_ms,
                    "listDelayMs": config.pacing.list_delay_ms,
                }),
            );
            || ()
        });
    }

    use_reveal_timer(page.portfolio.intro_timer(), page.dispatcher());
    use_reveal_timer(page.portfolio.list_timer(), page.dispatcher());

    {
        let dispatcher = page.dispatcher();
        use_effect_with((), move |_| {
            let listeners = PointerListeners::attach(dispatcher);
            move || drop(listeners)
        });
    }

    {
        let refs = contact_refs.clone();
        let deps = (page.portfolio.tab(), page.portfolio.contact().current());
        use_effect_with(deps, move |(tab, field)| {
            if *tab == Tab::Contact {
                if let Some(control) = refs.for_field(*field).cast::<HtmlElement>() {
                    let _ = control.focus();
                }
            }
            || ()
        });
    }

    let hover = {
        let on = page.dispatcher();
        let off = page.dispatcher();
        Hover {
            on: Callback::from(move |_: MouseEvent| on.dispatch(Msg::Hover(true))),
            off: Callback::from(move |_: MouseEvent| off.dispatch(Msg::Hover(false))),
        }
    };

    let on_select_tab = {
        let dispatcher = page.dispatcher();
        Callback::from(move |tab: Tab| dispatcher.dispatch(Msg::SelectTab(tab)))
    };

    let on_select_project = {
        let dispatcher = page.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(Msg::SelectProject(index)))
    };

    let on_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(Msg::ToggleMenu))
    };

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            logger.info("theme_changed", json!({ "theme": next.as_str() }));
            theme.set(next);
        })
    };

    let contact_handlers = {
        let edit = page.dispatcher();
        let key = page.dispatcher();
        let submit = page.dispatcher();
        ContactHandlers {
            on_edit: Callback::from(move |(field, value): (Field, String)| {
                edit.dispatch(Msg::EditField(field, value))
            }),
            on_key: Callback::from(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    event.prevent_default();
                    key.dispatch(Msg::Advance);
                }
            }),
            on_submit: Callback::from(move |_: MouseEvent| submit.dispatch(Msg::Advance)),
        }
    };

    let portfolio = &page.portfolio;
    let tab = portfolio.tab();
    let cursor = portfolio.cursor();
    let menu_open = portfolio.menu_open();

    let panel = match tab {
        Tab::About => about_panel(portfolio, &hover),
        Tab::Skills => skills_panel(portfolio),
        Tab::Projects => projects_panel(portfolio, &on_select_project, &hover),
        Tab::Contact => contact_panel(portfolio.contact(), &contact_refs, &contact_handlers, &hover),
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <ParticleField particles={particles.clone()} />
            <div
                class={classes!(
                    "custom-cursor",
                    cursor.visible.then_some("is-visible"),
                    cursor.hovering.then_some("is-hovering"),
                )}
                style={cursor.style()}
                aria-hidden="true"
            />
            <div class="page-shell">
                <header class="site-header">
                    <nav class="site-nav" aria-label="Sections">
                        <div class="brand">
                            <span class="brand-mark" aria-hidden="true">{">_"}</span>
                            {OWNER_INITIALS}
                        </div>
                        <div class="nav-wide">
                            <TabList active={tab} on_select={on_select_tab.clone()} hover={hover.clone()} />
                            <ThemeToggle theme={*theme} on_toggle={on_toggle.clone()} hover={hover.clone()} />
                        </div>
                        <button
                            class="menu-toggle"
                            type="button"
                            aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                            aria-expanded={menu_open.to_string()}
                            onclick={on_menu}
                            onmouseenter={hover.on.clone()}
                            onmouseleave={hover.off.clone()}
                        >
                            <span aria-hidden="true">{ if menu_open { "✕" } else { "☰" } }</span>
                        </button>
                    </nav>
                </header>

                if menu_open {
                    <div class="mobile-menu">
                        <TabList active={tab} on_select={on_select_tab} hover={hover.clone()} vertical={true} />
                        <ThemeToggle theme={*theme} on_toggle={on_toggle} hover={hover.clone()} />
                    </div>
                }

                <main id="content" key={tab.as_str()} class="panel-frame">
                    {panel}
                </main>

                {footer(&hover)}
            </div>
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let (config, rejected) = SiteConfig::from_lookup(|key| root.get_attribute(key));
    let logger = Logger::new(config.log_level);
    for key in rejected {
        logger.debug("config_value_rejected", json!({ "attribute": key }));
    }

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
