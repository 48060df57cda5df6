use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, PointerEvent, Window};
use yew::prelude::*;

use crate::backdrop::BackdropSignals;
use crate::content::{self, Education, Project, Publication};
use crate::flipbook::{self, Flipbook, PagerControl};
use crate::poem::{self, PoemRotation};

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

fn document_root() -> Option<HtmlElement> {
    window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn apply_backdrop(signals: &BackdropSignals) {
    let Some(root) = document_root() else {
        return;
    };

    let style = root.style();
    for (name, value) in signals.style_values() {
        let _ = style.set_property(name, &value);
    }
}

fn sample_scroll(signals: &mut BackdropSignals, win: &Window) {
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let scroll_height = win
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let (_, viewport_height) = viewport_size();

    signals.sample_scroll(scroll_y, scroll_height, viewport_height, js_sys::Date::now());
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

enum FlipbookAction {
    Next,
    Prev,
    GoTo(isize),
}

impl Reducible for Flipbook {
    type Action = FlipbookAction;

    fn reduce(self: Rc<Self>, action: FlipbookAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            FlipbookAction::Next => next.next(),
            FlipbookAction::Prev => next.prev(),
            FlipbookAction::GoTo(target) => next.go_to_page(target),
        }
        Rc::new(next)
    }
}

#[function_component(FlipbookViewer)]
fn flipbook_viewer() -> Html {
    let book = use_reducer(Flipbook::new);
    let page = book.page();

    {
        let dispatcher = book.dispatcher();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match event.key().as_str() {
                        "ArrowRight" => dispatcher.dispatch(FlipbookAction::Next),
                        "ArrowLeft" => dispatcher.dispatch(FlipbookAction::Prev),
                        _ => {}
                    }
                })
            });
            move || drop(listener)
        });
    }

    // Keying on the page cancels and re-arms the countdown after every
    // navigation, manual or automatic.
    {
        let dispatcher = book.dispatcher();
        use_effect_with(page, move |_| {
            let timer = Interval::new(flipbook::AUTO_ADVANCE_MS, move || {
                dispatcher.dispatch(FlipbookAction::Next);
            });
            move || drop(timer)
        });
    }

    let on_prev = {
        let book = book.clone();
        Callback::from(move |_| book.dispatch(FlipbookAction::Prev))
    };

    let on_next = {
        let book = book.clone();
        Callback::from(move |_| book.dispatch(FlipbookAction::Next))
    };

    let pager = flipbook::pager_controls(page)
        .into_iter()
        .map(|control| render_pager_control(control, &book))
        .collect::<Html>();

    html! {
        <div class="flipbook">
            <div class="flipbook-controls">
                <button type="button" onclick={on_prev}>{"‹ Prev"}</button>
                <div class="flipbook-controls-center">
                    <span class="flipbook-page-indicator">
                        {format!("Page {} / {}", page + 1, flipbook::TOTAL_PAGES)}
                    </span>
                </div>
                <button type="button" onclick={on_next}>{"Next ›"}</button>
            </div>

            <div class="flipbook-frame">
                <img
                    class="flipbook-image"
                    src={flipbook::slide_url(page)}
                    alt={format!("2023 Art Therapy Portfolio – slide {}", page + 1)}
                />
            </div>

            <div class="flipbook-pager">
                { pager }
            </div>
        </div>
    }
}

fn render_pager_control(control: PagerControl, book: &UseReducerHandle<Flipbook>) -> Html {
    match control {
        PagerControl::Nav {
            label,
            target,
            disabled,
        } => {
            let onclick = {
                let book = book.clone();
                Callback::from(move |_| {
                    if !disabled {
                        book.dispatch(FlipbookAction::GoTo(target as isize));
                    }
                })
            };

            html! {
                <button
                    key={label}
                    type="button"
                    class={classes!(
                        "flipbook-page-nav",
                        disabled.then_some("flipbook-page-nav--disabled"),
                    )}
                    disabled={disabled}
                    onclick={onclick}
                >
                    {label}
                </button>
            }
        }
        PagerControl::Page { index, active } => {
            let onclick = {
                let book = book.clone();
                Callback::from(move |_| book.dispatch(FlipbookAction::GoTo(index as isize)))
            };

            html! {
                <button
                    key={format!("page-{}", index + 1)}
                    type="button"
                    class={classes!("flipbook-page-dot", active.then_some("is-active"))}
                    onclick={onclick}
                >
                    {index + 1}
                </button>
            }
        }
    }
}

fn render_publication(publication: &Publication) -> Html {
    let venue = &publication.venue;
    let venue_badge = match (venue.status, venue.href) {
        (Some(status), _) => html! {
            <button type="button" class="badge badge-venue has-status" data-status={status}>
                {venue.label}
            </button>
        },
        (None, Some(href)) => html! {
            <ExternalLink class={classes!("badge", "badge-venue")} href={href} label={venue.label} />
        },
        (None, None) => html! {
            <span class="badge badge-venue">{venue.label}</span>
        },
    };

    let documents = (!publication.documents.is_empty()).then(|| {
        html! {
            <div class="card-links">
                { for publication.documents.iter().map(|doc| html! {
                    <ExternalLink class={classes!("link-pill")} href={doc.href} label={doc.label} />
                }) }
            </div>
        }
    });

    html! {
        <article class="card" key={publication.title}>
            <div class="card-glow" />
            <div class="pub-date">{publication.date_range}</div>
            <h3 class="card-title">{publication.title}</h3>
            <div class="pub-lab-block">
                <span class="pub-lab-name">{publication.lab}</span>
                <span class="pub-advisor">{publication.advisor}</span>
            </div>
            <p class="card-text">{publication.summary}</p>
            { documents }
            <div class="pub-footer">
                <div class="pub-venue-group">
                    { venue_badge }
                </div>
                <div class="pub-skill-group">
                    {
                        publication
                            .first_author
                            .then(|| html! { <span class="badge-firstauthor">{"FIRST AUTHOR"}</span> })
                    }
                    { for publication.tags.iter().map(|tag| html! {
                        <span class="badge badge-skill">{*tag}</span>
                    }) }
                </div>
            </div>
        </article>
    }
}

fn render_project(project: &Project) -> Html {
    html! {
        <article class="card" key={project.title}>
            <div class="card-glow" />
            <h3 class="card-title">{project.title}</h3>
            <p class="card-text">{project.summary}</p>
            <div class="card-links">
                { for project.links.iter().map(|link| html! {
                    <ExternalLink class={classes!("link-pill")} href={link.href} label={link.label} />
                }) }
                { for project.tags.iter().map(|tag| html! {
                    <span class="link-pill link-pill--muted">{*tag}</span>
                }) }
            </div>
        </article>
    }
}

fn render_education(entry: &Education) -> Html {
    html! {
        <li class="edu-item" key={entry.degree}>
            <div class="edu-degree">{entry.degree}</div>
            <div class="edu-school-row">
                <span class="edu-school-name">{entry.school}</span>
                <span class="edu-school-dates">{entry.dates}</span>
            </div>
            <div class="edu-meta-row">
                { for entry.pills.iter().map(|pill| html! {
                    <span class="edu-pill">{*pill}</span>
                }) }
            </div>
            {
                (!entry.outline_pills.is_empty()).then(|| html! {
                    <div class="edu-meta-row">
                        { for entry.outline_pills.iter().map(|pill| html! {
                            <span class="edu-pill edu-pill--outline">{*pill}</span>
                        }) }
                    </div>
                })
            }
            { entry.note.map(|note| html! { <div class="edu-note">{note}</div> }) }
        </li>
    }
}

#[function_component(App)]
fn app() -> Html {
    let poem = use_state(|| PoemRotation::new(content::POEM_GROUPS.len()));

    // Window-level pointer and scroll subscriptions live for the lifetime
    // of the app; the signal state is one owned value behind the
    // listeners, flushed to style variables after each sample.
    {
        use_effect_with((), move |_| {
            let listeners = window().map(|win| {
                let mut initial =
                    BackdropSignals::new(win.scroll_y().unwrap_or(0.0), js_sys::Date::now());
                sample_scroll(&mut initial, &win);
                apply_backdrop(&initial);
                let signals = Rc::new(RefCell::new(initial));

                let pointer_listener = {
                    let signals = signals.clone();
                    EventListener::new(&win, "pointermove", move |event| {
                        let Some(event) = event.dyn_ref::<PointerEvent>() else {
                            return;
                        };
                        let (viewport_width, viewport_height) = viewport_size();
                        let mut signals = signals.borrow_mut();
                        signals.sample_pointer(
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                            viewport_width,
                            viewport_height,
                        );
                        apply_backdrop(&signals);
                    })
                };

                let scroll_listener = {
                    let win_handle = win.clone();
                    EventListener::new(&win, "scroll", move |_event| {
                        let mut signals = signals.borrow_mut();
                        sample_scroll(&mut signals, &win_handle);
                        apply_backdrop(&signals);
                    })
                };

                (pointer_listener, scroll_listener)
            });

            move || drop(listeners)
        });
    }

    let on_next_poem = {
        let poem = poem.clone();
        Callback::from(move |_| {
            let mut next = *poem;
            next.advance();
            poem.set(next);
        })
    };

    // Same re-arm discipline as the flipbook, on a slower clock.
    {
        let poem = poem.clone();
        let index = poem.index();
        use_effect_with(index, move |_| {
            let timer = Timeout::new(poem::ROTATE_MS, move || {
                let mut next = *poem;
                next.advance();
                poem.set(next);
            });
            move || drop(timer)
        });
    }

    let poem_lines = content::POEM_GROUPS[poem.index()]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            html! {
                <p key={format!("{}-{i}", poem.index())} class="poem-line">{*line}</p>
            }
        })
        .collect::<Html>();

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="page" id="top">
            <div class="art-field art-field--active" aria-hidden="true">
                <span class="orb orb--1" />
                <span class="orb orb--2" />
                <span class="orb orb--3" />
                <span class="orb orb--4" />
            </div>

            <section class="hero">
                <div class="hero-inner">
                    <div class="hero-top-links">
                        <ExternalLink href={content::CV_URL} label="CV" />
                        <a href={content::EMAIL_URL}>{"Email"}</a>
                        <ExternalLink href={content::LINKEDIN_URL} label="LinkedIn" />
                    </div>

                    <h1 class="name">{"Hsiang-Chen Yeh"}</h1>

                    <p class="tagline">
                        {"Computational Mental Health · Speech & Language · Trauma"}
                    </p>

                    <p class="sub">
                        {"I build systems that listen—to voices, to language, to silence."}
                    </p>

                    <div class="poem-block" onclick={on_next_poem}>
                        { poem_lines }
                    </div>
                </div>
            </section>

            <div class="main-layout">
                <nav class="side-nav">
                    <div class="side-nav-inner">
                        <div class="side-nav-label">{"Sections"}</div>
                        { for content::SECTION_ANCHORS.iter().map(|section| html! {
                            <a key={section.anchor} href={section.anchor} class="side-nav-link">
                                {section.label}
                            </a>
                        }) }
                    </div>
                </nav>

                <div class="main-sections">
                    <section class="section section-about" id="about">
                        <div class="about-inner">
                            <div class="about-text">
                                <h2 class="title">{"About"}</h2>
                                <p class="text">
                                    {"I am a dual-degree graduate student in Clinical Mental Health \
                                      Counseling and Computer Science at Johns Hopkins University and \
                                      the University of Colorado Boulder. My work lies at the \
                                      intersection of speech, language, trauma, and psychological \
                                      experience. I study how people express pain, agency, and emotion \
                                      through their voices and words, whether in clinical \
                                      conversations, large-scale text corpora, or real-world digital \
                                      interactions."}
                                </p>
                                <p class="text">
                                    {"My research spans trauma-informed language analysis, \
                                      speech-based depression detection, psycholinguistic attribution \
                                      modeling, and interactive tools for medical imaging. I \
                                      collaborate with groups such as the "}
                                    <ExternalLink href="https://sites.google.com/view/jhusmile" label="Smile (Speech and Machine Learning) Lab" />
                                    {" at the "}
                                    <ExternalLink href="https://www.clsp.jhu.edu/" label="Johns Hopkins Center for Language and Speech Processing (CLSP)" />
                                    {" (PI: Dr. Berrak Sisman), the "}
                                    <ExternalLink href="https://labs.utdallas.edu/realm/people/" label="REALM Lab" />
                                    {" at UT Dallas (PI: Dr. Ryan L. Boyd), and the BodyMaps team in the "}
                                    <ExternalLink href="https://ccvl.jhu.edu/" label="Computational Cognition, Vision, and Learning (CCVL) research group" />
                                    {" at Johns Hopkins University (led by Dr. Zongwei Zhou; CCVL PI: \
                                      Dr. Alan Yuille). I also work with "}
                                    <ExternalLink href="https://education.jhu.edu/directory/norma-l-day-vines-phd/" label="Dr. Norma Day-Vines" />
                                    {"’ Counseling Research Team and "}
                                    <ExternalLink href="https://nursing.jhu.edu/faculty-research/faculty/directory/tamar-rodney/" label="Dr. Tamar Rodney" />
                                    {"’s Trauma Intervention Team, as well as collaborators on \
                                      digital mental health initiatives with "}
                                    <ExternalLink href="https://wellcheq.com/" label="Wellcheq" />
                                    {" and VR-based intervention development with "}
                                    <ExternalLink href="https://medicine.yale.edu/yigh/sustainable-health-initiative/venture-development-program/spring-2025-cohort/" label="Heal Aura" />
                                    {". These projects integrate clinical sensitivity with \
                                      computational rigor to better understand human experience and \
                                      resilience."}
                                </p>
                                <p class="text">
                                    {"I am especially interested in models that listen for more than \
                                      symptoms. I focus on subtle linguistic and acoustic patterns \
                                      that accompany mental health recovery, adaptation, and \
                                      emotional complexity."}
                                </p>
                            </div>

                            <div class="about-photo-wrapper">
                                <div class="about-photo-ring">
                                    <img
                                        class="about-photo"
                                        src="portrait.png"
                                        alt="Portrait of Hsiang-Chen Yeh"
                                    />
                                </div>
                            </div>
                        </div>
                    </section>

                    <section class="section section-research" id="research">
                        <h2 class="title">{"Publications & Research"}</h2>
                        <div class="grid">
                            { for content::publications().iter().map(render_publication) }
                        </div>
                    </section>

                    <section class="section section-projects" id="projects">
                        <h2 class="title">{"Projects"}</h2>
                        <div class="grid">
                            { for content::projects().iter().map(render_project) }
                        </div>
                    </section>

                    <section class="section section-art-portfolio" id="art-portfolio">
                        <div class="art-portfolio-inner">
                            <h2 class="title">{"Art Portfolio (2023)"}</h2>
                            <p class="text art-portfolio-intro">
                                {"A selection of art therapy–oriented works exploring emotion, \
                                  trauma, and healing."}
                            </p>

                            <FlipbookViewer />

                            <p class="art-portfolio-link">
                                <ExternalLink
                                    href={content::ART_PORTFOLIO_PDF_URL}
                                    label="Open full PDF in a new tab"
                                />
                            </p>
                        </div>
                    </section>

                    <section class="section section-exhibitions" id="exhibitions">
                        <h2 class="title">{"Exhibitions"}</h2>
                        <div class="art-exhibition-block">
                            <div class="exh-row">
                                <span class="exh-title">
                                    {"Young Designers' Exhibition – “Freak’in Walk”"}
                                </span>
                                <span class="exh-date">{"May 2024"}</span>
                            </div>
                            <div class="exh-meta">
                                {"Taipei Nangang Exhibition Center, Taipei, Taiwan"}
                            </div>
                            <ul class="exh-list">
                                <li>
                                    {"Captured the various challenges pedestrians face on the \
                                      streets and presented them in a visually engaging fashion \
                                      show."}
                                </li>
                                <li>
                                    {"Accessible at: "}
                                    <ExternalLink
                                        href="https://freakinwalk.netlify.app/"
                                        label="https://freakinwalk.netlify.app/"
                                    />
                                </li>
                            </ul>
                        </div>
                    </section>

                    <section class="section section-clinical" id="clinical">
                        <h2 class="title">{"Clinical Training"}</h2>
                        <div class="grid grid--single">
                            <article class="card">
                                <div class="card-glow" />
                                <h3 class="card-title">{"Clinical Practicum (Spring 2026)"}</h3>
                                <p class="card-meta">
                                    {"Johns Hopkins AIDS Psychiatry Service, "}
                                    <ExternalLink
                                        class={classes!("inline-link")}
                                        href="https://www.hopkinsmedicine.org/infectious-diseases/patient-care/locations/john-g-bartlett-specialty-practice"
                                        label="John G. Bartlett Specialty Practice"
                                    />
                                </p>
                                <p class="card-text">
                                    {"Planned clinical practicum focused on integrated psychiatric \
                                      care for people living with HIV at Johns Hopkins. Anticipated \
                                      training includes mood and trauma-related disorders in medical \
                                      settings, interdisciplinary teamwork, and trauma-informed, \
                                      culturally responsive care. Details will be updated."}
                                </p>
                                <div class="card-links">
                                    <span class="link-pill link-pill--muted">{"Coming soon"}</span>
                                </div>
                            </article>
                        </div>
                    </section>

                    <section class="section section-education" id="education">
                        <div class="education-inner">
                            <h2 class="title">{"Education"}</h2>
                            <ul class="edu-list">
                                { for content::education().iter().map(render_education) }
                            </ul>

                            <div class="edu-note-block">
                                <span class="edu-label">{"Languages"}</span>
                                <span class="edu-text">
                                    {"Mandarin Chinese (native), English (professional), Japanese \
                                      (JLPT N1; one-year fully funded exchange at "}
                                    <ExternalLink
                                        href="https://www.koryu.or.jp/tw/business/young/invitation/second.html"
                                        label="Sapporo Sacred Heart School in Japan"
                                    />
                                    {", supported by a highly competitive award of approximately \
                                      JPY 2–4 million)."}
                                </span>
                            </div>
                        </div>
                    </section>
                </div>
            </div>

            <footer class="footer">
                {format!("© {year} Hsiang-Chen Yeh")}
            </footer>
        </div>
    }
}

pub fn run() {
    let _ = console_log::init_with_level(log::Level::Info);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();

    log::info!("portfolio mounted");
}
