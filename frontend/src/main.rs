use std::rc::Rc;

use log::{error, info, Level};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod content;
mod hooks;
mod motion;
mod pages {
    pub mod blog;
    pub mod home;
}

use components::progress_bar::ScrollProgressBar;
use config::SiteConfig;
use content::{fetch_snapshot, ContentState};
use hooks::use_scrollspy;
use pages::{
    blog::{Blog, BlogPostPage},
    home::Landing,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage slug={slug} /> }
        }
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
            </div>
        },
    }
}

/// Landing page sections in document order, with their nav labels.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#results", "Results"),
    ("#testimonials", "Stories"),
    ("#pricing", "Packages"),
    ("#blog", "Blog"),
];
const NAV_SPY_OFFSET: f64 = 100.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let section_ids = NAV_SECTIONS
        .iter()
        .map(|(id, _)| id.to_string())
        .collect::<Vec<_>>();
    let active = use_scrollspy(section_ids, NAV_SPY_OFFSET);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Career Compass"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| {
                        let is_active = active.as_deref() == Some(*id);
                        html! {
                            <a href={format!("/{}", id)}
                                class={classes!("nav-link", is_active.then_some("active"))}
                                onclick={close_menu.clone()}>
                                { *label }
                            </a>
                        }
                    }) }
                </div>
            </div>
            <ScrollProgressBar />
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 10;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }
                .nav-link {
                    margin-left: 1.5rem;
                    color: #374151;
                    text-decoration: none;
                }
                .nav-link.active {
                    color: #7c3aed;
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::default(), ());
    let content = use_state(|| ContentState::Loading);

    {
        let content = content.clone();
        let snapshot_url = config.snapshot_url.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_snapshot(&snapshot_url).await {
                        Ok(snapshot) => {
                            info!(
                                "Loaded content snapshot: {} posts, {} testimonials, {} packages",
                                snapshot.posts.len(),
                                snapshot.testimonials.len(),
                                snapshot.packages.len()
                            );
                            content.set(ContentState::Ready(Rc::new(snapshot)));
                        }
                        Err(e) => {
                            error!("Failed to load content snapshot: {}", e);
                            content.set(ContentState::Unavailable);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <ContextProvider<ContentState> context={(*content).clone()}>
                <BrowserRouter>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<ContentState>>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
