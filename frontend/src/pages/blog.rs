use yew::prelude::*;
use yew_router::components::Link;

use crate::content::{BodyBlock, ContentState, Post};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let meta = [
        post.category.clone(),
        post.formatted_date(),
        post.read_time.map(|minutes| format!("{} min read", minutes)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" \u{00b7} ");

    html! {
        <article class="post-card">
            <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }}>
                {
                    match &post.image_url {
                        Some(url) => html! {
                            <img src={url.clone()} alt={post.title.clone()} loading="lazy" class="post-card-image" />
                        },
                        None => html! {},
                    }
                }
                <span class="post-card-meta">{ meta }</span>
                <h3>{ post.title.clone() }</h3>
                <p>{ post.description.clone().unwrap_or_default() }</p>
            </Link<Route>>
        </article>
    }
}

fn scroll_to_top_on_mount() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let content = use_context::<ContentState>().unwrap_or(ContentState::Loading);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top_on_mount();
            || ()
        },
        (),
    );

    let posts = match &content {
        ContentState::Loading => html! { <p class="blog-status">{"Loading posts\u{2026}"}</p> },
        ContentState::Unavailable => html! { <p class="blog-status">{"Posts are unavailable right now."}</p> },
        ContentState::Ready(snapshot) if snapshot.posts.is_empty() => {
            html! { <p class="blog-status">{"No posts yet."}</p> }
        }
        ContentState::Ready(snapshot) => html! {
            <div class="post-grid">
                { for snapshot.posts.iter().map(|post| html! {
                    <PostCard key={post.id.clone()} post={post.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Career notes"}</h1>
                <p>{"Guides on job search strategy, interviews and negotiation."}</p>
            </section>
            <section class="blog-list-section">
                { posts }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

fn render_block(block: &BodyBlock) -> Html {
    match block {
        BodyBlock::Paragraph(text) => html! { <p>{ text.clone() }</p> },
        BodyBlock::Heading2(text) => html! { <h2>{ text.clone() }</h2> },
        BodyBlock::Heading3(text) => html! { <h3>{ text.clone() }</h3> },
        BodyBlock::Quote(text) => html! { <blockquote>{ text.clone() }</blockquote> },
    }
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let content = use_context::<ContentState>().unwrap_or(ContentState::Loading);

    use_effect_with_deps(
        move |_| {
            scroll_to_top_on_mount();
            || ()
        },
        props.slug.clone(),
    );

    let post = match &content {
        ContentState::Loading => return html! { <p class="blog-status">{"Loading\u{2026}"}</p> },
        ContentState::Unavailable => None,
        ContentState::Ready(snapshot) => snapshot.post_by_slug(&props.slug),
    };

    let Some(post) = post else {
        return html! {
            <div class="blog-post-page">
                <h1>{"Post not found"}</h1>
                <Link<Route> to={Route::Blog}>{"Back to all posts"}</Link<Route>>
            </div>
        };
    };

    let blocks = post.body_blocks();

    html! {
        <article class="blog-post-page">
            <Link<Route> to={Route::Blog} classes="blog-back">{"\u{2190} All posts"}</Link<Route>>
            <h1>{ post.title.clone() }</h1>
            <p class="post-card-meta">
                { post.formatted_date().unwrap_or_default() }
                { post.read_time.map(|m| format!(" \u{00b7} {} min read", m)).unwrap_or_default() }
            </p>
            {
                match &post.image_url {
                    Some(url) => html! { <img class="blog-post-image" src={url.clone()} alt={post.title.clone()} /> },
                    None => html! {},
                }
            }
            <div class="blog-post-body">
                { for blocks.iter().map(render_block) }
            </div>
        </article>
    }
}
