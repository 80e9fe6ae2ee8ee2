//! One component per visual block on the page.

use leptos::prelude::*;

use super::Icon;
use crate::models::{Article, Profile, Project, SocialLink, Theme};

/// Outline icon buttons linking to the profile's social accounts.
///
/// Every anchor opens in a new browsing context and carries `href` exactly as
/// configured.
#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class="social-links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={link.icon.label()}
                            class="button button-outline button-icon"
                        >
                            <Icon name={link.icon.as_str()} class="icon-sm"/>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Sidebar identity block: photo, name, email and social links.
#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let Profile {
        name,
        photo_url,
        photo_alt,
        email,
        links,
    } = profile;

    view! {
        <div class="profile">
            <img src=photo_url alt=photo_alt class="profile-photo"/>
            <h1 class="profile-name">{name}</h1>
            <div class="profile-email muted">
                <Icon name="mail" class="icon-sm icon-lead"/>
                <span class="text-sm break-all">{email}</span>
            </div>
            <SocialLinks links=links/>
        </div>
    }
}

#[component]
fn Badges(labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="badges">
            {labels
                .into_iter()
                .map(|label| view! { <span class="badge">{label}</span> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Card(class: &'static str, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class={format!("card {class}")}>
            <div class="card-header">
                <h2 class="card-title">{title}</h2>
            </div>
            <div class="card-content">{children()}</div>
        </section>
    }
}

/// Card with the free-text summary paragraph.
#[component]
pub fn SummaryCard(#[prop(into)] title: String, #[prop(into)] summary: String) -> impl IntoView {
    view! {
        <Card class="summary" title=title>
            <p class="card-text">{summary}</p>
        </Card>
    }
}

/// Card with one badge per skill, in input order.
#[component]
pub fn SkillBadges(#[prop(into)] title: String, skills: Vec<String>) -> impl IntoView {
    view! {
        <Card class="skills" title=title>
            <Badges labels=skills/>
        </Card>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        technologies,
        link,
    } = project;

    view! {
        <article class="card project-card">
            <div class="card-header">
                <h3 class="card-title">
                    <a href=link class="card-link">{title}</a>
                </h3>
            </div>
            <div class="card-content">
                <p class="card-text">{description}</p>
                <Badges labels=technologies/>
            </div>
        </article>
    }
}

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let date = article.date_label();
    let datetime = date.clone();
    let Article {
        title,
        description,
        link,
        ..
    } = article;

    view! {
        <article class="card article-card">
            <div class="card-header">
                <h3 class="card-title">
                    <a href=link class="card-link">{title}</a>
                </h3>
            </div>
            <div class="card-content">
                <p class="card-text">{description}</p>
                <div class="article-meta muted">
                    <Icon name="calendar" class="icon-sm icon-lead"/>
                    <time datetime=datetime>{date}</time>
                </div>
            </div>
        </article>
    }
}

/// Heading plus a grid of project cards. An empty list keeps the heading.
#[component]
pub fn ProjectsSection(#[prop(into)] heading: String, projects: Vec<Project>) -> impl IntoView {
    view! {
        <section class="projects">
            <h2 class="section-title">{heading}</h2>
            <div class="project-grid">
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Heading plus a stacked list of article cards.
#[component]
pub fn ArticlesSection(#[prop(into)] heading: String, articles: Vec<Article>) -> impl IntoView {
    view! {
        <section class="articles">
            <h2 class="section-title">{heading}</h2>
            <div class="article-list">
                {articles
                    .into_iter()
                    .map(|article| view! { <ArticleCard article=article/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Button that flips the theme. Shows a sun while dark, a moon while light.
///
/// Plain form post, so it works with scripts disabled.
#[component]
pub fn DarkModeToggle(theme: Theme, #[prop(into)] label: String) -> impl IntoView {
    let symbol = if theme.is_dark() { "sun" } else { "moon" };

    view! {
        <div class="toggle-row">
            <form method="post" action="/theme/toggle">
                <button
                    type="submit"
                    aria-label=label
                    aria-pressed={theme.is_dark().to_string()}
                    class="button button-outline button-icon"
                >
                    <Icon name=symbol class="icon-sm"/>
                </button>
            </form>
        </div>
    }
}
