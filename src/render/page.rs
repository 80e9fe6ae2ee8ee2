use leptos::prelude::*;

use super::components::*;
use super::render_view;
use crate::assets;
use crate::models::{Portfolio, Theme};

/// How the document pulls in its stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stylesheet {
    /// `<link>` to the server's `/assets/styles.css`.
    Linked,
    /// Copied into a `<style>` element, for standalone files.
    Inline,
}

#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub theme: Theme,
    pub stylesheet: Stylesheet,
}

impl PageOptions {
    pub fn served(theme: Theme) -> Self {
        Self {
            theme,
            stylesheet: Stylesheet::Linked,
        }
    }

    pub fn standalone(theme: Theme) -> Self {
        Self {
            theme,
            stylesheet: Stylesheet::Inline,
        }
    }
}

#[component]
fn PageHead(#[prop(into)] title: String, stylesheet: Stylesheet) -> impl IntoView {
    let stylesheet = match stylesheet {
        Stylesheet::Linked => view! { <link rel="stylesheet" href={assets::STYLES_PATH}/> }.into_any(),
        Stylesheet::Inline => view! { <style inner_html={assets::STYLES}></style> }.into_any(),
    };

    view! {
        <head>
            <meta charset="utf-8"/>
            <meta name="viewport" content="width=device-width, initial-scale=1"/>
            <title>{title}</title>
            {stylesheet}
        </head>
    }
}

/// Page body: sidebar with the profile, main column with summary, skills,
/// projects and articles.
#[component]
pub fn PageRoot(portfolio: Portfolio, theme: Theme) -> impl IntoView {
    let Portfolio {
        profile,
        summary,
        skills,
        projects,
        articles,
        labels,
    } = portfolio;

    view! {
        <body>
            <div class="sprite" inner_html={assets::ICONS}></div>
            <div class="page">
                <div class="container">
                    <DarkModeToggle theme=theme label={labels.toggle_theme}/>
                    <div class="layout">
                        <aside class="sidebar">
                            <ProfileCard profile=profile/>
                        </aside>
                        <main class="content">
                            <SummaryCard title={labels.summary} summary=summary/>
                            <SkillBadges title={labels.skills} skills=skills/>
                            <ProjectsSection heading={labels.projects} projects=projects/>
                            <ArticlesSection heading={labels.articles} articles=articles/>
                        </main>
                    </div>
                </div>
            </div>
        </body>
    }
}

/// Whole document: doctype, root element, head and body. Only the root
/// element's class depends on the theme.
#[component]
pub fn Document(portfolio: Portfolio, options: PageOptions) -> impl IntoView {
    let PageOptions { theme, stylesheet } = options;
    let title = portfolio.profile.name.clone();
    let lang = portfolio.labels.lang.clone();
    let content = view! {
        <PageHead title=title stylesheet=stylesheet/>
        <PageRoot portfolio=portfolio theme=theme/>
    };

    match theme.root_class() {
        "" => view! {
            <!DOCTYPE html>
            <html lang={lang}>{content}</html>
        }
        .into_any(),
        class => view! {
            <!DOCTYPE html>
            <html lang={lang} class={class}>{content}</html>
        }
        .into_any(),
    }
}

/// Render the full document in the given theme.
pub fn render_page(portfolio: &Portfolio, options: &PageOptions) -> String {
    let portfolio = portfolio.clone();
    let options = *options;
    render_view(move || view! { <Document portfolio=portfolio options=options/> })
}
