//! The page as published: profile, skills, projects and articles.

use chrono::NaiveDate;

use crate::models::*;

pub const PROFILE_NAME: &str = "Matheus Barreto";
pub const PROFILE_IMAGE_URL: &str = "https://i.imgur.com/07u43SF.jpeg";
pub const EMAIL: &str = "mtbarrdev@gmail.com";

const SUMMARY: &str = "Comecei a programar como hobby quando tinha 9 anos, lá em 2010. \
Minhas linguagens favoritas são Java e Kotlin, nas quais gosto de trabalhar. \
Trabalho profissionalmente como desenvolvedor desde 2018, e você geralmente me encontrará \
trabalhando em projetos de Minecraft no meu tempo livre.";

const ARTICLE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2023, 5, 15) {
    Some(date) => date,
    None => panic!("invalid article date"),
};

const SKILLS: [&str; 14] = [
    "Kotlin",
    "Jetpack Compose",
    "Java",
    "Spring Framework",
    "JavaScript",
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "Express",
    "MongoDB",
    "PostgreSQL",
    "GraphQL",
    "Docker",
];

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("https://github.com/mtbarr", SocialIcon::Github),
        SocialLink::new("https://twitter.com/mawbarrx", SocialIcon::Twitter),
        SocialLink::new(
            "https://www.linkedin.com/in/matheusbarret",
            SocialIcon::Linkedin,
        ),
    ]
}

pub fn profile() -> Profile {
    Profile {
        name: PROFILE_NAME.to_string(),
        photo_url: PROFILE_IMAGE_URL.to_string(),
        photo_alt: "Perfil".to_string(),
        email: EMAIL.to_string(),
        links: social_links(),
    }
}

pub fn skills() -> Vec<String> {
    SKILLS.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![Project::new(
        "translatica",
        "Biblioteca Java para gerenciar mensagens e traduções.",
        &["Java"],
        "https://github.com/mtbarr/translatica",
    )]
}

pub fn articles() -> Vec<Article> {
    vec![Article {
        title: "Boas práticas de código em java".to_string(),
        date: ARTICLE_DATE,
        description: "Um breve compilado de boas práticas de código em java que pode salvar sua aplicação."
            .to_string(),
        link: "#".to_string(),
    }]
}

pub fn labels() -> SectionLabels {
    SectionLabels {
        lang: "pt-BR".to_string(),
        summary: "Resumo".to_string(),
        skills: "Habilidades".to_string(),
        projects: "Projetos em Destaque".to_string(),
        articles: "Artigos Recentes".to_string(),
        toggle_theme: "Alternar modo escuro".to_string(),
    }
}

/// The complete published page.
pub fn portfolio() -> Portfolio {
    Portfolio {
        profile: profile(),
        summary: SUMMARY.to_string(),
        skills: skills(),
        projects: projects(),
        articles: articles(),
        labels: labels(),
    }
}
