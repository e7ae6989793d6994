use maud::{html, Markup, DOCTYPE};

use crate::{names, utils, views::components};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@1.9.12" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml";
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li {
                        a href=(names::GENERATE_URL) {
                            strong { "WikiQuiz " span."brand-accent" { "AI" } }
                        }
                    }
                }
                ul {
                    li { (components::nav_link(names::GENERATE_URL, html! { "Generate Quiz" })) }
                    li { (components::nav_link(names::HISTORY_URL, html! { "Past Quizzes" })) }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - WikiQuiz")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - WikiQuiz" }
        (body)
    }
}

/// Full page for plain navigation, `main` fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
