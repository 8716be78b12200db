//! The page shell and shared styles for every server rendered page.

use expense_tracker_common::{CURRENCY_SYMBOL, markup::FLASH_FADE_KEYFRAMES};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::endpoints;

pub const LINK_STYLE: &str = "font-medium text-emerald-700 underline \
    underline-offset-2 hover:text-emerald-600 dark:text-emerald-400 \
    dark:hover:text-emerald-300";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full rounded-lg bg-emerald-600 px-4 py-2.5 \
    text-sm font-semibold text-white shadow-sm hover:enabled:bg-emerald-700 \
    disabled:cursor-wait disabled:bg-emerald-800 dark:bg-emerald-500 \
    dark:hover:enabled:bg-emerald-600";

/// Delete buttons sit inside a table row, so they look like links.
pub const BUTTON_DELETE_STYLE: &str = "cursor-pointer border-none bg-transparent p-0 \
    font-medium text-rose-600 underline underline-offset-2 hover:text-rose-500 \
    dark:text-rose-400";

pub const FORM_CONTAINER_STYLE: &str = "mx-auto flex w-full max-w-md flex-col \
    gap-2 px-6 py-8 text-slate-900 dark:text-slate-100";
pub const FORM_LABEL_STYLE: &str = "mb-1.5 block text-sm font-medium \
    text-slate-700 dark:text-slate-200";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full rounded-lg border \
    border-slate-300 bg-white p-2.5 text-sm text-slate-900 \
    focus:border-emerald-500 focus:ring-emerald-500 \
    dark:border-slate-600 dark:bg-slate-800 dark:text-slate-100 \
    dark:placeholder-slate-400";

pub const TABLE_HEADER_STYLE: &str = "bg-slate-100 text-xs uppercase tracking-wide \
    text-slate-600 dark:bg-slate-800 dark:text-slate-300";
pub const TABLE_ROW_STYLE: &str = "border-b border-slate-200 bg-white \
    dark:border-slate-700 dark:bg-slate-900";
pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

pub const CATEGORY_BADGE_STYLE: &str = "inline-flex items-center rounded-full \
    bg-emerald-100 px-2.5 py-0.5 text-xs font-semibold text-emerald-800 \
    dark:bg-emerald-900 dark:text-emerald-200";

pub const PAGE_CONTAINER_STYLE: &str = "mx-auto flex w-full max-w-screen-lg flex-col \
    items-center gap-4 px-4 py-6 text-slate-900 dark:text-slate-100";

/// Loads the browser enhancements built by wasm-pack into `static/pkg`.
const FRONTEND_BOOTSTRAP: &str = r#"
    import init from "/static/pkg/expense_tracker_frontend.js";

    init().catch((error) => console.error("Could not load page enhancements", error));
"#;

/// Extra content for a page's `<head>`.
pub enum HeadElement {
    /// A script loaded from a URL.
    ScriptLink(String),
    /// An inline script.
    ScriptSource(PreEscaped<String>),
    /// An inline stylesheet.
    Style(PreEscaped<String>),
}

/// The animation the enhancement layer plays on a flash message before
/// removing it.
fn flash_keyframes() -> String {
    format!(
        "@keyframes {FLASH_FADE_KEYFRAMES} {{ \
            from {{ transform: translateX(0); opacity: 1; }} \
            to {{ transform: translateX(100%); opacity: 0; }} \
        }}"
    )
}

/// Wrap `content` in the common page shell.
///
/// Every page gets the compiled stylesheet, the flash animation and the
/// WebAssembly enhancements. `head_elements` are added after those.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en-IN"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }
                link rel="stylesheet" href="/static/main.css";

                style
                {
                    (PreEscaped(flash_keyframes()))
                    // Chart tooltips must float over the bottom navigation.
                    ".echarts-tooltip { z-index: 30 !important; }"
                }

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(src) => script src=(src) {}
                        HeadElement::ScriptSource(source) => script { (source) }
                        HeadElement::Style(css) => style { (css) }
                    }
                }

                script type="module" { (PreEscaped(FRONTEND_BOOTSTRAP)) }
            }

            body class="min-h-screen bg-slate-50 pb-24 lg:pb-0 dark:bg-slate-950"
            {
                (content)
            }
        }
    }
}

/// A full page explaining an error, with a link back to the expense list.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html! {
        main class="flex min-h-screen items-center justify-center px-4"
        {
            div class="max-w-lg text-center"
            {
                p class="text-7xl font-black text-emerald-600 lg:text-9xl dark:text-emerald-400"
                {
                    (header)
                }

                h1 class="mt-4 text-3xl font-bold text-slate-900 dark:text-white"
                {
                    (description)
                }

                p class="mt-3 text-lg text-slate-600 dark:text-slate-300" { (fix) }

                a
                    href=(endpoints::ROOT)
                    class="mt-8 inline-block rounded-lg bg-emerald-600 px-5 py-2.5
                        text-sm font-semibold text-white hover:bg-emerald-700"
                {
                    "Back to expenses"
                }
            }
        }
    };

    base(title, &[], &content)
}

/// Shows a rupee sign inside amount inputs wrapped in `.input-wrapper`.
pub fn rupee_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(format!(
        ".input-wrapper {{ position: relative; }} \
        .input-wrapper input[type=\"number\"] {{ padding-left: 1.6rem; }} \
        .input-wrapper::before {{ \
            content: '{CURRENCY_SYMBOL}'; \
            position: absolute; \
            left: 0.7rem; \
            top: 50%; \
            transform: translateY(-50%); \
            pointer-events: none; \
            color: rgb(100 116 139); \
        }}"
    )))
}

/// An inline link for use in running text.
pub fn link(url: &str, text: &str) -> Markup {
    html! { a href=(url) class=(LINK_STYLE) { (text) } }
}
